//! End-to-end scenarios exercising the public `framedb` API against a real
//! temporary directory tree, one handle at a time.

use framedb::{Database, Error, MatchFlags};

fn new_db() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("notes");
    (dir, dbpath)
}

#[test]
fn init_then_status_reports_root() {
    let (_dir, dbpath) = new_db();
    let db = Database::create(&dbpath).unwrap();

    let status = db.status().unwrap();
    assert_eq!(status.current, "root");
    assert!(!status.payload.is_empty());
    assert!(status.mtime > 0);
}

#[test]
fn push_creates_child_and_registers_it() {
    let (_dir, dbpath) = new_db();
    let mut db = Database::create(&dbpath).unwrap();

    db.push("groceries", "buy milk").unwrap();

    assert_eq!(db.current(), "root/groceries");
    assert_eq!(db.payload_read().unwrap(), "buy milk\n");
    assert_eq!(db.list().unwrap(), vec!["root/groceries"]);
}

#[test]
fn pop_deletes_the_subtree_it_leaves() {
    let (_dir, dbpath) = new_db();
    let mut db = Database::create(&dbpath).unwrap();

    db.push("groceries", "buy milk").unwrap();
    db.push("produce", "apples").unwrap();
    db.pop().unwrap();

    assert_eq!(db.current(), "root/groceries");
    assert!(!dbpath.join("root/groceries/produce").exists());

    db.pop().unwrap();
    assert_eq!(db.current(), "root");
    assert!(!dbpath.join("root/groceries").exists());
    assert!(db.list().unwrap().is_empty());
}

#[test]
fn payload_append_preserves_prior_content_and_bumps_mtime() {
    let (_dir, dbpath) = new_db();
    let mut db = Database::create(&dbpath).unwrap();
    db.push("journal", "day one").unwrap();

    let before = db.status().unwrap().mtime;
    std::thread::sleep(std::time::Duration::from_millis(1100));
    db.payload_append("day two").unwrap();
    let after = db.status().unwrap();

    assert_eq!(after.payload, "day one\n\nday two");
    assert!(after.mtime >= before);
}

#[test]
fn match_scopes_to_current_node_and_invert_negates_term() {
    let (_dir, dbpath) = new_db();
    let mut db = Database::create(&dbpath).unwrap();

    db.push("work", "_").unwrap();
    db.push("reports", "_").unwrap();
    db.up().unwrap();
    db.push("meetings", "_").unwrap();
    db.switch("root/work").unwrap();

    let all = db.list().unwrap();
    assert_eq!(all, vec!["root/work", "root/work/meetings", "root/work/reports"]);

    let matched = db.match_("reports", MatchFlags::empty()).unwrap();
    assert_eq!(matched, vec!["root/work/reports"]);

    let inverted = db.match_("reports", MatchFlags::INVERT).unwrap();
    assert_eq!(inverted, vec!["root/work", "root/work/meetings"]);
}

#[test]
fn match_from_root_ignores_the_cursor() {
    let (_dir, dbpath) = new_db();
    let mut db = Database::create(&dbpath).unwrap();

    db.push("work", "_").unwrap();
    db.push("reports", "_").unwrap();
    db.switch("root").unwrap();
    db.push("personal", "_").unwrap();

    db.switch("root/personal").unwrap();
    let scoped_to_cursor = db.match_("reports", MatchFlags::empty()).unwrap();
    assert!(scoped_to_cursor.is_empty());

    let scoped_to_root = db.match_from_root("reports", MatchFlags::empty()).unwrap();
    assert_eq!(scoped_to_root, vec!["root/work/reports"]);
}

#[test]
fn root_rejects_up_and_delete() {
    let (_dir, dbpath) = new_db();
    let mut db = Database::create(&dbpath).unwrap();

    assert!(matches!(db.up(), Err(Error::AtRoot(_))));
    assert!(matches!(db.delete("root"), Err(Error::CannotDeleteRoot(_))));
}

#[test]
fn second_open_of_a_live_database_is_locked() {
    let (_dir, dbpath) = new_db();
    let _db = Database::create(&dbpath).unwrap();

    let second = Database::open(&dbpath);
    assert!(matches!(second, Err(Error::Locked(_))));
}

#[test]
fn open_close_round_trip_preserves_cursor() {
    let (_dir, dbpath) = new_db();
    {
        let mut db = Database::create(&dbpath).unwrap();
        db.push("a", "_").unwrap();
        db.close();
    }

    let db = Database::open(&dbpath).unwrap();
    assert_eq!(db.current(), "root/a");
}

#[test]
fn init_against_existing_dbpath_fails_without_touching_it() {
    let (_dir, dbpath) = new_db();
    let mut db = Database::create(&dbpath).unwrap();
    db.push("keepme", "do not lose me").unwrap();
    db.close();

    assert!(matches!(Database::create(&dbpath), Err(Error::AlreadyExists(_))));

    let db = Database::open_without_lock(&dbpath).unwrap();
    assert_eq!(db.current(), "root/keepme");
    assert_eq!(db.payload_read().unwrap(), "do not lose me\n");
}
