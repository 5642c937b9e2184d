use super::*;

#[test]
fn test_create_then_status() {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("db");
    let db = Database::create(&dbpath).unwrap();
    let status = db.status().unwrap();
    assert_eq!(status.current, "root");
    assert_eq!(status.payload, "ENTER YOUR NOTES HERE\n");
}

#[test]
fn test_push_creates_child_and_index_entry() {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("db");
    let mut db = Database::create(&dbpath).unwrap();
    db.push("alpha", "hello").unwrap();

    assert_eq!(db.current(), "root/alpha");
    assert_eq!(db.payload_read().unwrap(), "hello\n");
    assert_eq!(index::read(&dbpath).unwrap(), vec!["root/alpha"]);
    assert_eq!(history::head(&dbpath).unwrap().as_deref(), Some("root/alpha"));
}

#[test]
fn test_pop_deletes_subtree() {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("db");
    let mut db = Database::create(&dbpath).unwrap();
    db.push("alpha", "hello").unwrap();
    db.pop().unwrap();

    assert_eq!(db.current(), "root");
    assert!(!dbpath.join("root/alpha").exists());
    assert!(index::read(&dbpath).unwrap().is_empty());
    assert_eq!(history::head(&dbpath).unwrap().as_deref(), Some("root"));
}

#[test]
fn test_payload_append_updates_mtime() {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("db");
    let mut db = Database::create(&dbpath).unwrap();
    db.push("alpha", "hello").unwrap();

    let m1 = db.status().unwrap().mtime;
    std::thread::sleep(std::time::Duration::from_millis(1100));
    db.payload_append("world").unwrap();
    let m2 = db.status().unwrap().mtime;

    assert_eq!(db.payload_read().unwrap(), "hello\n\nworld");
    assert!(m2 >= m1);
}

#[test]
fn test_match_scope_and_invert() {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("db");
    let mut db = Database::create(&dbpath).unwrap();
    db.push("a", "_").unwrap();
    db.up().unwrap();
    db.push("b", "_").unwrap();
    db.push("b-child", "_").unwrap();
    db.switch("root/b").unwrap();

    let listed = db.list().unwrap();
    assert_eq!(listed, vec!["root/b", "root/b-child"]);

    let inverted = db.match_("child", search::MatchFlags::INVERT).unwrap();
    assert_eq!(inverted, vec!["root/b"]);
}

#[test]
fn test_at_root_rejections() {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("db");
    let mut db = Database::create(&dbpath).unwrap();

    assert!(matches!(db.up(), Err(Error::AtRoot(_))));
    assert!(matches!(db.delete("root"), Err(Error::CannotDeleteRoot(_))));
}

#[test]
fn test_delete_under_cursor_falls_back_to_root() {
    let dir = tempfile::tempdir().unwrap();
    let dbpath = dir.path().join("db");
    let mut db = Database::create(&dbpath).unwrap();
    db.push("a", "_").unwrap();
    db.push("b", "_").unwrap();

    db.delete("root/a").unwrap();

    assert_eq!(db.current(), "root");
    assert_eq!(history::head(&dbpath).unwrap().as_deref(), Some("root"));
}
