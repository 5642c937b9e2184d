use super::*;

#[test]
fn test_append_is_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    append(dir.path(), "root").unwrap();
    append(dir.path(), "root/a").unwrap();
    assert_eq!(head(dir.path()).unwrap().as_deref(), Some("root/a"));
}

#[test]
fn test_head_of_absent_history_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(head(dir.path()).unwrap(), None);
}

#[test]
fn test_read_bounded_count() {
    let dir = tempfile::tempdir().unwrap();
    for path in ["root", "root/a", "root/a/b"] {
        append(dir.path(), path).unwrap();
    }
    let text = read(dir.path(), Some(2)).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["root/a/b", "root/a"]);
}

#[test]
fn test_read_unbounded_returns_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    append(dir.path(), "root").unwrap();
    append(dir.path(), "root/a").unwrap();
    let all = read(dir.path(), None).unwrap();
    assert_eq!(all.lines().count(), 2);
}
