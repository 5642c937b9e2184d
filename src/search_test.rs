use super::*;

#[test]
fn test_list_is_empty_sterm_no_invert() {
    assert!(matches("root/b", "", "root/b", MatchFlags::empty()));
    assert!(!matches("root/a", "", "root/b", MatchFlags::empty()));
}

#[test]
fn test_invert_negates_sterm_not_scope() {
    assert!(!matches("root/b-child", "child", "root/b", MatchFlags::INVERT));
    assert!(matches("root/b", "child", "root/b", MatchFlags::INVERT));
    assert!(!matches("other/b", "child", "root/b", MatchFlags::INVERT));
}

#[test]
fn test_filter_preserves_sorted_order() {
    let entries = vec!["root/a".to_string(), "root/b".to_string(), "root/b-child".to_string()];
    let out = filter(&entries, "", "root/b", MatchFlags::empty());
    assert_eq!(out, vec!["root/b", "root/b-child"]);
}
