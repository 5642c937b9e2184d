use super::*;

#[test]
fn test_second_acquire_is_locked() {
    let dir = tempfile::tempdir().unwrap();
    let first = Lock::acquire(dir.path()).unwrap();
    let second = Lock::acquire(dir.path());
    assert!(matches!(second, Err(crate::Error::Locked(_))));
    drop(first);
    assert!(Lock::acquire(dir.path()).is_ok());
}
