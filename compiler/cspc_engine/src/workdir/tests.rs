use super::*;
use crate::testing::cwd_test_guard;

#[test]
fn test_enter_and_restore() {
    let _serial = cwd_test_guard();
    let temp = tempfile::tempdir().unwrap();
    let before = env::current_dir().unwrap();

    {
        let guard = ScopedWorkDir::enter(temp.path()).unwrap();
        assert_eq!(guard.original(), before.as_path());
        assert_eq!(
            env::current_dir().unwrap().canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
fn test_restore_happens_on_unwind_path() {
    let _serial = cwd_test_guard();
    let temp = tempfile::tempdir().unwrap();
    let before = env::current_dir().unwrap();

    let outcome = std::panic::catch_unwind(|| {
        let _guard = ScopedWorkDir::enter(temp.path()).unwrap();
        panic!("mid-compile failure");
    });

    assert!(outcome.is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}

#[test]
fn test_enter_nonexistent_directory_fails_cleanly() {
    let _serial = cwd_test_guard();
    let before = env::current_dir().unwrap();

    let result = ScopedWorkDir::enter(Path::new("/nonexistent/cspc-workdir"));
    assert!(result.is_err());
    assert_eq!(env::current_dir().unwrap(), before);
}
