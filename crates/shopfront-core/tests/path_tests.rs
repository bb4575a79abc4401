use shopfront_core::*;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_resolve_data_path_with_explicit() {
    let result = resolve_data_path(Some("/explicit/data")).unwrap();
    assert_eq!(result, PathBuf::from("/explicit/data"));
}

#[test]
fn test_resolve_data_path_priority() {
    unsafe {
        env::set_var(DATA_PATH_ENV, "/env/data");
    }

    // Explicit should override env var
    let explicit = resolve_data_path(Some("/explicit/root")).unwrap();
    assert_eq!(explicit, PathBuf::from("/explicit/root"));

    let from_env = resolve_data_path(None).unwrap();
    assert_eq!(from_env, PathBuf::from("/env/data"));

    unsafe {
        env::remove_var(DATA_PATH_ENV);
    }
}

#[test]
fn test_expand_tilde() {
    let Some(home) = env::var_os("HOME") else {
        return;
    };
    let home = PathBuf::from(home);

    assert_eq!(expand_tilde("~/.shopfront"), home.join(".shopfront"));
    assert_eq!(expand_tilde("~"), home);
    assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    assert_eq!(expand_tilde("relative/~"), PathBuf::from("relative/~"));
}

#[test]
fn test_ensure_dir_creates_nested() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("a").join("b");

    ensure_dir(&nested).unwrap();
    assert!(nested.is_dir());

    // Idempotent
    ensure_dir(&nested).unwrap();
}
