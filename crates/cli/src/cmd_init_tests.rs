#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::test_utils::{create_tree, load_config};

#[test]
fn writes_detected_scopes() {
    let tmp = TempDir::new().unwrap();
    create_tree(
        tmp.path(),
        &[
            ("backend-python/requirements.txt", "fastapi\n"),
            ("pwa/package.json", "{}"),
        ],
    );

    let code = run_in(&InitArgs::default(), tmp.path()).unwrap();
    assert_eq!(code, ExitCode::Success);

    let config = load_config(tmp.path());
    assert_eq!(
        config.scope_allow_list().unwrap(),
        &["repo".to_string(), "backend-python".to_string(), "pwa".to_string()]
    );
}

#[test]
fn explicit_scopes_win_over_detection() {
    let tmp = TempDir::new().unwrap();
    create_tree(tmp.path(), &[("pwa/package.json", "{}")]);
    let args = InitArgs {
        scopes: Some("api,web".to_string()),
        ..InitArgs::default()
    };

    run_in(&args, tmp.path()).unwrap();
    let config = load_config(tmp.path());
    assert_eq!(
        config.scope_allow_list().unwrap(),
        &["api".to_string(), "web".to_string()]
    );
}

#[test]
fn refuses_to_overwrite_without_force() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("scopelint.toml"), "# mine\n").unwrap();

    let code = run_in(&InitArgs::default(), tmp.path()).unwrap();
    assert_eq!(code, ExitCode::ConfigError);
    assert_eq!(
        fs::read_to_string(tmp.path().join("scopelint.toml")).unwrap(),
        "# mine\n"
    );
}

#[test]
fn force_overwrites() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("scopelint.toml"), "# mine\n").unwrap();
    let args = InitArgs {
        force: true,
        ..InitArgs::default()
    };

    assert_eq!(run_in(&args, tmp.path()).unwrap(), ExitCode::Success);
    assert!(load_config(tmp.path()).scope_allow_list().is_some());
}

#[test]
fn duplicate_scopes_are_rejected_before_writing() {
    let tmp = TempDir::new().unwrap();
    let args = InitArgs {
        scopes: Some("repo,repo".to_string()),
        ..InitArgs::default()
    };

    let err = run_in(&args, tmp.path()).unwrap_err();
    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Argument(_))));
    assert!(!tmp.path().join("scopelint.toml").exists());
}
