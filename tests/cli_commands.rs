//! Tests for the CLI commands run through their `execute` entry points

use std::{fs, path::PathBuf};

use tempfile::TempDir;
use userdi::{
    Error,
    cli::commands::{
        demo::{self, DemoArgs},
        get::{self, GetArgs},
        list::{self, ListArgs},
    },
};

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("users.json");
    fs::write(
        &path,
        r#"{
            "users": [
                { "email": "seed1@email.com", "name": "seed1", "password": "secret" },
                { "email": "seed2@email.com", "name": "seed2", "password": "secret" }
            ]
        }"#,
    )
    .expect("Failed to write config");
    path
}

#[test]
fn test_demo_runs_with_defaults() {
    demo::execute(DemoArgs { config: None }).expect("demo should succeed");
}

#[test]
fn test_demo_runs_with_seeded_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir);

    demo::execute(DemoArgs {
        config: Some(config),
    })
    .expect("demo should succeed with seed users");
}

#[test]
fn test_get_unknown_email_is_user_not_found() {
    let err = get::execute(GetArgs {
        email: "ghost@email.com".to_string(),
        config: None,
        json: false,
    })
    .expect_err("lookup of an unknown email should fail");

    match err.downcast_ref::<Error>() {
        Some(Error::UserNotFound { email }) => assert_eq!(email, "ghost@email.com"),
        other => panic!("expected UserNotFound, got {other:?}"),
    }
    assert_eq!(err.to_string(), "user not found: ghost@email.com");
}

#[test]
fn test_get_finds_seeded_user() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir);

    get::execute(GetArgs {
        email: "seed2@email.com".to_string(),
        config: Some(config),
        json: true,
    })
    .expect("seeded user should be found");
}

#[test]
fn test_list_prints_seeded_users_as_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir);

    list::execute(ListArgs {
        config: Some(config),
        json: true,
    })
    .expect("list should succeed");
}

#[test]
fn test_list_without_users_succeeds() {
    list::execute(ListArgs {
        config: None,
        json: false,
    })
    .expect("empty list should succeed");
}

#[test]
fn test_missing_config_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = list::execute(ListArgs {
        config: Some(temp_dir.path().join("absent.json")),
        json: false,
    })
    .expect_err("missing config should fail");

    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Io { .. })));
}
