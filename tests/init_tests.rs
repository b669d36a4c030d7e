//! Integration tests for init and config commands

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::newshead_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    // Check .newshead and content directories exist
    assert!(temp.path().join(".newshead").exists());
    assert!(temp.path().join("content").exists());

    // Check config.toml exists
    let config_path = temp.path().join(".newshead/config.toml");
    assert!(config_path.exists());

    // Check config content
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("site = \"https://example.org\""));
    assert!(content.contains("suppress_noindex = false"));
}

#[test]
fn test_init_with_site() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--site")
        .arg("https://news.example")
        .assert()
        .success();

    let config_path = temp.path().join(".newshead/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("site = \"https://news.example\""));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    // First init succeeds
    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    // Second init fails
    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure();
}

#[test]
fn test_config_get_site() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    newshead_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("site")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.org"));
}

#[test]
fn test_config_set_suppress_noindex() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    newshead_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("suppress_noindex")
        .arg("true")
        .assert()
        .success();

    newshead_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("suppress_noindex")
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    newshead_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("site = "))
        .stdout(predicate::str::contains("suppress_noindex = false"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    newshead_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_outside_content_root_fails() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("site")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("newshead init"));
}

#[test]
fn test_newshead_root_env_var() {
    let temp = TempDir::new().unwrap();

    newshead_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success();

    // Run from an unrelated directory with NEWSHEAD_ROOT pointing at the root
    let elsewhere = TempDir::new().unwrap();
    newshead_cmd()
        .current_dir(elsewhere.path())
        .env("NEWSHEAD_ROOT", temp.path())
        .arg("config")
        .arg("site")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.org"));
}
