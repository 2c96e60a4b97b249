//! CLI tests for `dotpath get`, `dotpath set` and `dotpath split`.
//!
//! Spawns the binary and verifies output, exit codes and file contents.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use dotpath::exit_codes;
use dotpath::io::config::{DotpathConfig, write_config};
use serde_json::{Value, json};

fn dotpath(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dotpath"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("run dotpath")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("parse")
}

#[test]
fn get_prints_value_and_exits_ok() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("doc.json"), r#"{"a": {"b": [10, 20]}}"#).expect("write");

    let output = dotpath(temp.path(), &["get", "doc.json", "a.b.1"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "20");
}

#[test]
fn get_missing_key_exits_not_found() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("doc.json"), r#"{"a": {}}"#).expect("write");

    let output = dotpath(temp.path(), &["get", "doc.json", "a.b"]);
    assert_eq!(output.status.code(), Some(exit_codes::NOT_FOUND));
    assert!(String::from_utf8_lossy(&output.stderr).contains("non-existent property 'b'"));
}

#[test]
fn set_writes_document_in_place() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("doc.json");
    fs::write(&path, r#"{"list": [1, 2], "name": null}"#).expect("write");

    let output = dotpath(temp.path(), &["set", "doc.json", "list.1", "3"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let output = dotpath(temp.path(), &["set", "doc.json", "list.2", "4"]);
    assert_eq!(output.status.code(), Some(exit_codes::NOT_FOUND));
    let output = dotpath(temp.path(), &["set", "doc.json", "name", "42", "--string"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));

    assert_eq!(read_json(&path), json!({"list": [1, 3], "name": "42"}));
}

#[test]
fn set_unresolved_leaves_document_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("doc.json");
    fs::write(&path, "{}").expect("write");

    let output = dotpath(temp.path(), &["set", "doc.json", "a.b", "1"]);
    assert_eq!(output.status.code(), Some(exit_codes::NOT_FOUND));
    assert_eq!(fs::read_to_string(&path).expect("read"), "{}");
}

#[test]
fn unreadable_document_exits_invalid() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("doc.json"), "not json").expect("write");

    let output = dotpath(temp.path(), &["get", "doc.json", "a"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn config_separator_applies_to_split() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = DotpathConfig {
        separator: "/".to_string(),
        ..DotpathConfig::default()
    };
    write_config(&temp.path().join("dotpath.toml"), &cfg).expect("write config");

    let output = dotpath(temp.path(), &["split", "a.b/c"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "a.b\nc\n");
}
