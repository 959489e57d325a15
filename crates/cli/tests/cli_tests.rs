//! CLI integration tests
use std::fs;
use std::path::PathBuf;

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("perlego").unwrap()
}

fn read_cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("perlego-read").unwrap()
}

const FIXTURE: &str = r#"{"title": "T", "author": "A", "url": "http://x", "date_published": "2020-01-02T03:04:05.000000Z", "content": "<p>Hi <b>there</b></p>"}"#;

fn fixture_file(tmp: &TempDir) -> PathBuf {
    let path = tmp.path().join("result.json");
    fs::write(&path, FIXTURE).unwrap();
    path
}

/// Write an executable stub standing in for the postlight-parser driver.
#[cfg(unix)]
fn stub_parser(tmp: &TempDir, script_body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = tmp.path().join("stub-parser");
    fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn test_read_file_input() {
    let tmp = TempDir::new().unwrap();
    read_cmd()
        .arg(fixture_file(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title":"T""#));
}

#[test]
fn test_read_stdin_input() {
    read_cmd()
        .arg("-")
        .write_stdin(FIXTURE)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""url":"http://x""#));
}

#[test]
fn test_read_json_round_trip() {
    let tmp = TempDir::new().unwrap();
    let assert = read_cmd().arg(fixture_file(&tmp)).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["title"], "T");
    assert_eq!(value["author"], "A");
    assert_eq!(value["date_published"], "2020-01-02T03:04:05.000000Z");
    assert_eq!(value["content"]["html"], "<p>Hi <b>there</b></p>");
    assert_eq!(value["content"]["markdown"], "Hi **there**");
    assert_eq!(value["content"]["text"], "Hi there");
}

#[test]
fn test_read_markdown_format() {
    let tmp = TempDir::new().unwrap();
    read_cmd()
        .args(["-f", "markdown"])
        .arg(fixture_file(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("# [T](http://x)"))
        .stdout(predicate::str::contains("Hi **there**"))
        .stdout(predicate::str::contains("date: 2020-01-02 03:04:05"))
        .stdout(predicate::str::contains("author(s): A"));
}

#[test]
fn test_read_text_format() {
    let tmp = TempDir::new().unwrap();
    read_cmd()
        .args(["-f", "text"])
        .arg(fixture_file(&tmp))
        .assert()
        .success()
        .stdout(predicate::str::contains("url: http://x"))
        .stdout(predicate::str::contains("Hi there"))
        .stdout(predicate::str::contains("**").not())
        .stdout(predicate::str::contains("](").not());
}

#[test]
fn test_read_body_width() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("long.json");
    fs::write(
        &path,
        r#"{"title": "T", "author": "A", "url": "http://x", "content": "<p>one two three four five six seven eight nine ten eleven twelve</p>"}"#,
    )
    .unwrap();

    let assert = read_cmd().args(["-f", "text", "-w", "20"]).arg(&path).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let body: Vec<&str> = stdout.lines().skip_while(|line| !line.starts_with("one")).collect();
    assert!(body.len() > 1);
    for line in body {
        assert!(line.chars().count() <= 20, "line too long: {line:?}");
    }
}

#[test]
fn test_read_invalid_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{this is not json").unwrap();

    read_cmd()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn test_read_unknown_format() {
    let tmp = TempDir::new().unwrap();
    read_cmd()
        .args(["-f", "yaml"])
        .arg(fixture_file(&tmp))
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("yaml"));
}

#[test]
fn test_extract_invalid_url() {
    cmd()
        .arg("notaurl")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[cfg(unix)]
#[test]
fn test_extract_subprocess_failure_propagates_exit_code() {
    let tmp = TempDir::new().unwrap();
    let stub = stub_parser(&tmp, "echo boom >&2\nexit 3");

    cmd()
        .args(["-p", stub.to_str().unwrap()])
        .arg("http://example.com/article")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("boom"))
        .stderr(predicate::str::contains("http://example.com/article"));
}

#[cfg(unix)]
#[test]
fn test_extract_skips_leading_banner() {
    let tmp = TempDir::new().unwrap();
    let fixture = fixture_file(&tmp);
    let stub = stub_parser(
        &tmp,
        &format!("echo 'postlight-parser v2.2.3'\ncat {}", fixture.display()),
    );

    cmd()
        .args(["-p", stub.to_str().unwrap(), "-f", "markdown"])
        .arg("http://example.com/article")
        .assert()
        .success()
        .stdout(predicate::str::contains("# [T](http://x)"));
}

#[cfg(unix)]
#[test]
fn test_extract_tool_reported_error() {
    let tmp = TempDir::new().unwrap();
    let stub = stub_parser(
        &tmp,
        r#"printf '{"error": true, "messages": "no parse candidates"}\n'"#,
    );

    cmd()
        .args(["-p", stub.to_str().unwrap()])
        .arg("http://example.com/article")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no parse candidates"))
        .stderr(predicate::str::contains("http://example.com/article"));
}

#[cfg(unix)]
#[test]
fn test_extract_garbage_stdout() {
    let tmp = TempDir::new().unwrap();
    let stub = stub_parser(&tmp, "echo 'no json here at all'");

    cmd()
        .args(["-p", stub.to_str().unwrap()])
        .arg("http://example.com/article")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_extract_missing_parser_binary() {
    cmd()
        .args(["-p", "/nonexistent/postlight-parser"])
        .arg("http://example.com/article")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());
}
