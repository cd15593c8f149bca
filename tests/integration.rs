use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_tagdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    cmd()
        .write_stdin(fixture("panel.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("## Ext.Panel"))
        .stdout(predicate::str::contains("Extends: `Ext.Container`"))
        .stdout(predicate::str::contains("Aliases: `widget.panel`"))
        .stdout(predicate::str::contains("### Configs"))
        .stdout(predicate::str::contains("#### title"))
        .stdout(predicate::str::contains("### Methods"))
        .stdout(predicate::str::contains("* **options** (`Object`): Display options."))
        .stdout(predicate::str::contains(
            "  * **animate** (optional) (`Boolean`) — defaults to `true`",
        ))
        .stdout(predicate::str::contains("### Events"));
}

#[test]
fn stdin_mode_hides_private_members() {
    cmd()
        .write_stdin(fixture("panel.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("doRefresh").not());
}

#[test]
fn show_private_includes_them() {
    cmd()
        .arg("--show-private")
        .write_stdin(fixture("panel.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("#### doRefresh"));
}

#[test]
fn stdin_mode_json_format() {
    cmd()
        .args(["-f", "json"])
        .write_stdin(fixture("panel.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source_file\": \"<stdin>\""))
        .stdout(predicate::str::contains("\"Ext.Panel\""))
        .stdout(predicate::str::contains("\"tagname\": \"cfg\""))
        .stdout(predicate::str::contains("\"required\": true"));
}

#[test]
fn unknown_tag_warns_on_stderr() {
    cmd()
        .write_stdin(fixture("legacy.js"))
        .assert()
        .success()
        .stdout(predicate::str::contains("#### convert"))
        .stdout(predicate::str::contains("@bogus"))
        .stderr(predicate::str::contains("[tag] unknown tag: @bogus"));
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "html"])
        .write_stdin(fixture("panel.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("panel.js"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("panel.md")).unwrap();
    assert!(output.contains("## Ext.Panel"));
    assert!(output.contains("#### show"));
    assert!(!output.contains("doRefresh"));
}

#[test]
fn file_mode_json_extension() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("panel.js"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("panel.json")).unwrap();
    assert!(output.contains("\"Ext.Panel\""));
}

#[test]
fn file_mode_multiple_files() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("panel.js"))
        .arg(fixture_path("legacy.js"))
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown tag: @bogus"));

    assert!(dir.path().join("panel.md").exists());
    assert!(dir.path().join("legacy.md").exists());
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("panel.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}
