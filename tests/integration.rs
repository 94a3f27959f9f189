use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_throwsdoc")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> serde_json::Value {
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_json() {
    let input = std::fs::read_to_string(fixture_path("streams.json")).unwrap();

    let assert = cmd().write_stdin(input).assert().success();
    let records = stdout_json(&assert);
    let names: Vec<&str> = records
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "com.example.io.Derived.m",
            "com.example.io.Base.Base",
            "com.example.io.Base.m",
            "com.example.io.Impl.op",
        ]
    );
}

#[test]
fn stdin_rejects_invalid_json() {
    cmd()
        .write_stdin("{ not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid model on stdin"));
}

// -- file mode --

#[test]
fn inherited_exception_on_overriding_method() {
    let assert = cmd()
        .args(["-c", "com.example.io.Derived"])
        .arg(fixture_path("streams.json"))
        .assert()
        .success();

    let records = stdout_json(&assert);
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["name"], "com.example.io.Derived.m");
    assert_eq!(records[0]["throwsTags"][0]["exception"], "java.io.IOException");
    assert_eq!(
        records[0]["throwsTags"][0]["comment"],
        "if the underlying java.io.InputStream is closed"
    );
}

#[test]
fn interface_exception_on_implementing_method() {
    let assert = cmd()
        .args(["-c", "com.example.io.Impl"])
        .arg(fixture_path("streams.json"))
        .assert()
        .success();

    let records = stdout_json(&assert);
    let tags = records[0]["throwsTags"].as_array().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["exception"], "UnknownCheckedException");
    assert_eq!(tags[0]["comment"], "or never");
    assert_eq!(tags[1]["exception"], "java.lang.IllegalStateException");
    assert_eq!(tags[1]["comment"], "if the operation was already performed");
}

#[test]
fn root_class_ends_inheritance() {
    let assert = cmd()
        .args(["-c", "com.example.io.Derived", "--root-class", "com.example.io.Base"])
        .arg(fixture_path("streams.json"))
        .assert()
        .success();

    let records = stdout_json(&assert);
    assert_eq!(records[0]["name"], "com.example.io.Derived.m");
    assert_eq!(records[0]["throwsTags"].as_array().unwrap().len(), 0);
}

#[test]
fn text_format_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("specs.txt");

    cmd()
        .args(["-f", "text", "-o", out.to_str().unwrap()])
        .arg(fixture_path("streams.json"))
        .assert()
        .success();

    let output = std::fs::read_to_string(out).unwrap();
    assert_eq!(
        output,
        "com.example.io.Derived.m()\n\
         \x20 @throws java.io.IOException if the underlying java.io.InputStream is closed\n\
         com.example.io.Base.Base(java.lang.String[] names, int size)\n\
         \x20 @throws java.lang.IllegalArgumentException if size is < 0\n\
         com.example.io.Base.m()\n\
         \x20 @throws java.io.IOException if the underlying java.io.InputStream is closed\n\
         com.example.io.Impl.op()\n\
         \x20 @throws UnknownCheckedException or never\n\
         \x20 @throws java.lang.IllegalStateException if the operation was already performed\n"
    );
}

#[test]
fn directory_input_and_interfaces() {
    let dir = TempDir::new().unwrap();
    std::fs::copy(fixture_path("streams.json"), dir.path().join("streams.json")).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let assert = cmd()
        .arg("--include-interfaces")
        .arg(dir.path().to_str().unwrap())
        .assert()
        .success();

    let records = stdout_json(&assert);
    assert!(records
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r["name"] == "com.example.io.Iface.op"));
}

#[test]
fn failed_class_reported_others_written() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("specs.json");

    cmd()
        .args(["-o", out.to_str().unwrap()])
        .arg(fixture_path("broken.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("com.example.broken.NoPosition"))
        .stderr(predicate::str::contains("missing source position"))
        .stderr(predicate::str::contains("1 of 2 classes failed extraction"));

    let records: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);
    assert_eq!(records[0]["name"], "com.example.broken.Fine.run");
}

#[test]
fn unknown_class_fails() {
    cmd()
        .args(["-c", "com.example.Missing"])
        .arg(fixture_path("streams.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown class: com.example.Missing"));
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .arg(fixture_path("streams.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn no_matching_inputs_fails() {
    cmd()
        .arg("/nonexistent/path/*.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no model files found"));
}
