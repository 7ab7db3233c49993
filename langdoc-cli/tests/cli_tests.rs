use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn langdoc() -> Command {
    Command::cargo_bin("langdoc").unwrap()
}

fn write_json(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn test_keys_requires_exactly_one_action() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":"x"}"#);

    langdoc()
        .args(["keys", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--flatten or --nest"));

    langdoc()
        .args(["keys", &input, "--flatten", "--nest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--flatten or --nest"));
}

#[test]
fn test_keys_missing_input_fails() {
    langdoc()
        .args(["keys", "/no/such/file.json", "--flatten", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot access"));
}

#[test]
fn test_keys_flatten_writes_output() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":{"greeting":"hi","bye":"bye"}}"#);
    let output = dir.path().join("out.json");

    langdoc()
        .args(["keys", &input, output.to_str().unwrap(), "--flatten", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flattening JSON keys..."));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["a.greeting"], "hi");
    assert_eq!(written["a.bye"], "bye");
}

#[test]
fn test_keys_nest_round_trip() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "flat.json", r#"{"a.greeting":"hi","top":"level"}"#);
    let output = dir.path().join("nested.json");

    langdoc()
        .args(["keys", &input, output.to_str().unwrap(), "--nest", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nesting JSON keys..."));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["a"]["greeting"], "hi");
    assert_eq!(written["top"], "level");
}

#[test]
fn test_keys_nest_conflicting_paths_fail() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "bad.json", r#"{"a":"scalar","a.b":"v"}"#);

    langdoc()
        .args(["keys", &input, "--nest", "--force", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn test_keys_output_conflict_without_force() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":{"b":"v"}}"#);
    let output = write_json(&dir, "out.json", r#"{}"#);

    langdoc()
        .args(["keys", &input, &output, "--flatten"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_keys_declined_prompt_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":{"b":"v"}}"#);
    let output = dir.path().join("out.json");

    langdoc()
        .args(["keys", &input, output.to_str().unwrap(), "--flatten"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("process aborted"));

    assert!(!output.exists());
}

#[test]
fn test_keys_confirmed_prompt_writes() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":{"b":"v"}}"#);
    let output = dir.path().join("out.json");

    langdoc()
        .args(["keys", &input, output.to_str().unwrap(), "--flatten"])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_keys_dry_run_skips_write() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":{"b":"v"}}"#);
    let output = dir.path().join("out.json");

    langdoc()
        .args(["keys", &input, output.to_str().unwrap(), "--flatten", "--force", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dry run"));

    assert!(!output.exists());
}

#[test]
fn test_keys_no_structural_change_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "flat.json", r#"{"a.b":"v"}"#);
    let output = dir.path().join("out.json");

    langdoc()
        .args(["keys", &input, output.to_str().unwrap(), "--flatten", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no structural changes"));

    assert!(!output.exists());
}

#[test]
fn test_strings_requires_an_action() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":"x"}"#);

    langdoc()
        .args(["strings", &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--duplicates"));
}

#[test]
fn test_strings_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    let input = write_json(
        &dir,
        "in.json",
        r#"{"a.greeting":"hi","a.hello":"hi","a.bye":"bye"}"#,
    );

    langdoc()
        .args(["strings", &input, "--duplicates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strings found with multiple keys: 1"))
        .stdout(predicate::str::contains("string: \"hi\""))
        .stdout(predicate::str::contains("key: \"a.greeting\""))
        .stdout(predicate::str::contains("key: \"a.hello\""));
}

#[test]
fn test_strings_rejects_non_string_values() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"a":42}"#);

    langdoc()
        .args(["strings", &input, "--duplicates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed input"));
}

#[test]
fn test_strings_word_and_char_counts() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "in.json", r#"{"x":"Hello {{name}}, welcome!"}"#);

    langdoc()
        .args(["strings", &input, "--words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total words: 2"));

    let counts = write_json(&dir, "counts.json", r#"{"x":"a b"}"#);
    langdoc()
        .args(["strings", &counts, "--chars"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total characters: 2"));

    langdoc()
        .args(["strings", &counts, "--chars", "--include-spaces"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total characters (including spaces): 3"));
}
