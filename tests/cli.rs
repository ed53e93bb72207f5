use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary isolated from the user's config and cache.
fn caseconv(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("caseconv").unwrap();
    cmd.current_dir(sandbox.path())
        .env("CASECONV_CACHE_DIR", sandbox.path().join("cache"))
        .env("XDG_CONFIG_HOME", sandbox.path().join("config"))
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn converts_to_requested_conventions() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["--quiet", "--to", "camel", "--to", "Train-Case", "hello", "world"])
        .assert()
        .success()
        .stdout("helloWorld\nHello-World\n");
}

#[test]
fn lists_every_convention_by_default() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .arg("parseXMLDocument")
        .assert()
        .success()
        .stdout(predicate::str::contains("parseXMLDocument (camelCase)"))
        .stdout(predicate::str::contains("parse_xml_document"))
        .stdout(predicate::str::contains("Parse-Xml-Document"))
        .stdout(predicate::str::contains("PARSExmldOCUMENT"));
}

#[test]
fn detect_only() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["--detect", "MAX_RETRY_COUNT"])
        .assert()
        .success()
        .stdout("CONSTANT_CASE\n");

    caseconv(&sandbox)
        .args(["--detect", "hello"])
        .assert()
        .success()
        .stdout("none\n");
}

#[test]
fn reads_stdin_per_line() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["--per-line", "--quiet", "--to", "snake"])
        .write_stdin("getUserName\nHTTPServer\n\nmax-retry-count\n")
        .assert()
        .success()
        .stdout("get_user_name\nhttp_server\nmax_retry_count\n");
}

#[test]
fn json_report() {
    let sandbox = TempDir::new().unwrap();
    let output = caseconv(&sandbox)
        .args(["-o", "json", "--to", "kebab", "userId"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["input"], "userId");
    assert_eq!(report["detected"], "camelCase");
    assert_eq!(report["tokens"], serde_json::json!(["user", "Id"]));
    assert_eq!(report["conversions"][0]["convention"], "kebab-case");
    assert_eq!(report["conversions"][0]["output"], "user-id");
}

#[test]
fn json_detection_of_unrecognized_input_is_null() {
    let sandbox = TempDir::new().unwrap();
    let output = caseconv(&sandbox)
        .args(["-o", "json", "--detect", "hello world"])
        .output()
        .unwrap();

    let detection: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(detection["detected"].is_null());
}

#[test]
fn last_input_is_remembered() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["--quiet", "--to", "flat", "Lord", "of", "the", "Rings"])
        .assert()
        .success();

    caseconv(&sandbox)
        .args(["--last", "--quiet", "--to", "title"])
        .assert()
        .success()
        .stdout("Lord of the Rings\n");
}

#[test]
fn no_cache_skips_remembering() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["--no-cache", "--quiet", "--to", "snake", "fooBar"])
        .assert()
        .success();

    caseconv(&sandbox)
        .arg("--last")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No previous input"));
}

#[test]
fn local_config_sets_default_targets() {
    let sandbox = TempDir::new().unwrap();
    fs::write(
        sandbox.path().join(".caseconv.toml"),
        "default_targets = [\"constant\", \"dot\"]\nshow_detection = false\n",
    )
    .unwrap();

    caseconv(&sandbox)
        .arg("maxRetryCount")
        .assert()
        .success()
        .stdout(predicate::str::contains("MAX_RETRY_COUNT"))
        .stdout(predicate::str::contains("max.retry.count"))
        .stdout(predicate::str::contains("camelCase").not())
        .stdout(predicate::str::contains("kebab-case").not());
}

#[test]
fn unknown_convention_fails() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["--to", "hungarian", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown case convention 'hungarian'"));
}

#[test]
fn list_subcommand() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("SCREAMING-KEBAB"))
        .stdout(predicate::str::contains("PARSE-XML-DOCUMENT"))
        .stdout(predicate::str::contains("sWAP cASE"));
}

#[test]
fn list_rejects_conversion_flags() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["-q", "-t", "snake", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined with `list`"))
        .stderr(predicate::str::contains("-- list"));
}

#[test]
fn double_dash_converts_the_word_list() {
    let sandbox = TempDir::new().unwrap();
    caseconv(&sandbox)
        .args(["--quiet", "--to", "constant", "--", "list"])
        .assert()
        .success()
        .stdout("LIST\n");
}
