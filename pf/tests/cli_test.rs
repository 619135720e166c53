//! CLI tests for the `pf` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pf(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pf").expect("Failed to find pf binary");
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    fs::write(dir.path().join(name), content).expect("Failed to write fixture");
}

// =============================================================================
// Offline commands
// =============================================================================

#[test]
fn test_vars_lists_unique_names() {
    let dir = TempDir::new().unwrap();
    write(&dir, "t.txt", "{{a}} {{b}} {{a}} {{a} } {{c}}");

    pf(&dir)
        .args(["vars", "t.txt"])
        .assert()
        .success()
        .stdout("a\nb\na} } {{c\n");
}

#[test]
fn test_vars_all_keeps_duplicates() {
    let dir = TempDir::new().unwrap();
    write(&dir, "t.txt", "{{x}}{{x}}");

    pf(&dir).args(["vars", "--all", "t.txt"]).assert().success().stdout("x\nx\n");
}

#[test]
fn test_render_leaves_missing_placeholders() {
    let dir = TempDir::new().unwrap();
    write(&dir, "t.txt", "Hello {{name}}, see {{missing}}");

    pf(&dir)
        .args(["render", "t.txt", "--var", "name=Ada"])
        .assert()
        .success()
        .stdout("Hello Ada, see {{missing}}");
}

#[test]
fn test_render_with_vars_file() {
    let dir = TempDir::new().unwrap();
    write(&dir, "t.txt", "{{n}} items, urgent={{urgent}}, by {{who}}");
    write(&dir, "vars.json", r#"{"n": 3, "urgent": false, "who": "file"}"#);

    pf(&dir)
        .args(["render", "t.txt", "--vars-file", "vars.json", "-v", "who=cli"])
        .assert()
        .success()
        .stdout("3 items, urgent=false, by cli");
}

#[test]
fn test_render_strict_fails_on_missing() {
    let dir = TempDir::new().unwrap();
    write(&dir, "t.txt", "Hello {{name}}");

    pf(&dir)
        .args(["render", "--strict", "t.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing variable: name"));
}

#[test]
fn test_render_invalid_var() {
    let dir = TempDir::new().unwrap();
    write(&dir, "t.txt", "x");

    pf(&dir)
        .args(["render", "t.txt", "--var", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

// =============================================================================
// Remote commands
// =============================================================================

fn write_config(dir: &TempDir, base_url: &str) {
    write(
        dir,
        "pf.yml",
        &format!(
            "api:\n  base-url: {}\n  api-key-env: PF_CLI_TEST_KEY\n  max-retries: 0\nlog-level: WARN\n",
            base_url
        ),
    );
}

#[test]
fn test_get_renders_remote_prompt() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/prompts/greet")
        .match_header("authorization", "Bearer cli-key")
        .with_status(200)
        .with_body(r#"{"prompt": {"text": "Hi {{name}}", "version": "1", "model": {"model": "m"}}}"#)
        .create();

    let dir = TempDir::new().unwrap();
    write_config(&dir, &server.url());

    pf(&dir)
        .env("PF_CLI_TEST_KEY", "cli-key")
        .args(["-c", "pf.yml", "get", "greet", "--var", "name=Ada"])
        .assert()
        .success()
        .stdout("Hi Ada\n");
    mock.assert();
}

#[test]
fn test_get_raw_keeps_placeholders() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/prompts/greet")
        .with_status(200)
        .with_body(r#"{"prompt": {"text": "Hi {{name}}", "version": "1", "model": {}}}"#)
        .create();

    let dir = TempDir::new().unwrap();
    write_config(&dir, &server.url());

    pf(&dir)
        .env("PF_CLI_TEST_KEY", "cli-key")
        .args(["-c", "pf.yml", "get", "greet", "--raw"])
        .assert()
        .success()
        .stdout("Hi {{name}}\n");
}

#[test]
fn test_list_prints_slugs() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/prompts")
        .with_status(200)
        .with_body(r#"{"prompts": [{"slug": "greet"}, {"slug": "farewell"}]}"#)
        .create();

    let dir = TempDir::new().unwrap();
    write_config(&dir, &server.url());

    pf(&dir)
        .env("PF_CLI_TEST_KEY", "cli-key")
        .args(["-c", "pf.yml", "list"])
        .assert()
        .success()
        .stdout("greet\nfarewell\n");
}

#[test]
fn test_remote_command_requires_api_key() {
    let dir = TempDir::new().unwrap();
    write_config(&dir, "http://127.0.0.1:9");

    pf(&dir)
        .env_remove("PF_CLI_TEST_KEY")
        .args(["-c", "pf.yml", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PF_CLI_TEST_KEY"));
}
