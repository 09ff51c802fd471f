//! Tests for error handling, exit codes, and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_short_public_key_is_usage_error() {
    let output = spill(FOO_BAR, &["--ejson-public-key", "0123456789"]);
    assert_exit_code(&output, 2);
    assert_stderr_contains(&output, "Usage");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_long_public_key_is_usage_error() {
    let key = format!("{PUBLIC_KEY}0");
    let output = spill(FOO_BAR, &["--ejson-public-key", &key]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_unknown_flag_is_usage_error() {
    cmd()
        .arg("--decode")
        .write_stdin(FOO_BAR)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ejson-public-key"))
        .stdout(predicate::str::contains("--redacted"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_malformed_yaml_fails() {
    let output = spill("data: [unclosed\n", &[]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "yaml parse error");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_base64_fails_without_partial_output() {
    let manifest = "apiVersion: v1\ndata:\n  a: YQ==\n  b: '%%%'\nkind: Secret\n";
    let output = spill(manifest, &[]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "invalid base64 in data key 'b'");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_base64_is_fine_when_redacted() {
    let manifest = "data:\n  b: '%%%'\n";
    let output = spill(manifest, &["--redacted"]);
    assert_success(&output);
    assert_stdout_contains(&output, "  b: --REDACTED--\n");
}

#[test]
fn test_default_no_log_output() {
    let output = spill(FOO_BAR, &[]);
    assert_success(&output);
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = spill(FOO_BAR, &["--verbose"]);
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
    assert_eq!(
        stdout(&output),
        "apiVersion: v1\ndata:\n  foo: bar\nkind: Secret\nmetadata:\n  name: my-secret\n  namespace: default\ntype: Opaque\n"
    );
}

#[test]
fn test_log_env_var() {
    let output = cmd()
        .env("SPILL_SECRETS_LOG", "kubectl_spill_secrets=trace")
        .write_stdin(FOO_BAR)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "TRACE");
    assert!(!stderr(&output).contains("bar"), "secret values must not be logged");
}
