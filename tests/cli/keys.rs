//! Tests for the key rewrite flags.

use crate::support::*;

#[test]
fn test_hyphen_to_underscore() {
    let output = spill(APP_SECRETS, &["--hyphen-to-underscore-keys"]);
    assert_success(&output);
    assert_stdout_contains(&output, "  db_password: hunter2\n");
    assert_stdout_contains(&output, "  log_level: debug\n");
}

#[test]
fn test_uppercase() {
    let output = spill(APP_SECRETS, &["--uppercase-keys"]);
    assert_success(&output);
    assert_stdout_contains(&output, "  DB-PASSWORD: hunter2\n");
}

#[test]
fn test_flags_compose() {
    let manifest = "data:\n  my-key: dmFsdWU=\n";
    let output = spill(manifest, &["--hyphen-to-underscore-keys", "--uppercase-keys"]);
    assert_success(&output);
    assert_stdout_contains(&output, "  MY_KEY: value\n");
}

#[test]
fn test_order_uses_original_keys() {
    // Byte order puts "B-x" first; after uppercasing it must stay first.
    let manifest = "data:\n  b: Mg==\n  B-x: MQ==\n  a: Mw==\n";
    let output = spill(manifest, &["--uppercase-keys", "--hyphen-to-underscore-keys"]);
    assert_success(&output);
    assert_eq!(
        lines_with_prefix(&output, "  "),
        vec!["  B_X: 1", "  A: 3", "  B: 2", "  name: ", "  namespace: "]
    );
}

#[test]
fn test_redacted_with_key_flags() {
    let manifest = "data:\n  my-key: dmFsdWU=\n";
    let output = spill(manifest, &["--redacted", "--uppercase-keys"]);
    assert_success(&output);
    assert_stdout_contains(&output, "  MY-KEY: --REDACTED--\n");
}
