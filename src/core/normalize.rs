//! Input key-case normalization.
//!
//! Upstream tools are not consistent about the case of field names, so any
//! run of text that looks like a mapping key (`[a-z][a-zA-Z]+: `) is folded to
//! lowercase before the YAML decoder sees it. The match is purely textual and
//! will also hit key-like text inside values; that is accepted behavior.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z][a-zA-Z]+: ").expect("static regex is valid"))
}

/// Lowercase every key-like substring in `input`.
///
/// Borrows the input unchanged when nothing matches.
pub fn normalize_keys(input: &str) -> Cow<'_, str> {
    key_pattern().replace_all(input, |caps: &regex::Captures<'_>| caps[0].to_lowercase())
}
