//! Command-line interface.

pub mod output;

use clap::Parser;
use std::io::{self, Read};
use tracing::debug;

use crate::core::config::TransformConfig;
use crate::core::constants::EJSON_PUBLIC_KEY_LEN;
use crate::error::Result;

/// Spill a Kubernetes Secret with its data decoded.
#[derive(Parser, Debug)]
#[command(
    name = "kubectl-spill_secrets",
    about = "Decode a Kubernetes Secret from stdin as YAML or an ejson skeleton",
    version,
    after_help = "Example:\n  kubectl get secret app-secrets -o yaml | kubectl spill-secrets --redacted"
)]
pub struct Cli {
    /// Output an ejson-formatted object with this 64-character public key
    #[arg(long, value_name = "KEY", value_parser = parse_public_key)]
    pub ejson_public_key: Option<String>,

    /// Replace hyphens in data keys with underscores
    #[arg(long)]
    pub hyphen_to_underscore_keys: bool,

    /// Set every data value to "--REDACTED--"
    #[arg(long)]
    pub redacted: bool,

    /// Uppercase data keys
    #[arg(long)]
    pub uppercase_keys: bool,

    /// Enable verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Accept an empty key (plain output) or exactly 64 bytes.
fn parse_public_key(value: &str) -> std::result::Result<String, String> {
    let len = value.len();
    if len == 0 || len == EJSON_PUBLIC_KEY_LEN {
        Ok(value.to_string())
    } else {
        Err(format!(
            "public key must be {} bytes, got {}",
            EJSON_PUBLIC_KEY_LEN, len
        ))
    }
}

/// Read the manifest from stdin, spill it, and write the result to stdout.
pub fn execute(cli: &Cli) -> Result<()> {
    let config = TransformConfig::from(cli);

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    debug!(bytes = input.len(), "read manifest from stdin");

    let document = crate::core::spill(&input, &config)?;
    output::raw(&document)?;
    Ok(())
}
