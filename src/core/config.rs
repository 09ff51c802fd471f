//! Transform configuration.
//!
//! Built once from the command line and passed by reference to every stage.

use crate::cli::Cli;

/// Which document to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Kubernetes Secret YAML with decoded values.
    #[default]
    Plain,
    /// ejson skeleton carrying the given public key.
    Ejson { public_key: String },
}

/// Options controlling how data keys and values are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformConfig {
    /// Replace every value with the redaction placeholder.
    pub redact_values: bool,
    /// Replace `-` with `_` in data keys.
    pub hyphen_to_underscore_keys: bool,
    /// Uppercase data keys.
    pub uppercase_keys: bool,
    pub mode: OutputMode,
}

impl TransformConfig {
    /// Whether output uses the ejson template.
    pub fn is_ejson(&self) -> bool {
        matches!(self.mode, OutputMode::Ejson { .. })
    }
}

impl From<&Cli> for TransformConfig {
    fn from(cli: &Cli) -> Self {
        // An empty key means plain mode, same as omitting the flag.
        let mode = match cli.ejson_public_key.as_deref() {
            Some(key) if !key.is_empty() => OutputMode::Ejson {
                public_key: key.to_string(),
            },
            _ => OutputMode::Plain,
        };

        Self {
            redact_values: cli.redacted,
            hyphen_to_underscore_keys: cli.hyphen_to_underscore_keys,
            uppercase_keys: cli.uppercase_keys,
            mode,
        }
    }
}
