//! Error types for kubectl-spill-secrets.
//!
//! Every stage of the pipeline returns [`Result`]; nothing is recovered.
//! Flag validation errors never reach this type, clap reports them itself.

use thiserror::Error;

/// Errors that abort a spill.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading stdin or writing stdout failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not YAML, or does not have the shape of a Secret.
    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A data value is not valid base64.
    #[error("invalid base64 in data key '{key}': {source}")]
    Base64 {
        key: String,
        #[source]
        source: base64::DecodeError,
    },
}

impl Error {
    /// A short follow-up suggestion for the user, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Yaml(_) => Some("expected a single Kubernetes Secret manifest on stdin"),
            Error::Base64 { .. } => Some("data values must be base64-encoded (use --redacted to skip decoding)"),
            Error::Io(_) => None,
        }
    }
}

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;
