//! Data key/value transformation.
//!
//! Turns the base64 `data` map into display-ready entries, ordered by the
//! original key so the output order never depends on the key rewrites.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::BTreeMap;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::config::TransformConfig;
use crate::core::constants::REDACTED;
use crate::error::{Error, Result};

/// One rendered `data` line before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    /// Display key after hyphen/case rewrites.
    pub key: String,
    /// Decoded (or redacted) value, wiped on drop.
    pub value: Zeroizing<String>,
}

/// Decode a single base64 value.
///
/// Line breaks inside the encoded text are skipped, and one trailing `\n` is
/// removed from the plaintext. Plaintext that is not UTF-8 is converted
/// lossily.
///
/// # Errors
///
/// Returns `Error::Base64` naming `key` if the value is not valid padded
/// standard base64.
pub fn decode_value(key: &str, encoded: &str) -> Result<Zeroizing<String>> {
    let compact: String = encoded.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let bytes = Zeroizing::new(STANDARD.decode(compact.as_bytes()).map_err(|source| {
        Error::Base64 {
            key: key.to_string(),
            source,
        }
    })?);

    let mut value = Zeroizing::new(String::from_utf8_lossy(&bytes).into_owned());
    if value.ends_with('\n') {
        value.pop();
    }
    Ok(value)
}

/// Apply the configured key rewrites.
pub fn transform_key(key: &str, config: &TransformConfig) -> String {
    let mut out = if config.hyphen_to_underscore_keys {
        key.replace('-', "_")
    } else {
        key.to_string()
    };
    if config.uppercase_keys {
        out = out.to_uppercase();
    }
    out
}

/// Transform every data entry, in ascending order of the original key.
///
/// Redacted values are never decoded, so redaction also works on values that
/// are not valid base64.
///
/// # Errors
///
/// Returns the first base64 error encountered.
pub fn transform_data(
    data: &BTreeMap<String, String>,
    config: &TransformConfig,
) -> Result<Vec<DataEntry>> {
    debug!(
        keys = data.len(),
        redact = config.redact_values,
        "transforming data"
    );

    data.iter()
        .map(|(key, encoded)| -> Result<DataEntry> {
            let value = if config.redact_values {
                Zeroizing::new(REDACTED.to_string())
            } else {
                decode_value(key, encoded)?
            };
            let shown_key = transform_key(key, config);
            trace!(original = %key, display = %shown_key, "transformed key");
            Ok(DataEntry {
                key: shown_key,
                value,
            })
        })
        .collect()
}
