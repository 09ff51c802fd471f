//! Secret manifest decoding and record-level rewrites.
//!
//! Field names are matched in their normalized, lower-case form, so
//! `apiVersion` arrives here as `apiversion`. Missing or null fields decode as
//! empty values and unknown fields are ignored.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::constants::{APP_SECRETS_ALIAS, APP_SECRETS_NAME, OPAQUE_TYPE, STRING_TYPE};
use crate::core::normalize::normalize_keys;
use crate::error::Result;

/// Object metadata kept from the manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub namespace: String,
}

/// A decoded Kubernetes Secret.
///
/// `data` is ordered by key, which gives the renderer its sort order for free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SecretRecord {
    #[serde(rename = "apiversion", deserialize_with = "null_as_default")]
    pub api_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub secret_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    /// Base64-encoded values keyed by their original key.
    #[serde(deserialize_with = "null_as_default")]
    pub data: BTreeMap<String, String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl SecretRecord {
    /// Decode raw manifest text.
    ///
    /// Key-like text is lower-cased first (see [`normalize_keys`]). Empty
    /// input or a bare null document yields an empty record.
    ///
    /// # Errors
    ///
    /// Returns `Error::Yaml` on malformed YAML or a shape that does not fit a
    /// Secret (for example `data` given as a list).
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = normalize_keys(input);
        if normalized.trim().is_empty() {
            debug!("empty manifest, using empty record");
            return Ok(Self::default());
        }

        let record = serde_yaml::from_str::<Option<Self>>(&normalized)?.unwrap_or_default();
        debug!(
            name = %record.metadata.name,
            namespace = %record.metadata.namespace,
            keys = record.data.len(),
            "decoded secret manifest"
        );
        Ok(record)
    }

    /// Apply the fixed name and type aliases.
    pub fn apply_aliases(&mut self) {
        if self.metadata.name == APP_SECRETS_NAME {
            debug!(from = APP_SECRETS_NAME, to = APP_SECRETS_ALIAS, "aliasing secret name");
            self.metadata.name = APP_SECRETS_ALIAS.to_string();
        }
        if self.secret_type == STRING_TYPE {
            debug!(from = STRING_TYPE, to = OPAQUE_TYPE, "aliasing secret type");
            self.secret_type = OPAQUE_TYPE.to_string();
        }
    }
}
