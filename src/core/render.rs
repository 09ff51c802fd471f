//! Output templates.
//!
//! Both documents are fixed, hand-written templates. Values are inserted as-is
//! with no quoting or escaping; the ejson skeleton is only structurally JSON.

use crate::core::config::{OutputMode, TransformConfig};
use crate::core::constants::EJSON_SECRET_ENTRY;
use crate::core::secret::SecretRecord;
use crate::core::transform::DataEntry;

/// Format data entries as indented YAML mapping lines.
pub fn yaml_data_lines(entries: &[DataEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("  {}: {}\n", entry.key, entry.value.as_str()));
    }
    out
}

/// Format data entries as JSON members, comma after all but the last.
pub fn json_data_lines(entries: &[DataEntry]) -> String {
    let mut out = String::new();
    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let comma = if i < last { "," } else { "" };
        out.push_str(&format!(
            "        \"{}\": \"{}\"{}\n",
            entry.key,
            entry.value.as_str(),
            comma
        ));
    }
    out
}

/// Render the plain Secret document.
pub fn render_plain(record: &SecretRecord, entries: &[DataEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("apiVersion: {}\n", record.api_version));
    out.push_str("data:\n");
    out.push_str(&yaml_data_lines(entries));
    out.push_str(&format!("kind: {}\n", record.kind));
    out.push_str("metadata:\n");
    out.push_str(&format!("  name: {}\n", record.metadata.name));
    out.push_str(&format!("  namespace: {}\n", record.metadata.namespace));
    out.push_str(&format!("type: {}\n", record.secret_type));
    out
}

/// Render the ejson skeleton.
pub fn render_ejson(record: &SecretRecord, entries: &[DataEntry], public_key: &str) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    out.push_str(&format!("  \"_public_key\": \"{}\",\n", public_key));
    out.push_str("  \"kubernetes_secrets\": {\n");
    out.push_str(&format!("    \"{}\": {{\n", EJSON_SECRET_ENTRY));
    out.push_str(&format!("      \"_type\": \"{}\",\n", record.secret_type));
    out.push_str("      \"data\": {\n");
    out.push_str(&json_data_lines(entries));
    out.push_str("      }\n");
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push_str("}\n");
    out
}

/// Render whichever document `config` selects.
pub fn render(record: &SecretRecord, entries: &[DataEntry], config: &TransformConfig) -> String {
    match &config.mode {
        OutputMode::Plain => render_plain(record, entries),
        OutputMode::Ejson { public_key } => render_ejson(record, entries, public_key),
    }
}
