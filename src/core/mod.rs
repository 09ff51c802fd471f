//! Core pipeline: normalize, decode, transform, render.
//!
//! Everything here works on in-memory strings; reading stdin and writing
//! stdout belong to [`crate::cli`].

pub mod config;
pub mod constants;
pub mod normalize;
pub mod render;
pub mod secret;
pub mod transform;

use tracing::debug;

use crate::error::Result;
use config::TransformConfig;
use secret::SecretRecord;

/// Run the whole pipeline over a manifest and return the rendered document.
///
/// The document is built completely before returning, so an error never
/// leaves partial output behind.
///
/// # Errors
///
/// Returns `Error::Yaml` for an unparseable manifest and `Error::Base64` for
/// an undecodable data value.
pub fn spill(input: &str, config: &TransformConfig) -> Result<String> {
    let mut record = SecretRecord::parse(input)?;
    record.apply_aliases();

    let entries = transform::transform_data(&record.data, config)?;
    debug!(ejson = config.is_ejson(), entries = entries.len(), "rendering");
    Ok(render::render(&record, &entries, config))
}
