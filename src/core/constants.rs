//! Constants used throughout spill-secrets.
//!
//! Centralizes magic strings that show up in the rendered output.

/// Placeholder written instead of a decoded value when redacting.
pub const REDACTED: &str = "--REDACTED--";

/// Required length of an ejson public key (hex-encoded curve25519 key).
pub const EJSON_PUBLIC_KEY_LEN: usize = 64;

/// Secret name that gets aliased on the way out.
pub const APP_SECRETS_NAME: &str = "app-secrets";

/// Replacement for [`APP_SECRETS_NAME`].
pub const APP_SECRETS_ALIAS: &str = "secrets";

/// Secret type that gets aliased on the way out.
pub const STRING_TYPE: &str = "string";

/// Replacement for [`STRING_TYPE`].
pub const OPAQUE_TYPE: &str = "Opaque";

/// Name of the ejson entry under `kubernetes_secrets`.
pub const EJSON_SECRET_ENTRY: &str = "app-secrets";

/// Env var that overrides the tracing filter.
pub const LOG_ENV: &str = "SPILL_SECRETS_LOG";
