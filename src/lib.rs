//! kubectl-spill-secrets - spill a Kubernetes Secret with its data decoded.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Flags, stdin/stdout plumbing
//! │   └── output        # Terminal output helpers
//! ├── core/             # Pipeline
//! │   ├── config        # TransformConfig / OutputMode
//! │   ├── constants     # Placeholders and aliases
//! │   ├── normalize     # Key-case folding of raw input
//! │   ├── secret        # Manifest decoding and aliasing
//! │   ├── transform     # base64 decoding and key rewrites
//! │   └── render        # Plain YAML and ejson templates
//! └── error             # Error type
//! ```
//!
//! # Example
//!
//! ```
//! use kubectl_spill_secrets::core::{config::TransformConfig, spill};
//!
//! let out = spill("data:\n  foo: YmFy\n", &TransformConfig::default()).unwrap();
//! assert!(out.contains("  foo: bar\n"));
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{OutputMode, TransformConfig};
pub use crate::core::spill;
pub use crate::error::{Error, Result};
