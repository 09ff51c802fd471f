//! Terminal output helpers.
//!
//! stdout only ever carries the rendered document; everything meant for a
//! human goes to stderr (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use console::style;
use std::io::{self, Write};

use crate::error::Result;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled_stderr()
}

/// Write a rendered document to stdout as-is.
pub fn raw(document: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(document.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Print an error message to stderr (red).
///
/// Example: `✗ yaml parse error: ...`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ data values must be base64-encoded`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}
