//! Working-directory check
//!
//! The harness must be launched from its own checkout. This runs before any
//! network activity.

use crate::utils::error::{HarnessError, Result};
use std::path::Path;
use tracing::debug;

/// Manifest that marks the harness checkout
pub const MARKER_FILE: &str = "Cargo.toml";

/// Fail unless `dir` holds this harness's `Cargo.toml`
pub fn verify_working_directory(dir: &Path) -> Result<()> {
    let manifest = dir.join(MARKER_FILE);
    debug!("Checking for harness manifest at {}", manifest.display());

    if !manifest.is_file() {
        return Err(HarnessError::environment(
            format!("{} not found in current directory", MARKER_FILE),
            dir,
        ));
    }

    let content = std::fs::read_to_string(&manifest)?;
    let expected = format!("name = \"{}\"", env!("CARGO_PKG_NAME"));
    if !content.lines().any(|line| line.trim() == expected) {
        return Err(HarnessError::environment(
            format!(
                "{} does not belong to the {} package",
                MARKER_FILE,
                env!("CARGO_PKG_NAME")
            ),
            dir,
        ));
    }

    Ok(())
}
