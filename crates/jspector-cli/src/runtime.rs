//! The JavaScript proxy runtime that instrumented programs require.
//!
//! Exports `Variable` (`get`/`set` over a stored value), `Function` (a
//! callable wrapper reporting each call) and `subscribe(listener)`.

use anyhow::{Context, Result};
use std::path::Path;

pub const RUNTIME_SOURCE: &str = include_str!("../runtime/jspector-runtime.js");

/// Write the runtime to `path`, creating parent directories.
pub fn write_runtime(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(path, RUNTIME_SOURCE)
        .with_context(|| format!("failed to write runtime: {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote proxy runtime");
    Ok(())
}
