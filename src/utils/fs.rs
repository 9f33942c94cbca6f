use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Write string content to a file, creating parent directories if needed
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing to file: {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))
}
