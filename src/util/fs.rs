//! File writing for save

use std::path::Path;

use crate::error::EditorError;

/// Write `content` to `path`, replacing the file
pub fn write_file(path: &Path, content: &str) -> Result<(), EditorError> {
    std::fs::write(path, content).map_err(|e| EditorError::io(path, &e))?;
    tracing::info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}
