//! Writing output files

use crate::error::StorageError;
use std::path::Path;
use tracing::info;

/// Write `content` to `path`, creating missing parent directories
///
/// An existing file is overwritten.
pub async fn save_file(content: &str, path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(path, content)
        .await
        .map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), bytes = content.len(), "Saved file");
    Ok(())
}
