//! Loading scripts from disk.

use crate::model::document::{Document, Origin};
use crate::model::error::LoadError;
use std::path::Path;
use tracing::info;

/// Read a UTF-8 text file into a [`Document`].
///
/// Nothing is returned on failure, so a caller holding a document keeps it
/// intact (no partial loads).
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the path does not exist,
/// `LoadError::NotUtf8` if the bytes are not UTF-8 and
/// `LoadError::Io` for anything else.
pub fn load_file(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8 {
        path: path.to_path_buf(),
    })?;

    info!(path = %path.display(), bytes = text.len(), "Loaded script");

    Ok(Document::new(text, Origin::File(path.to_path_buf())))
}
