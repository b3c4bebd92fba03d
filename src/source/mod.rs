//! Script sources.
//!
//! This module supplies raw text to the prompter:
//! - UTF-8 files
//! - Piped stdin
//! - An external editor round trip
//! - A `sample_script.txt` next to the executable
//! - The built-in welcome text when nothing else is given

use crate::model::document::{Document, Origin};
use crate::model::error::LoadError;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod editor;
pub mod file;
pub mod stdin;

pub use editor::{edit_in_external_editor, editor_command};
pub use file::load_file;
pub use stdin::read_script;

/// Script picked up from the executable's directory when nothing else is given.
pub const SAMPLE_SCRIPT_NAME: &str = "sample_script.txt";

/// Pick the initial document.
///
/// # Logic:
/// 1. If a file path is provided: read it
/// 2. If stdin is piped: read all of it
/// 3. If `sample_script.txt` sits next to the executable: read it
/// 4. Else: the welcome text
///
/// # Errors
///
/// Returns `LoadError` if the file, stdin or the sample script cannot be read.
pub fn initial_document(file: Option<PathBuf>) -> Result<Document, LoadError> {
    if let Some(path) = file {
        return load_file(path);
    }

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let text = read_script(stdin.lock())?;
        return Ok(Document::new(text, Origin::Stdin));
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    if let Some(sample) = exe_dir.as_deref().and_then(sample_script_in) {
        return load_file(sample);
    }

    Ok(Document::welcome())
}

/// Like [`initial_document`], but unreadable input falls back to the welcome
/// text. The error comes back alongside so it can be shown as a notice.
pub fn initial_document_or_welcome(file: Option<PathBuf>) -> (Document, Option<LoadError>) {
    match initial_document(file) {
        Ok(document) => (document, None),
        Err(e) => {
            warn!(error = %e, "Initial script unreadable, showing welcome text");
            (Document::welcome(), Some(e))
        }
    }
}

/// Path of the sample script in `dir`, if there is one.
pub fn sample_script_in(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(SAMPLE_SCRIPT_NAME);
    path.is_file().then_some(path)
}
