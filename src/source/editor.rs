//! Editing the script in the user's editor.
//!
//! The caller must release the terminal (leave raw mode and the alternate
//! screen) before calling into this module and restore it afterwards.

use crate::model::error::LoadError;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Editor used when neither `$VISUAL` nor `$EDITOR` is set.
pub const FALLBACK_EDITOR: &str = "vi";

/// The editor command line: `$VISUAL`, then `$EDITOR`, then `vi`.
pub fn editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// A freshly created scratch file holding `text`; deleted on drop.
fn scratch_file(text: &str) -> Result<NamedTempFile, LoadError> {
    let mut file = tempfile::Builder::new()
        .prefix("tprompt-edit-")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Open `text` in the user's editor and return the saved result.
///
/// # Errors
///
/// See [`edit_with`].
pub fn edit_in_external_editor(text: &str) -> Result<String, LoadError> {
    edit_with(&editor_command(), text)
}

/// Open `text` in `command` and return the saved result.
///
/// `command` may carry arguments (`"code --wait"`); the scratch file path is
/// appended. Trailing newlines are trimmed from the result.
///
/// # Errors
///
/// Returns `LoadError::Editor` if the command is empty, cannot be spawned or
/// exits unsuccessfully, and `LoadError::Io` if the scratch file cannot be
/// written or read.
pub fn edit_with(command: &str, text: &str) -> Result<String, LoadError> {
    let mut parts = command.split_whitespace();
    let program = parts.next().ok_or_else(|| LoadError::Editor {
        command: command.to_string(),
        reason: "empty command".to_string(),
    })?;

    let file = scratch_file(text)?;
    let path = file.path();
    debug!(path = %path.display(), command, "Launching editor");

    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| LoadError::Editor {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(LoadError::Editor {
            command: command.to_string(),
            reason: status.to_string(),
        });
    }

    // Editors that save by rename leave a new file at the same path.
    let edited = std::fs::read_to_string(path)?;
    info!(command, "Script edited");

    Ok(edited.trim_end_matches('\n').to_string())
}
