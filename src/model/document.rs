//! The script being prompted.

use std::fmt;
use std::path::PathBuf;

/// Text shown when no script was supplied.
pub const WELCOME_TEXT: &str =
    "Welcome to the Teleprompter. Press o to open a file or e to edit text.";

/// Where the current script came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Built-in welcome text.
    Welcome,
    /// Read from a file.
    File(PathBuf),
    /// Read from piped stdin.
    Stdin,
    /// Written in the external editor.
    Editor,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Welcome => write!(f, "welcome"),
            Origin::File(path) => write!(f, "{}", path.display()),
            Origin::Stdin => write!(f, "stdin"),
            Origin::Editor => write!(f, "edited"),
        }
    }
}

/// Raw script text. Replaced wholesale on every load or edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    origin: Origin,
}

impl Document {
    /// Wrap loaded text.
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            text: text.into(),
            origin,
        }
    }

    /// The built-in welcome script.
    pub fn welcome() -> Self {
        Self::new(WELCOME_TEXT, Origin::Welcome)
    }

    /// Full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Source of the text.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::welcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_welcome_text() {
        let doc = Document::default();
        assert_eq!(doc.text(), WELCOME_TEXT);
        assert_eq!(doc.origin(), &Origin::Welcome);
    }

    #[test]
    fn origin_displays_path() {
        let origin = Origin::File(PathBuf::from("speech.txt"));
        assert_eq!(origin.to_string(), "speech.txt");
    }
}
