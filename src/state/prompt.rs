//! Single-line input prompt (pure state transitions).
//!
//! Used for entering a file path or a hex color. All functions are pure -
//! no side effects, testable without TUI.

/// What the entered text will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Path of a script to load.
    OpenFile,
    /// New text color.
    TextColor,
    /// New background color.
    BgColor,
}

impl PromptKind {
    /// Label shown before the input.
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::OpenFile => "Open file",
            PromptKind::TextColor => "Text color",
            PromptKind::BgColor => "BG color",
        }
    }
}

/// Prompt contents with a cursor counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    kind: PromptKind,
    input: String,
    cursor: usize,
}

impl Prompt {
    /// Open a prompt pre-filled with `initial`, cursor at the end.
    pub fn new(kind: PromptKind, initial: impl Into<String>) -> Self {
        let input = initial.into();
        let cursor = input.chars().count();
        Self {
            kind,
            input,
            cursor,
        }
    }

    /// Purpose of the prompt.
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// Current text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at the cursor and advance it.
    pub fn insert(mut self, ch: char) -> Self {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, ch);
        self.cursor += 1;
        self
    }

    /// Delete the character before the cursor, if any.
    pub fn backspace(mut self) -> Self {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.input.remove(at);
            self.cursor -= 1;
        }
        self
    }

    /// Move the cursor left, saturating at 0.
    pub fn left(mut self) -> Self {
        self.cursor = self.cursor.saturating_sub(1);
        self
    }

    /// Move the cursor right, saturating at the end.
    pub fn right(mut self) -> Self {
        self.cursor = (self.cursor + 1).min(self.input.chars().count());
        self
    }

    /// Consume the prompt, returning the trimmed input.
    pub fn into_input(self) -> String {
        self.input.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_places_cursor_at_end() {
        let prompt = Prompt::new(PromptKind::TextColor, "#FFF");
        assert_eq!(prompt.cursor(), 4);
    }

    #[test]
    fn insert_appends_at_cursor() {
        let prompt = Prompt::new(PromptKind::OpenFile, "ab").left().insert('X');
        assert_eq!(prompt.input(), "aXb");
        assert_eq!(prompt.cursor(), 2);
    }

    #[test]
    fn backspace_removes_previous_char() {
        let prompt = Prompt::new(PromptKind::OpenFile, "abc").backspace();
        assert_eq!(prompt.input(), "ab");
        assert_eq!(prompt.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let prompt = Prompt::new(PromptKind::OpenFile, "abc")
            .left()
            .left()
            .left()
            .backspace();
        assert_eq!(prompt.input(), "abc");
        assert_eq!(prompt.cursor(), 0);
    }

    #[test]
    fn multibyte_input_is_edited_by_char() {
        let prompt = Prompt::new(PromptKind::OpenFile, "café")
            .backspace()
            .insert('e');
        assert_eq!(prompt.input(), "cafe");
    }

    #[test]
    fn cursor_saturates_at_bounds() {
        let prompt = Prompt::new(PromptKind::OpenFile, "a").right().right();
        assert_eq!(prompt.cursor(), 1);
        let prompt = prompt.left().left();
        assert_eq!(prompt.cursor(), 0);
    }

    #[test]
    fn into_input_trims() {
        let prompt = Prompt::new(PromptKind::OpenFile, "  speech.txt ");
        assert_eq!(prompt.into_input(), "speech.txt");
    }
}
