//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with methods for simulating a presenter at the
//! keyboard and a timer that ticks on demand.

use crate::config::ResolvedConfig;
use crate::model::document::{Document, Origin};
use crate::state::{AppState, Effect};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    quit: bool,
}

impl AcceptanceTestHarness {
    /// Prompter on `text` in an 80x24 terminal with default settings.
    pub fn from_text(text: &str) -> Self {
        Self::with_config(text, 80, 24, &ResolvedConfig::default())
    }

    /// Prompter on `text` with a custom terminal size and config.
    pub fn with_config(text: &str, width: u16, height: u16, config: &ResolvedConfig) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let document = Document::new(text, Origin::Stdin);
        let mut app = TuiApp::with_terminal(terminal, document, config);
        app.draw().unwrap();

        Self { app, quit: false }
    }

    /// Send a key with no modifiers.
    pub fn send_key(&mut self, code: KeyCode) -> Effect {
        self.send_key_with_mods(code, KeyModifiers::NONE)
    }

    /// Send a key with modifiers, then redraw.
    pub fn send_key_with_mods(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Effect {
        let effect = self.app.handle_key(KeyEvent::new(code, modifiers));
        if effect == Effect::Quit {
            self.quit = true;
        }
        self.app.draw().unwrap();
        effect
    }

    /// Type each character of `text`.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send_key(KeyCode::Char(ch));
        }
    }

    /// Fire `count` timer ticks, then redraw.
    pub fn tick(&mut self, count: usize) {
        for _ in 0..count {
            self.app.tick();
        }
        self.app.draw().unwrap();
    }

    /// Fire ticks until the script stops running, up to `limit`.
    ///
    /// Returns the number of ticks fired.
    pub fn tick_until_stopped(&mut self, limit: usize) -> usize {
        let mut fired = 0;
        while self.app.app_state().is_running() && fired < limit {
            self.app.tick();
            fired += 1;
        }
        self.app.draw().unwrap();
        fired
    }

    /// Whether a quit was requested.
    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Controller state.
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Resize the terminal and redraw.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.resize_for_test(width, height);
        self.app.draw().unwrap();
    }

    /// Current screen contents.
    pub fn render_to_string(&mut self) -> String {
        self.app.draw().unwrap();
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// One row of the screen, untrimmed.
    pub fn row(&self, y: u16) -> String {
        let buffer = self.app.terminal().backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }
}
