//! Keyboard routing (pure state transitions).
//!
//! Translates key events into `AppState` changes. Anything that needs I/O
//! (reading a file, running the editor, exiting) comes back as an [`Effect`]
//! for the event loop to carry out.

use super::app_state::AppState;
use super::prompt::{Prompt, PromptKind};
use crate::config::{FontSize, HexColor, KeyBindings};
use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Work the event loop must do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond the state change.
    None,
    /// Leave the application.
    Quit,
    /// Read this file and load it.
    LoadFile(PathBuf),
    /// Suspend the terminal and edit the script.
    LaunchEditor,
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handle a single keyboard event.
///
/// Overlays take precedence in this order: notice, prompt, help. Ctrl+C
/// always quits.
pub fn handle_key(app: &mut AppState, bindings: &KeyBindings, key: KeyEvent) -> Effect {
    if is_ctrl_c(key) {
        return Effect::Quit;
    }

    if app.notice().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.dismiss_notice();
        }
        return Effect::None;
    }

    if app.prompt().is_some() {
        return handle_prompt_key(app, key);
    }

    if key.code == KeyCode::Esc && app.help_visible {
        app.help_visible = false;
        return Effect::None;
    }

    let Some(action) = bindings.get(key) else {
        return Effect::None;
    };

    if app.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
        return Effect::None;
    }

    apply_action(app, action)
}

/// Apply a bound action.
pub fn apply_action(app: &mut AppState, action: KeyAction) -> Effect {
    match action {
        KeyAction::ToggleRunning => app.toggle_running(),
        KeyAction::Reset => app.reset_scroll(),
        KeyAction::SpeedUp => app.adjust_speed(1),
        KeyAction::SpeedDown => app.adjust_speed(-1),
        KeyAction::FontUp => app.adjust_font(FontSize::STEP),
        KeyAction::FontDown => app.adjust_font(-FontSize::STEP),
        KeyAction::ToggleFullscreen => app.toggle_fullscreen(),
        KeyAction::ToggleShadow => app.toggle_shadow(),
        KeyAction::ChooseTextColor => app.begin_prompt(PromptKind::TextColor),
        KeyAction::ChooseBgColor => app.begin_prompt(PromptKind::BgColor),
        KeyAction::OpenFile => app.begin_prompt(PromptKind::OpenFile),
        KeyAction::Edit => return Effect::LaunchEditor,
        KeyAction::Help => app.help_visible = !app.help_visible,
        KeyAction::Quit => return Effect::Quit,
    }
    Effect::None
}

fn handle_prompt_key(app: &mut AppState, key: KeyEvent) -> Effect {
    match key.code {
        KeyCode::Esc => {
            app.take_prompt();
        }
        KeyCode::Enter => {
            if let Some(prompt) = app.take_prompt() {
                return submit_prompt(app, prompt);
            }
        }
        KeyCode::Backspace => app.edit_prompt(Prompt::backspace),
        KeyCode::Left => app.edit_prompt(Prompt::left),
        KeyCode::Right => app.edit_prompt(Prompt::right),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_prompt(|prompt| prompt.insert(ch));
        }
        _ => {}
    }
    Effect::None
}

fn submit_prompt(app: &mut AppState, prompt: Prompt) -> Effect {
    let kind = prompt.kind();
    let input = prompt.into_input();

    if input.is_empty() {
        return Effect::None;
    }

    match kind {
        PromptKind::OpenFile => return Effect::LoadFile(PathBuf::from(input)),
        PromptKind::TextColor | PromptKind::BgColor => match input.parse::<HexColor>() {
            Ok(color) if kind == PromptKind::TextColor => app.set_text_color(color),
            Ok(color) => app.set_bg_color(color),
            Err(e) => app.show_notice("Choose color", e.to_string()),
        },
    }

    Effect::None
}

#[cfg(test)]
#[path = "key_handler_tests.rs"]
mod tests;
