//! Tests for keyboard routing.

use super::*;
use crate::config::StyleConfig;
use crate::engine::Viewport;
use crate::model::document::Document;
use crate::state::Status;

fn app() -> AppState {
    AppState::new(
        Document::welcome(),
        StyleConfig::default(),
        Viewport::new(800, 600),
    )
}

fn press(app: &mut AppState, code: KeyCode) -> Effect {
    handle_key(
        app,
        &KeyBindings::default(),
        KeyEvent::new(code, KeyModifiers::NONE),
    )
}

fn type_text(app: &mut AppState, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn space_starts_scrolling() {
    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Char(' ')), Effect::None);
    assert!(app.is_running());
}

#[test]
fn q_and_ctrl_c_quit() {
    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Char('q')), Effect::Quit);

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(
        handle_key(&mut app, &KeyBindings::default(), ctrl_c),
        Effect::Quit
    );
}

#[test]
fn arrows_adjust_speed_within_range() {
    let mut app = app();
    for _ in 0..100 {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(app.style().speed.get(), 40);
    for _ in 0..100 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.style().speed.get(), 1);
}

#[test]
fn plus_and_minus_step_font_by_two() {
    let mut app = app();
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.style().font_size.get(), 38);
    press(&mut app, KeyCode::Char('-'));
    press(&mut app, KeyCode::Char('-'));
    assert_eq!(app.style().font_size.get(), 34);
}

#[test]
fn e_requests_editor() {
    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Char('e')), Effect::LaunchEditor);
}

#[test]
fn open_prompt_submits_path() {
    let mut app = app();
    press(&mut app, KeyCode::Char('o'));
    assert!(app.prompt().is_some());

    type_text(&mut app, "speech.txt");
    let effect = press(&mut app, KeyCode::Enter);

    assert_eq!(effect, Effect::LoadFile(PathBuf::from("speech.txt")));
    assert!(app.prompt().is_none());
}

#[test]
fn prompt_captures_bound_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('o'));
    type_text(&mut app, "q ");

    assert!(!app.is_running(), "space inside the prompt must not start");
    assert_eq!(app.prompt().map(|p| p.input()), Some("q "));
}

#[test]
fn escape_cancels_prompt() {
    let mut app = app();
    press(&mut app, KeyCode::Char('o'));
    type_text(&mut app, "abc");
    assert_eq!(press(&mut app, KeyCode::Esc), Effect::None);
    assert!(app.prompt().is_none());
}

#[test]
fn empty_submission_does_nothing() {
    let mut app = app();
    press(&mut app, KeyCode::Char('o'));
    assert_eq!(press(&mut app, KeyCode::Enter), Effect::None);
}

#[test]
fn text_color_prompt_applies_color() {
    let mut app = app();
    press(&mut app, KeyCode::Char('t'));
    for _ in 0..7 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "#ffcc00");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.style().text_color, HexColor::rgb(0xFF, 0xCC, 0x00));
    assert_eq!(app.status(), &Status::Info("Text color #FFCC00".to_string()));
}

#[test]
fn bad_color_raises_notice_and_keeps_color() {
    let mut app = app();
    press(&mut app, KeyCode::Char('b'));
    type_text(&mut app, "zz");
    press(&mut app, KeyCode::Enter);

    assert!(app.notice().is_some());
    assert_eq!(app.style().bg_color, HexColor::BLACK);
}

#[test]
fn notice_blocks_actions_until_dismissed() {
    let mut app = app();
    app.show_notice("Open file", "nope");

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.is_running());

    press(&mut app, KeyCode::Enter);
    assert!(app.notice().is_none());

    press(&mut app, KeyCode::Char(' '));
    assert!(app.is_running());
}

#[test]
fn help_blocks_other_actions() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.help_visible);

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.is_running());

    press(&mut app, KeyCode::Esc);
    assert!(!app.help_visible);
}

#[test]
fn help_key_toggles_help() {
    let mut app = app();
    press(&mut app, KeyCode::Char('?'));
    press(&mut app, KeyCode::Char('?'));
    assert!(!app.help_visible);
}

#[test]
fn fullscreen_key_toggles() {
    let mut app = app();
    press(&mut app, KeyCode::F(11));
    assert!(app.fullscreen);
    press(&mut app, KeyCode::Char('f'));
    assert!(!app.fullscreen);
}

#[test]
fn unbound_key_is_ignored() {
    let mut app = app();
    assert_eq!(press(&mut app, KeyCode::Char('z')), Effect::None);
    assert_eq!(app.status(), &Status::Ready);
}
