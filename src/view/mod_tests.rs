//! Tests for the TUI application shell.

use super::*;
use crate::engine::{Phase, Viewport};
use crate::state::Status;
use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;

fn create_test_app_with(config: &ResolvedConfig) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    TuiApp::with_terminal(terminal, Document::welcome(), config)
}

fn create_test_app() -> TuiApp<TestBackend> {
    create_test_app_with(&ResolvedConfig::default())
}

fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> Effect {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn handle_key_q_quits() {
    let mut app = create_test_app();
    assert_eq!(press(&mut app, KeyCode::Char('q')), Effect::Quit);
}

#[test]
fn handle_key_ctrl_c_quits() {
    let mut app = create_test_app();
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(app.handle_key(key), Effect::Quit);
}

#[test]
fn key_release_is_ignored() {
    let mut app = create_test_app();
    let release = KeyEvent {
        code: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };

    app.handle_key(release);

    assert!(!app.app_state().is_running());
}

#[test]
fn draw_measures_canvas_between_bars() {
    let mut app = create_test_app();
    app.draw().unwrap();

    // 80x22 canvas cells at 10x20 px.
    assert_eq!(app.app_state().viewport(), Viewport::new(800, 440));
}

#[test]
fn fullscreen_draw_gives_canvas_the_whole_terminal() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('f'));
    app.draw().unwrap();

    assert_eq!(app.app_state().viewport(), Viewport::new(800, 480));
}

#[test]
fn space_then_tick_moves_text_up() {
    let mut app = create_test_app();
    app.draw().unwrap();
    let before = app.app_state().scroll().y_pos;

    press(&mut app, KeyCode::Char(' '));
    app.tick();

    assert_eq!(app.app_state().scroll().y_pos, before - 2);
}

#[test]
fn tick_while_stopped_does_nothing() {
    let mut app = create_test_app();
    let before = *app.app_state().scroll();

    app.tick();

    assert_eq!(*app.app_state().scroll(), before);
}

#[test]
fn autostart_config_starts_running() {
    let config = ResolvedConfig {
        autostart: true,
        ..ResolvedConfig::default()
    };
    let app = create_test_app_with(&config);

    assert_eq!(app.app_state().scroll().phase, Phase::Running);
}

#[test]
fn configured_cell_size_scales_viewport() {
    let config = ResolvedConfig {
        cell_width_px: 8,
        cell_height_px: 16,
        ..ResolvedConfig::default()
    };
    let mut app = create_test_app_with(&config);
    app.draw().unwrap();

    assert_eq!(app.app_state().viewport(), Viewport::new(640, 352));
}

#[test]
fn opening_missing_file_shows_notice() {
    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('o'));
    for ch in "/nonexistent/tprompt/script.txt".chars() {
        press(&mut app, KeyCode::Char(ch));
    }

    let effect = press(&mut app, KeyCode::Enter);

    assert!(matches!(effect, Effect::LoadFile(_)));
    let notice = app.app_state().notice().expect("notice should be shown");
    assert_eq!(notice.title, "Open file");
    assert_eq!(app.app_state().document().text(), Document::welcome().text());
}

#[test]
fn startup_load_error_opens_on_welcome_with_notice() {
    let (document, load_error) = crate::source::initial_document_or_welcome(Some(
        std::path::PathBuf::from("/nonexistent/tprompt/startup.txt"),
    ));
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = TuiApp::with_terminal(terminal, document, &ResolvedConfig::default());

    app.report_load_error(&load_error.expect("missing file should be reported"));

    let notice = app.app_state().notice().expect("notice should be shown");
    assert_eq!(notice.title, "Open file");
    assert!(notice.message.contains("/nonexistent/tprompt/startup.txt"));
    assert_eq!(app.app_state().document().text(), Document::welcome().text());

    // Dismissing leaves the welcome text ready to run.
    press(&mut app, KeyCode::Esc);
    assert!(app.app_state().notice().is_none());
}

#[test]
fn opening_existing_file_loads_it() {
    let path = std::env::temp_dir().join("tprompt_view_open_test.txt");
    std::fs::write(&path, "Loaded from disk").unwrap();

    let mut app = create_test_app();
    press(&mut app, KeyCode::Char('o'));
    for ch in path.display().to_string().chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);

    let _ = std::fs::remove_file(&path);

    assert_eq!(app.app_state().document().text(), "Loaded from disk");
    assert!(matches!(app.app_state().status(), Status::Loaded(_)));
    assert!(app.app_state().notice().is_none());
}

#[test]
fn draw_renders_toolbar_and_status() {
    let mut app = create_test_app();
    app.draw().unwrap();

    let buffer = app.terminal().backend().buffer();
    let row = |y: u16| -> String { (0..80).map(|x| buffer[(x, y)].symbol().to_string()).collect() };

    assert!(row(0).contains("Speed 2"), "toolbar: {:?}", row(0));
    assert!(row(23).contains("Ready"), "status: {:?}", row(23));
}
