//! TUI rendering and the event loop (impure shell).
//!
//! Owns the terminal. Key presses go through [`crate::state::handle_key`];
//! ticks are scheduled here and only fire while the script is running.

mod canvas;
mod constants;
mod help;
mod layout;
mod notice;
mod status_bar;
mod styles;
mod tick;
mod toolbar;

pub use canvas::PrompterCanvas;
pub use layout::{calculate_areas, ScreenAreas};
pub use styles::CellSize;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::document::{Document, Origin};
use crate::model::error::LoadError;
use crate::source;
use crate::state::{handle_key, AppState, Effect};
use constants::IDLE_POLL_MS;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tick::TickSchedule;
use tracing::{debug, info};

/// TUI-specific errors
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal I/O error
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    cell: CellSize,
    tick_interval: Duration,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(document: Document, config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, document, config))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. While running, the poll timeout is the
    /// time left until the next tick; otherwise the loop idles. The tick
    /// deadline is checked after every wake-up, events included.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        let mut schedule = TickSchedule::new(Instant::now(), self.tick_interval);

        loop {
            let timeout = if self.app_state.is_running() {
                schedule.timeout(Instant::now())
            } else {
                Duration::from_millis(IDLE_POLL_MS)
            };

            let mut redraw = false;

            if event::poll(timeout)? {
                let was_running = self.app_state.is_running();

                match event::read()? {
                    Event::Key(key) => {
                        match self.handle_key(key) {
                            Effect::Quit => return Ok(()),
                            Effect::LaunchEditor => self.launch_editor()?,
                            Effect::None | Effect::LoadFile(_) => {}
                        }
                        redraw = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        redraw = true;
                    }
                    _ => {}
                }

                if !was_running && self.app_state.is_running() {
                    schedule.restart(Instant::now());
                }
            }

            if self.app_state.is_running() && schedule.take_due(Instant::now()) {
                self.app_state.on_tick();
                redraw = true;
            }

            if redraw {
                self.draw()?;
            }
        }
    }

    /// Hand the terminal to the external editor and load what it saves.
    fn launch_editor(&mut self) -> Result<(), TuiError> {
        suspend_terminal()?;
        let edited = source::edit_in_external_editor(self.app_state.document().text());
        resume_terminal()?;
        self.terminal.clear()?;

        match edited {
            Ok(text) => {
                let document = Document::new(text, Origin::Editor);
                self.app_state.load_document(document);
            }
            Err(e) => self.app_state.show_notice("Edit", e.to_string()),
        }
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Wrap an already initialised terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        document: Document,
        config: &ResolvedConfig,
    ) -> Self {
        let cell = CellSize::new(config.cell_width_px, config.cell_height_px);

        // Laid out for the whole terminal until the first draw measures the canvas.
        let viewport = match terminal.size() {
            Ok(size) => cell.viewport_for(Rect::new(0, 0, size.width, size.height)),
            Err(_) => crate::engine::Viewport::default(),
        };

        let mut app_state = AppState::new(document, config.style, viewport);
        if config.autostart {
            app_state.start();
        }

        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            cell,
            tick_interval: config.tick_interval,
        }
    }

    /// Controller state.
    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Terminal, for buffer inspection in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Handle a single keyboard event
    ///
    /// File loads are carried out here. Effects that need the real terminal
    /// (quitting, the editor) are returned to the caller.
    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if key.kind != KeyEventKind::Press {
            return Effect::None;
        }

        let effect = handle_key(&mut self.app_state, &self.key_bindings, key);

        if let Effect::LoadFile(path) = &effect {
            match source::load_file(path) {
                Ok(document) => self.app_state.load_document(document),
                Err(e) => self.report_load_error(&e),
            }
        }

        effect
    }

    /// Show a script that failed to load as a notice.
    pub fn report_load_error(&mut self, error: &LoadError) {
        self.app_state.show_notice("Open file", error.to_string());
    }

    /// Advance one tick, as the timer would.
    pub fn tick(&mut self) {
        self.app_state.on_tick();
    }

    /// Render the current frame
    ///
    /// Measures the canvas first so a resize relayouts before drawing.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let areas = calculate_areas(
            Rect::new(0, 0, size.width, size.height),
            self.app_state.fullscreen,
        );
        self.app_state
            .set_viewport(self.cell.viewport_for(areas.canvas));

        let state = &self.app_state;
        let cell = self.cell;
        self.terminal
            .draw(|frame| render(frame, &areas, state, cell))?;
        Ok(())
    }
}

#[cfg(test)]
impl TuiApp<ratatui::backend::TestBackend> {
    /// Resize the test terminal; the next draw picks it up.
    pub(crate) fn resize_for_test(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
    }
}

/// Draw one frame of `state` into `areas`.
pub fn render(frame: &mut Frame, areas: &ScreenAreas, state: &AppState, cell: CellSize) {
    let style = state.style();

    if let Some(area) = areas.toolbar {
        toolbar::render_toolbar(frame, area, &style, state.is_running());
    }

    frame.render_widget(
        PrompterCanvas::new(state.layout(), state.scroll(), style, cell),
        areas.canvas,
    );

    match (areas.status_bar, state.prompt()) {
        (Some(area), _) => status_bar::render_status_bar(frame, area, state),
        (None, Some(_)) => {
            // Fullscreen: the prompt covers the top canvas row.
            let area = Rect {
                height: areas.canvas.height.min(1),
                ..areas.canvas
            };
            status_bar::render_status_bar(frame, area, state);
        }
        (None, None) => {}
    }

    if state.help_visible {
        help::render_help_overlay(frame);
    }

    if let Some(notice) = state.notice() {
        notice::render_notice(frame, notice);
    }
}

/// Initialize and run the prompter on `document`
///
/// Handles terminal setup, runs the event loop, and ensures cleanup on exit.
/// A `load_error` from picking the initial script opens as a notice.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_prompter(
    document: Document,
    load_error: Option<LoadError>,
    config: &ResolvedConfig,
) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(document, config) {
        Ok(app) => app,
        Err(e) => {
            let _ = restore_terminal();
            return Err(e);
        }
    };

    if let Some(error) = &load_error {
        app.report_load_error(error);
    }

    info!(
        autostart = config.autostart,
        tick_ms = config.tick_interval.as_millis() as u64,
        "Prompter started"
    );

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

fn suspend_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

fn resume_terminal() -> Result<(), TuiError> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    Ok(())
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    suspend_terminal()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
