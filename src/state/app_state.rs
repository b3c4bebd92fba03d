//! Application controller state.
//!
//! `AppState` owns the document, the style, the viewport and the derived
//! layout, plus the one mutable `ScrollState`. Every change to an input of
//! the layout goes through [`AppState::relayout`], which rebuilds the layout
//! and moves the text back below the fold.

use super::prompt::{Prompt, PromptKind};
use super::status::Status;
use crate::config::{FontSize, HexColor, StyleConfig};
use crate::engine::{self, FontMetrics, Layout, Phase, ScrollState, TickOutcome, Viewport};
use crate::model::document::Document;
use tracing::{debug, info, warn};

/// A message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Popup title.
    pub title: String,
    /// Popup body.
    pub message: String,
}

/// Controller state for one prompter window.
#[derive(Debug, Clone)]
pub struct AppState {
    document: Document,
    style: StyleConfig,
    viewport: Viewport,
    layout: Layout,
    scroll: ScrollState,
    status: Status,
    /// Toolbar and status bar hidden.
    pub fullscreen: bool,
    /// Keyboard shortcut overlay shown.
    pub help_visible: bool,
    notice: Option<Notice>,
    prompt: Option<Prompt>,
}

impl AppState {
    /// Lay out `document` for `viewport`, stopped below the fold.
    pub fn new(document: Document, style: StyleConfig, viewport: Viewport) -> Self {
        let layout = engine::wrap(
            document.text(),
            viewport,
            &FontMetrics::estimated(style.font_size.get()),
        );
        let scroll = engine::reset(&layout);
        Self {
            document,
            style,
            viewport,
            layout,
            scroll,
            status: Status::Ready,
            fullscreen: false,
            help_visible: false,
            notice: None,
            prompt: None,
        }
    }

    // ===== Accessors =====

    /// Current script.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current style.
    pub fn style(&self) -> StyleConfig {
        self.style
    }

    /// Current viewport in pixels.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Layout of the current script.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Scroll position and phase.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Status bar contents.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Pending notice, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Active input prompt, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Whether ticks should be scheduled.
    pub fn is_running(&self) -> bool {
        self.scroll.phase.is_running()
    }

    /// Font metrics for the current font size.
    pub fn metrics(&self) -> FontMetrics {
        FontMetrics::estimated(self.style.font_size.get())
    }

    // ===== Layout inputs =====

    fn relayout(&mut self) {
        self.layout = engine::wrap(self.document.text(), self.viewport, &self.metrics());
        self.scroll = engine::reset_from(&self.scroll, &self.layout);
        debug!(
            lines = self.layout.line_count(),
            content_height = self.layout.total_content_height(),
            budget = self.layout.char_budget(),
            "Relayout"
        );
    }

    /// Replace the script.
    pub fn load_document(&mut self, document: Document) {
        info!(origin = %document.origin(), bytes = document.text().len(), "Document replaced");
        self.status = Status::Loaded(document.origin().to_string());
        self.document = document;
        self.relayout();
    }

    /// Resize the viewport. No-op when the size is unchanged.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.relayout();
    }

    /// Change the font size by `delta` pixels, clamped.
    pub fn adjust_font(&mut self, delta: i64) {
        let font_size = self.style.font_size.adjusted(delta);
        self.set_font_size(font_size);
    }

    /// Set the font size. No-op when unchanged.
    pub fn set_font_size(&mut self, font_size: FontSize) {
        if font_size == self.style.font_size {
            return;
        }
        self.style.font_size = font_size;
        self.status = Status::Info(format!("Font {}", font_size.get()));
        self.relayout();
    }

    // ===== Style without relayout =====

    /// Change the speed by `delta` pixels per tick, clamped.
    pub fn adjust_speed(&mut self, delta: i64) {
        self.style.speed = self.style.speed.adjusted(delta);
        self.status = Status::Info(format!("Speed {}", self.style.speed.get()));
    }

    /// Turn the drop shadow on or off.
    pub fn toggle_shadow(&mut self) {
        self.style.shadow_enabled = !self.style.shadow_enabled;
        let state = if self.style.shadow_enabled { "On" } else { "Off" };
        self.status = Status::Info(format!("Shadow {state}"));
    }

    /// Set the text color.
    pub fn set_text_color(&mut self, color: HexColor) {
        self.style.text_color = color;
        self.status = Status::Info(format!("Text color {color}"));
    }

    /// Set the background color.
    pub fn set_bg_color(&mut self, color: HexColor) {
        self.style.bg_color = color;
        self.status = Status::Info(format!("BG color {color}"));
    }

    /// Show or hide the chrome around the canvas.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.status = Status::Fullscreen(self.fullscreen);
    }

    // ===== Scrolling =====

    /// Start, pause or resume. A finished script is reset and restarted.
    pub fn toggle_running(&mut self) {
        if self.scroll.phase == Phase::Finished {
            self.scroll = engine::reset_from(&self.scroll, &self.layout);
        }

        match self.scroll.toggle() {
            Ok(Phase::Running) => self.status = Status::Running(self.scroll.progress),
            Ok(_) => self.status = Status::Paused,
            Err(e) => warn!(error = %e, "Ignored scroll toggle"),
        }
    }

    /// Start scrolling unless already running.
    pub fn start(&mut self) {
        if !self.is_running() {
            self.toggle_running();
        }
    }

    /// Move the text back below the fold, keeping the running flag.
    pub fn reset_scroll(&mut self) {
        self.scroll = engine::reset_from(&self.scroll, &self.layout);
        self.status = Status::Reset;
    }

    /// Advance one tick at the configured speed.
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = engine::tick(self.scroll, &self.layout, self.style.speed.get());
        self.scroll = outcome.state();

        match outcome {
            TickOutcome::Advanced(state) => self.status = Status::Running(state.progress),
            TickOutcome::Finished(_) => {
                info!("Script finished");
                self.status = Status::Finished;
            }
            TickOutcome::Idle(_) => {}
        }

        outcome
    }

    // ===== Overlays =====

    /// Show a dismissible notice.
    pub fn show_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let notice = Notice {
            title: title.into(),
            message: message.into(),
        };
        warn!(title = %notice.title, message = %notice.message, "Notice");
        self.notice = Some(notice);
    }

    /// Close the notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Open an input prompt, pre-filled from the current state.
    pub fn begin_prompt(&mut self, kind: PromptKind) {
        let initial = match kind {
            PromptKind::OpenFile => String::new(),
            PromptKind::TextColor => self.style.text_color.to_string(),
            PromptKind::BgColor => self.style.bg_color.to_string(),
        };
        self.prompt = Some(Prompt::new(kind, initial));
    }

    /// Apply an edit to the open prompt.
    pub fn edit_prompt(&mut self, edit: impl FnOnce(Prompt) -> Prompt) {
        self.prompt = self.prompt.take().map(edit);
    }

    /// Close the prompt, returning it for submission.
    pub fn take_prompt(&mut self) -> Option<Prompt> {
        self.prompt.take()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
