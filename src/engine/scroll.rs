//! Scroll position, session phase, and the per-tick advance.

use super::layout::Layout;
use thiserror::Error;

/// Phase of one scroll session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not started, or reset after finishing.
    #[default]
    Stopped,
    /// Advancing on every tick.
    Running,
    /// Halted mid-script; position retained.
    Paused,
    /// All text has scrolled past the top.
    Finished,
}

impl Phase {
    /// Whether ticks advance the position.
    pub fn is_running(self) -> bool {
        self == Phase::Running
    }
}

/// Input to the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEvent {
    /// Begin or continue scrolling.
    Start,
    /// Halt scrolling, keeping the position.
    Pause,
    /// Continue after a pause.
    Resume,
    /// The last line left the viewport.
    Finish,
    /// The layout was rebuilt and the position moved back below the fold.
    Reset,
}

/// Rejected state machine transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot apply {event:?} while {from:?}")]
pub struct InvalidTransition {
    /// Phase the session was in.
    pub from: Phase,
    /// Event that was refused.
    pub event: ScrollEvent,
}

impl Phase {
    /// Apply an event, returning the next phase.
    ///
    /// Starting while running is accepted and changes nothing. A reset keeps
    /// the running flag as it was, except that a finished session becomes
    /// stopped so it can be started again.
    pub fn apply(self, event: ScrollEvent) -> Result<Phase, InvalidTransition> {
        use Phase::*;
        use ScrollEvent::*;

        match (self, event) {
            (Stopped, Start) | (Running, Start) => Ok(Running),
            (Paused, Start) | (Paused, Resume) => Ok(Running),
            (Running, Pause) => Ok(Paused),
            (Running, Finish) => Ok(Finished),
            (Finished, Reset) => Ok(Stopped),
            (phase, Reset) => Ok(phase),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }
}

/// Mutable scroll state owned by the controller.
///
/// Line positions are not stored per line: line *i* is drawn at
/// `layout.lines()[i].top + self.displacement(layout)`, so every line moves
/// by exactly the same amount on each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Top edge of the first line, in pixels from the top of the viewport.
    pub y_pos: i32,
    /// Session phase.
    pub phase: Phase,
    /// Fraction of the scroll distance covered, in `[0, 1]`.
    pub progress: f64,
}

impl ScrollState {
    /// Vertical shift from the layout's reset position.
    pub fn displacement(&self, layout: &Layout) -> i32 {
        self.y_pos - layout.viewport_height() as i32
    }

    /// Current top edge of line `index`, if it exists.
    pub fn line_top(&self, layout: &Layout, index: usize) -> Option<i32> {
        layout
            .lines()
            .get(index)
            .map(|line| line.top + self.displacement(layout))
    }

    /// Current bottom edge of the last line.
    pub fn content_bottom(&self, layout: &Layout) -> i32 {
        self.y_pos + layout.total_content_height() as i32
    }

    /// Apply a state machine event in place.
    pub fn transition(&mut self, event: ScrollEvent) -> Result<Phase, InvalidTransition> {
        self.phase = self.phase.apply(event)?;
        Ok(self.phase)
    }

    /// Start, or pause when already running.
    pub fn toggle(&mut self) -> Result<Phase, InvalidTransition> {
        if self.phase.is_running() {
            self.transition(ScrollEvent::Pause)
        } else {
            self.transition(ScrollEvent::Start)
        }
    }
}

/// Place the text just below the fold with zero progress, stopped.
pub fn reset(layout: &Layout) -> ScrollState {
    ScrollState {
        y_pos: layout.viewport_height() as i32,
        phase: Phase::Stopped,
        progress: 0.0,
    }
}

/// Reset the position of `previous` against a new layout, keeping its
/// running flag.
pub fn reset_from(previous: &ScrollState, layout: &Layout) -> ScrollState {
    let phase = previous
        .phase
        .apply(ScrollEvent::Reset)
        .unwrap_or(Phase::Stopped);
    ScrollState {
        phase,
        ..reset(layout)
    }
}

/// Result of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Position moved; keep ticking.
    Advanced(ScrollState),
    /// The last line passed the top of the viewport. The timer should stop.
    Finished(ScrollState),
    /// The session was not running; nothing moved.
    Idle(ScrollState),
}

impl TickOutcome {
    /// State after the tick, whatever the outcome.
    pub fn state(&self) -> ScrollState {
        match self {
            TickOutcome::Advanced(s) | TickOutcome::Finished(s) | TickOutcome::Idle(s) => *s,
        }
    }
}

/// Fraction of the scroll distance covered at `y_pos`.
pub fn progress_at(layout: &Layout, y_pos: i32) -> f64 {
    let travelled = f64::from(layout.viewport_height()) - f64::from(y_pos);
    let distance = f64::from(layout.total_scroll_distance().max(1));
    (travelled / distance).clamp(0.0, 1.0)
}

/// Advance a running session by `speed_px` pixels.
///
/// Line heights are untouched; only the position changes.
pub fn tick(state: ScrollState, layout: &Layout, speed_px: u32) -> TickOutcome {
    if !state.phase.is_running() {
        return TickOutcome::Idle(state);
    }

    let mut next = state;
    next.y_pos -= speed_px as i32;

    if next.content_bottom(layout) < 0 {
        next.phase = next
            .phase
            .apply(ScrollEvent::Finish)
            .unwrap_or(Phase::Finished);
        next.progress = 1.0;
        return TickOutcome::Finished(next);
    }

    next.progress = progress_at(layout, next.y_pos);
    TickOutcome::Advanced(next)
}
