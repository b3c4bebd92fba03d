//! Status line contents.

use std::fmt;

/// What the status bar reports.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Nothing has happened yet.
    Ready,
    /// Scrolling, with progress in `[0, 1]`.
    Running(f64),
    /// Scrolling halted by the user.
    Paused,
    /// The whole script has scrolled past.
    Finished,
    /// Position moved back below the fold.
    Reset,
    /// A new script was loaded from the named source.
    Loaded(String),
    /// Fullscreen switched on or off.
    Fullscreen(bool),
    /// Free-form confirmation of a settings change.
    Info(String),
}

impl Status {
    /// Progress as a whole percentage, for display.
    pub fn percent(progress: f64) -> u32 {
        (progress.clamp(0.0, 1.0) * 100.0) as u32
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => write!(f, "Ready"),
            Status::Running(progress) => write!(f, "Running — {}%", Status::percent(*progress)),
            Status::Paused => write!(f, "Paused"),
            Status::Finished => write!(f, "Finished"),
            Status::Reset => write!(f, "Reset"),
            Status::Loaded(source) => write!(f, "Loaded {source}"),
            Status::Fullscreen(true) => write!(f, "Fullscreen On"),
            Status::Fullscreen(false) => write!(f, "Fullscreen Off"),
            Status::Info(message) => write!(f, "{message}"),
        }
    }
}
