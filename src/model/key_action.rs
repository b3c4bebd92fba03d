//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Start scrolling, or pause when running. Default: Space
    ToggleRunning,
    /// Move the script back below the fold. Default: r
    Reset,
    /// Scroll faster by one pixel per tick. Default: ↑
    SpeedUp,
    /// Scroll slower by one pixel per tick. Default: ↓
    SpeedDown,

    // Appearance
    /// Grow the font by one step. Default: + / =
    FontUp,
    /// Shrink the font by one step. Default: -
    FontDown,
    /// Hide or show toolbar and status bar. Default: F11 / f
    ToggleFullscreen,
    /// Toggle the drop shadow. Default: s
    ToggleShadow,
    /// Enter a new text color. Default: t
    ChooseTextColor,
    /// Enter a new background color. Default: b
    ChooseBgColor,

    // Script
    /// Enter a path and load it. Default: o
    OpenFile,
    /// Edit the script in $EDITOR. Default: e
    Edit,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
