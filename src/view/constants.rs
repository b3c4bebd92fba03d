//! Layout dimension constants for TUI rendering.

/// Height of the toolbar in lines.
pub const TOOLBAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text, or the input prompt while one is open.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for the notice popup.
pub const NOTICE_POPUP_WIDTH_PERCENT: u16 = 60;

/// Fixed height of the notice popup (border + message + hint).
pub const NOTICE_POPUP_HEIGHT: u16 = 7;

/// Poll timeout while nothing is scrolling.
pub const IDLE_POLL_MS: u64 = 250;
