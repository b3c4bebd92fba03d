//! Application controller (pure state, no terminal access).

pub mod app_state;
pub mod key_handler;
pub mod prompt;
pub mod status;

pub use app_state::{AppState, Notice};
pub use key_handler::{apply_action, handle_key, Effect};
pub use prompt::{Prompt, PromptKind};
pub use status::Status;
