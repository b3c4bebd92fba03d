//! Domain model types (pure).

pub mod document;
pub mod error;
pub mod key_action;

pub use document::Document;
pub use error::{AppError, LoadError};
pub use key_action::KeyAction;
