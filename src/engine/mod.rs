//! Text layout and scroll engine (pure core).
//!
//! The engine turns a document into a [`Layout`] for a viewport and font,
//! and advances a [`ScrollState`] over that layout one tick at a time.
//! Nothing here touches the terminal; the view layer derives screen
//! positions from the state.
//!
//! ```
//! use tprompt::engine::{self, FontMetrics, TickOutcome, Viewport};
//!
//! let layout = engine::wrap("Hello", Viewport::new(800, 600), &FontMetrics::estimated(36));
//! let mut state = engine::reset(&layout);
//! state.toggle().unwrap();
//!
//! let outcome = engine::tick(state, &layout, 2);
//! assert!(matches!(outcome, TickOutcome::Advanced(_)));
//! assert_eq!(outcome.state().y_pos, 598);
//! ```

pub mod layout;
pub mod metrics;
pub mod scroll;
pub mod wrap;

pub use layout::{wrap, Layout, Line};
pub use metrics::{FontMetrics, Viewport};
pub use scroll::{
    progress_at, reset, reset_from, tick, InvalidTransition, Phase, ScrollEvent, ScrollState,
    TickOutcome,
};
pub use wrap::{char_budget, MIN_CHARS_PER_LINE};
