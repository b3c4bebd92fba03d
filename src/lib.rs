//! tprompt - terminal teleprompter
//!
//! Scrolls a script up the terminal at a steady pace, centered and large,
//! for reading aloud.
//!
//! Pure core, impure shell: [`engine`] wraps text and advances the scroll
//! position as plain functions, [`state`] turns key presses into state
//! changes, and [`view`] owns the terminal and the tick timer.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
