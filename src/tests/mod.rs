//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive a `TuiApp<TestBackend>` through the
//! [`crate::test_harness`] the way a presenter would: key presses and timer
//! ticks, then inspect the screen.
