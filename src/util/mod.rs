//! Shared utilities.
//!
//! Easing curves applied to rail progress.

pub mod easing;
