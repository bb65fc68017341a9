//! Input module
//!
//! Logical keyboard state shared between the windowing host and the per-frame
//! avatar update.

pub mod keyboard;

pub use keyboard::{KeyCode, KeyboardState, MovementKeys};
