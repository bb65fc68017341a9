//! Avatar module
//!
//! Per-frame movement, rotation, and animation control for the player avatar.

pub mod controller;

pub use controller::{AvatarController, ResolvedInput};
