//! Animation module
//!
//! Clip mixing and cross-fades for the avatar's walk/idle cycle.

pub mod mixer;

pub use mixer::{AnimationError, AnimationMixer, Clip};
