//! Config Module
//!
//! Centralized configuration for input bindings.

pub mod input_config;

pub use input_config::{InputConfig, MovementBindings};
