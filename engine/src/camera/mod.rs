//! Camera module
//!
//! Third-person follow rig consumed by the external renderer.

pub mod follow;

pub use follow::FollowCamera;
