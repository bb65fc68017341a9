//! Portfolio Engine Library
//!
//! The real-time core of a walkable 3D portfolio showcase: a keyboard-driven
//! avatar strolls around a small static scene while floating project markers
//! decorate the space. This library owns the per-frame movement, collision
//! probing, animation switching, and camera following; rendering and asset
//! loading are external collaborators that plug into it.
//!
//! # Modules
//!
//! - [`avatar`] - Per-frame movement controller with whole-delta collision rollback
//! - [`physics`] - Ray-AABB queries and the collidable registry
//! - [`input`] - Platform-agnostic keyboard state
//! - [`camera`] - Third-person follow rig
//! - [`animation`] - Clip mixer with cross-fades
//!
//! # Example
//!
//! ```ignore
//! use portfolio_engine::avatar::AvatarController;
//! use portfolio_engine::animation::{AnimationMixer, Clip};
//! use portfolio_engine::camera::FollowCamera;
//! use portfolio_engine::input::{KeyCode, KeyboardState};
//! use portfolio_engine::physics::{CollidableSet, CollisionProber};
//!
//! let mut keyboard = KeyboardState::new();
//! let mut avatar = AvatarController::new();
//! let mut camera = FollowCamera::new();
//! let mut mixer = AnimationMixer::new(vec![Clip::new("Idle"), Clip::new("Walking")]);
//! let prober = CollisionProber::new();
//! let collidables = CollidableSet::new();
//!
//! // Host forwards key events between frames
//! keyboard.handle_key(KeyCode::W, true);
//!
//! // Once per rendered frame
//! camera.update(avatar.position());
//! avatar.update(&keyboard.movement, &prober, &collidables, &mut mixer);
//! mixer.advance(1.0 / 60.0);
//! ```

pub mod animation;
pub mod avatar;
pub mod camera;
pub mod input;
pub mod physics;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types at crate level for convenience
pub use animation::{AnimationError, AnimationMixer, Clip};
pub use avatar::AvatarController;
pub use camera::FollowCamera;
pub use input::{KeyCode, KeyboardState, MovementKeys};
pub use physics::{Collidable, CollidableId, CollidableSet, CollisionProber};
