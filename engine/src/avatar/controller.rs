//! Avatar movement controller
//!
//! Runs the per-frame movement resolution for the player avatar: resolves the
//! keyboard snapshot into a planar delta and a target facing angle, asks the
//! collision prober whether the delta is allowed, integrates position with
//! whole-delta rollback on rejection, smooths rotation toward the target, and
//! drives walk/idle clip switches on moving-state edges.
//!
//! Movement speed is deliberately expressed in units per frame rather than
//! units per second, so a faster display walks the avatar faster. This
//! matches the shipped behavior and must not be "corrected" to dt scaling.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_engine::avatar::AvatarController;
//! use portfolio_engine::animation::{AnimationMixer, Clip};
//! use portfolio_engine::input::MovementKeys;
//! use portfolio_engine::physics::{CollidableSet, CollisionProber};
//!
//! let mut avatar = AvatarController::new();
//! let mut mixer = AnimationMixer::new(vec![Clip::new("Idle"), Clip::new("Walking")]);
//! let prober = CollisionProber::new();
//! let set = CollidableSet::new();
//!
//! let keys = MovementKeys { forward: true, ..Default::default() };
//! avatar.update(&keys, &prober, &set, &mut mixer);
//! ```

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::animation::AnimationMixer;
use crate::input::MovementKeys;
use crate::physics::{CollidableSet, CollisionProber};

/// Distance the avatar covers per frame while a movement key is held.
/// Per frame, not per second: frame-rate dependent by design.
pub const MOVEMENT_SPEED: f32 = 0.1;

/// Fraction of the remaining angle the facing rotation closes each frame.
pub const ROTATION_SMOOTHING: f32 = 0.1;

/// Clip played while moving.
pub const WALK_CLIP: &str = "Walking";

/// Clip played while standing still.
pub const IDLE_CLIP: &str = "Idle";

/// Playback rate of the walking clip (footsteps match the ground speed).
pub const WALK_PLAYBACK_RATE: f32 = 1.5;

/// Playback rate of the idle clip.
pub const IDLE_PLAYBACK_RATE: f32 = 1.0;

/// Duration of the walk/idle cross-fade, in seconds.
pub const CROSSFADE_DURATION: f32 = 0.2;

/// Result of resolving one frame's keyboard snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInput {
    /// Desired planar displacement for this frame
    pub delta: Vec3,
    /// Facing angle the held keys ask for (radians)
    pub target_rotation_y: f32,
    /// True if any movement key produced a delta
    pub moved: bool,
}

/// Per-frame state of the player avatar.
///
/// `update` must run after the camera follower has read the previous frame's
/// pose and before the mixer's `advance`, once per rendered frame.
#[derive(Debug, Clone)]
pub struct AvatarController {
    /// Current world position; never left inside geometry at frame end
    position: Vec3,
    /// Position at the start of the current frame; rollback target
    previous_position: Vec3,
    /// Current facing angle in radians, unconstrained
    rotation_y: f32,
    /// Facing angle the rotation is easing toward
    target_rotation_y: f32,
    /// Whether any movement key was held last frame
    was_moving: bool,
    /// Distance covered per frame
    movement_speed: f32,
    /// Rotation easing fraction per frame
    rotation_smoothing: f32,
}

impl Default for AvatarController {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarController {
    /// Creates an avatar at the origin, facing the camera.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            previous_position: Vec3::ZERO,
            rotation_y: 0.0,
            target_rotation_y: 0.0,
            was_moving: false,
            movement_speed: MOVEMENT_SPEED,
            rotation_smoothing: ROTATION_SMOOTHING,
        }
    }

    /// Creates an avatar at a spawn position.
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            previous_position: position,
            ..Self::new()
        }
    }

    /// Current world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position at the start of the last resolved frame.
    pub fn previous_position(&self) -> Vec3 {
        self.previous_position
    }

    /// Current facing angle in radians.
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    /// Facing angle the rotation is easing toward.
    pub fn target_rotation_y(&self) -> f32 {
        self.target_rotation_y
    }

    /// Whether a movement key was held on the last resolved frame.
    pub fn is_moving(&self) -> bool {
        self.was_moving
    }

    /// Overrides the per-frame movement speed.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    /// Teleports the avatar, clearing any pending rollback.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.previous_position = position;
    }

    /// Resolves a keyboard snapshot into a movement delta and target facing.
    ///
    /// Forward wins over backward and left wins over right when opposing keys
    /// are held; the two axes combine for diagonals. Each held direction sets
    /// a fixed facing angle, the horizontal axis last, so a diagonal faces
    /// sideways. With nothing held the target facing is left untouched.
    pub fn resolve_input(&self, keys: &MovementKeys) -> ResolvedInput {
        let mut delta = Vec3::ZERO;
        let mut target = self.target_rotation_y;

        if keys.forward {
            delta.z -= self.movement_speed;
            target = PI;
        } else if keys.backward {
            delta.z += self.movement_speed;
            target = 0.0;
        }

        if keys.left {
            delta.x -= self.movement_speed;
            target = -FRAC_PI_2;
        } else if keys.right {
            delta.x += self.movement_speed;
            target = FRAC_PI_2;
        }

        ResolvedInput {
            delta,
            target_rotation_y: target,
            moved: delta != Vec3::ZERO,
        }
    }

    /// Runs one frame of movement, rotation, and animation switching.
    ///
    /// The position the prober sees is the resting position of the previous
    /// frame, so a rejected movement leaves the avatar exactly where the last
    /// accepted frame put it.
    pub fn update(
        &mut self,
        keys: &MovementKeys,
        prober: &CollisionProber,
        collidables: &CollidableSet,
        mixer: &mut AnimationMixer,
    ) {
        self.previous_position = self.position;

        let input = self.resolve_input(keys);
        self.target_rotation_y = input.target_rotation_y;

        if input.moved {
            if prober.is_blocked(self.previous_position, input.delta, collidables) {
                self.position = self.previous_position;
            } else {
                self.position = self.previous_position + input.delta;
            }
        }

        self.smooth_rotation();
        self.apply_animation_edge(input.moved, mixer);
        self.was_moving = input.moved;
    }

    /// Eases the facing angle toward the target along the shortest arc.
    fn smooth_rotation(&mut self) {
        let mut diff = self.target_rotation_y - self.rotation_y;
        // Remap into (-pi, pi] with a single full-turn correction
        if diff > PI {
            diff -= TAU;
        } else if diff < -PI {
            diff += TAU;
        }
        self.rotation_y += diff * self.rotation_smoothing;
    }

    /// Issues a clip switch on moving-state edges only.
    ///
    /// Playback failures are logged and swallowed; animation must never stall
    /// the movement update.
    fn apply_animation_edge(&self, moved: bool, mixer: &mut AnimationMixer) {
        if moved == self.was_moving {
            return;
        }
        let (clip, rate) = if moved {
            (WALK_CLIP, WALK_PLAYBACK_RATE)
        } else {
            (IDLE_CLIP, IDLE_PLAYBACK_RATE)
        };
        if let Err(e) = mixer.switch_to(clip, rate, CROSSFADE_DURATION) {
            println!("[Avatar] Clip switch to '{}' failed: {}", clip, e);
        }
    }
}
