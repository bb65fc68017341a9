//! Movement collision prober
//!
//! Decides whether a desired per-frame movement delta is allowed. Five rays
//! are cast from hip height along the movement direction: center, two lateral
//! offsets, a forward offset, and a forward-right diagonal. Any valid hit
//! within range rejects the whole movement (binary accept/reject, no sliding).
//!
//! # Example
//!
//! ```ignore
//! use portfolio_engine::physics::prober::CollisionProber;
//! use portfolio_engine::physics::collision::CollidableSet;
//! use glam::Vec3;
//!
//! let prober = CollisionProber::new();
//! let set = CollidableSet::new();
//! let blocked = prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set);
//! assert!(!blocked); // empty set never blocks
//! ```

use glam::Vec3;

use super::collision::{CollidableId, CollidableSet};

/// Height above the avatar's ground position that probe rays originate from.
/// Keeps rays clear of the floor plane.
pub const HIP_HEIGHT: f32 = 0.5;

/// Sideways displacement of the lateral probe origins, in world units.
/// Roughly the avatar's shoulder half-width.
pub const LATERAL_OFFSET: f32 = 0.3;

/// Forward displacement of the leading probe origins, in world units.
pub const FORWARD_OFFSET: f32 = 0.4;

/// Extra reach added past the movement delta so the avatar stops short of
/// surfaces instead of touching them.
pub const COLLISION_MARGIN: f32 = 0.5;

/// Hits closer than this are degenerate self-intersections at the probe
/// origin and are ignored.
pub const MIN_HIT_DISTANCE: f32 = 1e-4;

/// Deltas shorter than this are treated as no movement (fast-path accept).
pub const MIN_MOVE_DISTANCE: f32 = 1e-5;

/// Probe geometry parameters. Defaults match the avatar's proportions.
#[derive(Debug, Clone, Copy)]
pub struct ProbeConfig {
    /// Ray origin height above the ground position
    pub hip_height: f32,
    /// Sideways displacement of the lateral probes
    pub lateral_offset: f32,
    /// Forward displacement of the leading probes
    pub forward_offset: f32,
    /// Extra ray range beyond the movement delta
    pub collision_margin: f32,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            hip_height: HIP_HEIGHT,
            lateral_offset: LATERAL_OFFSET,
            forward_offset: FORWARD_OFFSET,
            collision_margin: COLLISION_MARGIN,
        }
    }
}

/// Casts the five movement probes and reports whether a desired delta would
/// collide.
///
/// Probes are evaluated in a fixed order (center, left, right, forward,
/// forward-right); the first valid hit rejects the movement and skips the
/// remaining probes.
#[derive(Debug, Clone, Default)]
pub struct CollisionProber {
    config: ProbeConfig,
    excluded: Option<CollidableId>,
}

impl CollisionProber {
    /// Creates a prober with default probe geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a prober with custom probe geometry.
    pub fn with_config(config: ProbeConfig) -> Self {
        Self {
            config,
            excluded: None,
        }
    }

    /// Sets the collidable identity to ignore during probing.
    ///
    /// The avatar's own body is never supposed to be a blocking member of the
    /// set, but this makes self-hits impossible even if it gets registered.
    pub fn set_excluded(&mut self, id: Option<CollidableId>) {
        self.excluded = id;
    }

    /// Returns the identity currently excluded from probing, if any.
    pub fn excluded(&self) -> Option<CollidableId> {
        self.excluded
    }

    /// Checks whether moving by `delta` from `position` would collide.
    ///
    /// # Returns
    ///
    /// `true` if the movement must be rejected, `false` if it is clear
    pub fn is_blocked(&self, position: Vec3, delta: Vec3, collidables: &CollidableSet) -> bool {
        let distance = delta.length();
        if distance < MIN_MOVE_DISTANCE || collidables.is_empty() {
            return false;
        }

        let direction = delta / distance;
        let range = distance + self.config.collision_margin;

        // Movement direction rotated 90 degrees clockwise in the horizontal
        // plane; for direction (0,0,-1) this points along +X
        let right = Vec3::new(-direction.z, 0.0, direction.x);

        let center = position + Vec3::new(0.0, self.config.hip_height, 0.0);
        let origins = [
            center,
            center - right * self.config.lateral_offset,
            center + right * self.config.lateral_offset,
            center + direction * self.config.forward_offset,
            center + direction * self.config.forward_offset + right * self.config.lateral_offset,
        ];

        for origin in origins {
            if collidables.ray_test(origin, direction, range, MIN_HIT_DISTANCE, self.excluded) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::Collidable;

    fn wall_ahead() -> CollidableSet {
        let mut set = CollidableSet::new();
        // Wall spanning x in [-2,2] directly ahead of the origin on -Z
        set.register(
            CollidableId(1),
            Collidable::new(Vec3::new(-2.0, 0.0, -0.6), Vec3::new(2.0, 2.0, -0.4)),
        );
        set
    }

    #[test]
    fn test_empty_set_accepts() {
        let prober = CollisionProber::new();
        let set = CollidableSet::new();
        assert!(!prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set));
    }

    #[test]
    fn test_zero_delta_accepts() {
        let prober = CollisionProber::new();
        let set = wall_ahead();
        assert!(!prober.is_blocked(Vec3::ZERO, Vec3::ZERO, &set));
    }

    #[test]
    fn test_wall_in_margin_blocks() {
        let prober = CollisionProber::new();
        let set = wall_ahead();
        // Wall face at z=-0.4: within 0.1 + 0.5 margin reach
        assert!(prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set));
    }

    #[test]
    fn test_wall_out_of_range_accepts() {
        let prober = CollisionProber::new();
        let mut set = CollidableSet::new();
        set.register(
            CollidableId(1),
            Collidable::new(Vec3::new(-2.0, 0.0, -5.0), Vec3::new(2.0, 2.0, -4.0)),
        );
        assert!(!prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set));
    }

    #[test]
    fn test_moving_away_from_wall_accepts() {
        let prober = CollisionProber::new();
        let set = wall_ahead();
        assert!(!prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.1), &set));
    }

    #[test]
    fn test_no_collide_wall_accepts() {
        let prober = CollisionProber::new();
        let mut set = CollidableSet::new();
        set.register(
            CollidableId(1),
            Collidable::no_collide(Vec3::new(-2.0, 0.0, -0.6), Vec3::new(2.0, 2.0, -0.4)),
        );
        assert!(!prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set));
    }

    #[test]
    fn test_excluded_id_never_blocks() {
        let mut prober = CollisionProber::new();
        let set = wall_ahead();
        prober.set_excluded(Some(CollidableId(1)));
        assert!(!prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set));
    }

    #[test]
    fn test_lateral_probe_catches_offset_wall() {
        let prober = CollisionProber::new();
        let mut set = CollidableSet::new();
        // Narrow post ahead and to the right of the center line; only the
        // right lateral probe origin (x = +0.3) lines up with it
        set.register(
            CollidableId(1),
            Collidable::new(Vec3::new(0.25, 0.0, -0.6), Vec3::new(0.35, 2.0, -0.4)),
        );
        assert!(prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set));
    }

    #[test]
    fn test_probe_rays_clear_low_floor() {
        let prober = CollisionProber::new();
        let mut set = CollidableSet::new();
        // Thin slab below hip height; rays at y=0.5 travel parallel above it
        set.register(
            CollidableId(1),
            Collidable::new(Vec3::new(-10.0, -0.1, -10.0), Vec3::new(10.0, 0.1, 10.0)),
        );
        assert!(!prober.is_blocked(Vec3::ZERO, Vec3::new(0.0, 0.0, -0.1), &set));
    }
}
