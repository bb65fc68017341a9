//! Floating project markers
//!
//! Each portfolio project is represented in the scene by a slowly spinning
//! cube the player can walk up to. Markers are decorative (spin and hover
//! scaling are time-scaled, unlike avatar movement) but they block movement:
//! on mount each marker registers its bounding box into the collidable set.

use glam::Vec3;
use crate::physics::{Collidable, CollidableId, CollidableSet};

use super::projects::Project;

/// Spin speed around the Y axis, radians per second.
pub const MARKER_SPIN_SPEED: f32 = 0.5;

/// Uniform scale of a marker at rest.
pub const MARKER_BASE_SCALE: f32 = 1.5;

/// Uniform scale of a marker while hovered.
pub const MARKER_HOVER_SCALE: f32 = 1.8;

/// A project's in-scene marker: a unit cube at the project position, scaled
/// and spun for presentation.
#[derive(Debug, Clone)]
pub struct ProjectMarker {
    /// Slug of the project this marker shows
    pub project_id: String,
    /// World position of the cube center
    pub position: Vec3,
    /// Current spin angle around Y, radians
    pub rotation_y: f32,
    /// Whether the pointer is over the marker
    pub hovered: bool,
    /// Collidable identity issued at mount time
    collidable_id: CollidableId,
}

impl ProjectMarker {
    /// Creates a marker for a project record.
    ///
    /// `collidable_id` is the identity the marker registers its bounding box
    /// under; the scene issues these.
    pub fn new(project: &Project, collidable_id: CollidableId) -> Self {
        Self {
            project_id: project.id.clone(),
            position: project.position_vec(),
            rotation_y: 0.0,
            hovered: false,
            collidable_id,
        }
    }

    /// Current uniform scale (grows while hovered).
    pub fn scale(&self) -> f32 {
        if self.hovered {
            MARKER_HOVER_SCALE
        } else {
            MARKER_BASE_SCALE
        }
    }

    /// Collidable identity this marker registered under.
    pub fn collidable_id(&self) -> CollidableId {
        self.collidable_id
    }

    /// Axis-aligned bounding box of the marker at rest scale.
    ///
    /// The collision box ignores hover growth and spin; a stable box keeps
    /// the registry append-only.
    pub fn aabb(&self) -> Collidable {
        Collidable::from_center(self.position, Vec3::splat(MARKER_BASE_SCALE * 0.5))
    }

    /// Registers the marker's bounding box into the collidable set.
    ///
    /// Idempotent: re-mounting (hot reload, scene rebuild) does not duplicate
    /// the box.
    ///
    /// # Returns
    ///
    /// `true` if the box was newly registered
    pub fn mount(&self, collidables: &mut CollidableSet) -> bool {
        collidables.register(self.collidable_id, self.aabb())
    }

    /// Advances the decorative spin by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.rotation_y += MARKER_SPIN_SPEED * dt;
    }

    /// Sets the pointer-hover state.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}
