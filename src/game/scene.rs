//! Showcase scene assembly
//!
//! Wires the engine pieces (keyboard, avatar controller, follow camera,
//! animation mixer, collidable set) together with the game-side project
//! markers, and runs the fixed per-frame order:
//!
//! 1. camera follow (reads last frame's avatar position)
//! 2. input resolution + collision probing + integration (avatar update)
//! 3. mixer advance (clip time and fades)
//! 4. marker spin
//!
//! The camera deliberately runs before movement so it trails by one frame.

use glam::Vec3;
use crate::animation::{AnimationMixer, Clip};
use crate::avatar::AvatarController;
use crate::avatar::controller::{IDLE_CLIP, WALK_CLIP};
use crate::camera::FollowCamera;
use crate::input::{KeyCode, KeyboardState};
use crate::physics::{Collidable, CollidableId, CollidableSet, CollisionProber};

use super::markers::ProjectMarker;
use super::projects::Project;

/// Collidable identities below this value are reserved for static geometry;
/// markers are issued ids from here up.
const MARKER_ID_BASE: u64 = 1_000;

/// The walkable portfolio scene.
pub struct ShowcaseScene {
    /// Host-updated keyboard state
    pub keyboard: KeyboardState,
    /// Player avatar
    pub avatar: AvatarController,
    /// Third-person camera rig
    pub camera: FollowCamera,
    /// Walk/idle clip mixer
    pub mixer: AnimationMixer,
    /// Registered scene geometry
    pub collidables: CollidableSet,
    /// Floating project markers
    pub markers: Vec<ProjectMarker>,
    prober: CollisionProber,
    next_static_id: u64,
}

impl ShowcaseScene {
    /// Builds a scene from project records.
    ///
    /// Markers are created and their bounding boxes registered immediately;
    /// static showcase geometry arrives later via
    /// [`register_static_geometry`](Self::register_static_geometry).
    pub fn new(projects: &[Project]) -> Self {
        let mut collidables = CollidableSet::new();
        let markers: Vec<ProjectMarker> = projects
            .iter()
            .enumerate()
            .map(|(i, project)| {
                ProjectMarker::new(project, CollidableId(MARKER_ID_BASE + i as u64))
            })
            .collect();
        for marker in &markers {
            marker.mount(&mut collidables);
        }

        Self {
            keyboard: KeyboardState::new(),
            avatar: AvatarController::new(),
            camera: FollowCamera::new(),
            mixer: AnimationMixer::new(vec![Clip::new(IDLE_CLIP), Clip::new(WALK_CLIP)]),
            collidables,
            markers,
            prober: CollisionProber::new(),
            next_static_id: 0,
        }
    }

    /// Registers a batch of static geometry boxes (loader callback).
    ///
    /// Floors and other walk-over surfaces should be passed with
    /// [`Collidable::no_collide`] geometry so they stay out of the probes.
    ///
    /// # Returns
    ///
    /// The number of boxes newly registered
    pub fn register_static_geometry<I>(&mut self, boxes: I) -> usize
    where
        I: IntoIterator<Item = Collidable>,
    {
        let mut added = 0;
        for b in boxes {
            let id = CollidableId(self.next_static_id);
            self.next_static_id += 1;
            if self.collidables.register(id, b) {
                added += 1;
            }
        }
        added
    }

    /// Forwards a host key event to the keyboard state.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        self.keyboard.handle_key(key, pressed)
    }

    /// Runs one displayed frame.
    ///
    /// `dt` is the elapsed time since the previous frame in seconds; it only
    /// drives the decorative marker spin and the clip fades. Avatar movement
    /// is per-frame on purpose.
    pub fn tick(&mut self, dt: f32) {
        self.camera.update(self.avatar.position());

        let keys = self.keyboard.movement_snapshot();
        self.avatar
            .update(&keys, &self.prober, &self.collidables, &mut self.mixer);

        self.mixer.advance(dt);

        for marker in &mut self.markers {
            marker.update(dt);
        }
    }

    /// Marker nearest to the avatar, if any (detail-panel selection).
    pub fn nearest_marker(&self) -> Option<&ProjectMarker> {
        let pos = self.avatar.position();
        self.markers.iter().min_by(|a, b| {
            let da = (a.position - pos).length_squared();
            let db = (b.position - pos).length_squared();
            da.total_cmp(&db)
        })
    }

    /// Avatar position convenience accessor for hosts.
    pub fn avatar_position(&self) -> Vec3 {
        self.avatar.position()
    }
}
