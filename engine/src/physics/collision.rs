//! Collision detection module
//!
//! Provides ray-AABB intersection (slab method) and the [`CollidableSet`]
//! registry that the movement prober casts against.
//!
//! # Registry model
//!
//! Static scene geometry and project markers arrive asynchronously (the
//! showcase model loads after the avatar spawns; markers register on mount),
//! so collidable surfaces are push-registered into an explicit set instead of
//! re-scanning a scene graph every frame. Registration is idempotent by
//! [`CollidableId`]; the set only grows during scene warm-up.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_engine::physics::collision::{Collidable, CollidableId, CollidableSet};
//! use glam::Vec3;
//!
//! let mut set = CollidableSet::new();
//! set.register(
//!     CollidableId(1),
//!     Collidable::new(Vec3::new(-1.0, 0.0, -3.0), Vec3::new(1.0, 2.0, -2.5)),
//! );
//!
//! let origin = Vec3::new(0.0, 0.5, 0.0);
//! let dir = Vec3::new(0.0, 0.0, -1.0);
//! if let Some(hit) = set.ray_cast(origin, dir, 10.0, None) {
//!     println!("Hit {:?} at distance {}", hit.id, hit.distance);
//! }
//! ```

use glam::Vec3;
use std::collections::HashMap;

/// Opaque identity for a registered collidable surface.
///
/// Issued by whoever registers the surface (loader, marker mount). The set
/// uses it for idempotent registration and for self-exclusion filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollidableId(pub u64);

/// A single collidable surface: an axis-aligned bounding box plus an opt-out
/// flag for geometry that should never obstruct movement (floors, rugs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collidable {
    /// Minimum corner of the AABB in world space
    pub min: Vec3,
    /// Maximum corner of the AABB in world space
    pub max: Vec3,
    /// When true, rays pass through this surface (floor opt-out)
    pub no_collide: bool,
}

impl Collidable {
    /// Creates a blocking collidable from AABB corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            no_collide: false,
        }
    }

    /// Creates a non-blocking collidable (present in the set, skipped by rays).
    pub fn no_collide(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            no_collide: true,
        }
    }

    /// Creates a blocking collidable from a center point and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }
}

/// Information about a ray hit against a registered collidable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Identity of the struck collidable
    pub id: CollidableId,
    /// World-space position of the hit point
    pub position: Vec3,
    /// Distance from ray origin to the hit point
    pub distance: f32,
}

/// Performs ray-AABB intersection using the slab method.
///
/// Finds entry and exit times for each axis pair of planes; the ray hits the
/// box when the latest entry precedes the earliest exit and the exit is not
/// behind the origin.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection, or the box is entirely behind the origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Inverse direction; near-zero components get huge values with the
    // original sign so the slab test degenerates correctly
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    let t1 = (aabb_min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb_max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    let t3 = (aabb_min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb_max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    let t5 = (aabb_min.z - ray_origin.z) * inv_dir.z;
    let t6 = (aabb_max.z - ray_origin.z) * inv_dir.z;

    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// Registry of collidable surfaces the avatar can be obstructed by.
///
/// Populated by external loaders (static showcase geometry) and by project
/// markers on mount. The per-frame movement update only reads it; all
/// mutation happens through the registration API between frames.
#[derive(Debug, Clone, Default)]
pub struct CollidableSet {
    entries: HashMap<CollidableId, Collidable>,
}

impl CollidableSet {
    /// Creates an empty collidable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one collidable surface.
    ///
    /// Idempotent: if the identity is already known the call is a no-op and
    /// the existing geometry is kept.
    ///
    /// # Returns
    ///
    /// `true` if the surface was newly added, `false` if it was already known
    pub fn register(&mut self, id: CollidableId, collidable: Collidable) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }
        self.entries.insert(id, collidable);
        true
    }

    /// Registers a batch of collidables, skipping already-known identities.
    ///
    /// # Returns
    ///
    /// The number of surfaces newly added
    pub fn register_all<I>(&mut self, collidables: I) -> usize
    where
        I: IntoIterator<Item = (CollidableId, Collidable)>,
    {
        let mut added = 0;
        for (id, collidable) in collidables {
            if self.register(id, collidable) {
                added += 1;
            }
        }
        added
    }

    /// Gets the collidable registered under the given identity, if any.
    pub fn get(&self, id: CollidableId) -> Option<&Collidable> {
        self.entries.get(&id)
    }

    /// Returns true if the identity is already registered.
    pub fn contains(&self, id: CollidableId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Returns the number of registered surfaces (including `no_collide` ones).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over all (id, collidable) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&CollidableId, &Collidable)> {
        self.entries.iter()
    }

    /// Casts a ray against all blocking surfaces and returns the closest hit.
    ///
    /// Surfaces flagged `no_collide` and the optional `exclude` identity are
    /// skipped. Brute-force iteration is fine at showcase scale (a handful of
    /// walls plus a few markers).
    ///
    /// # Arguments
    ///
    /// * `origin` - Ray starting position
    /// * `direction` - Ray direction (should be normalized)
    /// * `max_dist` - Maximum distance to consider
    /// * `exclude` - Identity to ignore (the avatar's own body, if registered)
    pub fn ray_cast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_dist: f32,
        exclude: Option<CollidableId>,
    ) -> Option<RayHit> {
        let mut closest: Option<RayHit> = None;
        let mut closest_dist = max_dist;

        for (&id, collidable) in &self.entries {
            if collidable.no_collide || Some(id) == exclude {
                continue;
            }
            if let Some(t) = ray_aabb_intersect(origin, direction, collidable.min, collidable.max)
            {
                if t >= 0.0 && t < closest_dist {
                    closest = Some(RayHit {
                        id,
                        position: origin + direction * t,
                        distance: t,
                    });
                    closest_dist = t;
                }
            }
        }

        closest
    }

    /// Checks whether a ray hits any blocking surface within range.
    ///
    /// Hits at distances at or below `min_dist` are ignored; they are
    /// degenerate self-intersections at the probe origin. Faster than
    /// [`ray_cast`](Self::ray_cast) because it returns on the first valid hit.
    pub fn ray_test(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_dist: f32,
        min_dist: f32,
        exclude: Option<CollidableId>,
    ) -> bool {
        for (&id, collidable) in &self.entries {
            if collidable.no_collide || Some(id) == exclude {
                continue;
            }
            if let Some(t) = ray_aabb_intersect(origin, direction, collidable.min, collidable.max)
            {
                if t > min_dist && t < max_dist {
                    return true;
                }
            }
        }
        false
    }
}
