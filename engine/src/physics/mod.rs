//! Physics module
//!
//! Ray-AABB collision queries and the movement prober that keeps the avatar
//! out of registered scene geometry.

pub mod collision;
pub mod prober;

pub use collision::{Collidable, CollidableId, CollidableSet, RayHit, ray_aabb_intersect};
pub use prober::{CollisionProber, ProbeConfig};
