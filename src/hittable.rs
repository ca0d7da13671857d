//! Ray-object intersection interface.
//!
//! The caster only knows about [`Hittable`], so anything that can answer
//! "does this ray hit you, and how far along" can stand in for the sphere.

use crate::ray::Ray;

/// Ray-object intersection information.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// Distance along the ray to the intersection point
    pub t: f32,
}

impl HitRecord {
    /// Record primed with the "nothing hit yet" distance.
    pub fn far() -> Self {
        Self { t: f32::MAX }
    }
}

/// Trait for objects that can be intersected by rays.
///
/// `Sync + Send` so a single scene can be shared by all rasterizer workers.
pub trait Hittable: Sync + Send {
    /// Test `r` against the object.
    ///
    /// Returns true on a hit at a non-negative distance, in which case
    /// `rec.t` holds that distance. `rec` may be written even on a miss.
    fn hit(&self, r: &Ray, rec: &mut HitRecord) -> bool;
}
