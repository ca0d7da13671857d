//! Ray caster: turns a single ray into a colour.
//!
//! There is no shading model. A ray either hits the scene and gets
//! [`OBJECT_COLOR`] or misses and gets [`BACKGROUND`].

use crate::hittable::{HitRecord, Hittable};
use crate::ray::Ray;
use crate::vector::Color;

/// Colour returned for rays that miss everything.
pub const BACKGROUND: Color = Color::new(0.2, 0.7, 0.8);

/// Colour returned for any hit, regardless of distance or orientation.
pub const OBJECT_COLOR: Color = Color::new(0.4, 0.4, 0.3);

/// Trace a ray against `world` and return its colour.
pub fn cast_ray(r: &Ray, world: &dyn Hittable) -> Color {
    // The starting distance is never read by the hit test; it computes its own.
    let mut rec = HitRecord::far();

    if !world.hit(r, &mut rec) {
        return BACKGROUND;
    }

    OBJECT_COLOR
}
