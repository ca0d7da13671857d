//! Sphere primitive.
//!
//! Intersection uses the geometric form: project the centre onto the ray,
//! then step back and forth by the half-chord. Only valid for unit-length
//! ray directions.

use crate::hittable::{HitRecord, Hittable};
use crate::ray::Ray;
use crate::vector::Vec3;

/// Centre of the sphere in the reference scene.
pub const SCENE_CENTER: Vec3 = Vec3::new(-1.0, -1.5, -12.0);

/// Radius of the sphere in the reference scene.
pub const SCENE_RADIUS: f32 = 2.0;

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vec3,

    /// Radius of the sphere. Assumed positive, not validated.
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// The single sphere rendered by the binary.
    pub fn reference() -> Self {
        Self::new(SCENE_CENTER, SCENE_RADIUS)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, rec: &mut HitRecord) -> bool {
        let l = self.center - r.origin;
        let tca = l.dot(r.direction);
        // Squared distance from the centre to the ray's line
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;

        if d2 > r2 {
            return false;
        }

        let thc = (r2 - d2).sqrt();
        let mut t0 = tca - thc;
        let t1 = tca + thc;

        // Near root behind the origin: we are inside, or the sphere is behind us.
        if t0 < 0.0 {
            t0 = t1;
        }

        rec.t = t0;
        t0 >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hit(sphere: &Sphere, origin: Vec3, direction: Vec3) -> Option<f32> {
        let mut rec = HitRecord::far();
        sphere
            .hit(&Ray::new(origin, direction.normalize()), &mut rec)
            .then_some(rec.t)
    }

    #[test]
    fn head_on_hit_returns_near_root() {
        let s = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0);
        let t = hit(&s, Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert_relative_eq!(t, 8.0);
    }

    #[test]
    fn miss_beside_the_sphere() {
        let s = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0);
        assert!(hit(&s, Vec3::new(3.0, 0.0, 0.0), Vec3::NEG_Z).is_none());
    }

    #[test]
    fn tangent_ray_counts_as_hit() {
        // Offset exactly one radius sideways: d2 == r2, thc == 0.
        let s = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 2.0);
        let t = hit(&s, Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z).unwrap();
        assert_relative_eq!(t, 10.0);
    }

    #[test]
    fn origin_inside_returns_far_root() {
        let s = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 2.0);
        let t = hit(&s, Vec3::ZERO, Vec3::NEG_Z).unwrap();
        assert!(t >= 0.0);
        assert_relative_eq!(t, 3.0);
    }

    #[test]
    fn sphere_behind_origin_is_missed() {
        let s = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 2.0);
        assert!(hit(&s, Vec3::ZERO, Vec3::NEG_Z).is_none());
    }

    #[test]
    fn hit_distance_lands_on_surface() {
        let s = Sphere::reference();
        let dir = Vec3::new(-1.0, -1.5, -12.0).normalize();
        let t = hit(&s, Vec3::ZERO, dir).unwrap();
        let p = Ray::new(Vec3::ZERO, dir).at(t);
        assert_relative_eq!((p - s.center).length(), s.radius, epsilon = 1e-4);
    }
}
