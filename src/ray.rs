//! Ray representation.
//!
//! A ray is r(t) = origin + t * direction. Primary rays are built by the
//! camera and only live for the duration of one pixel.

use crate::vector::Vec3;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Vec3,

    /// Direction of the ray.
    ///
    /// Must be unit length when the ray is handed to a [`Hittable`](crate::hittable::Hittable);
    /// the sphere test relies on it to skip the quadratic's `a` term.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_walks_along_direction() {
        let r = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(r.at(0.0), r.origin);
        assert_eq!(r.at(2.5), Vec3::new(1.0, 0.0, -2.5));
    }
}
