//! Vector algebra used by the whole pipeline.
//!
//! Points, directions and colours are all `glam::Vec3A`: a `Copy` value type
//! with SIMD-backed `+`, `-`, scalar `*`, `dot`, `length`, `length_squared`
//! and `normalize`. Nothing here mutates shared state.

use glam::Vec3A;

/// Point or direction in world space.
pub type Vec3 = Vec3A;

/// Linear RGB colour, each channel nominally in [0, 1].
pub type Color = Vec3A;

/// Normalize vector to unit length.
///
/// `v` must be non-zero. The zero vector yields NaN components; the camera
/// never produces one because every direction it builds has `z = -1`.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    v.normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);

        assert_eq!(a + b, Vec3::new(-3.0, 2.5, 5.0));
        assert_eq!(a - b, Vec3::new(5.0, 1.5, 1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), -4.0 + 1.0 + 6.0);
        assert_eq!(a.length_squared(), 14.0);
    }

    #[test]
    fn unit_vector_has_length_one() {
        let v = unit_vector(Vec3::new(3.0, -4.0, 12.0));
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(v.x, 3.0 / 13.0, epsilon = 1e-6);
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        let once = unit_vector(Vec3::new(0.3, 0.2, -1.0));
        let twice = unit_vector(once);
        assert_abs_diff_eq!(twice.length(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(once.x, twice.x, epsilon = 1e-6);
        assert_abs_diff_eq!(once.y, twice.y, epsilon = 1e-6);
        assert_abs_diff_eq!(once.z, twice.z, epsilon = 1e-6);
    }
}
