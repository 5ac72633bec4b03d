use crate::DVec3;

/// A ray in 3D space with a start point and a direction.
///
/// The direction is normalized by every call site that builds a ray, but the
/// type does not enforce it. Shadow tests compare hit distances against world
/// distances and rely on that convention.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub start: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(start: DVec3, direction: DVec3) -> Self {
        Self { start, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: start + direction * t
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.start + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let start = DVec3::new(1.0, 2.0, 3.0);
        let direction = DVec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(start, direction);

        assert_eq!(ray.start, start);
        assert_eq!(ray.direction, direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        assert_eq!(ray.at(0.0), DVec3::ZERO);
        assert_eq!(ray.at(1.0), DVec3::X);
        assert_eq!(ray.at(2.0), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), DVec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(DVec3::ZERO, DVec3::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.start, ray2.start);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
