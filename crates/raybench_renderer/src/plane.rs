//! Infinite plane primitive.

use std::sync::Arc;

use crate::{
    thing::{Intersection, Thing},
    Surface,
};
use raybench_math::{DVec3, Ray};

/// The set of points `p` with `dot(normal, p) + offset == 0`.
pub struct Plane {
    normal: DVec3,
    offset: f64,
    surface: Arc<dyn Surface>,
}

impl Plane {
    /// Create a new plane. `normal` must be unit length.
    pub fn new(normal: DVec3, offset: f64, surface: Arc<dyn Surface>) -> Self {
        Self {
            normal,
            offset,
            surface,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Thing for Plane {
    /// Rays travelling along the normal miss. Every other ray hits, including
    /// rays whose start is already past the plane: those report a negative
    /// distance.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let denom = self.normal.dot(ray.direction);
        if denom > 0.0 {
            return None;
        }

        let dist = (self.normal.dot(ray.start) + self.offset) / -denom;
        Some(Intersection::new(self, *ray, dist))
    }

    fn normal(&self, _pos: DVec3) -> DVec3 {
        self.normal
    }

    fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CheckerboardSurface;

    fn ground() -> Plane {
        Plane::new(DVec3::Y, 0.0, Arc::new(CheckerboardSurface))
    }

    #[test]
    fn test_plane_hit_from_above() {
        let ray = Ray::new(DVec3::new(0.0, 2.0, 0.0), DVec3::new(0.0, -1.0, 0.0));
        let plane = ground();
        let hit = plane.intersect(&ray).expect("downward ray hits the ground");
        assert_eq!(hit.dist, 2.0);
        assert_eq!(hit.position(), DVec3::ZERO);
    }

    #[test]
    fn test_plane_with_offset() {
        // y = 1 plane: dot(Y, p) - 1 == 0
        let plane = Plane::new(DVec3::Y, -1.0, Arc::new(CheckerboardSurface));
        let ray = Ray::new(DVec3::new(3.0, 4.0, -2.0), DVec3::new(0.0, -1.0, 0.0));
        let hit = plane.intersect(&ray).unwrap();
        assert_eq!(hit.dist, 3.0);
        assert_eq!(plane.offset(), -1.0);
    }

    #[test]
    fn test_plane_miss_moving_away() {
        let ray = Ray::new(DVec3::new(0.0, 2.0, 0.0), DVec3::new(0.0, 1.0, 0.0));
        assert!(ground().intersect(&ray).is_none());
    }

    #[test]
    fn test_parallel_ray_reports_negative_infinity() {
        // denom is 0.0, which is not > 0, and dividing by -0.0 gives -inf
        let ray = Ray::new(DVec3::new(0.0, 2.0, 0.0), DVec3::new(1.0, 0.0, 0.0));
        let plane = ground();
        let hit = plane.intersect(&ray).unwrap();
        assert_eq!(hit.dist, f64::NEG_INFINITY);
    }

    #[test]
    fn test_hit_behind_start_is_negative() {
        // Start below the ground, pointing further down. The plane is behind
        // the ray, but the hit is still reported with a negative distance.
        let ray = Ray::new(DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, -1.0, 0.0));
        let plane = ground();
        let hit = plane.intersect(&ray).unwrap();
        assert_eq!(hit.dist, -1.0);
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = ground();
        assert_eq!(plane.normal(DVec3::new(5.0, 0.0, -3.0)), DVec3::Y);
        assert_eq!(plane.normal(DVec3::ZERO), DVec3::Y);
    }
}
