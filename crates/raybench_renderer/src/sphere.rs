//! Sphere primitive for ray tracing.

use std::sync::Arc;

use crate::{
    thing::{Intersection, Thing},
    Surface,
};
use raybench_math::{normalize, DVec3, Ray};

/// A sphere primitive.
pub struct Sphere {
    center: DVec3,
    radius2: f64,
    surface: Arc<dyn Surface>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, surface: Arc<dyn Surface>) -> Self {
        Self {
            center,
            radius2: radius * radius,
            surface,
        }
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Squared radius.
    pub fn radius2(&self) -> f64 {
        self.radius2
    }
}

impl Thing for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let eo = self.center - ray.start;
        let v = eo.dot(ray.direction);

        // Center is behind the ray start
        if v < 0.0 {
            return None;
        }

        let disc = self.radius2 - (eo.dot(eo) - v * v);
        if disc < 0.0 {
            return None;
        }

        let dist = v - disc.sqrt();

        // A ray starting exactly on the surface does not hit it
        if dist == 0.0 {
            return None;
        }

        Some(Intersection::new(self, *ray, dist))
    }

    fn normal(&self, pos: DVec3) -> DVec3 {
        normalize(pos - self.center)
    }

    fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }
}
