//! Thing trait and Intersection for ray-object intersection.

use std::fmt;

use crate::Surface;
use raybench_math::{DVec3, Ray};

/// Record of a ray hitting a thing.
#[derive(Clone, Copy)]
pub struct Intersection<'a> {
    /// The thing that was hit
    pub thing: &'a dyn Thing,
    /// The ray that hit it
    pub ray: Ray,
    /// Ray parameter of the hit. Plane hits may be negative.
    pub dist: f64,
}

impl<'a> Intersection<'a> {
    pub fn new(thing: &'a dyn Thing, ray: Ray, dist: f64) -> Self {
        Self { thing, ray, dist }
    }

    /// World-space hit position.
    #[inline]
    pub fn position(&self) -> DVec3 {
        self.ray.at(self.dist)
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("thing", &(self.thing as *const dyn Thing as *const ()))
            .field("ray", &self.ray)
            .field("dist", &self.dist)
            .finish()
    }
}

/// Trait for objects that can be hit by rays.
pub trait Thing: Send + Sync {
    /// Intersect a ray with this thing.
    fn intersect(&self, ray: &Ray) -> Option<Intersection<'_>>;

    /// Unit surface normal at a point on the thing.
    fn normal(&self, pos: DVec3) -> DVec3;

    /// Shading properties of the thing.
    fn surface(&self) -> &dyn Surface;
}

/// Whether two thing references point at the same object.
pub fn same_thing(a: &dyn Thing, b: &dyn Thing) -> bool {
    std::ptr::addr_eq(a as *const dyn Thing, b as *const dyn Thing)
}
