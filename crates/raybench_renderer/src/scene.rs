//! Runtime scene consumed by the ray tracer.

use std::sync::Arc;

use raybench_core::{SceneDescription, SceneError, SurfaceKind, ThingDescription};
use raybench_math::{Color, DVec3};

use crate::{surface::surface_for, Camera, Plane, Sphere, Surface, Thing};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub pos: DVec3,
    pub color: Color,
}

impl Light {
    pub fn new(pos: DVec3, color: Color) -> Self {
        Self { pos, color }
    }
}

/// Things, lights and a camera. Never mutated while a render is running.
///
/// Thing order matters only when two things are hit at exactly the same
/// distance: the earlier one wins.
pub struct Scene {
    pub things: Vec<Box<dyn Thing>>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    pub fn new(things: Vec<Box<dyn Thing>>, lights: Vec<Light>, camera: Camera) -> Self {
        Self {
            things,
            lights,
            camera,
        }
    }

    /// Validate a scene description and build the runtime scene from it.
    ///
    /// Things of the same surface kind share one surface instance.
    pub fn from_description(description: &SceneDescription) -> Result<Self, SceneError> {
        description.validate()?;
        Ok(Self::build(description))
    }

    /// The reference benchmark scene.
    pub fn canonical() -> Self {
        Self::build(&SceneDescription::canonical())
    }

    fn build(description: &SceneDescription) -> Self {
        let shiny = surface_for(SurfaceKind::Shiny);
        let checkerboard = surface_for(SurfaceKind::Checkerboard);
        let shared = |kind: SurfaceKind| -> Arc<dyn Surface> {
            match kind {
                SurfaceKind::Shiny => Arc::clone(&shiny),
                SurfaceKind::Checkerboard => Arc::clone(&checkerboard),
            }
        };

        let things = description
            .things
            .iter()
            .map(|thing| -> Box<dyn Thing> {
                match *thing {
                    ThingDescription::Sphere {
                        center,
                        radius,
                        surface,
                    } => Box::new(Sphere::new(center, radius, shared(surface))),
                    ThingDescription::Plane {
                        normal,
                        offset,
                        surface,
                    } => Box::new(Plane::new(normal, offset, shared(surface))),
                }
            })
            .collect();

        let lights = description
            .lights
            .iter()
            .map(|light| Light::new(light.pos, light.color))
            .collect();

        let camera = Camera::new(description.camera.pos, description.camera.look_at);

        Self::new(things, lights, camera)
    }

    /// Get thing count.
    pub fn thing_count(&self) -> usize {
        self.things.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raybench_math::{Ray, FAR_AWAY};

    #[test]
    fn test_canonical_scene() {
        let scene = Scene::canonical();
        assert_eq!(scene.thing_count(), 3);
        assert_eq!(scene.light_count(), 4);
        assert_eq!(scene.camera.pos, DVec3::new(3.0, 2.0, 4.0));
        assert_eq!(scene.lights[2].color, Color::new(0.07, 0.49, 0.071));
    }

    #[test]
    fn test_from_description_keeps_order() {
        let scene = Scene::canonical();

        // The ground plane comes first
        let down = Ray::new(DVec3::new(5.0, 1.0, 5.0), DVec3::new(0.0, -1.0, 0.0));
        assert!(scene.things[0].intersect(&down).is_some());
        assert!(scene.things[1].intersect(&down).is_none());

        let at_sphere = Ray::new(DVec3::new(0.0, 1.0, 5.0), DVec3::new(0.0, 0.0, -1.0));
        let hit = scene.things[1].intersect(&at_sphere).unwrap();
        assert!(hit.dist < FAR_AWAY);
    }

    #[test]
    fn test_same_kind_shares_surface() {
        let scene = Scene::canonical();
        let a = scene.things[1].surface() as *const dyn Surface as *const ();
        let b = scene.things[2].surface() as *const dyn Surface as *const ();
        let ground = scene.things[0].surface() as *const dyn Surface as *const ();
        assert_eq!(a, b);
        assert_ne!(a, ground);
    }

    #[test]
    fn test_from_description_rejects_invalid() {
        let mut description = SceneDescription::canonical();
        description.camera.look_at = description.camera.pos;
        assert!(matches!(
            Scene::from_description(&description),
            Err(SceneError::DegenerateCamera)
        ));
    }
}
