//! Whitted-style ray tracer.
//!
//! Implements:
//! - Nearest-intersection search over every thing in the scene
//! - Per-light shadow rays, diffuse and specular lighting
//! - Mirror reflection with a hard recursion depth bound
//! - Row-major rendering into a pixel sink

use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    surface::{BLACK, GREY},
    Intersection, Light, PixelSink, Scene, Thing,
};
use raybench_math::{magnitude, normalize, to_display_color, Color, DVec3, Ray, FAR_AWAY};

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Maximum reflection depth
    pub max_depth: u32,
    /// Color of rays that hit nothing, also the base of every shaded color
    pub background: Color,
    /// Reflected color used once the depth bound is reached
    pub depth_limit_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 5,
            background: BLACK,
            depth_limit_color: GREY,
        }
    }
}

/// Whether a render delivered every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    Complete,
    /// Stopped at a scanline boundary; `rows` full rows were delivered.
    Cancelled { rows: u32 },
}

/// The ray tracing engine. Holds configuration only; the scene is passed to
/// every call and never mutated.
#[derive(Debug, Clone, Default)]
pub struct RayTracer {
    config: RenderConfig,
}

impl RayTracer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Nearest thing hit by `ray`.
    ///
    /// Every thing is tested in scene order. A hit replaces the current best
    /// only when strictly closer, so the first of two equally distant things
    /// wins. Hits at or beyond [`FAR_AWAY`] are ignored.
    pub fn intersections<'s>(&self, scene: &'s Scene, ray: &Ray) -> Option<Intersection<'s>> {
        let mut closest = FAR_AWAY;
        let mut closest_intersection = None;

        for thing in &scene.things {
            if let Some(isect) = thing.intersect(ray) {
                if isect.dist < closest {
                    closest = isect.dist;
                    closest_intersection = Some(isect);
                }
            }
        }

        closest_intersection
    }

    /// Distance to the nearest hit, used for shadow tests.
    pub fn test_ray(&self, scene: &Scene, ray: &Ray) -> Option<f64> {
        self.intersections(scene, ray).map(|isect| isect.dist)
    }

    /// Compute the color seen along a ray.
    pub fn trace_ray(&self, scene: &Scene, ray: &Ray, depth: u32) -> Color {
        match self.intersections(scene, ray) {
            Some(isect) => self.shade(scene, &isect, depth),
            None => self.config.background,
        }
    }

    /// Color at an intersection: direct lighting plus mirror reflection.
    pub fn shade(&self, scene: &Scene, isect: &Intersection<'_>, depth: u32) -> Color {
        let d = isect.ray.direction;
        let pos = isect.ray.start + d * isect.dist;
        let normal = isect.thing.normal(pos);
        let reflect_dir = d - normal * (2.0 * normal.dot(d));

        let natural_color =
            self.config.background + self.natural_color(scene, isect.thing, pos, normal, reflect_dir);
        let reflected_color = if depth >= self.config.max_depth {
            self.config.depth_limit_color
        } else {
            self.reflection_color(scene, isect.thing, pos, reflect_dir, depth)
        };

        natural_color + reflected_color
    }

    fn reflection_color(
        &self,
        scene: &Scene,
        thing: &dyn Thing,
        pos: DVec3,
        rd: DVec3,
        depth: u32,
    ) -> Color {
        let ray = Ray::new(pos, rd);
        self.trace_ray(scene, &ray, depth + 1) * thing.surface().reflect(pos)
    }

    /// Sum of the direct contributions of every light at `pos`.
    pub fn natural_color(
        &self,
        scene: &Scene,
        thing: &dyn Thing,
        pos: DVec3,
        normal: DVec3,
        rd: DVec3,
    ) -> Color {
        scene.lights.iter().fold(BLACK, |accum, light| {
            self.add_light(scene, accum, light, pos, normal, thing, rd)
        })
    }

    /// Add one light's diffuse and specular contribution to `accum`.
    ///
    /// The point is in shadow when the shadow ray hits something no farther
    /// away than the light itself.
    #[allow(clippy::too_many_arguments)]
    pub fn add_light(
        &self,
        scene: &Scene,
        accum: Color,
        light: &Light,
        pos: DVec3,
        normal: DVec3,
        thing: &dyn Thing,
        rd: DVec3,
    ) -> Color {
        let ldis = light.pos - pos;
        let light_dir = normalize(ldis);

        let shadow_ray = Ray::new(pos, light_dir);
        let in_shadow = match self.test_ray(scene, &shadow_ray) {
            Some(dist) => dist <= magnitude(ldis),
            None => false,
        };
        if in_shadow {
            return accum;
        }

        let illum = light_dir.dot(normal);
        let diffuse_light = if illum > 0.0 {
            light.color * illum
        } else {
            BLACK
        };

        let surface = thing.surface();
        let specular = light_dir.dot(normalize(rd));
        let specular_light = if specular > 0.0 {
            light.color * specular.powf(surface.roughness())
        } else {
            BLACK
        };

        accum + (surface.diffuse(pos) * diffuse_light + surface.specular(pos) * specular_light)
    }

    /// Trace the primary ray for pixel (x, y) and quantize the result.
    pub fn render_pixel(&self, scene: &Scene, x: u32, y: u32, width: u32, height: u32) -> [u8; 3] {
        let ray = scene.camera.primary_ray(x, y, width, height);
        to_display_color(self.trace_ray(scene, &ray, 0))
    }

    /// Render the entire scene, row by row, into a pixel sink.
    pub fn render<S: PixelSink + ?Sized>(&self, scene: &Scene, sink: &mut S, width: u32, height: u32) {
        let never = AtomicBool::new(false);
        self.render_cancellable(scene, sink, width, height, &never);
    }

    /// Like [`RayTracer::render`], but checks `cancel` before every scanline.
    pub fn render_cancellable<S: PixelSink + ?Sized>(
        &self,
        scene: &Scene,
        sink: &mut S,
        width: u32,
        height: u32,
        cancel: &AtomicBool,
    ) -> RenderStatus {
        log::debug!(
            "Rendering {}x{} ({} things, {} lights)",
            width,
            height,
            scene.thing_count(),
            scene.light_count()
        );

        for y in 0..height {
            if cancel.load(Ordering::Relaxed) {
                log::debug!("Render cancelled after {} rows", y);
                return RenderStatus::Cancelled { rows: y };
            }
            for x in 0..width {
                let rgb = self.render_pixel(scene, x, y, width, height);
                sink.set_pixel(x, y, rgb);
            }
        }

        log::debug!("Render complete");
        RenderStatus::Complete
    }
}
