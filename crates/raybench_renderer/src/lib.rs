//! raybench renderer - Whitted-style CPU ray tracing.
//!
//! Traces one primary ray per pixel against spheres and planes, with point
//! light shadows, diffuse and specular lighting and mirror reflections up to
//! a fixed depth. Pixels are delivered to a [`PixelSink`] in row-major order,
//! either sequentially or from buckets rendered on the rayon thread pool.

mod bucket;
mod camera;
mod plane;
mod renderer;
mod scene;
mod sink;
mod sphere;
mod surface;
mod thing;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_ROWS};
pub use camera::{Camera, FOV_SCALE};
pub use plane::Plane;
pub use renderer::{RayTracer, RenderConfig, RenderStatus};
pub use scene::{Light, Scene};
pub use sink::{ImageBuffer, PixelSink};
pub use sphere::Sphere;
pub use surface::{surface_for, CheckerboardSurface, ShinySurface, Surface, BLACK, GREY, WHITE};
pub use thing::{same_thing, Intersection, Thing};

/// Re-export math types from raybench_math
pub use raybench_math::{Color, DVec3, Ray};
