//! Camera for primary ray generation.

use raybench_math::{normalize, DVec3, Ray};

/// Scale applied to the right and up vectors; controls the field of view.
pub const FOV_SCALE: f64 = 1.5;

/// Pinhole camera with a fixed world "down" reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: DVec3,
    pub forward: DVec3,
    pub right: DVec3,
    pub up: DVec3,
}

impl Camera {
    /// Build the view basis from a position and a look-at target.
    pub fn new(pos: DVec3, look_at: DVec3) -> Self {
        let down = DVec3::new(0.0, -1.0, 0.0);
        let forward = normalize(look_at - pos);
        let right = normalize(forward.cross(down)) * FOV_SCALE;
        let up = normalize(forward.cross(right)) * FOV_SCALE;

        Self {
            pos,
            forward,
            right,
            up,
        }
    }

    /// Direction of the primary ray through pixel (x, y).
    ///
    /// Pixel rows grow downward, so y is inverted before scaling `up`.
    pub fn point_on_screen(&self, x: u32, y: u32, screen_width: u32, screen_height: u32) -> DVec3 {
        let width = screen_width as f64;
        let height = screen_height as f64;
        let cx = (x as f64 - width / 2.0) / 2.0 / width;
        let cy = -(y as f64 - height / 2.0) / 2.0 / height;

        normalize(self.forward + self.right * cx + self.up * cy)
    }

    /// Primary ray from the camera position through pixel (x, y).
    #[inline]
    pub fn primary_ray(&self, x: u32, y: u32, screen_width: u32, screen_height: u32) -> Ray {
        Ray::new(self.pos, self.point_on_screen(x, y, screen_width, screen_height))
    }
}
