//! Surface trait for position-dependent shading properties.

use std::sync::Arc;

use raybench_core::SurfaceKind;
use raybench_math::{Color, DVec3};

pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
pub const GREY: Color = Color::new(0.5, 0.5, 0.5);
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// Trait for materials that describe how a surface responds to light.
///
/// Implementations are stateless and shared between things by reference.
pub trait Surface: Send + Sync {
    /// Diffuse color at a world position.
    fn diffuse(&self, pos: DVec3) -> Color;

    /// Specular highlight color at a world position.
    fn specular(&self, pos: DVec3) -> Color;

    /// Fraction of reflected light at a world position, in [0, 1].
    fn reflect(&self, pos: DVec3) -> f64;

    /// Specular exponent, strictly positive.
    fn roughness(&self) -> f64;
}

/// Uniform mirror-like white material.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShinySurface;

impl Surface for ShinySurface {
    fn diffuse(&self, _pos: DVec3) -> Color {
        WHITE
    }

    fn specular(&self, _pos: DVec3) -> Color {
        GREY
    }

    fn reflect(&self, _pos: DVec3) -> f64 {
        0.7
    }

    fn roughness(&self) -> f64 {
        250.0
    }
}

/// Black and white unit tiles on the world x/z grid. y is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckerboardSurface;

impl CheckerboardSurface {
    /// Odd tiles are white and mostly matte, even tiles black and glossy.
    #[inline]
    fn is_odd_tile(pos: DVec3) -> bool {
        (pos.z.floor() + pos.x.floor()) % 2.0 != 0.0
    }
}

impl Surface for CheckerboardSurface {
    fn diffuse(&self, pos: DVec3) -> Color {
        if Self::is_odd_tile(pos) {
            WHITE
        } else {
            BLACK
        }
    }

    fn specular(&self, _pos: DVec3) -> Color {
        WHITE
    }

    fn reflect(&self, pos: DVec3) -> f64 {
        if Self::is_odd_tile(pos) {
            0.1
        } else {
            0.7
        }
    }

    fn roughness(&self) -> f64 {
        250.0
    }
}

/// Shared instance of the surface described by `kind`.
pub fn surface_for(kind: SurfaceKind) -> Arc<dyn Surface> {
    match kind {
        SurfaceKind::Shiny => Arc::new(ShinySurface),
        SurfaceKind::Checkerboard => Arc::new(CheckerboardSurface),
    }
}
