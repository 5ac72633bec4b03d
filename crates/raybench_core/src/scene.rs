//! Scene description types for raybench.
//!
//! This module defines a renderer-agnostic, serializable scene: an ordered
//! list of things, an ordered list of point lights and one camera. The
//! renderer turns a validated description into its runtime scene.

use raybench_math::{magnitude, Color, DVec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when checking that a plane normal is unit length.
pub const UNIT_NORMAL_TOLERANCE: f64 = 1e-6;

/// Errors found while validating a scene description.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("thing {index}: sphere radius must be finite and positive, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("thing {index}: plane normal must be unit length, got length {length}")]
    NonUnitNormal { index: usize, length: f64 },

    #[error("{what} contains a non-finite value")]
    NonFinite { what: String },

    #[error("camera position and look-at target coincide")]
    DegenerateCamera,

    #[error("light {index}: color channels must not be negative")]
    NegativeLightColor { index: usize },
}

/// Shading model applied to a thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    /// Uniform mirror-like white material
    Shiny,
    /// Black and white tiles on the world x/z grid
    Checkerboard,
}

/// A single piece of geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThingDescription {
    Sphere {
        center: DVec3,
        radius: f64,
        surface: SurfaceKind,
    },
    /// Points `p` with `dot(normal, p) + offset == 0`.
    Plane {
        normal: DVec3,
        offset: f64,
        surface: SurfaceKind,
    },
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub pos: DVec3,
    pub color: Color,
}

/// Camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub pos: DVec3,
    pub look_at: DVec3,
}

/// A complete scene: things, lights and a camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub things: Vec<ThingDescription>,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
    pub camera: CameraDescription,
}

impl SceneDescription {
    /// The reference benchmark scene.
    ///
    /// A checkerboard ground plane at y = 0, two shiny spheres, four colored
    /// lights and a camera at (3, 2, 4) looking at (-1, 0.5, 0).
    pub fn canonical() -> Self {
        Self {
            things: vec![
                ThingDescription::Plane {
                    normal: DVec3::new(0.0, 1.0, 0.0),
                    offset: 0.0,
                    surface: SurfaceKind::Checkerboard,
                },
                ThingDescription::Sphere {
                    center: DVec3::new(0.0, 1.0, -0.25),
                    radius: 1.0,
                    surface: SurfaceKind::Shiny,
                },
                ThingDescription::Sphere {
                    center: DVec3::new(-1.0, 0.5, 1.5),
                    radius: 0.5,
                    surface: SurfaceKind::Shiny,
                },
            ],
            lights: vec![
                LightDescription {
                    pos: DVec3::new(-2.0, 2.5, 0.0),
                    color: Color::new(0.49, 0.07, 0.07),
                },
                LightDescription {
                    pos: DVec3::new(1.5, 2.5, 1.5),
                    color: Color::new(0.07, 0.07, 0.49),
                },
                LightDescription {
                    pos: DVec3::new(1.5, 2.5, -1.5),
                    color: Color::new(0.07, 0.49, 0.071),
                },
                LightDescription {
                    pos: DVec3::new(0.0, 3.5, 0.0),
                    color: Color::new(0.21, 0.21, 0.35),
                },
            ],
            camera: CameraDescription {
                pos: DVec3::new(3.0, 2.0, 4.0),
                look_at: DVec3::new(-1.0, 0.5, 0.0),
            },
        }
    }

    /// Check the description for input the renderer cannot draw correctly.
    ///
    /// Empty thing or light lists are accepted with a warning: they render
    /// as background or unlit, which is still correct geometry.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, thing) in self.things.iter().enumerate() {
            match *thing {
                ThingDescription::Sphere { center, radius, .. } => {
                    require_finite(center, || format!("thing {index} center"))?;
                    if !radius.is_finite() || radius <= 0.0 {
                        return Err(SceneError::InvalidRadius { index, radius });
                    }
                }
                ThingDescription::Plane { normal, offset, .. } => {
                    require_finite(normal, || format!("thing {index} normal"))?;
                    if !offset.is_finite() {
                        return Err(SceneError::NonFinite {
                            what: format!("thing {index} offset"),
                        });
                    }
                    let length = magnitude(normal);
                    if (length - 1.0).abs() > UNIT_NORMAL_TOLERANCE {
                        return Err(SceneError::NonUnitNormal { index, length });
                    }
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            require_finite(light.pos, || format!("light {index} position"))?;
            require_finite(light.color, || format!("light {index} color"))?;
            if light.color.min_element() < 0.0 {
                return Err(SceneError::NegativeLightColor { index });
            }
        }

        require_finite(self.camera.pos, || "camera position".to_string())?;
        require_finite(self.camera.look_at, || "camera look-at".to_string())?;
        if self.camera.pos == self.camera.look_at {
            return Err(SceneError::DegenerateCamera);
        }

        if self.things.is_empty() {
            log::warn!("Scene has no things, every pixel will be background");
        }
        if self.lights.is_empty() {
            log::warn!("Scene has no lights, only reflections will contribute");
        }

        Ok(())
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

fn require_finite(v: DVec3, what: impl FnOnce() -> String) -> Result<(), SceneError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFinite { what: what() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_scene_is_valid() {
        let scene = SceneDescription::canonical();
        assert_eq!(scene.thing_count(), 3);
        assert_eq!(scene.light_count(), 4);
        assert_eq!(scene.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut scene = SceneDescription::canonical();
        scene.things[1] = ThingDescription::Sphere {
            center: DVec3::ZERO,
            radius: 0.0,
            surface: SurfaceKind::Shiny,
        };
        assert_eq!(
            scene.validate(),
            Err(SceneError::InvalidRadius { index: 1, radius: 0.0 })
        );
    }

    #[test]
    fn test_rejects_non_unit_plane_normal() {
        let mut scene = SceneDescription::canonical();
        scene.things[0] = ThingDescription::Plane {
            normal: DVec3::new(0.0, 2.0, 0.0),
            offset: 0.0,
            surface: SurfaceKind::Checkerboard,
        };
        assert!(matches!(
            scene.validate(),
            Err(SceneError::NonUnitNormal { index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_degenerate_camera() {
        let mut scene = SceneDescription::canonical();
        scene.camera.look_at = scene.camera.pos;
        assert_eq!(scene.validate(), Err(SceneError::DegenerateCamera));
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let mut scene = SceneDescription::canonical();
        scene.lights[2].pos.x = f64::NAN;
        assert!(matches!(scene.validate(), Err(SceneError::NonFinite { .. })));
    }

    #[test]
    fn test_rejects_negative_light_color() {
        let mut scene = SceneDescription::canonical();
        scene.lights[3].color = Color::new(0.1, -0.1, 0.1);
        assert_eq!(
            scene.validate(),
            Err(SceneError::NegativeLightColor { index: 3 })
        );
    }

    #[test]
    fn test_accepts_empty_lists() {
        let scene = SceneDescription {
            things: Vec::new(),
            lights: Vec::new(),
            camera: SceneDescription::canonical().camera,
        };
        assert_eq!(scene.validate(), Ok(()));
    }
}
