//! Math types for raybench.
//!
//! Everything is double precision: vectors and colors are `glam::DVec3`,
//! rays carry a start point and a direction.

// Re-export glam for convenience
pub use glam::*;

mod color;
mod ray;
mod vector;

pub use color::{display_channel, to_display_color, Color};
pub use ray::Ray;
pub use vector::{magnitude, normalize, FAR_AWAY};
