//! raybench core - scene description and loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `ThingDescription`,
//!   `LightDescription`, `CameraDescription`, `SurfaceKind`
//! - **Validation**: `SceneDescription::validate` and `SceneError`
//! - **Loading**: JSON scene files via `load_scene`
//!
//! # Example
//!
//! ```ignore
//! use raybench_core::{load_scene, SceneDescription};
//!
//! let scene = match std::env::args().nth(1) {
//!     Some(path) => load_scene(path)?,
//!     None => SceneDescription::canonical(),
//! };
//! println!("{} things, {} lights", scene.thing_count(), scene.light_count());
//! ```

pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, scene_to_string, LoadError, LoadResult};
pub use scene::{
    CameraDescription, LightDescription, SceneDescription, SceneError, SurfaceKind,
    ThingDescription,
};
