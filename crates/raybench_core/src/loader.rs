//! Scene file loading.
//!
//! Scenes are stored as JSON matching [`SceneDescription`]. Every loaded
//! scene is validated before it is returned.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::scene::{SceneDescription, SceneError};

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene from a JSON file.
///
/// # Example
///
/// ```ignore
/// use raybench_core::load_scene;
///
/// let scene = load_scene("scenes/canonical.json")?;
/// println!("Loaded {} things", scene.thing_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&source)?;

    log::info!(
        "Loaded {} things and {} lights from {}",
        scene.thing_count(),
        scene.light_count(),
        path.display()
    );

    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(source: &str) -> LoadResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(source)?;
    scene.validate()?;
    Ok(scene)
}

/// Serialize a scene to pretty-printed JSON.
pub fn scene_to_string(scene: &SceneDescription) -> LoadResult<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}
