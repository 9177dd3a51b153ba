#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the viz module.
pub mod error;

/// Rerun logging of an assembled scene.
pub mod log_scene;

/// Scene assembly: clouds, camera image, posed object meshes.
pub mod scene;

pub use error::VizError;
pub use log_scene::log_scene;
pub use scene::{load_scene, ObjectMesh, SceneContent};
