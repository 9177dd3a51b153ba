#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Scene annotation records: camera parameters and object poses.
pub mod annotation;

/// Error types for the data module.
pub mod error;

/// Download manifest records and dataset group selection.
pub mod manifest;

/// Input path resolution for the scene previewer.
pub mod scene_paths;

pub use annotation::{read_scene_annotation, CameraAnnotation, ObjectAnnotation, SceneAnnotation};
pub use error::DataError;
pub use manifest::{read_download_manifest, DatasetGroup, DatasetSelection, Manifest, ManifestEntry};
pub use scene_paths::{ScenePathOverrides, ScenePaths};
