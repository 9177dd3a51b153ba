use std::path::Path;

use serde::Deserialize;

use crate::error::DataError;

/// Camera parameters of one annotated scene.
#[derive(Debug, Clone, Deserialize)]
pub struct CameraAnnotation {
    /// Row-major 3x3 intrinsic matrix.
    pub intrinsics: [[f64; 3]; 3],
    /// Camera-to-world rigid transform of the scene reconstruction.
    ///
    /// HOPE-Image scenes carry no reconstruction; the identity is assumed.
    #[serde(default = "identity_transform")]
    pub extrinsics: [[f64; 4]; 4],
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl CameraAnnotation {
    /// Focal length (fx, fy) from the intrinsic matrix diagonal.
    pub fn focal_length(&self) -> (f64, f64) {
        (self.intrinsics[0][0], self.intrinsics[1][1])
    }

    /// Principal point (cx, cy) from the intrinsic matrix last column.
    pub fn principal_point(&self) -> (f64, f64) {
        (self.intrinsics[0][2], self.intrinsics[1][2])
    }
}

/// One annotated object instance.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectAnnotation {
    /// Object class name, also the stem of its mesh file.
    pub class: String,
    /// Row-major 4x4 object-to-camera pose, translation in centimeters.
    pub pose: [[f64; 4]; 4],
}

/// Scene annotation record: one camera and its visible objects.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneAnnotation {
    /// The capturing camera.
    pub camera: CameraAnnotation,
    /// The annotated objects.
    pub objects: Vec<ObjectAnnotation>,
}

/// The 4x4 identity transform.
pub fn identity_transform() -> [[f64; 4]; 4] {
    [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]
}

/// Read a scene annotation JSON file.
///
/// # Arguments
///
/// * `path` - The path to the scene annotation file.
///
/// # Returns
///
/// The parsed [`SceneAnnotation`] record.
pub fn read_scene_annotation(path: impl AsRef<Path>) -> Result<SceneAnnotation, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::MissingFile(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let annotation = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(annotation)
}
