use std::path::{Path, PathBuf};

use crate::error::DataError;

/// Default directory holding the low-res evaluation meshes.
pub const DEFAULT_MESH_DIR: &str = "meshes/eval";

/// User-supplied path overrides for the scene previewer.
#[derive(Debug, Clone, Default)]
pub struct ScenePathOverrides {
    /// Show the RGB image instead of a 3D reconstruction.
    pub show_rgb: bool,
    /// Explicit RGB image path.
    pub rgb: Option<PathBuf>,
    /// Explicit depth map path.
    pub depth: Option<PathBuf>,
    /// Explicit scene point cloud path.
    pub point_cloud: Option<PathBuf>,
    /// Explicit object mesh directory.
    pub mesh_dir: Option<PathBuf>,
}

/// Fully resolved and validated input paths for one scene preview.
///
/// Resolution follows the dataset layout: siblings of the annotation file are
/// tried when no explicit path is given (`<stem>_rgb.jpg`, `<stem>_depth.png`,
/// `<dir>/scene.ply`).
#[derive(Debug, Clone)]
pub struct ScenePaths {
    /// The scene annotation file.
    pub annotations: PathBuf,
    /// The RGB image, when the preview needs it.
    pub rgb: Option<PathBuf>,
    /// The depth map, when an RGB-D cloud is shown.
    pub depth: Option<PathBuf>,
    /// The scene reconstruction point cloud, when shown.
    pub point_cloud: Option<PathBuf>,
    /// The object mesh directory.
    pub mesh_dir: PathBuf,
}

impl ScenePaths {
    /// Resolve and validate all preview inputs before anything is decoded.
    ///
    /// Every missing path aborts with [`DataError::MissingFile`] naming it, so
    /// failures surface before meshes or images are loaded.
    pub fn resolve(
        annotations: impl AsRef<Path>,
        overrides: &ScenePathOverrides,
    ) -> Result<Self, DataError> {
        let annotations = annotations.as_ref();
        if !annotations.exists() {
            return Err(DataError::MissingFile(annotations.to_path_buf()));
        }

        let mut point_cloud = None;
        let mut depth = None;
        if !overrides.show_rgb {
            point_cloud = checked(overrides.point_cloud.clone())?;
            depth = checked(overrides.depth.clone())?;

            // nothing requested explicitly: prefer the scene reconstruction,
            // then fall back to the depth map
            if point_cloud.is_none() && depth.is_none() {
                let pc_candidate = annotations
                    .parent()
                    .unwrap_or(Path::new(""))
                    .join("scene.ply");
                let depth_candidate = sibling(annotations, "_depth.png");
                if pc_candidate.exists() {
                    point_cloud = Some(pc_candidate);
                } else if depth_candidate.exists() {
                    depth = Some(depth_candidate);
                } else {
                    return Err(DataError::MissingScene {
                        point_cloud: pc_candidate,
                        depth: depth_candidate,
                    });
                }
            }
        }

        // the RGB image colors the RGB-D cloud and is the whole show in RGB mode
        let rgb = if overrides.show_rgb || depth.is_some() {
            let rgb = overrides
                .rgb
                .clone()
                .unwrap_or_else(|| sibling(annotations, "_rgb.jpg"));
            if !rgb.exists() {
                return Err(DataError::MissingFile(rgb));
            }
            Some(rgb)
        } else {
            None
        };

        let mesh_dir = overrides
            .mesh_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MESH_DIR));
        if !mesh_dir.exists() {
            return Err(DataError::MissingFile(mesh_dir));
        }

        Ok(Self {
            annotations: annotations.to_path_buf(),
            rgb,
            depth,
            point_cloud,
            mesh_dir,
        })
    }

    /// The mesh file path for an object class.
    pub fn mesh_path(&self, class: &str) -> PathBuf {
        self.mesh_dir.join(format!("{class}.obj"))
    }
}

/// A sibling of the annotation file with the stem suffixed, e.g.
/// `scenes/0000.json` with `_rgb.jpg` gives `scenes/0000_rgb.jpg`.
fn sibling(annotations: &Path, suffix: &str) -> PathBuf {
    let stem = annotations
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scene");
    annotations.with_file_name(format!("{stem}{suffix}"))
}

/// Validate an optional explicit path, failing fast when it does not exist.
fn checked(path: Option<PathBuf>) -> Result<Option<PathBuf>, DataError> {
    match path {
        Some(p) if !p.exists() => Err(DataError::MissingFile(p)),
        other => Ok(other),
    }
}
