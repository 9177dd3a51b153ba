use std::path::Path;

use hope_3d::camera::PinholeCameraIntrinsic;
use hope_3d::io::ply::read_ply_binary;
use hope_3d::pointcloud::PointCloud;
use hope_3d::rgbd::{create_point_cloud_from_rgbd, RgbdImage};
use hope_3d::voxel_grid::VoxelGrid;
use hope_data::{SceneAnnotation, ScenePaths};
use hope_io::jpeg::read_image_jpeg_rgb8;
use hope_io::png::{read_image_png_mono16, read_image_png_rgb8};
use hope_io::Image;

use crate::error::VizError;

/// Voxel leaf size applied to the scene reconstruction, in meters.
pub const SCENE_CLOUD_LEAF_SIZE: f64 = 0.002;

/// Depth PNG values per meter (depth maps store millimeters).
pub const DEPTH_UNITS_PER_METER: f64 = 1000.0;

/// Scale from the reconstruction's meters to the annotation's centimeters.
pub const METERS_TO_CENTIMETERS: f64 = 100.0;

/// The box the RGB-D cloud is cropped to, in meters.
pub const RGBD_CROP_MIN: [f64; 3] = [-1.0, -0.5, 0.0];
/// See [`RGBD_CROP_MIN`].
pub const RGBD_CROP_MAX: [f64; 3] = [1.0, 1.0, 2.0];

/// One annotated object ready for display.
#[derive(Debug, Clone)]
pub struct ObjectMesh {
    /// The object class name.
    pub class: String,
    /// Row-major 4x4 object-to-camera pose, translation in centimeters.
    pub pose: [[f64; 4]; 4],
    /// The raw OBJ file contents.
    pub mesh_bytes: Vec<u8>,
}

/// An assembled scene, all geometry in centimeters in the camera frame.
#[derive(Debug, Clone)]
pub struct SceneContent {
    /// The capturing camera's intrinsics.
    pub camera: PinholeCameraIntrinsic,
    /// The downsampled scene reconstruction, when present.
    pub scene_cloud: Option<PointCloud>,
    /// The cloud back-projected from the depth map, when present.
    pub rgbd_cloud: Option<PointCloud>,
    /// The RGB capture, when the preview shows it.
    pub rgb: Option<Image<u8, 3>>,
    /// The annotated objects with their meshes.
    pub objects: Vec<ObjectMesh>,
}

/// Assemble the renderable scene from validated paths and the annotation.
///
/// Applies the display pipeline: the reconstruction is voxel-downsampled,
/// moved by the camera extrinsics, and scaled to centimeters; the depth map
/// is back-projected, cropped, and scaled likewise.
pub fn load_scene(
    paths: &ScenePaths,
    annotation: &SceneAnnotation,
) -> Result<SceneContent, VizError> {
    let camera = PinholeCameraIntrinsic::from_matrix(
        &annotation.camera.intrinsics,
        (annotation.camera.width, annotation.camera.height),
    );

    let scene_cloud = match &paths.point_cloud {
        Some(ply_path) => {
            log::info!("Loading scene point cloud ({})...", ply_path.display());
            let cloud = read_ply_binary(ply_path)?;
            let mut cloud = VoxelGrid::new(SCENE_CLOUD_LEAF_SIZE).downsample(&cloud);
            cloud.transform(&annotation.camera.extrinsics);
            cloud.scale(METERS_TO_CENTIMETERS);
            Some(cloud)
        }
        None => None,
    };

    let rgb = match &paths.rgb {
        Some(rgb_path) => {
            log::info!("Loading RGB image ({})...", rgb_path.display());
            Some(read_rgb(rgb_path)?)
        }
        None => None,
    };

    let rgbd_cloud = match (&paths.depth, &rgb) {
        (Some(depth_path), Some(rgb_image)) => {
            log::info!("Loading RGB-D ({})...", depth_path.display());
            let depth_image = read_image_png_mono16(depth_path)?;
            let depth = depth_image
                .as_slice()
                .iter()
                .map(|&v| v as f64 / DEPTH_UNITS_PER_METER)
                .collect();
            let rgb_pixels = rgb_image
                .as_slice()
                .chunks_exact(3)
                .map(|c| [c[0], c[1], c[2]])
                .collect();
            let rgbd = RgbdImage::new(
                rgb_pixels,
                depth,
                depth_image.width(),
                depth_image.height(),
            )?;
            let mut cloud = create_point_cloud_from_rgbd(&rgbd, &camera)
                .crop(&RGBD_CROP_MIN, &RGBD_CROP_MAX);
            cloud.scale(METERS_TO_CENTIMETERS);
            Some(cloud)
        }
        _ => None,
    };

    log::info!("Loading object meshes (from {})...", paths.mesh_dir.display());
    let objects = annotation
        .objects
        .iter()
        .map(|obj| {
            let mesh_path = paths.mesh_path(&obj.class);
            if !mesh_path.exists() {
                return Err(VizError::MissingMesh(mesh_path));
            }
            Ok(ObjectMesh {
                class: obj.class.clone(),
                pose: obj.pose,
                mesh_bytes: std::fs::read(&mesh_path)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SceneContent {
        camera,
        scene_cloud,
        rgbd_cloud,
        rgb,
        objects,
    })
}

/// Read an RGB capture, dispatching on the file extension.
fn read_rgb(path: &Path) -> Result<Image<u8, 3>, VizError> {
    let is_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    let image = if is_png {
        read_image_png_rgb8(path)?
    } else {
        read_image_jpeg_rgb8(path)?
    };
    Ok(image)
}
