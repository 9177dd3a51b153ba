use rerun::RecordingStream;

use crate::error::VizError;
use crate::scene::SceneContent;

/// Entity path of the scene reconstruction cloud.
pub const SCENE_CLOUD_ENTITY: &str = "scene_cloud";
/// Entity path of the depth back-projection cloud.
pub const RGBD_ENTITY: &str = "rgbd";
/// Entity path of the camera (its RGB capture sits below it).
pub const CAMERA_ENTITY: &str = "camera";
/// Entity path the posed object meshes are nested under.
pub const OBJECTS_ENTITY: &str = "objects";

/// Log an assembled scene to a rerun stream.
///
/// Each layer gets a stable entity path so it can be shown and hidden from
/// the viewer's entity tree: [`SCENE_CLOUD_ENTITY`], [`RGBD_ENTITY`],
/// [`CAMERA_ENTITY`], and one child of [`OBJECTS_ENTITY`] per object.
pub fn log_scene(rec: &RecordingStream, content: &SceneContent) -> Result<(), VizError> {
    // camera-frame scene: x right, y down, z forward
    rec.log("/", &rerun::ViewCoordinates::RDF())?;

    if let Some(cloud) = &content.scene_cloud {
        log_point_cloud(rec, SCENE_CLOUD_ENTITY, cloud)?;
    }
    if let Some(cloud) = &content.rgbd_cloud {
        log_point_cloud(rec, RGBD_ENTITY, cloud)?;
    }
    log_camera(rec, content)?;
    log_objects(rec, content)?;

    Ok(())
}

fn log_point_cloud(
    rec: &RecordingStream,
    entity: &str,
    cloud: &hope_3d::pointcloud::PointCloud,
) -> Result<(), VizError> {
    let points = cloud
        .points()
        .iter()
        .map(|p| rerun::Position3D::new(p[0] as f32, p[1] as f32, p[2] as f32))
        .collect::<Vec<_>>();

    let colors = cloud.colors().map_or(vec![], |colors| {
        colors
            .iter()
            .map(|c| rerun::Color::from_rgb(c[0], c[1], c[2]))
            .collect()
    });

    rec.log(entity, &rerun::Points3D::new(points).with_colors(colors))?;
    Ok(())
}

fn log_camera(rec: &RecordingStream, content: &SceneContent) -> Result<(), VizError> {
    let (fx, fy) = content.camera.focal_length;
    let (cx, cy) = content.camera.principal_point;
    let (width, height) = content.camera.image_size;

    rec.log(
        CAMERA_ENTITY,
        &rerun::Pinhole::from_focal_length_and_resolution(
            [fx as f32, fy as f32],
            [width as f32, height as f32],
        )
        .with_principal_point([cx as f32, cy as f32]),
    )?;

    if let Some(image) = &content.rgb {
        let size = image.size();
        rec.log(
            format!("{CAMERA_ENTITY}/rgb"),
            &rerun::Image::from_rgb24(
                image.as_slice().to_vec(),
                [size.width as u32, size.height as u32],
            ),
        )?;
    }

    Ok(())
}

fn log_objects(rec: &RecordingStream, content: &SceneContent) -> Result<(), VizError> {
    for (i, object) in content.objects.iter().enumerate() {
        let entity = format!("{OBJECTS_ENTITY}/{i}_{}", object.class);
        let pose = &object.pose;

        let translation = [
            pose[0][3] as f32,
            pose[1][3] as f32,
            pose[2][3] as f32,
        ];
        // rerun's Mat3x3 is column-major
        let rotation = [
            [pose[0][0] as f32, pose[1][0] as f32, pose[2][0] as f32],
            [pose[0][1] as f32, pose[1][1] as f32, pose[2][1] as f32],
            [pose[0][2] as f32, pose[1][2] as f32, pose[2][2] as f32],
        ];

        rec.log(
            entity.as_str(),
            &rerun::Transform3D::from_translation_mat3x3(translation, rotation),
        )?;
        rec.log(
            entity.as_str(),
            &rerun::Asset3D::from_file_contents(
                object.mesh_bytes.clone(),
                Some(rerun::MediaType::obj()),
            ),
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::ObjectMesh;
    use hope_3d::camera::PinholeCameraIntrinsic;
    use hope_3d::pointcloud::PointCloud;

    #[test]
    fn log_scene_to_memory_sink() {
        let (rec, _storage) = rerun::RecordingStreamBuilder::new("hope_preview_test")
            .memory()
            .unwrap();

        let content = SceneContent {
            camera: PinholeCameraIntrinsic::new((100.0, 100.0), (1.0, 1.0), (2, 2)),
            scene_cloud: Some(PointCloud::new(
                vec![[0.0, 0.0, 100.0]],
                Some(vec![[255, 0, 0]]),
                None,
            )),
            rgbd_cloud: None,
            rgb: None,
            objects: vec![ObjectMesh {
                class: "AlphabetSoup".to_string(),
                pose: hope_data::annotation::identity_transform(),
                mesh_bytes: b"v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n".to_vec(),
            }],
        };

        log_scene(&rec, &content).unwrap();
    }
}
