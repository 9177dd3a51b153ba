use std::path::PathBuf;

use argh::FromArgs;

use hope_data::{read_scene_annotation, ScenePathOverrides, ScenePaths};
use hope_viz::log_scene::{CAMERA_ENTITY, OBJECTS_ENTITY, RGBD_ENTITY, SCENE_CLOUD_ENTITY};
use hope_viz::{load_scene, log_scene};

#[derive(FromArgs)]
/// Display a scene from the HOPE-Image or HOPE-Video datasets.
///
/// Object annotations are overlaid on the reconstructed scene point cloud or
/// the RGB-D back-projection; with --show-rgb they are overlaid on the RGB
/// image instead. File paths are attempted relative to the annotation file.
/// Each layer is logged under its own entity path, so objects, the scene
/// cloud, the RGB-D cloud, and the camera image can be toggled from the
/// rerun viewer's entity tree.
struct Args {
    /// path to scene annotation file
    #[argh(positional)]
    annotations: PathBuf,

    /// show RGB image instead of RGB-D and/or point cloud
    #[argh(switch)]
    show_rgb: bool,

    /// path to RGB image (default: sibling `<stem>_rgb.jpg`)
    #[argh(option)]
    rgb_path: Option<PathBuf>,

    /// path to depth image (default: sibling `<stem>_depth.png`)
    #[argh(option)]
    depth_path: Option<PathBuf>,

    /// path to scene point cloud (default: `scene.ply` next to the annotations)
    #[argh(option)]
    pc_path: Option<PathBuf>,

    /// path to object meshes (default: meshes/eval)
    #[argh(option)]
    mesh_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    // all input paths are validated before anything is decoded
    let overrides = ScenePathOverrides {
        show_rgb: args.show_rgb,
        rgb: args.rgb_path,
        depth: args.depth_path,
        point_cloud: args.pc_path,
        mesh_dir: args.mesh_dir,
    };
    let paths = ScenePaths::resolve(&args.annotations, &overrides)?;

    log::info!("Loading annotations ({})...", paths.annotations.display());
    let annotation = read_scene_annotation(&paths.annotations)?;

    let scene = load_scene(&paths, &annotation)?;

    log::info!("Spawning the rerun viewer...");
    let rec = rerun::RecordingStreamBuilder::new("hope_preview").spawn()?;
    log_scene(&rec, &scene)?;

    log::info!(
        "Scene logged. Toggle `{OBJECTS_ENTITY}`, `{SCENE_CLOUD_ENTITY}`, `{RGBD_ENTITY}`, \
         and `{CAMERA_ENTITY}` in the viewer's entity tree."
    );

    Ok(())
}
