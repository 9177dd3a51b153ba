use std::path::PathBuf;

use argh::FromArgs;

use hope_data::{read_download_manifest, DatasetSelection};
use hope_download::{Downloader, HttpFetcher};

#[derive(FromArgs)]
/// Download files for the HOPE datasets.
///
/// Every dataset group is fetched unless skipped; archives are verified
/// against the manifest's MD5 digests before extraction.
struct Args {
    /// path to the download manifest
    #[argh(option, default = "PathBuf::from(\"download_urls.json\")")]
    manifest: PathBuf,

    /// download and overwrite existing paths
    #[argh(switch)]
    overwrite: bool,

    /// omit low-res object meshes
    #[argh(switch)]
    skip_eval_meshes: bool,

    /// omit HOPE-Image dataset
    #[argh(switch)]
    skip_hope_image: bool,

    /// omit HOPE-Video dataset
    #[argh(switch)]
    skip_hope_video: bool,

    /// omit test sets and only download validation sets
    #[argh(switch)]
    skip_test_sets: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = argh::from_env();

    let manifest = read_download_manifest(&args.manifest)?;
    let selection = DatasetSelection {
        skip_eval_meshes: args.skip_eval_meshes,
        skip_hope_image: args.skip_hope_image,
        skip_hope_video: args.skip_hope_video,
        skip_test_sets: args.skip_test_sets,
    };

    let downloader = Downloader::new(HttpFetcher::new()?, args.overwrite);
    downloader.run(&manifest, &selection.groups())?;

    Ok(())
}
