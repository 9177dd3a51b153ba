use std::fs::File;
use std::path::Path;

use crate::error::DownloadError;

/// Extract an archive into a destination directory, dispatching on the
/// archive's extension. Zip and gzipped tar archives are supported.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<(), DownloadError> {
    let name = archive
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if name.ends_with(".zip") {
        let file = File::open(archive)?;
        let mut zip = zip::ZipArchive::new(file)?;
        zip.extract(dest)?;
        Ok(())
    } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        let file = File::open(archive)?;
        let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(file));
        tar.unpack(dest)?;
        Ok(())
    } else {
        Err(DownloadError::UnsupportedArchive(archive.to_path_buf()))
    }
}
