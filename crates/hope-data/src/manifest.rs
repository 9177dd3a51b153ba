use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::DataError;

/// One downloadable archive in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestEntry {
    /// Source URL of the archive.
    pub url: String,
    /// Directory the archive extracts into.
    pub dest: PathBuf,
    /// Expected MD5 digest of the archive, lowercase hex.
    pub md5: String,
    /// Dataset group key this entry belongs to.
    pub group: String,
}

/// The parsed download manifest, a flat list of archive entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// All entries in the manifest.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// The entries belonging to one dataset group.
    pub fn entries_for(&self, group: DatasetGroup) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(move |e| e.group == group.key())
    }
}

/// Read the download manifest JSON file.
///
/// # Arguments
///
/// * `path` - The path to the manifest file (`download_urls.json`).
///
/// # Returns
///
/// The parsed [`Manifest`].
pub fn read_download_manifest(path: impl AsRef<Path>) -> Result<Manifest, DataError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DataError::MissingFile(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let manifest = serde_json::from_reader(std::io::BufReader::new(file))?;
    Ok(manifest)
}

/// The downloadable dataset groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetGroup {
    /// Low resolution evaluation meshes.
    EvalMeshes,
    /// HOPE-Image validation scenes.
    HopeImageVal,
    /// HOPE-Image test scenes.
    HopeImageTest,
    /// HOPE-Video validation sequences.
    HopeVideoVal,
    /// HOPE-Video test sequences.
    HopeVideoTest,
}

impl DatasetGroup {
    /// All groups, in download order.
    pub const ALL: [DatasetGroup; 5] = [
        DatasetGroup::EvalMeshes,
        DatasetGroup::HopeImageVal,
        DatasetGroup::HopeImageTest,
        DatasetGroup::HopeVideoVal,
        DatasetGroup::HopeVideoTest,
    ];

    /// The group key used in the manifest.
    pub fn key(&self) -> &'static str {
        match self {
            DatasetGroup::EvalMeshes => "eval_meshes",
            DatasetGroup::HopeImageVal => "hope_image_val",
            DatasetGroup::HopeImageTest => "hope_image_test",
            DatasetGroup::HopeVideoVal => "hope_video_val",
            DatasetGroup::HopeVideoTest => "hope_video_test",
        }
    }

    /// Human readable label used in progress logs.
    pub fn label(&self) -> &'static str {
        match self {
            DatasetGroup::EvalMeshes => "low-res eval meshes",
            DatasetGroup::HopeImageVal => "HOPE-Image validation set",
            DatasetGroup::HopeImageTest => "HOPE-Image test set",
            DatasetGroup::HopeVideoVal => "HOPE-Video validation set",
            DatasetGroup::HopeVideoTest => "HOPE-Video test set",
        }
    }
}

/// Which dataset groups a download run should fetch.
///
/// Flags opt groups out; the default selection fetches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetSelection {
    /// Omit the low-res object meshes.
    pub skip_eval_meshes: bool,
    /// Omit the HOPE-Image dataset.
    pub skip_hope_image: bool,
    /// Omit the HOPE-Video dataset.
    pub skip_hope_video: bool,
    /// Omit test sets and only fetch validation sets.
    pub skip_test_sets: bool,
}

impl DatasetSelection {
    /// Resolve the selection into concrete groups.
    pub fn groups(&self) -> Vec<DatasetGroup> {
        let mut groups = Vec::new();
        if !self.skip_eval_meshes {
            groups.push(DatasetGroup::EvalMeshes);
        }
        if !self.skip_hope_image {
            groups.push(DatasetGroup::HopeImageVal);
            if !self.skip_test_sets {
                groups.push(DatasetGroup::HopeImageTest);
            }
        }
        if !self.skip_hope_video {
            groups.push(DatasetGroup::HopeVideoVal);
            if !self.skip_test_sets {
                groups.push(DatasetGroup::HopeVideoTest);
            }
        }
        groups
    }
}
