use std::path::PathBuf;

use hope_data::{DatasetGroup, Manifest, ManifestEntry};

use crate::checksum::md5_hex;
use crate::error::DownloadError;
use crate::extract::extract_archive;
use crate::fetch::{archive_filename, Fetcher};

/// Suffix of an archive while its transfer and verification are in flight.
const TEMP_SUFFIX: &str = ".part";

/// Counts of what a download run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Entries fetched, verified, and extracted.
    pub downloaded: usize,
    /// Entries skipped because their destination already exists.
    pub skipped: usize,
}

/// The manifest-driven download engine.
///
/// For each selected entry: skip it when the destination exists (unless
/// overwriting), otherwise fetch the archive, verify its MD5, extract it into
/// the destination, and delete the archive. The first failure aborts the run;
/// in particular a checksum mismatch halts everything before extraction.
pub struct Downloader<F: Fetcher> {
    fetcher: F,
    overwrite: bool,
}

impl<F: Fetcher> Downloader<F> {
    /// Create an engine around a fetcher.
    pub fn new(fetcher: F, overwrite: bool) -> Self {
        Self { fetcher, overwrite }
    }

    /// Download the manifest entries of the given groups, in order.
    pub fn run(
        &self,
        manifest: &Manifest,
        groups: &[DatasetGroup],
    ) -> Result<DownloadReport, DownloadError> {
        let mut report = DownloadReport::default();
        for group in groups {
            let entries: Vec<&ManifestEntry> = manifest.entries_for(*group).collect();
            log::info!(
                "Downloading {} ({} file{})...",
                group.label(),
                entries.len(),
                if entries.len() == 1 { "" } else { "s" }
            );
            for entry in entries {
                self.process(entry, &mut report)?;
            }
        }
        log::info!(
            "Done: {} downloaded, {} skipped.",
            report.downloaded,
            report.skipped
        );
        Ok(report)
    }

    fn process(
        &self,
        entry: &ManifestEntry,
        report: &mut DownloadReport,
    ) -> Result<(), DownloadError> {
        if entry.dest.exists() && !self.overwrite {
            log::info!(
                "Path {} exists; skipping. (To not skip, use option --overwrite.)",
                entry.dest.display()
            );
            report.skipped += 1;
            return Ok(());
        }

        let archive = self.fetch_and_verify(entry)?;

        std::fs::create_dir_all(&entry.dest)?;
        extract_archive(&archive, &entry.dest)?;
        std::fs::remove_file(&archive)?;
        log::info!("Extracted to {}.", entry.dest.display());

        report.downloaded += 1;
        Ok(())
    }

    /// Fetch the entry's archive under a temp name and rename it into place
    /// once the digest matches. A mismatch removes the temp file and aborts.
    fn fetch_and_verify(&self, entry: &ManifestEntry) -> Result<PathBuf, DownloadError> {
        let parent = entry.dest.parent().unwrap_or(std::path::Path::new("."));
        std::fs::create_dir_all(parent)?;
        let archive = parent.join(archive_filename(&entry.url));
        let temp = archive.with_file_name(format!(
            "{}{TEMP_SUFFIX}",
            archive_filename(&entry.url)
        ));

        self.fetcher.fetch(&entry.url, &temp)?;

        let actual = md5_hex(&temp)?;
        if actual != entry.md5 {
            std::fs::remove_file(&temp)?;
            return Err(DownloadError::ChecksumMismatch {
                path: archive,
                expected: entry.md5.clone(),
                actual,
            });
        }
        log::info!("MD5 passed.");

        std::fs::rename(&temp, &archive)?;
        Ok(archive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Write;
    use std::path::Path;

    /// A fetcher serving canned bytes and counting its calls.
    struct StubFetcher {
        body: Vec<u8>,
        calls: RefCell<usize>,
    }

    impl StubFetcher {
        fn new(body: Vec<u8>) -> Self {
            Self {
                body,
                calls: RefCell::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl Fetcher for StubFetcher {
        fn fetch(&self, _url: &str, dest: &Path) -> Result<(), DownloadError> {
            *self.calls.borrow_mut() += 1;
            std::fs::write(dest, &self.body)?;
            Ok(())
        }
    }

    fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        for (name, data) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    fn md5_of(data: &[u8]) -> String {
        use md5::{Digest, Md5};
        hex::encode(Md5::new_with_prefix(data).finalize())
    }

    fn manifest_json(dest: &Path, md5: &str, group: &str) -> Manifest {
        let json = serde_json::json!([{
            "url": "https://example.org/archive.zip",
            "dest": dest,
            "md5": md5,
            "group": group,
        }]);
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn downloads_verifies_and_extracts() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("hope_image/val");
        let body = zip_bytes(&[("0000.json", b"{}")]);
        let manifest = manifest_json(&dest, &md5_of(&body), "hope_image_val");

        let fetcher = StubFetcher::new(body);
        let report = Downloader::new(fetcher, false)
            .run(&manifest, &[DatasetGroup::HopeImageVal])
            .unwrap();

        assert_eq!(
            report,
            DownloadReport {
                downloaded: 1,
                skipped: 0
            }
        );
        assert!(dest.join("0000.json").exists());
        // the archive is deleted after extraction
        assert!(!dir.path().join("hope_image/archive.zip").exists());
    }

    #[test]
    fn existing_destination_is_skipped_unless_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("meshes");
        std::fs::create_dir_all(&dest).unwrap();
        let body = zip_bytes(&[("mesh.obj", b"v 0 0 0\n")]);
        let manifest = manifest_json(&dest, &md5_of(&body), "eval_meshes");

        let fetcher = StubFetcher::new(body.clone());
        let report = Downloader::new(fetcher, false)
            .run(&manifest, &[DatasetGroup::EvalMeshes])
            .unwrap();
        assert_eq!(report.skipped, 1);
        assert_eq!(report.downloaded, 0);

        let fetcher = StubFetcher::new(body);
        let downloader = Downloader::new(fetcher, true);
        let report = downloader.run(&manifest, &[DatasetGroup::EvalMeshes]).unwrap();
        assert_eq!(report.downloaded, 1);
        assert!(dest.join("mesh.obj").exists());
    }

    #[test]
    fn checksum_mismatch_halts_before_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("hope_video/val");
        let body = zip_bytes(&[("scene.ply", b"ply")]);
        let manifest = manifest_json(&dest, "00000000000000000000000000000000", "hope_video_val");

        let fetcher = StubFetcher::new(body);
        let err = Downloader::new(fetcher, false)
            .run(&manifest, &[DatasetGroup::HopeVideoVal])
            .unwrap_err();

        match err {
            DownloadError::ChecksumMismatch { expected, .. } => {
                assert_eq!(expected, "00000000000000000000000000000000");
            }
            other => panic!("unexpected error: {other}"),
        }
        // nothing was extracted and the temp archive is gone
        assert!(!dest.exists());
        assert!(!dir.path().join("hope_video/archive.zip").exists());
        assert!(!dir.path().join("hope_video/archive.zip.part").exists());
    }

    #[test]
    fn only_selected_groups_are_fetched() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("hope_image/test");
        let body = zip_bytes(&[("0001.json", b"{}")]);
        let manifest = manifest_json(&dest, &md5_of(&body), "hope_image_test");

        let fetcher = StubFetcher::new(body);
        let downloader = Downloader::new(fetcher, false);
        let report = downloader
            .run(&manifest, &[DatasetGroup::HopeImageVal, DatasetGroup::HopeVideoVal])
            .unwrap();
        assert_eq!(report, DownloadReport::default());
        assert_eq!(downloader.fetcher.calls(), 0);
    }
}
