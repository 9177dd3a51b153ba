use std::fs::File;
use std::path::Path;

use crate::error::DownloadError;

/// Fetches a remote archive into a local file.
///
/// The download engine is generic over this trait so tests can substitute a
/// local source for the network.
pub trait Fetcher {
    /// Download `url` into the file at `dest`, replacing it if present.
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), DownloadError>;
}

/// A blocking HTTP fetcher streaming the response body to disk.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default HTTP client.
    pub fn new() -> Result<Self, DownloadError> {
        let client = reqwest::blocking::Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<(), DownloadError> {
        log::info!("Downloading {url}...");
        let mut response = self.client.get(url).send()?.error_for_status()?;
        let mut file = File::create(dest)?;
        std::io::copy(&mut response, &mut file)?;
        Ok(())
    }
}

/// The archive filename a URL downloads to, from its last path segment.
pub(crate) fn archive_filename(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        "archive.zip".to_string()
    } else {
        name.to_string()
    }
}
