#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// MD5 checksum computation.
pub mod checksum;

/// The manifest-driven download engine.
pub mod downloader;

/// Error types for the download module.
pub mod error;

/// Archive extraction.
pub mod extract;

/// Archive fetching over HTTP.
pub mod fetch;

pub use checksum::md5_hex;
pub use downloader::{DownloadReport, Downloader};
pub use error::DownloadError;
pub use extract::extract_archive;
pub use fetch::{Fetcher, HttpFetcher};
