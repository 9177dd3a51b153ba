/// An error type for the download module.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Error to manipulate a local file.
    #[error("Failed to manipulate the file. {0}")]
    Io(#[from] std::io::Error),

    /// Error during the HTTP transfer.
    #[error("Failed to download the archive. {0}")]
    Http(#[from] reqwest::Error),

    /// Error reading the manifest.
    #[error(transparent)]
    Data(#[from] hope_data::DataError),

    /// The downloaded archive failed MD5 verification.
    #[error("Downloaded file {path} failed MD5 verification: expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// The archive that failed verification.
        path: std::path::PathBuf,
        /// The digest the manifest expects.
        expected: String,
        /// The digest that was computed.
        actual: String,
    },

    /// Error extracting a zip archive.
    #[error("Failed to extract the zip archive. {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive extension maps to no supported format.
    #[error("Unsupported archive format: {0}")]
    UnsupportedArchive(std::path::PathBuf),
}
