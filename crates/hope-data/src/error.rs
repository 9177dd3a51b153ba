/// An error type for the data module.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A required input path does not exist.
    #[error("Unable to find input path {0}")]
    MissingFile(std::path::PathBuf),

    /// Neither a scene point cloud nor a depth map was found for a 3D preview.
    #[error("Unable to find either scene point cloud {point_cloud} or depth file {depth}")]
    MissingScene {
        /// The scene point cloud path that was tried.
        point_cloud: std::path::PathBuf,
        /// The depth map path that was tried.
        depth: std::path::PathBuf,
    },

    /// Failed to read the file.
    #[error("Failed to read the file. {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the JSON document.
    #[error("Failed to parse the JSON document. {0}")]
    Json(#[from] serde_json::Error),
}
