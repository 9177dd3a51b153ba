/// An error type for the viz module.
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    /// Error reading a scene input file.
    #[error("Failed to read the file. {0}")]
    Io(#[from] std::io::Error),

    /// Error loading the annotation record.
    #[error(transparent)]
    Data(#[from] hope_data::DataError),

    /// Error decoding an image.
    #[error(transparent)]
    ImageIo(#[from] hope_io::IoError),

    /// Error reading the scene point cloud.
    #[error(transparent)]
    Ply(#[from] hope_3d::io::ply::PlyError),

    /// Error assembling the RGB-D image.
    #[error(transparent)]
    Rgbd(#[from] hope_3d::rgbd::RgbdError),

    /// An annotated object has no mesh file.
    #[error("Unable to open mesh path {0}")]
    MissingMesh(std::path::PathBuf),

    /// Error logging to the rerun stream.
    #[error("Failed to log to rerun. {0}")]
    Rerun(#[from] rerun::RecordingStreamError),
}
