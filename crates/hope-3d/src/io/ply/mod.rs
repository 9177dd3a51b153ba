mod parser;
mod properties;

pub use parser::*;
pub use properties::*;

/// Error types for the PLY module.
#[derive(Debug, thiserror::Error)]
pub enum PlyError {
    /// Failed to read PLY file
    #[error("Failed to read PLY file")]
    Io(#[from] std::io::Error),

    /// The file is not a binary little-endian PLY file
    #[error("The file is not a binary little-endian PLY file")]
    UnsupportedFormat,

    /// The vertex properties do not match a supported layout
    #[error("Unsupported PLY vertex layout")]
    UnsupportedLayout,

    /// Malformed PLY header
    #[error("Malformed PLY header")]
    MalformedHeader,
}
