/// An error type for the io module.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to decode the JPEG image.
    #[error("Error with Jpeg decoding. {0}")]
    JpegDecodingError(#[from] zune_jpeg::errors::DecodeErrors),

    /// Error to decode the PNG image.
    #[error("Failed to decode the png image. {0}")]
    PngDecodeError(String),

    /// The decoded buffer does not match the image dimensions.
    #[error("Decoded buffer of {got} values does not match the expected {expected}")]
    InvalidImageData {
        /// The number of values the dimensions require.
        expected: usize,
        /// The number of values decoded.
        got: usize,
    },
}
