use std::{fs, path::Path};

use crate::error::IoError;
use crate::image::{Image, ImageSize};

/// Read a JPEG image with three channels (rgb8).
///
/// # Arguments
///
/// * `file_path` - The path to the JPEG file.
///
/// # Returns
///
/// A RGB image with three channels (rgb8).
pub fn read_image_jpeg_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path.extension().map_or(true, |ext| {
        !ext.eq_ignore_ascii_case("jpg") && !ext.eq_ignore_ascii_case("jpeg")
    }) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let jpeg_data = fs::read(file_path)?;
    let mut decoder = zune_jpeg::JpegDecoder::new(jpeg_data);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(zune_jpeg::errors::DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let image_size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;

    Image::new(image_size, img_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let err = read_image_jpeg_rgb8("not_there.jpg").unwrap_err();
        assert!(matches!(err, IoError::FileDoesNotExist(_)));
    }

    #[test]
    fn test_read_wrong_extension() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        let err = read_image_jpeg_rgb8(file.path()).unwrap_err();
        assert!(matches!(err, IoError::InvalidFileExtension(_)));
    }
}
