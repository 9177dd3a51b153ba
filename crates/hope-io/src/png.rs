use std::{fs, path::Path};

use png::Decoder;

use crate::error::IoError;
use crate::image::{Image, ImageSize};

/// Read a PNG image with three channels (rgb8).
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A RGB image with three channels (rgb8).
pub fn read_image_png_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let (buf, size) = read_png_impl(file_path)?;
    Image::new(size, buf)
}

/// Read a PNG image with a single channel (mono16).
///
/// The dataset's depth maps are stored this way, one millimeter per unit.
///
/// # Arguments
///
/// * `file_path` - The path to the PNG file.
///
/// # Returns
///
/// A grayscale image with a single channel (mono16).
pub fn read_image_png_mono16(file_path: impl AsRef<Path>) -> Result<Image<u16, 1>, IoError> {
    let (buf, size) = read_png_impl(file_path)?;
    let buf_u16 = convert_buf_u8_u16(buf);
    Image::new(size, buf_u16)
}

fn read_png_impl(file_path: impl AsRef<Path>) -> Result<(Vec<u8>, ImageSize), IoError> {
    // verify the file exists
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // verify the file extension
    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let file = fs::File::open(file_path)?;
    let mut reader = Decoder::new(file)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;
    buf.truncate(info.buffer_size());

    Ok((
        buf,
        ImageSize {
            width: info.width as usize,
            height: info.height as usize,
        },
    ))
}

// PNG stores 16-bit samples big-endian.
fn convert_buf_u8_u16(buf: Vec<u8>) -> Vec<u16> {
    let mut buf_u16 = Vec::with_capacity(buf.len() / 2);
    for chunk in buf.chunks_exact(2) {
        buf_u16.push(u16::from_be_bytes([chunk[0], chunk[1]]));
    }

    buf_u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufWriter;

    fn write_png_mono16(path: &Path, width: u32, height: u32, data: &[u16]) {
        let file = fs::File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Sixteen);
        let mut writer = encoder.write_header().unwrap();
        let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_be_bytes()).collect();
        writer.write_image_data(&bytes).unwrap();
    }

    #[test]
    fn test_read_mono16_depth_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.png");
        write_png_mono16(&path, 2, 2, &[0, 500, 1000, 65535]);

        let image = read_image_png_mono16(&path).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.as_slice(), &[0, 500, 1000, 65535]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_image_png_rgb8("not_there.png").unwrap_err();
        assert!(matches!(err, IoError::FileDoesNotExist(_)));
    }

    #[test]
    fn test_read_wrong_extension() {
        let file = tempfile::Builder::new().suffix(".jpg").tempfile().unwrap();
        let err = read_image_png_mono16(file.path()).unwrap_err();
        assert!(matches!(err, IoError::InvalidFileExtension(_)));
    }
}
