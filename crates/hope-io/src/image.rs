use crate::error::IoError;

/// Image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// An owned image buffer with row-major interleaved channels.
#[derive(Debug, Clone)]
pub struct Image<T, const C: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const C: usize> Image<T, C> {
    /// Create a new image, validating the buffer against the dimensions.
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, IoError> {
        let expected = size.width * size.height * C;
        if data.len() != expected {
            return Err(IoError::InvalidImageData {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { size, data })
    }

    /// The image size in pixels.
    #[inline]
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The number of channels.
    #[inline]
    pub fn num_channels(&self) -> usize {
        C
    }

    /// The raw interleaved buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the image and return the raw buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy, const C: usize> Image<T, C> {
    /// The channel values of one pixel.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [T; C] {
        let offset = (y * self.size.width + x) * C;
        let mut out = [self.data[offset]; C];
        out.copy_from_slice(&self.data[offset..offset + C]);
        out
    }
}
