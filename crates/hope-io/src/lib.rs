#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
pub mod error;

/// Owned image buffer types.
pub mod image;

/// JPEG image reading.
///
/// Pure Rust JPEG decoding for the dataset's RGB captures.
pub mod jpeg;

/// PNG image reading.
///
/// Read RGB images and the dataset's 16-bit depth maps.
pub mod png;

pub use error::IoError;
pub use image::{Image, ImageSize};
