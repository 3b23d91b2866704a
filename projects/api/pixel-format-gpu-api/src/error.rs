//! Error types for pixel format operations.

use pixel_format_gpu::{BoxPixelSize, CopyError, PixelFormatGpu};
use thiserror::Error;

/// Errors that can occur when validating or running a pixel format operation.
#[derive(Debug, Error)]
pub enum PixelFormatGpuError {
    /// A buffer cannot back every pixel of its texture box.
    #[error("Buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    BufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The texture box reaches past the addressable range, so no buffer can back it.
    #[error("Texture box at ({x}, {y}, {z}) of size {width}x{height}x{depth_or_slices} overflows the addressable range.")]
    RegionOverflow {
        /// Horizontal origin of the box.
        x: u32,
        /// Vertical origin of the box.
        y: u32,
        /// Depth or slice origin of the box.
        z: u32,
        /// Width of the box.
        width: u32,
        /// Height of the box.
        height: u32,
        /// Depth or slice count of the box.
        depth_or_slices: u32,
    },

    /// Source and destination differ in width, height or depth/slice count.
    #[error("Region size mismatch: source {src:?}, destination {dst:?} (width, height, depth or slices).")]
    SizeMismatch {
        /// Source width, height and depth or slice count.
        src: (u32, u32, u32),
        /// Destination width, height and depth or slice count.
        dst: (u32, u32, u32),
    },

    /// The format has no CPU encoding, so its pixels cannot be packed, unpacked or converted.
    #[error("Format {0} has no CPU encoding.")]
    UnsupportedFormat(PixelFormatGpu),

    /// Block-compressed pixels cannot be converted to another format or accessed one by one.
    #[error("Format {0} is block-compressed.")]
    CompressedFormat(PixelFormatGpu),

    /// The texture box does not hold pixels of the given format.
    #[error("Texture box does not hold {format} pixels: expected {expected:?}, found {actual:?}.")]
    PixelSizeMismatch {
        /// The format the operation was asked to use.
        format: PixelFormatGpu,
        /// The pixel size implied by `format`.
        expected: BoxPixelSize,
        /// The pixel size of the texture box.
        actual: BoxPixelSize,
    },

    /// A pixel coordinate lies outside of the texture box.
    #[error("Pixel ({x}, {y}, {z}) lies outside of the texture.")]
    OutOfBounds {
        /// Horizontal coordinate, relative to the box origin.
        x: u32,
        /// Vertical coordinate, relative to the box origin.
        y: u32,
        /// Depth or slice coordinate, relative to the box origin.
        z: u32,
    },

    /// Normal maps can only be written as `RG8` unsigned or signed normalized.
    #[error("Normal maps are stored as RG8, got {0}.")]
    InvalidNormalMapTarget(PixelFormatGpu),

    /// A strict copy rejected the regions.
    #[error(transparent)]
    Copy(#[from] CopyError),
}
