#![doc = include_str!("../README.MD")]
#![warn(missing_docs)]

//! Safe, slice based API for GPU pixel format conversion.
//!
//! This crate wraps the raw pointer operations of [`pixel_format_gpu`] behind
//! [`TextureView`] and [`TextureViewMut`], which bind a [`TextureBox`] to a byte slice and
//! check the slice is long enough once, up front. Every operation validates its formats and
//! regions and returns a [`PixelFormatGpuError`] instead of silently skipping work.
//!
//! # Examples
//!
//! ## Converting an image
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pixel_format_gpu::PixelFormatGpu;
//! use pixel_format_gpu_api::{
//!     bulk_pixel_conversion, ConversionOptionsBuilder, TextureView, TextureViewMut,
//! };
//!
//! let rgba8 = vec![0xFFu8; 4 * 4 * 4];
//! let mut rgba16 = vec![0u8; 4 * 4 * 8];
//!
//! let src = TextureView::for_format(&rgba8, 4, 4, 1, 1, PixelFormatGpu::Rgba8Unorm)?;
//! let mut dst = TextureViewMut::for_format(&mut rgba16, 4, 4, 1, 1, PixelFormatGpu::Rgba16Unorm)?;
//! let options = ConversionOptionsBuilder::new().vertical_flip(true).build();
//!
//! bulk_pixel_conversion(&src, PixelFormatGpu::Rgba8Unorm, &mut dst, PixelFormatGpu::Rgba16Unorm, &options)?;
//! assert!(rgba16.iter().all(|&byte| byte == 0xFF));
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod convert;
pub mod error;
pub mod options;
pub mod options_builder;
pub mod pixel;
pub mod view;

// Re-export main functionality at crate root
pub use convert::{bulk_pixel_conversion, convert_for_normal_mapping, copy_texture};
pub use error::PixelFormatGpuError;
pub use options::{ConversionOptions, CopyPolicy};
pub use options_builder::ConversionOptionsBuilder;
pub use pixel::{get_colour_at, pack_colour, set_colour_at, unpack_colour};
pub use view::{TextureView, TextureViewMut};

// Core types used in signatures
pub use pixel_format_gpu::{BoxPixelSize, ColourValue, PixelFormatGpu, TextureBox};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
