//! Test prelude for the pixel format API tests.
//!
//! This module provides common test imports and helpers used across
//! multiple test modules to reduce code duplication.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::*;
pub use pixel_format_gpu::CopyError;
pub use pixel_format_gpu::PixelFormatGpu::*;

/// Bytes `0, 1, 2, ...` wrapping at 256.
pub(crate) fn sequential(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}
