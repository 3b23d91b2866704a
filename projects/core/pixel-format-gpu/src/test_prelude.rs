//! Common test imports for the pixel format tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Formats, with their variants in scope so cases read `Rgba8Unorm` rather than the full path.
pub use crate::format::PixelFormatGpu::{self, *};
pub use crate::format::registry::*;
pub use crate::format::{PixelFormatFlags, PixelFormatLayout};

// Core functionality from this crate
pub use crate::colour::ColourValue;
pub use crate::pack::{pack_colour, supports_pack, unpack_colour};
pub use crate::texture_box::{BoxPixelSize, CopyError, TextureBox};

/// Routes log events to the captured test output. Can be called from any number of tests.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
