#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod colour;
pub mod convert;
pub mod format;
pub mod pack;
pub mod size;
pub mod srgb;
pub mod texture_box;

// Re-export the commonly used types and functions at the crate root.
pub use colour::ColourValue;
pub use convert::{bulk_pixel_conversion, convert_for_normal_mapping, is_conversion_supported};
pub use format::registry::*;
pub use format::{
    PixelFormatDesc, PixelFormatFlags, PixelFormatGpu, PixelFormatLayout, UnknownPixelFormatError,
};
pub use pack::{pack_colour, pack_colour_value, supports_pack, unpack_colour, unpack_colour_value};
pub use size::*;
pub use srgb::{from_srgb, to_srgb};
pub use texture_box::{BoxPixelSize, CopyError, TextureBox};

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
