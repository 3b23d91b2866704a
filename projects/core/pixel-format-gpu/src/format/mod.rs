//! # GPU Pixel Formats
//!
//! [`PixelFormatGpu`] enumerates every pixel format the engine knows about, mirroring the
//! D3D/Vulkan/GL style format lists. The numeric order of the variants is part of the public
//! contract: persisted texture assets reference formats by ordinal, so new formats may only
//! ever be appended before [`PixelFormatGpu::Count`].
//!
//! Everything known about a format (name, component count, size, byte layout and semantic
//! flags) lives in its [`PixelFormatDesc`], see [`PixelFormatGpu::desc`]. The free functions in
//! [`registry`] answer the derived questions (block sizes, sRGB counterparts, families).

mod descriptor;
mod flags;
mod layout;
pub mod registry;

pub use descriptor::*;
pub use flags::*;
pub use layout::*;

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// A GPU pixel format.
///
/// The declaration order defines the ordinal of each format, see [`PixelFormatGpu::from_ordinal`].
#[allow(missing_docs)]
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, AllValues)]
pub enum PixelFormatGpu {
    #[default]
    Unknown,
    Null,

    Rgba32Float,
    Rgba32Uint,
    Rgba32Sint,

    Rgb32Float,
    Rgb32Uint,
    Rgb32Sint,

    Rgba16Float,
    Rgba16Unorm,
    Rgba16Uint,
    Rgba16Snorm,
    Rgba16Sint,

    Rg32Float,
    Rg32Uint,
    Rg32Sint,

    D32FloatS8x24Uint,

    R10g10b10a2Unorm,
    R10g10b10a2Uint,
    R11g11b10Float,

    Rgba8Unorm,
    Rgba8UnormSrgb,
    Rgba8Uint,
    Rgba8Snorm,
    Rgba8Sint,

    Rg16Float,
    Rg16Unorm,
    Rg16Uint,
    Rg16Snorm,
    Rg16Sint,

    D32Float,
    R32Float,
    R32Uint,
    R32Sint,

    D24Unorm,
    D24UnormS8Uint,

    Rg8Unorm,
    Rg8Uint,
    Rg8Snorm,
    Rg8Sint,

    R16Float,
    D16Unorm,
    R16Unorm,
    R16Uint,
    R16Snorm,
    R16Sint,

    R8Unorm,
    R8Uint,
    R8Snorm,
    R8Sint,
    A8Unorm,
    R1Unorm,

    R9g9b9e5SharedExp,
    R8g8B8g8Unorm,
    G8r8G8b8Unorm,

    Bc1Unorm,
    Bc1UnormSrgb,
    Bc2Unorm,
    Bc2UnormSrgb,
    Bc3Unorm,
    Bc3UnormSrgb,
    Bc4Unorm,
    Bc4Snorm,
    Bc5Unorm,
    Bc5Snorm,

    B5g6r5Unorm,
    B5g5r5a1Unorm,
    Bgra8Unorm,
    Bgrx8Unorm,
    R10g10b10XrBiasA2Unorm,
    Bgra8UnormSrgb,
    Bgrx8UnormSrgb,

    Bc6hUf16,
    Bc6hSf16,
    Bc7Unorm,
    Bc7UnormSrgb,

    Ayuv,
    Y410,
    Y416,
    Nv12,
    P010,
    P016,
    Opaque420,
    Yuy2,
    Y210,
    Y216,
    Nv11,
    Ai44,
    Ia44,
    P8,
    A8p8,
    B4g4r4a4Unorm,
    P208,
    V208,
    V408,

    Rgb8Unorm,
    Rgb8UnormSrgb,
    Bgr8Unorm,
    Bgr8UnormSrgb,
    Rgb16Unorm,

    PvrtcRgb2,
    PvrtcRgb2Srgb,
    PvrtcRgba2,
    PvrtcRgba2Srgb,
    PvrtcRgb4,
    PvrtcRgb4Srgb,
    PvrtcRgba4,
    PvrtcRgba4Srgb,
    Pvrtc2Bpp2,
    Pvrtc2Bpp2Srgb,
    Pvrtc2Bpp4,
    Pvrtc2Bpp4Srgb,

    Etc1Rgb8Unorm,
    Etc2Rgb8Unorm,
    Etc2Rgb8UnormSrgb,
    Etc2Rgba8Unorm,
    Etc2Rgba8UnormSrgb,
    Etc2Rgb8a1Unorm,
    Etc2Rgb8a1UnormSrgb,
    EacR11Unorm,
    EacR11Snorm,
    EacR11g11Unorm,
    EacR11g11Snorm,

    AtcRgb,
    AtcRgbaExplicitAlpha,
    AtcRgbaInterpolatedAlpha,

    AstcRgbaUnorm4x4Ldr,
    AstcRgbaUnorm5x4Ldr,
    AstcRgbaUnorm5x5Ldr,
    AstcRgbaUnorm6x5Ldr,
    AstcRgbaUnorm6x6Ldr,
    AstcRgbaUnorm8x5Ldr,
    AstcRgbaUnorm8x6Ldr,
    AstcRgbaUnorm8x8Ldr,
    AstcRgbaUnorm10x5Ldr,
    AstcRgbaUnorm10x6Ldr,
    AstcRgbaUnorm10x8Ldr,
    AstcRgbaUnorm10x10Ldr,
    AstcRgbaUnorm12x10Ldr,
    AstcRgbaUnorm12x12Ldr,

    AstcRgbaUnorm4x4Srgb,
    AstcRgbaUnorm5x4Srgb,
    AstcRgbaUnorm5x5Srgb,
    AstcRgbaUnorm6x5Srgb,
    AstcRgbaUnorm6x6Srgb,
    AstcRgbaUnorm8x5Srgb,
    AstcRgbaUnorm8x6Srgb,
    AstcRgbaUnorm8x8Srgb,
    AstcRgbaUnorm10x5Srgb,
    AstcRgbaUnorm10x6Srgb,
    AstcRgbaUnorm10x8Srgb,
    AstcRgbaUnorm10x10Srgb,
    AstcRgbaUnorm12x10Srgb,
    AstcRgbaUnorm12x12Srgb,

    /// Number of formats. Not a real format; used for sizing and iteration bounds.
    Count,
}

impl PixelFormatGpu {
    /// Number of real formats, i.e. the ordinal of [`PixelFormatGpu::Count`].
    pub const COUNT: usize = PixelFormatGpu::Count as usize;

    /// Converts a persisted ordinal back into a format.
    ///
    /// Ordinals outside of `0..COUNT` yield [`PixelFormatGpu::Unknown`].
    #[inline]
    pub fn from_ordinal(ordinal: u32) -> Self {
        Self::all_values()
            .get(ordinal as usize)
            .copied()
            .filter(|format| *format != PixelFormatGpu::Count)
            .unwrap_or(PixelFormatGpu::Unknown)
    }

    /// The ordinal of this format.
    #[inline(always)]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Iterates over every real format, excluding the [`PixelFormatGpu::Count`] sentinel.
    pub fn iter() -> impl Iterator<Item = PixelFormatGpu> {
        Self::all_values()[..Self::COUNT].iter().copied()
    }

    /// The descriptor of this format.
    #[inline(always)]
    pub const fn desc(self) -> &'static PixelFormatDesc {
        descriptor::describe(self)
    }

    /// Display name of the format, e.g. `PFG_RGBA8_UNORM`.
    #[inline(always)]
    pub const fn name(self) -> &'static str {
        self.desc().name
    }
}

impl fmt::Display for PixelFormatGpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that matches no known pixel format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pixel format name: {0}")]
pub struct UnknownPixelFormatError(pub String);

impl FromStr for PixelFormatGpu {
    type Err = UnknownPixelFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match registry::get_format_from_name(s, PixelFormatFlags::empty()) {
            PixelFormatGpu::Unknown if s != PixelFormatGpu::Unknown.name() => {
                Err(UnknownPixelFormatError(s.to_string()))
            }
            format => Ok(format),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;
    use super::UnknownPixelFormatError;

    #[test]
    fn ordinals_are_stable() {
        assert_eq!(PixelFormatGpu::Unknown.ordinal(), 0);
        assert_eq!(PixelFormatGpu::Null.ordinal(), 1);
        assert_eq!(PixelFormatGpu::Rgba32Float.ordinal(), 2);
        assert_eq!(PixelFormatGpu::Rgba8Unorm.ordinal(), 20);
        assert_eq!(PixelFormatGpu::Bc1Unorm.ordinal(), 55);
        assert_eq!(PixelFormatGpu::AstcRgbaUnorm12x12Srgb.ordinal() + 1, PixelFormatGpu::Count.ordinal());
    }

    #[rstest]
    #[case(0, PixelFormatGpu::Unknown)]
    #[case(20, PixelFormatGpu::Rgba8Unorm)]
    #[case(PixelFormatGpu::COUNT as u32, PixelFormatGpu::Unknown)]
    #[case(u32::MAX, PixelFormatGpu::Unknown)]
    fn from_ordinal_is_bounds_checked(#[case] ordinal: u32, #[case] expected: PixelFormatGpu) {
        assert_eq!(PixelFormatGpu::from_ordinal(ordinal), expected);
    }

    #[test]
    fn from_ordinal_round_trips_every_format() {
        for format in PixelFormatGpu::iter() {
            assert_eq!(
                PixelFormatGpu::from_ordinal(format.ordinal()),
                format,
                "Ordinal mismatch for {format}"
            );
        }
    }

    #[test]
    fn iter_excludes_count() {
        assert_eq!(PixelFormatGpu::iter().count(), PixelFormatGpu::COUNT);
        assert!(PixelFormatGpu::iter().all(|f| f != PixelFormatGpu::Count));
    }

    #[test]
    fn names_are_unique() {
        let names: Vec<&str> = PixelFormatGpu::iter().map(|f| f.name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(
                !names[i + 1..].contains(name),
                "Duplicate descriptor name {name}"
            );
        }
    }

    #[rstest]
    #[case("PFG_RGBA8_UNORM", PixelFormatGpu::Rgba8Unorm)]
    #[case("PFG_ASTC_RGBA_UNORM_8X8_LDR", PixelFormatGpu::AstcRgbaUnorm8x8Ldr)]
    #[case("PFG_UNKNOWN", PixelFormatGpu::Unknown)]
    fn parses_names(#[case] name: &str, #[case] expected: PixelFormatGpu) {
        assert_eq!(name.parse::<PixelFormatGpu>(), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "PFG_NOT_A_FORMAT".parse::<PixelFormatGpu>(),
            Err(UnknownPixelFormatError("PFG_NOT_A_FORMAT".to_string()))
        );
    }
}
