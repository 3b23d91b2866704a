//! Queries over the format descriptor table.
//!
//! Everything here is a pure function of a [`PixelFormatGpu`]. Unknown formats answer with
//! sentinel values (`0`, `false` or the input format) rather than failing.

use super::{PixelFormatFlags, PixelFormatGpu, PixelFormatLayout};
use PixelFormatGpu::*;

/// Bytes per pixel of the format; `0` for block compressed formats.
#[inline]
pub const fn get_bytes_per_pixel(format: PixelFormatGpu) -> u32 {
    format.desc().bytes_per_pixel as u32
}

/// Number of logical components (1 to 4).
#[inline]
pub const fn get_num_components(format: PixelFormatGpu) -> u32 {
    format.desc().components as u32
}

/// Byte arrangement class of the format.
#[inline]
pub const fn get_layout(format: PixelFormatGpu) -> PixelFormatLayout {
    format.desc().layout
}

/// Semantic flags of the format.
#[inline]
pub const fn get_flags(format: PixelFormatGpu) -> PixelFormatFlags {
    format.desc().flags
}

/// Display name of the format.
#[inline]
pub const fn to_string(format: PixelFormatGpu) -> &'static str {
    format.name()
}

macro_rules! flag_predicate {
    ($($(#[$meta:meta])* $name:ident => $flag:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            pub const fn $name(format: PixelFormatGpu) -> bool {
                get_flags(format).contains(PixelFormatFlags::$flag)
            }
        )*
    };
}

flag_predicate! {
    /// 32-bit float components.
    is_float => FLOAT;
    /// 16-bit float components.
    is_half => HALF;
    /// Exotic float encodings (shared exponent, 11/10-bit floats, BC6H).
    is_float_rare => FLOAT_RARE;
    /// Plain (not normalized) integer components.
    is_integer => INTEGER;
    /// Normalized components.
    is_normalized => NORMALIZED;
    /// Signed components.
    is_signed => SIGNED;
    /// Depth format.
    is_depth => DEPTH;
    /// Stencil format.
    is_stencil => STENCIL;
    /// sRGB encoded colour.
    is_srgb => SRGB;
    /// Block compressed.
    is_compressed => COMPRESSED;
    /// Palettised.
    is_palette => PALETTE;
}

/// Whether the CPU may read and write individual pixels of this format.
///
/// False for [`PixelFormatGpu::Unknown`] and for any compressed, depth or stencil format.
#[inline]
pub const fn is_accessible(format: PixelFormatGpu) -> bool {
    if matches!(format, Unknown) {
        return false;
    }
    !get_flags(format).intersects(
        PixelFormatFlags::COMPRESSED
            .union(PixelFormatFlags::DEPTH)
            .union(PixelFormatFlags::STENCIL),
    )
}

/// Whether the format carries an alpha channel.
pub const fn has_alpha(format: PixelFormatGpu) -> bool {
    (get_num_components(format) == 4 && !matches!(format, R8g8B8g8Unorm | G8r8G8b8Unorm))
        || matches!(format, A8Unorm | A8p8 | Ia44 | Ai44)
}

/// Width in pixels of a compression block.
///
/// Returns `1` for uncompressed formats. Returns `0` when the format has no meaningful block
/// addressing: every PVRTC format, and ETC1 when `api_strict` is set (the API forbids updating
/// ETC1 sub-regions). Callers must check for zero before dividing.
pub const fn get_compressed_block_width(format: PixelFormatGpu, api_strict: bool) -> u32 {
    match format {
        // These formats work in 4x4 blocks.
        Bc1Unorm | Bc1UnormSrgb | Bc2Unorm | Bc2UnormSrgb | Bc3Unorm | Bc3UnormSrgb
        | Bc4Unorm | Bc4Snorm | Bc5Unorm | Bc5Snorm | Bc6hUf16 | Bc6hSf16 | Bc7Unorm
        | Bc7UnormSrgb | Etc2Rgb8Unorm | Etc2Rgb8UnormSrgb | Etc2Rgba8Unorm
        | Etc2Rgba8UnormSrgb | Etc2Rgb8a1Unorm | Etc2Rgb8a1UnormSrgb | EacR11Unorm
        | EacR11Snorm | EacR11g11Unorm | EacR11g11Snorm | AtcRgb | AtcRgbaExplicitAlpha
        | AtcRgbaInterpolatedAlpha => 4,

        Etc1Rgb8Unorm => {
            if api_strict {
                0
            } else {
                4
            }
        }

        // Sub-region updates are not possible.
        PvrtcRgb2 | PvrtcRgb2Srgb | PvrtcRgba2 | PvrtcRgba2Srgb | PvrtcRgb4 | PvrtcRgb4Srgb
        | PvrtcRgba4 | PvrtcRgba4Srgb | Pvrtc2Bpp2 | Pvrtc2Bpp2Srgb | Pvrtc2Bpp4
        | Pvrtc2Bpp4Srgb => 0,

        _ => match astc_footprint(format) {
            Some((width, _)) => width,
            None => {
                debug_assert!(!is_compressed(format));
                1
            }
        },
    }
}

/// Height in pixels of a compression block. Same contract as [`get_compressed_block_width`];
/// ASTC footprints are not necessarily square.
pub const fn get_compressed_block_height(format: PixelFormatGpu, api_strict: bool) -> u32 {
    match astc_footprint(format) {
        Some((_, height)) => height,
        None => get_compressed_block_width(format, api_strict),
    }
}

/// Bytes used by a single compression block: 8 or 16 for BC, ETC, EAC, ATC and ASTC, 32 for
/// PVRTC (a 2x2 group of 64-bit words).
///
/// Asking for the block size of an uncompressed format is a caller bug; it asserts in debug
/// builds and yields `1` otherwise.
pub const fn get_compressed_block_size(format: PixelFormatGpu) -> u32 {
    match format {
        Bc1Unorm | Bc1UnormSrgb | Bc4Unorm | Bc4Snorm | EacR11Unorm | EacR11Snorm
        | Etc1Rgb8Unorm | Etc2Rgb8Unorm | Etc2Rgb8UnormSrgb | Etc2Rgb8a1Unorm
        | Etc2Rgb8a1UnormSrgb | AtcRgb => 8,

        Bc2Unorm | Bc2UnormSrgb | Bc3Unorm | Bc3UnormSrgb | Bc5Unorm | Bc5Snorm | Bc6hUf16
        | Bc6hSf16 | Bc7Unorm | Bc7UnormSrgb | Etc2Rgba8Unorm | Etc2Rgba8UnormSrgb
        | EacR11g11Unorm | EacR11g11Snorm | AtcRgbaExplicitAlpha | AtcRgbaInterpolatedAlpha => {
            16
        }

        PvrtcRgb2 | PvrtcRgb2Srgb | PvrtcRgba2 | PvrtcRgba2Srgb | PvrtcRgb4 | PvrtcRgb4Srgb
        | PvrtcRgba4 | PvrtcRgba4Srgb | Pvrtc2Bpp2 | Pvrtc2Bpp2Srgb | Pvrtc2Bpp4
        | Pvrtc2Bpp4Srgb => 32,

        _ => {
            if astc_footprint(format).is_some() {
                return 16;
            }
            debug_assert!(
                is_compressed(format),
                "block size requested for an uncompressed format"
            );
            1
        }
    }
}

/// Block footprint (width, height) of an ASTC format.
pub const fn astc_footprint(format: PixelFormatGpu) -> Option<(u32, u32)> {
    Some(match format {
        AstcRgbaUnorm4x4Ldr | AstcRgbaUnorm4x4Srgb => (4, 4),
        AstcRgbaUnorm5x4Ldr | AstcRgbaUnorm5x4Srgb => (5, 4),
        AstcRgbaUnorm5x5Ldr | AstcRgbaUnorm5x5Srgb => (5, 5),
        AstcRgbaUnorm6x5Ldr | AstcRgbaUnorm6x5Srgb => (6, 5),
        AstcRgbaUnorm6x6Ldr | AstcRgbaUnorm6x6Srgb => (6, 6),
        AstcRgbaUnorm8x5Ldr | AstcRgbaUnorm8x5Srgb => (8, 5),
        AstcRgbaUnorm8x6Ldr | AstcRgbaUnorm8x6Srgb => (8, 6),
        AstcRgbaUnorm8x8Ldr | AstcRgbaUnorm8x8Srgb => (8, 8),
        AstcRgbaUnorm10x5Ldr | AstcRgbaUnorm10x5Srgb => (10, 5),
        AstcRgbaUnorm10x6Ldr | AstcRgbaUnorm10x6Srgb => (10, 6),
        AstcRgbaUnorm10x8Ldr | AstcRgbaUnorm10x8Srgb => (10, 8),
        AstcRgbaUnorm10x10Ldr | AstcRgbaUnorm10x10Srgb => (10, 10),
        AstcRgbaUnorm12x10Ldr | AstcRgbaUnorm12x10Srgb => (12, 10),
        AstcRgbaUnorm12x12Ldr | AstcRgbaUnorm12x12Srgb => (12, 12),
        _ => return None,
    })
}

/// Whether GPUs can generate mipmaps for this format in hardware.
pub const fn supports_hw_mipmaps(format: PixelFormatGpu) -> bool {
    matches!(
        format,
        Rgba8Unorm
            | Rgba8UnormSrgb
            | B5g6r5Unorm
            | Bgra8Unorm
            | Bgra8UnormSrgb
            | Bgrx8Unorm
            | Bgrx8UnormSrgb
            | Rgba16Float
            | Rgba16Unorm
            | Rg16Float
            | Rg16Unorm
            | R32Float
            | Rgba32Float
            | B4g4r4a4Unorm
            | Rgba16Snorm
            | Rg32Float
            | R10g10b10a2Unorm
            | R11g11b10Float
            | Rgba8Snorm
            | Rg16Snorm
            | Rg8Unorm
            | Rg8Snorm
            | R16Float
            | R16Unorm
            | R16Snorm
            | R8Unorm
            | R8Snorm
            | A8Unorm
    )
}

macro_rules! srgb_pairs {
    ($($linear:ident <=> $srgb:ident,)*) => {
        /// The sRGB counterpart of a format, or the format itself when it has none.
        ///
        /// sRGB formats map to themselves.
        pub const fn get_equivalent_srgb(format: PixelFormatGpu) -> PixelFormatGpu {
            match format {
                $($linear => $srgb,)*
                other => other,
            }
        }

        /// The linear counterpart of a format, or the format itself when it has none.
        ///
        /// Linear formats map to themselves.
        pub const fn get_equivalent_linear(format: PixelFormatGpu) -> PixelFormatGpu {
            match format {
                $($srgb => $linear,)*
                other => other,
            }
        }
    };
}

srgb_pairs! {
    Rgba8Unorm <=> Rgba8UnormSrgb,
    Bc1Unorm <=> Bc1UnormSrgb,
    Bc2Unorm <=> Bc2UnormSrgb,
    Bc3Unorm <=> Bc3UnormSrgb,
    Bgra8Unorm <=> Bgra8UnormSrgb,
    Bgrx8Unorm <=> Bgrx8UnormSrgb,
    Bc7Unorm <=> Bc7UnormSrgb,
    Rgb8Unorm <=> Rgb8UnormSrgb,
    Bgr8Unorm <=> Bgr8UnormSrgb,
    PvrtcRgb2 <=> PvrtcRgb2Srgb,
    PvrtcRgba2 <=> PvrtcRgba2Srgb,
    PvrtcRgb4 <=> PvrtcRgb4Srgb,
    PvrtcRgba4 <=> PvrtcRgba4Srgb,
    Pvrtc2Bpp2 <=> Pvrtc2Bpp2Srgb,
    Pvrtc2Bpp4 <=> Pvrtc2Bpp4Srgb,
    Etc2Rgb8Unorm <=> Etc2Rgb8UnormSrgb,
    Etc2Rgba8Unorm <=> Etc2Rgba8UnormSrgb,
    Etc2Rgb8a1Unorm <=> Etc2Rgb8a1UnormSrgb,
    AstcRgbaUnorm4x4Ldr <=> AstcRgbaUnorm4x4Srgb,
    AstcRgbaUnorm5x4Ldr <=> AstcRgbaUnorm5x4Srgb,
    AstcRgbaUnorm5x5Ldr <=> AstcRgbaUnorm5x5Srgb,
    AstcRgbaUnorm6x5Ldr <=> AstcRgbaUnorm6x5Srgb,
    AstcRgbaUnorm6x6Ldr <=> AstcRgbaUnorm6x6Srgb,
    AstcRgbaUnorm8x5Ldr <=> AstcRgbaUnorm8x5Srgb,
    AstcRgbaUnorm8x6Ldr <=> AstcRgbaUnorm8x6Srgb,
    AstcRgbaUnorm8x8Ldr <=> AstcRgbaUnorm8x8Srgb,
    AstcRgbaUnorm10x5Ldr <=> AstcRgbaUnorm10x5Srgb,
    AstcRgbaUnorm10x6Ldr <=> AstcRgbaUnorm10x6Srgb,
    AstcRgbaUnorm10x8Ldr <=> AstcRgbaUnorm10x8Srgb,
    AstcRgbaUnorm10x10Ldr <=> AstcRgbaUnorm10x10Srgb,
    AstcRgbaUnorm12x10Ldr <=> AstcRgbaUnorm12x10Srgb,
    AstcRgbaUnorm12x12Ldr <=> AstcRgbaUnorm12x12Srgb,
}

/// Whether the format has an sRGB or linear counterpart.
#[inline]
pub fn has_srgb_equivalent(format: PixelFormatGpu) -> bool {
    get_equivalent_srgb(format) != get_equivalent_linear(format)
}

/// Canonical representative of the format's bit layout family.
///
/// Two formats of the same family can be reinterpreted as each other without touching the
/// bytes (e.g. every RGBA8 variant maps to [`PixelFormatGpu::Rgba8Unorm`]).
pub const fn get_family(format: PixelFormatGpu) -> PixelFormatGpu {
    match format {
        Rgba32Float | Rgba32Uint | Rgba32Sint => Rgba32Uint,
        Rgb32Float | Rgb32Uint | Rgb32Sint => Rgb32Uint,
        Rgba16Float | Rgba16Unorm | Rgba16Uint | Rgba16Snorm | Rgba16Sint => Rgba16Uint,
        Rg32Float | Rg32Uint | Rg32Sint => Rg32Uint,
        R10g10b10a2Unorm | R10g10b10a2Uint => R10g10b10a2Uint,
        Rgba8Unorm | Rgba8UnormSrgb | Rgba8Uint | Rgba8Snorm | Rgba8Sint => Rgba8Unorm,
        Rg16Float | Rg16Unorm | Rg16Uint | Rg16Snorm | Rg16Sint => Rg16Uint,
        D32Float | R32Float | R32Uint | R32Sint => R32Uint,
        D24Unorm | D24UnormS8Uint => D24UnormS8Uint,
        Rg8Unorm | Rg8Uint | Rg8Snorm | Rg8Sint => Rg8Uint,
        R16Float | D16Unorm | R16Unorm | R16Uint | R16Snorm | R16Sint => R16Uint,
        R8Unorm | R8Uint | R8Snorm | R8Sint => R8Uint,
        Bc1Unorm | Bc1UnormSrgb => Bc1Unorm,
        Bc2Unorm | Bc2UnormSrgb => Bc2Unorm,
        Bc3Unorm | Bc3UnormSrgb => Bc3Unorm,
        Bc4Unorm | Bc4Snorm => Bc4Unorm,
        Bc5Unorm | Bc5Snorm => Bc5Unorm,
        Bgra8Unorm | Bgra8UnormSrgb => Bgra8Unorm,
        Bgrx8Unorm | Bgrx8UnormSrgb => Bgrx8Unorm,
        Bc6hUf16 | Bc6hSf16 => Bc6hUf16,
        Bc7Unorm | Bc7UnormSrgb => Bc7Unorm,
        other => other,
    }
}

/// Finds a format by its display name.
///
/// Returns [`PixelFormatGpu::Unknown`] when no format has that name, or when the match has any
/// of `exclusion_flags` set.
pub fn get_format_from_name(name: &str, exclusion_flags: PixelFormatFlags) -> PixelFormatGpu {
    PixelFormatGpu::iter()
        .find(|format| format.name() == name)
        .filter(|format| !get_flags(*format).intersects(exclusion_flags))
        .unwrap_or(Unknown)
}
