//! Byte size bookkeeping for textures and mip chains.
//!
//! All sizes are computed in `u32`, matching the range GPU APIs accept for a single
//! allocation description. Sizes past `u32::MAX` wrap rather than panic.

use crate::format::registry::{astc_footprint, get_bytes_per_pixel, is_compressed};
use crate::format::PixelFormatGpu::{self, *};

/// Row alignment assumed by [`mip_offset`] and [`advance_pointer_to_mip`].
pub const MIP_ROW_ALIGNMENT: u32 = 4;

/// Rounds `value` up to the next multiple of `alignment`. Alignments of `0` and `1` leave the
/// value untouched.
#[inline(always)]
pub const fn align_to_next_multiple(value: u32, alignment: u32) -> u32 {
    if alignment <= 1 {
        value
    } else {
        value.div_ceil(alignment).wrapping_mul(alignment)
    }
}

/// Byte size of a single mip level.
///
/// Uncompressed formats use `align(width * bytes_per_pixel, row_alignment) * height * depth *
/// slices`. Compressed formats use their block layout and ignore `row_alignment`.
///
/// PVRTC pads small images up to the minimum size the PVRTC extension mandates (16x8 for 2bpp,
/// 8x8 for 4bpp).
pub const fn get_size_bytes(
    width: u32,
    height: u32,
    depth: u32,
    slices: u32,
    format: PixelFormatGpu,
    row_alignment: u32,
) -> u32 {
    if !is_compressed(format) {
        let row_bytes = width.wrapping_mul(get_bytes_per_pixel(format));
        let row = align_to_next_multiple(row_bytes, row_alignment);
        return times(row, height, depth, slices);
    }

    match format {
        // 4x4 blocks of 8 bytes.
        Bc1Unorm | Bc1UnormSrgb | Bc4Unorm | Bc4Snorm | EacR11Unorm | EacR11Snorm
        | Etc1Rgb8Unorm | Etc2Rgb8Unorm | Etc2Rgb8UnormSrgb | Etc2Rgb8a1Unorm
        | Etc2Rgb8a1UnormSrgb | AtcRgb => {
            times(blocks(width, height, 4, 4).wrapping_mul(8), 1, depth, slices)
        }

        // 4x4 blocks of 16 bytes.
        Bc2Unorm | Bc2UnormSrgb | Bc3Unorm | Bc3UnormSrgb | Bc5Unorm | Bc5Snorm | Bc6hUf16
        | Bc6hSf16 | Bc7Unorm | Bc7UnormSrgb | Etc2Rgba8Unorm | Etc2Rgba8UnormSrgb
        | EacR11g11Unorm | EacR11g11Snorm | AtcRgbaExplicitAlpha | AtcRgbaInterpolatedAlpha => {
            times(blocks(width, height, 4, 4).wrapping_mul(16), 1, depth, slices)
        }

        // PVRTC pads to a minimum of 2x2 blocks (IMG_texture_compression_pvrtc).
        PvrtcRgb2 | PvrtcRgb2Srgb | PvrtcRgba2 | PvrtcRgba2Srgb | Pvrtc2Bpp2 | Pvrtc2Bpp2Srgb => {
            let bits = times(max(width, 16), max(height, 8), 2, 1);
            times(bits.div_ceil(8), 1, depth, slices)
        }
        PvrtcRgb4 | PvrtcRgb4Srgb | PvrtcRgba4 | PvrtcRgba4Srgb | Pvrtc2Bpp4 | Pvrtc2Bpp4Srgb => {
            let bits = times(max(width, 8), max(height, 8), 4, 1);
            times(bits.div_ceil(8), 1, depth, slices)
        }

        _ => match astc_footprint(format) {
            Some((block_width, block_height)) => {
                let blocks = blocks(width, height, block_width, block_height);
                times(blocks.wrapping_mul(16), 1, depth, slices)
            }
            None => u32::MAX,
        },
    }
}

/// Total byte size of a mip chain of `num_mipmaps` levels, starting at the given dimensions.
///
/// Dimensions halve (floor, never below 1) each level while the slice count stays fixed. If the
/// chain reaches 1x1x1 with levels left over, exactly one more 1x1x1 level is added. Halving
/// clamps to 1, so a zero dimension only stays zero when no other dimension exceeds 1; such
/// chains have a size of `0`.
pub const fn calculate_size_bytes(
    mut width: u32,
    mut height: u32,
    mut depth: u32,
    slices: u32,
    format: PixelFormatGpu,
    mut num_mipmaps: u8,
    row_alignment: u32,
) -> u32 {
    let mut total = 0;
    while (width > 1 || height > 1 || depth > 1) && num_mipmaps > 0 {
        let level = get_size_bytes(width, height, depth, slices, format, row_alignment);
        total = level.wrapping_add(total);
        width = max(1, width / 2);
        height = max(1, height / 2);
        depth = max(1, depth / 2);
        num_mipmaps -= 1;
    }

    if width == 1 && height == 1 && depth == 1 && num_mipmaps > 0 {
        total = get_size_bytes(1, 1, 1, slices, format, row_alignment).wrapping_add(total);
    }

    total
}

/// Number of mip levels in a full chain for a resolution: `floor(log2(resolution)) + 1`, or `0`
/// for a zero resolution.
#[inline]
pub const fn get_max_mipmap_count(resolution: u32) -> u8 {
    (u32::BITS - resolution.leading_zeros()) as u8
}

/// [`get_max_mipmap_count`] of the largest of two dimensions.
#[inline]
pub const fn get_max_mipmap_count_2d(width: u32, height: u32) -> u8 {
    get_max_mipmap_count(max(width, height))
}

/// [`get_max_mipmap_count`] of the largest of three dimensions.
#[inline]
pub const fn get_max_mipmap_count_3d(width: u32, height: u32, depth: u32) -> u8 {
    get_max_mipmap_count(max(max(width, height), depth))
}

/// Byte offset of `mip_level` in a tightly packed mip chain (rows aligned to
/// [`MIP_ROW_ALIGNMENT`]).
pub const fn mip_offset(
    width: u32,
    height: u32,
    depth: u32,
    slices: u32,
    format: PixelFormatGpu,
    mip_level: u8,
) -> usize {
    calculate_size_bytes(
        width,
        height,
        depth,
        slices,
        format,
        mip_level,
        MIP_ROW_ALIGNMENT,
    ) as usize
}

/// Moves a pointer to the start of a mip chain forward to `mip_level`, see [`mip_offset`].
///
/// Only computes the address; the result is valid to dereference only if the chain backing
/// `base` really holds that level.
#[inline]
pub fn advance_pointer_to_mip(
    base: *mut u8,
    width: u32,
    height: u32,
    depth: u32,
    slices: u32,
    format: PixelFormatGpu,
    mip_level: u8,
) -> *mut u8 {
    base.wrapping_add(mip_offset(width, height, depth, slices, format, mip_level))
}

/// Number of `block_width` x `block_height` blocks covering a `width` x `height` image.
#[inline(always)]
const fn blocks(width: u32, height: u32, block_width: u32, block_height: u32) -> u32 {
    width.div_ceil(block_width).wrapping_mul(height.div_ceil(block_height))
}

#[inline(always)]
const fn times(a: u32, b: u32, c: u32, d: u32) -> u32 {
    a.wrapping_mul(b).wrapping_mul(c).wrapping_mul(d)
}

#[inline(always)]
const fn max(a: u32, b: u32) -> u32 {
    if a > b {
        a
    } else {
        b
    }
}
