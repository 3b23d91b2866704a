//! Selection of a fast row converter for a pair of formats.

use super::rows::*;
use crate::format::registry::{get_bytes_per_pixel, get_flags, get_layout};
use crate::format::{PixelFormatFlags, PixelFormatGpu, PixelFormatLayout};

/// Finds a byte-shuffling row converter from `src_format` to `dst_format`, if one exists.
///
/// Fast paths exist for:
///
/// - identical formats (plain copies, used when flipping);
/// - formats with identical flags whose layouts differ only in component order or count;
/// - 8-bit unsigned normalized sources to `RG8` signed normalized, and back.
pub(crate) fn find_row_conversion(
    src_format: PixelFormatGpu,
    dst_format: PixelFormatGpu,
) -> Option<RowConversionFn> {
    use PixelFormatLayout::*;

    if src_format == dst_format {
        return match get_bytes_per_pixel(src_format) {
            1 => Some(copy_row::<1>),
            2 => Some(copy_row::<2>),
            3 => Some(copy_row::<3>),
            4 => Some(copy_row::<4>),
            6 => Some(copy_row::<6>),
            8 => Some(copy_row::<8>),
            12 => Some(copy_row::<12>),
            16 => Some(copy_row::<16>),
            _ => None,
        };
    }

    let src_flags = get_flags(src_format);
    let dst_flags = get_flags(dst_format);
    let layouts = (get_layout(src_format), get_layout(dst_format));
    let unorm = PixelFormatFlags::NORMALIZED;
    let snorm = PixelFormatFlags::NORMALIZED | PixelFormatFlags::SIGNED;

    let convert: RowConversionFn = if src_flags == dst_flags {
        match layouts {
            (Rgba32, Rgb32) => rgba32_to_rgb32,
            (Rgb32, Rg32) => rgb32_to_rg32,
            (Rg32, Rgb32) => rg32_to_rgb32,
            (Rg32, R32) => rg32_to_r32,

            (Rgba16, Rgb16) => rgba16_to_rgb16,
            (Rgb16, Rgba16) => rgb16_to_rgba16,
            (Rgb16, Rg16) => rgb16_to_rg16,
            (Rg16, Rgb16) => rg16_to_rgb16,
            (Rg16, R16) => rg16_to_r16,

            (Rgba8, Bgra8) => rgba8_to_bgra8,
            (Rgba8, Bgrx8) => rgba8_to_bgrx8,
            (Rgba8, Rgb8) => rgba8_to_rgb8,
            (Rgba8, Bgr8) => rgba8_to_bgr8,
            (Rgba8, Rg8) => rgba8_to_rg8,
            (Rgba8, R8) => rgba8_to_r8,

            (Bgra8, Rgba8) => bgra8_to_rgba8,
            (Bgra8, Bgrx8) => bgra8_to_bgrx8,
            (Bgrx8, Rgba8) => bgrx8_to_rgba8,
            (Bgrx8, Bgra8) => bgra8_to_bgrx8,
            (Bgra8 | Bgrx8, Rgb8) => bgra8_to_rgb8,
            (Bgra8 | Bgrx8, Bgr8) => bgra8_to_bgr8,
            (Bgra8 | Bgrx8, Rg8) => bgra8_to_rg8,
            (Bgra8 | Bgrx8, R8) => bgra8_to_r8,

            (Rgb8, Rgba8) => rgb8_to_rgba8,
            (Rgb8, Bgra8 | Bgrx8) => rgb8_to_bgra8,
            (Rgb8, Bgr8) => rgb8_to_bgr8,
            (Rgb8, Rg8) => rgb8_to_rg8,
            (Rgb8, R8) => rgb8_to_r8,

            (Bgr8, Rgba8) => bgr8_to_rgba8,
            (Bgr8, Bgra8 | Bgrx8) => bgr8_to_bgra8,
            (Bgr8, Rgb8) => rgb8_to_bgr8,
            (Bgr8, Rg8) => bgr8_to_rg8,
            (Bgr8, R8) => bgr8_to_r8,

            (Rg8, Rgb8) => rg8_to_rgb8,
            (Rg8, Bgr8) => rg8_to_bgr8,
            (Rg8, R8) => rg8_to_r8,

            _ => return None,
        }
    } else if src_flags == unorm && dst_flags == snorm {
        match layouts {
            (Rgba8, Rg8) => rgba8_to_rg8_u2s,
            (Bgra8 | Bgrx8, Rg8) => bgra8_to_rg8_u2s,
            (Rgb8, Rg8) => rgb8_to_rg8_u2s,
            (Bgr8, Rg8) => bgr8_to_rg8_u2s,
            (Rg8, Rg8) => rg8_to_rg8_u2s,
            _ => return None,
        }
    } else if src_flags == snorm && dst_flags == unorm {
        match layouts {
            (Rgba8, Rg8) => rgba8_to_rg8_s2u,
            (Bgra8 | Bgrx8, Rg8) => bgra8_to_rg8_s2u,
            (Rgb8, Rg8) => rgb8_to_rg8_s2u,
            (Bgr8, Rg8) => bgr8_to_rg8_s2u,
            (Rg8, Rg8) => rg8_to_rg8_s2u,
            _ => return None,
        }
    } else {
        return None;
    };

    Some(convert)
}
