use super::bulk_pixel_conversion;
use crate::format::registry::get_bytes_per_pixel;
use crate::format::PixelFormatGpu::{self, *};
use crate::pack::{pack_colour, supports_pack, unpack_colour};
use crate::texture_box::TextureBox;
use core::slice;
use tracing::{debug, trace, warn};

/// Re-encodes a tangent space normal map as two channel `RG8` data.
///
/// Only X and Y are kept; consumers reconstruct Z. Plain 8-bit sources reuse
/// [`bulk_pixel_conversion`]. Any other source is unpacked, remapped from `[0, 1]` to `[-1, 1]`
/// when `dst_format` is [`Rg8Snorm`], and written as signed 8-bit X and Y for either
/// destination. An [`Rg8Unorm`] destination therefore holds `[0, 127]` for such sources.
///
/// Destinations other than [`Rg8Snorm`] and [`Rg8Unorm`] are left untouched.
///
/// # Safety
///
/// Same as [`bulk_pixel_conversion`].
pub unsafe fn convert_for_normal_mapping(
    src: &TextureBox,
    src_format: PixelFormatGpu,
    dst: &mut TextureBox,
    dst_format: PixelFormatGpu,
) {
    if !matches!(dst_format, Rg8Snorm | Rg8Unorm) {
        warn!(dst = %dst_format, "Normal maps are stored as RG8, skipping");
        return;
    }
    debug_assert!(src.equal_size(dst));

    if matches!(
        src_format,
        Rgba8Unorm | Rgba8Snorm | Bgra8Unorm | Bgrx8Unorm | Rgb8Unorm | Bgr8Unorm | Rg8Unorm | Rg8Snorm
    ) {
        bulk_pixel_conversion(src, src_format, dst, dst_format, false);
        return;
    }

    if !supports_pack(src_format) {
        debug!(src = %src_format, "No CPU encoding for normal map source, skipping");
        return;
    }

    let (range_mul, range_add) = match dst_format {
        Rg8Snorm => (2.0, -1.0),
        _ => (1.0, 0.0),
    };

    let width = src.width as usize;
    if width == 0 {
        return;
    }
    let src_bytes_per_pixel = get_bytes_per_pixel(src_format) as usize;
    trace!(src = %src_format, dst = %dst_format, "Normal map fallback");

    for z in 0..src.get_depth_or_slices() {
        for y in 0..src.height {
            let src_row = slice::from_raw_parts(
                src.at_from_offsetted_origin(0, y, z) as *const u8,
                width * src_bytes_per_pixel,
            );
            let dst_row = slice::from_raw_parts_mut(dst.at_from_offsetted_origin(0, y, z), width * 2);

            for (src_pixel, dst_pixel) in src_row
                .chunks_exact(src_bytes_per_pixel)
                .zip(dst_row.chunks_exact_mut(2))
            {
                let mut rgba = [0.0; 4];
                if unpack_colour(&mut rgba, src_format, src_pixel) {
                    let normal = [
                        rgba[0] * range_mul + range_add,
                        rgba[1] * range_mul + range_add,
                        0.0,
                        1.0,
                    ];
                    let _ = pack_colour(&normal, Rg8Snorm, dst_pixel);
                }
            }
        }
    }
}
