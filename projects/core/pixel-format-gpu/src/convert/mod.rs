//! # Bulk Pixel Conversion
//!
//! Converts every pixel of a [`TextureBox`] from one format to another.
//!
//! Paths, in priority order:
//!
//! 1. Same format and no flip: [`TextureBox::copy_from`].
//! 2. Either format is block-compressed: nothing is done (recompression is not supported).
//! 3. A byte-shuffling row converter for the format pair, when one exists.
//! 4. The float fallback: unpack every pixel, remap between the signed and unsigned normalized
//!    ranges when needed, and pack it again.
//!
//! Vertical flipping writes source row `y` to destination row `height - 1 - y` and is available
//! on paths 3 and 4.

mod dispatch;
mod normal_map;
mod rows;

pub use normal_map::convert_for_normal_mapping;

use crate::format::registry::{get_bytes_per_pixel, is_compressed, is_normalized, is_signed};
use crate::format::PixelFormatGpu;
use crate::pack::{pack_colour, supports_pack, unpack_colour};
use crate::texture_box::TextureBox;
use core::slice;
use dispatch::find_row_conversion;
use tracing::{debug, trace};

/// Multiplier and addend applied to unpacked values before packing them as `dst_format`.
///
/// Unsigned normalized to signed normalized maps `[0, 1]` onto `[-1, 1]` and back; every other
/// pair is left as is.
pub(crate) const fn normalized_range_remap(
    src_format: PixelFormatGpu,
    dst_format: PixelFormatGpu,
) -> (f32, f32) {
    if !is_normalized(src_format)
        || !is_normalized(dst_format)
        || is_signed(src_format) == is_signed(dst_format)
    {
        return (1.0, 0.0);
    }

    if is_signed(src_format) {
        (0.5, 0.5)
    } else {
        (2.0, -1.0)
    }
}

/// Converts one row of `width` pixels through the float representation.
///
/// Both formats must support packing (see [`supports_pack`]).
pub(crate) fn convert_row_fallback(
    src: &[u8],
    src_format: PixelFormatGpu,
    dst: &mut [u8],
    dst_format: PixelFormatGpu,
    width: usize,
) {
    let src_bytes_per_pixel = get_bytes_per_pixel(src_format) as usize;
    let dst_bytes_per_pixel = get_bytes_per_pixel(dst_format) as usize;
    let (range_mul, range_add) = normalized_range_remap(src_format, dst_format);

    let src_pixels = src[..width * src_bytes_per_pixel].chunks_exact(src_bytes_per_pixel);
    let dst_pixels = dst[..width * dst_bytes_per_pixel].chunks_exact_mut(dst_bytes_per_pixel);
    for (src_pixel, dst_pixel) in src_pixels.zip(dst_pixels) {
        let mut rgba = [0.0; 4];
        if unpack_colour(&mut rgba, src_format, src_pixel) {
            for value in &mut rgba {
                *value = *value * range_mul + range_add;
            }
            let _ = pack_colour(&rgba, dst_format, dst_pixel);
        }
    }
}

/// Whether [`bulk_pixel_conversion`] can convert `src_format` into `dst_format`.
///
/// Identical formats can always be copied. Otherwise neither format may be compressed, and
/// there must be a fast path for the pair or a CPU encoding for both formats.
pub fn is_conversion_supported(src_format: PixelFormatGpu, dst_format: PixelFormatGpu) -> bool {
    if src_format == dst_format {
        return true;
    }

    !is_compressed(src_format)
        && !is_compressed(dst_format)
        && (find_row_conversion(src_format, dst_format).is_some()
            || (supports_pack(src_format) && supports_pack(dst_format)))
}

/// Converts the pixels of `src` from `src_format` into `dst` as `dst_format`.
///
/// See the [module documentation](self) for the paths taken. Conversions involving a compressed
/// format, or a format without a CPU encoding and no fast path, leave `dst` untouched.
///
/// # Safety
///
/// - `src` and `dst` must have the same size, and their pixel sizes must match the bytes per
///   pixel of their formats.
/// - `src.data` must be valid for reads of [`TextureBox::required_len`] bytes of `src`.
/// - `dst.data` must be valid for writes of [`TextureBox::required_len`] bytes of `dst`.
/// - The pixels of the two boxes must not overlap in memory.
pub unsafe fn bulk_pixel_conversion(
    src: &TextureBox,
    src_format: PixelFormatGpu,
    dst: &mut TextureBox,
    dst_format: PixelFormatGpu,
    vertical_flip: bool,
) {
    if src_format == dst_format && !vertical_flip {
        trace!(format = %src_format, "Same format, copying");
        dst.copy_from(src);
        return;
    }

    if is_compressed(src_format) || is_compressed(dst_format) {
        debug!(src = %src_format, dst = %dst_format, "Compressed formats are not converted");
        return;
    }

    debug_assert!(src.equal_size(dst));
    debug_assert_eq!(get_bytes_per_pixel(src_format), src.bytes_per_pixel());
    debug_assert_eq!(get_bytes_per_pixel(dst_format), dst.bytes_per_pixel());

    let width = src.width as usize;
    let height = src.height as usize;
    let depth_or_slices = src.get_depth_or_slices() as usize;
    if width == 0 || height == 0 || depth_or_slices == 0 {
        return;
    }

    let convert_row = find_row_conversion(src_format, dst_format);
    if convert_row.is_none() && (!supports_pack(src_format) || !supports_pack(dst_format)) {
        debug!(src = %src_format, dst = %dst_format, "No CPU encoding for format, skipping");
        return;
    }

    let src_row_len = width * get_bytes_per_pixel(src_format) as usize;
    let dst_row_len = width * get_bytes_per_pixel(dst_format) as usize;
    let src_origin = src.at(src.x, src.y, src.get_z_or_slice()) as *const u8;
    let dst_origin = dst.at(dst.x, dst.y, dst.get_z_or_slice());

    trace!(
        src = %src_format,
        dst = %dst_format,
        fast_path = convert_row.is_some(),
        vertical_flip,
        "Converting pixels"
    );

    for z in 0..depth_or_slices {
        for y in 0..height {
            let dst_y = if vertical_flip { height - 1 - y } else { y };
            let src_row = slice::from_raw_parts(
                src_origin.add(z * src.bytes_per_image as usize + y * src.bytes_per_row as usize),
                src_row_len,
            );
            let dst_row = slice::from_raw_parts_mut(
                dst_origin
                    .add(z * dst.bytes_per_image as usize + dst_y * dst.bytes_per_row as usize),
                dst_row_len,
            );

            match convert_row {
                Some(convert_row) => convert_row(src_row, dst_row, width),
                None => convert_row_fallback(src_row, src_format, dst_row, dst_format, width),
            }
        }
    }
}
