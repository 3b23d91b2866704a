//! Single pixel access: packing, unpacking and reading or writing one pixel of a view.

use crate::convert::check_pixel_size;
use crate::error::PixelFormatGpuError;
use crate::view::{TextureView, TextureViewMut};
use pixel_format_gpu::{ColourValue, PixelFormatGpu, TextureBox, get_bytes_per_pixel, is_compressed, supports_pack};

fn check_encodable(format: PixelFormatGpu) -> Result<(), PixelFormatGpuError> {
    if is_compressed(format) {
        return Err(PixelFormatGpuError::CompressedFormat(format));
    }
    if !supports_pack(format) {
        return Err(PixelFormatGpuError::UnsupportedFormat(format));
    }
    Ok(())
}

fn check_len(len: usize, format: PixelFormatGpu) -> Result<(), PixelFormatGpuError> {
    let needed = get_bytes_per_pixel(format) as usize;
    if len < needed {
        return Err(PixelFormatGpuError::BufferTooSmall {
            needed,
            actual: len,
        });
    }
    Ok(())
}

fn check_pixel(
    texture_box: &TextureBox,
    x: u32,
    y: u32,
    z: u32,
    format: PixelFormatGpu,
) -> Result<(), PixelFormatGpuError> {
    check_encodable(format)?;
    check_pixel_size(texture_box, format)?;
    if x >= texture_box.width || y >= texture_box.height || z >= texture_box.get_depth_or_slices()
    {
        return Err(PixelFormatGpuError::OutOfBounds { x, y, z });
    }
    Ok(())
}

/// Packs `colour` into the first pixel of `dst` as `format`.
///
/// # Errors
///
/// - [`PixelFormatGpuError::CompressedFormat`] or [`PixelFormatGpuError::UnsupportedFormat`] if
///   `format` has no single pixel encoding.
/// - [`PixelFormatGpuError::BufferTooSmall`] if `dst` is shorter than one pixel.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use pixel_format_gpu_api::pack_colour;
/// # use pixel_format_gpu::{ColourValue, PixelFormatGpu};
/// let mut pixel = [0u8; 2];
/// pack_colour(ColourValue::new(1.0, 0.0, 1.0, 1.0), PixelFormatGpu::B5g6r5Unorm, &mut pixel)?;
/// assert_eq!(pixel, [0x1F, 0xF8]);
/// # Ok(())
/// # }
/// ```
pub fn pack_colour(
    colour: ColourValue,
    format: PixelFormatGpu,
    dst: &mut [u8],
) -> Result<(), PixelFormatGpuError> {
    check_encodable(format)?;
    check_len(dst.len(), format)?;
    if !pixel_format_gpu::pack_colour_value(colour, format, dst) {
        return Err(PixelFormatGpuError::UnsupportedFormat(format));
    }
    Ok(())
}

/// Unpacks the first pixel of `src`, stored as `format`.
///
/// Components the format does not store read as 0, and alpha as 1.
///
/// # Errors
///
/// - [`PixelFormatGpuError::CompressedFormat`] or [`PixelFormatGpuError::UnsupportedFormat`] if
///   `format` has no single pixel encoding.
/// - [`PixelFormatGpuError::BufferTooSmall`] if `src` is shorter than one pixel.
pub fn unpack_colour(format: PixelFormatGpu, src: &[u8]) -> Result<ColourValue, PixelFormatGpuError> {
    check_encodable(format)?;
    check_len(src.len(), format)?;
    pixel_format_gpu::unpack_colour_value(format, src)
        .ok_or(PixelFormatGpuError::UnsupportedFormat(format))
}

/// Reads pixel (`x`, `y`, `z`) of `view`, relative to its origin, as `format`.
///
/// # Errors
///
/// - [`PixelFormatGpuError::CompressedFormat`] or [`PixelFormatGpuError::UnsupportedFormat`] if
///   `format` has no single pixel encoding.
/// - [`PixelFormatGpuError::PixelSizeMismatch`] if the view does not hold `format` pixels.
/// - [`PixelFormatGpuError::OutOfBounds`] if the pixel lies outside of the view.
pub fn get_colour_at(
    view: &TextureView<'_>,
    x: u32,
    y: u32,
    z: u32,
    format: PixelFormatGpu,
) -> Result<ColourValue, PixelFormatGpuError> {
    check_pixel(view.texture_box(), x, y, z, format)?;

    // Safety: the pixel lies within the box, which was validated against `required_len`.
    Ok(unsafe { view.texture_box().get_colour_at(x, y, z, format) })
}

/// Writes `colour` as `format` to pixel (`x`, `y`, `z`) of `view`, relative to its origin.
///
/// # Errors
///
/// Same as [`get_colour_at`].
pub fn set_colour_at(
    view: &mut TextureViewMut<'_>,
    colour: ColourValue,
    x: u32,
    y: u32,
    z: u32,
    format: PixelFormatGpu,
) -> Result<(), PixelFormatGpuError> {
    check_pixel(view.texture_box(), x, y, z, format)?;

    // Safety: the pixel lies within the box, which was validated against `required_len`.
    if !unsafe { view.texture_box_mut().set_colour_at(colour, x, y, z, format) } {
        return Err(PixelFormatGpuError::UnsupportedFormat(format));
    }
    Ok(())
}
