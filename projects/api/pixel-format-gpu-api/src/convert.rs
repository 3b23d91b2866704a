//! Format conversion and same-format copies between texture views.

use crate::error::PixelFormatGpuError;
use crate::options::{ConversionOptions, CopyPolicy};
use crate::view::{TextureView, TextureViewMut};
use pixel_format_gpu::{
    BoxPixelSize, PixelFormatGpu, TextureBox, get_bytes_per_pixel, is_compressed, supports_pack,
};

#[inline]
fn extent(texture_box: &TextureBox) -> (u32, u32, u32) {
    (
        texture_box.width,
        texture_box.height,
        texture_box.get_depth_or_slices(),
    )
}

/// The pixel size a box holding `format` pixels has.
#[inline]
fn pixel_size_of(format: PixelFormatGpu) -> BoxPixelSize {
    if is_compressed(format) {
        BoxPixelSize::Compressed(format)
    } else {
        BoxPixelSize::Uncompressed(get_bytes_per_pixel(format))
    }
}

/// Checks that `texture_box` holds pixels of `format`.
pub(crate) fn check_pixel_size(
    texture_box: &TextureBox,
    format: PixelFormatGpu,
) -> Result<(), PixelFormatGpuError> {
    let expected = pixel_size_of(format);
    if texture_box.pixel_size != expected {
        return Err(PixelFormatGpuError::PixelSizeMismatch {
            format,
            expected,
            actual: texture_box.pixel_size,
        });
    }
    Ok(())
}

fn check_equal_size(src: &TextureBox, dst: &TextureBox) -> Result<(), PixelFormatGpuError> {
    if !src.equal_size(dst) {
        return Err(PixelFormatGpuError::SizeMismatch {
            src: extent(src),
            dst: extent(dst),
        });
    }
    Ok(())
}

/// Copies `src` into `dst`, which must hold pixels of the same size.
///
/// With [`CopyPolicy::BestEffort`], regions of different sizes copy their overlapping top-left
/// part and boxes of different pixel sizes copy nothing. [`CopyPolicy::Strict`] rejects both.
/// The flip option is not applied; use [`bulk_pixel_conversion`] with the same format on both
/// sides to flip.
///
/// # Errors
///
/// - [`PixelFormatGpuError::Copy`] if the policy is strict and the boxes differ in size, pixel
///   size, or a row stride is too small for its row.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use pixel_format_gpu_api::{copy_texture, ConversionOptions, TextureView, TextureViewMut};
/// # use pixel_format_gpu::PixelFormatGpu;
/// let src_pixels: Vec<u8> = (0..64).collect();
/// let mut dst_pixels = vec![0u8; 64];
///
/// let src = TextureView::for_format(&src_pixels, 4, 4, 1, 1, PixelFormatGpu::Rgba8Unorm)?;
/// let mut dst = TextureViewMut::for_format(&mut dst_pixels, 4, 4, 1, 1, PixelFormatGpu::Rgba8Unorm)?;
/// copy_texture(&src, &mut dst, &ConversionOptions::default())?;
/// assert_eq!(dst_pixels, src_pixels);
/// # Ok(())
/// # }
/// ```
pub fn copy_texture(
    src: &TextureView<'_>,
    dst: &mut TextureViewMut<'_>,
    options: &ConversionOptions,
) -> Result<(), PixelFormatGpuError> {
    let src_box = src.texture_box();
    let dst_box = dst.texture_box_mut();

    // Safety: both views were validated against `required_len`, and a shared and a mutable
    // borrow cannot alias.
    unsafe {
        match options.copy_policy {
            CopyPolicy::BestEffort => dst_box.copy_from(src_box),
            CopyPolicy::Strict => dst_box.try_copy_from(src_box)?,
        }
    }
    Ok(())
}

/// Converts every pixel of `src` from `src_format` into `dst` as `dst_format`.
///
/// Identical formats are copied according to [`ConversionOptions::copy_policy`] when no flip is
/// requested; other pairs go through a fast byte-shuffling path or the float path.
///
/// # Errors
///
/// - [`PixelFormatGpuError::SizeMismatch`] if the boxes differ in size. Same-format copies with
///   [`CopyPolicy::BestEffort`] copy the overlapping part instead.
/// - [`PixelFormatGpuError::PixelSizeMismatch`] if a box does not hold pixels of its format.
/// - [`PixelFormatGpuError::CompressedFormat`] if the formats differ and one is compressed.
/// - [`PixelFormatGpuError::UnsupportedFormat`] if a format has no CPU encoding and no fast path
///   exists for the pair.
/// - [`PixelFormatGpuError::Copy`] for same-format copies rejected by [`CopyPolicy::Strict`].
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # use pixel_format_gpu_api::{bulk_pixel_conversion, ConversionOptions, TextureView, TextureViewMut};
/// # use pixel_format_gpu::PixelFormatGpu;
/// let rgba = vec![0x10, 0x20, 0x30, 0xFF];
/// let mut bgra = vec![0u8; 4];
///
/// let src = TextureView::for_format(&rgba, 1, 1, 1, 1, PixelFormatGpu::Rgba8Unorm)?;
/// let mut dst = TextureViewMut::for_format(&mut bgra, 1, 1, 1, 1, PixelFormatGpu::Bgra8Unorm)?;
/// bulk_pixel_conversion(
///     &src,
///     PixelFormatGpu::Rgba8Unorm,
///     &mut dst,
///     PixelFormatGpu::Bgra8Unorm,
///     &ConversionOptions::default(),
/// )?;
/// assert_eq!(bgra, [0x30, 0x20, 0x10, 0xFF]);
/// # Ok(())
/// # }
/// ```
pub fn bulk_pixel_conversion(
    src: &TextureView<'_>,
    src_format: PixelFormatGpu,
    dst: &mut TextureViewMut<'_>,
    dst_format: PixelFormatGpu,
    options: &ConversionOptions,
) -> Result<(), PixelFormatGpuError> {
    check_pixel_size(src.texture_box(), src_format)?;
    check_pixel_size(dst.texture_box(), dst_format)?;

    if src_format == dst_format && !options.vertical_flip {
        return copy_texture(src, dst, options);
    }

    check_equal_size(src.texture_box(), dst.texture_box())?;
    if src_format != dst_format {
        for format in [src_format, dst_format] {
            if is_compressed(format) {
                return Err(PixelFormatGpuError::CompressedFormat(format));
            }
        }
        if !pixel_format_gpu::is_conversion_supported(src_format, dst_format) {
            let format = if supports_pack(src_format) {
                dst_format
            } else {
                src_format
            };
            return Err(PixelFormatGpuError::UnsupportedFormat(format));
        }
    } else if is_compressed(src_format) {
        // Flipping block rows would scramble the rows inside each block.
        return Err(PixelFormatGpuError::CompressedFormat(src_format));
    }

    // Safety: sizes and pixel sizes match, both views were validated against `required_len`,
    // and a shared and a mutable borrow cannot alias.
    unsafe {
        pixel_format_gpu::bulk_pixel_conversion(
            src.texture_box(),
            src_format,
            dst.texture_box_mut(),
            dst_format,
            options.vertical_flip,
        );
    }
    Ok(())
}

/// Re-encodes a normal map as two channel `RG8` data, keeping X and Y.
///
/// Sources other than plain 8-bit formats are written as signed 8-bit X and Y, whichever `RG8`
/// destination is used.
///
/// # Errors
///
/// - [`PixelFormatGpuError::InvalidNormalMapTarget`] if `dst_format` is not
///   [`PixelFormatGpu::Rg8Unorm`] or [`PixelFormatGpu::Rg8Snorm`].
/// - [`PixelFormatGpuError::SizeMismatch`] if the boxes differ in size.
/// - [`PixelFormatGpuError::PixelSizeMismatch`] if a box does not hold pixels of its format.
/// - [`PixelFormatGpuError::CompressedFormat`] if `src_format` is compressed.
/// - [`PixelFormatGpuError::UnsupportedFormat`] if `src_format` has no CPU encoding.
pub fn convert_for_normal_mapping(
    src: &TextureView<'_>,
    src_format: PixelFormatGpu,
    dst: &mut TextureViewMut<'_>,
    dst_format: PixelFormatGpu,
) -> Result<(), PixelFormatGpuError> {
    if !matches!(dst_format, PixelFormatGpu::Rg8Unorm | PixelFormatGpu::Rg8Snorm) {
        return Err(PixelFormatGpuError::InvalidNormalMapTarget(dst_format));
    }
    check_pixel_size(src.texture_box(), src_format)?;
    check_pixel_size(dst.texture_box(), dst_format)?;
    check_equal_size(src.texture_box(), dst.texture_box())?;
    if is_compressed(src_format) {
        return Err(PixelFormatGpuError::CompressedFormat(src_format));
    }
    if !supports_pack(src_format) {
        return Err(PixelFormatGpuError::UnsupportedFormat(src_format));
    }

    // Safety: as in `bulk_pixel_conversion`, and the target format was checked above.
    unsafe {
        pixel_format_gpu::convert_for_normal_mapping(
            src.texture_box(),
            src_format,
            dst.texture_box_mut(),
            dst_format,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests;
