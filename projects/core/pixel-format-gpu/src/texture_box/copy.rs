//! Same-format copies between [`TextureBox`]es.
//!
//! Three paths, tried in order:
//!
//! 1. Raw: both boxes are whole, tightly packed images with identical strides. One memcpy.
//! 2. Rows: one memcpy per pixel row.
//! 3. Block rows: one memcpy per row of compression blocks.
//!
//! Only the pixels of the box are copied; row padding up to `bytes_per_row` is left alone.

use super::{BoxPixelSize, TextureBox};
use core::cmp::min;
use core::ptr::copy_nonoverlapping;
use thiserror::Error;
use tracing::{trace, warn};

/// Reasons a strict copy between two boxes is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    /// The boxes differ in width, height or depth/slice count.
    #[error("Region size mismatch: destination {dst:?}, source {src:?} (width, height, depth or slices)")]
    SizeMismatch {
        /// Destination width, height and depth or slice count.
        dst: (u32, u32, u32),
        /// Source width, height and depth or slice count.
        src: (u32, u32, u32),
    },

    /// A box's row stride is smaller than one row of its pixels.
    #[error("Row stride too small: {bytes_per_row} bytes per row, needed {needed}")]
    StrideMismatch {
        /// The row stride of the offending box.
        bytes_per_row: u32,
        /// Bytes occupied by one row of pixels (or blocks).
        needed: usize,
    },

    /// The boxes hold pixels of different sizes or different compressed formats.
    #[error("Pixel size mismatch: destination {dst:?}, source {src:?}")]
    PixelSizeMismatch {
        /// Pixel size of the destination.
        dst: BoxPixelSize,
        /// Pixel size of the source.
        src: BoxPixelSize,
    },
}

#[inline]
const fn extent(texture_box: &TextureBox) -> (u32, u32, u32) {
    (
        texture_box.width,
        texture_box.height,
        texture_box.get_depth_or_slices(),
    )
}

impl TextureBox {
    /// Copies the pixels of `src` into this box.
    ///
    /// Copying is best effort: when the boxes differ in size, only the overlapping top-left
    /// portion (smallest width, height and depth/slice count) is copied and a warning is logged.
    /// Boxes of different pixel sizes are not copied at all. Use [`TextureBox::try_copy_from`]
    /// to reject mismatched boxes instead.
    ///
    /// # Safety
    ///
    /// - `src.data` must be valid for reads of [`TextureBox::required_len`] bytes of `src`.
    /// - `self.data` must be valid for writes of [`TextureBox::required_len`] bytes of `self`.
    /// - The pixels of the two boxes must not overlap in memory.
    pub unsafe fn copy_from(&mut self, src: &TextureBox) {
        if self.pixel_size != src.pixel_size {
            warn!(
                dst = ?self.pixel_size,
                src = ?src.pixel_size,
                "Pixel size mismatch, nothing copied"
            );
            return;
        }

        if extent(self) != extent(src) {
            warn!(
                dst = ?extent(self),
                src = ?extent(src),
                "Region sizes differ, copying the overlapping part only"
            );
        }

        let depth_or_slices = min(self.get_depth_or_slices(), src.get_depth_or_slices());
        let src_z = src.get_z_or_slice();
        let dst_z = self.get_z_or_slice();

        if self.bytes_per_row == src.bytes_per_row
            && self.bytes_per_image == src.bytes_per_image
            && !self.is_subtexture_region()
            && !src.is_subtexture_region()
        {
            let len = self.bytes_per_image as usize * depth_or_slices as usize;
            trace!(len, "Raw copy");
            copy_nonoverlapping(src.at(0, 0, src_z), self.at(0, 0, dst_z), len);
            return;
        }

        let row_step = match self.pixel_size {
            BoxPixelSize::Uncompressed(_) => 1,
            BoxPixelSize::Compressed(format) => {
                let (_, block_height, _) = Self::block_layout(format);
                if block_height == 0 {
                    // No block addressing, every image is a single block.
                    let len = min(self.bytes_per_image, src.bytes_per_image) as usize;
                    trace!(len, depth_or_slices, "Whole image copy");
                    for z in 0..depth_or_slices {
                        copy_nonoverlapping(src.at(0, 0, src_z + z), self.at(0, 0, dst_z + z), len);
                    }
                    return;
                }
                block_height
            }
        };

        let height = min(self.height, src.height);
        let row_len = min(self.row_payload(), src.row_payload());
        trace!(row_len, height, depth_or_slices, row_step, "Row copy");
        for z in 0..depth_or_slices {
            for y in (0..height).step_by(row_step as usize) {
                copy_nonoverlapping(
                    src.at(src.x, src.y + y, src_z + z),
                    self.at(self.x, self.y + y, dst_z + z),
                    row_len,
                );
            }
        }
    }

    /// Copies the pixels of `src` into this box, rejecting boxes that differ in size, pixel size,
    /// or whose row stride cannot hold a row of pixels.
    ///
    /// # Safety
    ///
    /// Same as [`TextureBox::copy_from`].
    pub unsafe fn try_copy_from(&mut self, src: &TextureBox) -> Result<(), CopyError> {
        if self.pixel_size != src.pixel_size {
            return Err(CopyError::PixelSizeMismatch {
                dst: self.pixel_size,
                src: src.pixel_size,
            });
        }

        if extent(self) != extent(src) {
            return Err(CopyError::SizeMismatch {
                dst: extent(self),
                src: extent(src),
            });
        }

        for texture_box in [&*self, src] {
            let needed = texture_box.row_payload();
            if (texture_box.bytes_per_row as usize) < needed {
                return Err(CopyError::StrideMismatch {
                    bytes_per_row: texture_box.bytes_per_row,
                    needed,
                });
            }
        }

        self.copy_from(src);
        Ok(())
    }

    /// Copies a `width` x `height` image with `bytes_per_row` stride from `src` into the origin
    /// of this box. The image is assumed to hold pixels of this box's pixel size.
    ///
    /// # Safety
    ///
    /// - `src` must be valid for reads of the whole source image.
    /// - Same requirements on `self` as [`TextureBox::copy_from`].
    pub unsafe fn copy_from_raw(
        &mut self,
        src: *const u8,
        width: u32,
        height: u32,
        bytes_per_row: u32,
    ) {
        let rows = match self.pixel_size {
            BoxPixelSize::Uncompressed(_) => height,
            BoxPixelSize::Compressed(format) => match Self::block_layout(format) {
                (_, 0, _) => 1,
                (_, block_height, _) => height.div_ceil(block_height),
            },
        };

        let source = TextureBox {
            width,
            height,
            depth: 1,
            num_slices: 1,
            pixel_size: self.pixel_size,
            bytes_per_row,
            bytes_per_image: bytes_per_row.wrapping_mul(rows),
            data: src as *mut u8,
            ..TextureBox::default()
        };
        self.copy_from(&source);
    }
}
