//! # Texture Box
//!
//! A [`TextureBox`] is a non-owning view of a rectangular (or volumetric) window into a pixel
//! buffer. It translates pixel coordinates into byte addresses, honouring both linear and
//! block-compressed addressing, and copies pixels between regions of the same format.
//!
//! Depth and array slices share one axis: a box has either a 3D `depth` or `num_slices`, and
//! [`TextureBox::get_depth_or_slices`] yields whichever is in use.
//!
//! Strides (`bytes_per_row`, `bytes_per_image`) are explicit so that a box can describe a window
//! of a larger, possibly padded, allocation.

mod copy;

pub use copy::CopyError;

use crate::colour::ColourValue;
use crate::format::registry::{
    get_bytes_per_pixel, get_compressed_block_height, get_compressed_block_size,
    get_compressed_block_width, is_compressed,
};
use crate::format::PixelFormatGpu;
use crate::pack::{pack_colour_value, unpack_colour_value};
use crate::size::get_size_bytes;
use core::ptr::null_mut;
use core::slice;
use likely_stable::unlikely;

/// Size of a single pixel of a [`TextureBox`].
///
/// Compressed formats have no meaningful per-pixel size, so the box remembers the format and
/// derives block dimensions from it instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoxPixelSize {
    /// Bytes per pixel of an uncompressed format.
    Uncompressed(u32),
    /// The block-compressed format stored in the box.
    Compressed(PixelFormatGpu),
}

impl Default for BoxPixelSize {
    fn default() -> Self {
        Self::Uncompressed(0)
    }
}

/// A window into a pixel buffer that the box does not own.
///
/// The box never frees or moves `data`; keeping the buffer alive and large enough
/// (see [`TextureBox::required_len`]) is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureBox {
    /// Horizontal offset, in pixels.
    pub x: u32,
    /// Vertical offset, in pixels.
    pub y: u32,
    /// Depth offset, in pixels. Mutually exclusive with `slice_start`.
    pub z: u32,
    /// First array slice. Mutually exclusive with `z`.
    pub slice_start: u32,
    /// Width, in pixels.
    pub width: u32,
    /// Height, in pixels.
    pub height: u32,
    /// Depth, in pixels. Mutually exclusive with `num_slices`.
    pub depth: u32,
    /// Number of array slices. Mutually exclusive with `depth`.
    pub num_slices: u32,
    /// Size of a pixel, or the compressed format.
    pub pixel_size: BoxPixelSize,
    /// Distance in bytes between two rows (two rows of blocks for compressed formats).
    pub bytes_per_row: u32,
    /// Distance in bytes between two depth slices or array slices.
    pub bytes_per_image: u32,
    /// Start of the backing buffer.
    pub data: *mut u8,
}

impl Default for TextureBox {
    fn default() -> Self {
        Self::new(0, 0, 0, 0, 0, 0, 0)
    }
}

impl TextureBox {
    /// Creates a box at the origin with no backing buffer.
    pub const fn new(
        width: u32,
        height: u32,
        depth: u32,
        num_slices: u32,
        bytes_per_pixel: u32,
        bytes_per_row: u32,
        bytes_per_image: u32,
    ) -> Self {
        Self {
            x: 0,
            y: 0,
            z: 0,
            slice_start: 0,
            width,
            height,
            depth,
            num_slices,
            pixel_size: BoxPixelSize::Uncompressed(bytes_per_pixel),
            bytes_per_row,
            bytes_per_image,
            data: null_mut(),
        }
    }

    /// Creates a tightly packed box for a single mip level of `format`.
    ///
    /// Rows are not padded and compressed formats get their block strides.
    pub fn for_format(
        width: u32,
        height: u32,
        depth: u32,
        num_slices: u32,
        format: PixelFormatGpu,
    ) -> Self {
        let bytes_per_image = get_size_bytes(width, height, 1, 1, format, 1);
        if is_compressed(format) {
            let block_height = get_compressed_block_height(format, false);
            let block_rows = if block_height == 0 {
                1
            } else {
                height.div_ceil(block_height).max(1)
            };
            let mut result = Self::new(
                width,
                height,
                depth,
                num_slices,
                0,
                bytes_per_image / block_rows,
                bytes_per_image,
            );
            result.set_compressed_pixel_format(format);
            result
        } else {
            let bytes_per_pixel = get_bytes_per_pixel(format);
            Self::new(
                width,
                height,
                depth,
                num_slices,
                bytes_per_pixel,
                width.wrapping_mul(bytes_per_pixel),
                bytes_per_image,
            )
        }
    }

    /// Returns the box pointing at `data`.
    #[inline]
    pub const fn with_data(mut self, data: *mut u8) -> Self {
        self.data = data;
        self
    }

    /// One past the last `x` covered by the box.
    #[inline]
    pub const fn get_max_x(&self) -> u32 {
        self.x + self.width
    }

    /// One past the last `y` covered by the box.
    #[inline]
    pub const fn get_max_y(&self) -> u32 {
        self.y + self.height
    }

    /// One past the last `z` covered by the box.
    #[inline]
    pub const fn get_max_z(&self) -> u32 {
        self.z + self.depth
    }

    /// One past the last array slice covered by the box.
    #[inline]
    pub const fn get_max_slice(&self) -> u32 {
        self.slice_start + self.num_slices
    }

    /// Length of the depth/slice axis in use.
    #[inline]
    pub const fn get_depth_or_slices(&self) -> u32 {
        max(self.depth, self.num_slices)
    }

    /// Offset along the depth/slice axis in use.
    #[inline]
    pub const fn get_z_or_slice(&self) -> u32 {
        max(self.z, self.slice_start)
    }

    /// Size in bytes of every image in the box, wrapping past `u32::MAX`.
    #[inline]
    pub const fn get_size_bytes(&self) -> u32 {
        self.bytes_per_image.wrapping_mul(self.get_depth_or_slices())
    }

    /// Marks the box as holding block-compressed `format`.
    ///
    /// `format` must be compressed.
    pub fn set_compressed_pixel_format(&mut self, format: PixelFormatGpu) {
        debug_assert!(
            is_compressed(format),
            "{format} is not a compressed pixel format"
        );
        self.pixel_size = BoxPixelSize::Compressed(format);
    }

    /// The compressed format of the box, or [`PixelFormatGpu::Unknown`] for uncompressed boxes.
    #[inline]
    pub const fn compressed_pixel_format(&self) -> PixelFormatGpu {
        match self.pixel_size {
            BoxPixelSize::Compressed(format) => format,
            BoxPixelSize::Uncompressed(_) => PixelFormatGpu::Unknown,
        }
    }

    /// Whether the box holds block-compressed data.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        matches!(self.pixel_size, BoxPixelSize::Compressed(_))
    }

    /// Bytes per pixel, `0` for compressed boxes.
    #[inline]
    pub const fn bytes_per_pixel(&self) -> u32 {
        match self.pixel_size {
            BoxPixelSize::Uncompressed(bytes_per_pixel) => bytes_per_pixel,
            BoxPixelSize::Compressed(_) => 0,
        }
    }

    /// Block width, block height and block size in bytes of a compressed box.
    ///
    /// Block dimensions are `0` for formats without block addressing (PVRTC); such formats are
    /// addressed as a single block per image.
    #[inline]
    pub(crate) const fn block_layout(format: PixelFormatGpu) -> (u32, u32, u32) {
        (
            get_compressed_block_width(format, false),
            get_compressed_block_height(format, false),
            get_compressed_block_size(format),
        )
    }

    /// Byte offset of pixel (`x`, `y`, `z`) relative to `data`, ignoring the box origin.
    pub const fn offset_of(&self, x: u32, y: u32, z: u32) -> usize {
        let image = z as usize * self.bytes_per_image as usize;
        match self.pixel_size {
            BoxPixelSize::Uncompressed(bytes_per_pixel) => {
                image
                    + y as usize * self.bytes_per_row as usize
                    + x as usize * bytes_per_pixel as usize
            }
            BoxPixelSize::Compressed(format) => {
                let (block_width, block_height, block_size) = Self::block_layout(format);
                if block_width == 0 || block_height == 0 {
                    return image;
                }
                let x_block = (x / block_width) as usize;
                let y_block = (y / block_height) as usize;
                image + y_block * self.bytes_per_row as usize + x_block * block_size as usize
            }
        }
    }

    /// Address of pixel (`x`, `y`, `z`), ignoring the box origin.
    ///
    /// For compressed boxes the address is that of the block containing the pixel. Computing the
    /// address is always safe; the result is only valid to access while `x`, `y` and `z` lie
    /// within the backing buffer.
    #[inline]
    pub fn at(&self, x: u32, y: u32, z: u32) -> *mut u8 {
        self.data.wrapping_add(self.offset_of(x, y, z))
    }

    /// Address of pixel (`x`, `y`, `z`) relative to the box origin.
    #[inline]
    pub fn at_from_offsetted_origin(&self, x: u32, y: u32, z: u32) -> *mut u8 {
        self.at(x + self.x, y + self.y, z + self.get_z_or_slice())
    }

    /// Bytes of a single row of the box (a row of blocks for compressed boxes), excluding any
    /// padding up to `bytes_per_row`.
    pub const fn row_payload(&self) -> usize {
        match self.pixel_size {
            BoxPixelSize::Uncompressed(bytes_per_pixel) => {
                self.width as usize * bytes_per_pixel as usize
            }
            BoxPixelSize::Compressed(format) => {
                let (block_width, _, block_size) = Self::block_layout(format);
                if block_width == 0 {
                    self.bytes_per_row as usize
                } else {
                    self.width.div_ceil(block_width) as usize * block_size as usize
                }
            }
        }
    }

    /// Minimum length of a buffer at `data` that covers every pixel of the box, origin included.
    ///
    /// Empty boxes need no buffer. Returns [`None`] if the box extends past `u32::MAX` on any axis
    /// or its last byte lies beyond `usize::MAX`; such a box cannot be backed by any buffer.
    pub fn required_len(&self) -> Option<usize> {
        let depth_or_slices = self.get_depth_or_slices();
        if self.width == 0 || self.height == 0 || depth_or_slices == 0 {
            return Some(0);
        }

        let max_x = self.x.checked_add(self.width)? as usize;
        let last_y = (self.y.checked_add(self.height)? - 1) as usize;
        let last_image = (self.get_z_or_slice().checked_add(depth_or_slices)? - 1) as usize;
        let bytes_per_image = self.bytes_per_image as usize;
        let bytes_per_row = self.bytes_per_row as usize;

        let (last_row, row_end) = match self.pixel_size {
            BoxPixelSize::Uncompressed(bytes_per_pixel) => {
                (last_y, max_x.checked_mul(bytes_per_pixel as usize)?)
            }
            BoxPixelSize::Compressed(format) => {
                let (block_width, block_height, block_size) = Self::block_layout(format);
                if block_width == 0 || block_height == 0 {
                    return last_image.checked_add(1)?.checked_mul(bytes_per_image);
                }
                let blocks = max_x.div_ceil(block_width as usize);
                (
                    last_y / block_height as usize,
                    blocks.checked_mul(block_size as usize)?,
                )
            }
        };

        last_image
            .checked_mul(bytes_per_image)?
            .checked_add(last_row.checked_mul(bytes_per_row)?)?
            .checked_add(row_end)
    }

    /// Whether the box is a window of a larger image rather than a whole, tightly packed image.
    ///
    /// Whole images can be copied with a single memcpy; windows are copied row by row.
    pub fn is_subtexture_region(&self) -> bool {
        if self.x != 0 || self.y != 0 {
            return true;
        }

        let bytes_per_row = self.bytes_per_row as usize;
        let bytes_per_image = self.bytes_per_image as usize;
        match self.pixel_size {
            BoxPixelSize::Uncompressed(bytes_per_pixel) => {
                bytes_per_row != bytes_per_pixel as usize * self.width as usize
                    || bytes_per_image != bytes_per_row * self.height as usize
            }
            BoxPixelSize::Compressed(format) => {
                let (block_width, block_height, block_size) = Self::block_layout(format);
                if block_width == 0 || block_height == 0 {
                    return self.bytes_per_image
                        != get_size_bytes(self.width, self.height, 1, 1, format, 1);
                }
                bytes_per_row != block_size as usize * self.width.div_ceil(block_width) as usize
                    || bytes_per_image
                        != bytes_per_row * self.height.div_ceil(block_height) as usize
            }
        }
    }

    /// Whether both boxes have the same width, height, depth and slice count.
    #[inline]
    pub const fn equal_size(&self, other: &TextureBox) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.depth == other.depth
            && self.num_slices == other.num_slices
    }

    /// Whether `other` lies entirely inside `self`.
    pub const fn fully_contains(&self, other: &TextureBox) -> bool {
        other.x >= self.x
            && other.get_max_x() <= self.get_max_x()
            && other.y >= self.y
            && other.get_max_y() <= self.get_max_y()
            && other.z >= self.z
            && other.get_max_z() <= self.get_max_z()
            && other.slice_start >= self.slice_start
            && other.get_max_slice() <= self.get_max_slice()
    }

    /// Whether the boxes share at least one pixel on all four axes.
    pub const fn overlaps(&self, other: &TextureBox) -> bool {
        !(other.x >= self.get_max_x()
            || other.y >= self.get_max_y()
            || other.z >= self.get_max_z()
            || other.slice_start >= self.get_max_slice()
            || other.get_max_x() <= self.x
            || other.get_max_y() <= self.y
            || other.get_max_z() <= self.z
            || other.get_max_slice() <= self.slice_start)
    }

    /// Reads the pixel at (`x`, `y`, `z`), relative to the box origin, as `format`.
    ///
    /// Compressed boxes, and formats without a CPU encoding, read as [`ColourValue::BLACK`].
    ///
    /// # Safety
    ///
    /// - The pixel must lie within the box and the backing buffer must be valid for reads of one
    ///   pixel of `format` at its address.
    pub unsafe fn get_colour_at(&self, x: u32, y: u32, z: u32, format: PixelFormatGpu) -> ColourValue {
        if unlikely(self.is_compressed()) {
            return ColourValue::BLACK;
        }

        let src = slice::from_raw_parts(
            self.at_from_offsetted_origin(x, y, z),
            get_bytes_per_pixel(format) as usize,
        );
        unpack_colour_value(format, src).unwrap_or(ColourValue::BLACK)
    }

    /// Writes `colour` as `format` to the pixel at (`x`, `y`, `z`), relative to the box origin.
    ///
    /// Returns `false` without writing for compressed boxes and formats without a CPU encoding.
    ///
    /// # Safety
    ///
    /// - The pixel must lie within the box and the backing buffer must be valid for writes of one
    ///   pixel of `format` at its address.
    pub unsafe fn set_colour_at(
        &mut self,
        colour: ColourValue,
        x: u32,
        y: u32,
        z: u32,
        format: PixelFormatGpu,
    ) -> bool {
        if unlikely(self.is_compressed()) {
            return false;
        }

        let dst = slice::from_raw_parts_mut(
            self.at_from_offsetted_origin(x, y, z),
            get_bytes_per_pixel(format) as usize,
        );
        pack_colour_value(colour, format, dst)
    }
}

#[inline(always)]
const fn max(a: u32, b: u32) -> u32 {
    if a > b {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests;
