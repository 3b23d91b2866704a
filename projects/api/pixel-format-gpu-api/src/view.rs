//! Texture boxes bound to byte slices.
//!
//! A view ties a [`TextureBox`] to the buffer it addresses and checks, once at construction,
//! that the buffer covers every pixel of the box. Operations taking views can then hand the box
//! to the raw pointer layer without further bounds checks.

use crate::error::PixelFormatGpuError;
use core::marker::PhantomData;
use core::slice;
use pixel_format_gpu::{PixelFormatGpu, TextureBox};

fn validate(texture_box: &TextureBox, len: usize) -> Result<(), PixelFormatGpuError> {
    let Some(needed) = texture_box.required_len() else {
        return Err(PixelFormatGpuError::RegionOverflow {
            x: texture_box.x,
            y: texture_box.y,
            z: texture_box.get_z_or_slice(),
            width: texture_box.width,
            height: texture_box.height,
            depth_or_slices: texture_box.get_depth_or_slices(),
        });
    };
    if len < needed {
        return Err(PixelFormatGpuError::BufferTooSmall {
            needed,
            actual: len,
        });
    }
    Ok(())
}

/// A read-only [`TextureBox`] over a byte slice.
#[derive(Debug, Clone, Copy)]
pub struct TextureView<'a> {
    texture_box: TextureBox,
    len: usize,
    _data: PhantomData<&'a [u8]>,
}

impl<'a> TextureView<'a> {
    /// Binds `texture_box` to `data`. The box's own `data` pointer is replaced.
    ///
    /// # Errors
    ///
    /// - [`PixelFormatGpuError::BufferTooSmall`] if `data` is shorter than
    ///   [`TextureBox::required_len`].
    /// - [`PixelFormatGpuError::RegionOverflow`] if the box reaches past `u32::MAX` on any axis
    ///   or past the address space.
    pub fn new(data: &'a [u8], texture_box: TextureBox) -> Result<Self, PixelFormatGpuError> {
        validate(&texture_box, data.len())?;
        Ok(Self {
            // Never written through: only shared access is handed out.
            texture_box: texture_box.with_data(data.as_ptr() as *mut u8),
            len: data.len(),
            _data: PhantomData,
        })
    }

    /// Binds a tightly packed `width` x `height` image of `format` to `data`.
    ///
    /// # Errors
    ///
    /// - [`PixelFormatGpuError::BufferTooSmall`] if `data` cannot hold the image.
    ///
    /// # Examples
    ///
    /// ```
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # use pixel_format_gpu_api::TextureView;
    /// # use pixel_format_gpu::PixelFormatGpu;
    /// let pixels = vec![0u8; 4 * 4 * 4];
    /// let view = TextureView::for_format(&pixels, 4, 4, 1, 1, PixelFormatGpu::Rgba8Unorm)?;
    /// assert_eq!(view.texture_box().bytes_per_row, 16);
    /// # Ok(())
    /// # }
    /// ```
    pub fn for_format(
        data: &'a [u8],
        width: u32,
        height: u32,
        depth: u32,
        num_slices: u32,
        format: PixelFormatGpu,
    ) -> Result<Self, PixelFormatGpuError> {
        Self::new(
            data,
            TextureBox::for_format(width, height, depth, num_slices, format),
        )
    }

    /// The validated box, pointing at the bound buffer.
    #[inline]
    pub fn texture_box(&self) -> &TextureBox {
        &self.texture_box
    }

    /// The bound buffer.
    #[inline]
    pub fn data(&self) -> &'a [u8] {
        // SAFETY: the pointer and length come from the slice borrowed for 'a.
        unsafe { slice::from_raw_parts(self.texture_box.data, self.len) }
    }
}

/// A writable [`TextureBox`] over a mutable byte slice.
#[derive(Debug)]
pub struct TextureViewMut<'a> {
    texture_box: TextureBox,
    len: usize,
    _data: PhantomData<&'a mut [u8]>,
}

impl<'a> TextureViewMut<'a> {
    /// Binds `texture_box` to `data`. The box's own `data` pointer is replaced.
    ///
    /// # Errors
    ///
    /// - [`PixelFormatGpuError::BufferTooSmall`] if `data` is shorter than
    ///   [`TextureBox::required_len`].
    /// - [`PixelFormatGpuError::RegionOverflow`] if the box reaches past `u32::MAX` on any axis
    ///   or past the address space.
    pub fn new(data: &'a mut [u8], texture_box: TextureBox) -> Result<Self, PixelFormatGpuError> {
        validate(&texture_box, data.len())?;
        Ok(Self {
            texture_box: texture_box.with_data(data.as_mut_ptr()),
            len: data.len(),
            _data: PhantomData,
        })
    }

    /// Binds a tightly packed `width` x `height` image of `format` to `data`.
    ///
    /// # Errors
    ///
    /// - [`PixelFormatGpuError::BufferTooSmall`] if `data` cannot hold the image.
    pub fn for_format(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        depth: u32,
        num_slices: u32,
        format: PixelFormatGpu,
    ) -> Result<Self, PixelFormatGpuError> {
        Self::new(
            data,
            TextureBox::for_format(width, height, depth, num_slices, format),
        )
    }

    /// The validated box, pointing at the bound buffer.
    #[inline]
    pub fn texture_box(&self) -> &TextureBox {
        &self.texture_box
    }

    /// The box for writing. Only reachable from within the crate, so the bounds stay validated.
    #[inline]
    pub(crate) fn texture_box_mut(&mut self) -> &mut TextureBox {
        &mut self.texture_box
    }

    /// A read-only view of the same pixels.
    #[inline]
    pub fn as_view(&self) -> TextureView<'_> {
        TextureView {
            texture_box: self.texture_box,
            len: self.len,
            _data: PhantomData,
        }
    }

    /// The bound buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        // SAFETY: the pointer and length come from the slice mutably borrowed for 'a.
        unsafe { slice::from_raw_parts(self.texture_box.data, self.len) }
    }

    /// The bound buffer, mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        // SAFETY: as above; `&mut self` guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.texture_box.data, self.len) }
    }
}
