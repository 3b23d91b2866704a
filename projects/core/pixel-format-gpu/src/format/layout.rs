use derive_enum_all_values::AllValues;

/// Byte arrangement class of a pixel format.
///
/// Formats sharing a layout have the same component order, count and width, which makes them
/// candidates for the byte level row conversions used by the bulk conversion fast path.
/// [`PixelFormatLayout::Other`] covers everything else (packed, compressed, exotic).
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AllValues)]
pub enum PixelFormatLayout {
    #[default]
    Other = 0,

    Rgba32,
    Rgb32,
    Rg32,
    R32,

    Rgba16,
    Rgb16,
    Rg16,
    R16,

    Rgba8,
    Bgra8,
    Bgrx8,
    Rgb8,
    Bgr8,
    Rg8,
    R8,
}

impl PixelFormatLayout {
    /// Size of a single pixel in bytes, or `None` for [`PixelFormatLayout::Other`].
    pub const fn bytes_per_pixel(self) -> Option<u32> {
        Some(match self {
            PixelFormatLayout::Other => return None,
            PixelFormatLayout::Rgba32 => 16,
            PixelFormatLayout::Rgb32 => 12,
            PixelFormatLayout::Rg32 => 8,
            PixelFormatLayout::R32 => 4,
            PixelFormatLayout::Rgba16 => 8,
            PixelFormatLayout::Rgb16 => 6,
            PixelFormatLayout::Rg16 => 4,
            PixelFormatLayout::R16 => 2,
            PixelFormatLayout::Rgba8 | PixelFormatLayout::Bgra8 | PixelFormatLayout::Bgrx8 => 4,
            PixelFormatLayout::Rgb8 | PixelFormatLayout::Bgr8 => 3,
            PixelFormatLayout::Rg8 => 2,
            PixelFormatLayout::R8 => 1,
        })
    }
}
