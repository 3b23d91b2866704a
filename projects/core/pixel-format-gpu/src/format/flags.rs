use bitflags::bitflags;

bitflags! {
    /// Semantic flags of a pixel format.
    ///
    /// The component type of a format is one of [`FLOAT`], [`HALF`], [`FLOAT_RARE`],
    /// [`INTEGER`] or [`NORMALIZED`]; the remaining flags refine it.
    ///
    /// [`FLOAT`]: PixelFormatFlags::FLOAT
    /// [`HALF`]: PixelFormatFlags::HALF
    /// [`FLOAT_RARE`]: PixelFormatFlags::FLOAT_RARE
    /// [`INTEGER`]: PixelFormatFlags::INTEGER
    /// [`NORMALIZED`]: PixelFormatFlags::NORMALIZED
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct PixelFormatFlags: u32 {
        /// 32-bit IEEE floats.
        const FLOAT = 1 << 0;
        /// 16-bit IEEE floats.
        const HALF = 1 << 1;
        /// Exotic float encodings (shared exponent, 11/10-bit floats, BC6H).
        const FLOAT_RARE = 1 << 2;
        /// Plain (not normalized) integer components.
        const INTEGER = 1 << 3;
        /// Values map to [0, 1], or [-1, 1] when [`PixelFormatFlags::SIGNED`] is set.
        const NORMALIZED = 1 << 4;
        /// Signed components.
        const SIGNED = 1 << 5;
        /// Depth format.
        const DEPTH = 1 << 6;
        /// Stencil format.
        const STENCIL = 1 << 7;
        /// Colour components are sRGB encoded.
        const SRGB = 1 << 8;
        /// Block compressed format.
        const COMPRESSED = 1 << 9;
        /// Palettised format.
        const PALETTE = 1 << 10;

        /// Flags shared by nearly every block compressed format.
        const COMPRESSED_COMMON = Self::COMPRESSED.bits()
            | Self::INTEGER.bits()
            | Self::NORMALIZED.bits();
    }
}
