//! The canonical four component float colour.

/// A colour (or arbitrary 4 component value) in the canonical float representation used by
/// pack and unpack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourValue {
    /// Red, or the first component.
    pub r: f32,
    /// Green, or the second component.
    pub g: f32,
    /// Blue, or the third component.
    pub b: f32,
    /// Alpha, or the fourth component.
    pub a: f32,
}

impl ColourValue {
    /// Opaque black, also what unreadable pixels report.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new colour.
    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Components in RGBA order.
    #[inline(always)]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for ColourValue {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for ColourValue {
    #[inline(always)]
    fn from(rgba: [f32; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}

impl From<ColourValue> for [f32; 4] {
    #[inline(always)]
    fn from(colour: ColourValue) -> Self {
        colour.to_array()
    }
}
