//! sRGB transfer functions.
//!
//! Only colour components go through these curves; alpha is always stored linearly.

/// Encodes a linear value with the sRGB curve.
#[inline]
pub fn to_srgb(x: f32) -> f32 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes an sRGB encoded value to linear.
#[inline]
pub fn from_srgb(x: f32) -> f32 {
    if x <= 0.040449907 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}
