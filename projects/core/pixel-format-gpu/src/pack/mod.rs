//! # Pixel Packing
//!
//! Conversion of a single pixel between the canonical `[R, G, B, A]` float representation and a
//! format's byte encoding.
//!
//! Plain formats (one integer or float per component) share a generic encoder driven by the
//! format's [`PixelFormatFlags`]:
//!
//! - `FLOAT` stores 32-bit floats, `HALF` stores 16-bit floats.
//! - Unsigned `NORMALIZED` values are clamped to `[0, 1]`, sRGB encoded when the format is sRGB
//!   (never the alpha), scaled by the integer maximum and rounded.
//! - Signed `NORMALIZED` values are clamped to `[-1, 1]`, scaled and rounded.
//! - Other integer values are rounded half away from zero, saturating at the type bounds.
//!
//! Packed formats (`R10G10B10A2`, `B5G6R5`, `D24S8`, ...) have their own bit-field encoders. BGR
//! ordered formats swap red and blue around the generic encoder.
//!
//! Formats without a CPU encoding (planar/subsampled YUV, palettes, shared exponent, block
//! compressed and the sentinels) make [`pack_colour`] and [`unpack_colour`] return `false`
//! without touching their output.
//!
//! All multi-byte values are little endian.

mod component;
mod packed;

use crate::colour::ColourValue;
use crate::format::registry::{get_flags, get_num_components};
use crate::format::PixelFormatGpu::{self, *};
use component::{pack_kind, saturate, unpack_kind, ComponentKind};
use packed::*;

/// Storage type and count of the components of a plain format.
const fn component_layout(format: PixelFormatGpu) -> Option<(ComponentKind, usize)> {
    use ComponentKind::*;
    Some(match format {
        Rgba32Float | Rgba32Uint => (U32, 4),
        Rgba32Sint => (I32, 4),
        Rgb32Float | Rgb32Uint => (U32, 3),
        Rgb32Sint => (I32, 3),
        Rg32Float | Rg32Uint => (U32, 2),
        Rg32Sint => (I32, 2),
        D32Float | R32Float | R32Uint => (U32, 1),
        R32Sint => (I32, 1),

        Rgba16Float | Rgba16Unorm | Rgba16Uint => (U16, 4),
        Rgba16Snorm | Rgba16Sint => (I16, 4),
        Rgb16Unorm => (U16, 3),
        Rg16Float | Rg16Unorm | Rg16Uint => (U16, 2),
        Rg16Snorm | Rg16Sint => (I16, 2),
        R16Float | D16Unorm | R16Unorm | R16Uint => (U16, 1),
        R16Snorm | R16Sint => (I16, 1),

        Rgba8Unorm | Rgba8UnormSrgb | Rgba8Uint => (U8, 4),
        Rgba8Snorm | Rgba8Sint => (I8, 4),
        Rgb8Unorm | Rgb8UnormSrgb => (U8, 3),
        Rg8Unorm | Rg8Uint => (U8, 2),
        Rg8Snorm | Rg8Sint => (I8, 2),
        R8Unorm | R8Uint => (U8, 1),
        R8Snorm | R8Sint => (I8, 1),

        _ => return None,
    })
}

/// Whether [`pack_colour`] and [`unpack_colour`] can encode the format.
pub const fn supports_pack(format: PixelFormatGpu) -> bool {
    component_layout(format).is_some()
        || matches!(
            format,
            D32FloatS8x24Uint
                | R10g10b10a2Unorm
                | R10g10b10a2Uint
                | R11g11b10Float
                | D24Unorm
                | D24UnormS8Uint
                | A8Unorm
                | B5g6r5Unorm
                | B5g5r5a1Unorm
                | B4g4r4a4Unorm
                | Bgra8Unorm
                | Bgra8UnormSrgb
                | Bgrx8Unorm
                | Bgrx8UnormSrgb
                | Bgr8Unorm
                | Bgr8UnormSrgb
        )
}

#[inline(always)]
fn unorm(value: f32, max: f32) -> u32 {
    (saturate(value) * max).round() as u32
}

#[inline(always)]
fn read_u32(src: &[u8]) -> u32 {
    u32::from_le_bytes([src[0], src[1], src[2], src[3]])
}

#[inline(always)]
fn read_u16(src: &[u8]) -> u16 {
    u16::from_le_bytes([src[0], src[1]])
}

#[inline(always)]
fn stencil(value: f32) -> u32 {
    value.round().clamp(0.0, 255.0) as u32
}

/// Encodes `rgba` as a single pixel of `format` into the start of `dst`.
///
/// Returns `false`, leaving `dst` untouched, when the format has no CPU encoding
/// (see [`supports_pack`]).
///
/// # Panics
///
/// If `dst` is shorter than the format's bytes per pixel.
#[must_use]
pub fn pack_colour(rgba: &[f32; 4], format: PixelFormatGpu, dst: &mut [u8]) -> bool {
    let flags = get_flags(format);
    if let Some((kind, components)) = component_layout(format) {
        pack_kind(kind, rgba, dst, components, flags);
        return true;
    }

    match format {
        D32FloatS8x24Uint => {
            dst[0..4].copy_from_slice(&rgba[0].to_le_bytes());
            dst[4..8].copy_from_slice(&(stencil(rgba[1]) << 24).to_le_bytes());
        }
        R10g10b10a2Unorm => {
            let mut packed = R10g10b10a2(0);
            packed.set_r(unorm(rgba[0], 1023.0));
            packed.set_g(unorm(rgba[1], 1023.0));
            packed.set_b(unorm(rgba[2], 1023.0));
            packed.set_a(unorm(rgba[3], 3.0));
            dst[0..4].copy_from_slice(&packed.0.to_le_bytes());
        }
        R10g10b10a2Uint => {
            let mut packed = R10g10b10a2(0);
            packed.set_r(rgba[0].round().clamp(0.0, 1023.0) as u32);
            packed.set_g(rgba[1].round().clamp(0.0, 1023.0) as u32);
            packed.set_b(rgba[2].round().clamp(0.0, 1023.0) as u32);
            packed.set_a(rgba[3].round().clamp(0.0, 3.0) as u32);
            dst[0..4].copy_from_slice(&packed.0.to_le_bytes());
        }
        R11g11b10Float => {
            let mut packed = R11g11b10(0);
            packed.set_r(f32_to_f11(rgba[0]));
            packed.set_g(f32_to_f11(rgba[1]));
            packed.set_b(f32_to_f10(rgba[2]));
            dst[0..4].copy_from_slice(&packed.0.to_le_bytes());
        }
        D24Unorm | D24UnormS8Uint => {
            let mut packed = D24s8(0);
            packed.set_depth(unorm(rgba[0], 16777215.0));
            if format == D24UnormS8Uint {
                packed.set_stencil(stencil(rgba[1]));
            }
            dst[0..4].copy_from_slice(&packed.0.to_le_bytes());
        }
        A8Unorm => dst[0] = unorm(rgba[3], 255.0) as u8,
        B5g6r5Unorm => {
            let mut packed = B5g6r5(0);
            packed.set_r(unorm(rgba[0], 31.0) as u16);
            packed.set_g(unorm(rgba[1], 63.0) as u16);
            packed.set_b(unorm(rgba[2], 31.0) as u16);
            dst[0..2].copy_from_slice(&packed.0.to_le_bytes());
        }
        B5g5r5a1Unorm => {
            let mut packed = B5g5r5a1(0);
            packed.set_r(unorm(rgba[0], 31.0) as u16);
            packed.set_g(unorm(rgba[1], 31.0) as u16);
            packed.set_b(unorm(rgba[2], 31.0) as u16);
            packed.set_a(unorm(rgba[3], 1.0) != 0);
            dst[0..2].copy_from_slice(&packed.0.to_le_bytes());
        }
        B4g4r4a4Unorm => {
            let mut packed = B4g4r4a4(0);
            packed.set_r(unorm(rgba[0], 15.0) as u16);
            packed.set_g(unorm(rgba[1], 15.0) as u16);
            packed.set_b(unorm(rgba[2], 15.0) as u16);
            packed.set_a(unorm(rgba[3], 15.0) as u16);
            dst[0..2].copy_from_slice(&packed.0.to_le_bytes());
        }
        Bgra8Unorm | Bgra8UnormSrgb | Bgrx8Unorm | Bgrx8UnormSrgb | Bgr8Unorm | Bgr8UnormSrgb => {
            let swapped = [rgba[2], rgba[1], rgba[0], rgba[3]];
            let components = get_num_components(format) as usize;
            pack_kind(ComponentKind::U8, &swapped, dst, components, flags);
            if matches!(format, Bgrx8Unorm | Bgrx8UnormSrgb) {
                dst[3] = u8::MAX;
            }
        }
        _ => return false,
    }

    true
}

/// Decodes the pixel at the start of `src` from `format` into `rgba`.
///
/// Components the format lacks come back as `0`, except alpha which is `1`. Returns `false`,
/// leaving `rgba` untouched, when the format has no CPU encoding (see [`supports_pack`]).
///
/// # Panics
///
/// If `src` is shorter than the format's bytes per pixel.
#[must_use]
pub fn unpack_colour(rgba: &mut [f32; 4], format: PixelFormatGpu, src: &[u8]) -> bool {
    let flags = get_flags(format);
    if let Some((kind, components)) = component_layout(format) {
        unpack_kind(kind, rgba, src, components, flags);
        return true;
    }

    *rgba = match format {
        D32FloatS8x24Uint => {
            let depth = f32::from_le_bytes([src[0], src[1], src[2], src[3]]);
            let stencil = (read_u32(&src[4..]) >> 24) as f32;
            [depth, stencil, 0.0, 1.0]
        }
        R10g10b10a2Unorm => {
            let packed = R10g10b10a2(read_u32(src));
            [
                packed.r() as f32 / 1023.0,
                packed.g() as f32 / 1023.0,
                packed.b() as f32 / 1023.0,
                packed.a() as f32 / 3.0,
            ]
        }
        R10g10b10a2Uint => {
            let packed = R10g10b10a2(read_u32(src));
            [
                packed.r() as f32,
                packed.g() as f32,
                packed.b() as f32,
                packed.a() as f32,
            ]
        }
        R11g11b10Float => {
            let packed = R11g11b10(read_u32(src));
            [
                f11_to_f32(packed.r()),
                f11_to_f32(packed.g()),
                f10_to_f32(packed.b()),
                1.0,
            ]
        }
        D24Unorm => {
            let packed = D24s8(read_u32(src));
            [packed.depth() as f32 / 16777215.0, 0.0, 0.0, 1.0]
        }
        D24UnormS8Uint => {
            let packed = D24s8(read_u32(src));
            [
                packed.depth() as f32 / 16777215.0,
                packed.stencil() as f32,
                0.0,
                1.0,
            ]
        }
        A8Unorm => [0.0, 0.0, 0.0, src[0] as f32 / 255.0],
        B5g6r5Unorm => {
            let packed = B5g6r5(read_u16(src));
            [
                packed.r() as f32 / 31.0,
                packed.g() as f32 / 63.0,
                packed.b() as f32 / 31.0,
                1.0,
            ]
        }
        B5g5r5a1Unorm => {
            let packed = B5g5r5a1(read_u16(src));
            [
                packed.r() as f32 / 31.0,
                packed.g() as f32 / 31.0,
                packed.b() as f32 / 31.0,
                if packed.a() { 1.0 } else { 0.0 },
            ]
        }
        B4g4r4a4Unorm => {
            let packed = B4g4r4a4(read_u16(src));
            [
                packed.r() as f32 / 15.0,
                packed.g() as f32 / 15.0,
                packed.b() as f32 / 15.0,
                packed.a() as f32 / 15.0,
            ]
        }
        Bgra8Unorm | Bgra8UnormSrgb | Bgrx8Unorm | Bgrx8UnormSrgb | Bgr8Unorm | Bgr8UnormSrgb => {
            let mut bgra = [0.0; 4];
            let components = get_num_components(format) as usize;
            unpack_kind(ComponentKind::U8, &mut bgra, src, components, flags);
            [bgra[2], bgra[1], bgra[0], bgra[3]]
        }
        _ => return false,
    };

    true
}

/// [`pack_colour`] taking a [`ColourValue`].
#[must_use]
#[inline]
pub fn pack_colour_value(colour: ColourValue, format: PixelFormatGpu, dst: &mut [u8]) -> bool {
    pack_colour(&colour.to_array(), format, dst)
}

/// [`unpack_colour`] returning a [`ColourValue`], or `None` when the format has no CPU
/// encoding.
#[inline]
pub fn unpack_colour_value(format: PixelFormatGpu, src: &[u8]) -> Option<ColourValue> {
    let mut rgba = [0.0; 4];
    unpack_colour(&mut rgba, format, src).then(|| rgba.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn supports_pack_agrees_with_pack_colour() {
        for format in PixelFormatGpu::iter() {
            let mut bytes = [0u8; 16];
            assert_eq!(
                pack_colour(&[0.5; 4], format, &mut bytes),
                supports_pack(format),
                "{format}"
            );
            let mut rgba = [0.0; 4];
            assert_eq!(unpack_colour(&mut rgba, format, &bytes), supports_pack(format), "{format}");
        }
    }

    #[rstest]
    #[case(Bc1Unorm)]
    #[case(Nv12)]
    #[case(R9g9b9e5SharedExp)]
    #[case(P8)]
    #[case(Unknown)]
    fn unsupported_leaves_buffers_untouched(#[case] format: PixelFormatGpu) {
        let mut bytes = [0xAA; 16];
        assert!(!pack_colour(&[1.0; 4], format, &mut bytes));
        assert_eq!(bytes, [0xAA; 16]);

        let mut rgba = [7.0; 4];
        assert!(!unpack_colour(&mut rgba, format, &bytes));
        assert_eq!(rgba, [7.0; 4]);
    }

    #[rstest]
    #[case(Rgba32Float, 0.0)]
    #[case(Rgb32Float, 0.0)]
    #[case(Rgba16Float, 1e-3)]
    #[case(Rg16Float, 1e-3)]
    #[case(Rgba16Unorm, 1e-4)]
    #[case(Rgb16Unorm, 1e-4)]
    #[case(Rgba8Unorm, 0.5 / 255.0)]
    #[case(Rgba8UnormSrgb, 0.005)]
    #[case(Rgb8Unorm, 0.5 / 255.0)]
    #[case(R8Unorm, 0.5 / 255.0)]
    #[case(Bgra8Unorm, 0.5 / 255.0)]
    #[case(Bgrx8UnormSrgb, 0.005)]
    #[case(Bgr8Unorm, 0.5 / 255.0)]
    #[case(R10g10b10a2Unorm, 0.5 / 1023.0)]
    #[case(R11g11b10Float, 0.0)]
    #[case(B5g6r5Unorm, 0.5 / 31.0)]
    #[case(B5g5r5a1Unorm, 0.5 / 31.0)]
    #[case(B4g4r4a4Unorm, 0.5 / 15.0)]
    #[case(D16Unorm, 1e-4)]
    #[case(D24Unorm, 1e-6)]
    fn round_trips_within_quantization(#[case] format: PixelFormatGpu, #[case] tolerance: f32) {
        let input = [0.25, 0.5, 0.75, 1.0];
        let mut bytes = [0u8; 16];
        assert!(pack_colour(&input, format, &mut bytes));

        let mut output = [0.0; 4];
        assert!(unpack_colour(&mut output, format, &bytes));

        let components = get_num_components(format) as usize;
        for i in 0..4 {
            let expected = match i {
                i if i < components => input[i],
                3 => 1.0,
                _ => 0.0,
            };
            assert!(
                (output[i] - expected).abs() <= tolerance,
                "{format} component {i}: {} != {expected}",
                output[i]
            );
        }
    }

    #[test]
    fn alpha_defaults_to_one_without_alpha_channel() {
        for format in PixelFormatGpu::iter()
            .filter(|&format| supports_pack(format) && !has_alpha(format))
        {
            let mut rgba = [0.0; 4];
            assert!(unpack_colour(&mut rgba, format, &[0u8; 16]));
            assert_eq!(rgba[3], 1.0, "{format}");
        }
    }

    #[rstest]
    #[case(Rgba8Unorm, [1.0, 0.0, 0.0, 1.0], &[0xFF, 0x00, 0x00, 0xFF])]
    #[case(Bgra8Unorm, [1.0, 0.0, 0.0, 0.5], &[0x00, 0x00, 0xFF, 0x80])]
    #[case(Bgrx8Unorm, [0.0, 1.0, 0.0, 0.0], &[0x00, 0xFF, 0x00, 0xFF])]
    #[case(Bgr8Unorm, [1.0, 0.0, 0.2, 1.0], &[0x33, 0x00, 0xFF])]
    #[case(Rg8Snorm, [-1.0, 0.5, 0.0, 0.0], &[0x81, 0x40])]
    #[case(R8Sint, [-200.0, 0.0, 0.0, 0.0], &[0x80])]
    #[case(R16Float, [1.0, 0.0, 0.0, 0.0], &[0x00, 0x3C])]
    #[case(B5g6r5Unorm, [1.0, 1.0, 1.0, 1.0], &[0xFF, 0xFF])]
    #[case(B5g6r5Unorm, [1.0, 0.0, 0.0, 1.0], &[0x00, 0xF8])]
    #[case(B5g5r5a1Unorm, [0.0, 0.0, 0.0, 0.49], &[0x00, 0x00])]
    #[case(B5g5r5a1Unorm, [0.0, 0.0, 0.0, 0.5], &[0x00, 0x80])]
    #[case(B4g4r4a4Unorm, [0.0, 0.0, 1.0, 1.0], &[0x0F, 0xF0])]
    #[case(R10g10b10a2Unorm, [1.0, 0.0, 0.0, 1.0], &[0xFF, 0x03, 0x00, 0xC0])]
    #[case(R10g10b10a2Uint, [2000.0, 0.0, -5.0, 2.0], &[0xFF, 0x03, 0x00, 0x80])]
    #[case(D24UnormS8Uint, [1.0, 7.0, 0.0, 0.0], &[0xFF, 0xFF, 0xFF, 0x07])]
    #[case(D24Unorm, [2.0, 7.0, 0.0, 0.0], &[0xFF, 0xFF, 0xFF, 0x00])]
    #[case(D32FloatS8x24Uint, [0.5, 3.0, 0.0, 0.0], &[0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x03])]
    #[case(A8Unorm, [0.3, 0.3, 0.3, 1.0], &[0xFF])]
    fn packs_exact_bytes(
        #[case] format: PixelFormatGpu,
        #[case] rgba: [f32; 4],
        #[case] expected: &[u8],
    ) {
        let mut bytes = [0u8; 16];
        assert!(pack_colour(&rgba, format, &mut bytes));
        assert_eq!(&bytes[..expected.len()], expected, "{format}");
    }

    #[test]
    fn a8_stores_alpha_only() {
        let mut rgba = [9.0; 4];
        assert!(unpack_colour(&mut rgba, A8Unorm, &[0xFF]));
        assert_eq!(rgba, [0.0, 0.0, 0.0, 1.0]);

        assert!(unpack_colour(&mut rgba, A8Unorm, &[0x00]));
        assert_eq!(rgba, [0.0; 4]);
    }

    #[test]
    fn depth_stencil_unpacks_stencil_into_green() {
        let mut rgba = [0.0; 4];
        assert!(unpack_colour(&mut rgba, D24UnormS8Uint, &[0xFF, 0xFF, 0xFF, 0x07]));
        assert_eq!(rgba, [1.0, 7.0, 0.0, 1.0]);

        let bytes = [0x00, 0x00, 0x00, 0x3F, 0x00, 0x00, 0x00, 0x03];
        assert!(unpack_colour(&mut rgba, D32FloatS8x24Uint, &bytes));
        assert_eq!(rgba, [0.5, 3.0, 0.0, 1.0]);
    }

    #[test]
    fn integer_formats_keep_raw_values() {
        let mut bytes = [0u8; 16];
        assert!(pack_colour(&[-3.0, 70000.0, 5.4, 1.0], Rgba16Sint, &mut bytes));

        let mut rgba = [0.0; 4];
        assert!(unpack_colour(&mut rgba, Rgba16Sint, &bytes));
        assert_eq!(rgba, [-3.0, i16::MAX as f32, 5.0, 1.0]);
    }

    #[test]
    fn colour_value_wrappers() {
        let mut bytes = [0u8; 4];
        assert!(pack_colour_value(ColourValue::new(0.0, 1.0, 0.0, 1.0), Rgba8Unorm, &mut bytes));
        assert_eq!(bytes, [0x00, 0xFF, 0x00, 0xFF]);
        assert_eq!(
            unpack_colour_value(Rgba8Unorm, &bytes),
            Some(ColourValue::new(0.0, 1.0, 0.0, 1.0))
        );
        assert_eq!(unpack_colour_value(Bc7Unorm, &[0u8; 16]), None);
    }
}
