//! Bit-field views of the packed formats.
//!
//! Bit positions follow the D3D/Vulkan definitions, least significant bit first.

use bitfield::bitfield;
use half::f16;

bitfield! {
    /// `R10G10B10A2`: bits 0-9 red, 10-19 green, 20-29 blue, 30-31 alpha.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct R10g10b10a2(u32);
    impl Debug;
    u32;
    pub r, set_r: 9, 0;
    pub g, set_g: 19, 10;
    pub b, set_b: 29, 20;
    pub a, set_a: 31, 30;
}

bitfield! {
    /// `R11G11B10_FLOAT`: bits 0-10 red, 11-21 green, 22-31 blue. Unsigned small floats with a
    /// 5-bit exponent.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct R11g11b10(u32);
    impl Debug;
    u32;
    pub r, set_r: 10, 0;
    pub g, set_g: 21, 11;
    pub b, set_b: 31, 22;
}

bitfield! {
    /// `D24_UNORM_S8_UINT`: bits 0-23 depth, 24-31 stencil.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct D24s8(u32);
    impl Debug;
    u32;
    pub depth, set_depth: 23, 0;
    pub stencil, set_stencil: 31, 24;
}

bitfield! {
    /// `B5G6R5`: bits 0-4 blue, 5-10 green, 11-15 red.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct B5g6r5(u16);
    impl Debug;
    u16;
    pub b, set_b: 4, 0;
    pub g, set_g: 10, 5;
    pub r, set_r: 15, 11;
}

bitfield! {
    /// `B5G5R5A1`: bits 0-4 blue, 5-9 green, 10-14 red, bit 15 alpha.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct B5g5r5a1(u16);
    impl Debug;
    u16;
    pub b, set_b: 4, 0;
    pub g, set_g: 9, 5;
    pub r, set_r: 14, 10;
    pub a, set_a: 15;
}

bitfield! {
    /// `B4G4R4A4`: bits 0-3 blue, 4-7 green, 8-11 red, 12-15 alpha.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct B4g4r4a4(u16);
    impl Debug;
    u16;
    pub b, set_b: 3, 0;
    pub g, set_g: 7, 4;
    pub r, set_r: 11, 8;
    pub a, set_a: 15, 12;
}

/// Encodes a float as an 11-bit unsigned float (5-bit exponent, 6-bit mantissa).
///
/// Negative values and NaN become 0, mantissa bits beyond the sixth are truncated.
#[inline]
pub(crate) fn f32_to_f11(value: f32) -> u32 {
    (f16::from_f32(value.max(0.0)).to_bits() as u32 >> 4) & 0x7FF
}

/// Encodes a float as a 10-bit unsigned float (5-bit exponent, 5-bit mantissa).
#[inline]
pub(crate) fn f32_to_f10(value: f32) -> u32 {
    (f16::from_f32(value.max(0.0)).to_bits() as u32 >> 5) & 0x3FF
}

#[inline]
pub(crate) fn f11_to_f32(bits: u32) -> f32 {
    f16::from_bits(((bits & 0x7FF) << 4) as u16).to_f32()
}

#[inline]
pub(crate) fn f10_to_f32(bits: u32) -> f32 {
    f16::from_bits(((bits & 0x3FF) << 5) as u16).to_f32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn r10g10b10a2_field_positions() {
        let mut packed = R10g10b10a2(0);
        packed.set_r(0x3FF);
        packed.set_a(3);
        assert_eq!(packed.0, 0xC000_03FF);
        packed.set_b(1);
        assert_eq!(packed.0, 0xC010_03FF);
    }

    #[test]
    fn b5g5r5a1_alpha_is_top_bit() {
        let mut packed = B5g5r5a1(0);
        packed.set_a(true);
        assert_eq!(packed.0, 0x8000);
        packed.set_r(0x1F);
        assert_eq!(packed.0, 0xFC00);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(0.5)]
    #[case(2.0)]
    #[case(32768.0)]
    fn small_floats_round_trip_exact_values(#[case] value: f32) {
        assert_eq!(f11_to_f32(f32_to_f11(value)), value);
        assert_eq!(f10_to_f32(f32_to_f10(value)), value);
    }

    #[test]
    fn small_floats_have_no_sign() {
        assert_eq!(f32_to_f11(-4.0), 0);
        assert_eq!(f32_to_f10(f32::NAN), 0);
    }
}
