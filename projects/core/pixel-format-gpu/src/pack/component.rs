//! Generic per-component encoding shared by every plain (non bit-packed) format.

use crate::format::PixelFormatFlags;
use crate::srgb::{from_srgb, to_srgb};
use core::mem::size_of;
use half::f16;

/// Integer storage type of a single component.
pub(crate) trait Component: Copy {
    /// Size of the component in bytes.
    const SIZE: usize;
    /// Largest representable value, the scale of normalized formats.
    const MAX: f32;
    /// Whether the storage type is signed.
    const SIGNED: bool;

    /// Reads a little endian component from the start of `bytes`.
    fn read(bytes: &[u8]) -> Self;
    /// Writes the component to the start of `bytes` in little endian.
    fn write(self, bytes: &mut [u8]);
    /// Widens the component to a float.
    fn to_f32(self) -> f32;
    /// Rounds half away from zero, saturating at the bounds of the type.
    fn from_f32_rounded(value: f32) -> Self;
}

macro_rules! impl_component {
    ($($ty:ty => $signed:literal),* $(,)?) => {
        $(
            impl Component for $ty {
                const SIZE: usize = size_of::<$ty>();
                const MAX: f32 = <$ty>::MAX as f32;
                const SIGNED: bool = $signed;

                #[inline(always)]
                fn read(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_le_bytes(raw)
                }

                #[inline(always)]
                fn write(self, bytes: &mut [u8]) {
                    bytes[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }

                #[inline(always)]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline(always)]
                fn from_f32_rounded(value: f32) -> Self {
                    // `as` saturates and maps NaN to 0.
                    value.round() as $ty
                }
            }
        )*
    };
}

impl_component! {
    u8 => false,
    i8 => true,
    u16 => false,
    i16 => true,
    u32 => false,
    i32 => true,
}

/// Storage type of the components of a plain format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ComponentKind {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
}

#[inline(always)]
pub(crate) fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Encodes the first `num_components` values of `rgba` into `dst`.
///
/// Float and half formats ignore `T` apart from their own component width.
#[inline]
pub(crate) fn pack_components<T: Component>(
    rgba: &[f32; 4],
    dst: &mut [u8],
    num_components: usize,
    flags: PixelFormatFlags,
) {
    for (i, &value) in rgba.iter().enumerate().take(num_components) {
        if flags.contains(PixelFormatFlags::FLOAT) {
            dst[i * 4..i * 4 + 4].copy_from_slice(&value.to_le_bytes());
        } else if flags.contains(PixelFormatFlags::HALF) {
            dst[i * 2..i * 2 + 2].copy_from_slice(&f16::from_f32(value).to_le_bytes());
        } else {
            let scaled = if !flags.contains(PixelFormatFlags::NORMALIZED) {
                value
            } else if T::SIGNED {
                value.clamp(-1.0, 1.0) * T::MAX
            } else {
                let mut value = saturate(value);
                if flags.contains(PixelFormatFlags::SRGB) && i != 3 {
                    value = to_srgb(value);
                }
                value * T::MAX
            };
            T::from_f32_rounded(scaled).write(&mut dst[i * T::SIZE..]);
        }
    }
}

/// Decodes `num_components` values from `src` into `rgba`.
///
/// Missing colour components become `0`; a missing alpha becomes `1`.
#[inline]
pub(crate) fn unpack_components<T: Component>(
    rgba: &mut [f32; 4],
    src: &[u8],
    num_components: usize,
    flags: PixelFormatFlags,
) {
    for (i, out) in rgba.iter_mut().enumerate().take(num_components) {
        *out = if flags.contains(PixelFormatFlags::FLOAT) {
            f32::from_le_bytes([src[i * 4], src[i * 4 + 1], src[i * 4 + 2], src[i * 4 + 3]])
        } else if flags.contains(PixelFormatFlags::HALF) {
            f16::from_le_bytes([src[i * 2], src[i * 2 + 1]]).to_f32()
        } else {
            let raw = T::read(&src[i * T::SIZE..]).to_f32();
            if !flags.contains(PixelFormatFlags::NORMALIZED) {
                raw
            } else if T::SIGNED {
                // Both the most negative value and the one above it map to -1.
                (raw / T::MAX).max(-1.0)
            } else {
                let value = raw / T::MAX;
                if flags.contains(PixelFormatFlags::SRGB) && i != 3 {
                    from_srgb(value)
                } else {
                    value
                }
            }
        };
    }

    fill_missing_components(rgba, num_components);
}

#[inline(always)]
pub(crate) fn fill_missing_components(rgba: &mut [f32; 4], num_components: usize) {
    for value in rgba.iter_mut().take(3).skip(num_components) {
        *value = 0.0;
    }
    if num_components < 4 {
        rgba[3] = 1.0;
    }
}

pub(crate) fn pack_kind(
    kind: ComponentKind,
    rgba: &[f32; 4],
    dst: &mut [u8],
    num_components: usize,
    flags: PixelFormatFlags,
) {
    match kind {
        ComponentKind::U8 => pack_components::<u8>(rgba, dst, num_components, flags),
        ComponentKind::I8 => pack_components::<i8>(rgba, dst, num_components, flags),
        ComponentKind::U16 => pack_components::<u16>(rgba, dst, num_components, flags),
        ComponentKind::I16 => pack_components::<i16>(rgba, dst, num_components, flags),
        ComponentKind::U32 => pack_components::<u32>(rgba, dst, num_components, flags),
        ComponentKind::I32 => pack_components::<i32>(rgba, dst, num_components, flags),
    }
}

pub(crate) fn unpack_kind(
    kind: ComponentKind,
    rgba: &mut [f32; 4],
    src: &[u8],
    num_components: usize,
    flags: PixelFormatFlags,
) {
    match kind {
        ComponentKind::U8 => unpack_components::<u8>(rgba, src, num_components, flags),
        ComponentKind::I8 => unpack_components::<i8>(rgba, src, num_components, flags),
        ComponentKind::U16 => unpack_components::<u16>(rgba, src, num_components, flags),
        ComponentKind::I16 => unpack_components::<i16>(rgba, src, num_components, flags),
        ComponentKind::U32 => unpack_components::<u32>(rgba, src, num_components, flags),
        ComponentKind::I32 => unpack_components::<i32>(rgba, src, num_components, flags),
    }
}
