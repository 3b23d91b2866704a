//! Row converters for the fast conversion paths.
//!
//! Each converter rewrites `width` pixels from `src` into `dst` by shuffling bytes; none of them
//! go through the float representation. Slices must hold at least `width` pixels of their
//! respective layouts.

/// Signature shared by all row converters.
pub(crate) type RowConversionFn = fn(src: &[u8], dst: &mut [u8], width: usize);

/// Copies `width` pixels of `BPP` bytes.
pub(crate) fn copy_row<const BPP: usize>(src: &[u8], dst: &mut [u8], width: usize) {
    let len = width * BPP;
    dst[..len].copy_from_slice(&src[..len]);
}

macro_rules! row_conversions {
    ($(
        $(#[$meta:meta])*
        $name:ident: $src_bpp:literal => $dst_bpp:literal, |$s:ident, $d:ident| $body:block
    )*) => {
        $(
            $(#[$meta])*
            pub(crate) fn $name(src: &[u8], dst: &mut [u8], width: usize) {
                let src = src[..width * $src_bpp].chunks_exact($src_bpp);
                let dst = dst[..width * $dst_bpp].chunks_exact_mut($dst_bpp);
                for ($s, $d) in src.zip(dst) $body
            }
        )*
    };
}

row_conversions! {
    // 32-bit components.
    rgba32_to_rgb32: 16 => 12, |s, d| { d.copy_from_slice(&s[..12]); }
    rgb32_to_rg32: 12 => 8, |s, d| { d.copy_from_slice(&s[..8]); }
    rg32_to_rgb32: 8 => 12, |s, d| {
        d[..8].copy_from_slice(s);
        d[8..].fill(0);
    }
    rg32_to_r32: 8 => 4, |s, d| { d.copy_from_slice(&s[..4]); }

    // 16-bit components.
    rgba16_to_rgb16: 8 => 6, |s, d| { d.copy_from_slice(&s[..6]); }
    rgb16_to_rgba16: 6 => 8, |s, d| {
        d[..6].copy_from_slice(s);
        d[6..].fill(0xFF);
    }
    rgb16_to_rg16: 6 => 4, |s, d| { d.copy_from_slice(&s[..4]); }
    rg16_to_rgb16: 4 => 6, |s, d| {
        d[..4].copy_from_slice(s);
        d[4..].fill(0);
    }
    rg16_to_r16: 4 => 2, |s, d| { d.copy_from_slice(&s[..2]); }

    // RGBA8 sources.
    rgba8_to_bgra8: 4 => 4, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0], s[3]]); }
    rgba8_to_bgrx8: 4 => 4, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0], 0xFF]); }
    rgba8_to_rgb8: 4 => 3, |s, d| { d.copy_from_slice(&s[..3]); }
    rgba8_to_bgr8: 4 => 3, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0]]); }
    rgba8_to_rg8: 4 => 2, |s, d| { d.copy_from_slice(&s[..2]); }
    rgba8_to_r8: 4 => 1, |s, d| { d[0] = s[0]; }

    // BGRA8 and BGRX8 sources.
    bgra8_to_rgba8: 4 => 4, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0], s[3]]); }
    bgra8_to_bgrx8: 4 => 4, |s, d| { d.copy_from_slice(&[s[0], s[1], s[2], 0xFF]); }
    bgrx8_to_rgba8: 4 => 4, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0], 0xFF]); }
    bgra8_to_rgb8: 4 => 3, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0]]); }
    bgra8_to_bgr8: 4 => 3, |s, d| { d.copy_from_slice(&s[..3]); }
    bgra8_to_rg8: 4 => 2, |s, d| { d.copy_from_slice(&[s[2], s[1]]); }
    bgra8_to_r8: 4 => 1, |s, d| { d[0] = s[2]; }

    // RGB8 sources.
    rgb8_to_rgba8: 3 => 4, |s, d| { d.copy_from_slice(&[s[0], s[1], s[2], 0xFF]); }
    rgb8_to_bgra8: 3 => 4, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0], 0xFF]); }
    rgb8_to_bgr8: 3 => 3, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0]]); }
    rgb8_to_rg8: 3 => 2, |s, d| { d.copy_from_slice(&s[..2]); }
    rgb8_to_r8: 3 => 1, |s, d| { d[0] = s[0]; }

    // BGR8 sources.
    bgr8_to_rgba8: 3 => 4, |s, d| { d.copy_from_slice(&[s[2], s[1], s[0], 0xFF]); }
    bgr8_to_bgra8: 3 => 4, |s, d| { d.copy_from_slice(&[s[0], s[1], s[2], 0xFF]); }
    bgr8_to_rg8: 3 => 2, |s, d| { d.copy_from_slice(&[s[2], s[1]]); }
    bgr8_to_r8: 3 => 1, |s, d| { d[0] = s[2]; }

    // RG8 sources.
    rg8_to_rgb8: 2 => 3, |s, d| { d.copy_from_slice(&[s[0], s[1], 0]); }
    rg8_to_bgr8: 2 => 3, |s, d| { d.copy_from_slice(&[0, s[1], s[0]]); }
    rg8_to_r8: 2 => 1, |s, d| { d[0] = s[0]; }

    // Unsigned normalized to signed normalized, re-biased by 128.
    rgba8_to_rg8_u2s: 4 => 2, |s, d| {
        d.copy_from_slice(&[s[0].wrapping_sub(128), s[1].wrapping_sub(128)]);
    }
    bgra8_to_rg8_u2s: 4 => 2, |s, d| {
        d.copy_from_slice(&[s[2].wrapping_sub(128), s[1].wrapping_sub(128)]);
    }
    rgb8_to_rg8_u2s: 3 => 2, |s, d| {
        d.copy_from_slice(&[s[0].wrapping_sub(128), s[1].wrapping_sub(128)]);
    }
    bgr8_to_rg8_u2s: 3 => 2, |s, d| {
        d.copy_from_slice(&[s[2].wrapping_sub(128), s[1].wrapping_sub(128)]);
    }
    rg8_to_rg8_u2s: 2 => 2, |s, d| {
        d.copy_from_slice(&[s[0].wrapping_sub(128), s[1].wrapping_sub(128)]);
    }

    // Signed normalized to unsigned normalized.
    rgba8_to_rg8_s2u: 4 => 2, |s, d| {
        d.copy_from_slice(&[s[0].wrapping_add(128), s[1].wrapping_add(128)]);
    }
    bgra8_to_rg8_s2u: 4 => 2, |s, d| {
        d.copy_from_slice(&[s[2].wrapping_add(128), s[1].wrapping_add(128)]);
    }
    rgb8_to_rg8_s2u: 3 => 2, |s, d| {
        d.copy_from_slice(&[s[0].wrapping_add(128), s[1].wrapping_add(128)]);
    }
    bgr8_to_rg8_s2u: 3 => 2, |s, d| {
        d.copy_from_slice(&[s[2].wrapping_add(128), s[1].wrapping_add(128)]);
    }
    rg8_to_rg8_s2u: 2 => 2, |s, d| {
        d.copy_from_slice(&[s[0].wrapping_add(128), s[1].wrapping_add(128)]);
    }
}
