#![no_main]

// This fuzz test runs bulk conversions between arbitrary formats and region shapes. It checks
// that supported conversions never write outside of the destination region's buffer, and that
// every converted pixel matches unpacking the source pixel and packing it by hand, which is
// what the float path does and what the fast paths must agree with.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_format_gpu::{
    bulk_pixel_conversion, get_bytes_per_pixel, is_compressed, is_conversion_supported,
    is_normalized, is_signed, pack_colour, supports_pack, unpack_colour, PixelFormatGpu,
    TextureBox,
};

const GUARD: usize = 64;

// Fast paths re-bias 8-bit normalized values instead of rescaling them.
const TOLERANCE: f32 = 1.5 / 127.0;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Conversion {
    pub src_format: u32,
    pub dst_format: u32,
    pub width: u8,
    pub height: u8,
    pub slices: u8,
    pub vertical_flip: bool,
    pub pixels: Vec<u8>,
}

fn unpack(format: PixelFormatGpu, pixel: &[u8]) -> [f32; 4] {
    let mut rgba = [0.0; 4];
    assert!(unpack_colour(&mut rgba, format, pixel));
    rgba
}

/// Converts a single pixel through the float representation.
fn convert_by_hand(
    src_format: PixelFormatGpu,
    dst_format: PixelFormatGpu,
    src_pixel: &[u8],
) -> [f32; 4] {
    let mut rgba = unpack(src_format, src_pixel);
    if is_normalized(src_format)
        && is_normalized(dst_format)
        && is_signed(src_format) != is_signed(dst_format)
    {
        for value in &mut rgba {
            *value = if is_signed(src_format) {
                *value * 0.5 + 0.5
            } else {
                *value * 2.0 - 1.0
            };
        }
    }

    let mut packed = [0u8; 16];
    let len = get_bytes_per_pixel(dst_format) as usize;
    assert!(pack_colour(&rgba, dst_format, &mut packed[..len]));
    unpack(dst_format, &packed[..len])
}

fn agrees(actual: f32, expected: f32) -> bool {
    actual == expected || (actual - expected).abs() <= TOLERANCE
}

fuzz_target!(|conversion: Conversion| {
    let src_format =
        PixelFormatGpu::from_ordinal(conversion.src_format % PixelFormatGpu::COUNT as u32);
    let dst_format =
        PixelFormatGpu::from_ordinal(conversion.dst_format % PixelFormatGpu::COUNT as u32);
    if !is_conversion_supported(src_format, dst_format)
        || (is_compressed(src_format) && conversion.vertical_flip)
    {
        return;
    }

    let width = u32::from(conversion.width % 32) + 1;
    let height = u32::from(conversion.height % 32) + 1;
    let slices = u32::from(conversion.slices % 4) + 1;

    let src_box = TextureBox::for_format(width, height, 1, slices, src_format);
    let dst_box = TextureBox::for_format(width, height, 1, slices, dst_format);

    let (Some(src_len), Some(dst_len)) = (src_box.required_len(), dst_box.required_len()) else {
        return;
    };

    // Source pixels are the fuzz input, repeated to cover the region.
    let mut src_data: Vec<u8> = if conversion.pixels.is_empty() {
        vec![0; src_len]
    } else {
        conversion.pixels.iter().copied().cycle().take(src_len).collect()
    };

    let mut dst_data = vec![0xA5u8; dst_len + GUARD];

    let src = src_box.with_data(src_data.as_mut_ptr());
    let mut dst = dst_box.with_data(dst_data.as_mut_ptr());
    unsafe {
        bulk_pixel_conversion(&src, src_format, &mut dst, dst_format, conversion.vertical_flip);
    }

    assert!(
        dst_data[dst_len..].iter().all(|&byte| byte == 0xA5),
        "{src_format} -> {dst_format} ({width}x{height}x{slices}) wrote past the destination"
    );

    if !supports_pack(src_format) || !supports_pack(dst_format) {
        return;
    }

    let src_bytes_per_pixel = get_bytes_per_pixel(src_format) as usize;
    let dst_bytes_per_pixel = get_bytes_per_pixel(dst_format) as usize;
    for slice in 0..slices {
        for y in 0..height {
            let dst_y = if conversion.vertical_flip { height - 1 - y } else { y };
            for x in 0..width {
                let src_offset = src_box.offset_of(x, y, slice);
                let dst_offset = dst_box.offset_of(x, dst_y, slice);
                let src_pixel = &src_data[src_offset..src_offset + src_bytes_per_pixel];
                let dst_pixel = &dst_data[dst_offset..dst_offset + dst_bytes_per_pixel];

                let actual = unpack(dst_format, dst_pixel);
                let expected = convert_by_hand(src_format, dst_format, src_pixel);
                if actual.iter().chain(&expected).any(|value| value.is_nan()) {
                    continue;
                }

                assert!(
                    actual.iter().zip(&expected).all(|(&a, &e)| agrees(a, e)),
                    "{src_format} -> {dst_format} at ({x}, {y}, {slice}): \
                     converted {actual:?}, by hand {expected:?}, source {src_pixel:?}"
                );
            }
        }
    }
});
