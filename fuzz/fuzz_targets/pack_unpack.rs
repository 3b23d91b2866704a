#![no_main]

// This fuzz test validates pixel packing by checking that unpacking arbitrary bytes and packing
// them again reaches a fixed point after one round trip.

use libfuzzer_sys::{arbitrary, fuzz_target};
use pixel_format_gpu::{get_bytes_per_pixel, pack_colour, supports_pack, unpack_colour, PixelFormatGpu};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Pixel {
    pub format: u32,
    pub bytes: [u8; 16],
}

fuzz_target!(|pixel: Pixel| {
    let format = PixelFormatGpu::from_ordinal(pixel.format % PixelFormatGpu::COUNT as u32);
    let len = get_bytes_per_pixel(format) as usize;

    // Unsupported formats must report so and leave the output alone.
    let mut rgba = [0.0f32; 4];
    let unpacked = unpack_colour(&mut rgba, format, &pixel.bytes[..len]);
    assert_eq!(unpacked, supports_pack(format), "{format}");
    if !unpacked {
        assert_eq!(rgba, [0.0; 4]);
        return;
    }

    // NaN payloads are not required to survive the float representation.
    if rgba.iter().any(|value| value.is_nan()) {
        return;
    }

    let mut first = [0u8; 16];
    assert!(pack_colour(&rgba, format, &mut first[..len]));

    let mut rgba_again = [0.0f32; 4];
    assert!(unpack_colour(&mut rgba_again, format, &first[..len]));
    let mut second = [0u8; 16];
    assert!(pack_colour(&rgba_again, format, &mut second[..len]));

    assert_eq!(
        first, second,
        "{format}: packing is not stable\n\
         Original bytes: {:?}\n\
         Unpacked: {rgba:?}",
        &pixel.bytes[..len]
    );
});
