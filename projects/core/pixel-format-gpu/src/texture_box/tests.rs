use super::*;
use crate::test_prelude::*;

fn region(x: u32, y: u32, width: u32, height: u32) -> TextureBox {
    let mut result = TextureBox::for_format(width, height, 1, 1, Rgba8Unorm);
    result.x = x;
    result.y = y;
    result
}

fn sequential(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

#[test]
fn uncompressed_offsets_are_linear() {
    let texture_box = TextureBox::new(4, 4, 2, 1, 4, 20, 100);
    assert_eq!(texture_box.offset_of(0, 0, 0), 0);
    assert_eq!(texture_box.offset_of(1, 2, 1), 100 + 2 * 20 + 4);
}

#[rstest]
#[case(Bc1Unorm, 8, 8, (3, 3), 0)]
#[case(Bc1Unorm, 8, 8, (5, 4), 16 + 8)]
#[case(Bc7Unorm, 8, 8, (4, 7), 32 + 16)]
#[case(AstcRgbaUnorm5x4Ldr, 10, 8, (4, 3), 0)]
#[case(AstcRgbaUnorm5x4Ldr, 10, 8, (5, 4), 32 + 16)]
fn compressed_offsets_address_blocks(
    #[case] format: PixelFormatGpu,
    #[case] width: u32,
    #[case] height: u32,
    #[case] (x, y): (u32, u32),
    #[case] expected: usize,
) {
    let texture_box = TextureBox::for_format(width, height, 1, 1, format);
    assert!(texture_box.is_compressed());
    assert_eq!(texture_box.offset_of(x, y, 0), expected);
}

#[test]
fn pvrtc_addresses_whole_images() {
    let texture_box = TextureBox::for_format(16, 16, 1, 2, PvrtcRgb4);
    assert_eq!(texture_box.bytes_per_image, 128);
    assert_eq!(texture_box.offset_of(7, 9, 0), 0);
    assert_eq!(texture_box.offset_of(7, 9, 1), 128);
    assert!(!texture_box.is_subtexture_region());
}

#[test]
fn offsetted_origin_uses_z_or_slice() {
    let mut texture_box = TextureBox::new(4, 4, 1, 3, 4, 16, 64);
    texture_box.x = 1;
    texture_box.y = 2;
    texture_box.slice_start = 1;
    assert_eq!(texture_box.at_from_offsetted_origin(0, 0, 0), texture_box.at(1, 2, 1));
    assert_eq!(texture_box.at_from_offsetted_origin(1, 0, 1), texture_box.at(2, 2, 2));
}

#[test]
fn compressed_format_accessors() {
    let mut texture_box = TextureBox::new(4, 4, 1, 1, 4, 16, 64);
    assert!(!texture_box.is_compressed());
    assert_eq!(texture_box.compressed_pixel_format(), Unknown);
    assert_eq!(texture_box.bytes_per_pixel(), 4);

    texture_box.set_compressed_pixel_format(Bc3Unorm);
    assert!(texture_box.is_compressed());
    assert_eq!(texture_box.compressed_pixel_format(), Bc3Unorm);
    assert_eq!(texture_box.bytes_per_pixel(), 0);
}

#[test]
fn extents_and_sizes() {
    let mut texture_box = TextureBox::new(4, 3, 1, 6, 4, 16, 48);
    texture_box.x = 2;
    texture_box.y = 1;
    texture_box.slice_start = 2;
    assert_eq!(texture_box.get_max_x(), 6);
    assert_eq!(texture_box.get_max_y(), 4);
    assert_eq!(texture_box.get_max_z(), 1);
    assert_eq!(texture_box.get_max_slice(), 8);
    assert_eq!(texture_box.get_depth_or_slices(), 6);
    assert_eq!(texture_box.get_z_or_slice(), 2);
    assert_eq!(texture_box.get_size_bytes(), 48 * 6);
}

#[test]
fn large_boxes_wrap_sizes() {
    let texture_box = TextureBox::for_format(32768, 32768, 1, 2, Rgba32Float);
    assert_eq!(texture_box.bytes_per_row, 32768 * 16);
    assert_eq!(texture_box.bytes_per_image, 0);
    assert_eq!(texture_box.get_size_bytes(), 0);

    let texture_box = TextureBox::new(1, 1, 1, 4, 4, 4, 1 << 30);
    assert_eq!(texture_box.get_size_bytes(), 0);
}

#[rstest]
#[case::tight(TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm), false)]
#[case::offset(region(1, 0, 2, 2), true)]
#[case::padded_rows(TextureBox::new(4, 4, 1, 1, 4, 20, 80), true)]
#[case::padded_images(TextureBox::new(4, 4, 1, 1, 4, 16, 128), true)]
#[case::partial_blocks(TextureBox::for_format(5, 5, 1, 1, Bc1Unorm), false)]
#[case::astc(TextureBox::for_format(13, 9, 1, 1, AstcRgbaUnorm6x5Ldr), false)]
fn detects_subtexture_regions(#[case] texture_box: TextureBox, #[case] expected: bool) {
    assert_eq!(texture_box.is_subtexture_region(), expected);
}

#[test]
fn compressed_padding_is_a_subtexture_region() {
    let mut texture_box = TextureBox::for_format(5, 5, 1, 1, Bc1Unorm);
    assert_eq!(texture_box.bytes_per_row, 16);
    assert_eq!(texture_box.bytes_per_image, 32);

    texture_box.bytes_per_image = 48;
    assert!(texture_box.is_subtexture_region());
}

#[rstest]
#[case::inside(region(1, 1, 2, 2), true, true)]
#[case::same(region(0, 0, 4, 4), true, true)]
#[case::touching_edge(region(4, 0, 2, 2), false, false)]
#[case::partial(region(3, 3, 2, 2), false, true)]
#[case::far(region(10, 10, 1, 1), false, false)]
fn geometric_predicates(
    #[case] other: TextureBox,
    #[case] contains: bool,
    #[case] overlaps: bool,
) {
    let outer = region(0, 0, 4, 4);
    assert_eq!(outer.fully_contains(&other), contains);
    assert_eq!(outer.overlaps(&other), overlaps);
    assert_eq!(other.overlaps(&outer), overlaps);
}

#[test]
fn predicates_consider_slices() {
    let first = region(0, 0, 4, 4);
    let mut second = first;
    second.slice_start = 1;

    assert!(first.equal_size(&second));
    assert!(!first.overlaps(&second));
    assert!(!first.fully_contains(&second));

    second.num_slices = 2;
    assert!(!first.equal_size(&second));
}

#[rstest]
#[case::tight(TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm), 64)]
#[case::window(TextureBox { x: 1, y: 1, ..TextureBox::new(2, 2, 1, 1, 4, 16, 64) }, 2 * 16 + 3 * 4)]
#[case::slices(TextureBox::for_format(2, 2, 1, 3, R8Unorm), 12)]
#[case::compressed(TextureBox::for_format(5, 5, 1, 1, Bc1Unorm), 32)]
#[case::empty(TextureBox::for_format(0, 4, 1, 1, Rgba8Unorm), 0)]
fn required_len(#[case] texture_box: TextureBox, #[case] expected: usize) {
    assert_eq!(texture_box.required_len(), Some(expected));
}

#[rstest]
#[case::origin_x(TextureBox { x: u32::MAX, ..TextureBox::for_format(1, 1, 1, 1, Rgba8Unorm) })]
#[case::origin_y(TextureBox { y: u32::MAX, ..TextureBox::for_format(1, 2, 1, 1, Rgba8Unorm) })]
#[case::slices(TextureBox { slice_start: u32::MAX, ..TextureBox::for_format(1, 1, 1, 2, Rgba8Unorm) })]
#[case::compressed(TextureBox { x: u32::MAX - 2, ..TextureBox::for_format(4, 4, 1, 1, Bc1Unorm) })]
fn required_len_rejects_boxes_past_u32(#[case] texture_box: TextureBox) {
    assert_eq!(texture_box.required_len(), None);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn required_len_reaches_past_u32_offsets() {
    let texture_box = TextureBox {
        x: u32::MAX - 1,
        ..TextureBox::for_format(1, 1, 1, 1, Rgba32Float)
    };
    assert_eq!(texture_box.required_len(), Some(u32::MAX as usize * 16));
}

#[test]
fn copies_whole_images_raw() {
    let mut src_data = sequential(64);
    let mut dst_data = vec![0u8; 64];
    let src = TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm).with_data(src_data.as_mut_ptr());
    let mut dst = TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm).with_data(dst_data.as_mut_ptr());

    unsafe { dst.copy_from(&src) };
    assert_eq!(dst_data, src_data);
}

#[test]
fn copies_into_window_without_touching_padding() {
    let mut src_data = sequential(16);
    let mut dst_data = vec![0u8; 64];
    let src = TextureBox::for_format(2, 2, 1, 1, Rgba8Unorm).with_data(src_data.as_mut_ptr());
    let mut dst = TextureBox {
        x: 1,
        y: 1,
        ..TextureBox::new(2, 2, 1, 1, 4, 16, 64)
    }
    .with_data(dst_data.as_mut_ptr());

    unsafe { dst.copy_from(&src) };

    let mut expected = vec![0u8; 64];
    expected[20..28].copy_from_slice(&src_data[0..8]);
    expected[36..44].copy_from_slice(&src_data[8..16]);
    assert_eq!(dst_data, expected);
}

#[test]
fn best_effort_copy_truncates_to_smaller_region() {
    init_tracing();
    let mut src_data = sequential(64);
    let mut dst_data = vec![0u8; 16];
    let src = TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm).with_data(src_data.as_mut_ptr());
    let mut dst = TextureBox::for_format(2, 2, 1, 1, Rgba8Unorm).with_data(dst_data.as_mut_ptr());

    unsafe { dst.copy_from(&src) };
    assert_eq!(&dst_data[0..8], &src_data[0..8]);
    assert_eq!(&dst_data[8..16], &src_data[16..24]);
}

#[test]
fn best_effort_copy_skips_pixel_size_mismatch() {
    init_tracing();
    let mut src_data = sequential(32);
    let mut dst_data = vec![0u8; 64];
    let src = TextureBox::for_format(4, 4, 1, 1, Rg8Unorm).with_data(src_data.as_mut_ptr());
    let mut dst = TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm).with_data(dst_data.as_mut_ptr());

    unsafe { dst.copy_from(&src) };
    assert!(dst_data.iter().all(|&byte| byte == 0));
}

#[test]
fn copies_compressed_by_block_rows() {
    let mut src_data = sequential(32);
    let mut dst_data = vec![0u8; 48];
    let src = TextureBox::for_format(8, 8, 1, 1, Bc1Unorm).with_data(src_data.as_mut_ptr());
    let mut dst = TextureBox::for_format(8, 8, 1, 1, Bc1Unorm);
    dst.bytes_per_row = 24;
    dst.bytes_per_image = 48;
    let mut dst = dst.with_data(dst_data.as_mut_ptr());

    unsafe { dst.copy_from(&src) };
    assert_eq!(&dst_data[0..16], &src_data[0..16]);
    assert_eq!(&dst_data[16..24], &[0u8; 8]);
    assert_eq!(&dst_data[24..40], &src_data[16..32]);
}

#[test]
fn copies_pvrtc_image_by_image() {
    let mut src_data = sequential(256);
    let mut dst_data = vec![0u8; 320];
    let src = TextureBox::for_format(16, 16, 1, 2, PvrtcRgb4).with_data(src_data.as_mut_ptr());
    let mut dst = TextureBox::for_format(16, 16, 1, 2, PvrtcRgb4);
    dst.bytes_per_row = 160;
    dst.bytes_per_image = 160;
    let mut dst = dst.with_data(dst_data.as_mut_ptr());

    unsafe { dst.copy_from(&src) };
    assert_eq!(&dst_data[0..128], &src_data[0..128]);
    assert_eq!(&dst_data[160..288], &src_data[128..256]);
}

#[test]
fn strict_copy_rejects_mismatches() {
    let src = TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm);

    let mut dst = TextureBox::for_format(4, 4, 1, 1, Rg8Unorm);
    assert_eq!(
        unsafe { dst.try_copy_from(&src) },
        Err(CopyError::PixelSizeMismatch {
            dst: BoxPixelSize::Uncompressed(2),
            src: BoxPixelSize::Uncompressed(4),
        })
    );

    let mut dst = TextureBox::for_format(2, 2, 1, 1, Rgba8Unorm);
    assert_eq!(
        unsafe { dst.try_copy_from(&src) },
        Err(CopyError::SizeMismatch {
            dst: (2, 2, 1),
            src: (4, 4, 1),
        })
    );

    let mut dst = TextureBox::new(4, 4, 1, 1, 4, 8, 64);
    assert_eq!(
        unsafe { dst.try_copy_from(&src) },
        Err(CopyError::StrideMismatch {
            bytes_per_row: 8,
            needed: 16,
        })
    );
}

#[test]
fn strict_copy_copies_matching_regions() {
    let mut src_data = sequential(64);
    let mut dst_data = vec![0u8; 80];
    let src = TextureBox::for_format(4, 4, 1, 1, Rgba8Unorm).with_data(src_data.as_mut_ptr());
    let mut dst = TextureBox::new(4, 4, 1, 1, 4, 20, 80).with_data(dst_data.as_mut_ptr());

    assert_eq!(unsafe { dst.try_copy_from(&src) }, Ok(()));
    for row in 0..4 {
        assert_eq!(
            &dst_data[row * 20..row * 20 + 16],
            &src_data[row * 16..row * 16 + 16]
        );
    }
}

#[test]
fn copies_from_raw_pointer() {
    let src_data = sequential(24);
    let mut dst_data = vec![0u8; 16];
    let mut dst = TextureBox::for_format(2, 2, 1, 1, Rgba8Unorm).with_data(dst_data.as_mut_ptr());

    unsafe { dst.copy_from_raw(src_data.as_ptr(), 2, 2, 12) };
    assert_eq!(&dst_data[0..8], &src_data[0..8]);
    assert_eq!(&dst_data[8..16], &src_data[12..20]);
}

#[test]
fn reads_and_writes_colours() {
    let mut data = vec![0u8; 16];
    let mut texture_box = TextureBox::for_format(2, 2, 1, 1, Rgba8Unorm).with_data(data.as_mut_ptr());
    let red = ColourValue::new(1.0, 0.0, 0.0, 1.0);

    unsafe {
        assert!(texture_box.set_colour_at(red, 1, 1, 0, Rgba8Unorm));
        assert_eq!(texture_box.get_colour_at(1, 1, 0, Rgba8Unorm), red);
        assert_eq!(
            texture_box.get_colour_at(0, 0, 0, Rgba8Unorm),
            ColourValue::new(0.0, 0.0, 0.0, 0.0)
        );
    }
    assert_eq!(&data[12..16], &[0xFF, 0x00, 0x00, 0xFF]);
}

#[test]
fn compressed_colour_access_is_inert() {
    let mut data = vec![0x55u8; 8];
    let mut texture_box = TextureBox::for_format(4, 4, 1, 1, Bc1Unorm).with_data(data.as_mut_ptr());

    unsafe {
        assert_eq!(
            texture_box.get_colour_at(0, 0, 0, Bc1Unorm),
            ColourValue::BLACK
        );
        assert!(!texture_box.set_colour_at(ColourValue::default(), 0, 0, 0, Bc1Unorm));
    }
    assert_eq!(data, vec![0x55u8; 8]);
}
