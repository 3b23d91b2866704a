use crate::test_prelude::*;

fn flipped() -> ConversionOptions {
    ConversionOptionsBuilder::new().vertical_flip(true).build()
}

fn strict() -> ConversionOptions {
    ConversionOptionsBuilder::new()
        .copy_policy(CopyPolicy::Strict)
        .build()
}

#[test]
fn converts_between_formats() {
    let rgba = [0x10u8, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80];
    let mut rgb = vec![0u8; 6];
    let src = TextureView::for_format(&rgba, 2, 1, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut rgb, 2, 1, 1, 1, Bgr8Unorm).unwrap();

    bulk_pixel_conversion(&src, Rgba8Unorm, &mut dst, Bgr8Unorm, &ConversionOptions::default())
        .unwrap();
    assert_eq!(rgb, [0x30, 0x20, 0x10, 0x70, 0x60, 0x50]);
}

#[test]
fn flips_same_format() {
    let src_pixels = sequential(16);
    let mut dst_pixels = vec![0u8; 16];
    let src = TextureView::for_format(&src_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();

    bulk_pixel_conversion(&src, Rgba8Unorm, &mut dst, Rgba8Unorm, &flipped()).unwrap();
    assert_eq!(&dst_pixels[..8], &src_pixels[8..]);
    assert_eq!(&dst_pixels[8..], &src_pixels[..8]);
}

#[test]
fn copies_compressed_formats_unchanged() {
    let src_pixels = sequential(32);
    let mut dst_pixels = vec![0u8; 32];
    let src = TextureView::for_format(&src_pixels, 8, 8, 1, 1, Bc1Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 8, 8, 1, 1, Bc1Unorm).unwrap();

    bulk_pixel_conversion(&src, Bc1Unorm, &mut dst, Bc1Unorm, &ConversionOptions::default())
        .unwrap();
    assert_eq!(dst_pixels, src_pixels);
}

#[rstest]
#[case(Bc1Unorm, Rgba8Unorm, "Format PFG_BC1_UNORM is block-compressed.")]
#[case(Rgba8Unorm, Bc3Unorm, "Format PFG_BC3_UNORM is block-compressed.")]
#[case(Rgba8Unorm, R9g9b9e5SharedExp, "Format PFG_R9G9B9E5_SHAREDEXP has no CPU encoding.")]
fn rejects_unsupported_conversions(
    #[case] src_format: PixelFormatGpu,
    #[case] dst_format: PixelFormatGpu,
    #[case] message: &str,
) {
    let src_pixels = vec![0u8; 256];
    let mut dst_pixels = vec![0xAAu8; 256];
    let src = TextureView::for_format(&src_pixels, 4, 4, 1, 1, src_format).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 4, 4, 1, 1, dst_format).unwrap();

    let error = bulk_pixel_conversion(
        &src,
        src_format,
        &mut dst,
        dst_format,
        &ConversionOptions::default(),
    )
    .unwrap_err();
    assert_eq!(error.to_string(), message);
    assert!(dst_pixels.iter().all(|&byte| byte == 0xAA));
}

#[test]
fn rejects_flipping_compressed_formats() {
    let src_pixels = vec![0u8; 32];
    let mut dst_pixels = vec![0u8; 32];
    let src = TextureView::for_format(&src_pixels, 8, 8, 1, 1, Bc1Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 8, 8, 1, 1, Bc1Unorm).unwrap();

    let result = bulk_pixel_conversion(&src, Bc1Unorm, &mut dst, Bc1Unorm, &flipped());
    assert!(matches!(
        result,
        Err(PixelFormatGpuError::CompressedFormat(Bc1Unorm))
    ));
}

#[test]
fn rejects_boxes_of_other_formats() {
    let src_pixels = vec![0u8; 16];
    let mut dst_pixels = vec![0u8; 32];
    let src = TextureView::for_format(&src_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 2, 2, 1, 1, Rgba16Unorm).unwrap();

    let result = bulk_pixel_conversion(
        &src,
        Rgba8Unorm,
        &mut dst,
        Rgba32Float,
        &ConversionOptions::default(),
    );
    assert!(matches!(
        result,
        Err(PixelFormatGpuError::PixelSizeMismatch {
            format: Rgba32Float,
            ..
        })
    ));
}

#[test]
fn rejects_conversions_between_different_sizes() {
    let src_pixels = vec![0u8; 16];
    let mut dst_pixels = vec![0u8; 32];
    let src = TextureView::for_format(&src_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 4, 2, 1, 1, Bgra8Unorm).unwrap();

    let result = bulk_pixel_conversion(
        &src,
        Rgba8Unorm,
        &mut dst,
        Bgra8Unorm,
        &ConversionOptions::default(),
    );
    assert!(matches!(
        result,
        Err(PixelFormatGpuError::SizeMismatch {
            src: (2, 2, 1),
            dst: (4, 2, 1)
        })
    ));
}

#[test]
fn best_effort_copies_overlap() {
    // 4x2 source into a 2x2 destination: only the left half of each row fits.
    let src_pixels = sequential(32);
    let mut dst_pixels = vec![0u8; 16];
    let src = TextureView::for_format(&src_pixels, 4, 2, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();

    copy_texture(&src, &mut dst, &ConversionOptions::default()).unwrap();
    assert_eq!(&dst_pixels[..8], &src_pixels[..8]);
    assert_eq!(&dst_pixels[8..], &src_pixels[16..24]);
}

#[test]
fn strict_copy_rejects_different_sizes() {
    let src_pixels = sequential(32);
    let mut dst_pixels = vec![0u8; 16];
    let src = TextureView::for_format(&src_pixels, 4, 2, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();

    let result = copy_texture(&src, &mut dst, &strict());
    assert!(matches!(
        result,
        Err(PixelFormatGpuError::Copy(CopyError::SizeMismatch { .. }))
    ));
    assert_eq!(dst_pixels, [0u8; 16]);
}

#[test]
fn strict_copy_of_equal_regions_succeeds() {
    let src_pixels = sequential(16);
    let mut dst_pixels = vec![0u8; 16];
    let src = TextureView::for_format(&src_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 2, 2, 1, 1, Rgba8Unorm).unwrap();

    bulk_pixel_conversion(&src, Rgba8Unorm, &mut dst, Rgba8Unorm, &strict()).unwrap();
    assert_eq!(dst_pixels, src_pixels);
}

#[rstest]
#[case(Rg8Snorm, [0x7F, 0x80])]
#[case(Rg8Unorm, [0xFF, 0x00])]
fn converts_normal_maps(#[case] dst_format: PixelFormatGpu, #[case] expected: [u8; 2]) {
    let src_pixels = [0xFFu8, 0x00, 0x80, 0xFF];
    let mut dst_pixels = vec![0u8; 2];
    let src = TextureView::for_format(&src_pixels, 1, 1, 1, 1, Rgba8Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 1, 1, 1, 1, dst_format).unwrap();

    convert_for_normal_mapping(&src, Rgba8Unorm, &mut dst, dst_format).unwrap();
    assert_eq!(dst_pixels, expected);
}

#[rstest]
#[case(Rg8Snorm, [0x7F, 0x81])]
#[case(Rg8Unorm, [0x7F, 0x00])]
fn converts_wide_normal_maps_to_signed_bytes(
    #[case] dst_format: PixelFormatGpu,
    #[case] expected: [u8; 2],
) {
    let src_pixels = [0xFFu8, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF];
    let mut dst_pixels = vec![0u8; 2];
    let src = TextureView::for_format(&src_pixels, 1, 1, 1, 1, Rgba16Unorm).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 1, 1, 1, 1, dst_format).unwrap();

    convert_for_normal_mapping(&src, Rgba16Unorm, &mut dst, dst_format).unwrap();
    assert_eq!(dst_pixels, expected);
}

#[rstest]
#[case(Rgba8Unorm, Rgba8Unorm, "Normal maps are stored as RG8, got PFG_RGBA8_UNORM.")]
#[case(Bc5Unorm, Rg8Unorm, "Format PFG_BC5_UNORM is block-compressed.")]
fn rejects_invalid_normal_map_conversions(
    #[case] src_format: PixelFormatGpu,
    #[case] dst_format: PixelFormatGpu,
    #[case] message: &str,
) {
    let src_pixels = vec![0u8; 64];
    let mut dst_pixels = vec![0u8; 64];
    let src = TextureView::for_format(&src_pixels, 4, 4, 1, 1, src_format).unwrap();
    let mut dst = TextureViewMut::for_format(&mut dst_pixels, 4, 4, 1, 1, dst_format).unwrap();

    let error = convert_for_normal_mapping(&src, src_format, &mut dst, dst_format).unwrap_err();
    assert_eq!(error.to_string(), message);
}
