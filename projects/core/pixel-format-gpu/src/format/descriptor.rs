use super::{PixelFormatFlags, PixelFormatGpu, PixelFormatLayout};

/// Static description of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormatDesc {
    /// Display name, e.g. `PFG_RGBA8_UNORM`.
    pub name: &'static str,
    /// Number of logical components (1 to 4).
    pub components: u8,
    /// Bytes per pixel. `0` for block compressed and planar formats.
    pub bytes_per_pixel: u8,
    /// Byte arrangement class.
    pub layout: PixelFormatLayout,
    /// Semantic flags.
    pub flags: PixelFormatFlags,
}

macro_rules! desc {
    ($name:literal, $components:literal, $bpp:literal, $layout:ident, $($flag:ident)|*) => {{
        const DESC: PixelFormatDesc = PixelFormatDesc {
            name: $name,
            components: $components,
            bytes_per_pixel: $bpp,
            layout: PixelFormatLayout::$layout,
            flags: PixelFormatFlags::from_bits_retain(0 $(| PixelFormatFlags::$flag.bits())*),
        };
        &DESC
    }};
}

/// Looks up the descriptor of a format.
///
/// [`PixelFormatGpu::Count`] resolves to a placeholder descriptor, the same as
/// [`PixelFormatGpu::Unknown`] in every respect but its name.
pub(crate) const fn describe(format: PixelFormatGpu) -> &'static PixelFormatDesc {
    match format {
        PixelFormatGpu::Unknown => desc!("PFG_UNKNOWN", 1, 0, Other, ),
        PixelFormatGpu::Null => desc!("PFG_NULL", 1, 0, Other, ),
        PixelFormatGpu::Rgba32Float => desc!("PFG_RGBA32_FLOAT", 4, 16, Rgba32, FLOAT),
        PixelFormatGpu::Rgba32Uint => desc!("PFG_RGBA32_UINT", 4, 16, Rgba32, INTEGER),
        PixelFormatGpu::Rgba32Sint => desc!("PFG_RGBA32_SINT", 4, 16, Rgba32, INTEGER | SIGNED),
        PixelFormatGpu::Rgb32Float => desc!("PFG_RGB32_FLOAT", 3, 12, Rgb32, FLOAT),
        PixelFormatGpu::Rgb32Uint => desc!("PFG_RGB32_UINT", 3, 12, Rgb32, INTEGER),
        PixelFormatGpu::Rgb32Sint => desc!("PFG_RGB32_SINT", 3, 12, Rgb32, INTEGER | SIGNED),
        PixelFormatGpu::Rgba16Float => desc!("PFG_RGBA16_FLOAT", 4, 8, Rgba16, HALF),
        PixelFormatGpu::Rgba16Unorm => desc!("PFG_RGBA16_UNORM", 4, 8, Rgba16, NORMALIZED),
        PixelFormatGpu::Rgba16Uint => desc!("PFG_RGBA16_UINT", 4, 8, Rgba16, INTEGER),
        PixelFormatGpu::Rgba16Snorm => desc!("PFG_RGBA16_SNORM", 4, 8, Rgba16, NORMALIZED | SIGNED),
        PixelFormatGpu::Rgba16Sint => desc!("PFG_RGBA16_SINT", 4, 8, Rgba16, INTEGER | SIGNED),
        PixelFormatGpu::Rg32Float => desc!("PFG_RG32_FLOAT", 2, 8, Rg32, FLOAT),
        PixelFormatGpu::Rg32Uint => desc!("PFG_RG32_UINT", 2, 8, Rg32, INTEGER),
        PixelFormatGpu::Rg32Sint => desc!("PFG_RG32_SINT", 2, 8, Rg32, INTEGER | SIGNED),
        PixelFormatGpu::D32FloatS8x24Uint => desc!("PFG_D32_FLOAT_S8X24_UINT", 2, 8, Other, FLOAT | DEPTH | STENCIL),
        PixelFormatGpu::R10g10b10a2Unorm => desc!("PFG_R10G10B10A2_UNORM", 4, 4, Other, NORMALIZED),
        PixelFormatGpu::R10g10b10a2Uint => desc!("PFG_R10G10B10A2_UINT", 4, 4, Other, INTEGER),
        PixelFormatGpu::R11g11b10Float => desc!("PFG_R11G11B10_FLOAT", 3, 4, Other, FLOAT_RARE),
        PixelFormatGpu::Rgba8Unorm => desc!("PFG_RGBA8_UNORM", 4, 4, Rgba8, NORMALIZED),
        PixelFormatGpu::Rgba8UnormSrgb => desc!("PFG_RGBA8_UNORM_SRGB", 4, 4, Rgba8, NORMALIZED | SRGB),
        PixelFormatGpu::Rgba8Uint => desc!("PFG_RGBA8_UINT", 4, 4, Rgba8, INTEGER),
        PixelFormatGpu::Rgba8Snorm => desc!("PFG_RGBA8_SNORM", 4, 4, Rgba8, NORMALIZED | SIGNED),
        PixelFormatGpu::Rgba8Sint => desc!("PFG_RGBA8_SINT", 4, 4, Rgba8, INTEGER | SIGNED),
        PixelFormatGpu::Rg16Float => desc!("PFG_RG16_FLOAT", 2, 4, Rg16, HALF),
        PixelFormatGpu::Rg16Unorm => desc!("PFG_RG16_UNORM", 2, 4, Rg16, NORMALIZED),
        PixelFormatGpu::Rg16Uint => desc!("PFG_RG16_UINT", 2, 4, Rg16, INTEGER),
        PixelFormatGpu::Rg16Snorm => desc!("PFG_RG16_SNORM", 2, 4, Rg16, NORMALIZED | SIGNED),
        PixelFormatGpu::Rg16Sint => desc!("PFG_RG16_SINT", 2, 4, Rg16, INTEGER | SIGNED),
        PixelFormatGpu::D32Float => desc!("PFG_D32_FLOAT", 1, 4, R32, FLOAT | DEPTH),
        PixelFormatGpu::R32Float => desc!("PFG_R32_FLOAT", 1, 4, R32, FLOAT),
        PixelFormatGpu::R32Uint => desc!("PFG_R32_UINT", 1, 4, R32, INTEGER),
        PixelFormatGpu::R32Sint => desc!("PFG_R32_SINT", 1, 4, R32, INTEGER | SIGNED),
        PixelFormatGpu::D24Unorm => desc!("PFG_D24_UNORM", 1, 4, Other, NORMALIZED | DEPTH),
        PixelFormatGpu::D24UnormS8Uint => desc!("PFG_D24_UNORM_S8_UINT", 1, 4, Other, NORMALIZED | DEPTH | STENCIL),
        PixelFormatGpu::Rg8Unorm => desc!("PFG_RG8_UNORM", 2, 2, Rg8, NORMALIZED),
        PixelFormatGpu::Rg8Uint => desc!("PFG_RG8_UINT", 2, 2, Rg8, INTEGER),
        PixelFormatGpu::Rg8Snorm => desc!("PFG_RG8_SNORM", 2, 2, Rg8, NORMALIZED | SIGNED),
        PixelFormatGpu::Rg8Sint => desc!("PFG_RG8_SINT", 2, 2, Rg8, INTEGER | SIGNED),
        PixelFormatGpu::R16Float => desc!("PFG_R16_FLOAT", 1, 2, R16, HALF),
        PixelFormatGpu::D16Unorm => desc!("PFG_D16_UNORM", 1, 2, R16, NORMALIZED | DEPTH),
        PixelFormatGpu::R16Unorm => desc!("PFG_R16_UNORM", 1, 2, R16, NORMALIZED),
        PixelFormatGpu::R16Uint => desc!("PFG_R16_UINT", 1, 2, R16, INTEGER),
        PixelFormatGpu::R16Snorm => desc!("PFG_R16_SNORM", 1, 2, R16, NORMALIZED | SIGNED),
        PixelFormatGpu::R16Sint => desc!("PFG_R16_SINT", 1, 2, R16, INTEGER | SIGNED),
        PixelFormatGpu::R8Unorm => desc!("PFG_R8_UNORM", 1, 1, R8, NORMALIZED),
        PixelFormatGpu::R8Uint => desc!("PFG_R8_UINT", 1, 1, R8, INTEGER),
        PixelFormatGpu::R8Snorm => desc!("PFG_R8_SNORM", 1, 1, R8, NORMALIZED | SIGNED),
        PixelFormatGpu::R8Sint => desc!("PFG_R8_SINT", 1, 1, R8, INTEGER | SIGNED),
        PixelFormatGpu::A8Unorm => desc!("PFG_A8_UNORM", 1, 1, Other, NORMALIZED),
        PixelFormatGpu::R1Unorm => desc!("PFG_R1_UNORM", 1, 0, Other, ),
        PixelFormatGpu::R9g9b9e5SharedExp => desc!("PFG_R9G9B9E5_SHAREDEXP", 1, 4, Other, FLOAT_RARE),
        PixelFormatGpu::R8g8B8g8Unorm => desc!("PFG_R8G8_B8G8_UNORM", 4, 4, Other, NORMALIZED),
        PixelFormatGpu::G8r8G8b8Unorm => desc!("PFG_G8R8_G8B8_UNORM", 4, 4, Other, NORMALIZED | SIGNED),
        PixelFormatGpu::Bc1Unorm => desc!("PFG_BC1_UNORM", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Bc1UnormSrgb => desc!("PFG_BC1_UNORM_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Bc2Unorm => desc!("PFG_BC2_UNORM", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Bc2UnormSrgb => desc!("PFG_BC2_UNORM_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Bc3Unorm => desc!("PFG_BC3_UNORM", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Bc3UnormSrgb => desc!("PFG_BC3_UNORM_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Bc4Unorm => desc!("PFG_BC4_UNORM", 1, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Bc4Snorm => desc!("PFG_BC4_SNORM", 1, 0, Other, COMPRESSED_COMMON | SIGNED),
        PixelFormatGpu::Bc5Unorm => desc!("PFG_BC5_UNORM", 2, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Bc5Snorm => desc!("PFG_BC5_SNORM", 2, 0, Other, COMPRESSED_COMMON | SIGNED),
        PixelFormatGpu::B5g6r5Unorm => desc!("PFG_B5G6R5_UNORM", 3, 2, Other, NORMALIZED),
        PixelFormatGpu::B5g5r5a1Unorm => desc!("PFG_B5G5R5A1_UNORM", 4, 2, Other, NORMALIZED),
        PixelFormatGpu::Bgra8Unorm => desc!("PFG_BGRA8_UNORM", 4, 4, Bgra8, NORMALIZED),
        PixelFormatGpu::Bgrx8Unorm => desc!("PFG_BGRX8_UNORM", 3, 4, Bgrx8, NORMALIZED),
        PixelFormatGpu::R10g10b10XrBiasA2Unorm => desc!("PFG_R10G10B10_XR_BIAS_A2_UNORM", 4, 4, Other, FLOAT_RARE),
        PixelFormatGpu::Bgra8UnormSrgb => desc!("PFG_BGRA8_UNORM_SRGB", 4, 4, Bgra8, NORMALIZED | SRGB),
        PixelFormatGpu::Bgrx8UnormSrgb => desc!("PFG_BGRX8_UNORM_SRGB", 3, 4, Bgrx8, NORMALIZED | SRGB),
        PixelFormatGpu::Bc6hUf16 => desc!("PFG_BC6H_UF16", 3, 0, Other, COMPRESSED | FLOAT_RARE),
        PixelFormatGpu::Bc6hSf16 => desc!("PFG_BC6H_SF16", 3, 0, Other, COMPRESSED | FLOAT_RARE | SIGNED),
        PixelFormatGpu::Bc7Unorm => desc!("PFG_BC7_UNORM", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Bc7UnormSrgb => desc!("PFG_BC7_UNORM_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Ayuv => desc!("PFG_AYUV", 3, 0, Other, ),
        PixelFormatGpu::Y410 => desc!("PFG_Y410", 3, 0, Other, ),
        PixelFormatGpu::Y416 => desc!("PFG_Y416", 3, 0, Other, ),
        PixelFormatGpu::Nv12 => desc!("PFG_NV12", 3, 0, Other, ),
        PixelFormatGpu::P010 => desc!("PFG_P010", 3, 0, Other, ),
        PixelFormatGpu::P016 => desc!("PFG_P016", 3, 0, Other, ),
        PixelFormatGpu::Opaque420 => desc!("PFG_420_OPAQUE", 3, 0, Other, ),
        PixelFormatGpu::Yuy2 => desc!("PFG_YUY2", 3, 0, Other, ),
        PixelFormatGpu::Y210 => desc!("PFG_Y210", 3, 0, Other, ),
        PixelFormatGpu::Y216 => desc!("PFG_Y216", 3, 0, Other, ),
        PixelFormatGpu::Nv11 => desc!("PFG_NV11", 3, 0, Other, ),
        PixelFormatGpu::Ai44 => desc!("PFG_AI44", 3, 0, Other, ),
        PixelFormatGpu::Ia44 => desc!("PFG_IA44", 3, 0, Other, ),
        PixelFormatGpu::P8 => desc!("PFG_P8", 1, 1, Other, PALETTE),
        PixelFormatGpu::A8p8 => desc!("PFG_A8P8", 2, 2, Other, PALETTE),
        PixelFormatGpu::B4g4r4a4Unorm => desc!("PFG_B4G4R4A4_UNORM", 4, 2, Other, NORMALIZED),
        PixelFormatGpu::P208 => desc!("PFG_P208", 3, 0, Other, ),
        PixelFormatGpu::V208 => desc!("PFG_V208", 3, 0, Other, ),
        PixelFormatGpu::V408 => desc!("PFG_V408", 3, 0, Other, ),
        PixelFormatGpu::Rgb8Unorm => desc!("PFG_RGB8_UNORM", 3, 3, Rgb8, NORMALIZED),
        PixelFormatGpu::Rgb8UnormSrgb => desc!("PFG_RGB8_UNORM_SRGB", 3, 3, Rgb8, NORMALIZED | SRGB),
        PixelFormatGpu::Bgr8Unorm => desc!("PFG_BGR8_UNORM", 3, 3, Bgr8, NORMALIZED),
        PixelFormatGpu::Bgr8UnormSrgb => desc!("PFG_BGR8_UNORM_SRGB", 3, 3, Bgr8, NORMALIZED | SRGB),
        PixelFormatGpu::Rgb16Unorm => desc!("PFG_RGB16_UNORM", 3, 6, Rgb16, NORMALIZED),
        PixelFormatGpu::PvrtcRgb2 => desc!("PFG_PVRTC_RGB2", 3, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::PvrtcRgb2Srgb => desc!("PFG_PVRTC_RGB2_SRGB", 3, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::PvrtcRgba2 => desc!("PFG_PVRTC_RGBA2", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::PvrtcRgba2Srgb => desc!("PFG_PVRTC_RGBA2_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::PvrtcRgb4 => desc!("PFG_PVRTC_RGB4", 3, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::PvrtcRgb4Srgb => desc!("PFG_PVRTC_RGB4_SRGB", 3, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::PvrtcRgba4 => desc!("PFG_PVRTC_RGBA4", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::PvrtcRgba4Srgb => desc!("PFG_PVRTC_RGBA4_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Pvrtc2Bpp2 => desc!("PFG_PVRTC2_2BPP", 3, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Pvrtc2Bpp2Srgb => desc!("PFG_PVRTC2_2BPP_SRGB", 3, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Pvrtc2Bpp4 => desc!("PFG_PVRTC2_4BPP", 3, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Pvrtc2Bpp4Srgb => desc!("PFG_PVRTC2_4BPP_SRGB", 3, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Etc1Rgb8Unorm => desc!("PFG_ETC1_RGB8_UNORM", 3, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Etc2Rgb8Unorm => desc!("PFG_ETC2_RGB8_UNORM", 3, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Etc2Rgb8UnormSrgb => desc!("PFG_ETC2_RGB8_UNORM_SRGB", 3, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Etc2Rgba8Unorm => desc!("PFG_ETC2_RGBA8_UNORM", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Etc2Rgba8UnormSrgb => desc!("PFG_ETC2_RGBA8_UNORM_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Etc2Rgb8a1Unorm => desc!("PFG_ETC2_RGB8A1_UNORM", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::Etc2Rgb8a1UnormSrgb => desc!("PFG_ETC2_RGB8A1_UNORM_SRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::EacR11Unorm => desc!("PFG_EAC_R11_UNORM", 1, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::EacR11Snorm => desc!("PFG_EAC_R11_SNORM", 1, 0, Other, COMPRESSED_COMMON | SIGNED),
        PixelFormatGpu::EacR11g11Unorm => desc!("PFG_EAC_R11G11_UNORM", 2, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::EacR11g11Snorm => desc!("PFG_EAC_R11G11_SNORM", 2, 0, Other, COMPRESSED_COMMON | SIGNED),
        PixelFormatGpu::AtcRgb => desc!("PFG_ATC_RGB", 3, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AtcRgbaExplicitAlpha => desc!("PFG_ATC_RGBA_EXPLICIT_ALPHA", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AtcRgbaInterpolatedAlpha => desc!("PFG_ATC_RGBA_INTERPOLATED_ALPHA", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm4x4Ldr => desc!("PFG_ASTC_RGBA_UNORM_4X4_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm5x4Ldr => desc!("PFG_ASTC_RGBA_UNORM_5X4_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm5x5Ldr => desc!("PFG_ASTC_RGBA_UNORM_5X5_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm6x5Ldr => desc!("PFG_ASTC_RGBA_UNORM_6X5_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm6x6Ldr => desc!("PFG_ASTC_RGBA_UNORM_6X6_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm8x5Ldr => desc!("PFG_ASTC_RGBA_UNORM_8X5_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm8x6Ldr => desc!("PFG_ASTC_RGBA_UNORM_8X6_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm8x8Ldr => desc!("PFG_ASTC_RGBA_UNORM_8X8_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm10x5Ldr => desc!("PFG_ASTC_RGBA_UNORM_10X5_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm10x6Ldr => desc!("PFG_ASTC_RGBA_UNORM_10X6_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm10x8Ldr => desc!("PFG_ASTC_RGBA_UNORM_10X8_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm10x10Ldr => desc!("PFG_ASTC_RGBA_UNORM_10X10_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm12x10Ldr => desc!("PFG_ASTC_RGBA_UNORM_12X10_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm12x12Ldr => desc!("PFG_ASTC_RGBA_UNORM_12X12_LDR", 4, 0, Other, COMPRESSED_COMMON),
        PixelFormatGpu::AstcRgbaUnorm4x4Srgb => desc!("PFG_ASTC_RGBA_UNORM_4X4_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm5x4Srgb => desc!("PFG_ASTC_RGBA_UNORM_5X4_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm5x5Srgb => desc!("PFG_ASTC_RGBA_UNORM_5X5_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm6x5Srgb => desc!("PFG_ASTC_RGBA_UNORM_6X5_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm6x6Srgb => desc!("PFG_ASTC_RGBA_UNORM_6X6_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm8x5Srgb => desc!("PFG_ASTC_RGBA_UNORM_8X5_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm8x6Srgb => desc!("PFG_ASTC_RGBA_UNORM_8X6_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm8x8Srgb => desc!("PFG_ASTC_RGBA_UNORM_8X8_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm10x5Srgb => desc!("PFG_ASTC_RGBA_UNORM_10X5_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm10x6Srgb => desc!("PFG_ASTC_RGBA_UNORM_10X6_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm10x8Srgb => desc!("PFG_ASTC_RGBA_UNORM_10X8_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm10x10Srgb => desc!("PFG_ASTC_RGBA_UNORM_10X10_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm12x10Srgb => desc!("PFG_ASTC_RGBA_UNORM_12X10_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::AstcRgbaUnorm12x12Srgb => desc!("PFG_ASTC_RGBA_UNORM_12X12_sRGB", 4, 0, Other, COMPRESSED_COMMON | SRGB),
        PixelFormatGpu::Count => desc!("PFG_COUNT", 1, 0, Other, ),
    }
}
