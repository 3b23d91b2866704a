//! Options shared by the conversion and copy operations.

/// How a copy between regions of different sizes is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CopyPolicy {
    /// Copy the overlapping top-left part and log a warning.
    #[default]
    BestEffort,
    /// Reject the copy with [`PixelFormatGpuError::Copy`](crate::PixelFormatGpuError::Copy).
    Strict,
}

/// Options for [`bulk_pixel_conversion`](crate::bulk_pixel_conversion) and
/// [`copy_texture`](crate::copy_texture).
///
/// Build these with [`ConversionOptionsBuilder`](crate::ConversionOptionsBuilder), or use the
/// defaults: no flip, [`CopyPolicy::BestEffort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConversionOptions {
    /// Write source row `y` to destination row `height - 1 - y`.
    pub vertical_flip: bool,
    /// How same-format copies treat regions of different sizes.
    pub copy_policy: CopyPolicy,
}
