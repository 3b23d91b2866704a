//! Builder pattern implementation for [`ConversionOptions`].

use crate::options::{ConversionOptions, CopyPolicy};

/// Builder for conversion options with convenient configuration methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionOptionsBuilder {
    vertical_flip: Option<bool>,
    copy_policy: Option<CopyPolicy>,
}

impl ConversionOptionsBuilder {
    /// Create a new conversion options builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the image is flipped vertically while converting.
    ///
    /// Defaults to `false`.
    pub fn vertical_flip(mut self, flip: bool) -> Self {
        self.vertical_flip = Some(flip);
        self
    }

    /// Set how copies between regions of different sizes are handled.
    ///
    /// Defaults to [`CopyPolicy::BestEffort`].
    pub fn copy_policy(mut self, policy: CopyPolicy) -> Self {
        self.copy_policy = Some(policy);
        self
    }

    /// Build the options using the configured values or defaults.
    pub fn build(self) -> ConversionOptions {
        ConversionOptions {
            vertical_flip: self.vertical_flip.unwrap_or(false),
            copy_policy: self.copy_policy.unwrap_or_default(),
        }
    }
}
