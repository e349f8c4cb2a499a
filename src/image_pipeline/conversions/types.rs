//! Conversion configuration and result types

use ndarray::Array3;

use crate::image_pipeline::axis::CanonicalShape;
use crate::image_pipeline::frame::PixelType;
use crate::image_pipeline::normalize::{ChannelStatistics, ImageStatistics, ManualLimits, ScalePolicy};

/// Default width and height of the generated image.
pub const DEFAULT_IMAGE_SIZE: usize = 800;

/// Settings applied to every frame
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Largest spatial extent of the generated image
    pub image_size: usize,
    /// How raw values are mapped to bytes
    pub policy: ScalePolicy,
    /// Display bounds used by [`ScalePolicy::Manual`]
    pub manual_limits: ManualLimits,
    /// Whether channel and image statistics are computed
    pub show_limits: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            policy: ScalePolicy::PassThrough,
            manual_limits: ManualLimits::default(),
            show_limits: false,
        }
    }
}

impl ConvertConfig {
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::default()
    }
}

/// Builder for ConvertConfig
#[derive(Default)]
pub struct ConvertConfigBuilder {
    image_size: Option<usize>,
    policy: Option<ScalePolicy>,
    manual_limits: Option<ManualLimits>,
    show_limits: Option<bool>,
}

impl ConvertConfigBuilder {
    pub fn image_size(mut self, image_size: usize) -> Self {
        self.image_size = Some(image_size);
        self
    }

    pub fn policy(mut self, policy: ScalePolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn manual_limits(mut self, limits: ManualLimits) -> Self {
        self.manual_limits = Some(limits);
        self
    }

    pub fn show_limits(mut self, show: bool) -> Self {
        self.show_limits = Some(show);
        self
    }

    pub fn build(self) -> ConvertConfig {
        let default = ConvertConfig::default();
        ConvertConfig {
            image_size: self.image_size.unwrap_or(default.image_size),
            policy: self.policy.unwrap_or(default.policy),
            manual_limits: self.manual_limits.unwrap_or(default.manual_limits),
            show_limits: self.show_limits.unwrap_or(default.show_limits),
        }
    }
}

/// Normalized, downsampled image produced from one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResult {
    /// Bytes in `(ny, nx, nz)` standard layout
    pub image: Array3<u8>,
    /// Extents of `image`
    pub shape: CanonicalShape,
    /// Full-resolution extents of the frame it came from
    pub source_shape: CanonicalShape,
    /// Element type of the frame it came from
    pub pixel_type: PixelType,
    /// Downsample stride that was applied
    pub compression: usize,
}

impl ImageResult {
    pub fn nx(&self) -> usize {
        self.shape.nx
    }

    pub fn ny(&self) -> usize {
        self.shape.ny
    }

    pub fn nz(&self) -> usize {
        self.shape.nz
    }

    /// Row-major bytes, color planes innermost.
    pub fn as_bytes(&self) -> &[u8] {
        // always built in standard layout
        self.image.as_slice().unwrap_or_default()
    }
}

/// Everything one conversion call produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFrame {
    pub image: ImageResult,
    pub channel_stats: Option<ChannelStatistics>,
    pub image_stats: Option<ImageStatistics>,
}
