//! Frame to display-image pipeline
//!
//! Turns detector array frames (2-D grayscale or 3-D with a color-plane axis,
//! any integer or float element type) into byte images sized for display.
//! Each frame goes through axis interpretation, intensity normalization and
//! spatial downsampling, with separate modules for each stage and for the
//! per-frame orchestration.

pub mod axis;
pub mod common;
pub mod conversions;
pub mod downsample;
pub mod frame;
pub mod normalize;

pub use common::{
    PipelineError,
    PipelineTimings,
    Result,
};

pub use frame::{
    AxisDimension,
    Frame,
    FrameDescriptor,
    PixelType,
    RawSamples,
    Sample,
};

pub use axis::{
    CanonicalShape,
    ColorAxisPosition,
};

pub use normalize::{
    ByteMapping,
    ChannelStatistics,
    ImageStatistics,
    ManualLimits,
    ScalePolicy,
};

pub use conversions::{
    ChannelToImagePipeline,
    ConvertConfig,
    ConvertConfigBuilder,
    ConvertedFrame,
    DisplayState,
    FrameConverter,
    ImageResult,
    ImageSink,
    NullSink,
};
