//! Frame conversion module
//!
//! Orchestrates axis interpretation, normalization and downsampling for each
//! incoming frame, and keeps the last good result for display.

mod frame_to_image;
mod pipeline;
mod sink;
mod state;
pub mod types;


pub use frame_to_image::FrameConverter;
pub use pipeline::ChannelToImagePipeline;
pub use sink::{ImageSink, NullSink};
pub use state::DisplayState;
pub use types::{ConvertConfig, ConvertConfigBuilder, ConvertedFrame, ImageResult};
