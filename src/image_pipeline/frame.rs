//! Incoming frame types
//!
//! A frame is a borrowed flat sample buffer plus the dimension descriptor that
//! describes how to read it.

mod sample;
pub mod types;

pub use sample::{RawSamples, Sample};
pub use types::{AxisDimension, Frame, FrameDescriptor, PixelType};
