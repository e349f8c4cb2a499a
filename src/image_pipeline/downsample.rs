//! Spatial downsampling module
//!
//! Picks the integer stride that fits a frame inside the target display size
//! and subsamples both spatial axes by it.

mod downsampler;

pub use downsampler::{compression_for, downsample};
