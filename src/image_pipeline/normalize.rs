//! Intensity normalization module
//!
//! Maps raw sample values onto the 0-255 byte range under a [`ScalePolicy`]
//! and derives the channel and image statistics reported alongside a frame.

mod mapping;
mod normalizer;
pub mod types;

pub use mapping::{ByteMapping, Extrema};
pub use normalizer::{Normalization, plan};
pub use types::{ChannelStatistics, ImageStatistics, ManualLimits, ScalePolicy};
