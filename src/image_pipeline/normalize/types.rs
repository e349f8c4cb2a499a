//! Normalization configuration and statistics types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// How raw samples are brought into the byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalePolicy {
    /// Byte input is copied unchanged; any other type is scaled as [`ScalePolicy::Auto`].
    #[default]
    PassThrough,
    /// Scale the frame's own minimum and maximum to 0 and 255.
    Auto,
    /// Scale the configured [`ManualLimits`] to 0 and 255.
    Manual,
}

/// Externally configured display bounds used by [`ScalePolicy::Manual`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualLimits {
    low: f64,
    high: f64,
}

impl ManualLimits {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let limits = Self { low, high };
        limits.validate()?;
        Ok(limits)
    }

    /// Builds limits without validation, for exercising the defensive checks.
    #[cfg(test)]
    pub(crate) fn unchecked(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(PipelineError::InvalidManualLimits(self.low, self.high));
        }
        Ok(())
    }
}

impl Default for ManualLimits {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 255.0,
        }
    }
}

/// Extrema of the raw input buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStatistics {
    pub data_min: f64,
    pub data_max: f64,
}

impl Default for ChannelStatistics {
    fn default() -> Self {
        Self {
            data_min: 0.0,
            data_max: 255.0,
        }
    }
}

/// Extrema of the normalized byte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageStatistics {
    pub image_min: u8,
    pub image_max: u8,
}

impl Default for ImageStatistics {
    fn default() -> Self {
        Self {
            image_min: 0,
            image_max: 255,
        }
    }
}
