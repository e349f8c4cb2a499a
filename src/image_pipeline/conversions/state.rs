use crate::image_pipeline::conversions::types::{ConvertedFrame, ImageResult};
use crate::image_pipeline::normalize::{ChannelStatistics, ImageStatistics};

/// Last good image and the most recently reported statistics.
///
/// Statistics are only overwritten by frames that carry them, so turning limit
/// reporting off leaves the last reported values in place.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    latest: Option<ImageResult>,
    channel_stats: ChannelStatistics,
    image_stats: ImageStatistics,
    frames_recorded: u64,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, frame: ConvertedFrame) -> &ImageResult {
        if let Some(stats) = frame.channel_stats {
            self.channel_stats = stats;
        }
        if let Some(stats) = frame.image_stats {
            self.image_stats = stats;
        }
        self.frames_recorded += 1;
        self.latest.insert(frame.image)
    }

    pub fn latest(&self) -> Option<&ImageResult> {
        self.latest.as_ref()
    }

    pub fn channel_stats(&self) -> ChannelStatistics {
        self.channel_stats
    }

    pub fn image_stats(&self) -> ImageStatistics {
        self.image_stats
    }

    pub fn frames_recorded(&self) -> u64 {
        self.frames_recorded
    }

    /// Drops the retained image; statistics are kept.
    pub fn clear(&mut self) {
        self.latest = None;
    }
}
