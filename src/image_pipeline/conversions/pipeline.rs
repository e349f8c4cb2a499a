use tracing::{debug, instrument, warn};

use crate::image_pipeline::{
    common::{
        error::{PipelineError, Result},
        timing::PipelineTimings,
    },
    conversions::{
        frame_to_image::FrameConverter,
        sink::{ImageSink, NullSink},
        state::DisplayState,
        types::{ConvertConfig, ConvertedFrame, ImageResult},
    },
    frame::Frame,
    normalize::{ChannelStatistics, ImageStatistics, ManualLimits, ScalePolicy},
};

/// Converts frames as they arrive and hands each good image to a sink.
///
/// Frames must be fed from a single consumer; the configuration and the
/// display state are plain fields with no locking.
pub struct ChannelToImagePipeline<S: ImageSink> {
    converter: FrameConverter,
    sink: S,
    config: ConvertConfig,
    state: DisplayState,
}

impl ChannelToImagePipeline<NullSink> {
    pub fn new(config: ConvertConfig) -> Self {
        Self::with_sink(NullSink, config)
    }
}

impl<S: ImageSink> ChannelToImagePipeline<S> {
    pub fn with_sink(sink: S, config: ConvertConfig) -> Self {
        Self {
            converter: FrameConverter::new(),
            sink,
            config,
            state: DisplayState::new(),
        }
    }

    /// Converts `frame`, records it as the latest image and presents it.
    ///
    /// A frame that fails to convert is dropped and the display state is left
    /// exactly as it was.
    #[instrument(skip(self, frame), fields(dims = ?frame.descriptor.sizes(), pixel_type = %frame.pixel_type()))]
    pub fn process(&mut self, frame: &Frame<'_>) -> Result<()> {
        let converted = self
            .converter
            .convert(frame, &self.config)
            .inspect_err(|e| warn!(error = %e, "Dropping frame"))?;
        self.present(converted)
    }

    pub fn process_with_timings(&mut self, frame: &Frame<'_>) -> Result<PipelineTimings> {
        let (converted, timings) = self
            .converter
            .convert_with_timings(frame, &self.config)
            .inspect_err(|e| warn!(error = %e, "Dropping frame"))?;
        self.present(converted)?;
        Ok(timings)
    }

    fn present(&mut self, converted: ConvertedFrame) -> Result<()> {
        let image = self.state.record(converted);
        debug!(
            nx = image.nx(),
            ny = image.ny(),
            nz = image.nz(),
            compression = image.compression,
            "Frame converted"
        );
        self.sink.present(image, self.config.image_size)
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConvertConfig) {
        self.config = config;
    }

    pub fn set_manual_limits(&mut self, low: f64, high: f64) -> Result<()> {
        self.config.manual_limits = ManualLimits::new(low, high)?;
        Ok(())
    }

    pub fn manual_limits(&self) -> ManualLimits {
        self.config.manual_limits
    }

    pub fn set_policy(&mut self, policy: ScalePolicy) {
        self.config.policy = policy;
    }

    pub fn set_show_limits(&mut self, show: bool) {
        self.config.show_limits = show;
    }

    pub fn set_image_size(&mut self, image_size: usize) -> Result<()> {
        if image_size == 0 {
            return Err(PipelineError::InvalidImageSize(image_size));
        }
        self.config.image_size = image_size;
        Ok(())
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn latest(&self) -> Option<&ImageResult> {
        self.state.latest()
    }

    pub fn channel_stats(&self) -> ChannelStatistics {
        self.state.channel_stats()
    }

    pub fn image_stats(&self) -> ImageStatistics {
        self.state.image_stats()
    }

    pub fn clear(&mut self) {
        self.state.clear();
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
