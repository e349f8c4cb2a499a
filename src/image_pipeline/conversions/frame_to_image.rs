use ndarray::Array3;
use tracing::{info_span, instrument};

use crate::image_pipeline::{
    axis::canonical_view,
    common::{
        error::{PipelineError, Result},
        timing::{PipelineTimings, Timer},
    },
    conversions::types::{ConvertConfig, ConvertedFrame, ImageResult},
    downsample::{compression_for, downsample},
    frame::{Frame, FrameDescriptor, Sample},
    normalize,
};

/// Stateless frame to byte-image transformation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameConverter;

impl FrameConverter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip_all, fields(pixel_type = %frame.pixel_type(), samples = frame.samples.len()))]
    pub fn convert(&self, frame: &Frame<'_>, config: &ConvertConfig) -> Result<ConvertedFrame> {
        self.convert_with_timings(frame, config)
            .map(|(converted, _)| converted)
    }

    pub fn convert_with_timings(
        &self,
        frame: &Frame<'_>,
        config: &ConvertConfig,
    ) -> Result<(ConvertedFrame, PipelineTimings)> {
        crate::with_samples!(frame.samples, data => {
            self.convert_samples(data, &frame.descriptor, config)
        })
    }

    /// Runs the full transformation over a typed buffer.
    ///
    /// Nothing is retained from `data` once this returns; the result owns a
    /// freshly built byte image.
    pub fn convert_samples<T: Sample>(
        &self,
        data: &[T],
        descriptor: &FrameDescriptor,
        config: &ConvertConfig,
    ) -> Result<(ConvertedFrame, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("interpret_axes");
        let (view, source_shape, compression) = {
            let _span = info_span!("interpret_axes").entered();
            let (view, source_shape) = canonical_view(data, descriptor)?;
            let compression = compression_for(&source_shape, config.image_size)?;
            (view, source_shape, compression)
        };
        timings.record(timer);

        let timer = Timer::start("scan_extrema");
        let normalization = {
            let _span = info_span!("scan_extrema", show_limits = config.show_limits).entered();
            normalize::plan(data, config.policy, &config.manual_limits, config.show_limits)?
        };
        timings.record(timer);

        let timer = Timer::start("downsample");
        let (strided, shape) = {
            let _span = info_span!("downsample", compression).entered();
            downsample(view, descriptor, compression)?
        };
        timings.record(timer);

        let timer = Timer::start("map_bytes");
        let image = {
            let _span = info_span!("map_bytes").entered();
            let mapping = normalization.mapping;
            let bytes: Vec<u8> = strided.iter().map(|&v| mapping.apply_sample(v)).collect();
            Array3::from_shape_vec(shape.dim(), bytes).map_err(|_| {
                PipelineError::BufferSizeMismatch {
                    dims: descriptor.sizes(),
                    expected: shape.len(),
                    actual: strided.len(),
                }
            })?
        };
        timings.record(timer);

        let converted = ConvertedFrame {
            image: ImageResult {
                image,
                shape,
                source_shape,
                pixel_type: T::PIXEL_TYPE,
                compression,
            },
            channel_stats: normalization.channel_stats,
            image_stats: normalization.image_stats,
        };
        Ok((converted, timings))
    }
}
