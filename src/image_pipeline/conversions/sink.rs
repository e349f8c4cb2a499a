use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::conversions::types::ImageResult;

/// Downstream consumer of converted images, typically a display widget.
pub trait ImageSink {
    fn present(&mut self, image: &ImageResult, image_size: usize) -> Result<()>;
}

/// Sink that drops every image.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ImageSink for NullSink {
    fn present(&mut self, _image: &ImageResult, _image_size: usize) -> Result<()> {
        Ok(())
    }
}
