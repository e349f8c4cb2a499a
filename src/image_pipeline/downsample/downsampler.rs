use ndarray::{ArrayView3, s};
use tracing::debug;

use crate::image_pipeline::axis::{CanonicalShape, resolve_shape};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::frame::FrameDescriptor;

/// Smallest stride that brings the larger spatial extent of `shape` to at most
/// `image_size`, i.e. `ceil(max(nx, ny) / image_size)`, never below 1.
pub fn compression_for(shape: &CanonicalShape, image_size: usize) -> Result<usize> {
    if image_size == 0 {
        return Err(PipelineError::InvalidImageSize(image_size));
    }
    Ok(shape.max_extent().div_ceil(image_size).max(1))
}

/// Keeps every `stride`-th row and column of a canonical view, starting at 0.
///
/// The output extents are re-resolved from `descriptor` with the stride
/// applied, so each spatial axis holds `floor(n / stride)` samples. The color
/// planes are never subsampled. With a stride of 1 the view is returned as is.
pub fn downsample<'a, T>(
    view: ArrayView3<'a, T>,
    descriptor: &FrameDescriptor,
    stride: usize,
) -> Result<(ArrayView3<'a, T>, CanonicalShape)> {
    let shape = resolve_shape(descriptor, stride)?;
    if stride <= 1 {
        return Ok((view, shape));
    }

    let step = stride as isize;
    let strided = view.slice_move(s![..shape.ny * stride;step, ..shape.nx * stride;step, ..]);

    debug!(
        stride,
        nx = shape.nx,
        ny = shape.ny,
        "Downsampled frame"
    );

    if strided.dim() != shape.dim() {
        return Err(PipelineError::BufferSizeMismatch {
            dims: descriptor.sizes(),
            expected: shape.len(),
            actual: strided.len(),
        });
    }
    Ok((strided, shape))
}
