use ndarray::ArrayView3;
use tracing::debug;

use crate::image_pipeline::axis::types::{COLOR_PLANES, CanonicalShape, ColorAxisPosition};
use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::frame::FrameDescriptor;

/// Resolves the axis roles of `descriptor`, with both spatial extents
/// floor-divided by `stride`.
///
/// Only the spatial axes are affected by the stride; the color-plane axis keeps
/// its three entries. A stride of 0 is treated as 1.
pub fn resolve_shape(descriptor: &FrameDescriptor, stride: usize) -> Result<CanonicalShape> {
    let sizes = descriptor.sizes();
    let stride = stride.max(1);

    let (color_axis, nx, ny) = match sizes.as_slice() {
        &[nx, ny] => (ColorAxisPosition::None, nx, ny),
        &[c, nx, ny] if c == COLOR_PLANES => (ColorAxisPosition::First, nx, ny),
        &[nx, c, ny] if c == COLOR_PLANES => (ColorAxisPosition::Middle, nx, ny),
        &[nx, ny, c] if c == COLOR_PLANES => (ColorAxisPosition::Last, nx, ny),
        &[_, _, _] => return Err(PipelineError::MissingColorPlaneAxis(descriptor.sizes())),
        _ => return Err(PipelineError::InvalidDimensionality(descriptor.ndim())),
    };

    if nx == 0 || ny == 0 {
        return Err(PipelineError::EmptyFrame(sizes));
    }

    Ok(CanonicalShape {
        nx: nx / stride,
        ny: ny / stride,
        nz: color_axis.nz(),
        color_axis,
    })
}

/// Reshapes `data` into a `(ny, nx, nz)` view according to `descriptor`.
///
/// The returned view borrows `data`; when the color-plane axis is not the
/// fastest-varying one the view is a transposed, non-contiguous window onto
/// the same memory.
pub fn canonical_view<'a, T>(
    data: &'a [T],
    descriptor: &FrameDescriptor,
) -> Result<(ArrayView3<'a, T>, CanonicalShape)> {
    let shape = resolve_shape(descriptor, 1)?;

    let mismatch = || PipelineError::BufferSizeMismatch {
        dims: descriptor.sizes(),
        expected: descriptor.element_count().unwrap_or(usize::MAX),
        actual: data.len(),
    };
    if descriptor.element_count() != Some(data.len()) {
        return Err(mismatch());
    }

    let raw = ArrayView3::from_shape(shape.color_axis.memory_shape(shape.nx, shape.ny), data)
        .map_err(|_| mismatch())?;
    let view = shape.color_axis.to_canonical(raw);

    debug!(
        nx = shape.nx,
        ny = shape.ny,
        nz = shape.nz,
        color_axis = ?shape.color_axis,
        "Resolved frame axes"
    );

    Ok((view, shape))
}
