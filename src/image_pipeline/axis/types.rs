//! Axis role types

use ndarray::ArrayView3;

/// Number of entries on a color-plane axis.
pub const COLOR_PLANES: usize = 3;

/// Which declared axis, if any, carries the color planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorAxisPosition {
    /// Two-dimensional grayscale frame.
    None,
    /// Descriptor `[3, nx, ny]`: planes interleaved per pixel.
    First,
    /// Descriptor `[nx, 3, ny]`: planes interleaved per row.
    Middle,
    /// Descriptor `[nx, ny, 3]`: one full plane after another.
    Last,
}

impl ColorAxisPosition {
    /// Row-major shape of the raw buffer, slowest axis first.
    pub(crate) fn memory_shape(self, nx: usize, ny: usize) -> (usize, usize, usize) {
        match self {
            ColorAxisPosition::None => (ny, nx, 1),
            ColorAxisPosition::First => (ny, nx, COLOR_PLANES),
            ColorAxisPosition::Middle => (ny, COLOR_PLANES, nx),
            ColorAxisPosition::Last => (COLOR_PLANES, ny, nx),
        }
    }

    /// Reorders a view laid out as [`Self::memory_shape`] into `(ny, nx, nz)`.
    pub(crate) fn to_canonical<'a, T>(self, view: ArrayView3<'a, T>) -> ArrayView3<'a, T> {
        match self {
            ColorAxisPosition::None | ColorAxisPosition::First => view,
            ColorAxisPosition::Middle => view.permuted_axes([0, 2, 1]),
            ColorAxisPosition::Last => view.permuted_axes([1, 2, 0]),
        }
    }

    pub fn nz(self) -> usize {
        match self {
            ColorAxisPosition::None => 1,
            _ => COLOR_PLANES,
        }
    }
}

/// Resolved spatial and color extents of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalShape {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub color_axis: ColorAxisPosition,
}

impl CanonicalShape {
    pub fn len(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Larger of the two spatial extents.
    pub fn max_extent(&self) -> usize {
        self.nx.max(self.ny)
    }

    pub fn dim(&self) -> (usize, usize, usize) {
        (self.ny, self.nx, self.nz)
    }
}
