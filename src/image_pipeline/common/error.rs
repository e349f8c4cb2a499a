use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("ndim not 2 or 3: got {0}")]
    InvalidDimensionality(usize),

    #[error("no axis has size 3 in 3-D frame with sizes {0:?}")]
    MissingColorPlaneAxis(Vec<usize>),

    #[error("buffer holds {actual} elements but dimensions {dims:?} require {expected}")]
    BufferSizeMismatch {
        dims: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("invalid manual limits: low={0}, high={1}")]
    InvalidManualLimits(f64, f64),

    #[error("frame has a zero-sized axis: {0:?}")]
    EmptyFrame(Vec<usize>),

    #[error("invalid image size: {0}")]
    InvalidImageSize(usize),

    #[error("image sink failed: {0}")]
    SinkError(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
