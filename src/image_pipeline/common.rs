//! Common utilities module
//!
//! Error type and stage timing shared across the frame-to-image pipeline.

pub mod error;
pub mod timing;

pub use error::{PipelineError, Result};
pub use timing::{PipelineTimings, StepTiming, Timer};
