//! Axis interpretation module
//!
//! Locates the color-plane axis of an incoming frame and produces a view of the
//! raw buffer in canonical `(ny, nx, nz)` order.

mod interpreter;
pub mod types;

pub use interpreter::{canonical_view, resolve_shape};
pub use types::{CanonicalShape, ColorAxisPosition};
