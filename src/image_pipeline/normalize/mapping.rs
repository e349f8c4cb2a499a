use crate::image_pipeline::frame::Sample;

const BYTE_MAX: f64 = 255.0;

/// Minimum and maximum of a sample buffer, ignoring NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
    pub has_nan: bool,
}

impl Extrema {
    /// Single pass over `data`. Returns `None` when no sample is a number.
    pub fn scan<T: Sample>(data: &[T]) -> Option<Self> {
        let mut has_nan = false;
        let mut bounds: Option<(f64, f64)> = None;
        for value in data.iter().map(|v| v.to_f64()) {
            if value.is_nan() {
                has_nan = true;
                continue;
            }
            bounds = Some(match bounds {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            });
        }
        bounds.map(|(min, max)| Self { min, max, has_nan })
    }
}

/// Sample to byte transfer function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ByteMapping {
    /// Byte samples copied as-is.
    Identity,
    /// Linear map of `[low, high]` onto `[0, 255]`, saturating outside the domain.
    /// When `low == high`, values at the bound map to 255.
    Linear { low: f64, high: f64 },
}

impl ByteMapping {
    #[inline]
    pub fn apply(&self, value: f64) -> u8 {
        match *self {
            ByteMapping::Identity => value as u8,
            ByteMapping::Linear { low, high } => {
                // upper bound first so a degenerate domain lands on 255
                if value.is_nan() {
                    0
                } else if value >= high {
                    u8::MAX
                } else if value <= low {
                    0
                } else {
                    ((value - low) / (high - low) * BYTE_MAX).round() as u8
                }
            }
        }
    }

    #[inline]
    pub fn apply_sample<T: Sample>(&self, value: T) -> u8 {
        self.apply(value.to_f64())
    }
}
