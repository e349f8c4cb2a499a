use crate::image_pipeline::frame::types::PixelType;

/// Numeric element that can appear in a raw sample buffer.
pub trait Sample: Copy + PartialOrd + Send + Sync + 'static {
    const PIXEL_TYPE: PixelType;

    fn to_f64(self) -> f64;
}

/// Borrowed flat sample buffer tagged with its element type.
#[derive(Debug, Clone, Copy)]
pub enum RawSamples<'a> {
    I8(&'a [i8]),
    U8(&'a [u8]),
    I16(&'a [i16]),
    U16(&'a [u16]),
    I32(&'a [i32]),
    U32(&'a [u32]),
    I64(&'a [i64]),
    U64(&'a [u64]),
    F32(&'a [f32]),
    F64(&'a [f64]),
}

macro_rules! impl_sample {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Sample for $ty {
                const PIXEL_TYPE: PixelType = PixelType::$variant;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl<'a> From<&'a [$ty]> for RawSamples<'a> {
                fn from(data: &'a [$ty]) -> Self {
                    RawSamples::$variant(data)
                }
            }

            impl<'a> From<&'a Vec<$ty>> for RawSamples<'a> {
                fn from(data: &'a Vec<$ty>) -> Self {
                    RawSamples::$variant(data.as_slice())
                }
            }
        )*

        impl RawSamples<'_> {
            pub fn pixel_type(&self) -> PixelType {
                match self {
                    $(RawSamples::$variant(_) => PixelType::$variant,)*
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    $(RawSamples::$variant(data) => data.len(),)*
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }
        }
    };
}

impl_sample!(
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
);

/// Runs `$body` with `$data` bound to the typed slice inside a [`RawSamples`].
#[macro_export]
macro_rules! with_samples {
    ($samples:expr, $data:ident => $body:expr) => {
        match $samples {
            $crate::image_pipeline::RawSamples::I8($data) => $body,
            $crate::image_pipeline::RawSamples::U8($data) => $body,
            $crate::image_pipeline::RawSamples::I16($data) => $body,
            $crate::image_pipeline::RawSamples::U16($data) => $body,
            $crate::image_pipeline::RawSamples::I32($data) => $body,
            $crate::image_pipeline::RawSamples::U32($data) => $body,
            $crate::image_pipeline::RawSamples::I64($data) => $body,
            $crate::image_pipeline::RawSamples::U64($data) => $body,
            $crate::image_pipeline::RawSamples::F32($data) => $body,
            $crate::image_pipeline::RawSamples::F64($data) => $body,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_samples_report_type_and_len() {
        let data: Vec<i16> = vec![-3, 0, 7];
        let samples = RawSamples::from(&data);
        assert_eq!(samples.pixel_type(), PixelType::I16);
        assert_eq!(samples.len(), 3);
        assert!(!samples.is_empty());
    }

    #[test]
    fn test_with_samples_dispatches_on_type() {
        let data = [1u32, 5, 9];
        let samples = RawSamples::from(&data[..]);
        let sum = with_samples!(samples, data => data.iter().map(|v| v.to_f64()).sum::<f64>());
        assert_eq!(sum, 15.0);
    }
}
