//! Frame description types

use std::fmt;

use crate::image_pipeline::frame::sample::RawSamples;

/// Element type of an incoming sample buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl PixelType {
    pub fn is_byte(self) -> bool {
        self == PixelType::U8
    }

    pub fn bits(self) -> u32 {
        match self {
            PixelType::I8 | PixelType::U8 => 8,
            PixelType::I16 | PixelType::U16 => 16,
            PixelType::I32 | PixelType::U32 | PixelType::F32 => 32,
            PixelType::I64 | PixelType::U64 | PixelType::F64 => 64,
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PixelType::I8 => "int8",
            PixelType::U8 => "uint8",
            PixelType::I16 => "int16",
            PixelType::U16 => "uint16",
            PixelType::I32 => "int32",
            PixelType::U32 => "uint32",
            PixelType::I64 => "int64",
            PixelType::U64 => "uint64",
            PixelType::F32 => "float32",
            PixelType::F64 => "float64",
        };
        f.write_str(name)
    }
}

/// One entry of the dimension descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisDimension {
    pub size: usize,
}

/// Ordered per-axis sizes of one frame, fastest-varying axis first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDescriptor {
    dims: Vec<AxisDimension>,
}

impl FrameDescriptor {
    pub fn new(dims: Vec<AxisDimension>) -> Self {
        Self { dims }
    }

    pub fn from_sizes(sizes: &[usize]) -> Self {
        Self {
            dims: sizes.iter().map(|&size| AxisDimension { size }).collect(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[AxisDimension] {
        &self.dims
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.dims.iter().map(|d| d.size).collect()
    }

    /// Product of all axis sizes, `None` on overflow.
    pub fn element_count(&self) -> Option<usize> {
        self.dims
            .iter()
            .try_fold(1usize, |acc, d| acc.checked_mul(d.size))
    }
}

/// A raw sample buffer together with its descriptor.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub samples: RawSamples<'a>,
    pub descriptor: FrameDescriptor,
}

impl<'a> Frame<'a> {
    pub fn new(samples: impl Into<RawSamples<'a>>, descriptor: FrameDescriptor) -> Self {
        Self {
            samples: samples.into(),
            descriptor,
        }
    }

    pub fn pixel_type(&self) -> PixelType {
        self.samples.pixel_type()
    }
}
