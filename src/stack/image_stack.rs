// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use std::fmt;

use ndarray::{Array2, Array3, ArrayView2, Axis};

use crate::stack::error::{StackError, StackResult};

/// On-disk sample type of a stack.
///
/// Pixel data is always analysed as `f64`; the original format is kept so
/// callers can tell integer-valued intensities from real-valued ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl SampleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SampleFormat::U8 => "u8",
            SampleFormat::U16 => "u16",
            SampleFormat::U32 => "u32",
            SampleFormat::U64 => "u64",
            SampleFormat::I8 => "i8",
            SampleFormat::I16 => "i16",
            SampleFormat::I32 => "i32",
            SampleFormat::I64 => "i64",
            SampleFormat::F32 => "f32",
            SampleFormat::F64 => "f64",
        }
    }

    /// True for integer sample types.
    pub fn is_integer(&self) -> bool {
        !matches!(self, SampleFormat::F32 | SampleFormat::F64)
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time series of equally sized grayscale frames, indexed `(frame, y, x)`.
///
/// Construction guarantees at least one frame of non-zero size.
///
/// # Examples
/// ```
/// use ndarray::Array3;
/// use synapse_analysis::stack::{ImageStack, SampleFormat};
///
/// let stack = ImageStack::new(Array3::zeros((3, 4, 5)), SampleFormat::U16).unwrap();
/// assert_eq!(stack.shape(), (3, 4, 5));
/// assert_eq!(stack.to_string(), "(3, 4, 5)");
/// ```
#[derive(Debug, Clone)]
pub struct ImageStack {
    data: Array3<f64>,
    sample_format: SampleFormat,
}

impl ImageStack {
    pub fn new(data: Array3<f64>, sample_format: SampleFormat) -> StackResult<Self> {
        if data.is_empty() {
            return Err(StackError::Empty);
        }
        Ok(Self {
            data,
            sample_format,
        })
    }

    /// Assemble a stack from individual frames, which must share one shape.
    pub fn from_frames(frames: Vec<Array2<f64>>, sample_format: SampleFormat) -> StackResult<Self> {
        let first = frames.first().ok_or(StackError::Empty)?;
        let (height, width) = first.dim();

        for (page, frame) in frames.iter().enumerate() {
            let (found_height, found_width) = frame.dim();
            if (found_height, found_width) != (height, width) {
                return Err(StackError::DimensionMismatch {
                    page,
                    expected_width: width,
                    expected_height: height,
                    found_width,
                    found_height,
                });
            }
        }

        let views: Vec<ArrayView2<f64>> = frames.iter().map(|f| f.view()).collect();
        let data = ndarray::stack(Axis(0), &views)?;
        Self::new(data, sample_format)
    }

    /// `(frames, height, width)`
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Always false for a constructed stack; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn frame(&self, index: usize) -> ArrayView2<'_, f64> {
        self.data.index_axis(Axis(0), index)
    }

    pub fn sample_format(&self) -> SampleFormat {
        self.sample_format
    }
}

impl fmt::Display for ImageStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (frames, height, width) = self.shape();
        write!(f, "({}, {}, {})", frames, height, width)
    }
}
