// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Error types for TIFF stack loading.
//!
//! All errors implement `std::error::Error` via the `thiserror` crate.

use thiserror::Error;

/// Errors raised while decoding or assembling an image stack.
#[derive(Error, Debug)]
pub enum StackError {
    /// File I/O error while opening the stack.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF decoder rejected the file.
    #[error("TIFF decoding error: {0}")]
    Tiff(#[from] tiff::TiffError),

    /// Only single-channel grayscale pages can be analysed.
    #[error("Unsupported colour type on page {page}: {color_type} (expected single-channel grayscale)")]
    UnsupportedColorType { page: usize, color_type: String },

    /// A page does not match the dimensions of the first page.
    #[error("Page {page} is {found_width}x{found_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        page: usize,
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },

    /// Decoded buffer length disagrees with the page dimensions.
    #[error("Page {page} decoded {found} samples, expected {expected}")]
    SampleCountMismatch {
        page: usize,
        expected: usize,
        found: usize,
    },

    /// Stack has no frames or zero-sized frames.
    #[error("Image stack is empty")]
    Empty,

    /// Array construction failed.
    #[error("Invalid stack shape: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type alias for stack operations.
pub type StackResult<T> = Result<T, StackError>;
