// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Loading TIRF image stacks from multi-page TIFF files.

mod error;
mod image_stack;
mod loader;

pub use error::{StackError, StackResult};
pub use image_stack::{ImageStack, SampleFormat};
pub use loader::{decode_pages, load_tiff_stack};
