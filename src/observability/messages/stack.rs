// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Message types for TIFF stack loading.
//!
//! This module contains message types for logging events related to:
//! * Opening and decoding multi-page TIFF files
//! * Per-page decoding progress
//! * Load failures

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Stack loading started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use synapse_analysis::observability::messages::stack::StackLoadStarted;
///
/// let msg = StackLoadStarted { path: "cell_01.tif" };
///
/// tracing::info!("{}", msg);
/// ```
pub struct StackLoadStarted<'a> {
    pub path: &'a str,
}

impl Display for StackLoadStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loading TIFF stack from '{}'", self.path)
    }
}

impl StructuredLog for StackLoadStarted<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("stack_load", span_name = name, path = self.path)
    }
}

/// A single TIFF page was decoded.
///
/// # Log Level
/// `trace!` - Emitted once per page, too chatty for debug
pub struct PageDecoded {
    pub page: usize,
    pub width: u32,
    pub height: u32,
}

impl Display for PageDecoded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Decoded page {} ({}x{})",
            self.page, self.width, self.height
        )
    }
}

impl StructuredLog for PageDecoded {
    fn log(&self) {
        tracing::trace!(
            page = self.page,
            width = self.width,
            height = self.height,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!("page_decode", span_name = name, page = self.page)
    }
}

/// Stack loaded successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use synapse_analysis::observability::messages::stack::StackLoaded;
/// use std::time::Duration;
///
/// let msg = StackLoaded {
///     path: "cell_01.tif",
///     frames: 200,
///     height: 512,
///     width: 512,
///     sample_format: "u16",
///     integer_samples: true,
///     duration: Duration::from_millis(120),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct StackLoaded<'a> {
    pub path: &'a str,
    pub frames: usize,
    pub height: usize,
    pub width: usize,
    pub sample_format: &'a str,
    pub integer_samples: bool,
    pub duration: Duration,
}

impl Display for StackLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded stack '{}': frames={}, height={}, width={}, samples={}, duration={:?}",
            self.path, self.frames, self.height, self.width, self.sample_format, self.duration
        )
    }
}

impl StructuredLog for StackLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = self.path,
            frames = self.frames,
            height = self.height,
            width = self.width,
            sample_format = self.sample_format,
            integer_samples = self.integer_samples,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "stack_load",
            span_name = name,
            path = self.path,
            frames = self.frames,
        )
    }
}

/// Stack loading failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct StackLoadFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for StackLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to load stack '{}': {}", self.path, self.error)
    }
}

impl StructuredLog for StackLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("stack_load", span_name = name, path = self.path)
    }
}
