// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Message types for writing detection results.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Events written to disk.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use synapse_analysis::observability::messages::output::EventsSaved;
///
/// let msg = EventsSaved {
///     path: "events.csv",
///     count: 42,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct EventsSaved<'a> {
    pub path: &'a str,
    pub count: usize,
}

impl Display for EventsSaved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Saved {} events to {}", self.count, self.path)
    }
}

impl StructuredLog for EventsSaved<'_> {
    fn log(&self) {
        tracing::info!(path = self.path, count = self.count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!("output", span_name = name, path = self.path)
    }
}

/// Writing events failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct OutputWriteFailed<'a> {
    pub path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for OutputWriteFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to write events to '{}': {}", self.path, self.error)
    }
}

impl StructuredLog for OutputWriteFailed<'_> {
    fn log(&self) {
        tracing::error!(path = self.path, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("output", span_name = name, path = self.path)
    }
}
