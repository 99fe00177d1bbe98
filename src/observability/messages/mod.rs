// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit the same information as structured `tracing` fields.
//!
//! # Organization
//!
//! * `config` - Configuration loading and validation
//! * `stack` - TIFF stack loading
//! * `detection` - Insertion event detection
//! * `output` - CSV persistence
//!
//! # Usage Pattern
//!
//! ```rust
//! use synapse_analysis::observability::messages::stack::StackLoadStarted;
//! use synapse_analysis::observability::messages::StructuredLog;
//!
//! let msg = StackLoadStarted {
//!     path: "cell_01.tif",
//! };
//!
//! let span = msg.span("load_stack");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod config;
pub mod detection;
pub mod output;
pub mod stack;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its designated level with structured fields.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
