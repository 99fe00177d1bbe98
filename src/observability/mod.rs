// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout Synapse Analysis. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between log lines and spans
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::config` - Configuration loading and validation events
//! * `messages::stack` - TIFF stack loading events
//! * `messages::detection` - Insertion event detection lifecycle
//! * `messages::output` - Result persistence events
//!
//! # Usage
//!
//! ```rust
//! use synapse_analysis::observability::messages::detection::DetectionCompleted;
//! use synapse_analysis::observability::messages::StructuredLog;
//! use std::time::Duration;
//!
//! let msg = DetectionCompleted {
//!     detector: "frame_difference",
//!     frames: 100,
//!     event_count: 12,
//!     duration: Duration::from_millis(250),
//! };
//!
//! msg.log();
//! ```

pub mod messages;
