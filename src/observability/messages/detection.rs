// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Message types for insertion event detection.
//!
//! This module contains message types for logging events related to:
//! * Detector selection and parameters
//! * Background statistics and the derived intensity cutoff
//! * Per-frame candidate counts
//! * Detection completion

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Detection started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use synapse_analysis::observability::messages::detection::DetectionStarted;
///
/// let msg = DetectionStarted {
///     detector: "frame_difference",
///     frames: 200,
///     threshold: 5.0,
///     min_distance: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct DetectionStarted<'a> {
    pub detector: &'a str,
    pub frames: usize,
    pub threshold: f64,
    pub min_distance: usize,
}

impl Display for DetectionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting {} detection over {} frames: threshold={} sd, min_distance={} px",
            self.detector, self.frames, self.threshold, self.min_distance
        )
    }
}

impl StructuredLog for DetectionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            detector = self.detector,
            frames = self.frames,
            threshold = self.threshold,
            min_distance = self.min_distance,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "detection",
            span_name = name,
            detector = self.detector,
            frames = self.frames,
            threshold = self.threshold,
            min_distance = self.min_distance,
        )
    }
}

/// Background statistics computed from the reference frame.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct BackgroundComputed {
    pub mean: f64,
    pub std_dev: f64,
    pub cutoff: f64,
}

impl Display for BackgroundComputed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Background: mean={:.3}, sd={:.3}, difference cutoff={:.3}",
            self.mean, self.std_dev, self.cutoff
        )
    }
}

impl StructuredLog for BackgroundComputed {
    fn log(&self) {
        tracing::debug!(
            mean = self.mean,
            std_dev = self.std_dev,
            cutoff = self.cutoff,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("background", span_name = name, cutoff = self.cutoff)
    }
}

/// Candidate components found in a difference frame.
///
/// # Log Level
/// `debug!` only when something was found, to keep quiet frames quiet
pub struct FrameCandidates {
    pub frame: usize,
    pub components: usize,
    pub accepted: usize,
    pub suppressed: usize,
}

impl Display for FrameCandidates {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Frame {}: {} candidate component(s), {} accepted, {} suppressed by min_distance",
            self.frame, self.components, self.accepted, self.suppressed
        )
    }
}

impl StructuredLog for FrameCandidates {
    fn log(&self) {
        if self.components == 0 {
            return;
        }
        tracing::debug!(
            frame = self.frame,
            components = self.components,
            accepted = self.accepted,
            suppressed = self.suppressed,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("frame", span_name = name, frame = self.frame)
    }
}

/// Detection completed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct DetectionCompleted<'a> {
    pub detector: &'a str,
    pub frames: usize,
    pub event_count: usize,
    pub duration: Duration,
}

impl Display for DetectionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} detection completed: {} events across {} frames in {:?}",
            self.detector, self.event_count, self.frames, self.duration
        )
    }
}

impl StructuredLog for DetectionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            detector = self.detector,
            frames = self.frames,
            event_count = self.event_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "detection",
            span_name = name,
            detector = self.detector,
            event_count = self.event_count,
        )
    }
}

/// Stack too short to difference.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct StackTooShort {
    pub frames: usize,
}

impl Display for StackTooShort {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Stack has {} frame(s); at least 2 are needed to detect insertions",
            self.frames
        )
    }
}

impl StructuredLog for StackTooShort {
    fn log(&self) {
        tracing::warn!(frames = self.frames, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("detection", span_name = name, frames = self.frames)
    }
}

/// Dedicated worker pool could not be built; the global rayon pool is used instead.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ThreadPoolFallback<'a> {
    pub requested_threads: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for ThreadPoolFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not build a {}-thread detection pool, using the global pool: {}",
            self.requested_threads, self.error
        )
    }
}

impl StructuredLog for ThreadPoolFallback<'_> {
    fn log(&self) {
        tracing::warn!(
            requested_threads = self.requested_threads,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "detection",
            span_name = name,
            requested_threads = self.requested_threads,
        )
    }
}

/// A thread count was configured for a method that does not use worker threads.
///
/// # Log Level
/// `warn!` - Potential issue or degraded behavior
pub struct ThreadsIgnored<'a> {
    pub threads: usize,
    pub method: &'a str,
}

impl Display for ThreadsIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "threads={} is ignored by {}; use parallel_frame_difference for worker threads",
            self.threads, self.method
        )
    }
}

impl StructuredLog for ThreadsIgnored<'_> {
    fn log(&self) {
        tracing::warn!(threads = self.threads, method = self.method, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "detection",
            span_name = name,
            threads = self.threads,
            method = self.method,
        )
    }
}
