// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Frame-differencing insertion detector.
//!
//! # Algorithm
//!
//! 1. Background mean and population standard deviation σ come from frame 0.
//! 2. For every frame `t ≥ 1` the signed difference `frame[t] − frame[t−1]` is taken.
//!    Differencing happens in `f64`, so unsigned inputs never wrap around.
//! 3. Pixels whose difference is strictly greater than `threshold · σ` are candidates.
//! 4. Candidates are grouped into 4-connected components ([`label_components`]).
//! 5. Each component yields one event at its truncated centroid, carrying the
//!    difference value at that pixel.
//! 6. With `min_distance > 0`, a component whose centroid is closer than
//!    `min_distance` pixels to an event already accepted in the same frame is
//!    dropped. Earlier labels win.

use std::time::Instant;

use ndarray::ArrayView2;

use crate::detection::labeling::label_components;
use crate::detection::{BackgroundStats, DetectionParams, DetectionResult, InsertionEvent};
use crate::observability::messages::detection::{
    BackgroundComputed, DetectionCompleted, DetectionStarted, FrameCandidates, StackTooShort,
};
use crate::observability::messages::StructuredLog;
use crate::stack::ImageStack;
use crate::traits::EventDetector;

/// Sequential frame-differencing detector.
pub struct FrameDifferenceDetector;

impl FrameDifferenceDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FrameDifferenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDetector for FrameDifferenceDetector {
    fn detect(&self, stack: &ImageStack, params: &DetectionParams) -> DetectionResult {
        detect_with(self.name(), stack, params, |cutoff| {
            (1..stack.len())
                .flat_map(|t| {
                    detect_in_frame(t, stack.frame(t), stack.frame(t - 1), cutoff, params.min_distance)
                })
                .collect()
        })
    }

    fn name(&self) -> &'static str {
        "frame_difference"
    }
}

/// Shared lifecycle for frame-differencing detectors.
///
/// Computes the background, logs start/completion and hands the cutoff to `scan`,
/// which produces the events for frames `1..len`.
pub(crate) fn detect_with<F>(
    detector: &str,
    stack: &ImageStack,
    params: &DetectionParams,
    scan: F,
) -> DetectionResult
where
    F: FnOnce(f64) -> Vec<InsertionEvent>,
{
    let frames = stack.len();
    let start_msg = DetectionStarted {
        detector,
        frames,
        threshold: params.threshold,
        min_distance: params.min_distance,
    };
    let span = start_msg.span("detect");
    let _guard = span.enter();
    start_msg.log();

    let start_time = Instant::now();
    let background = BackgroundStats::from_frame(stack.frame(0));
    let cutoff = params.cutoff(&background);
    BackgroundComputed {
        mean: background.mean,
        std_dev: background.std_dev,
        cutoff,
    }
    .log();

    let events = if frames < 2 {
        StackTooShort { frames }.log();
        Vec::new()
    } else {
        scan(cutoff)
    };

    DetectionCompleted {
        detector,
        frames,
        event_count: events.len(),
        duration: start_time.elapsed(),
    }
    .log();

    DetectionResult { background, events }
}

/// Detect the events that appear in `current` relative to `previous`.
pub(crate) fn detect_in_frame(
    frame: usize,
    current: ArrayView2<f64>,
    previous: ArrayView2<f64>,
    cutoff: f64,
    min_distance: usize,
) -> Vec<InsertionEvent> {
    let diff = &current - &previous;
    let mask = diff.mapv(|v| v > cutoff);
    let labeled = label_components(mask.view());

    let mut events: Vec<InsertionEvent> = Vec::with_capacity(labeled.count());
    let mut suppressed = 0usize;

    for component in &labeled.components {
        let (y, x) = component.centroid();
        if within_min_distance(&events, y, x, min_distance) {
            suppressed += 1;
            continue;
        }
        events.push(InsertionEvent {
            frame,
            y,
            x,
            intensity: diff[[y, x]],
        });
    }

    FrameCandidates {
        frame,
        components: labeled.count(),
        accepted: events.len(),
        suppressed,
    }
    .log();

    events
}

fn within_min_distance(accepted: &[InsertionEvent], y: usize, x: usize, min_distance: usize) -> bool {
    if min_distance == 0 {
        return false;
    }
    // Squared in f64: min_distance is unbounded and usize squaring overflows.
    let limit = min_distance as f64;
    accepted.iter().any(|event| {
        let dy = event.y as f64 - y as f64;
        let dx = event.x as f64 - x as f64;
        dy * dy + dx * dx < limit * limit
    })
}
