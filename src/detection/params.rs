// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_MIN_DISTANCE, DEFAULT_THRESHOLD};
use crate::detection::BackgroundStats;

/// Tuning parameters shared by every detector.
///
/// # Fields
/// * `threshold` - Detection threshold in multiples of the background standard deviation
/// * `min_distance` - Minimum centroid separation, in pixels, between two events in the
///   same frame; `0` disables suppression
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    pub threshold: f64,
    pub min_distance: usize,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }
}

impl DetectionParams {
    /// Absolute difference intensity a pixel must exceed to become a candidate.
    ///
    /// # Example
    /// ```
    /// use synapse_analysis::detection::{BackgroundStats, DetectionParams};
    ///
    /// let params = DetectionParams { threshold: 5.0, min_distance: 3 };
    /// let background = BackgroundStats { mean: 100.0, std_dev: 2.0 };
    /// assert_eq!(params.cutoff(&background), 10.0);
    /// ```
    pub fn cutoff(&self, background: &BackgroundStats) -> f64 {
        self.threshold * background.std_dev
    }
}
