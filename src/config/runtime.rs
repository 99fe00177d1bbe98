// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::detection::{DetectionParams, DetectorFactory};
use crate::traits::EventDetector;

/// Detection runtime builder - turns a configuration into a ready-to-run detector.
///
/// The `RuntimeBuilder` coordinates detector construction with parameter resolution
/// so the two always come from the same configuration.
///
/// # Examples
///
/// ```
/// use synapse_analysis::config::{Config, RuntimeBuilder};
///
/// let config = Config::default();
/// let (detector, params) = RuntimeBuilder::from_config(&config);
///
/// assert_eq!(detector.name(), "frame_difference");
/// assert_eq!(params.threshold, 5.0);
/// assert_eq!(params.min_distance, 3);
/// ```
pub struct RuntimeBuilder;

impl RuntimeBuilder {
    /// Build the detector and its parameters from configuration.
    ///
    /// The configuration should already have passed [`validate_config`](crate::config::validate_config).
    pub fn from_config(cfg: &Config) -> (Box<dyn EventDetector>, DetectionParams) {
        let detector = DetectorFactory::from_config(cfg);
        let params = DetectionParams {
            threshold: cfg.detection.get_threshold(),
            min_distance: cfg.detection.get_min_distance(),
        };
        (detector, params)
    }
}
