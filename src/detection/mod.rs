// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Insertion event detection.
//!
//! A receptor insertion shows up as a fluorescent spot that is present in frame `t`
//! but not in frame `t − 1`. Detectors difference consecutive frames, threshold the
//! difference against the background noise of the first frame and report one event
//! per connected group of candidate pixels.

mod background;
mod event;
mod factory;
mod frame_difference;
pub mod labeling;
mod parallel;
mod params;

#[cfg(test)]
mod integration_tests;

pub use background::BackgroundStats;
pub use event::{DetectionResult, InsertionEvent};
pub use factory::DetectorFactory;
pub use frame_difference::FrameDifferenceDetector;
pub use parallel::ParallelFrameDifferenceDetector;
pub use params::DetectionParams;
