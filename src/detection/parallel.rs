// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::detection::frame_difference::{detect_in_frame, detect_with};
use crate::detection::{DetectionParams, DetectionResult, InsertionEvent};
use crate::stack::ImageStack;
use crate::traits::EventDetector;

/// Frame-differencing detector that processes frame pairs on a rayon pool.
///
/// Frame pairs are independent, so each one is differenced and labeled on its own
/// worker. Results are collected in frame order, making the output identical to
/// [`FrameDifferenceDetector`](crate::detection::FrameDifferenceDetector).
pub struct ParallelFrameDifferenceDetector {
    pool: Option<ThreadPool>,
}

impl ParallelFrameDifferenceDetector {
    /// Run on rayon's global pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Run on a dedicated pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("detect-{}", i))
            .build()?;
        Ok(Self { pool: Some(pool) })
    }

    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn scan(stack: &ImageStack, cutoff: f64, min_distance: usize) -> Vec<InsertionEvent> {
        let per_frame: Vec<Vec<InsertionEvent>> = (1..stack.len())
            .into_par_iter()
            .map(|t| detect_in_frame(t, stack.frame(t), stack.frame(t - 1), cutoff, min_distance))
            .collect();
        per_frame.into_iter().flatten().collect()
    }
}

impl Default for ParallelFrameDifferenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDetector for ParallelFrameDifferenceDetector {
    fn detect(&self, stack: &ImageStack, params: &DetectionParams) -> DetectionResult {
        detect_with(self.name(), stack, params, |cutoff| match &self.pool {
            Some(pool) => pool.install(|| Self::scan(stack, cutoff, params.min_distance)),
            None => Self::scan(stack, cutoff, params.min_distance),
        })
    }

    fn name(&self) -> &'static str {
        "parallel_frame_difference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::FrameDifferenceDetector;
    use crate::stack::SampleFormat;
    use ndarray::Array3;

    /// Stack with a new spot appearing every few frames at a drifting position.
    fn blinking_stack(frames: usize) -> ImageStack {
        let data = Array3::from_shape_fn((frames, 32, 32), |(t, y, x)| {
            let base = if (y * 7 + x * 3) % 5 == 0 { 105.0 } else { 100.0 };
            let spots = (1..=t)
                .filter(|s| s % 3 == 0)
                .filter(|s| y == (s * 5) % 30 && x == (s * 11) % 30)
                .count();
            base + 200.0 * spots as f64
        });
        ImageStack::new(data, SampleFormat::U16).unwrap()
    }

    #[test]
    fn test_matches_sequential_detector() {
        let stack = blinking_stack(40);
        let params = DetectionParams::default();

        let sequential = FrameDifferenceDetector::new().detect(&stack, &params);
        let parallel = ParallelFrameDifferenceDetector::new().detect(&stack, &params);

        assert!(!sequential.events.is_empty());
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_dedicated_pool() {
        let detector = ParallelFrameDifferenceDetector::with_threads(2).unwrap();
        assert_eq!(detector.threads(), 2);

        let stack = blinking_stack(10);
        let result = detector.detect(&stack, &DetectionParams::default());
        let frames: Vec<usize> = result.events.iter().map(|e| e.frame).collect();
        assert_eq!(frames, vec![3, 6, 9]);
    }
}
