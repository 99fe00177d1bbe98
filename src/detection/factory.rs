// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use crate::config::{Config, DetectionMethod};
use crate::detection::frame_difference::FrameDifferenceDetector;
use crate::detection::parallel::ParallelFrameDifferenceDetector;
use crate::observability::messages::detection::{ThreadPoolFallback, ThreadsIgnored};
use crate::observability::messages::StructuredLog;
use crate::traits::EventDetector;

/// Factory for creating event detectors from configuration
pub struct DetectorFactory;

impl DetectorFactory {
    /// Create a detector based on the configured detection method
    pub fn from_config(cfg: &Config) -> Box<dyn EventDetector> {
        let method = cfg.detection.get_method();
        match method {
            DetectionMethod::FrameDifference => {
                if let Some(threads) = cfg.detection.threads {
                    ThreadsIgnored {
                        threads,
                        method: method.as_str(),
                    }
                    .log();
                }
                Box::new(FrameDifferenceDetector::new())
            }
            DetectionMethod::ParallelFrameDifference => match cfg.detection.threads {
                Some(threads) => Box::new(Self::with_fallback(
                    threads,
                    ParallelFrameDifferenceDetector::with_threads(threads),
                )),
                None => Box::new(ParallelFrameDifferenceDetector::new()),
            },
        }
    }

    /// Use the dedicated pool if it was built, otherwise warn and run on the global pool.
    fn with_fallback<E: std::error::Error>(
        threads: usize,
        built: Result<ParallelFrameDifferenceDetector, E>,
    ) -> ParallelFrameDifferenceDetector {
        match built {
            Ok(detector) => detector,
            Err(e) => {
                ThreadPoolFallback {
                    requested_threads: threads,
                    error: &e,
                }
                .log();
                ParallelFrameDifferenceDetector::new()
            }
        }
    }
}
