// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Validation runs after command-line overrides are applied, so it sees the
//! values a run will actually use. Every check runs; all failures are reported
//! together instead of stopping at the first one.
//!
//! # Checks
//!
//! 1. **Threshold**: finite and not negative. A negative threshold puts the cutoff
//!    below zero, making every unchanged pixel a candidate.
//! 2. **Threads**: when set, between 1 and [`MAX_THREADS`].
//! 3. **Output path**: when set, not empty.
//!
//! # Examples
//!
//! ```rust
//! use synapse_analysis::config::{validate_config, Config};
//!
//! let mut config = Config::default();
//! assert!(validate_config(&config).is_ok());
//!
//! config.detection.threshold = Some(f64::NAN);
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors.len(), 1);
//! ```

use crate::config::consts::MAX_THREADS;
use crate::config::Config;
use crate::errors::ValidationError;

pub fn validate_config(cfg: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(value) = cfg.detection.threshold {
        if !value.is_finite() {
            errors.push(ValidationError::NonFiniteThreshold { value });
        } else if value < 0.0 {
            errors.push(ValidationError::NegativeThreshold { value });
        }
    }

    if let Some(threads) = cfg.detection.threads {
        if threads == 0 || threads > MAX_THREADS {
            errors.push(ValidationError::InvalidThreadCount { threads });
        }
    }

    if let Some(path) = &cfg.output.path {
        if path.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyOutputPath);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
