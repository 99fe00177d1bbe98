// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::consts::MAX_THREADS;

/// Errors that can occur while validating configuration values
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Threshold is NaN or infinite
    NonFiniteThreshold {
        /// The rejected value
        value: f64,
    },
    /// Threshold is below zero, which would flag unchanged pixels as insertions
    NegativeThreshold {
        /// The rejected value
        value: f64,
    },
    /// Thread count outside `1..=MAX_THREADS`
    InvalidThreadCount {
        /// The rejected value
        threads: usize,
    },
    /// Output path is empty
    EmptyOutputPath,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NonFiniteThreshold { value } => {
                write!(f, "Threshold must be a finite number, got {}", value)
            }
            ValidationError::NegativeThreshold { value } => {
                write!(
                    f,
                    "Threshold must not be negative, got {} standard deviations",
                    value
                )
            }
            ValidationError::InvalidThreadCount { threads } => {
                write!(
                    f,
                    "Thread count must be between 1 and {}, got {}",
                    MAX_THREADS, threads
                )
            }
            ValidationError::EmptyOutputPath => write!(f, "Output path must not be empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or schema error.
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML syntax or schema error.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file parsed but its values are unusable.
    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
