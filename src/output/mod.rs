// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Persisting detected events.

mod csv_writer;

pub use csv_writer::{write_events, write_events_csv, CSV_HEADER};

use thiserror::Error;

/// Errors raised while writing results.
#[derive(Error, Debug)]
pub enum OutputError {
    /// File creation or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
