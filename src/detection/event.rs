// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use serde::Serialize;

use crate::detection::BackgroundStats;

/// A fluorescent spot that appeared between frame `frame - 1` and `frame`.
///
/// `y`/`x` are the truncated centroid of the candidate component and `intensity`
/// is the difference image sampled at that centroid. Field order matches the CSV
/// column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsertionEvent {
    pub frame: usize,
    pub y: usize,
    pub x: usize,
    pub intensity: f64,
}

/// Everything a detector learned about a stack.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub background: BackgroundStats,
    pub events: Vec<InsertionEvent>,
}
