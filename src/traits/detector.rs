// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use crate::detection::{DetectionParams, DetectionResult};
use crate::stack::ImageStack;

/// Finds insertion events in an image stack.
///
/// Implementations differ in how they schedule the work, never in what they report:
/// every detector must return the same events, in the same order, for the same input.
pub trait EventDetector: Send + Sync {
    fn detect(&self, stack: &ImageStack, params: &DetectionParams) -> DetectionResult;

    fn name(&self) -> &'static str;
}
