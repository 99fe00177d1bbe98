// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

use ndarray::ArrayView2;

/// Intensity statistics of the reference (first) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundStats {
    pub mean: f64,
    /// Population standard deviation (no Bessel correction).
    pub std_dev: f64,
}

impl BackgroundStats {
    pub fn from_frame(frame: ArrayView2<f64>) -> Self {
        let mean = frame.mean().unwrap_or(0.0);
        let std_dev = if frame.is_empty() { 0.0 } else { frame.std(0.0) };
        Self { mean, std_dev }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_population_statistics() {
        let frame = array![[2.0, 4.0], [4.0, 4.0], [5.0, 5.0], [7.0, 9.0]];
        let stats = BackgroundStats::from_frame(frame.view());

        assert_eq!(stats.mean, 5.0);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_flat_frame_has_zero_spread() {
        let frame = ndarray::Array2::from_elem((3, 3), 17.0);
        let stats = BackgroundStats::from_frame(frame.view());

        assert_eq!(stats.mean, 17.0);
        assert_eq!(stats.std_dev, 0.0);
    }
}
