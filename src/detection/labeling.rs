// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

//! Connected-component labeling of binary candidate masks.
//!
//! Components are 4-connected: pixels touch only through an edge, never a corner.
//! Labels start at 1 and are handed out in raster order of each component's first
//! pixel, so label order is stable and deterministic. Background pixels keep label 0.
//!
//! # Algorithm
//! A raster scan seeds a breadth-first flood fill at each unlabeled foreground pixel.
//! Every pixel is enqueued at most once, so labeling is O(height × width).

use std::collections::VecDeque;

use ndarray::{Array2, ArrayView2};

/// One labeled component with the running sums needed for its centroid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub pixel_count: usize,
    sum_y: usize,
    sum_x: usize,
}

impl Component {
    /// Mean row and column, truncated toward zero.
    pub fn centroid(&self) -> (usize, usize) {
        (self.sum_y / self.pixel_count, self.sum_x / self.pixel_count)
    }
}

/// Components of a mask, in label order: `components[i]` carries label `i + 1`.
#[derive(Debug, Clone)]
pub struct LabeledMask {
    pub components: Vec<Component>,
}

impl LabeledMask {
    pub fn count(&self) -> usize {
        self.components.len()
    }
}

const NEIGHBOURS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn label_components(mask: ArrayView2<bool>) -> LabeledMask {
    let (height, width) = mask.dim();
    let mut labels = Array2::<u32>::zeros((height, width));
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..height {
        for x in 0..width {
            if !mask[[y, x]] || labels[[y, x]] != 0 {
                continue;
            }

            let label = components.len() as u32 + 1;
            let mut component = Component {
                pixel_count: 0,
                sum_y: 0,
                sum_x: 0,
            };

            labels[[y, x]] = label;
            queue.push_back((y, x));

            while let Some((cy, cx)) = queue.pop_front() {
                component.pixel_count += 1;
                component.sum_y += cy;
                component.sum_x += cx;

                for (dy, dx) in NEIGHBOURS {
                    let ny = cy as isize + dy;
                    let nx = cx as isize + dx;
                    if ny < 0 || nx < 0 || ny >= height as isize || nx >= width as isize {
                        continue;
                    }
                    let (ny, nx) = (ny as usize, nx as usize);
                    if mask[[ny, nx]] && labels[[ny, nx]] == 0 {
                        labels[[ny, nx]] = label;
                        queue.push_back((ny, nx));
                    }
                }
            }

            components.push(component);
        }
    }

    LabeledMask { components }
}
