// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use loader::{
    check_config, load_and_validate_config, load_config, parse_config, Config, ConfigFormat,
    DetectionMethod, DetectionOptions, OutputOptions, Overrides,
};
pub use runtime::RuntimeBuilder;
pub use validation::validate_config;
