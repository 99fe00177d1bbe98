// Copyright (c) 2025 Synapse Analysis contributors
// SPDX-License-Identifier: MIT

mod config;

pub use config::{ConfigError, ValidationError};
pub use crate::output::OutputError;
pub use crate::stack::StackError;
