// ABOUTME: Configuration error types for coaching rule-table validation
// ABOUTME: Covers unordered thresholds, shares that do not sum to one, and bad env overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use elsa_core::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds not strictly ascending, or lower bound not below upper bound
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required table is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Failed to parse an override value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Shares don't sum to 1.0
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
