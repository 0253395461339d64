// ABOUTME: Configuration module for the coaching service
// ABOUTME: Re-exports environment configuration and the coaching rule tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

/// Environment-driven service configuration
pub mod environment;

pub use elsa_intelligence::config::CoachingConfig;
pub use environment::{AppConfig, Environment};
