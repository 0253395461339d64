// ABOUTME: Main library entry point for the ELSA coaching backend
// ABOUTME: Wires configuration, logging, catalog loading, and the coaching service facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

#![deny(unsafe_code)]

//! # ELSA Coach
//!
//! Coaching backend that, given a client's biometric profile and the time
//! elapsed since the start of a paid program:
//!
//! - locates the client inside the repeating weekly/monthly curriculum
//! - computes a personalized energy and macro budget for that day
//! - projects the full cycling and physical-training curriculum for the
//!   purchased membership
//!
//! ## Architecture
//!
//! - `elsa-core`: errors, domain models, constants
//! - `elsa-intelligence`: the pure rule engine over read-only catalogs
//! - this crate: environment configuration, logging, catalog snapshot
//!   loading, and the [`services::CoachingService`] facade
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use chrono::Utc;
//! use elsa_coach::catalog::load_catalog;
//! use elsa_coach::models::{Gender, Profile, SportsGoal, SportsLevel};
//! use elsa_coach::services::CoachingService;
//!
//! # fn main() -> anyhow::Result<()> {
//! let catalog = Arc::new(load_catalog(Path::new("data/catalog.json"))?);
//! let service = CoachingService::with_global_config(catalog);
//! let profile = Profile::new(Gender::Female, SportsLevel::Beginner, SportsGoal::HealthSocial)
//!     .with_biometrics(34, 165.0, 68.0, 62.0);
//! let nutrition = service.daily_nutrition(&profile, Utc::now());
//! # Ok(())
//! # }
//! ```

/// Catalog snapshot loading
pub mod catalog;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Coaching service facade
pub mod services;

/// Error types shared with the core crate
pub use elsa_core::errors;

/// Domain models shared with the core crate
pub use elsa_core::models;

/// Rule engine re-export
pub use elsa_intelligence as intelligence;
