// ABOUTME: Core types and constants for the ELSA coaching backend
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

#![deny(unsafe_code)]

//! # ELSA Core
//!
//! Foundation crate providing shared types and constants for the ELSA coaching
//! platform. Everything here is plain data: the computation engine lives in
//! `elsa-intelligence` and the service/CLI surface in the root crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **constants**: Calendar, energy, and service constants
//! - **models**: Profile, plan catalog, meal template, and food models

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, `PlanEntry`, `MealTemplate`, Food)
pub mod models;
