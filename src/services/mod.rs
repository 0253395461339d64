// ABOUTME: Domain service layer for coaching operations
// ABOUTME: Provides protocol-agnostic services reusable by an HTTP layer and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! Domain service layer
//!
//! Services take a resolved profile and the wall-clock "now" and return
//! serializable results, so every entry point applies the same rules.

/// Daily plans, curriculum projection, meal bills, and psychology plans
pub mod coaching;

pub use coaching::{
    CoachingService, DailyNutrition, NutritionPlan, ProgramStatus, TodayPsychology,
    TodaySessions,
};
