// ABOUTME: Coaching computation engine for the ELSA platform
// ABOUTME: Calendar indexing, energy budgets, curriculum tiling, and meal selection over read-only catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

#![deny(unsafe_code)]

//! # ELSA Intelligence
//!
//! Synchronous, pure computations over request-scoped inputs. The only shared
//! state is the read-only catalog, reached through the traits in [`catalog`].
//!
//! ## Modules
//!
//! - **calendar**: program start + now → absolute/relative day and week
//! - **energy**: BMR, TEE, weight-goal pacing, macro and meal-slot split
//! - **assessment**: BMI status, healthy range, goal advisories
//! - **catalog**: lookup traits and the in-memory catalog
//! - **curriculum**: base-cycle tiling over a membership
//! - **meals**: calorie tier and meal template selection
//! - **bill**: calorie bill of picked foods
//! - **psychology**: daily psychological plan, mood and belief scoring
//! - **config**: rule tables with env overrides

/// Body assessment and goal advisories
pub mod assessment;
/// Meal calorie bill
pub mod bill;
/// Training calendar indexer and program windows
pub mod calendar;
/// Read-only catalog lookups
pub mod catalog;
/// Rule-table configuration
pub mod config;
/// Curriculum tiler
pub mod curriculum;
/// Energy and macro engine
pub mod energy;
/// Meal template selector
pub mod meals;
/// Psychological support plan and scoring
pub mod psychology;

pub use assessment::{assess_body, BodyAssessment, BodyStatus, HealthWarning, HealthyWeightRange};
pub use bill::{meal_bill, MealBill, MealSelection};
pub use calendar::{locate, locate_profile, ProgramWindow, TrainingCycle};
pub use catalog::{
    CatalogSnapshot, DailySessions, FoodCatalog, InMemoryCatalog, MealTemplateCatalog,
    PlanCatalog, PsychologyCatalog,
};
pub use config::{CoachingConfig, ConfigError};
pub use curriculum::{CompleteCurriculum, ScheduledSession, WeekCalendar};
pub use energy::{EnergyResult, MacroBreakdown, MealSlotBudget, WeightGoal};
pub use meals::MealPlanSelection;
pub use psychology::{BeliefResult, DailyPsychology, MoodProfile};
