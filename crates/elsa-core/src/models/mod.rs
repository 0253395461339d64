// ABOUTME: Core data models for the ELSA coaching backend
// ABOUTME: Re-exports profile, plan catalog, meal, food, and psychological support definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! # Data Models
//!
//! Plain, serializable data shared by the computation core and the service
//! layer. Reference data (plan entries, meal templates, foods) is read-only
//! once loaded; profiles are supplied per request by the caller.

mod food;
mod meal;
mod plan;
mod profile;
mod psychology;

// Client profile domain
pub use profile::{
    Biometrics, Diet, Gender, MembershipTier, Profile, SportsGoal, SportsLevel,
};

// Plan catalog domain
pub use plan::{
    CyclingIntensity, CyclingSession, Discipline, ExerciseDescription, ExerciseType,
    PhysicalIntensity, PlanBucket, PlanEntry, SessionDetails,
};

// Meal template domain
pub use meal::{CalorieIntakeType, FoodGroupIntake, MealSlot, MealTemplate};

// Food domain
pub use food::{Food, FoodGroup, FoodSupergroup};

// Psychological support domain
pub use psychology::{
    BeliefLevel, BeliefScale, BorgEffortLevel, BorgIntensity, Feeling, HamiltonQuestion,
    MoodAnswer, PsychologicalQuestion, PsychologicalTechnique, Questionnaire, QuestionnaireItem,
    QuestionnaireKind, TechniqueType, MAX_MOOD_INTENSITY,
};
