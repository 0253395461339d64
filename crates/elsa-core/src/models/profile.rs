// ABOUTME: Client profile model with biometric, diet, sports, and membership fields
// ABOUTME: Validates required biometrics before any energy computation runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

use super::plan::PlanBucket;

/// Biological gender, selects the BMR formula and the plan bucket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// Diet type, selects the meal template family
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Diet {
    /// Regular omnivore diet
    #[default]
    Regular,
    /// Vegetarian diet
    Vegetarian,
    /// Vegan diet
    Vegan,
}

/// Self-reported sports level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SportsLevel {
    /// Beginner
    #[default]
    Beginner,
    /// Intermediate
    Intermediate,
    /// Advanced
    Advanced,
}

/// Why the client trains
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SportsGoal {
    /// Performance oriented
    Performance,
    /// Health and social oriented
    #[default]
    HealthSocial,
}

/// Purchased membership length
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum MembershipTier {
    /// Three months
    Trimester,
    /// Six months
    Semester,
    /// Twelve months
    Year,
}

impl MembershipTier {
    /// Membership length in months
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Trimester => 3,
            Self::Semester => 6,
            Self::Year => 12,
        }
    }
}

impl TryFrom<u32> for MembershipTier {
    type Error = AppError;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(Self::Trimester),
            6 => Ok(Self::Semester),
            12 => Ok(Self::Year),
            other => Err(AppError::out_of_range(format!(
                "Membership tier must be 3, 6 or 12 months, got {other}"
            ))),
        }
    }
}

impl From<MembershipTier> for u32 {
    fn from(tier: MembershipTier) -> Self {
        tier.months()
    }
}

/// Client planning inputs
///
/// Biometric fields are optional because clients fill them in after sign-up;
/// [`Profile::biometrics`] is the gate every energy computation goes through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Profile identifier
    pub id: Uuid,
    /// Age in years
    pub age: Option<u32>,
    /// Biological gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Current weight in kilograms
    pub weight_kg: Option<f64>,
    /// Target weight in kilograms
    pub weight_goal_kg: Option<f64>,
    /// Diet type
    #[serde(default)]
    pub diet: Diet,
    /// Sports level
    #[serde(default)]
    pub sports_level: SportsLevel,
    /// Sports goal
    #[serde(default)]
    pub sports_goal: SportsGoal,
    /// Purchased membership, if any
    #[serde(default)]
    pub membership_tier: Option<MembershipTier>,
    /// First day of the paid program; `None` means not enrolled
    #[serde(default)]
    pub program_start: Option<DateTime<Utc>>,
}

impl Profile {
    /// Create a profile with no biometrics and no enrollment
    #[must_use]
    pub fn new(gender: Gender, sports_level: SportsLevel, sports_goal: SportsGoal) -> Self {
        Self {
            id: Uuid::new_v4(),
            age: None,
            gender,
            height_cm: None,
            weight_kg: None,
            weight_goal_kg: None,
            diet: Diet::default(),
            sports_level,
            sports_goal,
            membership_tier: None,
            program_start: None,
        }
    }

    /// Set all biometric fields
    #[must_use]
    pub fn with_biometrics(
        mut self,
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        weight_goal_kg: f64,
    ) -> Self {
        self.age = Some(age);
        self.height_cm = Some(height_cm);
        self.weight_kg = Some(weight_kg);
        self.weight_goal_kg = Some(weight_goal_kg);
        self
    }

    /// Set the diet type
    #[must_use]
    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Enroll the profile in a membership starting at `program_start`
    #[must_use]
    pub fn with_membership(
        mut self,
        tier: MembershipTier,
        program_start: DateTime<Utc>,
    ) -> Self {
        self.membership_tier = Some(tier);
        self.program_start = Some(program_start);
        self
    }

    /// Demographic + goal bucket used to look up plan entries
    #[must_use]
    pub const fn bucket(&self) -> PlanBucket {
        PlanBucket {
            gender: self.gender,
            sports_level: self.sports_level,
            sports_goal: self.sports_goal,
        }
    }

    /// Whether the client has started a program
    #[must_use]
    pub const fn is_enrolled(&self) -> bool {
        self.program_start.is_some()
    }

    /// Validated biometrics required by the energy engine
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` listing every unset field, or
    /// `InvalidInput` if a value is negative or not finite.
    pub fn biometrics(&self) -> AppResult<Biometrics> {
        let mut missing = Vec::new();
        if self.age.is_none() {
            missing.push("age");
        }
        if self.height_cm.is_none() {
            missing.push("height_cm");
        }
        if self.weight_kg.is_none() {
            missing.push("weight_kg");
        }
        if self.weight_goal_kg.is_none() {
            missing.push("weight_goal_kg");
        }

        match (self.age, self.height_cm, self.weight_kg, self.weight_goal_kg) {
            (Some(age), Some(height_cm), Some(weight_kg), Some(weight_goal_kg)) => {
                for (name, value) in [
                    ("height_cm", height_cm),
                    ("weight_kg", weight_kg),
                    ("weight_goal_kg", weight_goal_kg),
                ] {
                    if !value.is_finite() || value < 0.0 {
                        return Err(AppError::invalid_input(format!(
                            "{name} must be a non-negative number, got {value}"
                        ))
                        .with_profile_id(self.id));
                    }
                }
                Ok(Biometrics {
                    age,
                    gender: self.gender,
                    height_cm,
                    weight_kg,
                    weight_goal_kg,
                })
            }
            _ => Err(AppError::missing_fields(&missing).with_profile_id(self.id)),
        }
    }
}

/// Fully populated biometric inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    /// Age in years
    pub age: u32,
    /// Biological gender
    pub gender: Gender,
    /// Height in centimeters
    pub height_cm: f64,
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Target weight in kilograms
    pub weight_goal_kg: f64,
}

impl Biometrics {
    /// Signed weight change needed to reach the goal (kg)
    #[must_use]
    pub fn weight_difference_kg(&self) -> f64 {
        self.weight_goal_kg - self.weight_kg
    }
}
