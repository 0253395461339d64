// ABOUTME: Meal tier and curriculum configuration
// ABOUTME: Calorie tiers select meal templates; cycle lengths drive curriculum tiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use elsa_core::constants::calendar::{WEEKS_PER_CYCLE, WEEKS_PER_MONTH};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Meal template tier configuration
///
/// Scan rule: the smallest tier strictly greater than TEE wins; TEE at or
/// above every tier falls back to the largest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealTierConfig {
    /// Ascending kcal tiers
    pub calorie_tiers: Vec<u32>,
}

impl Default for MealTierConfig {
    fn default() -> Self {
        Self {
            calorie_tiers: vec![1350, 1600, 2000, 2399, 2700, 3050, 3450],
        }
    }
}

impl MealTierConfig {
    /// Validate the tier table
    ///
    /// # Errors
    ///
    /// Returns an error if the tiers are empty or not strictly ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calorie_tiers.is_empty() {
            return Err(ConfigError::MissingField("meals.calorie_tiers"));
        }
        if self.calorie_tiers.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "meals.calorie_tiers must be strictly ascending",
            ));
        }
        Ok(())
    }
}

/// Curriculum tiling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumConfig {
    /// Weeks a base cycle is expected to span; other spans are logged
    pub expected_cycle_weeks: u32,
    /// Weeks counted per membership month
    pub weeks_per_month: u32,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            expected_cycle_weeks: WEEKS_PER_CYCLE,
            weeks_per_month: WEEKS_PER_MONTH,
        }
    }
}

impl CurriculumConfig {
    /// Validate the cycle lengths
    ///
    /// # Errors
    ///
    /// Returns an error if either length is zero
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.expected_cycle_weeks == 0 || self.weeks_per_month == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Curriculum cycle lengths must be positive",
            ));
        }
        Ok(())
    }
}
