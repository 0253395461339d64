// ABOUTME: Coaching rule-table configuration with environment overrides and validation
// ABOUTME: Global validated instance cached in a OnceLock, defaults reproduce the seeded rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! # Coaching Configuration
//!
//! Every rule table used by the engine lives here with defaults matching the
//! seeded coaching program. [`CoachingConfig::load`] layers `ELSA_*` environment
//! overrides on the defaults and validates the result.

/// Body assessment tables
pub mod assessment;
/// Energy engine tables
pub mod energy;
/// Configuration error types
pub mod error;
/// Meal tier and curriculum tables
pub mod planning;

pub use assessment::{AssessmentConfig, BmiBand};
pub use energy::{
    BmrCoefficients, BmrConfig, EnergyConfig, ExpenditureConfig, MacroSplit, MacroSplitConfig,
    MealDistribution, MealDistributionConfig, WeightChangeConfig, WeightChangeStep,
};
pub use error::ConfigError;
pub use planning::{CurriculumConfig, MealTierConfig};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Global configuration singleton
static COACHING_CONFIG: OnceLock<CoachingConfig> = OnceLock::new();

/// Main coaching configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachingConfig {
    /// Energy engine tables
    pub energy: EnergyConfig,
    /// Body assessment tables
    pub assessment: AssessmentConfig,
    /// Meal template tiers
    pub meals: MealTierConfig,
    /// Curriculum tiling
    pub curriculum: CurriculumConfig,
}

impl CoachingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        COACHING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load coaching config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every table
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.energy.validate()?;
        self.assessment.validate()?;
        self.meals.validate()?;
        self.curriculum.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "ELSA_DAILY_ACTIVITY_FACTOR",
            &mut self.energy.expenditure.daily_activity_factor,
        )?;
        Self::apply_env_var(
            "ELSA_THERMIC_EFFECT_FACTOR",
            &mut self.energy.expenditure.thermic_effect_factor,
        )?;
        Self::apply_env_var(
            "ELSA_STEEP_CHANGE_THRESHOLD_KG",
            &mut self.energy.weight_change.steep_change_threshold_kg,
        )?;
        Self::apply_env_var(
            "ELSA_STEEP_CHANGE_MONTHS",
            &mut self.energy.weight_change.steep_change_months,
        )?;
        Self::apply_env_var(
            "ELSA_STANDARD_CHANGE_MONTHS",
            &mut self.energy.weight_change.standard_change_months,
        )?;

        Self::apply_env_var("ELSA_HEALTHY_BMI_LOW", &mut self.assessment.healthy_bmi_low)?;
        Self::apply_env_var("ELSA_IDEAL_BMI", &mut self.assessment.ideal_bmi)?;
        Self::apply_env_var(
            "ELSA_HEALTHY_BMI_HIGH",
            &mut self.assessment.healthy_bmi_high,
        )?;
        Self::apply_env_var(
            "ELSA_LIQUID_ML_PER_KG",
            &mut self.assessment.liquid_ml_per_kg,
        )?;
        Self::apply_env_var("ELSA_MIN_HEIGHT_CM", &mut self.assessment.min_height_cm)?;

        Self::apply_env_var(
            "ELSA_EXPECTED_CYCLE_WEEKS",
            &mut self.curriculum.expected_cycle_weeks,
        )?;
        Self::apply_env_var(
            "ELSA_WEEKS_PER_MONTH",
            &mut self.curriculum.weeks_per_month,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        CoachingConfig::default().validate().unwrap();
    }

    #[test]
    fn test_unordered_calorie_tiers_rejected() {
        let mut config = CoachingConfig::default();
        config.meals.calorie_tiers = vec![1600, 1350];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_macro_split_must_sum_to_one() {
        let mut config = CoachingConfig::default();
        config.energy.macro_splits.gain.fats = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_empty_weight_change_table_rejected() {
        let mut config = CoachingConfig::default();
        config.energy.weight_change.steps.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingField(_))
        ));
    }
}
