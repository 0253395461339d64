// ABOUTME: Energy engine configuration: BMR coefficients, expenditure factors, weight-change table
// ABOUTME: Macro splits and meal-slot distributions are keyed by weight-goal direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! Energy & Macro Configuration
//!
//! Every threshold and percentage the energy engine applies is an ordered data
//! table here. Scan rules are documented on the table that owns them.

use elsa_core::models::{Gender, MealSlot};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::energy::WeightGoal;

/// Tolerance when checking that shares sum to 1.0
const SHARE_SUM_TOLERANCE: f64 = 0.01;

/// Energy engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// Per-gender BMR coefficients
    pub bmr: BmrConfig,
    /// Factors applied on top of BMR
    pub expenditure: ExpenditureConfig,
    /// Weight-goal pacing and caloric adjustment table
    pub weight_change: WeightChangeConfig,
    /// Macro split per direction
    pub macro_splits: MacroSplitConfig,
    /// Meal-slot share of the day per direction
    pub meal_distributions: MealDistributionConfig,
}

/// Linear BMR formula: constant + w·weight + h·height − a·age
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmrCoefficients {
    /// Constant term
    pub constant: f64,
    /// kcal per kg of body weight
    pub weight_coef: f64,
    /// kcal per cm of height
    pub height_coef: f64,
    /// kcal subtracted per year of age
    pub age_coef: f64,
}

/// Harris-Benedict style BMR coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male formula: 66 + 13.7w + 5h − 6.8age
    pub male: BmrCoefficients,
    /// Female formula: 65 + 9.6w + 1.7h − 4.7age
    pub female: BmrCoefficients,
}

impl BmrConfig {
    /// Coefficients for `gender`
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> &BmrCoefficients {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male: BmrCoefficients {
                constant: 66.0,
                weight_coef: 13.7,
                height_coef: 5.0,
                age_coef: 6.8,
            },
            female: BmrCoefficients {
                constant: 65.0,
                weight_coef: 9.6,
                height_coef: 1.7,
                age_coef: 4.7,
            },
        }
    }
}

/// Fractions of BMR added to reach total expenditure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenditureConfig {
    /// Daily life activity share of BMR (0.2)
    pub daily_activity_factor: f64,
    /// Thermic effect of food share of BMR (0.1)
    pub thermic_effect_factor: f64,
}

impl Default for ExpenditureConfig {
    fn default() -> Self {
        Self {
            daily_activity_factor: 0.2,
            thermic_effect_factor: 0.1,
        }
    }
}

/// One row of the weight-change table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeightChangeStep {
    /// Upper bound of this row in kg/month (inclusive)
    pub max_kg_per_month: f64,
    /// kcal/day added when gaining
    pub gain_kcal: f64,
    /// kcal/day added when losing (negative)
    pub lose_kcal: f64,
}

/// Weight-goal pacing
///
/// Scan rule: rows are ascending by `max_kg_per_month`; the first row whose
/// bound is greater than or equal to the monthly magnitude wins. A magnitude
/// above every row yields no adjustment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightChangeConfig {
    /// Differences strictly above this are spread over the long horizon
    pub steep_change_threshold_kg: f64,
    /// Horizon in months for steep changes
    pub steep_change_months: f64,
    /// Horizon in months otherwise
    pub standard_change_months: f64,
    /// Adjustment rows, ascending
    pub steps: Vec<WeightChangeStep>,
}

impl Default for WeightChangeConfig {
    fn default() -> Self {
        let rows = [
            (0.5, 350.0, -375.0),
            (1.0, 400.0, -500.0),
            (1.5, 450.0, -583.0),
            (2.0, 500.0, -666.0),
            (2.5, 550.0, -750.0),
            (3.0, 600.0, -833.0),
            (3.5, 650.0, -916.0),
            (4.0, 700.0, -1000.0),
        ];
        Self {
            steep_change_threshold_kg: 11.0,
            steep_change_months: 6.0,
            standard_change_months: 3.0,
            steps: rows
                .into_iter()
                .map(|(max_kg_per_month, gain_kcal, lose_kcal)| WeightChangeStep {
                    max_kg_per_month,
                    gain_kcal,
                    lose_kcal,
                })
                .collect(),
        }
    }
}

/// Share of energy per macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Carbohydrate share
    pub carbohydrates: f64,
    /// Protein share
    pub protein: f64,
    /// Fat share
    pub fats: f64,
}

impl MacroSplit {
    /// Sum of the three shares
    #[must_use]
    pub fn total(&self) -> f64 {
        self.carbohydrates + self.protein + self.fats
    }
}

/// Macro split per weight-goal direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Gaining: 53/25/22
    pub gain: MacroSplit,
    /// Losing: 48/30/22
    pub lose: MacroSplit,
    /// Maintaining: 54/16/30
    pub maintain: MacroSplit,
}

impl MacroSplitConfig {
    /// Split for `goal`
    #[must_use]
    pub const fn for_goal(&self, goal: WeightGoal) -> &MacroSplit {
        match goal {
            WeightGoal::Gain => &self.gain,
            WeightGoal::Lose => &self.lose,
            WeightGoal::Maintain => &self.maintain,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            gain: MacroSplit {
                carbohydrates: 0.53,
                protein: 0.25,
                fats: 0.22,
            },
            lose: MacroSplit {
                carbohydrates: 0.48,
                protein: 0.30,
                fats: 0.22,
            },
            maintain: MacroSplit {
                carbohydrates: 0.54,
                protein: 0.16,
                fats: 0.30,
            },
        }
    }
}

/// Share of the day's energy served at each meal slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MealDistribution {
    /// Breakfast share
    pub breakfast: f64,
    /// Mid-morning snack share
    pub snack_1: f64,
    /// Lunch share
    pub lunch: f64,
    /// Afternoon snack share
    pub snack_2: f64,
    /// Dinner share
    pub dinner: f64,
    /// Night snack share
    pub night_snack: f64,
}

impl MealDistribution {
    /// Share for `slot`
    #[must_use]
    pub const fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Snack1 => self.snack_1,
            MealSlot::Lunch => self.lunch,
            MealSlot::Snack2 => self.snack_2,
            MealSlot::Dinner => self.dinner,
            MealSlot::NightSnack => self.night_snack,
        }
    }

    /// Sum of all slot shares
    #[must_use]
    pub fn total(&self) -> f64 {
        MealSlot::ALL.iter().map(|slot| self.share(*slot)).sum()
    }
}

/// Meal distribution per weight-goal direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDistributionConfig {
    /// Gaining: six meals
    pub gain: MealDistribution,
    /// Losing: no night snack
    pub lose: MealDistribution,
    /// Maintaining: three meals and one snack
    pub maintain: MealDistribution,
}

impl MealDistributionConfig {
    /// Distribution for `goal`
    #[must_use]
    pub const fn for_goal(&self, goal: WeightGoal) -> &MealDistribution {
        match goal {
            WeightGoal::Gain => &self.gain,
            WeightGoal::Lose => &self.lose,
            WeightGoal::Maintain => &self.maintain,
        }
    }
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            gain: MealDistribution {
                breakfast: 0.20,
                snack_1: 0.15,
                lunch: 0.20,
                snack_2: 0.15,
                dinner: 0.20,
                night_snack: 0.10,
            },
            lose: MealDistribution {
                breakfast: 0.22,
                snack_1: 0.15,
                lunch: 0.28,
                snack_2: 0.15,
                dinner: 0.20,
                night_snack: 0.0,
            },
            maintain: MealDistribution {
                breakfast: 0.25,
                snack_1: 0.15,
                lunch: 0.35,
                snack_2: 0.0,
                dinner: 0.25,
                night_snack: 0.0,
            },
        }
    }
}

impl EnergyConfig {
    /// Validate the energy tables
    ///
    /// # Errors
    ///
    /// Returns an error if coefficients are not positive, the weight-change
    /// table is empty or unordered, or any split does not sum to 1.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        for coefficients in [&self.bmr.male, &self.bmr.female] {
            if coefficients.weight_coef <= 0.0 || coefficients.height_coef <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "BMR weight and height coefficients must be positive",
                ));
            }
        }

        if self.expenditure.daily_activity_factor < 0.0
            || self.expenditure.thermic_effect_factor < 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "Expenditure factors must not be negative",
            ));
        }

        let pacing = &self.weight_change;
        if pacing.steep_change_months <= 0.0 || pacing.standard_change_months <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight change horizons must be positive",
            ));
        }
        if pacing.steps.is_empty() {
            return Err(ConfigError::MissingField("weight_change.steps"));
        }
        if pacing
            .steps
            .windows(2)
            .any(|pair| pair[0].max_kg_per_month >= pair[1].max_kg_per_month)
        {
            return Err(ConfigError::InvalidRange(
                "weight_change.steps must be strictly ascending",
            ));
        }
        if pacing
            .steps
            .iter()
            .any(|step| step.gain_kcal < 0.0 || step.lose_kcal > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Gain adjustments must be positive and loss adjustments negative",
            ));
        }

        let splits = &self.macro_splits;
        if [splits.gain, splits.lose, splits.maintain]
            .iter()
            .any(|split| (split.total() - 1.0).abs() > SHARE_SUM_TOLERANCE)
        {
            return Err(ConfigError::InvalidWeights("Macro splits must sum to 1.0"));
        }

        let meals = &self.meal_distributions;
        if [meals.gain, meals.lose, meals.maintain]
            .iter()
            .any(|distribution| (distribution.total() - 1.0).abs() > SHARE_SUM_TOLERANCE)
        {
            return Err(ConfigError::InvalidWeights(
                "Meal distributions must sum to 1.0",
            ));
        }

        Ok(())
    }
}
