// ABOUTME: Energy and macro engine: BMR, total expenditure, weight-goal pacing, macro and meal split
// ABOUTME: Activity energy comes from the plan catalog entries scheduled on the requested day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! # Energy & Macro Engine
//!
//! Computes a client's energy budget for one relative (day, week) of the
//! curriculum:
//!
//! 1. weight-goal direction from the sign of `weight_goal - weight`
//! 2. monthly pace of change and the matching caloric adjustment
//! 3. activity energy (duration x METs) of the day's sessions
//! 4. Harris-Benedict style BMR
//! 5. `TEE = BMR + daily activity share + thermic share + activity + adjustment`
//! 6. macro split by direction, then the split of everything across six meal slots

use elsa_core::constants::energy::{
    KCAL_PER_GRAM_CARBOHYDRATE, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use elsa_core::errors::AppResult;
use elsa_core::models::{Biometrics, MealSlot, PlanEntry, Profile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{DailySessions, PlanCatalog};
use crate::config::{
    BmrConfig, CoachingConfig, ExpenditureConfig, MacroSplit, MealDistribution,
    WeightChangeConfig,
};

/// Direction of the client's weight goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightGoal {
    /// Goal above current weight
    Gain,
    /// Goal below current weight
    Lose,
    /// Goal equals current weight
    Maintain,
}

impl WeightGoal {
    /// Direction from the signed difference `goal - current`
    #[must_use]
    pub fn from_difference(difference_kg: f64) -> Self {
        if difference_kg > 0.0 {
            Self::Gain
        } else if difference_kg < 0.0 {
            Self::Lose
        } else {
            Self::Maintain
        }
    }
}

/// Macro totals in kcal and grams
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Carbohydrate energy (kcal)
    pub carbohydrates_kcal: f64,
    /// Protein energy (kcal)
    pub protein_kcal: f64,
    /// Fat energy (kcal)
    pub fats_kcal: f64,
    /// Carbohydrates (g)
    pub carbohydrates_g: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Fats (g)
    pub fats_g: f64,
}

impl MacroBreakdown {
    /// Split `energy_kcal` by `split`
    #[must_use]
    pub fn from_energy(energy_kcal: f64, split: &MacroSplit) -> Self {
        let carbohydrates_kcal = energy_kcal * split.carbohydrates;
        let protein_kcal = energy_kcal * split.protein;
        let fats_kcal = energy_kcal * split.fats;
        Self {
            carbohydrates_kcal,
            protein_kcal,
            fats_kcal,
            carbohydrates_g: carbohydrates_kcal / KCAL_PER_GRAM_CARBOHYDRATE,
            protein_g: protein_kcal / KCAL_PER_GRAM_PROTEIN,
            fats_g: fats_kcal / KCAL_PER_GRAM_FAT,
        }
    }

    /// Every figure multiplied by `share`
    #[must_use]
    pub fn scaled(&self, share: f64) -> Self {
        Self {
            carbohydrates_kcal: self.carbohydrates_kcal * share,
            protein_kcal: self.protein_kcal * share,
            fats_kcal: self.fats_kcal * share,
            carbohydrates_g: self.carbohydrates_g * share,
            protein_g: self.protein_g * share,
            fats_g: self.fats_g * share,
        }
    }

    /// Every figure rounded to 2 decimals
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            carbohydrates_kcal: round2(self.carbohydrates_kcal),
            protein_kcal: round2(self.protein_kcal),
            fats_kcal: round2(self.fats_kcal),
            carbohydrates_g: round2(self.carbohydrates_g),
            protein_g: round2(self.protein_g),
            fats_g: round2(self.fats_g),
        }
    }
}

/// Energy and macros assigned to one meal slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MealSlotBudget {
    /// Meal slot
    pub slot: MealSlot,
    /// Share of the day
    pub share: f64,
    /// Energy (kcal)
    pub energy_kcal: f64,
    /// Macros for this slot
    pub macros: MacroBreakdown,
}

/// Energy budget for one (day, week)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyResult {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total energy expenditure (kcal/day)
    pub tee: f64,
    /// Activity energy of the day's sessions
    pub activity_kcal: f64,
    /// Weight-goal caloric adjustment (kcal/day)
    pub caloric_adjustment: f64,
    /// Weight-goal direction
    pub weight_goal: WeightGoal,
    /// Pace of change toward the goal (kg/month)
    pub monthly_change_kg: f64,
    /// Macro totals for the day
    pub macros: MacroBreakdown,
    /// Budget for each of the six meal slots, in serving order
    pub meal_slots: Vec<MealSlotBudget>,
}

impl EnergyResult {
    /// Copy with every figure rounded to 2 decimals for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            bmr: round2(self.bmr),
            tee: round2(self.tee),
            activity_kcal: round2(self.activity_kcal),
            caloric_adjustment: round2(self.caloric_adjustment),
            weight_goal: self.weight_goal,
            monthly_change_kg: round2(self.monthly_change_kg),
            macros: self.macros.rounded(),
            meal_slots: self
                .meal_slots
                .iter()
                .map(|budget| MealSlotBudget {
                    slot: budget.slot,
                    share: budget.share,
                    energy_kcal: round2(budget.energy_kcal),
                    macros: budget.macros.rounded(),
                })
                .collect(),
        }
    }

    /// Budget for `slot`
    #[must_use]
    pub fn slot(&self, slot: MealSlot) -> Option<&MealSlotBudget> {
        self.meal_slots.iter().find(|budget| budget.slot == slot)
    }
}

/// Round to 2 decimals
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pace of change in kg/month needed to close `difference_kg`
///
/// Large differences are spread over the longer horizon.
#[must_use]
pub fn monthly_change_kg(difference_kg: f64, config: &WeightChangeConfig) -> f64 {
    let magnitude = difference_kg.abs();
    if magnitude > config.steep_change_threshold_kg {
        magnitude / config.steep_change_months
    } else {
        magnitude / config.standard_change_months
    }
}

/// Daily caloric adjustment for a direction and monthly pace
///
/// The first row whose bound is at least `monthly_kg` wins. A pace above
/// every row yields 0.
#[must_use]
pub fn caloric_adjustment(goal: WeightGoal, monthly_kg: f64, config: &WeightChangeConfig) -> f64 {
    let Some(step) = config
        .steps
        .iter()
        .find(|step| monthly_kg <= step.max_kg_per_month)
    else {
        if goal != WeightGoal::Maintain {
            debug!(monthly_kg, "Weight change pace above every adjustment row");
        }
        return 0.0;
    };
    match goal {
        WeightGoal::Gain => step.gain_kcal,
        WeightGoal::Lose => step.lose_kcal,
        WeightGoal::Maintain => 0.0,
    }
}

/// Activity energy of a day's sessions
///
/// Each discipline contributes the first scheduled entry's duration x METs.
#[must_use]
pub fn activity_requirement(sessions: &DailySessions) -> f64 {
    [&sessions.cycling, &sessions.physical]
        .into_iter()
        .map(|entries| {
            if entries.len() > 1 {
                warn!(
                    entries = entries.len(),
                    "Several entries scheduled for one discipline, using the first"
                );
            }
            entries.first().map_or(0.0, PlanEntry::activity_energy)
        })
        .sum()
}

/// Basal metabolic rate (kcal/day)
#[must_use]
pub fn basal_metabolic_rate(biometrics: &Biometrics, config: &BmrConfig) -> f64 {
    let coefficients = config.for_gender(biometrics.gender);
    coefficients.constant + coefficients.weight_coef * biometrics.weight_kg
        + coefficients.height_coef * biometrics.height_cm
        - coefficients.age_coef * f64::from(biometrics.age)
}

/// Total energy expenditure (kcal/day)
#[must_use]
pub fn total_energy_expenditure(
    bmr: f64,
    activity_kcal: f64,
    adjustment_kcal: f64,
    config: &ExpenditureConfig,
) -> f64 {
    bmr + config.daily_activity_factor * bmr
        + config.thermic_effect_factor * bmr
        + activity_kcal
        + adjustment_kcal
}

/// Budgets for the six slots
#[must_use]
pub fn meal_slot_budgets(
    tee: f64,
    macros: &MacroBreakdown,
    distribution: &MealDistribution,
) -> Vec<MealSlotBudget> {
    MealSlot::ALL
        .iter()
        .map(|&slot| {
            let share = distribution.share(slot);
            MealSlotBudget {
                slot,
                share,
                energy_kcal: tee * share,
                macros: macros.scaled(share),
            }
        })
        .collect()
}

/// Energy budget from validated biometrics and a day's sessions
#[must_use]
pub fn compute_for(
    biometrics: &Biometrics,
    sessions: &DailySessions,
    config: &CoachingConfig,
) -> EnergyResult {
    let energy = &config.energy;
    let difference = biometrics.weight_difference_kg();
    let weight_goal = WeightGoal::from_difference(difference);
    let monthly_change_kg = monthly_change_kg(difference, &energy.weight_change);
    let adjustment = caloric_adjustment(weight_goal, monthly_change_kg, &energy.weight_change);
    let activity_kcal = activity_requirement(sessions);
    let bmr = basal_metabolic_rate(biometrics, &energy.bmr);
    let tee = total_energy_expenditure(bmr, activity_kcal, adjustment, &energy.expenditure);

    let macros = MacroBreakdown::from_energy(tee, energy.macro_splits.for_goal(weight_goal));
    let meal_slots = meal_slot_budgets(
        tee,
        &macros,
        energy.meal_distributions.for_goal(weight_goal),
    );

    EnergyResult {
        bmr,
        tee,
        activity_kcal,
        caloric_adjustment: adjustment,
        weight_goal,
        monthly_change_kg,
        macros,
        meal_slots,
    }
}

/// Energy budget for a profile at a relative (day, week)
///
/// # Errors
///
/// Returns `MissingRequiredField` or `InvalidInput` if biometrics are incomplete
pub fn compute(
    profile: &Profile,
    relative_day: u32,
    relative_week: u32,
    plans: &dyn PlanCatalog,
    config: &CoachingConfig,
) -> AppResult<EnergyResult> {
    let biometrics = profile.biometrics()?;
    let sessions = plans.find_sessions(&profile.bucket(), relative_day, relative_week);
    let result = compute_for(&biometrics, &sessions, config);
    debug!(
        profile_id = %profile.id,
        relative_day,
        relative_week,
        tee = result.tee,
        "Computed energy budget"
    );
    Ok(result)
}
