// ABOUTME: Meal template models keyed by meal slot, diet, intake type and calorie tier
// ABOUTME: MealSlot defines the six fixed daily slots shared by the energy engine and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use serde::{Deserialize, Serialize};

use super::food::FoodSupergroup;
use super::profile::Diet;

/// The six fixed daily meal slots, in serving order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Mid-morning snack
    #[serde(rename = "SNACK_1")]
    Snack1,
    /// Lunch
    Lunch,
    /// Afternoon snack
    #[serde(rename = "SNACK_2")]
    Snack2,
    /// Dinner
    Dinner,
    /// Night snack
    NightSnack,
}

impl MealSlot {
    /// All slots in serving order
    pub const ALL: [Self; 6] = [
        Self::Breakfast,
        Self::Snack1,
        Self::Lunch,
        Self::Snack2,
        Self::Dinner,
        Self::NightSnack,
    ];
}

/// Calorie balance a template is designed for
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalorieIntakeType {
    /// Below maintenance
    Hypocaloric,
    /// Maintenance
    #[default]
    Normocaloric,
    /// Above maintenance
    Hypercaloric,
}

/// Target servings of one food supergroup within a meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FoodGroupIntake {
    /// Food supergroup
    pub supergroup: FoodSupergroup,
    /// Servings
    pub intake: f64,
}

/// Tiered meal-plan template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTemplate {
    /// Meal slot
    pub meal_slot: MealSlot,
    /// Diet family
    pub diet: Diet,
    /// Calorie balance
    #[serde(default)]
    pub calorie_intake_type: CalorieIntakeType,
    /// Upper kcal bound of the tier this template belongs to
    pub calorie_tier: u32,
    /// Food-group intake targets
    pub food_group_intakes: Vec<FoodGroupIntake>,
}
