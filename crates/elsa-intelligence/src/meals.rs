// ABOUTME: Meal template selector mapping total energy expenditure and diet to a calorie tier
// ABOUTME: Returns the tier's templates in meal-slot order with their food-group targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use elsa_core::models::{Diet, MealTemplate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::MealTemplateCatalog;
use crate::config::MealTierConfig;

/// Templates chosen for one day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlanSelection {
    /// Diet family
    pub diet: Diet,
    /// Selected calorie tier (kcal)
    pub calorie_tier: u32,
    /// Templates ordered by tier, then meal slot
    pub templates: Vec<MealTemplate>,
}

/// Smallest tier strictly greater than `tee`, else the largest tier
///
/// Returns 0 only for an empty tier table, which validation rejects.
#[must_use]
pub fn select_calorie_tier(tee: f64, tiers: &[u32]) -> u32 {
    tiers
        .iter()
        .copied()
        .find(|&tier| tee < f64::from(tier))
        .or_else(|| tiers.last().copied())
        .unwrap_or_default()
}

/// Meal templates for `tee` and `diet`
#[must_use]
pub fn select(
    tee: f64,
    diet: Diet,
    catalog: &dyn MealTemplateCatalog,
    config: &MealTierConfig,
) -> MealPlanSelection {
    let calorie_tier = select_calorie_tier(tee, &config.calorie_tiers);
    let mut templates = catalog.find_templates(diet, calorie_tier);
    templates.sort_by_key(|template| (template.calorie_tier, template.meal_slot));

    if templates.is_empty() {
        warn!(?diet, calorie_tier, "No meal templates seeded for tier");
    } else {
        debug!(?diet, calorie_tier, templates = templates.len(), "Selected meal templates");
    }

    MealPlanSelection {
        diet,
        calorie_tier,
        templates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use elsa_core::models::{
        CalorieIntakeType, FoodGroupIntake, FoodSupergroup, MealSlot,
    };

    fn template(slot: MealSlot, diet: Diet, tier: u32) -> MealTemplate {
        MealTemplate {
            meal_slot: slot,
            diet,
            calorie_intake_type: CalorieIntakeType::Normocaloric,
            calorie_tier: tier,
            food_group_intakes: vec![FoodGroupIntake {
                supergroup: FoodSupergroup::Energetic,
                intake: 2.0,
            }],
        }
    }

    #[test]
    fn test_tier_is_smallest_strictly_greater() {
        let tiers = MealTierConfig::default().calorie_tiers;
        assert_eq!(select_calorie_tier(2450.0, &tiers), 2700);
        assert_eq!(select_calorie_tier(1350.0, &tiers), 1600);
        assert_eq!(select_calorie_tier(900.0, &tiers), 1350);
        assert_eq!(select_calorie_tier(5000.0, &tiers), 3450);
    }

    #[test]
    fn test_select_filters_diet_and_orders_slots() {
        let catalog = InMemoryCatalog::new()
            .with_meal_template(template(MealSlot::Dinner, Diet::Vegan, 2000))
            .with_meal_template(template(MealSlot::Breakfast, Diet::Vegan, 2000))
            .with_meal_template(template(MealSlot::Lunch, Diet::Regular, 2000))
            .with_meal_template(template(MealSlot::Lunch, Diet::Vegan, 1600));
        let selection = select(1800.0, Diet::Vegan, &catalog, &MealTierConfig::default());
        assert_eq!(selection.calorie_tier, 2000);
        let slots: Vec<_> = selection.templates.iter().map(|t| t.meal_slot).collect();
        assert_eq!(slots, vec![MealSlot::Breakfast, MealSlot::Dinner]);
    }
}
