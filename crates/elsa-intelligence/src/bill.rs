// ABOUTME: Meal bill summing the calories of the foods a client picked for each meal slot
// ABOUTME: Repeated picks count once and unknown food ids are skipped with a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use std::collections::HashSet;

use elsa_core::models::MealSlot;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::catalog::FoodCatalog;

/// Foods picked for one meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealSelection {
    /// Meal slot
    pub slot: MealSlot,
    /// Picked food ids
    pub food_ids: Vec<Uuid>,
}

/// One billed food
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BilledFood {
    /// Food id
    pub id: Uuid,
    /// Food name
    pub name: String,
    /// Calories (kcal)
    pub calories: f64,
}

/// Bill for one meal slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealBillLine {
    /// Meal slot
    pub slot: MealSlot,
    /// Billed foods in pick order
    pub foods: Vec<BilledFood>,
    /// Sum of calories (kcal)
    pub calories: f64,
}

/// Calorie bill of a day's picks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealBill {
    /// One line per slot with at least one known food, in first-pick order
    pub meals: Vec<MealBillLine>,
    /// Sum over every line (kcal)
    pub total_calories: f64,
    /// Picked ids missing from the catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_food_ids: Vec<Uuid>,
}

/// Bill the calories of `selections`
///
/// Each selection counts a food once however often it was picked. Selections
/// for the same slot add up into one line.
#[must_use]
pub fn meal_bill(selections: &[MealSelection], foods: &dyn FoodCatalog) -> MealBill {
    let mut bill = MealBill::default();
    for selection in selections {
        let mut seen = HashSet::new();
        let mut billed = Vec::new();
        for id in selection.food_ids.iter().filter(|id| seen.insert(**id)) {
            match foods.food(*id) {
                Some(food) => billed.push(BilledFood {
                    id: food.id,
                    name: food.name.clone(),
                    calories: food.calories,
                }),
                None => {
                    warn!(
                        food_id = %id,
                        slot = ?selection.slot,
                        "Skipping unknown food in meal bill"
                    );
                    bill.unknown_food_ids.push(*id);
                }
            }
        }
        if billed.is_empty() {
            continue;
        }

        let calories: f64 = billed.iter().map(|food| food.calories).sum();
        bill.total_calories += calories;
        if let Some(line) = bill.meals.iter_mut().find(|line| line.slot == selection.slot) {
            line.foods.extend(billed);
            line.calories += calories;
        } else {
            bill.meals.push(MealBillLine {
                slot: selection.slot,
                foods: billed,
                calories,
            });
        }
    }
    bill
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use elsa_core::models::{Food, FoodGroup, FoodSupergroup};

    fn food(name: &str, calories: f64) -> Food {
        Food {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            supergroup: FoodSupergroup::FruitsAndVegetables,
            group: FoodGroup::Fruits,
            calories,
            proteins_g: 0.5,
            fats_g: 0.2,
            carbohydrates_g: 20.0,
            home_measure: Some("1 unit".to_owned()),
        }
    }

    #[test]
    fn test_bill_sums_per_slot_and_total() {
        let apple = food("Apple", 52.0);
        let banana = food("Banana", 89.0);
        let catalog = InMemoryCatalog::new()
            .with_food(apple.clone())
            .with_food(banana.clone());
        let bill = meal_bill(
            &[
                MealSelection {
                    slot: MealSlot::Breakfast,
                    food_ids: vec![apple.id, banana.id],
                },
                MealSelection {
                    slot: MealSlot::Snack1,
                    food_ids: Vec::new(),
                },
                MealSelection {
                    slot: MealSlot::Dinner,
                    food_ids: vec![apple.id],
                },
            ],
            &catalog,
        );
        assert_eq!(bill.meals.len(), 2);
        assert!((bill.meals[0].calories - 141.0).abs() < f64::EPSILON);
        assert!((bill.total_calories - 193.0).abs() < f64::EPSILON);
        assert!(bill.unknown_food_ids.is_empty());
    }

    #[test]
    fn test_repeated_pick_counts_once() {
        let apple = food("Apple", 52.0);
        let catalog = InMemoryCatalog::new().with_food(apple.clone());
        let bill = meal_bill(
            &[MealSelection {
                slot: MealSlot::Snack2,
                food_ids: vec![apple.id, apple.id, apple.id],
            }],
            &catalog,
        );
        assert_eq!(bill.meals[0].foods.len(), 1);
        assert!((bill.total_calories - 52.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_same_slot_selections_merge() {
        let apple = food("Apple", 52.0);
        let banana = food("Banana", 89.0);
        let catalog = InMemoryCatalog::new()
            .with_food(apple.clone())
            .with_food(banana.clone());
        let bill = meal_bill(
            &[
                MealSelection {
                    slot: MealSlot::Lunch,
                    food_ids: vec![apple.id],
                },
                MealSelection {
                    slot: MealSlot::Lunch,
                    food_ids: vec![apple.id, banana.id],
                },
            ],
            &catalog,
        );
        assert_eq!(bill.meals.len(), 1);
        assert!((bill.meals[0].calories - 193.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_food_is_skipped() {
        let apple = food("Apple", 52.0);
        let catalog = InMemoryCatalog::new().with_food(apple.clone());
        let missing = Uuid::new_v4();
        let bill = meal_bill(
            &[
                MealSelection {
                    slot: MealSlot::Lunch,
                    food_ids: vec![apple.id, missing],
                },
                MealSelection {
                    slot: MealSlot::Dinner,
                    food_ids: vec![missing],
                },
            ],
            &catalog,
        );
        assert_eq!(bill.meals.len(), 1);
        assert!((bill.total_calories - 52.0).abs() < f64::EPSILON);
        assert_eq!(bill.unknown_food_ids, vec![missing, missing]);
    }
}
