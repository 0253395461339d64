// ABOUTME: Food reference models with supergroup/group classification
// ABOUTME: Supergroup membership table validates foods loaded from catalog snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Nutritional supergroup used by meal templates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodSupergroup {
    /// Energy foods (cereals, tubers, ...)
    Energetic,
    /// Animal protein
    Protein,
    /// Dairy
    Dairy,
    /// Low-fat dairy
    LowFatDairy,
    /// Fruits and vegetables
    FruitsAndVegetables,
    /// Healthy fats
    HealthyFats,
    /// Everything else
    Other,
    /// Nutritional supplements
    NutritionalSupplements,
    /// Vegetarian energy foods
    VegetarianEnergetic,
    /// Vegetarian protein
    VegetarianProtein,
}

/// Food group
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodGroup {
    /// Cereals and derivatives
    Cereals,
    /// Tubers
    Tubers,
    /// Plantains
    Plantains,
    /// Roots
    Roots,
    /// Legumes
    Legumes,
    /// Red meats, chicken, fish and eggs
    Meats,
    /// Milk and dairy derivatives
    Milks,
    /// Low-fat milk and derivatives
    LowFatMilks,
    /// Fruits
    Fruits,
    /// Vegetables
    Vegetables,
    /// Dry fruits and seeds
    Seeds,
    /// Polyunsaturated fats
    PolyunsaturatedFats,
    /// Monounsaturated fats
    MonounsaturatedFats,
    /// Saturated fats
    SaturatedFats,
    /// Simple sugars
    Sugars,
    /// Sweets and desserts
    Sweets,
    /// Miscellaneous
    Miscellaneous,
    /// Prepared foods
    PreparedFoods,
    /// Spices
    Spices,
    /// Alcoholic drinks
    Alcohol,
    /// Nutritional supplements
    Supplements,
    /// Vegetarian foods
    VegetarianFoods,
    /// Vegan protein
    VeganProtein,
    /// Eggs
    Eggs,
}

impl FoodSupergroup {
    /// Groups belonging to this supergroup
    #[must_use]
    pub const fn groups(self) -> &'static [FoodGroup] {
        use FoodGroup as G;
        match self {
            Self::Energetic => &[G::Cereals, G::Tubers, G::Plantains, G::Roots, G::Legumes],
            Self::Protein => &[G::Meats],
            Self::Dairy => &[G::Milks],
            Self::LowFatDairy => &[G::LowFatMilks],
            Self::FruitsAndVegetables => &[G::Fruits, G::Vegetables],
            Self::HealthyFats => &[G::Seeds, G::PolyunsaturatedFats, G::MonounsaturatedFats],
            Self::Other => &[
                G::SaturatedFats,
                G::Sugars,
                G::Sweets,
                G::Miscellaneous,
                G::PreparedFoods,
                G::Spices,
                G::Alcohol,
            ],
            Self::NutritionalSupplements => &[G::Supplements],
            Self::VegetarianEnergetic => &[
                G::Cereals,
                G::Tubers,
                G::Plantains,
                G::Roots,
                G::VegetarianFoods,
            ],
            Self::VegetarianProtein => &[
                G::VeganProtein,
                G::Legumes,
                G::Milks,
                G::LowFatMilks,
                G::Eggs,
            ],
        }
    }

    /// Whether `group` belongs to this supergroup
    #[must_use]
    pub fn contains(self, group: FoodGroup) -> bool {
        self.groups().contains(&group)
    }
}

/// A food item with nutrition per half portion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Food {
    /// Food identifier
    pub id: Uuid,
    /// Name
    pub name: String,
    /// Supergroup
    pub supergroup: FoodSupergroup,
    /// Group within the supergroup
    pub group: FoodGroup,
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub proteins_g: f64,
    /// Fat (g)
    pub fats_g: f64,
    /// Carbohydrates (g)
    pub carbohydrates_g: f64,
    /// Household measure, e.g. "1 cup"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_measure: Option<String>,
}

impl Food {
    /// Check that the food's group belongs to its supergroup
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the group is not a member of the supergroup
    pub fn validate_group(&self) -> AppResult<()> {
        if self.supergroup.contains(self.group) {
            Ok(())
        } else {
            Err(AppError::invalid_input(format!(
                "group {:?} does not belong to supergroup {:?}",
                self.group, self.supergroup
            ))
            .with_resource_id(self.id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legumes_are_energetic_and_vegetarian_protein() {
        assert!(FoodSupergroup::Energetic.contains(FoodGroup::Legumes));
        assert!(FoodSupergroup::VegetarianProtein.contains(FoodGroup::Legumes));
        assert!(!FoodSupergroup::Protein.contains(FoodGroup::Legumes));
    }

    #[test]
    fn test_validate_group_rejects_mismatch() {
        let food = Food {
            id: Uuid::new_v4(),
            name: "Rice".to_owned(),
            supergroup: FoodSupergroup::Dairy,
            group: FoodGroup::Cereals,
            calories: 130.0,
            proteins_g: 2.7,
            fats_g: 0.3,
            carbohydrates_g: 28.0,
            home_measure: None,
        };
        assert!(food.validate_group().is_err());
    }
}
