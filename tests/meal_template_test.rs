// ABOUTME: Integration tests for calorie tier selection and meal template lookup
// ABOUTME: Covers tier boundaries, diet filtering, slot ordering, and unseeded tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixture_catalog, init_test_logging};
use elsa_coach::intelligence::config::MealTierConfig;
use elsa_coach::intelligence::meals::{select, select_calorie_tier};
use elsa_coach::models::{Diet, MealSlot};

// ============================================================================
// Tier selection
// ============================================================================

#[test]
fn test_tier_is_smallest_strictly_above_tee() {
    let tiers = MealTierConfig::default().calorie_tiers;
    assert_eq!(select_calorie_tier(634.05, &tiers), 1350);
    assert_eq!(select_calorie_tier(1349.99, &tiers), 1350);
    assert_eq!(select_calorie_tier(1350.0, &tiers), 1600);
    assert_eq!(select_calorie_tier(2398.5, &tiers), 2399);
    assert_eq!(select_calorie_tier(3449.0, &tiers), 3450);
}

#[test]
fn test_tee_above_every_tier_uses_largest() {
    let tiers = MealTierConfig::default().calorie_tiers;
    assert_eq!(select_calorie_tier(3450.0, &tiers), 3450);
    assert_eq!(select_calorie_tier(5000.0, &tiers), 3450);
}

// ============================================================================
// Template lookup
// ============================================================================

#[test]
fn test_select_returns_templates_in_slot_order() {
    init_test_logging();
    let catalog = fixture_catalog();
    let selection = select(1420.0, Diet::Regular, &catalog, &MealTierConfig::default());

    assert_eq!(selection.calorie_tier, 1600);
    assert_eq!(selection.diet, Diet::Regular);
    let slots: Vec<MealSlot> = selection
        .templates
        .iter()
        .map(|template| template.meal_slot)
        .collect();
    assert_eq!(
        slots,
        vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
    );
    assert!(selection
        .templates
        .iter()
        .all(|template| template.calorie_tier == 1600 && template.diet == Diet::Regular));
}

#[test]
fn test_select_filters_by_diet() {
    let catalog = fixture_catalog();
    let selection = select(900.0, Diet::Vegan, &catalog, &MealTierConfig::default());

    assert_eq!(selection.calorie_tier, 1350);
    assert_eq!(selection.templates.len(), 1);
    assert_eq!(selection.templates[0].meal_slot, MealSlot::Lunch);
}

#[test]
fn test_unseeded_tier_yields_empty_selection() {
    init_test_logging();
    let catalog = fixture_catalog();
    let selection = select(3000.0, Diet::Regular, &catalog, &MealTierConfig::default());

    assert_eq!(selection.calorie_tier, 3050);
    assert!(selection.templates.is_empty());
}

#[test]
fn test_vegetarian_has_no_fixture_templates() {
    let catalog = fixture_catalog();
    let selection = select(1000.0, Diet::Vegetarian, &catalog, &MealTierConfig::default());
    assert!(selection.templates.is_empty());
}
