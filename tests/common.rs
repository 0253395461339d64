// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, a seeded catalog, and enrolled sample profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::too_many_lines,
    clippy::similar_names,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls
)]
//! Shared test utilities for `elsa_coach`
//!
//! The fixture catalog seeds one bucket (female, beginner, health/social)
//! with a full 4-week base cycle for both disciplines: cycling on days 1, 3
//! and 5, gym on days 2 and 4, weekends off. It also carries one technique of
//! each type and a small set of psychological questions and questionnaires.

use std::env;
use std::sync::{Arc, Once};

use chrono::{DateTime, Duration, TimeZone, Utc};
use elsa_coach::intelligence::catalog::InMemoryCatalog;
use elsa_coach::intelligence::config::CoachingConfig;
use elsa_coach::models::{
    BeliefLevel, BeliefScale, BorgEffortLevel, BorgIntensity, CalorieIntakeType,
    CyclingIntensity, Diet, ExerciseDescription, ExerciseType, Food, FoodGroup,
    FoodGroupIntake, FoodSupergroup, Gender, HamiltonQuestion, MealSlot, MealTemplate,
    MembershipTier, PhysicalIntensity, PlanBucket, PlanEntry, Profile, PsychologicalQuestion,
    PsychologicalTechnique, Questionnaire, QuestionnaireItem, QuestionnaireKind,
    SessionDetails, SportsGoal, SportsLevel, TechniqueType,
};
use elsa_coach::services::CoachingService;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Catalog fixtures
// ============================================================================

pub const RICE_ID: Uuid = Uuid::from_u128(0x0001);
pub const CHICKEN_ID: Uuid = Uuid::from_u128(0x0002);
pub const APPLE_ID: Uuid = Uuid::from_u128(0x0003);

/// Cycling days in every fixture week
pub const CYCLING_DAYS: [u32; 3] = [1, 3, 5];
/// Gym days in every fixture week
pub const PHYSICAL_DAYS: [u32; 2] = [2, 4];

pub fn fixture_bucket() -> PlanBucket {
    PlanBucket::new(Gender::Female, SportsLevel::Beginner, SportsGoal::HealthSocial)
}

pub fn other_bucket() -> PlanBucket {
    PlanBucket::new(Gender::Male, SportsLevel::Advanced, SportsGoal::Performance)
}

/// Cycling duration grows 5 minutes per week of the cycle
pub fn cycling_minutes(week: u32) -> f64 {
    30.0 + 5.0 * f64::from(week)
}

pub fn fixture_cycling_cycle(bucket: PlanBucket) -> Vec<PlanEntry> {
    (1..=4)
        .flat_map(|week| {
            CYCLING_DAYS.into_iter().map(move |day| {
                PlanEntry::cycling(
                    week,
                    day,
                    cycling_minutes(week),
                    CyclingIntensity::Light,
                    format!("Endurance ride W{week}D{day}"),
                )
                .for_bucket(bucket)
            })
        })
        .collect()
}

pub fn fixture_physical_cycle(bucket: PlanBucket) -> Vec<PlanEntry> {
    (1..=4)
        .flat_map(|week| {
            PHYSICAL_DAYS.into_iter().map(move |day| {
                PlanEntry::physical(
                    week,
                    day,
                    40.0,
                    PhysicalIntensity::Moderate,
                    format!("Strength W{week}D{day}"),
                )
                .for_bucket(bucket)
                .with_details(SessionDetails::Physical {
                    exercises: vec![ExerciseDescription {
                        exercise_type: ExerciseType::FullBody,
                        activities: "squat, row, plank".into(),
                        description: "3 rounds of 12".into(),
                    }],
                })
            })
        })
        .collect()
}

pub fn template(slot: MealSlot, diet: Diet, tier: u32) -> MealTemplate {
    MealTemplate {
        meal_slot: slot,
        diet,
        calorie_intake_type: CalorieIntakeType::Normocaloric,
        calorie_tier: tier,
        food_group_intakes: vec![
            FoodGroupIntake {
                supergroup: FoodSupergroup::Energetic,
                intake: 1.5,
            },
            FoodGroupIntake {
                supergroup: FoodSupergroup::Protein,
                intake: 1.0,
            },
        ],
    }
}

pub fn food(id: Uuid, name: &str, supergroup: FoodSupergroup, group: FoodGroup, kcal: f64) -> Food {
    Food {
        id,
        name: name.into(),
        supergroup,
        group,
        calories: kcal,
        proteins_g: 0.0,
        fats_g: 0.0,
        carbohydrates_g: 0.0,
        home_measure: None,
    }
}

pub fn fixture_foods() -> Vec<Food> {
    vec![
        food(RICE_ID, "White rice", FoodSupergroup::Energetic, FoodGroup::Cereals, 100.0),
        food(CHICKEN_ID, "Chicken breast", FoodSupergroup::Protein, FoodGroup::Meats, 150.0),
        food(
            APPLE_ID,
            "Apple",
            FoodSupergroup::FruitsAndVegetables,
            FoodGroup::Fruits,
            50.0,
        ),
    ]
}

// ============================================================================
// Psychology fixtures
// ============================================================================

pub const BELIEFS_TEST_ID: Uuid = Uuid::from_u128(0x0b01);

pub fn question(week: u32, day: u32, number: u32) -> PsychologicalQuestion {
    PsychologicalQuestion {
        id: Uuid::from_u128(u128::from(week * 100 + day * 10 + number)),
        week,
        day,
        number: Some(number),
        description: format!("Reflection W{week}D{day} #{number}"),
        parent_id: None,
    }
}

/// Two questions on week 1 day 1 (seeded out of order), one on week 2 day 1
pub fn fixture_questions() -> Vec<PsychologicalQuestion> {
    vec![question(1, 1, 2), question(1, 1, 1), question(2, 1, 1)]
}

/// Irrational-beliefs test on week 1 day 2, inventory on week 3 day 3
pub fn fixture_questionnaires() -> Vec<Questionnaire> {
    let items = |count: u32| {
        (1..=count)
            .map(|number| QuestionnaireItem {
                number,
                description: format!("Item {number}"),
            })
            .collect::<Vec<_>>()
    };
    vec![
        Questionnaire {
            id: BELIEFS_TEST_ID,
            kind: QuestionnaireKind::IrrationalBeliefs,
            week: 1,
            day: 2,
            title: "Irrational beliefs test".into(),
            description: "Rate how much you agree with each idea".into(),
            summary_description: "Approval need".into(),
            questions: items(3),
            scales: vec![
                BeliefScale {
                    level: BeliefLevel::TotallyRational,
                    lower_limit: 0,
                    upper_limit: 6,
                },
                BeliefScale {
                    level: BeliefLevel::SomewhatIrrational,
                    lower_limit: 7,
                    upper_limit: 12,
                },
                BeliefScale {
                    level: BeliefLevel::TotallyIrrational,
                    lower_limit: 13,
                    upper_limit: 18,
                },
            ],
        },
        Questionnaire {
            id: Uuid::from_u128(0x0b02),
            kind: QuestionnaireKind::Inventory,
            week: 3,
            day: 3,
            title: "Sport psychological inventory".into(),
            description: "How often does each statement apply?".into(),
            summary_description: "Self-confidence".into(),
            questions: items(5),
            scales: Vec::new(),
        },
    ]
}

pub fn fixture_techniques() -> Vec<PsychologicalTechnique> {
    [
        TechniqueType::Respiration,
        TechniqueType::Jacobson,
        TechniqueType::Schultz,
        TechniqueType::Haynes,
        TechniqueType::Visualization,
    ]
    .into_iter()
    .enumerate()
    .map(|(index, technique_type)| PsychologicalTechnique {
        id: Uuid::from_u128(0x0c00 + u128::try_from(index).unwrap()),
        technique_type,
        title: format!("{technique_type:?}"),
        description: "Follow the audio guide".into(),
    })
    .collect()
}

pub fn fixture_borg_scale() -> Vec<BorgEffortLevel> {
    vec![
        BorgEffortLevel {
            intensity: BorgIntensity::Hard,
            description: "Breathing hard, talking is difficult".into(),
            lower_rpe: 7,
            higher_rpe: 8,
        },
        BorgEffortLevel {
            intensity: BorgIntensity::Soft,
            description: "Easy pace, can hold a conversation".into(),
            lower_rpe: 3,
            higher_rpe: 4,
        },
    ]
}

/// Hamilton items seeded out of order
pub fn fixture_hamilton_questions() -> Vec<HamiltonQuestion> {
    [3, 1, 2]
        .into_iter()
        .map(|number| HamiltonQuestion {
            number,
            title: format!("Item {number}"),
            description: "Rate the symptom".into(),
        })
        .collect()
}

/// Seeded catalog for the fixture bucket
pub fn fixture_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    for entry in fixture_cycling_cycle(fixture_bucket())
        .into_iter()
        .chain(fixture_physical_cycle(fixture_bucket()))
    {
        catalog = catalog.try_with_plan(entry).unwrap();
    }
    for tier in [1350, 1600, 2000] {
        for slot in [MealSlot::Dinner, MealSlot::Breakfast, MealSlot::Lunch] {
            catalog = catalog.with_meal_template(template(slot, Diet::Regular, tier));
        }
    }
    catalog = catalog.with_meal_template(template(MealSlot::Lunch, Diet::Vegan, 1350));
    for food in fixture_foods() {
        catalog = catalog.with_food(food);
    }
    for question in fixture_questions() {
        catalog = catalog.try_with_question(question).unwrap();
    }
    for questionnaire in fixture_questionnaires() {
        catalog = catalog.try_with_questionnaire(questionnaire).unwrap();
    }
    for technique in fixture_techniques() {
        catalog = catalog.with_technique(technique);
    }
    for level in fixture_borg_scale() {
        catalog = catalog.with_borg_level(level);
    }
    for item in fixture_hamilton_questions() {
        catalog = catalog.with_hamilton_question(item);
    }
    catalog
}

pub fn fixture_service() -> CoachingService<InMemoryCatalog> {
    init_test_logging();
    CoachingService::new(Arc::new(fixture_catalog()), CoachingConfig::default())
}

// ============================================================================
// Profile fixtures
// ============================================================================

/// Wednesday 2025-03-05 08:00 UTC
pub fn program_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 8, 0, 0).unwrap()
}

/// `days` whole days after the program start, mid-afternoon
pub fn days_into_program(days: i64) -> DateTime<Utc> {
    program_start() + Duration::days(days) + Duration::hours(7)
}

/// Female beginner losing 6 kg with a healthy goal, not enrolled
pub fn sample_profile() -> Profile {
    Profile::new(Gender::Female, SportsLevel::Beginner, SportsGoal::HealthSocial)
        .with_biometrics(34, 165.0, 68.0, 62.0)
}

/// [`sample_profile`] enrolled in a trimester starting at [`program_start`]
pub fn enrolled_profile() -> Profile {
    sample_profile().with_membership(MembershipTier::Trimester, program_start())
}
