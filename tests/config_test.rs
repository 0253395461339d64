// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Tests ELSA_* rule-table overrides, validation failures, and service settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use elsa_coach::config::{AppConfig, CoachingConfig, Environment};
use elsa_coach::intelligence::config::ConfigError;
use serial_test::serial;

const OVERRIDES: [&str; 5] = [
    "ELSA_MIN_HEIGHT_CM",
    "ELSA_DAILY_ACTIVITY_FACTOR",
    "ELSA_IDEAL_BMI",
    "ELSA_HEALTHY_BMI_LOW",
    "ELSA_WEEKS_PER_MONTH",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
    env::remove_var("ELSA_ENVIRONMENT");
    env::remove_var("ELSA_CATALOG_PATH");
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    let config = CoachingConfig::load().unwrap();
    let defaults = CoachingConfig::default();

    assert!(
        (config.assessment.min_height_cm - defaults.assessment.min_height_cm).abs() < f64::EPSILON
    );
    assert_eq!(config.meals.calorie_tiers, defaults.meals.calorie_tiers);
}

#[test]
#[serial]
fn test_env_overrides_rule_tables() {
    clear_overrides();
    env::set_var("ELSA_MIN_HEIGHT_CM", "120");
    env::set_var("ELSA_DAILY_ACTIVITY_FACTOR", "0.25");

    let config = CoachingConfig::load().unwrap();
    assert!((config.assessment.min_height_cm - 120.0).abs() < f64::EPSILON);
    assert!((config.energy.expenditure.daily_activity_factor - 0.25).abs() < f64::EPSILON);

    clear_overrides();
}

#[test]
#[serial]
fn test_unparseable_override_is_parse_error() {
    clear_overrides();
    env::set_var("ELSA_IDEAL_BMI", "twenty");

    let error = CoachingConfig::load().unwrap_err();
    assert!(matches!(
        error,
        ConfigError::Parse(ref message) if message.contains("ELSA_IDEAL_BMI")
    ));

    clear_overrides();
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    clear_overrides();
    // Healthy range lower bound above the ideal BMI
    env::set_var("ELSA_HEALTHY_BMI_LOW", "30");

    assert!(CoachingConfig::load().is_err());

    clear_overrides();
}

#[test]
#[serial]
fn test_app_config_defaults() {
    clear_overrides();
    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
}

#[test]
#[serial]
fn test_app_config_reads_environment_and_catalog_path() {
    clear_overrides();
    env::set_var("ELSA_ENVIRONMENT", "prod");
    env::set_var("ELSA_CATALOG_PATH", "/srv/elsa/catalog.json");

    let config = AppConfig::from_env().unwrap();
    assert!(config.environment.is_production());
    assert_eq!(config.environment.to_string(), "production");
    assert_eq!(config.catalog_path, PathBuf::from("/srv/elsa/catalog.json"));

    clear_overrides();
}

#[test]
#[serial]
fn test_app_config_propagates_rule_table_errors() {
    clear_overrides();
    env::set_var("ELSA_WEEKS_PER_MONTH", "0");

    assert!(AppConfig::from_env().is_err());

    clear_overrides();
}

#[test]
fn test_environment_parsing_falls_back_to_development() {
    assert_eq!(Environment::from_str_or_default("TEST"), Environment::Testing);
    assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
}
