// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Calendar rollover, macro-nutrient energy density, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Training calendar constants
pub mod calendar {
    /// Days in one training week
    pub const DAYS_PER_WEEK: u32 = 7;
    /// Weeks in one curriculum cycle (the seeded base plan spans this many weeks)
    pub const WEEKS_PER_CYCLE: u32 = 4;
    /// Weeks counted per purchased membership month
    pub const WEEKS_PER_MONTH: u32 = 4;
    /// Seconds in a calendar day
    pub const SECONDS_PER_DAY: i64 = 86_400;
}

/// Energy density of macro-nutrients
pub mod energy {
    /// Carbohydrate energy density (kcal/g)
    pub const KCAL_PER_GRAM_CARBOHYDRATE: f64 = 4.0;
    /// Protein energy density (kcal/g)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Fat energy density (kcal/g)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
    /// Centimeters per meter, used for BMI
    pub const CM_PER_METER: f64 = 100.0;
    /// Milliliters per liter, used for the liquid requirement
    pub const ML_PER_LITER: f64 = 1000.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Root service name
    pub const ELSA_COACH: &str = "elsa-coach";
    /// CLI binary name
    pub const ELSA_CLI: &str = "elsa-cli";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Path to the catalog snapshot JSON file
    pub const CATALOG_PATH: &str = "ELSA_CATALOG_PATH";
    /// Deployment environment (development, staging, production)
    pub const ENVIRONMENT: &str = "ELSA_ENVIRONMENT";
    /// Default catalog snapshot path when none is configured
    pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";
}
