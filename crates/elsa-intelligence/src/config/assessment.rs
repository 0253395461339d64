// ABOUTME: Body assessment configuration: BMI bands, healthy BMI range, hydration, height guard
// ABOUTME: BMI bands are scanned ascending for the first upper bound above the measured BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::assessment::BodyStatus;

/// One BMI classification band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmiBand {
    /// Exclusive upper bound
    pub upper_bound: f64,
    /// Status for BMIs below the bound
    pub status: BodyStatus,
}

/// Body assessment configuration
///
/// Scan rule: `bmi_bands` ascending, first band whose `upper_bound` is
/// strictly greater than the BMI wins; otherwise `fallback_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Ascending BMI bands
    pub bmi_bands: Vec<BmiBand>,
    /// Status above every band
    pub fallback_status: BodyStatus,
    /// Lowest healthy BMI (19.5)
    pub healthy_bmi_low: f64,
    /// Ideal BMI (21.7)
    pub ideal_bmi: f64,
    /// Highest healthy BMI (23.9)
    pub healthy_bmi_high: f64,
    /// Daily liquid requirement per kg of body weight (ml)
    pub liquid_ml_per_kg: f64,
    /// Heights below this are clamped before dividing (cm)
    pub min_height_cm: f64,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        let bands = [
            (18.4, BodyStatus::Underweight),
            (24.9, BodyStatus::Normal),
            (29.9, BodyStatus::Overweight),
            (34.9, BodyStatus::ObesityType1),
            (39.9, BodyStatus::ObesityType2),
        ];
        Self {
            bmi_bands: bands
                .into_iter()
                .map(|(upper_bound, status)| BmiBand {
                    upper_bound,
                    status,
                })
                .collect(),
            fallback_status: BodyStatus::MorbidObesity,
            healthy_bmi_low: 19.5,
            ideal_bmi: 21.7,
            healthy_bmi_high: 23.9,
            liquid_ml_per_kg: 35.0,
            min_height_cm: 50.0,
        }
    }
}

impl AssessmentConfig {
    /// Validate the assessment tables
    ///
    /// # Errors
    ///
    /// Returns an error if bands are unordered or the healthy range is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmi_bands.is_empty() {
            return Err(ConfigError::MissingField("assessment.bmi_bands"));
        }
        if self
            .bmi_bands
            .windows(2)
            .any(|pair| pair[0].upper_bound >= pair[1].upper_bound)
        {
            return Err(ConfigError::InvalidRange(
                "assessment.bmi_bands must be strictly ascending",
            ));
        }
        if !(self.healthy_bmi_low < self.ideal_bmi && self.ideal_bmi < self.healthy_bmi_high) {
            return Err(ConfigError::InvalidRange(
                "healthy_bmi_low < ideal_bmi < healthy_bmi_high must hold",
            ));
        }
        if self.liquid_ml_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "liquid_ml_per_kg must be positive",
            ));
        }
        if self.min_height_cm <= 0.0 {
            return Err(ConfigError::ValueOutOfRange("min_height_cm must be positive"));
        }
        Ok(())
    }
}
