// ABOUTME: Body assessment from biometrics: BMI status, healthy weight range, daily liquid need
// ABOUTME: Flags weight goals outside the healthy BMI band as advisories instead of errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use elsa_core::constants::energy::{CM_PER_METER, ML_PER_LITER};
use elsa_core::models::Biometrics;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::AssessmentConfig;
use crate::energy::round2;

/// BMI classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BodyStatus {
    /// BMI below 18.4
    Underweight,
    /// BMI below 24.9
    Normal,
    /// BMI below 29.9
    Overweight,
    /// BMI below 34.9
    ObesityType1,
    /// BMI below 39.9
    ObesityType2,
    /// Anything above
    MorbidObesity,
}

/// Weight range that keeps BMI healthy for the client's height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthyWeightRange {
    /// Lowest healthy weight (kg)
    pub lower_kg: f64,
    /// Ideal weight (kg)
    pub ideal_kg: f64,
    /// Highest healthy weight (kg)
    pub upper_kg: f64,
}

/// Derived body figures
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyAssessment {
    /// Height used for BMI (m), after the minimum-height guard
    pub height_m: f64,
    /// Current BMI
    pub bmi: f64,
    /// BMI at the goal weight
    pub goal_bmi: f64,
    /// Classification of the current BMI
    pub status: BodyStatus,
    /// Classification of the goal BMI
    pub goal_status: BodyStatus,
    /// Healthy weight range
    pub healthy_weight: HealthyWeightRange,
    /// Daily liquid requirement (l), 2 decimals
    pub liquid_liters: f64,
}

/// Advisory raised when the goal weight is unhealthy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthWarning {
    /// Goal BMI below the healthy minimum
    GoalTooLow {
        /// BMI at the goal weight
        goal_bmi: f64,
        /// Lowest healthy BMI
        healthy_bmi_low: f64,
    },
    /// Goal BMI above the healthy maximum
    GoalTooHigh {
        /// BMI at the goal weight
        goal_bmi: f64,
        /// Highest healthy BMI
        healthy_bmi_high: f64,
    },
}

impl HealthWarning {
    /// Copy with the goal BMI rounded to 2 decimals
    #[must_use]
    pub fn rounded(self) -> Self {
        match self {
            Self::GoalTooLow {
                goal_bmi,
                healthy_bmi_low,
            } => Self::GoalTooLow {
                goal_bmi: round2(goal_bmi),
                healthy_bmi_low,
            },
            Self::GoalTooHigh {
                goal_bmi,
                healthy_bmi_high,
            } => Self::GoalTooHigh {
                goal_bmi: round2(goal_bmi),
                healthy_bmi_high,
            },
        }
    }

    /// Message shown to the client
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::GoalTooLow { .. } => {
                "The weight goal is too low for a healthy BMI, please choose a higher goal"
            }
            Self::GoalTooHigh { .. } => {
                "The weight goal is too high for a healthy BMI, please choose a lower goal"
            }
        }
    }
}

/// Status for `bmi`
#[must_use]
pub fn classify_bmi(bmi: f64, config: &AssessmentConfig) -> BodyStatus {
    config
        .bmi_bands
        .iter()
        .find(|band| band.upper_bound > bmi)
        .map_or(config.fallback_status, |band| band.status)
}

/// Assess validated biometrics
#[must_use]
pub fn assess_body(biometrics: &Biometrics, config: &AssessmentConfig) -> BodyAssessment {
    let height_cm = if biometrics.height_cm < config.min_height_cm {
        warn!(
            height_cm = biometrics.height_cm,
            min_height_cm = config.min_height_cm,
            "Height below minimum, clamping for BMI"
        );
        config.min_height_cm
    } else {
        biometrics.height_cm
    };
    let height_m = height_cm / CM_PER_METER;
    let height_squared = height_m * height_m;
    let bmi = biometrics.weight_kg / height_squared;

    let goal_bmi = biometrics.weight_goal_kg / height_squared;

    BodyAssessment {
        height_m,
        bmi,
        goal_bmi,
        status: classify_bmi(bmi, config),
        goal_status: classify_bmi(goal_bmi, config),
        healthy_weight: HealthyWeightRange {
            lower_kg: config.healthy_bmi_low * height_squared,
            ideal_kg: config.ideal_bmi * height_squared,
            upper_kg: config.healthy_bmi_high * height_squared,
        },
        liquid_liters: round2(config.liquid_ml_per_kg * biometrics.weight_kg / ML_PER_LITER),
    }
}

impl BodyAssessment {
    /// Copy with every figure rounded to 2 decimals for display
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            height_m: round2(self.height_m),
            bmi: round2(self.bmi),
            goal_bmi: round2(self.goal_bmi),
            healthy_weight: HealthyWeightRange {
                lower_kg: round2(self.healthy_weight.lower_kg),
                ideal_kg: round2(self.healthy_weight.ideal_kg),
                upper_kg: round2(self.healthy_weight.upper_kg),
            },
            ..*self
        }
    }

    /// Advisory for an unhealthy goal, if any
    #[must_use]
    pub fn goal_warning(&self, config: &AssessmentConfig) -> Option<HealthWarning> {
        if self.goal_bmi < config.healthy_bmi_low {
            Some(HealthWarning::GoalTooLow {
                goal_bmi: self.goal_bmi,
                healthy_bmi_low: config.healthy_bmi_low,
            })
        } else if self.goal_bmi > config.healthy_bmi_high {
            Some(HealthWarning::GoalTooHigh {
                goal_bmi: self.goal_bmi,
                healthy_bmi_high: config.healthy_bmi_high,
            })
        } else {
            None
        }
    }
}
