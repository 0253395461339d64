// ABOUTME: Plan catalog models for cycling and physical-training session templates
// ABOUTME: PlanEntry keyed by bucket, relative week and day, with MET intensity and session details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profile::{Gender, SportsGoal, SportsLevel};

/// Demographic + goal bucket a plan entry is seeded for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlanBucket {
    /// Gender
    pub gender: Gender,
    /// Sports level
    pub sports_level: SportsLevel,
    /// Sports goal
    pub sports_goal: SportsGoal,
}

impl PlanBucket {
    /// Create a bucket
    #[must_use]
    pub const fn new(gender: Gender, sports_level: SportsLevel, sports_goal: SportsGoal) -> Self {
        Self {
            gender,
            sports_level,
            sports_goal,
        }
    }
}

/// Training discipline of a plan entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// Cycling session
    Cycling,
    /// Gym / physical-training session
    Physical,
}

/// Cycling intensity scale in METs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CyclingIntensity {
    /// 4 METs
    VeryLight,
    /// 6 METs
    Light,
    /// 8 METs
    Moderate,
    /// 10 METs
    Strong,
}

impl CyclingIntensity {
    /// MET-equivalent value
    #[must_use]
    pub const fn mets(self) -> f64 {
        match self {
            Self::VeryLight => 4.0,
            Self::Light => 6.0,
            Self::Moderate => 8.0,
            Self::Strong => 10.0,
        }
    }
}

/// Gym intensity scale in METs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhysicalIntensity {
    /// 3 METs
    Light,
    /// 4.5 METs
    Moderate,
    /// 6 METs
    Strong,
}

impl PhysicalIntensity {
    /// MET-equivalent value
    #[must_use]
    pub const fn mets(self) -> f64 {
        match self {
            Self::Light => 3.0,
            Self::Moderate => 4.5,
            Self::Strong => 6.0,
        }
    }
}

/// Structure of a cycling session
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CyclingSession {
    /// Warm-up instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_up: Option<String>,
    /// Number of series
    pub series: u32,
    /// Rest between series (minutes)
    pub series_rest_minutes: f64,
    /// Repetitions per series
    pub repetitions: u32,
    /// Duration of one repetition (minutes)
    pub repetition_minutes: f64,
    /// Rest between repetitions (minutes)
    pub repetition_rest_minutes: f64,
    /// Cool-down (minutes)
    pub cool_down_minutes: f64,
    /// Target effort, free text such as "75%" or "LIBRE"
    pub effort_percentage: String,
}

/// Kind of gym exercise block
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    /// Full stretch routine
    FullStretch,
    /// Stretch performed around training
    TrainingStretch,
    /// Full body strength block
    FullBody,
    /// Upper body strength block
    UpperBody,
    /// Lower body strength block
    LowerBody,
    /// Core block
    Core,
}

/// One gym exercise block of a physical session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseDescription {
    /// Block type
    pub exercise_type: ExerciseType,
    /// Activities, comma separated
    pub activities: String,
    /// Instructions
    pub description: String,
}

/// Discipline-specific session structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "discipline", rename_all = "snake_case")]
pub enum SessionDetails {
    /// Cycling structure
    Cycling(CyclingSession),
    /// Gym exercise blocks
    Physical {
        /// Exercise blocks in order
        exercises: Vec<ExerciseDescription>,
    },
}

/// A seeded session template
///
/// Entries are read-only reference data. One entry can serve several buckets
/// when the seed sheet is shared (for example a beginner plan used by both
/// genders).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Buckets this entry is seeded for
    pub buckets: Vec<PlanBucket>,
    /// Week within the base cycle (1-4)
    pub week: u32,
    /// Day within the week (1-7)
    pub day: u32,
    /// Training duration (minutes)
    pub duration_minutes: f64,
    /// Intensity in MET-equivalent units
    pub intensity_mets: f64,
    /// Free-text session description
    pub description: String,
    /// Discipline-specific structure
    pub details: SessionDetails,
}

impl PlanEntry {
    /// Cycling entry with default session structure
    #[must_use]
    pub fn cycling(
        week: u32,
        day: u32,
        duration_minutes: f64,
        intensity: CyclingIntensity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            buckets: Vec::new(),
            week,
            day,
            duration_minutes,
            intensity_mets: intensity.mets(),
            description: description.into(),
            details: SessionDetails::Cycling(CyclingSession::default()),
        }
    }

    /// Physical entry with no exercise blocks yet
    #[must_use]
    pub fn physical(
        week: u32,
        day: u32,
        duration_minutes: f64,
        intensity: PhysicalIntensity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            buckets: Vec::new(),
            week,
            day,
            duration_minutes,
            intensity_mets: intensity.mets(),
            description: description.into(),
            details: SessionDetails::Physical {
                exercises: Vec::new(),
            },
        }
    }

    /// Add a bucket this entry serves
    #[must_use]
    pub fn for_bucket(mut self, bucket: PlanBucket) -> Self {
        if !self.buckets.contains(&bucket) {
            self.buckets.push(bucket);
        }
        self
    }

    /// Replace the session details
    #[must_use]
    pub fn with_details(mut self, details: SessionDetails) -> Self {
        self.details = details;
        self
    }

    /// Discipline derived from the session details
    #[must_use]
    pub const fn discipline(&self) -> Discipline {
        match self.details {
            SessionDetails::Cycling(_) => Discipline::Cycling,
            SessionDetails::Physical { .. } => Discipline::Physical,
        }
    }

    /// Whether the entry is seeded for `bucket`
    #[must_use]
    pub fn serves(&self, bucket: &PlanBucket) -> bool {
        self.buckets.contains(bucket)
    }

    /// Activity energy of the session: duration x METs
    #[must_use]
    pub fn activity_energy(&self) -> f64 {
        self.duration_minutes * self.intensity_mets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_energy_is_duration_times_mets() {
        let entry = PlanEntry::cycling(1, 2, 45.0, CyclingIntensity::Moderate, "Tempo");
        assert!((entry.activity_energy() - 360.0).abs() < f64::EPSILON);
        assert_eq!(entry.discipline(), Discipline::Cycling);
    }

    #[test]
    fn test_for_bucket_does_not_duplicate() {
        let bucket = PlanBucket::new(Gender::Male, SportsLevel::Beginner, SportsGoal::Performance);
        let entry = PlanEntry::physical(1, 1, 30.0, PhysicalIntensity::Light, "Core")
            .for_bucket(bucket)
            .for_bucket(bucket);
        assert_eq!(entry.buckets.len(), 1);
        assert!(entry.serves(&bucket));
    }

    #[test]
    fn test_session_details_tagged_by_discipline() {
        let entry = PlanEntry::physical(2, 3, 40.0, PhysicalIntensity::Strong, "Legs");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["details"]["discipline"], "physical");
    }
}
