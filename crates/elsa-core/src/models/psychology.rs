// ABOUTME: Psychological support catalog models: daily questions, questionnaires, techniques, scales
// ABOUTME: Mood answers score feelings on a 0-4 intensity, reversed for the positive-only items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Highest mood intensity ("a lot")
pub const MAX_MOOD_INTENSITY: u8 = 4;

/// Reflection question shown on one relative (week, day)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PsychologicalQuestion {
    /// Identifier
    pub id: Uuid,
    /// Relative week (1..=4)
    pub week: u32,
    /// Relative day (1..=7)
    pub day: u32,
    /// Position within the day, if numbered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    /// Question text
    pub description: String,
    /// Question this one is a follow-up of
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
}

/// Family of a scheduled questionnaire
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionnaireKind {
    /// Irrational beliefs test, scored against belief scales
    IrrationalBeliefs,
    /// Psychological inventory
    Inventory,
}

/// Band of an irrational-beliefs score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeliefLevel {
    /// Totally irrational
    TotallyIrrational,
    /// Very irrational
    VeryIrrational,
    /// Somewhat irrational
    SomewhatIrrational,
    /// Somewhat rational
    SomewhatRational,
    /// Very rational
    VeryRational,
    /// Totally rational
    TotallyRational,
}

/// Inclusive score range mapped to a belief level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeliefScale {
    /// Level reported for scores in range
    pub level: BeliefLevel,
    /// Lowest score in range
    pub lower_limit: u32,
    /// Highest score in range
    pub upper_limit: u32,
}

impl BeliefScale {
    /// Whether `score` falls in this range
    #[must_use]
    pub const fn contains(&self, score: u32) -> bool {
        self.lower_limit <= score && score <= self.upper_limit
    }
}

/// Numbered item of a questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionnaireItem {
    /// Item number
    pub number: u32,
    /// Item text
    pub description: String,
}

/// Questionnaire shown on one relative (week, day)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Questionnaire {
    /// Identifier
    pub id: Uuid,
    /// Family
    pub kind: QuestionnaireKind,
    /// Relative week (1..=4)
    pub week: u32,
    /// Relative day (1..=7)
    pub day: u32,
    /// Title
    pub title: String,
    /// Instructions
    pub description: String,
    /// Text shown next to the result
    pub summary_description: String,
    /// Items in order
    #[serde(default)]
    pub questions: Vec<QuestionnaireItem>,
    /// Score bands, irrational-beliefs tests only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scales: Vec<BeliefScale>,
}

/// Relaxation technique family
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TechniqueType {
    /// Breathing exercises
    Respiration,
    /// Jacobson progressive relaxation
    Jacobson,
    /// Schultz autogenic training
    Schultz,
    /// Schwartz & Haynes relaxation
    Haynes,
    /// Guided visualization
    Visualization,
}

/// Relaxation technique
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PsychologicalTechnique {
    /// Identifier
    pub id: Uuid,
    /// Family, which decides the days it is shown
    pub technique_type: TechniqueType,
    /// Title
    pub title: String,
    /// Instructions
    pub description: String,
}

/// Borg perceived-exertion band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BorgIntensity {
    /// Very, very soft
    ExtremelySoft,
    /// Very soft
    VerySoft,
    /// Soft
    Soft,
    /// Somewhat hard
    SomewhatHard,
    /// Hard
    Hard,
    /// Very, very hard
    ExtremelyHard,
}

/// One row of the Borg effort scale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BorgEffortLevel {
    /// Band
    pub intensity: BorgIntensity,
    /// How the effort feels
    pub description: String,
    /// Lowest RPE (0..=10)
    pub lower_rpe: u8,
    /// Highest RPE (0..=10)
    pub higher_rpe: u8,
}

/// Item of the Hamilton anxiety questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HamiltonQuestion {
    /// Item number (0..=14)
    pub number: u32,
    /// Title
    pub title: String,
    /// Symptoms described
    pub description: String,
}

/// Feeling rated in a mood profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum Feeling {
    Friendly,
    Tense,
    Angry,
    Worn,
    Unhappy,
    HotHeaded,
    Dynamic,
    Confused,
    Sorry,
    Trembling,
    Apathetic,
    Furious,
    Considered,
    Sad,
    Active,
    Nervous,
    Grumpy,
    Blue,
    Energetic,
    Panicked,
    Hopeless,
    Relaxed,
    Unworthy,
    Malicious,
    Sympathetic,
    HardToHandle,
    Restless,
    UnableToConcentrate,
    Fatigued,
    Useful,
    Upset,
    Discouraged,
    Resentful,
    Alone,
    Miserable,
    Confusing,
    Happy,
    Bitter,
    Exhausted,
    Anxious,
    FightReady,
    GoodMood,
    Somber,
    Desperate,
    Slow,
    Rebellious,
    Defenseless,
    Tired,
    Bewildered,
    Alert,
    Cheated,
    Efficient,
    Trustworthy,
    Cheerful,
    BadMood,
    Worthless,
    Forgetful,
    Carefree,
    Terrified,
    Guilty,
    Vigorous,
    Uncertain,
    Drained,
}

impl Feeling {
    /// Every feeling in questionnaire order
    pub const ALL: [Self; 63] = [
        Self::Friendly,
        Self::Tense,
        Self::Angry,
        Self::Worn,
        Self::Unhappy,
        Self::HotHeaded,
        Self::Dynamic,
        Self::Confused,
        Self::Sorry,
        Self::Trembling,
        Self::Apathetic,
        Self::Furious,
        Self::Considered,
        Self::Sad,
        Self::Active,
        Self::Nervous,
        Self::Grumpy,
        Self::Blue,
        Self::Energetic,
        Self::Panicked,
        Self::Hopeless,
        Self::Relaxed,
        Self::Unworthy,
        Self::Malicious,
        Self::Sympathetic,
        Self::HardToHandle,
        Self::Restless,
        Self::UnableToConcentrate,
        Self::Fatigued,
        Self::Useful,
        Self::Upset,
        Self::Discouraged,
        Self::Resentful,
        Self::Alone,
        Self::Miserable,
        Self::Confusing,
        Self::Happy,
        Self::Bitter,
        Self::Exhausted,
        Self::Anxious,
        Self::FightReady,
        Self::GoodMood,
        Self::Somber,
        Self::Desperate,
        Self::Slow,
        Self::Rebellious,
        Self::Defenseless,
        Self::Tired,
        Self::Bewildered,
        Self::Alert,
        Self::Cheated,
        Self::Efficient,
        Self::Trustworthy,
        Self::Cheerful,
        Self::BadMood,
        Self::Worthless,
        Self::Forgetful,
        Self::Carefree,
        Self::Terrified,
        Self::Guilty,
        Self::Vigorous,
        Self::Uncertain,
        Self::Drained,
    ];

    /// Positive items scored in reverse within a negative factor
    #[must_use]
    pub const fn is_reverse_scored(self) -> bool {
        matches!(self, Self::Efficient | Self::Relaxed)
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Friendly => "Friendly",
            Self::Tense => "Tense",
            Self::Angry => "Angry",
            Self::Worn => "Worn",
            Self::Unhappy => "Unhappy",
            Self::HotHeaded => "Hot headed",
            Self::Dynamic => "Dynamic",
            Self::Confused => "Confused",
            Self::Sorry => "Sorry",
            Self::Trembling => "Trembling",
            Self::Apathetic => "Apathetic",
            Self::Furious => "Furious",
            Self::Considered => "Considered",
            Self::Sad => "Sad",
            Self::Active => "Active",
            Self::Nervous => "Nervous",
            Self::Grumpy => "Grumpy",
            Self::Blue => "Blue",
            Self::Energetic => "Energetic",
            Self::Panicked => "Panicked",
            Self::Hopeless => "Hopeless",
            Self::Relaxed => "Relaxed",
            Self::Unworthy => "Unworthy",
            Self::Malicious => "Malicious",
            Self::Sympathetic => "Sympathetic",
            Self::HardToHandle => "Hard to handle",
            Self::Restless => "Restless",
            Self::UnableToConcentrate => "Unable to concentrate",
            Self::Fatigued => "Fatigued",
            Self::Useful => "Useful",
            Self::Upset => "Upset",
            Self::Discouraged => "Discouraged",
            Self::Resentful => "Resentful",
            Self::Alone => "Alone",
            Self::Miserable => "Miserable",
            Self::Confusing => "Confusing",
            Self::Happy => "Happy",
            Self::Bitter => "Bitter",
            Self::Exhausted => "Exhausted",
            Self::Anxious => "Anxious",
            Self::FightReady => "Fight-ready",
            Self::GoodMood => "Good mood",
            Self::Somber => "Somber",
            Self::Desperate => "Desperate",
            Self::Slow => "Slow",
            Self::Rebellious => "Rebellious",
            Self::Defenseless => "Defenseless",
            Self::Tired => "Tired",
            Self::Bewildered => "Bewildered",
            Self::Alert => "Alert",
            Self::Cheated => "Cheated",
            Self::Efficient => "Efficient",
            Self::Trustworthy => "Trustworthy",
            Self::Cheerful => "Full of pep",
            Self::BadMood => "Bad mood",
            Self::Worthless => "Worthless",
            Self::Forgetful => "Forgetful",
            Self::Carefree => "Carefree",
            Self::Terrified => "Terrified",
            Self::Guilty => "Guilty",
            Self::Vigorous => "Vigorous",
            Self::Uncertain => "Uncertain",
            Self::Drained => "Drained",
        }
    }
}

/// One rated feeling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodAnswer {
    /// Feeling rated
    pub feeling: Feeling,
    /// 0 (never) to 4 (a lot)
    pub intensity: u8,
}

impl MoodAnswer {
    /// Create a rating
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `intensity` is above 4
    pub fn new(feeling: Feeling, intensity: u8) -> AppResult<Self> {
        if intensity > MAX_MOOD_INTENSITY {
            return Err(AppError::out_of_range(format!(
                "mood intensity {intensity} above {MAX_MOOD_INTENSITY}"
            )));
        }
        Ok(Self { feeling, intensity })
    }

    /// Intensity as it counts toward a mood factor
    #[must_use]
    pub const fn normalized_intensity(&self) -> u8 {
        if self.feeling.is_reverse_scored() {
            MAX_MOOD_INTENSITY.saturating_sub(self.intensity)
        } else {
            self.intensity
        }
    }
}
