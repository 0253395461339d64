// ABOUTME: Daily psychological support plan keyed by the relative training week and day
// ABOUTME: Schedules techniques, mood and Hamilton check-ins, and scores mood profiles and belief tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! # Psychological Support
//!
//! The daily plan is looked up with the same relative (week, day) the
//! training calendar produces. Catalog content (questions, questionnaires)
//! is stored per (week, day); techniques and the mood and Hamilton check-ins
//! follow the fixed display tables below.
//!
//! Some tables list week 5. Relative weeks stop at 4, so those rows never
//! show; they are kept so the tables read the same as the program material.

use elsa_core::errors::{AppError, AppResult};
use elsa_core::models::{
    BeliefLevel, BorgEffortLevel, Feeling, HamiltonQuestion, MoodAnswer, PsychologicalQuestion,
    PsychologicalTechnique, Questionnaire, QuestionnaireKind, TechniqueType,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::PsychologyCatalog;

/// Highest intensity of one irrational-beliefs answer
pub const MAX_BELIEF_INTENSITY: u8 = 6;

/// (week, day) pairs on which the mood-state check-in is shown
pub const MOOD_STATE_DAYS: [(u32, u32); 4] = [(2, 1), (3, 2), (4, 1), (5, 1)];

/// (week, day) pairs on which the Hamilton questionnaire is shown
pub const HAMILTON_DAYS: [(u32, u32); 4] = [(2, 2), (3, 1), (4, 2), (5, 2)];

/// (week, day) pairs on which techniques of `technique_type` are shown
#[must_use]
pub const fn technique_days(technique_type: TechniqueType) -> &'static [(u32, u32)] {
    match technique_type {
        TechniqueType::Respiration => &[(1, 3), (2, 6), (3, 3), (4, 6), (5, 6)],
        TechniqueType::Jacobson => &[(1, 4), (2, 3), (3, 5), (4, 3), (5, 3)],
        TechniqueType::Schultz => &[(1, 6), (2, 5), (3, 7), (4, 5), (5, 5)],
        TechniqueType::Haynes => &[(1, 7), (2, 7), (3, 4), (4, 7), (5, 7)],
        TechniqueType::Visualization => &[(1, 5), (2, 4), (3, 6), (4, 4), (5, 4)],
    }
}

/// Whether a technique of `technique_type` is shown on (week, day)
#[must_use]
pub fn technique_shows_on(technique_type: TechniqueType, week: u32, day: u32) -> bool {
    technique_days(technique_type).contains(&(week, day))
}

/// Feeling offered in the mood-state check-in
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MoodStateOption {
    /// Feeling code
    pub feeling: Feeling,
    /// Display label
    pub label: &'static str,
}

/// Everything the psychological program shows on one day
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DailyPsychology {
    /// Reflection questions
    pub regular_questions: Vec<PsychologicalQuestion>,
    /// Irrational-beliefs test, if one is scheduled
    pub beliefs_questionnaire: Option<Questionnaire>,
    /// Psychological inventories
    pub inventories: Vec<Questionnaire>,
    /// Borg effort scale, always shown
    pub borg_scale: Vec<BorgEffortLevel>,
    /// Relaxation techniques scheduled today
    pub techniques: Vec<PsychologicalTechnique>,
    /// Mood-state options, empty unless the check-in is due
    pub mood_states: Vec<MoodStateOption>,
    /// Hamilton items, empty unless the questionnaire is due
    pub hamilton: Vec<HamiltonQuestion>,
}

/// Assemble the plan for a relative (week, day)
#[must_use]
pub fn daily_plan(week: u32, day: u32, catalog: &dyn PsychologyCatalog) -> DailyPsychology {
    let position = (week, day);
    let mood_states = if MOOD_STATE_DAYS.contains(&position) {
        Feeling::ALL
            .iter()
            .map(|feeling| MoodStateOption {
                feeling: *feeling,
                label: feeling.label(),
            })
            .collect()
    } else {
        Vec::new()
    };
    let hamilton = if HAMILTON_DAYS.contains(&position) {
        catalog.hamilton_questions().to_vec()
    } else {
        Vec::new()
    };

    let plan = DailyPsychology {
        regular_questions: catalog.questions_on(week, day),
        beliefs_questionnaire: catalog
            .questionnaires_on(QuestionnaireKind::IrrationalBeliefs, week, day)
            .into_iter()
            .next(),
        inventories: catalog.questionnaires_on(QuestionnaireKind::Inventory, week, day),
        borg_scale: catalog.borg_scale().to_vec(),
        techniques: catalog
            .techniques()
            .iter()
            .filter(|technique| technique_shows_on(technique.technique_type, week, day))
            .cloned()
            .collect(),
        mood_states,
        hamilton,
    };
    debug!(
        week,
        day,
        questions = plan.regular_questions.len(),
        techniques = plan.techniques.len(),
        mood_check_in = !plan.mood_states.is_empty(),
        hamilton = !plan.hamilton.is_empty(),
        "Assembled daily psychology plan"
    );
    plan
}

/// Mood factor a feeling contributes to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MoodFactor {
    /// Fatigue-inertia
    Fatigue,
    /// Confusion-bewilderment
    Confusion,
    /// Vigor-activity
    Vigor,
    /// Depression-dejection
    Depression,
    /// Anger-hostility
    Anger,
    /// Tension-anxiety
    Tension,
}

impl MoodFactor {
    /// Factor of `feeling`, if it is scored
    #[must_use]
    pub const fn of(feeling: Feeling) -> Option<Self> {
        match feeling {
            Feeling::Worn
            | Feeling::Apathetic
            | Feeling::Fatigued
            | Feeling::Exhausted
            | Feeling::Slow
            | Feeling::Tired
            | Feeling::Drained => Some(Self::Fatigue),

            Feeling::Confused
            | Feeling::UnableToConcentrate
            | Feeling::Confusing
            | Feeling::Bewildered
            | Feeling::Efficient
            | Feeling::Forgetful
            | Feeling::Uncertain => Some(Self::Confusion),

            Feeling::Dynamic
            | Feeling::Active
            | Feeling::Energetic
            | Feeling::Happy
            | Feeling::Alert
            | Feeling::Carefree
            | Feeling::Cheerful
            | Feeling::Vigorous => Some(Self::Vigor),

            Feeling::Unhappy
            | Feeling::Sorry
            | Feeling::Sad
            | Feeling::Blue
            | Feeling::Hopeless
            | Feeling::Unworthy
            | Feeling::Discouraged
            | Feeling::Alone
            | Feeling::Miserable
            | Feeling::Somber
            | Feeling::Desperate
            | Feeling::Defenseless
            | Feeling::Worthless
            | Feeling::Terrified
            | Feeling::Guilty => Some(Self::Depression),

            Feeling::Angry
            | Feeling::Furious
            | Feeling::Grumpy
            | Feeling::Malicious
            | Feeling::Upset
            | Feeling::Resentful
            | Feeling::Bitter
            | Feeling::FightReady
            | Feeling::Rebellious
            | Feeling::Cheated
            | Feeling::BadMood => Some(Self::Anger),

            Feeling::Tense
            | Feeling::Trembling
            | Feeling::Nervous
            | Feeling::Panicked
            | Feeling::Relaxed
            | Feeling::HardToHandle
            | Feeling::Restless
            | Feeling::Anxious => Some(Self::Tension),

            _ => None,
        }
    }
}

/// Factor totals of one mood questionnaire
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodProfile {
    /// Fatigue total
    pub fatigue: u32,
    /// Confusion total
    pub confusion: u32,
    /// Vigor total
    pub vigor: u32,
    /// Depression total
    pub depression: u32,
    /// Anger total
    pub anger: u32,
    /// Tension total
    pub tension: u32,
    /// Negative factors minus vigor; lower is better
    pub general_mood: i64,
}

/// Score one mood questionnaire
///
/// Reverse-scored feelings count with their normalized intensity; feelings
/// outside every factor are ignored.
#[must_use]
pub fn score_mood(answers: &[MoodAnswer]) -> MoodProfile {
    let mut profile = MoodProfile::default();
    for answer in answers {
        let points = u32::from(answer.normalized_intensity());
        match MoodFactor::of(answer.feeling) {
            Some(MoodFactor::Fatigue) => profile.fatigue += points,
            Some(MoodFactor::Confusion) => profile.confusion += points,
            Some(MoodFactor::Vigor) => profile.vigor += points,
            Some(MoodFactor::Depression) => profile.depression += points,
            Some(MoodFactor::Anger) => profile.anger += points,
            Some(MoodFactor::Tension) => profile.tension += points,
            None => {}
        }
    }
    let negative = profile.tension
        + profile.anger
        + profile.fatigue
        + profile.depression
        + profile.confusion;
    profile.general_mood = i64::from(negative) - i64::from(profile.vigor);
    profile
}

/// Result of an irrational-beliefs test
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeliefResult {
    /// Sum of answer intensities
    pub score: u32,
    /// Band containing the score, if any
    pub level: Option<BeliefLevel>,
}

/// Score an irrational-beliefs test from its answer intensities
///
/// # Errors
///
/// Returns `InvalidInput` for a questionnaire of another kind and
/// `ValueOutOfRange` for an intensity above 6
pub fn score_beliefs(questionnaire: &Questionnaire, intensities: &[u8]) -> AppResult<BeliefResult> {
    if questionnaire.kind != QuestionnaireKind::IrrationalBeliefs {
        return Err(AppError::invalid_input(format!(
            "questionnaire {} is not an irrational-beliefs test",
            questionnaire.id
        ))
        .with_resource_id(questionnaire.id.to_string()));
    }
    if let Some(intensity) = intensities.iter().find(|i| **i > MAX_BELIEF_INTENSITY) {
        return Err(AppError::out_of_range(format!(
            "belief intensity {intensity} above {MAX_BELIEF_INTENSITY}"
        )));
    }

    let score = intensities.iter().map(|i| u32::from(*i)).sum();
    Ok(BeliefResult {
        score,
        level: questionnaire
            .scales
            .iter()
            .find(|scale| scale.contains(score))
            .map(|scale| scale.level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use elsa_core::errors::ErrorCode;
    use elsa_core::models::BeliefScale;
    use uuid::Uuid;

    fn beliefs_test() -> Questionnaire {
        Questionnaire {
            id: Uuid::new_v4(),
            kind: QuestionnaireKind::IrrationalBeliefs,
            week: 1,
            day: 1,
            title: "Irrational beliefs".to_owned(),
            description: "Rate each idea".to_owned(),
            summary_description: "Lower is more irrational".to_owned(),
            questions: Vec::new(),
            scales: vec![
                BeliefScale {
                    level: BeliefLevel::VeryIrrational,
                    lower_limit: 3,
                    upper_limit: 10,
                },
                BeliefScale {
                    level: BeliefLevel::SomewhatRational,
                    lower_limit: 11,
                    upper_limit: 18,
                },
            ],
        }
    }

    #[test]
    fn test_every_technique_type_has_one_day_per_week() {
        for technique_type in [
            TechniqueType::Respiration,
            TechniqueType::Jacobson,
            TechniqueType::Schultz,
            TechniqueType::Haynes,
            TechniqueType::Visualization,
        ] {
            for week in 1..=4 {
                let days = (1..=7)
                    .filter(|day| technique_shows_on(technique_type, week, *day))
                    .count();
                assert_eq!(days, 1, "{technique_type:?} week {week}");
            }
        }
    }

    #[test]
    fn test_no_two_techniques_share_a_day() {
        for (week, day) in technique_days(TechniqueType::Respiration) {
            assert!(!technique_shows_on(TechniqueType::Jacobson, *week, *day));
            assert!(!technique_shows_on(TechniqueType::Haynes, *week, *day));
        }
    }

    #[test]
    fn test_mood_profile_reverse_scores_positive_items() {
        let answers = [
            MoodAnswer::new(Feeling::Tense, 3).unwrap(),
            MoodAnswer::new(Feeling::Relaxed, 4).unwrap(),
            MoodAnswer::new(Feeling::Efficient, 1).unwrap(),
            MoodAnswer::new(Feeling::Vigorous, 2).unwrap(),
            MoodAnswer::new(Feeling::Friendly, 4).unwrap(),
        ];
        let profile = score_mood(&answers);
        assert_eq!(profile.tension, 3);
        assert_eq!(profile.confusion, 3);
        assert_eq!(profile.vigor, 2);
        assert_eq!(profile.general_mood, 4);
    }

    #[test]
    fn test_general_mood_can_go_negative() {
        let answers = [
            MoodAnswer::new(Feeling::Energetic, 4).unwrap(),
            MoodAnswer::new(Feeling::Happy, 4).unwrap(),
            MoodAnswer::new(Feeling::Tired, 1).unwrap(),
        ];
        assert_eq!(score_mood(&answers).general_mood, -7);
    }

    #[test]
    fn test_belief_score_maps_to_scale() {
        let result = score_beliefs(&beliefs_test(), &[2, 3, 4]).unwrap();
        assert_eq!(result.score, 9);
        assert_eq!(result.level, Some(BeliefLevel::VeryIrrational));

        let outside = score_beliefs(&beliefs_test(), &[6, 6, 6, 6]).unwrap();
        assert_eq!(outside.level, None);
    }

    #[test]
    fn test_belief_intensity_above_scale_rejected() {
        let error = score_beliefs(&beliefs_test(), &[7]).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_inventory_cannot_be_scored_as_beliefs() {
        let mut inventory = beliefs_test();
        inventory.kind = QuestionnaireKind::Inventory;
        let error = score_beliefs(&inventory, &[1]).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
