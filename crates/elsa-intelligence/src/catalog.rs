// ABOUTME: Read-only catalog lookup traits for plans, meal templates, foods, and psychological support
// ABOUTME: InMemoryCatalog implements every lookup over a validated CatalogSnapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! # Catalog Lookup
//!
//! The engine never queries storage directly. It consumes reference data
//! through the traits below, which are object safe and `Send + Sync` so a
//! single loaded catalog can serve concurrent readers.

use std::collections::HashMap;

use elsa_core::constants::calendar::{DAYS_PER_WEEK, WEEKS_PER_CYCLE};
use elsa_core::errors::{AppError, AppResult};
use elsa_core::models::{
    BorgEffortLevel, Diet, Discipline, Food, HamiltonQuestion, MealTemplate, PlanBucket,
    PlanEntry, PsychologicalQuestion, PsychologicalTechnique, Questionnaire, QuestionnaireKind,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Sessions scheduled on one (day, week) for a bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DailySessions {
    /// Cycling entries, possibly empty
    pub cycling: Vec<PlanEntry>,
    /// Physical entries, possibly empty
    pub physical: Vec<PlanEntry>,
}

impl DailySessions {
    /// Whether neither discipline has a session
    #[must_use]
    pub fn is_rest_day(&self) -> bool {
        self.cycling.is_empty() && self.physical.is_empty()
    }
}

/// Plan catalog lookup
pub trait PlanCatalog: Send + Sync {
    /// Entries for a bucket at a relative (day, week)
    fn find_sessions(&self, bucket: &PlanBucket, day: u32, week: u32) -> DailySessions;

    /// Every entry of one discipline for a bucket, ordered by (week, day)
    fn base_cycle(&self, bucket: &PlanBucket, discipline: Discipline) -> Vec<PlanEntry>;
}

/// Meal template lookup
pub trait MealTemplateCatalog: Send + Sync {
    /// Templates for a diet at one calorie tier
    fn find_templates(&self, diet: Diet, calorie_tier: u32) -> Vec<MealTemplate>;
}

/// Food lookup
pub trait FoodCatalog: Send + Sync {
    /// Food by identifier
    fn food(&self, id: Uuid) -> Option<&Food>;
}

/// Psychological support lookup
pub trait PsychologyCatalog: Send + Sync {
    /// Reflection questions for a relative (week, day), ordered by number
    fn questions_on(&self, week: u32, day: u32) -> Vec<PsychologicalQuestion>;

    /// Questionnaires of one kind for a relative (week, day)
    fn questionnaires_on(&self, kind: QuestionnaireKind, week: u32, day: u32)
        -> Vec<Questionnaire>;

    /// Every relaxation technique
    fn techniques(&self) -> &[PsychologicalTechnique];

    /// Borg effort scale, lowest effort first
    fn borg_scale(&self) -> &[BorgEffortLevel];

    /// Hamilton questionnaire items, ordered by number
    fn hamilton_questions(&self) -> &[HamiltonQuestion];
}

/// Serialized catalog, the output format of the seed-data import
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Plan entries of both disciplines
    #[serde(default)]
    pub plans: Vec<PlanEntry>,
    /// Meal templates
    #[serde(default)]
    pub meal_templates: Vec<MealTemplate>,
    /// Foods
    #[serde(default)]
    pub foods: Vec<Food>,
    /// Daily reflection questions
    #[serde(default)]
    pub psychological_questions: Vec<PsychologicalQuestion>,
    /// Scheduled questionnaires
    #[serde(default)]
    pub questionnaires: Vec<Questionnaire>,
    /// Relaxation techniques
    #[serde(default)]
    pub techniques: Vec<PsychologicalTechnique>,
    /// Borg effort scale
    #[serde(default)]
    pub borg_scale: Vec<BorgEffortLevel>,
    /// Hamilton questionnaire items
    #[serde(default)]
    pub hamilton_questions: Vec<HamiltonQuestion>,
}

/// In-memory catalog backing every lookup trait
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    plans: Vec<PlanEntry>,
    meal_templates: Vec<MealTemplate>,
    foods: HashMap<Uuid, Food>,
    questions: Vec<PsychologicalQuestion>,
    questionnaires: Vec<Questionnaire>,
    techniques: Vec<PsychologicalTechnique>,
    borg_scale: Vec<BorgEffortLevel>,
    hamilton_questions: Vec<HamiltonQuestion>,
}

fn check_cycle_position(what: &str, id: Uuid, week: u32, day: u32) -> AppResult<()> {
    if (1..=WEEKS_PER_CYCLE).contains(&week) && (1..=DAYS_PER_WEEK).contains(&day) {
        return Ok(());
    }
    Err(AppError::invalid_input(format!(
        "{what} week {week} day {day} outside the {WEEKS_PER_CYCLE}-week cycle"
    ))
    .with_resource_id(id.to_string()))
}

impl InMemoryCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a snapshot and index it
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a plan entry, question or questionnaire sits
    /// outside the 4-week cycle or a food's group does not belong to its
    /// supergroup
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> AppResult<Self> {
        let mut catalog = Self::new();
        for entry in snapshot.plans {
            catalog = catalog.try_with_plan(entry)?;
        }
        for food in snapshot.foods {
            food.validate_group()?;
            catalog.foods.insert(food.id, food);
        }
        for question in snapshot.psychological_questions {
            catalog = catalog.try_with_question(question)?;
        }
        for questionnaire in snapshot.questionnaires {
            catalog = catalog.try_with_questionnaire(questionnaire)?;
        }
        catalog.meal_templates = snapshot.meal_templates;
        catalog.techniques = snapshot.techniques;
        catalog.borg_scale = snapshot.borg_scale;
        catalog.borg_scale.sort_by_key(|level| level.lower_rpe);
        catalog.hamilton_questions = snapshot.hamilton_questions;
        catalog.hamilton_questions.sort_by_key(|question| question.number);
        debug!(
            plans = catalog.plans.len(),
            meal_templates = catalog.meal_templates.len(),
            foods = catalog.foods.len(),
            questions = catalog.questions.len(),
            questionnaires = catalog.questionnaires.len(),
            techniques = catalog.techniques.len(),
            "Indexed catalog snapshot"
        );
        Ok(catalog)
    }

    /// Add a plan entry, checking its week and day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if week or day is out of range
    pub fn try_with_plan(mut self, entry: PlanEntry) -> AppResult<Self> {
        check_cycle_position("plan entry", entry.id, entry.week, entry.day)?;
        self.plans.push(entry);
        Ok(self)
    }

    /// Add a reflection question, checking its week and day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if week or day is out of range
    pub fn try_with_question(mut self, question: PsychologicalQuestion) -> AppResult<Self> {
        check_cycle_position("question", question.id, question.week, question.day)?;
        self.questions.push(question);
        Ok(self)
    }

    /// Add a questionnaire, checking its week and day
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if week or day is out of range
    pub fn try_with_questionnaire(mut self, questionnaire: Questionnaire) -> AppResult<Self> {
        check_cycle_position(
            "questionnaire",
            questionnaire.id,
            questionnaire.week,
            questionnaire.day,
        )?;
        self.questionnaires.push(questionnaire);
        Ok(self)
    }

    /// Add a relaxation technique
    #[must_use]
    pub fn with_technique(mut self, technique: PsychologicalTechnique) -> Self {
        self.techniques.push(technique);
        self
    }

    /// Add a Borg scale row
    #[must_use]
    pub fn with_borg_level(mut self, level: BorgEffortLevel) -> Self {
        self.borg_scale.push(level);
        self.borg_scale.sort_by_key(|level| level.lower_rpe);
        self
    }

    /// Add a Hamilton questionnaire item
    #[must_use]
    pub fn with_hamilton_question(mut self, question: HamiltonQuestion) -> Self {
        self.hamilton_questions.push(question);
        self.hamilton_questions.sort_by_key(|question| question.number);
        self
    }

    /// Add a meal template
    #[must_use]
    pub fn with_meal_template(mut self, template: MealTemplate) -> Self {
        self.meal_templates.push(template);
        self
    }

    /// Add a food
    #[must_use]
    pub fn with_food(mut self, food: Food) -> Self {
        self.foods.insert(food.id, food);
        self
    }

    /// Number of plan entries
    #[must_use]
    pub fn plan_count(&self) -> usize {
        self.plans.len()
    }

    fn entries_for<'a>(
        &'a self,
        bucket: &'a PlanBucket,
        discipline: Discipline,
    ) -> impl Iterator<Item = &'a PlanEntry> + 'a {
        self.plans
            .iter()
            .filter(move |entry| entry.discipline() == discipline && entry.serves(bucket))
    }
}

impl PlanCatalog for InMemoryCatalog {
    fn find_sessions(&self, bucket: &PlanBucket, day: u32, week: u32) -> DailySessions {
        let at = |discipline| {
            self.entries_for(bucket, discipline)
                .filter(|entry| entry.day == day && entry.week == week)
                .cloned()
                .collect()
        };
        DailySessions {
            cycling: at(Discipline::Cycling),
            physical: at(Discipline::Physical),
        }
    }

    fn base_cycle(&self, bucket: &PlanBucket, discipline: Discipline) -> Vec<PlanEntry> {
        let mut entries: Vec<PlanEntry> = self.entries_for(bucket, discipline).cloned().collect();
        entries.sort_by_key(|entry| (entry.week, entry.day));
        entries
    }
}

impl MealTemplateCatalog for InMemoryCatalog {
    fn find_templates(&self, diet: Diet, calorie_tier: u32) -> Vec<MealTemplate> {
        self.meal_templates
            .iter()
            .filter(|template| template.diet == diet && template.calorie_tier == calorie_tier)
            .cloned()
            .collect()
    }
}

impl FoodCatalog for InMemoryCatalog {
    fn food(&self, id: Uuid) -> Option<&Food> {
        self.foods.get(&id)
    }
}

impl PsychologyCatalog for InMemoryCatalog {
    fn questions_on(&self, week: u32, day: u32) -> Vec<PsychologicalQuestion> {
        let mut questions: Vec<PsychologicalQuestion> = self
            .questions
            .iter()
            .filter(|question| question.week == week && question.day == day)
            .cloned()
            .collect();
        questions.sort_by_key(|question| question.number);
        questions
    }

    fn questionnaires_on(
        &self,
        kind: QuestionnaireKind,
        week: u32,
        day: u32,
    ) -> Vec<Questionnaire> {
        self.questionnaires
            .iter()
            .filter(|q| q.kind == kind && q.week == week && q.day == day)
            .cloned()
            .collect()
    }

    fn techniques(&self) -> &[PsychologicalTechnique] {
        &self.techniques
    }

    fn borg_scale(&self) -> &[BorgEffortLevel] {
        &self.borg_scale
    }

    fn hamilton_questions(&self) -> &[HamiltonQuestion] {
        &self.hamilton_questions
    }
}
