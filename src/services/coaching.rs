// ABOUTME: Coaching service facade over calendar, energy, curriculum, meals, and psychology plans
// ABOUTME: Protocol-agnostic entry point an HTTP or CLI layer calls with a resolved profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use elsa_core::errors::{AppError, AppResult};
use elsa_core::models::Profile;
use elsa_intelligence::assessment::{assess_body, BodyAssessment, HealthWarning};
use elsa_intelligence::bill::{meal_bill, MealBill, MealSelection};
use elsa_intelligence::calendar::{locate_profile, ProgramWindow, TrainingCycle};
use elsa_intelligence::catalog::{
    DailySessions, FoodCatalog, MealTemplateCatalog, PlanCatalog, PsychologyCatalog,
};
use elsa_intelligence::config::CoachingConfig;
use elsa_intelligence::curriculum::{self, CompleteCurriculum};
use elsa_intelligence::energy::{compute_for, EnergyResult};
use elsa_intelligence::meals::{self, MealPlanSelection};
use elsa_intelligence::psychology::{self, DailyPsychology};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::CoachingLogger;

/// Today's position and sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodaySessions {
    /// Current calendar position
    pub cycle: TrainingCycle,
    /// Sessions for the current relative day and week
    pub sessions: DailySessions,
}

/// Today's position and psychological plan
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TodayPsychology {
    /// Current calendar position
    pub cycle: TrainingCycle,
    /// Plan for the current relative day and week
    pub plan: DailyPsychology,
}

/// Membership window and where `now` falls in it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramStatus {
    /// Paid window
    pub window: ProgramWindow,
    /// `now` is inside the window
    pub active: bool,
    /// `now` is past the window
    pub expired: bool,
    /// Current calendar position
    pub cycle: TrainingCycle,
}

/// Full daily nutrition plan, figures rounded to 2 decimals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    /// Current calendar position
    pub cycle: TrainingCycle,
    /// Body assessment
    pub assessment: BodyAssessment,
    /// Energy budget for today
    pub energy: EnergyResult,
    /// Meal templates for today's budget
    pub meals: MealPlanSelection,
}

/// Outcome of a daily nutrition request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DailyNutrition {
    /// Goal weight is unhealthy; no figures are produced
    Advisory {
        /// Body assessment
        assessment: BodyAssessment,
        /// Which bound the goal violates
        warning: HealthWarning,
        /// Message for the client
        message: String,
    },
    /// Daily plan
    Plan(Box<NutritionPlan>),
}

/// Coaching operations over a read-only catalog
pub struct CoachingService<C> {
    catalog: Arc<C>,
    config: CoachingConfig,
}

impl<C> CoachingService<C>
where
    C: PlanCatalog + MealTemplateCatalog + FoodCatalog + PsychologyCatalog,
{
    /// Create a service over `catalog` with explicit rule tables
    #[must_use]
    pub const fn new(catalog: Arc<C>, config: CoachingConfig) -> Self {
        Self { catalog, config }
    }

    /// Create a service using the global rule tables
    #[must_use]
    pub fn with_global_config(catalog: Arc<C>) -> Self {
        Self::new(catalog, CoachingConfig::global().clone())
    }

    /// Rule tables in use
    #[must_use]
    pub const fn config(&self) -> &CoachingConfig {
        &self.config
    }

    /// Current calendar position
    ///
    /// # Errors
    ///
    /// Returns `NotEnrolled` if the profile has no program start
    #[allow(clippy::unused_self)] // Uniform receiver across service operations
    pub fn training_cycle(&self, profile: &Profile, now: DateTime<Utc>) -> AppResult<TrainingCycle> {
        locate_profile(profile, now)
    }

    /// Membership window status
    ///
    /// # Errors
    ///
    /// Returns `NotEnrolled` or `MembershipRequired` if enrollment is incomplete
    #[allow(clippy::unused_self)] // Uniform receiver across service operations
    pub fn program_status(&self, profile: &Profile, now: DateTime<Utc>) -> AppResult<ProgramStatus> {
        let window = ProgramWindow::for_profile(profile)?;
        Ok(ProgramStatus {
            window,
            active: window.is_active(now),
            expired: window.is_expired(now),
            cycle: locate_profile(profile, now)?,
        })
    }

    /// Sessions scheduled for today
    ///
    /// # Errors
    ///
    /// Returns `NotEnrolled` if the profile has no program start
    pub fn daily_sessions(&self, profile: &Profile, now: DateTime<Utc>) -> AppResult<TodaySessions> {
        let cycle = locate_profile(profile, now)?;
        let sessions =
            self.catalog
                .find_sessions(&profile.bucket(), cycle.relative_day, cycle.relative_week);
        debug!(
            profile_id = %profile.id,
            cycling = sessions.cycling.len(),
            physical = sessions.physical.len(),
            "Resolved daily sessions"
        );
        Ok(TodaySessions { cycle, sessions })
    }

    /// Psychological plan for today
    ///
    /// # Errors
    ///
    /// Returns `NotEnrolled` if the profile has no program start
    pub fn daily_psychology(
        &self,
        profile: &Profile,
        now: DateTime<Utc>,
    ) -> AppResult<TodayPsychology> {
        let cycle = locate_profile(profile, now)?;
        let plan = psychology::daily_plan(
            cycle.relative_week,
            cycle.relative_day,
            self.catalog.as_ref(),
        );
        Ok(TodayPsychology { cycle, plan })
    }

    /// Today's nutrition plan, or an advisory if the goal is unhealthy
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField`/`InvalidInput` for incomplete biometrics
    /// and `NotEnrolled` if the profile has no program start
    pub fn daily_nutrition(&self, profile: &Profile, now: DateTime<Utc>) -> AppResult<DailyNutrition> {
        let biometrics = profile.biometrics()?;
        let assessment = assess_body(&biometrics, &self.config.assessment);

        if let Some(warning) = assessment.goal_warning(&self.config.assessment) {
            CoachingLogger::log_advisory(profile.id, warning.message(), assessment.goal_bmi);
            return Ok(DailyNutrition::Advisory {
                assessment: assessment.rounded(),
                warning: warning.rounded(),
                message: warning.message().to_owned(),
            });
        }

        let today = self.daily_sessions(profile, now)?;
        let energy = compute_for(&biometrics, &today.sessions, &self.config);
        let meals = meals::select(
            energy.tee,
            profile.diet,
            self.catalog.as_ref(),
            &self.config.meals,
        );

        Ok(DailyNutrition::Plan(Box::new(NutritionPlan {
            cycle: today.cycle,
            assessment: assessment.rounded(),
            energy: energy.rounded(),
            meals,
        })))
    }

    /// Curriculum for the profile's whole membership
    ///
    /// # Errors
    ///
    /// Returns `MembershipRequired` without a tier, `NotEnrolled` without a
    /// program start, and `CatalogDataMissing` if the bucket has no base cycle
    pub fn complete_curriculum(&self, profile: &Profile) -> AppResult<CompleteCurriculum> {
        let tier = profile
            .membership_tier
            .ok_or_else(|| AppError::membership_required().with_profile_id(profile.id))?;
        if !profile.is_enrolled() {
            return Err(AppError::not_enrolled().with_profile_id(profile.id));
        }

        let started = Instant::now();
        let result = curriculum::build(profile, tier.months(), self.catalog.as_ref(), &self.config);
        CoachingLogger::log_operation(
            "complete_curriculum",
            profile.id,
            result.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        result
    }

    /// Calorie bill of the client's food picks
    #[must_use]
    pub fn meal_bill(&self, selections: &[MealSelection]) -> MealBill {
        meal_bill(selections, self.catalog.as_ref())
    }
}
