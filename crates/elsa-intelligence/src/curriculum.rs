// ABOUTME: Curriculum tiler replicating a bucket's base cycle across a whole membership
// ABOUTME: Each tiled session carries the energy budget for its own relative day and week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! # Curriculum Tiler
//!
//! The seeded base cycle (nominally 4 weeks) is laid end to end until the
//! calendar covers `membership_months x weeks_per_month` weeks. The offset
//! between passes is the number of distinct weeks observed so far, so a base
//! cycle with an unexpected span still tiles without gaps; that case is logged.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use elsa_core::errors::{AppError, AppResult};
use elsa_core::models::{Discipline, PlanEntry, Profile};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::PlanCatalog;
use crate::config::CoachingConfig;
use crate::energy::{compute_for, EnergyResult};

/// A base-cycle entry placed at an absolute week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledSession {
    /// Week since program start, 1-based
    pub absolute_week: u32,
    /// Seeded entry; its `week` and `day` stay relative
    pub entry: PlanEntry,
    /// Energy budget for the entry's relative day and week
    pub energy: EnergyResult,
}

/// Absolute week → sessions in base-cycle order
pub type WeekCalendar = BTreeMap<u32, Vec<ScheduledSession>>;

/// Projected curriculum for a whole membership
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompleteCurriculum {
    /// Membership length the curriculum covers
    pub membership_months: u32,
    /// Cycling calendar
    pub cycling: WeekCalendar,
    /// Physical-training calendar
    pub physical: WeekCalendar,
}

/// Tile `base` until at least `target_weeks` distinct weeks are covered
///
/// `energy_of` is called once per placed entry.
///
/// # Errors
///
/// Returns `CatalogDataMissing` if `base` is empty, or whatever `energy_of`
/// returns
pub fn tile<F>(
    base: &[PlanEntry],
    target_weeks: u32,
    expected_cycle_weeks: u32,
    mut energy_of: F,
) -> AppResult<WeekCalendar>
where
    F: FnMut(&PlanEntry) -> AppResult<EnergyResult>,
{
    if base.is_empty() {
        warn!("Base cycle is empty, nothing to tile");
        return Err(AppError::catalog_gap("Base plan cycle has no entries"));
    }

    let span = base.iter().map(|entry| entry.week).collect::<BTreeSet<_>>().len();
    if u32::try_from(span).ok() != Some(expected_cycle_weeks) {
        warn!(
            span,
            expected_cycle_weeks, "Base cycle span differs from the expected cycle length"
        );
    }

    let mut calendar = WeekCalendar::new();
    let mut week_offset = 0_u32;
    while week_offset < target_weeks {
        for entry in base {
            let absolute_week = entry.week + week_offset;
            let session = ScheduledSession {
                absolute_week,
                entry: entry.clone(),
                energy: energy_of(entry)?,
            };
            calendar.entry(absolute_week).or_default().push(session);
        }
        week_offset = u32::try_from(calendar.len()).unwrap_or(u32::MAX);
    }
    Ok(calendar)
}

/// Project both disciplines over `membership_months`
///
/// # Errors
///
/// Returns `ValueOutOfRange` for zero months, `MissingRequiredField` for
/// incomplete biometrics, and `CatalogDataMissing` if either discipline has
/// no base cycle for the profile's bucket
pub fn build(
    profile: &Profile,
    membership_months: u32,
    plans: &dyn PlanCatalog,
    config: &CoachingConfig,
) -> AppResult<CompleteCurriculum> {
    if membership_months == 0 {
        return Err(AppError::out_of_range("Membership must last at least one month")
            .with_profile_id(profile.id));
    }
    let biometrics = profile.biometrics()?;
    let bucket = profile.bucket();
    let target_weeks = membership_months.saturating_mul(config.curriculum.weeks_per_month);

    // Budgets depend only on the relative (week, day), shared by both calendars
    let mut budgets: HashMap<(u32, u32), EnergyResult> = HashMap::new();
    let mut energy_of = |entry: &PlanEntry| -> AppResult<EnergyResult> {
        let budget = budgets.entry((entry.week, entry.day)).or_insert_with(|| {
            let sessions = plans.find_sessions(&bucket, entry.day, entry.week);
            compute_for(&biometrics, &sessions, config)
        });
        Ok(budget.clone())
    };

    let mut tile_discipline = |discipline: Discipline| -> AppResult<WeekCalendar> {
        let base = plans.base_cycle(&bucket, discipline);
        tile(
            &base,
            target_weeks,
            config.curriculum.expected_cycle_weeks,
            &mut energy_of,
        )
        .map_err(|e| {
            e.with_profile_id(profile.id)
                .with_details(serde_json::json!({ "discipline": discipline }))
        })
    };
    let cycling = tile_discipline(Discipline::Cycling)?;
    let physical = tile_discipline(Discipline::Physical)?;

    info!(
        profile_id = %profile.id,
        membership_months,
        cycling_weeks = cycling.len(),
        physical_weeks = physical.len(),
        "Built complete curriculum"
    );

    Ok(CompleteCurriculum {
        membership_months,
        cycling,
        physical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::{MacroBreakdown, WeightGoal};
    use elsa_core::errors::ErrorCode;
    use elsa_core::models::CyclingIntensity;

    fn flat_energy(_: &PlanEntry) -> AppResult<EnergyResult> {
        Ok(EnergyResult {
            bmr: 1500.0,
            tee: 2000.0,
            activity_kcal: 0.0,
            caloric_adjustment: 0.0,
            weight_goal: WeightGoal::Maintain,
            monthly_change_kg: 0.0,
            macros: MacroBreakdown::default(),
            meal_slots: Vec::new(),
        })
    }

    fn base(weeks: &[u32]) -> Vec<PlanEntry> {
        weeks
            .iter()
            .map(|&week| PlanEntry::cycling(week, 1, 30.0, CyclingIntensity::Light, "ride"))
            .collect()
    }

    #[test]
    fn test_tile_three_months_covers_twelve_weeks() {
        let calendar = tile(&base(&[1, 2, 3, 4]), 12, 4, flat_energy).unwrap();
        let weeks: Vec<u32> = calendar.keys().copied().collect();
        assert_eq!(weeks, (1..=12).collect::<Vec<_>>());
        for (week, sessions) in &calendar {
            for session in sessions {
                assert_eq!((week - 1) % 4 + 1, session.entry.week);
            }
        }
    }

    #[test]
    fn test_tile_empty_base_is_catalog_gap() {
        let error = tile(&[], 12, 4, flat_energy).unwrap_err();
        assert_eq!(error.code, ErrorCode::CatalogDataMissing);
    }

    #[test]
    fn test_tile_short_base_uses_observed_span() {
        let calendar = tile(&base(&[1, 2, 3]), 8, 4, flat_energy).unwrap();
        assert_eq!(calendar.len(), 9);
        assert_eq!(calendar.keys().next(), Some(&1));
        assert_eq!(calendar.keys().last(), Some(&9));
    }
}
