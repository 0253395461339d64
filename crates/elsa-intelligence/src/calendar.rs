// ABOUTME: Training calendar indexer mapping program start and "now" to day/week positions
// ABOUTME: Also derives membership program windows starting the Monday after payment approval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! # Calendar Indexer
//!
//! Pure arithmetic over two explicit timestamps. Days are floor-truncated, a
//! "now" before the program start maps to day 1, and relative positions roll
//! over every 7 days and every 4 weeks.

use chrono::{DateTime, Datelike, Days, Months, NaiveTime, Utc};
use elsa_core::constants::calendar::{DAYS_PER_WEEK, SECONDS_PER_DAY, WEEKS_PER_CYCLE};
use elsa_core::errors::{AppError, AppResult};
use elsa_core::models::{MembershipTier, Profile};
use serde::{Deserialize, Serialize};

/// Position of a client inside the repeating curriculum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TrainingCycle {
    /// Days since program start, 1-based
    pub absolute_day: u32,
    /// Day within the week (1-7)
    pub relative_day: u32,
    /// Weeks since program start, 1-based
    pub absolute_week: u32,
    /// Week within the cycle (1-4)
    pub relative_week: u32,
}

impl TrainingCycle {
    /// Derive every position from a 1-based absolute day
    ///
    /// Day 0 is treated as day 1.
    #[must_use]
    pub const fn from_absolute_day(absolute_day: u32) -> Self {
        let absolute_day = if absolute_day == 0 { 1 } else { absolute_day };
        let absolute_week = absolute_day.div_ceil(DAYS_PER_WEEK);
        Self {
            absolute_day,
            relative_day: (absolute_day - 1) % DAYS_PER_WEEK + 1,
            absolute_week,
            relative_week: (absolute_week - 1) % WEEKS_PER_CYCLE + 1,
        }
    }
}

/// Locate `now` inside a program that started at `program_start`
///
/// Returns `None` when the client is not enrolled.
#[must_use]
pub fn locate(program_start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<TrainingCycle> {
    let start = program_start?;
    let elapsed_days = (now - start).num_seconds().div_euclid(SECONDS_PER_DAY);
    let absolute_day = if elapsed_days < 0 {
        1
    } else {
        u32::try_from(elapsed_days + 1).unwrap_or(u32::MAX)
    };
    Some(TrainingCycle::from_absolute_day(absolute_day))
}

/// Locate a profile's current position
///
/// # Errors
///
/// Returns `NotEnrolled` if the profile has no program start
pub fn locate_profile(profile: &Profile, now: DateTime<Utc>) -> AppResult<TrainingCycle> {
    locate(profile.program_start, now)
        .ok_or_else(|| AppError::not_enrolled().with_profile_id(profile.id))
}

/// Paid training window of a membership
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramWindow {
    /// Membership tier
    pub tier: MembershipTier,
    /// First instant of training (a Monday at 00:00 UTC)
    pub start: DateTime<Utc>,
    /// First instant after the window
    pub end: DateTime<Utc>,
}

impl ProgramWindow {
    /// Window created when a payment is approved at `approved_at`
    ///
    /// Training starts on the following Monday; approval on a Monday starts
    /// the week after.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the date arithmetic overflows
    pub fn after_approval(approved_at: DateTime<Utc>, tier: MembershipTier) -> AppResult<Self> {
        let date = approved_at.date_naive();
        let until_monday = u64::from(DAYS_PER_WEEK - date.weekday().num_days_from_monday());
        let start = date
            .checked_add_days(Days::new(until_monday))
            .map(|monday| monday.and_time(NaiveTime::MIN).and_utc())
            .ok_or_else(|| AppError::internal("Program start date out of range"))?;
        Self::starting_at(start, tier)
    }

    /// Window that begins at `start`
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the end date overflows
    pub fn starting_at(start: DateTime<Utc>, tier: MembershipTier) -> AppResult<Self> {
        let end = start
            .checked_add_months(Months::new(tier.months()))
            .ok_or_else(|| AppError::internal("Program end date out of range"))?;
        Ok(Self { tier, start, end })
    }

    /// Window of an enrolled profile
    ///
    /// # Errors
    ///
    /// Returns `NotEnrolled` without a program start, `MembershipRequired`
    /// without a tier
    pub fn for_profile(profile: &Profile) -> AppResult<Self> {
        let start = profile
            .program_start
            .ok_or_else(|| AppError::not_enrolled().with_profile_id(profile.id))?;
        let tier = profile
            .membership_tier
            .ok_or_else(|| AppError::membership_required().with_profile_id(profile.id))?;
        Self::starting_at(start, tier)
    }

    /// Whether `now` falls inside the window
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start <= now && now < self.end
    }

    /// Whether the window has ended
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_locate_not_enrolled() {
        assert!(locate(None, Utc::now()).is_none());
    }

    #[test]
    fn test_wednesday_start_plus_ten_days() {
        let start = at(2024, 1, 3, 9);
        assert_eq!(start.weekday(), Weekday::Wed);
        let cycle = locate(Some(start), start + Duration::days(10)).unwrap();
        assert_eq!(
            cycle,
            TrainingCycle {
                absolute_day: 11,
                relative_day: 4,
                absolute_week: 2,
                relative_week: 2,
            }
        );
    }

    #[test]
    fn test_partial_day_floors() {
        let start = at(2024, 1, 1, 12);
        let cycle = locate(Some(start), start + Duration::hours(23)).unwrap();
        assert_eq!(cycle.absolute_day, 1);
    }

    #[test]
    fn test_now_before_start_is_day_one() {
        let start = at(2024, 3, 10, 0);
        let cycle = locate(Some(start), start - Duration::hours(5)).unwrap();
        assert_eq!(cycle, TrainingCycle::from_absolute_day(1));
    }

    #[test]
    fn test_relative_week_rolls_over_after_four_weeks() {
        let cycle = TrainingCycle::from_absolute_day(29);
        assert_eq!(cycle.absolute_week, 5);
        assert_eq!(cycle.relative_week, 1);
        assert_eq!(cycle.relative_day, 1);
    }

    #[test]
    fn test_after_approval_starts_next_monday() {
        let window = ProgramWindow::after_approval(at(2024, 5, 15, 18), MembershipTier::Trimester)
            .unwrap();
        assert_eq!(window.start, at(2024, 5, 20, 0));
        assert_eq!(window.end, at(2024, 8, 20, 0));
    }

    #[test]
    fn test_approval_on_monday_starts_following_week() {
        let window =
            ProgramWindow::after_approval(at(2024, 5, 20, 8), MembershipTier::Year).unwrap();
        assert_eq!(window.start, at(2024, 5, 27, 0));
        assert!(window.is_active(at(2025, 5, 26, 23)));
        assert!(window.is_expired(at(2025, 5, 27, 0)));
    }
}
