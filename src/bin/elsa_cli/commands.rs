// ABOUTME: Command implementations for elsa-cli
// ABOUTME: Reads profile and selection JSON files, calls the coaching service, prints JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use elsa_coach::intelligence::bill::MealSelection;
use elsa_coach::intelligence::calendar::ProgramWindow;
use elsa_coach::intelligence::catalog::InMemoryCatalog;
use elsa_coach::models::{MembershipTier, Profile};
use elsa_coach::services::CoachingService;
use serde::de::DeserializeOwned;
use serde::Serialize;

type Service = CoachingService<InMemoryCatalog>;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| anyhow!("Failed to parse {}: {e}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the current calendar position
pub fn locate(service: &Service, profile: &Path, now: DateTime<Utc>) -> Result<()> {
    let profile: Profile = read_json(profile)?;
    print_json(&service.training_cycle(&profile, now)?)
}

/// Print today's sessions
pub fn sessions(service: &Service, profile: &Path, now: DateTime<Utc>) -> Result<()> {
    let profile: Profile = read_json(profile)?;
    print_json(&service.daily_sessions(&profile, now)?)
}

/// Print the membership window status
pub fn status(service: &Service, profile: &Path, now: DateTime<Utc>) -> Result<()> {
    let profile: Profile = read_json(profile)?;
    print_json(&service.program_status(&profile, now)?)
}

/// Print today's nutrition plan or advisory
pub fn nutrition(service: &Service, profile: &Path, now: DateTime<Utc>) -> Result<()> {
    let profile: Profile = read_json(profile)?;
    print_json(&service.daily_nutrition(&profile, now)?)
}

/// Print today's psychological plan
pub fn psychology(service: &Service, profile: &Path, now: DateTime<Utc>) -> Result<()> {
    let profile: Profile = read_json(profile)?;
    print_json(&service.daily_psychology(&profile, now)?)
}

/// Print the membership curriculum
pub fn curriculum(service: &Service, profile: &Path) -> Result<()> {
    let profile: Profile = read_json(profile)?;
    print_json(&service.complete_curriculum(&profile)?)
}

/// Print the calorie bill of picked foods
pub fn bill(service: &Service, selections: &Path) -> Result<()> {
    let selections: Vec<MealSelection> = read_json(selections)?;
    print_json(&service.meal_bill(&selections))
}

/// Print the training window a payment approval opens
pub fn window(months: u32, approved_at: DateTime<Utc>) -> Result<()> {
    let tier = MembershipTier::try_from(months)?;
    print_json(&ProgramWindow::after_approval(approved_at, tier)?)
}
