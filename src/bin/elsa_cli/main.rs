// ABOUTME: ELSA CLI - command-line access to the coaching engine over a catalog snapshot
// ABOUTME: Locates clients in the curriculum, prints daily plans, curricula, and meal bills as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching
//!
//! Usage:
//! ```bash
//! # Where is the client in the curriculum today?
//! elsa-cli locate --profile profile.json
//!
//! # Today's cycling and gym sessions
//! elsa-cli --catalog data/catalog.json sessions --profile profile.json
//!
//! # Membership window status
//! elsa-cli status --profile profile.json
//!
//! # Daily nutrition plan at a given instant
//! elsa-cli nutrition --profile profile.json --now 2025-03-04T08:00:00Z
//!
//! # Full membership curriculum
//! elsa-cli curriculum --profile profile.json
//!
//! # Today's psychological plan
//! elsa-cli psychology --profile profile.json
//!
//! # Calorie bill of picked foods
//! elsa-cli bill --selections picks.json
//!
//! # Training window for a payment approved now
//! elsa-cli window --months 6
//! ```

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use elsa_coach::catalog::load_catalog;
use elsa_coach::config::AppConfig;
use elsa_coach::logging::LoggingConfig;
use elsa_coach::services::CoachingService;
use elsa_core::constants::service_names;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "elsa-cli",
    about = "ELSA coaching engine CLI",
    long_about = "Command-line access to the ELSA coaching engine: calendar position, daily sessions, nutrition plans, curricula, and meal bills."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog snapshot override (defaults to ELSA_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Current day and week in the curriculum
    Locate {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Instant to evaluate (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Sessions scheduled for the current day
    Sessions {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Instant to evaluate (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Membership window and whether it is active
    Status {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Instant to evaluate (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Daily nutrition plan or health advisory
    Nutrition {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Instant to evaluate (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Psychological plan for the current day
    Psychology {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Instant to evaluate (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<DateTime<Utc>>,
    },

    /// Curriculum for the whole membership
    Curriculum {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Calorie bill of picked foods
    Bill {
        /// JSON array of {slot, food_ids}
        #[arg(long)]
        selections: PathBuf,
    },

    /// Training window opened by a payment approval
    Window {
        /// Membership length in months (3, 6 or 12)
        #[arg(long)]
        months: u32,

        /// Approval instant (RFC 3339, defaults to now)
        #[arg(long)]
        approved_at: Option<DateTime<Utc>>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(service_names::ELSA_CLI);
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init()?;

    let config = AppConfig::from_env()?;

    // Window needs no catalog
    if let Command::Window {
        months,
        approved_at,
    } = cli.command
    {
        return commands::window(months, approved_at.unwrap_or_else(Utc::now));
    }

    let catalog_path = cli.catalog.unwrap_or(config.catalog_path);
    info!(catalog = %catalog_path.display(), "Loading catalog");
    let catalog = Arc::new(load_catalog(&catalog_path)?);
    let service = CoachingService::new(catalog, config.coaching);

    match cli.command {
        Command::Locate { profile, now } => {
            commands::locate(&service, &profile, now.unwrap_or_else(Utc::now))
        }
        Command::Sessions { profile, now } => {
            commands::sessions(&service, &profile, now.unwrap_or_else(Utc::now))
        }
        Command::Status { profile, now } => {
            commands::status(&service, &profile, now.unwrap_or_else(Utc::now))
        }
        Command::Nutrition { profile, now } => {
            commands::nutrition(&service, &profile, now.unwrap_or_else(Utc::now))
        }
        Command::Psychology { profile, now } => {
            commands::psychology(&service, &profile, now.unwrap_or_else(Utc::now))
        }
        Command::Curriculum { profile } => commands::curriculum(&service, &profile),
        Command::Bill { selections } => commands::bill(&service, &selections),
        Command::Window { .. } => Ok(()),
    }
}
