// ABOUTME: Environment configuration for the coaching service and CLI
// ABOUTME: Resolves the deployment environment, catalog snapshot path, and rule-table overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use elsa_core::constants::env_config;
use elsa_intelligence::config::{CoachingConfig, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Service configuration resolved from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Catalog snapshot JSON file
    pub catalog_path: PathBuf,
    /// Validated rule tables
    pub coaching: CoachingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a rule-table override is invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var(env_config::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();
        let catalog_path = env::var(env_config::CATALOG_PATH)
            .map_or_else(|_| PathBuf::from(env_config::DEFAULT_CATALOG_PATH), PathBuf::from);
        let coaching = CoachingConfig::load()?;

        info!(
            %environment,
            catalog_path = %catalog_path.display(),
            "Loaded coaching service configuration"
        );

        Ok(Self {
            environment,
            catalog_path,
            coaching,
        })
    }
}
