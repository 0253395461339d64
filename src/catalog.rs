// ABOUTME: Catalog snapshot loading from JSON seed files into the in-memory catalog
// ABOUTME: Distinguishes unreadable files, malformed JSON, and invalid reference data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ELSA Coaching

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use elsa_core::errors::{AppError, ErrorCode};
use elsa_intelligence::catalog::{CatalogSnapshot, InMemoryCatalog};
use thiserror::Error;
use tracing::info;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// File could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Snapshot path
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// File is not a valid snapshot document
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        /// Snapshot path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Snapshot parsed but holds inconsistent reference data
    #[error("Invalid catalog data: {0}")]
    Invalid(#[from] AppError),
}

impl From<CatalogLoadError> for AppError {
    fn from(error: CatalogLoadError) -> Self {
        match error {
            CatalogLoadError::Invalid(inner) => {
                Self::new(ErrorCode::CatalogDataMissing, inner.message.clone())
                    .with_details(inner.context.details.clone())
                    .with_source(inner)
            }
            other => Self::config(other.to_string()).with_source(other),
        }
    }
}

/// Parse a snapshot document and index it
///
/// # Errors
///
/// Returns `Parse` for malformed JSON or `Invalid` for inconsistent data
pub fn parse_catalog(json: &str, path: &Path) -> Result<InMemoryCatalog, CatalogLoadError> {
    let snapshot: CatalogSnapshot =
        serde_json::from_str(json).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(InMemoryCatalog::from_snapshot(snapshot)?)
}

/// Load the catalog snapshot at `path`
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, otherwise see [`parse_catalog`]
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, CatalogLoadError> {
    let json = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&json, path)?;
    info!(
        path = %path.display(),
        plans = catalog.plan_count(),
        "Loaded catalog snapshot"
    );
    Ok(catalog)
}
