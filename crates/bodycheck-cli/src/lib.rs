//! # bodycheck-cli — Command-Line Harness for bodycheck
//!
//! Provides the `bodycheck` binary: a thin shell around
//! `bodycheck-schema` that loads documents from disk and reports verdicts.
//!
//! ## Subcommands
//!
//! - `bodycheck check` — Validate a body file against a schema file.
//! - `bodycheck selftest` — Run the reference fixtures.
//!
//! ```bash
//! bodycheck check --body request.json --schema schema.yaml
//! bodycheck --config options.yaml check --body request.json --schema schema.json
//! bodycheck -v selftest
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers return an exit code.
//! - No validation logic here; everything delegates to `bodycheck-schema`.

pub mod check;
pub mod load;
pub mod selftest;

use std::path::Path;

use anyhow::{Context, Result};
use bodycheck_schema::ValidationOptions;

/// Loads validation options from an optional config file.
///
/// Without a file the defaults apply.
pub fn load_options(config: Option<&Path>) -> Result<ValidationOptions> {
    match config {
        Some(path) => load::load_typed(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(ValidationOptions::default()),
    }
}
