//! # Check Subcommand
//!
//! Validates one body file against one schema file and prints the verdict.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use bodycheck_schema::{AbsentOptional, ValidationOptions, Validator};

use crate::load::load_document;

/// Arguments for the `bodycheck check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Request body to validate (JSON, or YAML by extension).
    #[arg(long, value_name = "FILE")]
    pub body: PathBuf,

    /// Field schema to validate against (JSON, or YAML by extension).
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,

    /// Accept optional fields that are absent from the body instead of
    /// type-checking them as `undefined`.
    #[arg(long)]
    pub skip_absent_optional: bool,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when the body is valid, 1 when it is not.
/// Unreadable or unparsable files are reported as errors.
pub fn run_check(args: &CheckArgs, options: ValidationOptions) -> Result<u8> {
    let validator = validator_for(args, options);

    let body = load_document(&args.body).context("failed to load request body")?;
    let schema = load_document(&args.schema).context("failed to load schema")?;

    tracing::info!(
        body = %args.body.display(),
        schema = %args.schema.display(),
        absent_optional = ?validator.options().absent_optional,
        "validating body"
    );

    let valid = validator.validate(&body, &schema);
    if valid {
        println!("VALID: {}", args.body.display());
        Ok(0)
    } else {
        println!("INVALID: {}", args.body.display());
        Ok(1)
    }
}

/// Builds the validator for a check run. `--skip-absent-optional` overrides
/// whatever the options file chose.
fn validator_for(args: &CheckArgs, options: ValidationOptions) -> Validator {
    let options = if args.skip_absent_optional {
        options.with_absent_optional(AbsentOptional::Skip)
    } else {
        options
    };
    Validator::new(options)
}
