//! Validate command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::{CraftError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::validation::{print_diagnostics, validate_manifest};

/// Validate colorcraft.yaml without rendering
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Manifest to check
    #[arg(default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    printer.status("Checking", &display_path(&args.manifest));

    let manifest = Manifest::load(&args.manifest)?;
    let result = validate_manifest(&manifest);
    print_diagnostics(&result, printer);

    let failures = if args.strict {
        result.error_count() + result.warning_count()
    } else {
        result.error_count()
    };

    if failures > 0 {
        return Err(CraftError::invalid(format!(
            "{} failed validation with {}",
            display_path(&args.manifest),
            plural(failures, "problem", "problems")
        )));
    }

    Ok(())
}
