//! Validation for colorcraft manifests.
//!
//! Runs a suite of checks against a parsed manifest and reports errors and
//! warnings. Used by both `colorcraft validate` and `colorcraft build`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::manifest::Manifest;
use crate::output::{plural, Printer};

/// Run all validation checks against the manifest.
pub fn validate_manifest(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_names(manifest));
    result.merge(checks::check_configs(manifest));
    result.merge(checks::check_resolutions(manifest));
    result.merge(checks::check_reproducibility(manifest));
    result.merge(checks::check_empty_renders(manifest));

    result
}

/// Print diagnostics and a summary line to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        let subject = match &d.entry {
            Some(entry) => format!("{}: ", printer.bold(entry)),
            None => String::new(),
        };
        eprintln!("  {}[{}]: {}{}", label, printer.dim(&d.code), subject, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.warning_count() > 0 {
        printer.warning("Checked", &format!("passed with {}", warnings));
    } else {
        printer.status("Checked", "no problems found");
    }
}
