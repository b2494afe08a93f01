//! Individual validation checks over a manifest.

use std::collections::HashMap;

use miette::Diagnostic as _;

use super::warning::{Diagnostic, ValidationResult};
use crate::error::CraftError;
use crate::manifest::{Manifest, RenderJob};

fn from_error(code: &str, err: &CraftError) -> Diagnostic {
    let diagnostic = Diagnostic::error(code, err.to_string());
    match err.help() {
        Some(help) => diagnostic.with_help(help.to_string()),
        None => diagnostic,
    }
}

/// Every entry's config must pass the same validation the renderers run.
pub fn check_configs(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();
    for entry in &manifest.renders {
        if let Err(err) = entry.job.validate() {
            result.push(from_error("colorcraft::validate::invalid-config", &err).for_entry(&entry.name));
        }
    }
    result
}

/// Names become file stems, so they must be unique and path-safe.
pub fn check_names(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for entry in &manifest.renders {
        let name = entry.name.as_str();
        if name.trim().is_empty() {
            result.push(Diagnostic::error(
                "colorcraft::validate::empty-name",
                format!("{} render has an empty name", entry.job.kind()),
            ));
            continue;
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            result.push(
                Diagnostic::error(
                    "colorcraft::validate::bad-name",
                    "name is used as a file name and cannot contain path separators",
                )
                .for_entry(name),
            );
        }

        let count = seen.entry(name).or_insert(0);
        *count += 1;
        if *count == 2 {
            result.push(
                Diagnostic::error(
                    "colorcraft::validate::duplicate-name",
                    "more than one render has this name",
                )
                .for_entry(name)
                .with_help("Each render writes <name>.png; rename one of them"),
            );
        }
    }
    result
}

/// The manifest default and per-entry overrides must resolve to a size.
pub fn check_resolutions(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();
    for entry in &manifest.renders {
        if let Err(err) = manifest.resolution_for(entry) {
            result.push(from_error("colorcraft::validate::resolution", &err).for_entry(&entry.name));
        }
    }
    result
}

/// Flag pattern types whose layout changes on every render.
pub fn check_reproducibility(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();
    for entry in &manifest.renders {
        if let RenderJob::Pattern(config) = &entry.job {
            if !config.pattern_type.is_reproducible() {
                result.push(
                    Diagnostic::warning(
                        "colorcraft::validate::not-reproducible",
                        format!(
                            "{} patterns place shapes randomly; the seed does not fix the layout",
                            config.pattern_type
                        ),
                    )
                    .for_entry(&entry.name),
                );
            }
        }
    }
    result
}

/// Flag renders that can only produce a flat background.
pub fn check_empty_renders(manifest: &Manifest) -> ValidationResult {
    let mut result = ValidationResult::new();
    for entry in &manifest.renders {
        let empty = match &entry.job {
            RenderJob::Pattern(config) => config.complexity == 0,
            RenderJob::Splatter(config) => config.count == 0 || config.opacity == 0.0,
            RenderJob::Gradient(_) => false,
        };
        if empty {
            result.push(
                Diagnostic::warning(
                    "colorcraft::validate::background-only",
                    "this render draws nothing over its background",
                )
                .for_entry(&entry.name)
                .with_help("Raise complexity, count or opacity"),
            );
        }
    }
    result
}
