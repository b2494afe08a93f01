//! Build command implementation.
//!
//! Validates colorcraft.yaml, then renders every entry to a PNG in the
//! output directory.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{CraftError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::validation::{print_diagnostics, validate_manifest};

/// Render every entry in colorcraft.yaml
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Manifest to build
    #[arg(default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Only render the named entries; repeat for more
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let mut manifest = Manifest::load(&args.manifest)?;
    if let Some(output) = args.output {
        manifest.output = output;
    }

    let result = validate_manifest(&manifest);
    if !result.is_ok() {
        print_diagnostics(&result, printer);
    }
    if result.has_errors() {
        return Err(CraftError::invalid_with_help(
            format!(
                "{} has {}",
                display_path(&args.manifest),
                plural(result.error_count(), "error", "errors")
            ),
            "Run `colorcraft validate` for details",
        ));
    }

    if let Some(unknown) = args
        .only
        .iter()
        .find(|name| !manifest.renders.iter().any(|e| &e.name == *name))
    {
        return Err(CraftError::invalid(format!(
            "no render named '{}' in {}",
            unknown,
            display_path(&args.manifest)
        )));
    }

    let root = project_root(&args.manifest);
    let mut built = 0;

    for entry in &manifest.renders {
        if !args.only.is_empty() && !args.only.contains(&entry.name) {
            continue;
        }

        let resolution = manifest.resolution_for(entry)?;
        let path = manifest.output_path(root, entry);
        printer.rendering(
            &format!("{} {}", entry.name, entry.job.kind()),
            resolution,
            None,
        );

        let canvas = entry.job.render_at(resolution)?;
        write_png(&canvas, &path)?;
        built += 1;
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(built, "image", "images"),
            printer.path(&root.join(&manifest.output))
        ),
    );

    Ok(())
}

/// Directory that manifest-relative paths resolve against.
fn project_root(manifest: &Path) -> &Path {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::STARTER_MANIFEST;
    use std::fs;
    use tempfile::tempdir;

    const SMALL_MANIFEST: &str = r##"output: out
resolution: 40x30
renders:
  - name: bands
    kind: pattern
    colors: ["#264653", "#e9c46a"]
    seed: 9
  - name: paint
    kind: splatter
    colors: ["#ff5252"]
    count: 4
    seed: 2
  - name: fade
    kind: gradient
    type: radial
    colors: ["#000000", "#ffffff"]
    stops: [0, 100]
    resolution: 20x20
"##;

    fn args(manifest: PathBuf) -> BuildArgs {
        BuildArgs {
            manifest,
            output: None,
            only: Vec::new(),
        }
    }

    #[test]
    fn test_build_renders_every_entry() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join(MANIFEST_FILENAME);
        fs::write(&manifest, SMALL_MANIFEST).unwrap();

        run(args(manifest), &Printer::new()).unwrap();

        let out = dir.path().join("out");
        let bands = image::open(out.join("bands.png")).unwrap();
        assert_eq!((bands.width(), bands.height()), (40, 30));
        assert!(out.join("paint.png").exists());

        let fade = image::open(out.join("fade.png")).unwrap();
        assert_eq!((fade.width(), fade.height()), (20, 20));
    }

    #[test]
    fn test_build_output_override_and_only() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join(MANIFEST_FILENAME);
        fs::write(&manifest, SMALL_MANIFEST).unwrap();

        let mut args = args(manifest);
        args.output = Some(PathBuf::from("elsewhere"));
        args.only = vec!["fade".to_string()];
        run(args, &Printer::new()).unwrap();

        let out = dir.path().join("elsewhere");
        assert!(out.join("fade.png").exists());
        assert!(!out.join("bands.png").exists());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_build_unknown_only_name() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join(MANIFEST_FILENAME);
        fs::write(&manifest, SMALL_MANIFEST).unwrap();

        let mut args = args(manifest);
        args.only = vec!["missing".to_string()];
        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_build_refuses_invalid_manifest() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join(MANIFEST_FILENAME);
        let broken = STARTER_MANIFEST.replace("minSize: 15", "minSize: 90");
        fs::write(&manifest, broken).unwrap();

        let err = run(args(manifest), &Printer::new()).unwrap_err();
        assert!(matches!(err, CraftError::InvalidArgument { .. }));
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_build_missing_manifest() {
        let dir = tempdir().unwrap();
        let err = run(args(dir.path().join("nope.yaml")), &Printer::new()).unwrap_err();
        assert!(matches!(err, CraftError::Io { .. }));
    }

    #[test]
    fn test_project_root() {
        assert_eq!(project_root(Path::new("colorcraft.yaml")), Path::new("."));
        assert_eq!(project_root(Path::new("art/colorcraft.yaml")), Path::new("art"));
    }
}
