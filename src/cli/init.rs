//! Init command implementation.
//!
//! Writes a starter `colorcraft.yaml` with one render of each kind.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{CraftError, Result};
use crate::manifest::{MANIFEST_FILENAME, STARTER_MANIFEST};
use crate::output::{display_path, Printer};

/// Create a starter colorcraft.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing colorcraft.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(CraftError::invalid_with_help(
            format!("{} already exists", display_path(&manifest_path)),
            "Use --force to overwrite",
        ));
    }

    fs::create_dir_all(&args.path).map_err(|e| CraftError::Io {
        path: args.path.clone(),
        message: format!("Failed to create project directory: {}", e),
    })?;
    fs::write(&manifest_path, STARTER_MANIFEST).map_err(|e| CraftError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &printer.path(&manifest_path));
    printer.info("Next", "run `colorcraft build` to render it");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest.output, PathBuf::from("dist"));
        assert_eq!(manifest.renders.len(), 3);
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &Printer::new());
        assert!(matches!(result, Err(CraftError::InvalidArgument { .. })));

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(content, "output: build");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(content, STARTER_MANIFEST);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("art").join("wallpapers");

        let args = InitArgs {
            path: project.clone(),
            force: false,
        };
        run(args, &Printer::new()).unwrap();

        assert!(project.join(MANIFEST_FILENAME).exists());
    }
}
