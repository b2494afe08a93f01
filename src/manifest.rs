//! Project manifest (colorcraft.yaml) parsing.
//!
//! The manifest lists renders to produce in one `colorcraft build`, plus the
//! output directory and default resolution. Single render configs can also be
//! loaded on their own from JSON or YAML.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};
use crate::presets::parse_resolution;
use crate::render::{Canvas, GradientRenderer, PatternRenderer, SplatterRenderer};
use crate::types::{GradientConfig, PatternConfig, Resolution, SplatterConfig};

/// Default manifest filename.
pub const MANIFEST_FILENAME: &str = "colorcraft.yaml";

/// Manifest written by `colorcraft init`.
pub const STARTER_MANIFEST: &str = r##"# colorcraft render manifest
output: dist
resolution: full-hd

renders:
  - name: waves
    kind: pattern
    patternType: waves
    colors: ["#264653", "#2a9d8f", "#e9c46a", "#f4a261"]
    backgroundColor: "#ffffff"
    complexity: 5
    scale: 20
    seed: 42

  - name: splatter
    kind: splatter
    colors: ["#ff5252", "#ffeb3b", "#2196f3", "#4caf50"]
    count: 80
    minSize: 15
    maxSize: 60
    blur: 2
    opacity: 0.7
    seed: 1234

  - name: sunset
    kind: gradient
    type: linear
    colors: ["#ff512f", "#f09819"]
    stops: [0, 100]
    angle: 45
    resolution: 1500x500
"##;

/// Project manifest loaded from colorcraft.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for rendered images.
    pub output: PathBuf,

    /// Default size for entries without their own: a preset slug or `WxH`.
    pub resolution: String,

    pub renders: Vec<RenderEntry>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            resolution: "full-hd".to_string(),
            renders: Vec::new(),
        }
    }
}

/// One named render in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEntry {
    /// Output file stem.
    pub name: String,

    /// Overrides the manifest resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,

    #[serde(flatten)]
    pub job: RenderJob,
}

/// What to render, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RenderJob {
    Pattern(PatternConfig),
    Splatter(SplatterConfig),
    Gradient(GradientConfig),
}

impl RenderJob {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderJob::Pattern(_) => "pattern",
            RenderJob::Splatter(_) => "splatter",
            RenderJob::Gradient(_) => "gradient",
        }
    }

    /// Validate the wrapped config.
    pub fn validate(&self) -> Result<()> {
        match self {
            RenderJob::Pattern(config) => config.validate(),
            RenderJob::Splatter(config) => config.validate(),
            RenderJob::Gradient(config) => config.validate(),
        }
    }

    /// Render onto a fresh canvas of the given size.
    pub fn render_at(&self, resolution: Resolution) -> Result<Canvas> {
        let mut canvas = Canvas::with_resolution(resolution)?;
        match self {
            RenderJob::Pattern(config) => PatternRenderer::new(config).render(&mut canvas)?,
            RenderJob::Splatter(config) => SplatterRenderer::new(config).render(&mut canvas)?,
            RenderJob::Gradient(config) => GradientRenderer::new(config).render(&mut canvas)?,
        }
        Ok(canvas)
    }
}

impl Manifest {
    /// Load manifest from a colorcraft.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CraftError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CraftError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })
    }

    /// Resolution for an entry, falling back to the manifest default.
    pub fn resolution_for(&self, entry: &RenderEntry) -> Result<Resolution> {
        let resolution = parse_resolution(entry.resolution.as_deref().unwrap_or(&self.resolution))?;
        resolution.validate()?;
        Ok(resolution)
    }

    /// PNG path for an entry, relative to `root`.
    pub fn output_path(&self, root: &Path, entry: &RenderEntry) -> PathBuf {
        root.join(&self.output).join(format!("{}.png", entry.name))
    }
}

/// Load a single render config, picking JSON or YAML by file extension.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| CraftError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read config: {}", e),
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => serde_json::from_str(&content).map_err(|e| CraftError::Parse {
            message: format!("Invalid config {}: {}", path.display(), e),
            help: None,
        }),
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&content).map_err(|e| CraftError::Parse {
                message: format!("Invalid config {}: {}", path.display(), e),
                help: None,
            })
        }
        _ => Err(CraftError::invalid_with_help(
            format!("cannot tell the format of {}", path.display()),
            "Use a .json, .yaml or .yml file",
        )),
    }
}
