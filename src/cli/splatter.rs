//! Splatter command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{save, SizeArgs};
use crate::error::Result;
use crate::manifest::load_config;
use crate::output::Printer;
use crate::presets::splatter_preset;
use crate::random::random_seed;
use crate::render::SplatterRenderer;
use crate::types::{Colour, SplatterConfig};

/// Render a seeded paint splatter
#[derive(Args, Debug)]
pub struct SplatterArgs {
    /// Start from a built-in preset (see `colorcraft list splatter`)
    #[arg(long, short, conflicts_with = "config")]
    pub preset: Option<String>,

    /// Colour as #RRGGBB; repeat for more
    #[arg(long = "color", short = 'c', value_name = "HEX")]
    pub colours: Vec<Colour>,

    /// Background colour
    #[arg(long, value_name = "HEX")]
    pub background: Option<Colour>,

    /// Number of splatters
    #[arg(long, short = 'n')]
    pub count: Option<u32>,

    /// Smallest splatter radius in pixels
    #[arg(long)]
    pub min_size: Option<f64>,

    /// Largest splatter radius in pixels
    #[arg(long)]
    pub max_size: Option<f64>,

    /// Gaussian blur in pixels
    #[arg(long)]
    pub blur: Option<f64>,

    /// Opacity between 0 and 1
    #[arg(long)]
    pub opacity: Option<f64>,

    /// Paint normally instead of multiplying colours
    #[arg(long)]
    pub no_blend: bool,

    /// Seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Load settings from a JSON or YAML config; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, short, default_value = "splatter.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub size: SizeArgs,
}

impl SplatterArgs {
    /// Build the config from a preset or file plus flag overrides.
    pub fn to_config(&self) -> Result<SplatterConfig> {
        let mut config = if let Some(name) = &self.preset {
            splatter_preset(name)?.to_config()
        } else if let Some(path) = &self.config {
            load_config(path)?
        } else {
            SplatterConfig::new(Vec::new()).with_seed(random_seed())
        };

        if !self.colours.is_empty() {
            config.colours = self.colours.clone();
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(min_size) = self.min_size {
            config.min_size = min_size;
        }
        if let Some(max_size) = self.max_size {
            config.max_size = max_size;
        }
        if let Some(blur) = self.blur {
            config.blur = blur;
        }
        if let Some(opacity) = self.opacity {
            config.opacity = opacity;
        }
        if self.no_blend {
            config.use_blending = false;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(args: SplatterArgs, printer: &Printer) -> Result<()> {
    let config = args.to_config()?;
    let resolution = args.size.resolve()?;

    printer.rendering(
        &format!("{} splatters", config.count),
        resolution,
        Some(config.seed),
    );

    let canvas = SplatterRenderer::new(&config).render_at(resolution)?;
    save(&canvas, &args.output, printer)
}
