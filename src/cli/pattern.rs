//! Pattern command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{save, SizeArgs};
use crate::error::Result;
use crate::manifest::load_config;
use crate::output::Printer;
use crate::random::random_seed;
use crate::render::{Canvas, PatternRenderer};
use crate::types::{Colour, PatternConfig, PatternKind};

/// Render an abstract pattern
#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Pattern type
    #[arg(long = "type", short = 't', value_enum)]
    pub pattern_type: Option<PatternKind>,

    /// Colour as #RRGGBB; repeat for more
    #[arg(long = "color", short = 'c', value_name = "HEX")]
    pub colours: Vec<Colour>,

    /// Background colour
    #[arg(long, value_name = "HEX")]
    pub background: Option<Colour>,

    /// Number of bands, or a multiplier on sites, shapes and particles
    #[arg(long)]
    pub complexity: Option<u32>,

    /// Feature size in pixels
    #[arg(long)]
    pub scale: Option<f64>,

    /// Flow field frequency
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u32>,

    /// Load settings from a JSON or YAML config; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output PNG path
    #[arg(long, short, default_value = "pattern.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub size: SizeArgs,
}

impl PatternArgs {
    /// Build the config from an optional file plus flag overrides.
    pub fn to_config(&self) -> Result<PatternConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PatternConfig::new(PatternKind::default(), Vec::new()).with_seed(random_seed()),
        };

        if let Some(kind) = self.pattern_type {
            config.pattern_type = kind;
        }
        if !self.colours.is_empty() {
            config.colours = self.colours.clone();
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(complexity) = self.complexity {
            config.complexity = complexity;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(noise_scale) = self.noise_scale {
            config.noise_scale = noise_scale;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(args: PatternArgs, printer: &Printer) -> Result<()> {
    let config = args.to_config()?;
    let resolution = args.size.resolve()?;

    printer.rendering(
        &format!("{} pattern", config.pattern_type),
        resolution,
        Some(config.seed),
    );
    if !config.pattern_type.is_reproducible() {
        printer.warning(
            "Note",
            &format!("{} layouts are random and change on every run", config.pattern_type),
        );
    }

    let mut canvas = Canvas::with_resolution(resolution)?;
    PatternRenderer::new(&config).render(&mut canvas)?;
    save(&canvas, &args.output, printer)
}
