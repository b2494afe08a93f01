//! Gradient command implementation.

use std::path::PathBuf;

use clap::Args;

use super::{save, SizeArgs};
use crate::error::Result;
use crate::manifest::load_config;
use crate::output::Printer;
use crate::presets::gradient_preset;
use crate::render::{Canvas, GradientRenderer};
use crate::types::{even_stops, Colour, GradientConfig, GradientKind};

/// Render a gradient or print it as CSS
#[derive(Args, Debug)]
pub struct GradientArgs {
    /// Gradient type
    #[arg(long = "type", short = 't', value_enum)]
    pub kind: Option<GradientKind>,

    /// Colour as #RRGGBB; repeat for more
    #[arg(long = "color", short = 'c', value_name = "HEX")]
    pub colours: Vec<Colour>,

    /// Stop position in percent, one per colour (spread evenly when omitted)
    #[arg(long = "stop", short = 's', value_name = "PERCENT")]
    pub stops: Vec<f64>,

    /// Direction in degrees (linear) or start angle (conic)
    #[arg(long, short = 'a', allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Start from a built-in preset (see `colorcraft list gradient`)
    #[arg(long, short, conflicts_with = "config")]
    pub preset: Option<String>,

    /// Load settings from a JSON or YAML config; flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the CSS background value instead of rendering
    #[arg(long)]
    pub css: bool,

    /// Output PNG path
    #[arg(long, short, default_value = "gradient.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub size: SizeArgs,
}

impl GradientArgs {
    /// Build the config from a preset or file plus flag overrides.
    pub fn to_config(&self) -> Result<GradientConfig> {
        let mut config = if let Some(name) = &self.preset {
            gradient_preset(name)?.to_config()
        } else if let Some(path) = &self.config {
            load_config(path)?
        } else {
            GradientConfig::new(GradientKind::default(), Vec::new())
        };

        if let Some(kind) = self.kind {
            config.kind = kind;
        }
        if !self.colours.is_empty() {
            config.colours = self.colours.clone();
            config.stops = even_stops(config.colours.len());
        }
        if !self.stops.is_empty() {
            config.stops = self.stops.clone();
        }
        if let Some(angle) = self.angle {
            config.angle = angle;
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn run(args: GradientArgs, printer: &Printer) -> Result<()> {
    let config = args.to_config()?;

    if args.css {
        println!("{}", config.to_css());
        return Ok(());
    }

    let resolution = args.size.resolve()?;
    printer.rendering(
        &format!("{} gradient with {} stops", config.kind, config.stops.len()),
        resolution,
        None,
    );

    let mut canvas = Canvas::with_resolution(resolution)?;
    GradientRenderer::new(&config).render(&mut canvas)?;
    save(&canvas, &args.output, printer)
}
