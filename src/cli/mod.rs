pub mod build;
pub mod completions;
pub mod gradient;
pub mod init;
pub mod list;
pub mod palette;
pub mod pattern;
pub mod splatter;
pub mod validate;

use std::path::Path;

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::output::Printer;
use crate::presets::parse_resolution;
use crate::render::{write_png, Canvas};
use crate::types::Resolution;

/// colorcraft - palette, gradient, splatter and pattern generator
#[derive(Parser, Debug)]
#[command(name = "colorcraft")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a colour palette from a harmony scheme
    Palette(palette::PaletteArgs),

    /// Render an abstract pattern (waves, voronoi, geometric, flow)
    Pattern(pattern::PatternArgs),

    /// Render a seeded paint splatter
    Splatter(splatter::SplatterArgs),

    /// Render a gradient or print it as CSS
    Gradient(gradient::GradientArgs),

    /// Render every entry in colorcraft.yaml
    Build(build::BuildArgs),

    /// Create a starter colorcraft.yaml
    Init(init::InitArgs),

    /// Validate colorcraft.yaml without rendering
    Validate(validate::ValidateArgs),

    /// List built-in presets
    List(list::ListArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Output size options shared by the render commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SizeArgs {
    /// Output size: a preset (full-hd, 4k, instagram-post, ...) or WIDTHxHEIGHT
    #[arg(long, short = 'r', conflicts_with_all = ["width", "height"])]
    pub resolution: Option<String>,

    /// Output width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Output height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

impl SizeArgs {
    /// Resolve to a concrete size; missing dimensions default to Full HD.
    pub fn resolve(&self) -> Result<Resolution> {
        if let Some(value) = &self.resolution {
            return parse_resolution(value);
        }
        let default = Resolution::default();
        let resolution = Resolution::new(
            self.width.unwrap_or(default.width),
            self.height.unwrap_or(default.height),
        );
        resolution.validate()?;
        Ok(resolution)
    }
}

/// Write a finished canvas and report it.
fn save(canvas: &Canvas, path: &Path, printer: &Printer) -> Result<()> {
    write_png(canvas, path)?;
    printer.wrote(path);
    Ok(())
}
