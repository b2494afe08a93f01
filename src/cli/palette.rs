//! Palette command implementation.
//!
//! Prints a generated palette to stdout, one colour per line or as JSON, and
//! optionally saves it as a strip of equal-width swatches.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use serde::Serialize;

use super::save;
use crate::error::{CraftError, Result};
use crate::output::{plural, Printer};
use crate::render::{Canvas, Paint, Surface};
use crate::scheme::{generate_palette, ColorScheme};
use crate::types::{Colour, Resolution};

/// Size of the swatch strip written by `--output`.
pub const STRIP_SIZE: Resolution = Resolution::new(1000, 200);

/// Generate a colour palette from a harmony scheme
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Harmony scheme
    #[arg(long, short, value_enum, default_value_t = ColorScheme::Random)]
    pub scheme: ColorScheme,

    /// Number of colours
    #[arg(long, short = 'n', default_value_t = 5)]
    pub count: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = PaletteFormat::Text)]
    pub format: PaletteFormat,

    /// Also save the palette as a PNG swatch strip
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteFormat {
    /// `#rrggbb` and its readable text colour, one per line
    Text,
    /// JSON array with hex, RGB and HSL values
    Json,
}

/// One palette entry as written in JSON.
#[derive(Debug, Serialize)]
struct Swatch {
    hex: String,
    rgb: [u8; 3],
    hsl: [f64; 3],
    text: String,
}

impl From<Colour> for Swatch {
    fn from(colour: Colour) -> Self {
        let hsl = colour.to_hsl();
        Self {
            hex: colour.to_hex(),
            rgb: [colour.r, colour.g, colour.b],
            hsl: [round3(hsl.h), round3(hsl.s), round3(hsl.l)],
            text: colour.contrast().to_hex(),
        }
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let colours = generate_palette(args.scheme, args.count)?;

    printer.status(
        "Generated",
        &format!("{} {} palette", plural(colours.len(), "colour", "colours"), args.scheme),
    );

    if args.format == PaletteFormat::Text {
        printer.swatches(&colours);
    }

    print!("{}", format_palette(&colours, args.format)?);

    if let Some(path) = &args.output {
        let canvas = render_palette(&colours)?;
        save(&canvas, path, printer)?;
    }
    Ok(())
}

/// Paint `colours` side by side as full-height columns of equal width.
pub fn render_palette(colours: &[Colour]) -> Result<Canvas> {
    if colours.is_empty() {
        return Err(CraftError::invalid("cannot draw an empty palette"));
    }

    let mut canvas = Canvas::with_resolution(STRIP_SIZE)?;
    let width = STRIP_SIZE.width as f64 / colours.len() as f64;
    let height = STRIP_SIZE.height as f64;
    for (i, colour) in colours.iter().enumerate() {
        canvas.fill_rect(i as f64 * width, 0.0, width, height, &Paint::Solid(*colour));
    }
    Ok(canvas)
}

/// Render a palette in the requested format, newline-terminated.
pub fn format_palette(colours: &[Colour], format: PaletteFormat) -> Result<String> {
    match format {
        PaletteFormat::Text => Ok(colours
            .iter()
            .map(|c| format!("{} {}\n", c, c.contrast()))
            .collect()),
        PaletteFormat::Json => {
            let swatches: Vec<Swatch> = colours.iter().copied().map(Swatch::from).collect();
            let json = serde_json::to_string_pretty(&swatches).map_err(|e| CraftError::Render {
                message: format!("Failed to encode palette: {}", e),
                help: None,
            })?;
            Ok(json + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::palette_from_hue;
    use tempfile::tempdir;

    #[test]
    fn test_text_format() {
        let colours = [Colour::rgb(255, 255, 255), Colour::rgb(0x26, 0x46, 0x53)];
        insta::assert_snapshot!(format_palette(&colours, PaletteFormat::Text).unwrap().trim_end(), @r"
        #ffffff #000000
        #264653 #ffffff
        ");
    }

    #[test]
    fn test_json_format() {
        let colours = [Colour::rgb(255, 0, 0)];
        let json = format_palette(&colours, PaletteFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["hex"], "#ff0000");
        assert_eq!(value[0]["rgb"], serde_json::json!([255, 0, 0]));
        assert_eq!(value[0]["hsl"], serde_json::json!([0.0, 1.0, 0.5]));
        assert_eq!(value[0]["text"], "#ffffff");
    }

    #[test]
    fn test_triadic_text_output() {
        let colours = palette_from_hue(ColorScheme::Triadic, 0.0, 3).unwrap();
        let text = format_palette(&colours, PaletteFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("#"));
    }

    #[test]
    fn test_zero_count_is_error() {
        let args = PaletteArgs {
            scheme: ColorScheme::Analogous,
            count: 0,
            format: PaletteFormat::Text,
            output: None,
        };
        assert!(run(args, &Printer::new()).is_err());
    }

    #[test]
    fn test_strip_has_equal_width_swatches() {
        let colours = [
            Colour::rgb(0x26, 0x46, 0x53),
            Colour::rgb(0x2a, 0x9d, 0x8f),
            Colour::rgb(0xe9, 0xc4, 0x6a),
            Colour::rgb(0xf4, 0xa2, 0x61),
        ];
        let canvas = render_palette(&colours).unwrap();
        assert_eq!(canvas.image().dimensions(), (1000, 200));

        for (i, colour) in colours.iter().enumerate() {
            let left = i as u32 * 250;
            assert_eq!(canvas.pixel(left, 0), Some(*colour));
            assert_eq!(canvas.pixel(left + 125, 100), Some(*colour));
            assert_eq!(canvas.pixel(left + 249, 199), Some(*colour));
        }
    }

    #[test]
    fn test_strip_rejects_empty_palette() {
        assert!(render_palette(&[]).is_err());
    }

    #[test]
    fn test_run_writes_strip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("palette.png");
        let args = PaletteArgs {
            scheme: ColorScheme::Triadic,
            count: 3,
            format: PaletteFormat::Json,
            output: Some(path.clone()),
        };
        run(args, &Printer::plain()).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (1000, 200));
    }
}
