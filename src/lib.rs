//! colorcraft - palette, gradient, splatter and pattern generator
//!
//! A library for generating colour palettes from harmony schemes and
//! rendering seeded splatters, gradients and abstract patterns to PNG.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod presets;
pub mod random;
pub mod render;
pub mod scheme;
pub mod types;
pub mod validation;

pub use error::{CraftError, Result};
pub use manifest::{load_config, Manifest, RenderEntry, RenderJob};
pub use presets::{gradient_preset, parse_resolution, splatter_preset};
pub use random::{noise_2d, random_seed, seeded_random, SeededRandom};
pub use render::{
    encode_png, write_png, Canvas, GradientRenderer, Paint, Path, PatternRenderer,
    SplatterRenderer, Surface,
};
pub use scheme::{generate_palette, palette_from_hue, ColorScheme, PaletteSpec};
pub use types::{
    contrast_colour, hex_to_rgb, random_colour, rgb_to_hex, Colour, GradientConfig, GradientKind,
    PatternConfig, PatternKind, Resolution, SplatterConfig,
};
pub use validation::{validate_manifest, Diagnostic, Severity, ValidationResult};
