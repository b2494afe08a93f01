//! Core domain types for colorcraft.
//!
//! - `Colour` - RGBA colour values and hex helpers
//! - `Hsl` - HSL colour space conversions
//! - `PatternConfig`, `SplatterConfig`, `GradientConfig` - render inputs
//! - `Resolution` - output size

mod colour;
mod config;
mod hsl;

pub use colour::{contrast_colour, hex_to_rgb, random_colour, rgb_to_hex, Colour};
pub use config::{
    even_stops, GradientConfig, GradientKind, PatternConfig, PatternKind, Resolution,
    SplatterConfig,
};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
