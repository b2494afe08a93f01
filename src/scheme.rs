//! Colour harmony palettes.
//!
//! A palette is anchored on one randomly chosen base hue and expanded by a
//! named scheme. Output order matters: index 0 is always the base-hue colour.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CraftError, Result};
use crate::types::{hsl_to_rgb, random_colour, Colour};

/// Saturation used by every scheme unless it varies saturation itself.
const SATURATION: f64 = 0.65;

/// Lightness used for single-colour-per-hue schemes.
const LIGHTNESS: f64 = 0.5;

/// Hue step between neighbouring analogous colours.
const ANALOGOUS_STEP: f64 = 0.05;

/// A named colour harmony rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Independent random colours.
    #[default]
    Random,
    /// One hue, lightness ramp.
    Monochromatic,
    /// Neighbouring hues.
    Analogous,
    /// Two opposite hues.
    Complementary,
    /// Three hues a third of a turn apart.
    Triadic,
    /// Four hues a quarter turn apart.
    Tetradic,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Random,
        ColorScheme::Monochromatic,
        ColorScheme::Analogous,
        ColorScheme::Complementary,
        ColorScheme::Triadic,
        ColorScheme::Tetradic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Random => "random",
            ColorScheme::Monochromatic => "monochromatic",
            ColorScheme::Analogous => "analogous",
            ColorScheme::Complementary => "complementary",
            ColorScheme::Triadic => "triadic",
            ColorScheme::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CraftError::invalid_with_help(
                    format!("unknown colour scheme '{}'", s),
                    "Expected one of: random, monochromatic, analogous, complementary, triadic, tetradic",
                )
            })
    }
}

/// A palette request: which scheme and how many colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSpec {
    pub scheme: ColorScheme,
    pub count: usize,
}

impl PaletteSpec {
    pub fn new(scheme: ColorScheme, count: usize) -> Self {
        Self { scheme, count }
    }

    /// Generate with the thread-local generator.
    pub fn generate(&self) -> Result<Vec<Colour>> {
        generate_palette(self.scheme, self.count)
    }
}

/// Generate `count` colours for `scheme` around a random base hue.
pub fn generate_palette(scheme: ColorScheme, count: usize) -> Result<Vec<Colour>> {
    generate_palette_with(scheme, count, &mut rand::rng())
}

/// Generate a palette drawing all randomness from `rng`.
pub fn generate_palette_with<R: Rng + ?Sized>(
    scheme: ColorScheme,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Colour>> {
    check_count(count)?;

    if scheme == ColorScheme::Random {
        return Ok((0..count).map(|_| random_colour(rng)).collect());
    }

    let base_hue = random_colour(rng).to_hsl().h;
    log::debug!("{} palette of {} around hue {:.3}", scheme, count, base_hue);
    palette_from_hue(scheme, base_hue, count)
}

/// Deterministic palette for a fixed base hue.
///
/// `ColorScheme::Random` has no hue relationship and is rejected here; use
/// [`generate_palette_with`] for it.
pub fn palette_from_hue(scheme: ColorScheme, base_hue: f64, count: usize) -> Result<Vec<Colour>> {
    check_count(count)?;

    let palette = match scheme {
        ColorScheme::Random => {
            return Err(CraftError::invalid(
                "the random scheme is not anchored on a base hue",
            ))
        }
        ColorScheme::Monochromatic => monochromatic(base_hue, count),
        ColorScheme::Analogous => analogous(base_hue, count),
        ColorScheme::Complementary => complementary(base_hue, count),
        ColorScheme::Triadic => triadic(base_hue, count),
        ColorScheme::Tetradic => tetradic(base_hue, count),
    };

    debug_assert_eq!(palette.len(), count);
    Ok(palette)
}

fn check_count(count: usize) -> Result<()> {
    if count < 1 {
        return Err(CraftError::invalid_with_help(
            "palette size must be at least 1",
            "Pass --count 1 or more",
        ));
    }
    Ok(())
}

fn monochromatic(hue: f64, count: usize) -> Vec<Colour> {
    (0..count)
        .map(|i| hsl_to_rgb(hue, SATURATION, ramp(0.1, 0.9, i, count)))
        .collect()
}

fn analogous(base: f64, count: usize) -> Vec<Colour> {
    let centre = (count / 2) as f64;
    (0..count)
        .map(|i| {
            let hue = wrap_hue(base + ANALOGOUS_STEP * (i as f64 - centre));
            hsl_to_rgb(hue, SATURATION, LIGHTNESS)
        })
        .collect()
}

fn complementary(base: f64, count: usize) -> Vec<Colour> {
    let opposite = wrap_hue(base + 0.5);

    if count == 2 {
        return vec![
            hsl_to_rgb(base, SATURATION, LIGHTNESS),
            hsl_to_rgb(opposite, SATURATION, LIGHTNESS),
        ];
    }

    let primary = count.div_ceil(2);
    let secondary = count - primary;

    let mut palette = Vec::with_capacity(count);
    for (hue, size) in [(base, primary), (opposite, secondary)] {
        for i in 0..size {
            palette.push(hsl_to_rgb(hue, SATURATION, ramp(0.3, 0.7, i, size)));
        }
    }
    palette
}

fn triadic(base: f64, count: usize) -> Vec<Colour> {
    let hues = spaced_hues::<3>(base);

    if count <= hues.len() {
        return hues[..count]
            .iter()
            .map(|&h| hsl_to_rgb(h, SATURATION, LIGHTNESS))
            .collect();
    }

    let mut palette = Vec::with_capacity(count);
    for (hue, size) in hues.into_iter().zip(group_sizes::<3>(count)) {
        for i in 0..size {
            palette.push(hsl_to_rgb(hue, ramp(0.4, 0.7, i, size), LIGHTNESS));
        }
    }
    palette
}

fn tetradic(base: f64, count: usize) -> Vec<Colour> {
    let hues = spaced_hues::<4>(base);

    if count <= hues.len() {
        return hues[..count]
            .iter()
            .map(|&h| hsl_to_rgb(h, SATURATION, LIGHTNESS))
            .collect();
    }

    let mut palette = Vec::with_capacity(count);
    for (hue, size) in hues.into_iter().zip(group_sizes::<4>(count)) {
        for i in 0..size {
            palette.push(hsl_to_rgb(hue, SATURATION, ramp(0.4, 0.6, i, size)));
        }
    }
    palette
}

/// `N` hues evenly spaced around the wheel starting at `base`.
fn spaced_hues<const N: usize>(base: f64) -> [f64; N] {
    std::array::from_fn(|k| wrap_hue(base + k as f64 / N as f64))
}

/// Split `count` into `N` groups; the remainder goes one each to the first groups.
///
/// Each group is then ramped over its own size, so every group spans its full
/// saturation (triadic) or lightness (tetradic) range. The web generator gave
/// the remainder to the second and later groups and stepped every group by a
/// shared `count / N - 1`, which divides by zero for `N <= count < 2N`.
fn group_sizes<const N: usize>(count: usize) -> [usize; N] {
    let per_group = count / N;
    let remainder = count % N;
    std::array::from_fn(|k| per_group + usize::from(k < remainder))
}

/// Linear ramp from `start` to `end` over `n` samples; a single sample sits at `start`.
fn ramp(start: f64, end: f64, i: usize, n: usize) -> f64 {
    if n <= 1 {
        return start;
    }
    start + (end - start) * i as f64 / (n - 1) as f64
}

fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(1.0)
}
