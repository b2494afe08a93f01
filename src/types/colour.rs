//! Colour type, hex parsing and the contrast/random helpers.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CraftError, Result};

use super::hsl::Hsl;

/// An RGBA colour value.
///
/// Colours parsed from hex are always opaque; the alpha channel only matters
/// for raster surfaces that start out transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a `#RRGGBB` hex colour string.
    ///
    /// The leading `#` is optional and digits are case-insensitive. Anything
    /// other than exactly six hex digits is rejected, including surrounding
    /// whitespace.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);

        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CraftError::InvalidFormat {
                input: s.to_string(),
            });
        }

        let r = parse_hex_byte(&hex[0..2], s)?;
        let g = parse_hex_byte(&hex[2..4], s)?;
        let b = parse_hex_byte(&hex[4..6], s)?;
        Ok(Self::rgb(r, g, b))
    }

    /// Parse a hex colour, falling back to black on malformed input.
    ///
    /// This is the degraded-input policy inherited from the browser tool:
    /// bad colour strings never fail a render, they paint black. Callers that
    /// need to reject bad input should use [`Colour::from_hex`].
    pub fn from_hex_lossy(s: &str) -> Self {
        match Self::from_hex(s) {
            Ok(colour) => colour,
            Err(_) => {
                log::debug!("malformed colour {:?} normalised to black", s);
                Self::BLACK
            }
        }
    }

    /// Lowercase `#rrggbb` form. Alpha is not encoded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Convert to HSL.
    pub fn to_hsl(self) -> Hsl {
        Hsl::from_rgb(self.r, self.g, self.b)
    }

    /// Perceived brightness, `(299r + 587g + 114b) / 1000`.
    pub fn brightness(self) -> f64 {
        self.weighted_sum() as f64 / 1000.0
    }

    /// Black or white, whichever reads better on top of this colour.
    pub fn contrast(self) -> Self {
        // Y > 128 compared in integer space; identical to the float comparison
        // because 128 * 1000 is exact.
        if self.weighted_sum() > 128_000 {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// A uniformly random opaque colour from the thread-local generator.
    pub fn random() -> Self {
        random_colour(&mut rand::rng())
    }

    fn weighted_sum(self) -> u32 {
        self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114
    }
}

impl FromStr for Colour {
    type Err = CraftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_hex_lossy(&s))
    }
}

/// Parse a hex colour string into RGB, black if malformed.
pub fn hex_to_rgb(hex: &str) -> Colour {
    Colour::from_hex_lossy(hex)
}

/// Encode channels as `#rrggbb`, clamping each to 0..=255 first.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    let clamp = |v: i32| v.clamp(0, 255) as u8;
    Colour::rgb(clamp(r), clamp(g), clamp(b)).to_hex()
}

/// Black (`#000000`) or white (`#ffffff`) text colour for a hex background.
pub fn contrast_colour(hex: &str) -> Colour {
    hex_to_rgb(hex).contrast()
}

/// A uniformly random 24-bit colour drawn from `rng`.
pub fn random_colour<R: Rng + ?Sized>(rng: &mut R) -> Colour {
    let value: u32 = rng.random_range(0..0xFF_FFFF);
    Colour::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str, input: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| CraftError::InvalidFormat {
        input: input.to_string(),
    })
}
