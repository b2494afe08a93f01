//! HSL colour space conversions.
//!
//! All three components are fractions in `[0, 1)`; hue is a fraction of a
//! full turn rather than degrees. The formulas are the standard hue2rgb
//! formulation and are kept exact so palettes match across implementations.

use super::Colour;

/// A colour in HSL space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Convert 8-bit RGB channels to HSL.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Achromatic
        if max == min {
            return Self::new(0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h / 6.0, s, l)
    }

    /// Convert back to an opaque RGB colour.
    pub fn to_colour(self) -> Colour {
        let Self { h, s, l } = self;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Colour::rgb(to_byte(r), to_byte(g), to_byte(b))
    }
}

/// Convert RGB channels to HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    Hsl::from_rgb(r, g, b)
}

/// Convert HSL components to an opaque RGB colour.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Colour {
    Hsl::new(h, s, l).to_colour()
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Scale a unit channel to a byte, rounding halves up.
fn to_byte(v: f64) -> u8 {
    (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{IntoColor, Srgb};

    fn close(a: u8, b: u8) -> bool {
        (a as i16 - b as i16).abs() <= 1
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour::rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), Colour::rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), Colour::rgb(0, 0, 255));

        let red = rgb_to_hsl(255, 0, 0);
        assert_eq!(red, Hsl::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn test_achromatic() {
        let grey = rgb_to_hsl(128, 128, 128);
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert!((grey.l - 128.0 / 255.0).abs() < 1e-12);

        assert_eq!(hsl_to_rgb(0.7, 0.0, 0.5), Colour::rgb(128, 128, 128));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Colour::BLACK);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Colour::WHITE);
    }

    #[test]
    fn test_round_trip_within_one() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let hsl = rgb_to_hsl(r, g, b);
                    let back = hsl.to_colour();
                    assert!(
                        close(back.r, r) && close(back.g, g) && close(back.b, b),
                        "({}, {}, {}) -> {:?} -> {:?}",
                        r,
                        g,
                        b,
                        hsl,
                        back
                    );
                }
            }
        }
    }

    #[test]
    fn test_components_in_unit_range() {
        for (r, g, b) in [(12, 200, 99), (255, 254, 0), (1, 0, 2), (90, 30, 200)] {
            let hsl = rgb_to_hsl(r, g, b);
            assert!((0.0..1.0).contains(&hsl.h), "{:?}", hsl);
            assert!((0.0..=1.0).contains(&hsl.s), "{:?}", hsl);
            assert!((0.0..=1.0).contains(&hsl.l), "{:?}", hsl);
        }
    }

    #[test]
    fn test_agrees_with_palette_crate() {
        for (r, g, b) in [(200, 40, 90), (10, 220, 130), (60, 60, 250), (255, 200, 0)] {
            let ours = rgb_to_hsl(r, g, b);
            let theirs: palette::Hsl = Srgb::new(r, g, b).into_format::<f32>().into_color();

            let hue = theirs.hue.into_positive_degrees() as f64 / 360.0;
            assert!((ours.h - hue).abs() < 1e-3, "hue {} vs {}", ours.h, hue);
            assert!((ours.s - theirs.saturation as f64).abs() < 1e-3);
            assert!((ours.l - theirs.lightness as f64).abs() < 1e-3);
        }
    }
}
