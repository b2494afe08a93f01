//! Seeded pseudo-random values for reproducible renders.
//!
//! Nothing here has hidden state: every value is a pure function of
//! `(seed, index)`. The hash is a cheap `sin`-based one, kept bit-for-bit so
//! a seed paints the same picture everywhere. It is not statistically strong.

use std::f64::consts::TAU;

use rand::Rng;

/// Largest seed the browser tool hands out.
pub const SEED_LIMIT: u32 = 10_000;

/// A value in `[min, max)` derived from `seed` and `index`.
///
/// `x = sin(seed * index) * 10000`, keep the fractional part, scale to range.
pub fn seeded_random(seed: f64, index: f64, min: f64, max: f64) -> f64 {
    let x = (seed * index).sin() * 10_000.0;
    let frac = x - x.floor();
    min + frac * (max - min)
}

/// Low-frequency noise driving flow-field directions.
pub fn noise_2d(x: f64, y: f64, noise_scale: f64, seed: f64) -> f64 {
    (x * noise_scale * seed).sin() * (y * noise_scale * seed).cos()
}

/// A fresh seed from the non-seeded generator, in `0..SEED_LIMIT`.
pub fn random_seed() -> u32 {
    rand::rng().random_range(0..SEED_LIMIT)
}

/// Seed-bound view over [`seeded_random`] and [`noise_2d`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeededRandom {
    seed: f64,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { seed: seed as f64 }
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Value in `[min, max)` for `index`.
    pub fn range(&self, index: f64, min: f64, max: f64) -> f64 {
        seeded_random(self.seed, index, min, max)
    }

    /// Angle in `[0, 2π)` for `index`.
    pub fn angle(&self, index: f64) -> f64 {
        self.range(index, 0.0, TAU)
    }

    /// Index into a list of `len` items.
    pub fn pick(&self, index: f64, len: usize) -> usize {
        let i = self.range(index, 0.0, len as f64).floor() as usize;
        i.min(len.saturating_sub(1))
    }

    /// Noise at a point with the given field frequency.
    pub fn noise(&self, x: f64, y: f64, noise_scale: f64) -> f64 {
        noise_2d(x, y, noise_scale, self.seed)
    }
}
