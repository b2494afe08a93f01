//! Abstract pattern rendering.
//!
//! Waves are fully determined by the config. Voronoi sites, geometric shapes
//! and flow particles are placed with a non-seeded generator, so only those
//! modes change between renders of the same config. Pass a seeded `Rng` to
//! [`PatternRenderer::render_with`] to pin them.

use std::f64::consts::TAU;

use rand::Rng;

use super::surface::{Paint, Path, Point, Surface};
use crate::error::Result;
use crate::random::SeededRandom;
use crate::types::{PatternConfig, PatternKind};

/// Alpha used for every layered shape.
const LAYER_ALPHA: f64 = 0.7;

/// Horizontal step between wave samples, in pixels.
const WAVE_STEP: usize = 2;

/// Renders a [`PatternConfig`] onto a surface.
#[derive(Debug, Clone, Copy)]
pub struct PatternRenderer<'a> {
    config: &'a PatternConfig,
}

impl<'a> PatternRenderer<'a> {
    pub fn new(config: &'a PatternConfig) -> Self {
        Self { config }
    }

    /// Render using the thread-local generator for random placement.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        self.render_with(surface, &mut rand::rng())
    }

    /// Render using `rng` for random placement.
    pub fn render_with<S, R>(&self, surface: &mut S, rng: &mut R) -> Result<()>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        self.config.validate()?;
        super::ensure_drawable(surface)?;

        let width = surface.width() as f64;
        let height = surface.height() as f64;
        log::debug!(
            "rendering {} pattern at {}x{} (complexity {}, scale {})",
            self.config.pattern_type,
            width,
            height,
            self.config.complexity,
            self.config.scale
        );

        surface.clear();
        surface.reset_state();
        surface.fill_rect(0.0, 0.0, width, height, &Paint::Solid(self.config.background));

        match self.config.pattern_type {
            PatternKind::Waves => self.waves(surface, width, height),
            PatternKind::Voronoi => self.voronoi(surface, width, height, rng),
            PatternKind::Geometric => self.geometric(surface, width, height, rng),
            PatternKind::Flow => self.flow(surface, width, height, rng),
        }

        surface.reset_state();
        Ok(())
    }

    fn colour(&self, index: usize) -> Paint {
        let colours = &self.config.colours;
        Paint::Solid(colours[index % colours.len()])
    }

    fn waves<S: Surface + ?Sized>(&self, surface: &mut S, width: f64, height: f64) {
        let scale = self.config.scale;
        let seed = self.config.seed as f64;

        surface.set_alpha(LAYER_ALPHA);
        for band in 0..self.config.complexity as usize {
            let n = band as f64;
            let amplitude = height / (4.0 + n);
            let frequency = (n + 1.0) / width * scale;
            let phase = seed * (n + 1.0) * 0.1;

            let mut path = Path::new();
            for (i, x) in (0..surface.width() as usize).step_by(WAVE_STEP).enumerate() {
                let x = x as f64;
                let y = height / 2.0
                    + amplitude * (x * frequency + phase).sin()
                    + (amplitude / 2.0) * (x * frequency * 2.0 + phase * 2.0).sin();
                if i == 0 {
                    path.move_to(x, y);
                } else {
                    path.line_to(x, y);
                }
            }
            path.line_to(width, height);
            path.line_to(0.0, height);
            path.close();

            surface.fill_path(&path, &self.colour(band));
        }
    }

    fn voronoi<S, R>(&self, surface: &mut S, width: f64, height: f64, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let sites: Vec<(Point, Paint)> = (0..self.config.complexity as usize * 5)
            .map(|i| {
                let x = rng.random::<f64>() * width;
                let y = rng.random::<f64>() * height;
                (Point::new(x, y), self.colour(i))
            })
            .collect();
        if sites.is_empty() {
            return;
        }

        let cell = self.config.scale;
        let mut y = 0.0;
        while y < height {
            let mut x = 0.0;
            while x < width {
                if let Some(paint) = nearest_site(&sites, Point::new(x, y)) {
                    surface.fill_rect(x, y, cell, cell, paint);
                }
                x += cell;
            }
            y += cell;
        }
    }

    fn geometric<S, R>(&self, surface: &mut S, width: f64, height: f64, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let scale = self.config.scale;

        surface.set_alpha(LAYER_ALPHA);
        for i in 0..self.config.complexity as usize * 10 {
            let x = rng.random::<f64>() * width;
            let y = rng.random::<f64>() * height;
            let size = rng.random::<f64>() * scale * 3.0 + scale;
            let half = size / 2.0;
            let paint = self.colour(i);

            match Shape::from_roll(rng.random::<f64>()) {
                Shape::Triangle => {
                    let mut path = Path::new();
                    path.move_to(x, y - half);
                    path.line_to(x + half, y + half);
                    path.line_to(x - half, y + half);
                    path.close();
                    surface.fill_path(&path, &paint);
                }
                Shape::Square => surface.fill_rect(x - half, y - half, size, size, &paint),
                Shape::Circle => {
                    let mut path = Path::new();
                    path.arc(x, y, half, 0.0, TAU);
                    surface.fill_path(&path, &paint);
                }
            }
        }
    }

    fn flow<S, R>(&self, surface: &mut S, width: f64, height: f64, rng: &mut R)
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        let noise = SeededRandom::new(self.config.seed);
        let noise_scale = self.config.noise_scale;
        let length = self.config.scale / 2.0;
        let line_width = self.config.scale / 10.0;

        surface.set_alpha(LAYER_ALPHA);
        for i in 0..self.config.complexity as usize * 100 {
            let x = rng.random::<f64>() * width;
            let y = rng.random::<f64>() * height;

            let angle = noise.noise(x * noise_scale, y * noise_scale, noise_scale) * TAU;
            let end = Point::new(x + angle.cos() * length, y + angle.sin() * length);

            surface.stroke_line(Point::new(x, y), end, line_width, &self.colour(i));
        }
    }
}

/// Shapes drawn by the geometric pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Triangle,
    Square,
    Circle,
}

impl Shape {
    /// Pick a shape from a uniform roll in `[0, 1)`.
    fn from_roll(roll: f64) -> Self {
        match (roll * 3.0).floor() as u8 {
            0 => Shape::Triangle,
            1 => Shape::Square,
            _ => Shape::Circle,
        }
    }
}

/// Paint of the site closest to `at`; the first site wins ties.
fn nearest_site(sites: &[(Point, Paint)], at: Point) -> Option<&Paint> {
    let mut best: Option<(f64, &Paint)> = None;
    for (site, paint) in sites {
        let dx = at.x - site.x;
        let dy = at.y - site.y;
        let dist = dx * dx + dy * dy;
        if best.map_or(true, |(d, _)| dist < d) {
            best = Some((dist, paint));
        }
    }
    best.map(|(_, paint)| paint)
}
