//! Seeded splatter rendering.
//!
//! Every splatter is a core ellipse ringed by 3 to 7 satellite blobs, all
//! traced into one path and filled once. Each value is drawn from
//! [`SeededRandom`] at a fixed index, so a config and surface size always
//! paint the same image.

use std::f64::consts::TAU;

use super::canvas::Canvas;
use super::surface::{CompositeMode, Paint, Path, Surface};
use crate::error::Result;
use crate::random::SeededRandom;
use crate::types::{Resolution, SplatterConfig};

/// Renders a [`SplatterConfig`] onto a surface.
#[derive(Debug, Clone, Copy)]
pub struct SplatterRenderer<'a> {
    config: &'a SplatterConfig,
}

impl<'a> SplatterRenderer<'a> {
    pub fn new(config: &'a SplatterConfig) -> Self {
        Self { config }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let config = self.config;
        config.validate()?;
        super::ensure_drawable(surface)?;

        let width = surface.width() as f64;
        let height = surface.height() as f64;
        log::debug!(
            "rendering {} splatters at {}x{} (seed {}, blur {}, blending {})",
            config.count,
            width,
            height,
            config.seed,
            config.blur,
            config.use_blending
        );

        surface.clear();
        surface.reset_state();
        surface.fill_rect(0.0, 0.0, width, height, &Paint::Solid(config.background));

        surface.set_composite(if config.use_blending {
            CompositeMode::Multiply
        } else {
            CompositeMode::SourceOver
        });
        surface.set_blur(config.blur);
        surface.set_alpha(config.opacity);

        let random = SeededRandom::new(config.seed);
        for i in 0..config.count {
            let (path, paint) = self.splatter(&random, i as f64, width, height);
            surface.fill_path(&path, &paint);
        }

        surface.reset_state();
        Ok(())
    }

    /// Render onto a fresh canvas of the given size.
    pub fn render_at(&self, resolution: Resolution) -> Result<Canvas> {
        let mut canvas = Canvas::with_resolution(resolution)?;
        self.render(&mut canvas)?;
        Ok(canvas)
    }

    /// Trace splatter `i` as a single path.
    fn splatter(&self, random: &SeededRandom, i: f64, width: f64, height: f64) -> (Path, Paint) {
        let config = self.config;

        let colour = config.colours[random.pick(i * 0.1, config.colours.len())];
        let size = random.range(i * 0.2, config.min_size, config.max_size);
        let x = random.range(i * 0.3, 0.0, width);
        let y = random.range(i * 0.4, 0.0, height);

        let mut path = Path::new();
        path.ellipse(
            x,
            y,
            size,
            size * (0.5 + random.range(i * 0.5, 0.0, 0.5)),
            random.angle(i * 0.6),
            0.0,
            TAU,
        );

        let satellites = random.range(i * 0.7, 3.0, 8.0).floor() as u32;
        for j in 0..satellites {
            let k = i * j as f64;
            let angle = random.angle(k * 0.01);
            let distance = size * (0.3 + random.range(k * 0.02, 0.0, 0.7));
            let radius = size * (0.2 + random.range(k * 0.03, 0.0, 0.4));

            path.ellipse(
                x + angle.cos() * distance,
                y + angle.sin() * distance,
                radius,
                radius * (0.5 + random.range(k * 0.04, 0.0, 0.5)),
                random.angle(k * 0.05),
                0.0,
                TAU,
            );
        }

        (path, Paint::Solid(colour))
    }
}
