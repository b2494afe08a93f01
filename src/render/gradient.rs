//! Gradient rendering and CSS export.

use std::f64::consts::TAU;

use super::surface::{ColourStops, LinearGradient, Paint, Path, Point, RadialGradient, Surface};
use crate::error::Result;
use crate::types::{Colour, GradientConfig, GradientKind};

/// Renders a [`GradientConfig`] onto a surface.
#[derive(Debug, Clone, Copy)]
pub struct GradientRenderer<'a> {
    config: &'a GradientConfig,
}

impl<'a> GradientRenderer<'a> {
    pub fn new(config: &'a GradientConfig) -> Self {
        Self { config }
    }

    /// Clear the surface and paint the gradient over all of it.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        self.config.validate()?;
        super::ensure_drawable(surface)?;

        let width = surface.width() as f64;
        let height = surface.height() as f64;
        log::debug!(
            "rendering {} gradient at {}x{} with {} stops",
            self.config.kind,
            width,
            height,
            self.config.stops.len()
        );

        surface.clear();
        surface.reset_state();

        match self.config.kind {
            GradientKind::Linear => {
                let paint = Paint::Linear(self.linear(width, height));
                surface.fill_rect(0.0, 0.0, width, height, &paint);
            }
            GradientKind::Radial => {
                let paint = Paint::Radial(RadialGradient {
                    centre: Point::new(width / 2.0, height / 2.0),
                    radius: width.max(height) / 2.0,
                    stops: self.stops(),
                });
                surface.fill_rect(0.0, 0.0, width, height, &paint);
            }
            GradientKind::Conic => self.conic(surface, width, height),
        }

        Ok(())
    }

    fn stops(&self) -> ColourStops {
        ColourStops::new(
            self.config
                .stops
                .iter()
                .zip(&self.config.colours)
                .map(|(&stop, &colour)| (stop / 100.0, colour)),
        )
    }

    /// The gradient line runs through the centre along `angle`, reaching a
    /// full width and height either side.
    fn linear(&self, width: f64, height: f64) -> LinearGradient {
        let (sin, cos) = self.config.angle.to_radians().sin_cos();
        LinearGradient {
            start: Point::new(width / 2.0 - cos * width, height / 2.0 - sin * height),
            end: Point::new(width / 2.0 + cos * width, height / 2.0 + sin * height),
            stops: self.stops(),
        }
    }

    /// Approximate a conic gradient with one pie sector per stop pair, each
    /// shaded outward from the centre.
    fn conic<S: Surface + ?Sized>(&self, surface: &mut S, width: f64, height: f64) {
        let mut sorted: Vec<(f64, Colour)> = self
            .config
            .stops
            .iter()
            .copied()
            .zip(self.config.colours.iter().copied())
            .collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let centre = Point::new(width / 2.0, height / 2.0);
        let radius = width.max(height);
        let start = self.config.angle.to_radians();

        for pair in sorted.windows(2) {
            let (from_stop, from_colour) = pair[0];
            let (to_stop, to_colour) = pair[1];
            let a0 = start + from_stop / 100.0 * TAU;
            let a1 = start + to_stop / 100.0 * TAU;

            let mut sector = Path::new();
            sector.move_to(centre.x, centre.y);
            sector.arc(centre.x, centre.y, radius, a0, a1);
            sector.close();

            let mid = (a0 + a1) / 2.0;
            let paint = Paint::Linear(LinearGradient {
                start: centre,
                end: Point::new(centre.x + mid.cos() * radius, centre.y + mid.sin() * radius),
                stops: ColourStops::new([(0.0, from_colour), (1.0, to_colour)]),
            });
            surface.fill_path(&sector, &paint);
        }
    }
}

impl GradientConfig {
    /// The equivalent CSS `background` value.
    pub fn to_css(&self) -> String {
        let stops = self
            .colours
            .iter()
            .zip(&self.stops)
            .map(|(colour, stop)| format!("{} {}%", colour, stop))
            .collect::<Vec<_>>()
            .join(", ");

        match self.kind {
            GradientKind::Linear => format!("linear-gradient({}deg, {})", self.angle, stops),
            GradientKind::Radial => format!("radial-gradient(circle, {})", stops),
            GradientKind::Conic => format!("conic-gradient(from {}deg, {})", self.angle, stops),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CraftError;
    use crate::render::testing::{Op, Recorder};
    use crate::render::Canvas;
    use pretty_assertions::assert_eq;

    const RED: Colour = Colour::rgb(255, 0, 0);
    const BLUE: Colour = Colour::rgb(0, 0, 255);

    fn render(config: &GradientConfig, width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height).unwrap();
        GradientRenderer::new(config).render(&mut canvas).unwrap();
        canvas
    }

    #[test]
    fn test_css_strings() {
        let linear = GradientConfig::new(GradientKind::Linear, vec![RED, BLUE]).with_angle(45.0);
        assert_eq!(linear.to_css(), "linear-gradient(45deg, #ff0000 0%, #0000ff 100%)");

        let radial = GradientConfig::new(GradientKind::Radial, vec![RED, BLUE]);
        assert_eq!(radial.to_css(), "radial-gradient(circle, #ff0000 0%, #0000ff 100%)");

        let conic = GradientConfig::new(GradientKind::Conic, vec![RED, BLUE, RED])
            .with_angle(12.5)
            .with_stops(vec![0.0, 40.0, 100.0]);
        insta::assert_snapshot!(
            conic.to_css(),
            @"conic-gradient(from 12.5deg, #ff0000 0%, #0000ff 40%, #ff0000 100%)"
        );
    }

    #[test]
    fn test_linear_horizontal_endpoints() {
        // 0 degrees runs left to right; the gradient line spans 2x the width
        let config = GradientConfig::new(GradientKind::Linear, vec![RED, BLUE]).with_angle(0.0);
        let canvas = render(&config, 100, 10);

        let left = canvas.pixel(0, 5).unwrap();
        let right = canvas.pixel(99, 5).unwrap();
        assert!(left.r > 150 && left.b < 105, "{:?}", left);
        assert!(right.b > 150 && right.r < 105, "{:?}", right);
        assert_eq!(left.a, 255);

        let mid = canvas.pixel(50, 5).unwrap();
        assert!((mid.r as i16 - mid.b as i16).abs() <= 4, "{:?}", mid);
    }

    #[test]
    fn test_linear_vertical_is_constant_across_rows() {
        let config = GradientConfig::new(GradientKind::Linear, vec![RED, BLUE]);
        let canvas = render(&config, 20, 40);
        assert_eq!(canvas.pixel(0, 10), canvas.pixel(19, 10));
        assert_ne!(canvas.pixel(0, 0), canvas.pixel(0, 39));
    }

    #[test]
    fn test_linear_hard_stops() {
        let config = GradientConfig::new(GradientKind::Linear, vec![RED, BLUE])
            .with_angle(0.0)
            .with_stops(vec![50.0, 50.0]);
        let canvas = render(&config, 40, 4);
        assert_eq!(canvas.pixel(5, 1), Some(RED));
        assert_eq!(canvas.pixel(35, 1), Some(BLUE));
    }

    #[test]
    fn test_radial_centre_and_corner() {
        let config = GradientConfig::new(GradientKind::Radial, vec![Colour::WHITE, Colour::BLACK]);
        let canvas = render(&config, 40, 40);

        let centre = canvas.pixel(20, 20).unwrap();
        assert!(centre.r > 240, "{:?}", centre);
        assert_eq!(canvas.pixel(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_conic_sectors() {
        let config = GradientConfig::new(GradientKind::Conic, vec![RED, BLUE, RED])
            .with_angle(0.0)
            .with_stops(vec![0.0, 50.0, 100.0]);
        let mut surface = Recorder::new(30, 30);
        GradientRenderer::new(&config).render(&mut surface).unwrap();
        assert_eq!(surface.fills().count(), 2);

        let canvas = render(&config, 30, 30);
        assert!(canvas.image().pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_conic_sorts_stops() {
        let config = GradientConfig::new(GradientKind::Conic, vec![BLUE, RED, Colour::WHITE])
            .with_stops(vec![100.0, 0.0, 50.0]);
        let mut surface = Recorder::new(10, 10);
        GradientRenderer::new(&config).render(&mut surface).unwrap();

        let sector_colours: Vec<Colour> = surface
            .fills()
            .map(|(_, paint)| match paint {
                Paint::Linear(g) => g.stops.colour_at(0.0),
                other => panic!("unexpected paint {:?}", other),
            })
            .collect();
        assert_eq!(sector_colours, vec![RED, Colour::WHITE]);
    }

    #[test]
    fn test_clears_before_painting() {
        let config = GradientConfig::new(GradientKind::Linear, vec![RED, BLUE]);
        let mut surface = Recorder::new(5, 5);
        GradientRenderer::new(&config).render(&mut surface).unwrap();
        assert_eq!(surface.ops.first(), Some(&Op::Clear));
    }

    #[test]
    fn test_invalid_gradients() {
        let cases = [
            GradientConfig::new(GradientKind::Linear, vec![RED]),
            GradientConfig::new(GradientKind::Linear, vec![RED, BLUE]).with_stops(vec![0.0]),
            GradientConfig::new(GradientKind::Radial, vec![RED, BLUE]).with_stops(vec![0.0, 120.0]),
            GradientConfig::new(GradientKind::Conic, vec![RED, BLUE]).with_angle(f64::NAN),
        ];
        for case in cases {
            let mut surface = Recorder::new(10, 10);
            let err = GradientRenderer::new(&case).render(&mut surface).unwrap_err();
            assert!(matches!(err, CraftError::InvalidArgument { .. }));
            assert!(surface.ops.is_empty());
        }
    }
}
