//! Drawing surface interface.
//!
//! Renderers describe what to paint with a [`Path`] and a [`Paint`] and hand
//! both to a [`Surface`]. The surface owns compositing state (global alpha,
//! blend mode, blur) the way a 2D canvas context does, so the pattern logic
//! stays portable across raster backends.

use std::f64::consts::TAU;

use palette::{Mix, Srgb};

use crate::types::Colour;

/// Maximum distance, in pixels, between a flattened arc and the true curve.
const FLATTEN_TOLERANCE: f64 = 0.1;

/// A point in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A set of polygonal subpaths, filled with the non-zero winding rule.
///
/// Subpaths are implicitly closed when filled. Curves are flattened as they
/// are added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<Vec<Point>>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new subpath at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(vec![Point::new(x, y)]);
    }

    /// Extend the current subpath. Starts one if there is none.
    pub fn line_to(&mut self, x: f64, y: f64) {
        match self.subpaths.last_mut() {
            Some(current) => current.push(Point::new(x, y)),
            None => self.move_to(x, y),
        }
    }

    /// Close the current subpath; the next segment starts from its first point.
    pub fn close(&mut self) {
        if let Some(start) = self.subpaths.last().and_then(|s| s.first().copied()) {
            self.subpaths.push(vec![start]);
        }
    }

    /// Add an axis-aligned rectangle as its own closed subpath.
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.subpaths.push(vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ]);
        self.move_to(x, y);
    }

    /// Add a clockwise circular arc. See [`Path::ellipse`].
    pub fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.ellipse(cx, cy, radius, radius, 0.0, start, end);
    }

    /// Add a clockwise elliptical arc from angle `start` to `end`.
    ///
    /// When the path already has a current point, a straight segment joins it
    /// to the start of the arc, exactly like a canvas `ellipse()` call without
    /// an intervening `moveTo`. A sweep of a full turn or more draws the whole
    /// ellipse.
    #[allow(clippy::too_many_arguments)]
    pub fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        rotation: f64,
        start: f64,
        end: f64,
    ) {
        let sweep = if end - start >= TAU {
            TAU
        } else {
            (end - start).rem_euclid(TAU)
        };

        let (sin_r, cos_r) = rotation.sin_cos();
        let at = |theta: f64| {
            let (sin_t, cos_t) = theta.sin_cos();
            let ex = rx * cos_t;
            let ey = ry * sin_t;
            Point::new(cx + ex * cos_r - ey * sin_r, cy + ex * sin_r + ey * cos_r)
        };

        let first = at(start);
        self.line_to(first.x, first.y);

        let steps = arc_segments(rx.abs().max(ry.abs()), sweep);
        for k in 1..=steps {
            let p = at(start + sweep * k as f64 / steps as f64);
            self.line_to(p.x, p.y);
        }
    }

    /// Subpaths with at least one point.
    pub fn subpaths(&self) -> impl Iterator<Item = &[Point]> {
        self.subpaths.iter().map(|s| s.as_slice())
    }

    /// True when no subpath could enclose any area.
    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.len() < 3)
    }

    /// Bounding box as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut points = self.subpaths.iter().flatten();
        let first = *points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

/// Number of straight segments needed to flatten an arc of `radius` over `sweep`.
fn arc_segments(radius: f64, sweep: f64) -> usize {
    if sweep <= 0.0 {
        return 1;
    }
    if radius <= FLATTEN_TOLERANCE {
        return 4;
    }
    let step = 2.0 * (1.0 - FLATTEN_TOLERANCE / radius).acos();
    ((sweep / step).ceil() as usize).clamp(4, 1024)
}

/// Colour stops along a gradient, sorted by offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourStops {
    stops: Vec<(f64, Colour)>,
}

impl ColourStops {
    /// Build from `(offset, colour)` pairs; offsets are clamped to `[0, 1]`.
    /// Stops with equal offsets keep their insertion order.
    pub fn new(stops: impl IntoIterator<Item = (f64, Colour)>) -> Self {
        let mut stops: Vec<(f64, Colour)> = stops
            .into_iter()
            .map(|(offset, colour)| (offset.clamp(0.0, 1.0), colour))
            .collect();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Colour at position `t` along the gradient. Outside the first and last
    /// stops the end colours extend.
    pub fn colour_at(&self, t: f64) -> Colour {
        let (Some(&(first_offset, first)), Some(&(_, last))) = (self.stops.first(), self.stops.last())
        else {
            return Colour::TRANSPARENT;
        };

        if t <= first_offset {
            return first;
        }

        for pair in self.stops.windows(2) {
            let (o0, c0) = pair[0];
            let (o1, c1) = pair[1];
            if t < o1 {
                if o1 <= o0 {
                    return c1;
                }
                return mix(c0, c1, (t - o0) / (o1 - o0));
            }
        }

        last
    }
}

/// Interpolate two colours component-wise in sRGB.
fn mix(a: Colour, b: Colour, factor: f64) -> Colour {
    let from: Srgb<f32> = Srgb::new(a.r, a.g, a.b).into_format();
    let to: Srgb<f32> = Srgb::new(b.r, b.g, b.b).into_format();
    let mixed: Srgb<u8> = from.mix(to, factor as f32).into_format();

    let alpha = a.a as f64 + (b.a as f64 - a.a as f64) * factor;
    Colour::new(mixed.red, mixed.green, mixed.blue, alpha.round() as u8)
}

/// A linear gradient between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: ColourStops,
}

/// A radial gradient growing from `centre` out to `radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub centre: Point,
    pub radius: f64,
    pub stops: ColourStops,
}

/// What a fill paints with.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Colour),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// Colour at a point in surface coordinates.
    pub fn colour_at(&self, x: f64, y: f64) -> Colour {
        match self {
            Paint::Solid(colour) => *colour,
            Paint::Linear(g) => {
                let dx = g.end.x - g.start.x;
                let dy = g.end.y - g.start.y;
                let len2 = dx * dx + dy * dy;
                let t = if len2 > 0.0 {
                    ((x - g.start.x) * dx + (y - g.start.y) * dy) / len2
                } else {
                    0.0
                };
                g.stops.colour_at(t)
            }
            Paint::Radial(g) => {
                let t = if g.radius > 0.0 {
                    (x - g.centre.x).hypot(y - g.centre.y) / g.radius
                } else {
                    0.0
                };
                g.stops.colour_at(t)
            }
        }
    }
}

impl From<Colour> for Paint {
    fn from(colour: Colour) -> Self {
        Paint::Solid(colour)
    }
}

/// How a fill combines with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Paint over the destination.
    #[default]
    SourceOver,
    /// Multiply source and destination colours, then paint over.
    Multiply,
}

/// A 2D raster target.
///
/// State set through `set_*` applies to every subsequent fill until changed.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Reset every pixel to transparent.
    fn clear(&mut self);

    /// Global alpha multiplied into every fill, `0.0..=1.0`.
    fn set_alpha(&mut self, alpha: f64);

    fn set_composite(&mut self, mode: CompositeMode);

    /// Gaussian blur standard deviation applied to each fill; 0 disables.
    fn set_blur(&mut self, radius: f64);

    /// Fill a path with the non-zero winding rule.
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: &Paint) {
        let mut path = Path::new();
        path.rect(x, y, width, height);
        self.fill_path(&path, paint);
    }

    /// Stroke a straight segment with butt caps.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, paint: &Paint) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let len = dx.hypot(dy);
        if len == 0.0 || width <= 0.0 {
            return;
        }

        let nx = -dy / len * width / 2.0;
        let ny = dx / len * width / 2.0;

        let mut path = Path::new();
        path.move_to(from.x + nx, from.y + ny);
        path.line_to(to.x + nx, to.y + ny);
        path.line_to(to.x - nx, to.y - ny);
        path.line_to(from.x - nx, from.y - ny);
        self.fill_path(&path, paint);
    }

    /// Back to alpha 1, source-over, no blur.
    fn reset_state(&mut self) {
        self.set_alpha(1.0);
        self.set_composite(CompositeMode::SourceOver);
        self.set_blur(0.0);
    }
}
