//! In-memory raster surface.
//!
//! Fills are rasterised into a floating-point coverage mask with the
//! non-zero winding rule, optionally blurred, then composited onto an
//! `RgbaImage` with straight (non-premultiplied) alpha.

use image::{Rgba, RgbaImage};

use super::blur;
use super::surface::{CompositeMode, Paint, Path, Point, Surface};
use crate::error::{CraftError, Result};
use crate::types::{Colour, Resolution};

/// Vertical sub-samples per pixel row.
const SUBSAMPLES: usize = 4;

/// A raster surface backed by an RGBA image.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    alpha: f64,
    composite: CompositeMode,
    blur: f64,
}

impl Canvas {
    /// Create a transparent canvas. Zero-sized canvases are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CraftError::Render {
                message: format!("cannot draw on a {}x{} surface", width, height),
                help: Some("Width and height must both be at least 1".to_string()),
            });
        }
        if width > Resolution::MAX.width || height > Resolution::MAX.height {
            return Err(CraftError::Render {
                message: format!("cannot draw on a {}x{} surface", width, height),
                help: Some(format!("Width and height are capped at {}", Resolution::MAX)),
            });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
            alpha: 1.0,
            composite: CompositeMode::SourceOver,
            blur: 0.0,
        })
    }

    pub fn with_resolution(resolution: Resolution) -> Result<Self> {
        Self::new(resolution.width, resolution.height)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Colour::new(p[0], p[1], p[2], p[3]))
    }

    fn composite_mask(&mut self, mask: &Mask, paint: &Paint) {
        let (width, height) = self.image.dimensions();

        for row in 0..mask.height {
            let y = mask.y0 + row as i64;
            if y < 0 || y >= height as i64 {
                continue;
            }
            for col in 0..mask.width {
                let x = mask.x0 + col as i64;
                if x < 0 || x >= width as i64 {
                    continue;
                }
                let coverage = mask.data[row * mask.width + col].min(1.0) as f64;
                if coverage <= 0.0 {
                    continue;
                }

                let src = paint.colour_at(x as f64 + 0.5, y as f64 + 0.5);
                let src_alpha = src.a as f64 / 255.0 * self.alpha * coverage;
                if src_alpha <= 0.0 {
                    continue;
                }

                let dst = self.image.get_pixel_mut(x as u32, y as u32);
                *dst = blend(*dst, src, src_alpha, self.composite);
            }
        }
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.composite = mode;
    }

    fn set_blur(&mut self, radius: f64) {
        self.blur = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if self.alpha <= 0.0 || path.is_empty() {
            return;
        }

        let pad = blur::kernel_radius(self.blur);
        let Some(mut mask) = Mask::rasterize(path, self.width(), self.height(), pad) else {
            return;
        };
        if pad > 0 {
            blur::blur_mask(&mut mask.data, mask.width, mask.height, self.blur);
        }
        self.composite_mask(&mask, paint);
    }
}

/// Combine one source colour with a destination pixel.
fn blend(dst: Rgba<u8>, src: Colour, src_alpha: f64, mode: CompositeMode) -> Rgba<u8> {
    let dst_alpha = dst[3] as f64 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| {
        let cs = s as f64 / 255.0;
        let cd = d as f64 / 255.0;
        let cs = match mode {
            CompositeMode::SourceOver => cs,
            CompositeMode::Multiply => (1.0 - dst_alpha) * cs + dst_alpha * cs * cd,
        };
        let out = (cs * src_alpha + cd * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        to_byte(out)
    };

    Rgba([
        channel(src.r, dst[0]),
        channel(src.g, dst[1]),
        channel(src.b, dst[2]),
        to_byte(out_alpha),
    ])
}

fn to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Per-pixel coverage over a rectangular window of the surface.
#[derive(Debug)]
struct Mask {
    x0: i64,
    y0: i64,
    width: usize,
    height: usize,
    data: Vec<f32>,
}

/// A non-horizontal polygon edge, stored top to bottom.
#[derive(Debug, Clone, Copy)]
struct Edge {
    x_top: f64,
    y_top: f64,
    y_bottom: f64,
    dx_dy: f64,
    winding: i32,
}

impl Edge {
    fn new(a: Point, b: Point) -> Option<Self> {
        if a.y == b.y || !a.y.is_finite() || !b.y.is_finite() || !a.x.is_finite() || !b.x.is_finite() {
            return None;
        }
        let (top, bottom, winding) = if a.y < b.y { (a, b, 1) } else { (b, a, -1) };
        Some(Self {
            x_top: top.x,
            y_top: top.y,
            y_bottom: bottom.y,
            dx_dy: (bottom.x - top.x) / (bottom.y - top.y),
            winding,
        })
    }

    fn x_at(&self, y: f64) -> f64 {
        self.x_top + (y - self.y_top) * self.dx_dy
    }
}

impl Mask {
    /// Rasterise `path` over the canvas extended by `pad` pixels on each side.
    fn rasterize(path: &Path, width: u32, height: u32, pad: usize) -> Option<Self> {
        let (lo, hi) = path.bounds()?;
        if !(lo.x.is_finite() && lo.y.is_finite() && hi.x.is_finite() && hi.y.is_finite()) {
            return None;
        }

        let pad = pad as i64;
        let x0 = (lo.x.floor() as i64 - pad).max(-pad);
        let y0 = (lo.y.floor() as i64 - pad).max(-pad);
        let x1 = (hi.x.ceil() as i64 + pad).min(width as i64 + pad);
        let y1 = (hi.y.ceil() as i64 + pad).min(height as i64 + pad);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        let mask_width = (x1 - x0) as usize;
        let mask_height = (y1 - y0) as usize;

        let mut edges: Vec<Edge> = Vec::new();
        for subpath in path.subpaths() {
            if subpath.len() < 2 {
                continue;
            }
            for (i, &a) in subpath.iter().enumerate() {
                let b = subpath[(i + 1) % subpath.len()];
                edges.extend(Edge::new(a, b));
            }
        }
        if edges.is_empty() {
            return None;
        }
        edges.sort_by(|a, b| a.y_top.total_cmp(&b.y_top));

        let mut data = vec![0.0f32; mask_width * mask_height];
        let mut active: Vec<Edge> = Vec::new();
        let mut next = 0;
        let mut crossings: Vec<(f64, i32)> = Vec::new();
        let weight = 1.0 / SUBSAMPLES as f64;

        for row in 0..mask_height {
            let line = &mut data[row * mask_width..(row + 1) * mask_width];
            for s in 0..SUBSAMPLES {
                let sample_y = (y0 + row as i64) as f64 + (s as f64 + 0.5) * weight;

                while next < edges.len() && edges[next].y_top <= sample_y {
                    active.push(edges[next]);
                    next += 1;
                }
                active.retain(|e| e.y_bottom > sample_y);

                crossings.clear();
                crossings.extend(
                    active
                        .iter()
                        .filter(|e| e.y_top <= sample_y)
                        .map(|e| (e.x_at(sample_y), e.winding)),
                );
                crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

                let mut winding = 0;
                let mut span_start = 0.0;
                for &(x, dir) in &crossings {
                    let before = winding;
                    winding += dir;
                    if before == 0 && winding != 0 {
                        span_start = x;
                    } else if before != 0 && winding == 0 {
                        add_span(line, span_start - x0 as f64, x - x0 as f64, weight);
                    }
                }
            }
        }

        Some(Self {
            x0,
            y0,
            width: mask_width,
            height: mask_height,
            data,
        })
    }
}

/// Add `weight` times the exact horizontal coverage of `[from, to)` to `line`.
fn add_span(line: &mut [f32], from: f64, to: f64, weight: f64) {
    let from = from.max(0.0);
    let to = to.min(line.len() as f64);
    if to <= from {
        return;
    }

    let first = from.floor() as usize;
    let last = (to.ceil() as usize).min(line.len());
    for (i, cell) in line.iter_mut().enumerate().take(last).skip(first) {
        let left = (i as f64).max(from);
        let right = ((i + 1) as f64).min(to);
        if right > left {
            *cell += ((right - left) * weight) as f32;
        }
    }
}
