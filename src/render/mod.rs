//! Rendering module for colorcraft.
//!
//! Renderers paint configs onto any [`Surface`]; [`Canvas`] is the in-memory
//! raster implementation and `png` writes it to disk.

mod blur;
mod canvas;
mod gradient;
mod pattern;
mod png;
mod splatter;
mod surface;

pub use canvas::Canvas;
pub use gradient::GradientRenderer;
pub use pattern::PatternRenderer;
pub use png::{encode_png, write_png};
pub use splatter::SplatterRenderer;
pub use surface::{
    ColourStops, CompositeMode, LinearGradient, Paint, Path, Point, RadialGradient, Surface,
};

use crate::error::{CraftError, Result};

/// Reject surfaces with no pixels before any drawing starts.
fn ensure_drawable<S: Surface + ?Sized>(surface: &S) -> Result<()> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(CraftError::Render {
            message: format!(
                "surface is {}x{}, nothing can be drawn",
                surface.width(),
                surface.height()
            ),
            help: Some("Width and height must both be at least 1".to_string()),
        });
    }
    Ok(())
}
