//! PNG output for rendered canvases.

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::error::{CraftError, Result};

use super::Canvas;

/// Write a canvas to a PNG file, creating parent directories as needed.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CraftError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    canvas.image().save_with_format(path, ImageFormat::Png).map_err(|e| CraftError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    log::debug!(
        "wrote {}x{} PNG to {}",
        canvas.image().width(),
        canvas.image().height(),
        path.display()
    );
    Ok(())
}

/// Encode a canvas as PNG bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    canvas
        .image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| CraftError::Render {
            message: format!("Failed to encode PNG: {}", e),
            help: None,
        })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Paint, Surface};
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_write_png_simple() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.fill_rect(0.0, 0.0, 1.0, 1.0, &Paint::Solid(Colour::BLACK));
        canvas.fill_rect(1.0, 0.0, 1.0, 1.0, &Paint::Solid(Colour::WHITE));

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&canvas, &path).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]); // Black
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]); // White
        assert_eq!(img.get_pixel(0, 1).0, [0, 0, 0, 0]); // Untouched
    }

    #[test]
    fn test_write_png_creates_directories() {
        let canvas = Canvas::new(3, 1).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out").join("empty.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (3, 1));
    }

    #[test]
    fn test_write_png_with_transparency() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.set_alpha(0.5);
        canvas.fill_rect(1.0, 0.0, 1.0, 1.0, &Paint::Solid(Colour::rgb(255, 0, 0)));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]); // Transparent
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]); // Semi-transparent red
    }

    #[test]
    fn test_encode_png_signature() {
        let canvas = Canvas::new(4, 4).unwrap();
        let bytes = encode_png(&canvas).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
