//! Opaque raster buffers and the raster provider boundary
//!
//! The document model only ever asks a raster for its pixel size, for a
//! sub-image, or for a resampled copy. Decoding and encoding live here so the
//! rest of the crate never touches image formats.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::MosaicError;
use crate::geometry::Rect;

/// Immutable RGBA pixel buffer with a known width and height
#[derive(Clone, PartialEq)]
pub struct Raster {
    pixels: RgbaImage,
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Raster {
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Raster of the given size filled with one colour
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(rgba)),
        }
    }

    /// Fully transparent raster of the given size
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// RGBA value at a pixel (panics outside the raster, like indexing)
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels.get_pixel(x, y).0
    }

    /// Copy out a sub-image. `rect` must already be clamped to the raster.
    pub fn sub_raster(&self, rect: Rect) -> Raster {
        debug_assert!(rect.x >= 0 && rect.y >= 0 && !rect.is_empty());
        debug_assert!(rect.right() as u32 <= self.width() && rect.bottom() as u32 <= self.height());
        let view = imageops::crop_imm(
            &self.pixels,
            rect.x as u32,
            rect.y as u32,
            rect.width as u32,
            rect.height as u32,
        );
        Raster {
            pixels: view.to_image(),
        }
    }

    /// The raster resampled to `width`×`height`, borrowing when no resize is needed
    pub fn resampled(&self, width: u32, height: u32) -> Cow<'_, Raster> {
        if width == self.width() && height == self.height() {
            return Cow::Borrowed(self);
        }
        Cow::Owned(Raster {
            pixels: imageops::resize(&self.pixels, width, height, FilterType::Triangle),
        })
    }

    /// Alpha-composite `top` over this raster with its top-left at (`x`, `y`)
    pub fn paint(&mut self, top: &Raster, x: i64, y: i64) {
        imageops::overlay(&mut self.pixels, &top.pixels, x, y);
    }

    /// Write the raster as PNG. A `.png` extension is appended when missing.
    pub fn save_png(&self, path: &Path) -> Result<PathBuf, MosaicError> {
        let path = with_png_extension(path);
        self.pixels
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| MosaicError::Encode(format!("{}: {}", path.display(), e)))?;
        tracing::info!(
            "Saved {}x{} raster to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(path)
    }
}

/// Decode an image file into a raster
pub fn load_raster(path: &Path) -> Result<Raster, MosaicError> {
    let img = image::open(path)
        .map_err(|e| MosaicError::Decode(format!("{}: {}", path.display(), e)))?;
    let raster = Raster::from_rgba(img.to_rgba8());
    if raster.width() == 0 || raster.height() == 0 {
        return Err(MosaicError::Decode(format!(
            "{}: image has no pixels",
            path.display()
        )));
    }
    tracing::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        raster.width(),
        raster.height()
    );
    Ok(raster)
}

/// Decode an in-memory image (e.g. a dropped or pasted buffer) into a raster
pub fn decode_raster(bytes: &[u8]) -> Result<Raster, MosaicError> {
    let img = image::load_from_memory(bytes).map_err(|e| MosaicError::Decode(e.to_string()))?;
    let raster = Raster::from_rgba(img.to_rgba8());
    if raster.width() == 0 || raster.height() == 0 {
        return Err(MosaicError::Decode("image has no pixels".to_string()));
    }
    Ok(raster)
}

/// Whether a path looks like an image the raster provider can decode
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            matches!(
                e.to_lowercase().as_str(),
                "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "ico"
            )
        })
        .unwrap_or(false)
}

fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);
    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_raster_copies_pixels() {
        let mut raster = Raster::filled(4, 4, [0, 0, 0, 255]);
        raster.paint(&Raster::filled(2, 2, [255, 0, 0, 255]), 2, 2);
        let sub = raster.sub_raster(Rect::new(2, 2, 2, 2));
        assert_eq!(sub.width(), 2);
        assert_eq!(sub.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(sub.pixel(1, 1), [255, 0, 0, 255]);
    }

    #[test]
    fn test_resampled_borrows_when_size_matches() {
        let raster = Raster::filled(8, 4, [1, 2, 3, 255]);
        assert!(matches!(raster.resampled(8, 4), Cow::Borrowed(_)));
        let scaled = raster.resampled(4, 2);
        assert_eq!((scaled.width(), scaled.height()), (4, 2));
    }

    #[test]
    fn test_png_extension_is_appended() {
        assert_eq!(
            with_png_extension(Path::new("out/mosaic")),
            PathBuf::from("out/mosaic.png")
        );
        assert_eq!(
            with_png_extension(Path::new("out/mosaic.PNG")),
            PathBuf::from("out/mosaic.PNG")
        );
        assert_eq!(
            with_png_extension(Path::new("out/mosaic.jpg")),
            PathBuf::from("out/mosaic.jpg.png")
        );
    }

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("a.JPEG")));
        assert!(!is_image_file(Path::new("a.txt")));
        assert!(!is_image_file(Path::new("noext")));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_raster(b"not an image"),
            Err(MosaicError::Decode(_))
        ));
    }
}
