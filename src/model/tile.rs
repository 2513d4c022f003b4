//! Tile - one raster placed on the canvas
//!
//! `bounds` is the single source of truth for where a tile lives in document
//! space. View-space bounds are never stored; they are projected from
//! `bounds` on demand.

use std::borrow::Cow;

use crate::error::{DegenerateGeometry, EditOutcome};
use crate::geometry::{scale_round, Rect};
use crate::raster::Raster;

/// Unique identifier for a tile on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

/// An image and its document-space bounds
#[derive(Debug, Clone)]
pub struct Tile {
    pub id: TileId,
    raster: Raster,
    bounds: Rect,
}

impl Tile {
    /// Create a tile whose document size equals the raster's pixel size
    pub fn new(id: TileId, raster: Raster, x: i32, y: i32) -> Self {
        let bounds = Rect::new(x, y, raster.width() as i32, raster.height() as i32);
        Self { id, raster, bounds }
    }

    /// Create a tile with explicit document bounds (used for split children)
    pub(crate) fn with_bounds(id: TileId, raster: Raster, bounds: Rect) -> Self {
        debug_assert!(!bounds.is_empty(), "tile bounds must be positive");
        Self { id, raster, bounds }
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Document-space bounds
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// View-space bounds at the given scale
    pub fn view_bounds(&self, scale: f64) -> Rect {
        self.bounds.scaled(scale)
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        debug_assert!(!bounds.is_empty(), "tile bounds must be positive");
        self.bounds = bounds;
    }

    pub(crate) fn set_origin(&mut self, x: i32, y: i32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    /// Width over height of the raster as of the most recent crop
    pub fn aspect_ratio(&self) -> f64 {
        self.raster.width() as f64 / self.raster.height() as f64
    }

    /// Document units per raster pixel, horizontally and vertically
    pub fn document_per_pixel(&self) -> (f64, f64) {
        (
            self.bounds.width as f64 / self.raster.width() as f64,
            self.bounds.height as f64 / self.raster.height() as f64,
        )
    }

    /// Crop to a rectangle given in raster-pixel coordinates.
    ///
    /// The rectangle is clamped to the raster. The document bounds shrink and
    /// shift so the kept region stays exactly where it was on the canvas.
    pub fn crop(&mut self, rect: Rect) -> EditOutcome {
        let Some(clamped) = clamp_to_raster(rect, self.raster.width(), self.raster.height()) else {
            tracing::debug!("Tile {} crop ignored: degenerate rect {:?}", self.id.0, rect);
            return EditOutcome::Unchanged(DegenerateGeometry::EmptyRect);
        };

        let (ratio_x, ratio_y) = self.document_per_pixel();
        let (x, width) = crop_span(clamped.x, clamped.width, ratio_x, self.bounds.width);
        let (y, height) = crop_span(clamped.y, clamped.height, ratio_y, self.bounds.height);
        let bounds = Rect::new(self.bounds.x + x, self.bounds.y + y, width, height);

        self.raster = self.raster.sub_raster(clamped);
        self.bounds = bounds;
        tracing::debug!(
            "Tile {} cropped to raster {:?}, bounds now {:?}",
            self.id.0,
            clamped,
            bounds
        );
        EditOutcome::Applied(())
    }

    /// Set the document width, deriving the height from the raster aspect ratio
    pub fn resize_to(&mut self, width: i32) {
        let width = width.max(1);
        let height = ((width as f64 / self.aspect_ratio()).round() as i32).max(1);
        self.bounds.width = width;
        self.bounds.height = height;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.bounds.x += dx;
        self.bounds.y += dy;
    }

    /// Multiply the document size by `factor`, keeping the origin
    pub fn apply_uniform_scale(&mut self, factor: f64) {
        self.bounds.width = scale_round(self.bounds.width, factor).max(1);
        self.bounds.height = scale_round(self.bounds.height, factor).max(1);
    }

    /// The raster at its document-space resolution, as painted by flatten
    pub fn rendered(&self) -> Cow<'_, Raster> {
        self.raster
            .resampled(self.bounds.width as u32, self.bounds.height as u32)
    }
}

/// Clamp a raster-space rectangle so it lies inside a `width`×`height` raster
/// with at least one pixel on each axis. Returns `None` for zero-area input.
fn clamp_to_raster(rect: Rect, width: u32, height: u32) -> Option<Rect> {
    let (mut x, mut y, mut w, mut h) = (rect.x, rect.y, rect.width, rect.height);
    if w <= 0 || h <= 0 {
        return None;
    }
    // A rectangle hanging off the top/left edge loses the overhang.
    if x < 0 {
        w += x;
        x = 0;
    }
    if y < 0 {
        h += y;
        y = 0;
    }
    if w <= 0 || h <= 0 {
        return None;
    }
    let (width, height) = (width as i32, height as i32);
    x = x.min(width - 1);
    y = y.min(height - 1);
    w = w.min(width - x).max(1);
    h = h.min(height - y).max(1);
    Some(Rect::new(x, y, w, h))
}

/// Document offset and length of the raster span `[start, start + len)`.
///
/// Both edges are rounded, so the kept span never reaches past `extent`.
fn crop_span(start: i32, len: i32, ratio: f64, extent: i32) -> (i32, i32) {
    let near = scale_round(start, ratio).min(extent - 1).max(0);
    let far = scale_round(start + len, ratio).min(extent);
    (near, (far - near).max(1))
}
