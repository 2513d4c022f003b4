//! Canvas - the document model
//!
//! Holds the z-ordered tile list, the single global view scale and the
//! selection. All document-space mutations go through this type; view-space
//! geometry is always derived as `document bounds × scale`.

use crate::error::{DegenerateGeometry, EditOutcome, MosaicError};
use crate::geometry::{
    bounding_box, clamp_coord, scale_divide_round, scale_round, Corner, Point, Rect, SplitAxis,
    COORD_LIMIT,
};
use crate::raster::Raster;

use super::tile::{Tile, TileId};

/// Grid spacing for move snapping (document units)
pub const DEFAULT_GRID_SIZE: i32 = 20;
/// Distance within which a moving edge is pulled onto another tile's edge (document units)
pub const DEFAULT_SNAP_DISTANCE: i32 = 10;
/// Smallest width/height a corner resize can produce (document units)
pub const DEFAULT_MIN_TILE_SIZE: i32 = 20;
/// Edge length of the square corner resize handles (view pixels)
pub const DEFAULT_HANDLE_SIZE: i32 = 10;

/// Tunables for snapping, resizing and hit-testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSettings {
    /// Grid spacing, or `None` to disable grid snapping
    pub grid_size: Option<i32>,
    /// Edge snap threshold, or `None` to disable edge snapping
    pub snap_distance: Option<i32>,
    pub min_tile_size: i32,
    pub handle_size: i32,
    /// Where tiles land when added without an explicit origin
    pub default_origin: Point,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            grid_size: Some(DEFAULT_GRID_SIZE),
            snap_distance: Some(DEFAULT_SNAP_DISTANCE),
            min_tile_size: DEFAULT_MIN_TILE_SIZE,
            handle_size: DEFAULT_HANDLE_SIZE,
            default_origin: Point::new(DEFAULT_GRID_SIZE, DEFAULT_GRID_SIZE),
        }
    }
}

impl CanvasSettings {
    /// Settings with grid and edge snapping turned off
    pub fn without_snapping() -> Self {
        Self {
            grid_size: None,
            snap_distance: None,
            ..Self::default()
        }
    }
}

/// Ordered collection of tiles plus the global document-to-view scale
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Index 0 is the frontmost tile
    tiles: Vec<Tile>,
    scale: f64,
    selected: Option<TileId>,
    next_tile_id: u64,
    pub settings: CanvasSettings,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasSettings::default())
    }
}

impl Canvas {
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            tiles: Vec::new(),
            scale: 1.0,
            selected: None,
            next_tile_id: 1,
            settings,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Tiles in z-order, frontmost first
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    /// Z-order index of a tile (0 = front)
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    /// Tile ids in z-order, frontmost first
    pub fn tile_ids(&self) -> Vec<TileId> {
        self.tiles.iter().map(|t| t.id).collect()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn selected(&self) -> Option<TileId> {
        self.selected
    }

    /// Document-space bounds of a tile
    pub fn document_bounds(&self, id: TileId) -> Option<Rect> {
        self.tile(id).map(|t| t.bounds())
    }

    /// View-space bounds of a tile at the current scale
    pub fn view_bounds(&self, id: TileId) -> Option<Rect> {
        self.tile(id).map(|t| t.view_bounds(self.scale))
    }

    /// Union of all tiles' document bounds
    pub fn document_bounding_box(&self) -> Option<Rect> {
        bounding_box(self.tiles.iter().map(|t| t.bounds()))
    }

    /// Union of all tiles' view bounds
    pub fn view_bounding_box(&self) -> Option<Rect> {
        bounding_box(self.tiles.iter().map(|t| t.view_bounds(self.scale)))
    }

    /// Convert a view-space point to document space
    pub fn view_to_document(&self, p: Point) -> Result<Point, MosaicError> {
        Ok(Point::new(
            scale_divide_round(p.x, self.scale)?,
            scale_divide_round(p.y, self.scale)?,
        ))
    }

    /// Convert a document-space point to view space
    pub fn document_to_view(&self, p: Point) -> Point {
        Point::new(scale_round(p.x, self.scale), scale_round(p.y, self.scale))
    }

    /// Topmost tile under a view-space point
    pub fn tile_at(&self, p: Point) -> Option<TileId> {
        self.tiles
            .iter()
            .find(|t| t.view_bounds(self.scale).contains(p))
            .map(|t| t.id)
    }

    /// Which corner resize handle of `id` (if any) lies under a view-space point
    pub fn handle_at(&self, id: TileId, p: Point) -> Option<Corner> {
        let vb = self.view_bounds(id)?;
        let hs = self.settings.handle_size;
        Corner::ALL.into_iter().find(|&corner| {
            let handle = match corner {
                Corner::TopLeft => Rect::new(vb.x, vb.y, hs, hs),
                Corner::TopRight => Rect::new(vb.right() - hs, vb.y, hs, hs),
                Corner::BottomLeft => Rect::new(vb.x, vb.bottom() - hs, hs, hs),
                Corner::BottomRight => Rect::new(vb.right() - hs, vb.bottom() - hs, hs, hs),
            };
            handle.contains(p)
        })
    }

    /// Map a view-space rectangle drawn over a tile into that tile's raster pixels
    pub fn view_rect_to_raster(&self, id: TileId, view_rect: Rect) -> Result<Rect, MosaicError> {
        let tile = self.tile(id).ok_or(MosaicError::UnknownTile(id))?;
        let bounds = tile.bounds();
        let (ratio_x, ratio_y) = tile.document_per_pixel();
        let px_per_view_x = 1.0 / (self.scale * ratio_x);
        let px_per_view_y = 1.0 / (self.scale * ratio_y);
        let origin_x = view_rect.x as f64 - bounds.x as f64 * self.scale;
        let origin_y = view_rect.y as f64 - bounds.y as f64 * self.scale;
        Ok(Rect::new(
            (origin_x * px_per_view_x).round() as i32,
            (origin_y * px_per_view_y).round() as i32,
            scale_round(view_rect.width, px_per_view_x),
            scale_round(view_rect.height, px_per_view_y),
        ))
    }

    /// Panic if the tile list or scale is in an impossible state.
    ///
    /// Called after every update in debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        assert!(
            self.scale.is_finite() && self.scale > 0.0,
            "[{}] scale {} is not positive",
            context,
            self.scale
        );
        for (i, tile) in self.tiles.iter().enumerate() {
            let b = tile.bounds();
            assert!(
                b.width > 0 && b.height > 0,
                "[{}] tile {} has empty bounds {:?}",
                context,
                tile.id.0,
                b
            );
            assert!(
                self.tiles[..i].iter().all(|t| t.id != tile.id),
                "[{}] tile {} appears twice",
                context,
                tile.id.0
            );
        }
        if let Some(id) = self.selected {
            assert!(
                self.index_of(id).is_some(),
                "[{}] selected tile {} is not on the canvas",
                context,
                id.0
            );
        }
    }

    fn require(&self, id: TileId) -> Result<usize, MosaicError> {
        self.index_of(id).ok_or(MosaicError::UnknownTile(id))
    }

    fn alloc_id(&mut self) -> TileId {
        let id = TileId(self.next_tile_id);
        self.next_tile_id += 1;
        id
    }

    // ========================================================================
    // Tile lifecycle and selection
    // ========================================================================

    /// Add a raster as a new frontmost tile and select it.
    ///
    /// `origin` defaults to `settings.default_origin`.
    pub fn add_tile(&mut self, raster: Raster, origin: Option<Point>) -> TileId {
        let origin = origin.unwrap_or(self.settings.default_origin);
        let id = self.alloc_id();
        let tile = Tile::new(id, raster, origin.x, origin.y);
        tracing::info!("Added tile {} at {:?}", id.0, tile.bounds());
        self.tiles.insert(0, tile);
        self.selected = Some(id);
        id
    }

    /// Remove a tile, clearing the selection if it was selected
    pub fn remove_tile(&mut self, id: TileId) -> Result<Tile, MosaicError> {
        let idx = self.require(id)?;
        let tile = self.tiles.remove(idx);
        if self.selected == Some(id) {
            self.selected = None;
        }
        tracing::info!("Removed tile {}", id.0);
        Ok(tile)
    }

    pub fn select(&mut self, id: Option<TileId>) -> Result<(), MosaicError> {
        if let Some(id) = id {
            self.require(id)?;
        }
        self.selected = id;
        Ok(())
    }

    // ========================================================================
    // Scale
    // ========================================================================

    /// Replace the view scale. Tiles' document bounds are untouched.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), MosaicError> {
        validate_scale(scale)?;
        tracing::debug!("Scale {} -> {}", self.scale, scale);
        self.scale = scale;
        Ok(())
    }

    /// Multiply the scale by `step^steps` (positive steps zoom in)
    pub fn zoom_by(&mut self, steps: i32, step: f64) -> Result<(), MosaicError> {
        self.set_scale(self.scale * step.powi(steps))
    }

    /// Normalise content to the document origin and pick the scale that fits
    /// the document bounding box inside the viewport.
    pub fn zoom_to_fit(
        &mut self,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Result<(), MosaicError> {
        let Some(bbox) = self.document_bounding_box() else {
            return Ok(());
        };
        let scale = (viewport_width as f64 / bbox.width as f64)
            .min(viewport_height as f64 / bbox.height as f64);
        validate_scale(scale)?;

        if bbox.x != 0 || bbox.y != 0 {
            for tile in &mut self.tiles {
                tile.move_by(-bbox.x, -bbox.y);
            }
            tracing::debug!("Normalised content origin by ({}, {})", -bbox.x, -bbox.y);
        }
        self.set_scale(scale)
    }

    // ========================================================================
    // Move
    // ========================================================================

    /// Move a tile so its view-space origin is at `desired`, applying grid and edge snapping
    pub fn move_tile_to(&mut self, id: TileId, desired: Point) -> Result<Rect, MosaicError> {
        let idx = self.require(id)?;
        let doc = self.view_to_document(desired)?;
        // Far zoomed out, a view point can map past any sensible document position
        let proposed = Point::new(clamp_coord(doc.x as i64), clamp_coord(doc.y as i64));
        let snapped = self.snap_origin(id, proposed);
        self.tiles[idx].set_origin(snapped.x, snapped.y);
        Ok(self.tiles[idx].bounds())
    }

    /// Translate a tile in document space without snapping
    pub fn move_tile_by(&mut self, id: TileId, dx: i32, dy: i32) -> Result<(), MosaicError> {
        let idx = self.require(id)?;
        self.tiles[idx].move_by(dx, dy);
        Ok(())
    }

    /// Snap a proposed document origin for `id` to the grid, then to other tiles' edges.
    ///
    /// Edge rules per axis are evaluated for each other tile in z-order, and a
    /// later matching rule overrides an earlier one. Rules compare against the
    /// unsnapped proposal.
    pub fn snap_origin(&self, id: TileId, proposed: Point) -> Point {
        let Some(tile) = self.tile(id) else {
            return proposed;
        };
        let b = tile.bounds();
        let (w, h) = (b.width as i64, b.height as i64);
        let (px, py) = (proposed.x as i64, proposed.y as i64);

        let (mut x, mut y) = match self.settings.grid_size {
            Some(grid) if grid > 0 => (snap_to_grid(px, grid), snap_to_grid(py, grid)),
            _ => (px, py),
        };

        if let Some(dist) = self.settings.snap_distance {
            let dist = dist as i64;
            for other in self.tiles.iter().filter(|t| t.id != id) {
                let o = other.bounds();
                let (left, top) = (o.x as i64, o.y as i64);
                let (right, bottom) = (left + o.width as i64, top + o.height as i64);

                if (px - left).abs() < dist {
                    x = left;
                }
                if (px + w - right).abs() < dist {
                    x = right - w;
                }
                if (px - right).abs() < dist {
                    x = right;
                }
                if (px + w - left).abs() < dist {
                    x = left - w;
                }

                if (py - top).abs() < dist {
                    y = top;
                }
                if (py + h - bottom).abs() < dist {
                    y = bottom - h;
                }
                if (py - bottom).abs() < dist {
                    y = bottom;
                }
                if (py + h - top).abs() < dist {
                    y = top - h;
                }
            }
        }

        Point::new(clamp_coord(x), clamp_coord(y))
    }

    // ========================================================================
    // Resize
    // ========================================================================

    /// Resize from a corner drag, keeping the opposite corner fixed.
    ///
    /// The new size is computed from `at_press` and the total pointer travel
    /// since the press, so repeated drag updates never accumulate error.
    pub fn resize_tile_from_corner(
        &mut self,
        id: TileId,
        corner: Corner,
        press: Point,
        now: Point,
        at_press: Rect,
    ) -> Result<Rect, MosaicError> {
        let idx = self.require(id)?;
        let aspect = self.tiles[idx].aspect_ratio();
        let min = self.settings.min_tile_size.max(1) as f64;

        let dx = (now.x - press.x) as f64 / self.scale;
        let dy = (now.y - press.y) as f64 / self.scale;
        let raw_w = if corner.grows_right() {
            at_press.width as f64 + dx
        } else {
            at_press.width as f64 - dx
        };
        let raw_h = if corner.grows_down() {
            at_press.height as f64 + dy
        } else {
            at_press.height as f64 - dy
        };

        let (w, h) = fit_aspect(raw_w.max(min), raw_h.max(min), aspect, min);
        let limit = (COORD_LIMIT as f64 / w.max(h)).min(1.0);
        let (w, h) = ((w * limit).round() as i32, (h * limit).round() as i32);

        let anchor = at_press.corner(corner.opposite());
        let x = if corner.grows_right() { anchor.x } else { anchor.x - w };
        let y = if corner.grows_down() { anchor.y } else { anchor.y - h };

        let bounds = Rect::new(x, y, w, h);
        self.tiles[idx].set_bounds(bounds);
        Ok(bounds)
    }

    /// Restore a tile's document bounds (used when a gesture is cancelled)
    pub(crate) fn restore_bounds(&mut self, id: TileId, bounds: Rect) -> Result<(), MosaicError> {
        let idx = self.require(id)?;
        self.tiles[idx].set_bounds(bounds);
        Ok(())
    }

    /// Set a tile's document width, deriving the height from its aspect ratio
    pub fn resize_tile_to(&mut self, id: TileId, width: i32) -> Result<Rect, MosaicError> {
        let idx = self.require(id)?;
        self.tiles[idx].resize_to(width);
        Ok(self.tiles[idx].bounds())
    }

    /// Multiply a tile's document size by `factor`, keeping its origin
    pub fn scale_tile(&mut self, id: TileId, factor: f64) -> Result<Rect, MosaicError> {
        validate_scale(factor)?;
        let idx = self.require(id)?;
        self.tiles[idx].apply_uniform_scale(factor);
        Ok(self.tiles[idx].bounds())
    }

    // ========================================================================
    // Crop and split
    // ========================================================================

    /// Crop a tile to a rectangle in its raster-pixel coordinates
    pub fn crop_tile(&mut self, id: TileId, raster_rect: Rect) -> Result<EditOutcome, MosaicError> {
        let idx = self.require(id)?;
        Ok(self.tiles[idx].crop(raster_rect))
    }

    /// Split a tile into a `rows`×`cols` grid of child tiles.
    ///
    /// Children take the parent's z-order slot in row-major order, and their
    /// document bounds exactly partition the parent's.
    pub fn split_tile(
        &mut self,
        id: TileId,
        rows: u32,
        cols: u32,
    ) -> Result<EditOutcome<Vec<TileId>>, MosaicError> {
        if rows == 0 || cols == 0 {
            return Err(MosaicError::InvalidPartitionCount {
                rows: rows.to_string(),
                cols: cols.to_string(),
            });
        }
        let idx = self.require(id)?;
        let parent = &self.tiles[idx];
        let raster = parent.raster();
        let bounds = parent.bounds();
        let (ratio_x, ratio_y) = parent.document_per_pixel();

        let Some(px_cols) = partition(raster.width(), cols) else {
            return Ok(EditOutcome::Unchanged(DegenerateGeometry::TooManyPartitions));
        };
        let Some(px_rows) = partition(raster.height(), rows) else {
            return Ok(EditOutcome::Unchanged(DegenerateGeometry::TooManyPartitions));
        };
        let Some(doc_cols) = document_cuts(&px_cols, ratio_x, bounds.width) else {
            return Ok(EditOutcome::Unchanged(DegenerateGeometry::TooManyPartitions));
        };
        let Some(doc_rows) = document_cuts(&px_rows, ratio_y, bounds.height) else {
            return Ok(EditOutcome::Unchanged(DegenerateGeometry::TooManyPartitions));
        };

        let mut pieces = Vec::with_capacity((rows * cols) as usize);
        for r in 0..rows as usize {
            for c in 0..cols as usize {
                let px = Rect::new(
                    px_cols[c],
                    px_rows[r],
                    px_cols[c + 1] - px_cols[c],
                    px_rows[r + 1] - px_rows[r],
                );
                let doc = Rect::new(
                    bounds.x + doc_cols[c],
                    bounds.y + doc_rows[r],
                    doc_cols[c + 1] - doc_cols[c],
                    doc_rows[r + 1] - doc_rows[r],
                );
                pieces.push((raster.sub_raster(px), doc));
            }
        }

        let children = self.replace_with_children(idx, pieces);
        tracing::info!(
            "Split tile {} into {}x{} grid ({} tiles)",
            id.0,
            rows,
            cols,
            children.len()
        );
        Ok(EditOutcome::Applied(children))
    }

    /// Split a tile along one line. `position` is measured in document units
    /// from the tile's top edge (horizontal line) or left edge (vertical line).
    pub fn split_tile_at_line(
        &mut self,
        id: TileId,
        axis: SplitAxis,
        position: i32,
    ) -> Result<EditOutcome<Vec<TileId>>, MosaicError> {
        let idx = self.require(id)?;
        let parent = &self.tiles[idx];
        let raster = parent.raster();
        let bounds = parent.bounds();
        let (ratio_x, ratio_y) = parent.document_per_pixel();

        let (doc_extent, px_extent, ratio) = match axis {
            SplitAxis::Horizontal => (bounds.height, raster.height() as i32, ratio_y),
            SplitAxis::Vertical => (bounds.width, raster.width() as i32, ratio_x),
        };
        if position <= 0 || position >= doc_extent {
            return Ok(EditOutcome::Unchanged(DegenerateGeometry::SplitAtEdge));
        }
        let px = scale_divide_round(position, ratio)?;
        if px <= 0 || px >= px_extent {
            return Ok(EditOutcome::Unchanged(DegenerateGeometry::SplitAtEdge));
        }

        let (rw, rh) = (raster.width() as i32, raster.height() as i32);
        let pieces = match axis {
            SplitAxis::Horizontal => vec![
                (
                    raster.sub_raster(Rect::new(0, 0, rw, px)),
                    Rect::new(bounds.x, bounds.y, bounds.width, position),
                ),
                (
                    raster.sub_raster(Rect::new(0, px, rw, rh - px)),
                    Rect::new(
                        bounds.x,
                        bounds.y + position,
                        bounds.width,
                        bounds.height - position,
                    ),
                ),
            ],
            SplitAxis::Vertical => vec![
                (
                    raster.sub_raster(Rect::new(0, 0, px, rh)),
                    Rect::new(bounds.x, bounds.y, position, bounds.height),
                ),
                (
                    raster.sub_raster(Rect::new(px, 0, rw - px, rh)),
                    Rect::new(
                        bounds.x + position,
                        bounds.y,
                        bounds.width - position,
                        bounds.height,
                    ),
                ),
            ],
        };

        let children = self.replace_with_children(idx, pieces);
        tracing::info!("Split tile {} {:?} at {}", id.0, axis, position);
        Ok(EditOutcome::Applied(children))
    }

    /// Swap the tile at `idx` for new tiles built from `pieces`, in the same z slot
    fn replace_with_children(&mut self, idx: usize, pieces: Vec<(Raster, Rect)>) -> Vec<TileId> {
        let parent_id = self.tiles[idx].id;
        let children: Vec<Tile> = pieces
            .into_iter()
            .map(|(raster, bounds)| {
                let id = self.alloc_id();
                Tile::with_bounds(id, raster, bounds)
            })
            .collect();
        let ids: Vec<TileId> = children.iter().map(|t| t.id).collect();
        self.tiles.remove(idx);
        for (offset, child) in children.into_iter().enumerate() {
            self.tiles.insert(idx + offset, child);
        }
        if self.selected == Some(parent_id) {
            self.selected = ids.first().copied();
        }
        ids
    }

    // ========================================================================
    // Z-order
    // ========================================================================

    /// Move a tile to index 0. Returns whether the order changed.
    pub fn bring_to_front(&mut self, id: TileId) -> Result<bool, MosaicError> {
        let idx = self.require(id)?;
        Ok(self.reposition(idx, 0))
    }

    /// Move a tile to the last index. Returns whether the order changed.
    pub fn send_to_back(&mut self, id: TileId) -> Result<bool, MosaicError> {
        let idx = self.require(id)?;
        let last = self.tiles.len() - 1;
        Ok(self.reposition(idx, last))
    }

    /// Move a tile one step toward the front
    pub fn move_forward(&mut self, id: TileId) -> Result<bool, MosaicError> {
        let idx = self.require(id)?;
        Ok(self.reposition(idx, idx.saturating_sub(1)))
    }

    /// Move a tile one step toward the back
    pub fn move_backward(&mut self, id: TileId) -> Result<bool, MosaicError> {
        let idx = self.require(id)?;
        let last = self.tiles.len() - 1;
        Ok(self.reposition(idx, (idx + 1).min(last)))
    }

    fn reposition(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }
        let tile = self.tiles.remove(from);
        tracing::debug!("Tile {} z-order {} -> {}", tile.id.0, from, to);
        self.tiles.insert(to, tile);
        true
    }

    // ========================================================================
    // Flatten
    // ========================================================================

    /// Composite every tile, back to front, into one raster sized to the
    /// document bounding box. The canvas is not modified.
    pub fn flatten(&self) -> Result<Raster, MosaicError> {
        let bbox = self.document_bounding_box().ok_or(MosaicError::EmptyCanvas)?;
        let mut out = Raster::transparent(bbox.width as u32, bbox.height as u32);
        for tile in self.tiles.iter().rev() {
            let b = tile.bounds();
            out.paint(&tile.rendered(), (b.x - bbox.x) as i64, (b.y - bbox.y) as i64);
        }
        tracing::info!(
            "Flattened {} tiles into {}x{}",
            self.tiles.len(),
            bbox.width,
            bbox.height
        );
        Ok(out)
    }
}

fn validate_scale(scale: f64) -> Result<(), MosaicError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        tracing::warn!("Rejected scale {}", scale);
        Err(MosaicError::InvalidScale(scale))
    }
}

fn snap_to_grid(value: i64, grid: i32) -> i64 {
    (value as f64 / grid as f64).round() as i64 * grid as i64
}

/// Shrink-to-aspect, then grow uniformly until both sides reach `min`
fn fit_aspect(raw_w: f64, raw_h: f64, aspect: f64, min: f64) -> (f64, f64) {
    let (mut w, mut h) = if raw_w / raw_h > aspect {
        (raw_h * aspect, raw_h)
    } else {
        (raw_w, raw_w / aspect)
    };
    let grow = (min / w).max(min / h);
    if grow > 1.0 {
        w *= grow;
        h *= grow;
    }
    (w, h)
}

/// Cut points splitting `extent` pixels into `parts` non-empty runs
fn partition(extent: u32, parts: u32) -> Option<Vec<i32>> {
    if parts > extent {
        return None;
    }
    Some(
        (0..=parts as u64)
            .map(|i| (i * extent as u64 / parts as u64) as i32)
            .collect(),
    )
}

/// Map raster cut points to document offsets, rejecting empty children
fn document_cuts(px_cuts: &[i32], ratio: f64, extent: i32) -> Option<Vec<i32>> {
    let last = px_cuts.len() - 1;
    let cuts: Vec<i32> = px_cuts
        .iter()
        .enumerate()
        .map(|(i, &px)| if i == last { extent } else { scale_round(px, ratio) })
        .collect();
    cuts.windows(2).all(|w| w[1] > w[0]).then_some(cuts)
}
