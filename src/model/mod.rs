//! Application model - the complete state of a mosaic session
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod canvas;
pub mod interaction;
pub mod menu;
pub mod tile;

pub use canvas::{Canvas, CanvasSettings};
pub use interaction::{
    ArmedTool, Interaction, InteractionMode, LineSession, MoveSession, PendingEdit, RectSession,
    ResizeSession,
};
pub use menu::{ContextMenuState, MenuAction, MenuItem};
pub use tile::{Tile, TileId};

use std::path::{Path, PathBuf};

use crate::config::MosaicConfig;
use crate::error::MosaicError;
use crate::geometry::Point;
use crate::raster::Raster;

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Tiles, scale and selection
    pub canvas: Canvas,
    /// Armed tool, active gesture and pending confirmation
    pub interaction: Interaction,
    /// Persisted configuration
    pub config: MosaicConfig,
    /// Canvas viewport size in view pixels
    pub viewport: (u32, u32),
}

impl AppModel {
    /// Create an empty model for a viewport of the given size
    pub fn new(config: MosaicConfig, viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            canvas: Canvas::new(config.canvas_settings()),
            interaction: Interaction::default(),
            config,
            viewport: (viewport_width, viewport_height),
        }
    }

    /// Decode an image file and add it as a new tile.
    ///
    /// On a decode failure no tile is created.
    pub fn import_image(
        &mut self,
        path: &Path,
        origin: Option<Point>,
    ) -> Result<TileId, MosaicError> {
        let raster = crate::raster::load_raster(path)?;
        Ok(self.canvas.add_tile(raster, origin))
    }

    /// Add rasters side by side, left to right, starting at the default origin.
    ///
    /// Each tile's left edge sits on the previous tile's right edge. The last
    /// raster ends up frontmost.
    pub fn place_row(&mut self, rasters: Vec<Raster>) -> Vec<TileId> {
        let origin = self.canvas.settings.default_origin;
        let mut x = origin.x;
        rasters
            .into_iter()
            .map(|raster| {
                let width = raster.width() as i32;
                let id = self.canvas.add_tile(raster, Some(Point::new(x, origin.y)));
                x += width;
                id
            })
            .collect()
    }

    /// Decode every file, then lay the images out with [`place_row`](Self::place_row).
    ///
    /// Nothing is added if any file fails to decode.
    pub fn import_row(&mut self, paths: &[PathBuf]) -> Result<Vec<TileId>, MosaicError> {
        let rasters = paths
            .iter()
            .map(|p| crate::raster::load_raster(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.place_row(rasters))
    }

    /// Context menu for `tile` as it should currently be shown
    pub fn context_menu(&self, tile: TileId) -> ContextMenuState {
        let crop_armed = matches!(
            self.interaction.tool,
            Some(ArmedTool::Crop { tile: t }) if t == tile
        );
        ContextMenuState::for_tile(tile, self.canvas.selected() == Some(tile), crop_armed)
    }

    /// "x: …, y: …" readout of the document position under a view-space point
    pub fn coordinate_label(&self, view_point: Point) -> String {
        match self.canvas.view_to_document(view_point) {
            Ok(p) => format!("x: {}, y: {}", p.x, p.y),
            Err(_) => String::from("x: -, y: -"),
        }
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(MosaicConfig::default(), 800, 600)
    }
}
