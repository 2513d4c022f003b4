//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host performs after an update:
//! repainting, showing menus and prompts, reporting rejections, writing files.

use std::path::PathBuf;

use crate::error::MosaicError;
use crate::geometry::{Point, Rect, SplitAxis};
use crate::model::{ContextMenuState, TileId};
use crate::raster::Raster;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint the canvas
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Show the context menu for a tile at a view-space point
    ShowContextMenu {
        point: Point,
        menu: ContextMenuState,
    },
    /// Ask the user to confirm a crop; answer with `PromptMsg::Confirm`/`Cancel`
    ConfirmCrop { tile: TileId, raster_rect: Rect },
    /// Ask the user to confirm a line split; answer with `PromptMsg::Confirm`/`Cancel`
    ConfirmSplitLine {
        tile: TileId,
        axis: SplitAxis,
        position: i32,
    },
    /// Ask the user for grid dimensions; answer with `PromptMsg::ConfirmGridSplit`/`Cancel`
    RequestGridSize {
        tile: TileId,
        suggested_rows: u32,
        suggested_cols: u32,
    },
    /// A command was rejected; the document is unchanged
    Rejected(MosaicError),
    /// Write the flattened raster to disk
    SaveImage { path: PathBuf, raster: Raster },
}

impl Cmd {
    /// Combine a redraw with another command
    pub fn redraw_and(cmd: Cmd) -> Cmd {
        Cmd::Batch(vec![Cmd::Redraw, cmd])
    }

    /// Check if this command requests a redraw (directly or inside a batch)
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// The rejection carried by this command, if any
    pub fn rejection(&self) -> Option<&MosaicError> {
        match self {
            Cmd::Rejected(e) => Some(e),
            Cmd::Batch(cmds) => cmds.iter().find_map(|c| c.rejection()),
            _ => None,
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            other => vec![other],
        }
    }
}

impl From<MosaicError> for Cmd {
    fn from(e: MosaicError) -> Self {
        tracing::warn!("Rejected command: {}", e);
        Cmd::Rejected(e)
    }
}
