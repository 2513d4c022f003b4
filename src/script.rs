//! YAML edit scripts for the headless tool
//!
//! A script is a list of operations applied in order through `update()`.
//! Tiles are referenced by their current z-order index (0 = front), so an
//! index can name a different tile after a split or reorder.
//!
//! ```yaml
//! ops:
//!   - move: { tile: 0, x: 240, y: 20 }
//!   - crop: { tile: 1, x: 10, y: 10, width: 80, height: 60 }
//!   - split: { tile: 0, rows: 2, cols: 2 }
//!   - split_line: { tile: 0, axis: vertical, position: 40 }
//!   - send_to_back: 0
//!   - zoom_to_fit
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::commands::Cmd;
use crate::geometry::{Point, Rect, SplitAxis};
use crate::messages::{AppMsg, CanvasMsg, Msg};
use crate::model::{AppModel, Canvas, TileId};
use crate::update::update;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EditScript {
    /// Viewport used by `zoom_to_fit`; defaults to the model's current viewport
    #[serde(default)]
    pub viewport: Option<ScriptViewport>,
    #[serde(default)]
    pub ops: Vec<EditOp>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptViewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EditOp {
    /// Move so the tile's view origin is at (x, y), with snapping
    Move { tile: usize, x: i32, y: i32 },
    /// Translate in document units, without snapping
    Nudge { tile: usize, dx: i32, dy: i32 },
    /// Set document width, keeping aspect ratio
    Resize { tile: usize, width: i32 },
    Scale { tile: usize, factor: f64 },
    /// Crop to a rectangle in raster pixels
    Crop {
        tile: usize,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Split { tile: usize, rows: u32, cols: u32 },
    SplitLine {
        tile: usize,
        axis: SplitAxis,
        position: i32,
    },
    Delete(usize),
    BringToFront(usize),
    SendToBack(usize),
    MoveForward(usize),
    MoveBackward(usize),
    SetScale(f64),
    ZoomToFit,
}

impl EditOp {
    /// Resolve tile indices against the canvas and build the message
    pub fn to_msg(&self, canvas: &Canvas) -> Result<Msg, String> {
        let tile = |index: usize| -> Result<TileId, String> {
            canvas.tiles().get(index).map(|t| t.id).ok_or_else(|| {
                format!(
                    "no tile at index {} (canvas has {})",
                    index,
                    canvas.len()
                )
            })
        };

        let msg = match *self {
            EditOp::Move { tile: i, x, y } => CanvasMsg::MoveTileTo {
                tile: tile(i)?,
                point: Point::new(x, y),
            },
            EditOp::Nudge { tile: i, dx, dy } => CanvasMsg::MoveTileBy {
                tile: tile(i)?,
                dx,
                dy,
            },
            EditOp::Resize { tile: i, width } => CanvasMsg::ResizeTileTo {
                tile: tile(i)?,
                width,
            },
            EditOp::Scale { tile: i, factor } => CanvasMsg::ScaleTile {
                tile: tile(i)?,
                factor,
            },
            EditOp::Crop {
                tile: i,
                x,
                y,
                width,
                height,
            } => CanvasMsg::CropTile {
                tile: tile(i)?,
                rect: Rect::new(x, y, width, height),
            },
            EditOp::Split { tile: i, rows, cols } => CanvasMsg::SplitTile {
                tile: tile(i)?,
                rows,
                cols,
            },
            EditOp::SplitLine {
                tile: i,
                axis,
                position,
            } => CanvasMsg::SplitTileAtLine {
                tile: tile(i)?,
                axis,
                position,
            },
            EditOp::Delete(i) => CanvasMsg::RemoveTile(tile(i)?),
            EditOp::BringToFront(i) => CanvasMsg::BringToFront(tile(i)?),
            EditOp::SendToBack(i) => CanvasMsg::SendToBack(tile(i)?),
            EditOp::MoveForward(i) => CanvasMsg::MoveForward(tile(i)?),
            EditOp::MoveBackward(i) => CanvasMsg::MoveBackward(tile(i)?),
            EditOp::SetScale(scale) => CanvasMsg::SetScale(scale),
            EditOp::ZoomToFit => CanvasMsg::ZoomToFit,
        };
        Ok(Msg::Canvas(msg))
    }
}

impl EditScript {
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
        Self::parse(&content).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| format!("Invalid edit script: {}", e))
    }

    /// Apply every operation in order, stopping at the first rejected one.
    ///
    /// Operations that degenerate (e.g. a zero-area crop) are skipped silently.
    pub fn run(&self, model: &mut AppModel) -> Result<Vec<Cmd>, String> {
        if let Some(vp) = self.viewport {
            update(
                model,
                Msg::App(AppMsg::ViewportResized {
                    width: vp.width,
                    height: vp.height,
                }),
            );
        }

        let mut cmds = Vec::new();
        for (n, op) in self.ops.iter().enumerate() {
            let msg = op
                .to_msg(&model.canvas)
                .map_err(|e| format!("op {} ({:?}): {}", n + 1, op, e))?;
            tracing::debug!("Script op {}: {:?}", n + 1, op);
            if let Some(cmd) = update(model, msg) {
                if let Some(err) = cmd.rejection() {
                    return Err(format!("op {} ({:?}): {}", n + 1, op, err));
                }
                cmds.push(cmd);
            }
        }
        tracing::info!("Applied {} script operations", self.ops.len());
        Ok(cmds)
    }
}
