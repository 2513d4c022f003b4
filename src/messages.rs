//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Pointer positions are
//! always in view-space pixels; the update functions convert them.

use std::path::PathBuf;

use crate::geometry::{Corner, Point, Rect, SplitAxis};
use crate::model::TileId;
use crate::raster::Raster;

/// Which pointer button a press came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Resolved pointer gestures delivered by the host
#[derive(Debug, Clone)]
pub enum GestureMsg {
    /// Pointer pressed. `tile` and `handle` are what the host found under the
    /// pointer (see `Canvas::tile_at` and `Canvas::handle_at`).
    Press {
        point: Point,
        button: PointerButton,
        tile: Option<TileId>,
        handle: Option<Corner>,
    },
    /// Pointer moved with the button held
    Drag { point: Point },
    /// Pointer released
    Release { point: Point },
    /// Abort the active gesture and restore press-time state (Escape, focus loss)
    Cancel,
}

/// Document commands
#[derive(Debug, Clone)]
pub enum CanvasMsg {
    /// Add a decoded raster as the new frontmost tile
    AddTile {
        raster: Raster,
        origin: Option<Point>,
    },
    RemoveTile(TileId),
    /// Remove the selected tile (Delete/Backspace)
    DeleteSelected,
    Select(Option<TileId>),
    SetScale(f64),
    /// Wheel zoom by whole steps (positive = in)
    Zoom { steps: i32 },
    /// Fit all content into the current viewport
    ZoomToFit,
    /// Move a tile's view origin to a point, with snapping
    MoveTileTo { tile: TileId, point: Point },
    /// Translate a tile in document units, without snapping
    MoveTileBy { tile: TileId, dx: i32, dy: i32 },
    /// Set a tile's document width, keeping its aspect ratio
    ResizeTileTo { tile: TileId, width: i32 },
    /// Multiply a tile's document size
    ScaleTile { tile: TileId, factor: f64 },
    /// Crop to a rectangle in raster pixels
    CropTile { tile: TileId, rect: Rect },
    SplitTile { tile: TileId, rows: u32, cols: u32 },
    SplitTileAtLine {
        tile: TileId,
        axis: SplitAxis,
        position: i32,
    },
    BringToFront(TileId),
    SendToBack(TileId),
    MoveForward(TileId),
    MoveBackward(TileId),
}

/// Arm or disarm the crop/split tools (from the context menu)
#[derive(Debug, Clone)]
pub enum ToolMsg {
    EnterCropMode(TileId),
    EnterGridSplitMode(TileId),
    EnterLineSplitMode(TileId, SplitAxis),
    Disarm,
}

/// Host answers to confirmation prompts
#[derive(Debug, Clone)]
pub enum PromptMsg {
    /// Apply the pending crop or line split
    Confirm,
    /// Apply the pending grid split; raw text as typed by the user
    ConfirmGridSplit { rows: String, cols: String },
    /// Discard the pending edit
    Cancel,
}

/// Application-level messages
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// The canvas viewport changed size (view pixels)
    ViewportResized { width: u32, height: u32 },
    /// Flatten the canvas and ask the host to write it
    Export { path: PathBuf },
}

/// Top-level message
#[derive(Debug, Clone)]
pub enum Msg {
    Canvas(CanvasMsg),
    Gesture(GestureMsg),
    Tool(ToolMsg),
    Prompt(PromptMsg),
    App(AppMsg),
}
