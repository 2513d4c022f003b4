//! Interaction session state for the gesture controller
//!
//! At most one gesture is active at a time. Session data lives only as long
//! as its gesture and is dropped when the mode returns to `None`.

use crate::geometry::{Corner, Point, Rect, SplitAxis};

use super::tile::TileId;

/// A tool armed from the context menu, waiting for the next press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmedTool {
    /// Next press starts a crop rectangle over `tile`
    Crop { tile: TileId },
    /// Next press starts a grid-split rectangle over `tile`
    SplitGrid { tile: TileId },
    /// A split line is shown over `tile`; `offset` is in view pixels from
    /// the tile's top edge (horizontal) or left edge (vertical)
    SplitLine {
        tile: TileId,
        axis: SplitAxis,
        offset: i32,
    },
}

impl ArmedTool {
    pub fn tile(&self) -> TileId {
        match *self {
            ArmedTool::Crop { tile }
            | ArmedTool::SplitGrid { tile }
            | ArmedTool::SplitLine { tile, .. } => tile,
        }
    }
}

/// Drag-move session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveSession {
    pub tile: TileId,
    /// Pointer offset from the tile's view origin at press
    pub grab_offset: Point,
    pub view_bounds_at_press: Rect,
    pub bounds_at_press: Rect,
}

/// Corner-resize session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub tile: TileId,
    pub corner: Corner,
    /// Pointer position at press (view space)
    pub press: Point,
    pub bounds_at_press: Rect,
}

/// Rubber-band rectangle session (crop or grid split)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectSession {
    pub tile: TileId,
    /// View-space start point
    pub start: Point,
    /// Current normalised view-space rectangle
    pub rect: Rect,
}

/// Split-line drag session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSession {
    pub tile: TileId,
    pub axis: SplitAxis,
    /// View pixels from the tile's leading edge
    pub offset: i32,
}

/// The active gesture, if any
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InteractionMode {
    #[default]
    None,
    Moving(MoveSession),
    Resizing(ResizeSession),
    CroppingRect(RectSession),
    SplittingRect(RectSession),
    SplittingLine(LineSession),
}

impl InteractionMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::None)
    }

    /// The tile the active gesture operates on
    pub fn tile(&self) -> Option<TileId> {
        match self {
            InteractionMode::None => None,
            InteractionMode::Moving(s) => Some(s.tile),
            InteractionMode::Resizing(s) => Some(s.tile),
            InteractionMode::CroppingRect(s) | InteractionMode::SplittingRect(s) => Some(s.tile),
            InteractionMode::SplittingLine(s) => Some(s.tile),
        }
    }
}

/// An edit awaiting the host's confirm/cancel decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingEdit {
    Crop {
        tile: TileId,
        /// Rectangle in the tile's raster pixels
        raster_rect: Rect,
    },
    SplitLine {
        tile: TileId,
        axis: SplitAxis,
        /// Document units from the tile's leading edge
        position: i32,
    },
    SplitGrid { tile: TileId },
}

impl PendingEdit {
    pub fn tile(&self) -> TileId {
        match *self {
            PendingEdit::Crop { tile, .. }
            | PendingEdit::SplitLine { tile, .. }
            | PendingEdit::SplitGrid { tile } => tile,
        }
    }
}

/// Controller state: armed tool, active gesture and pending confirmation
#[derive(Debug, Clone, Default)]
pub struct Interaction {
    pub tool: Option<ArmedTool>,
    pub mode: InteractionMode,
    pub pending: Option<PendingEdit>,
}

impl Interaction {
    /// Whether a gesture or confirmation is in flight
    pub fn is_busy(&self) -> bool {
        !self.mode.is_idle() || self.pending.is_some()
    }

    /// Forget all state that refers to `tile` (after it was removed)
    pub fn forget_tile(&mut self, tile: TileId) {
        if self.tool.map(|t| t.tile()) == Some(tile) {
            self.tool = None;
        }
        if self.mode.tile() == Some(tile) {
            self.mode = InteractionMode::None;
        }
        if self.pending.map(|p| p.tile()) == Some(tile) {
            self.pending = None;
        }
    }
}

/// Clamp a split-line offset to `[margin, extent - margin]`, or the middle
/// when the tile is too small to honour the margin
pub fn clamp_line_offset(offset: i32, extent: i32, margin: i32) -> i32 {
    if extent <= 2 * margin {
        extent / 2
    } else {
        offset.clamp(margin, extent - margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_line_offset() {
        assert_eq!(clamp_line_offset(5, 100, 10), 10);
        assert_eq!(clamp_line_offset(95, 100, 10), 90);
        assert_eq!(clamp_line_offset(40, 100, 10), 40);
        assert_eq!(clamp_line_offset(3, 15, 10), 7);
    }

    #[test]
    fn test_forget_tile_clears_related_state() {
        let mut interaction = Interaction {
            tool: Some(ArmedTool::Crop { tile: TileId(3) }),
            mode: InteractionMode::None,
            pending: Some(PendingEdit::SplitGrid { tile: TileId(3) }),
        };
        interaction.forget_tile(TileId(4));
        assert!(interaction.tool.is_some());
        interaction.forget_tile(TileId(3));
        assert!(interaction.tool.is_none());
        assert!(interaction.pending.is_none());
        assert!(!interaction.is_busy());
    }
}
