//! Pointer gesture state machine
//!
//! ```text
//! Idle --press on handle--------> Resizing --drag--> Resizing --release--> Idle
//! Idle --press on tile----------> Moving   --drag--> Moving   --release--> Idle
//! Idle --press, crop armed------> CroppingRect   --release--> Idle + ConfirmCrop
//! Idle --press, grid armed------> SplittingRect  --release--> Idle + RequestGridSize
//! Idle --press, line armed------> SplittingLine  --release--> Idle + ConfirmSplitLine
//! any  --cancel-----------------> Idle (press-time bounds restored)
//! ```

use crate::commands::Cmd;
use crate::error::MosaicError;
use crate::geometry::{scale_divide_round, Corner, Point, Rect, SplitAxis};
use crate::messages::{GestureMsg, PointerButton};
use crate::model::interaction::clamp_line_offset;
use crate::model::{
    AppModel, ArmedTool, InteractionMode, LineSession, MoveSession, PendingEdit, RectSession,
    ResizeSession, TileId,
};

/// Handle pointer gestures
pub fn update_gesture(model: &mut AppModel, msg: GestureMsg) -> Option<Cmd> {
    let result = match msg {
        GestureMsg::Press {
            point,
            button,
            tile,
            handle,
        } => press(model, point, button, tile, handle),
        GestureMsg::Drag { point } => drag(model, point),
        GestureMsg::Release { point } => release(model, point),
        GestureMsg::Cancel => cancel(model),
    };
    match result {
        Ok(cmd) => cmd,
        Err(e) => {
            // A failed gesture never leaves a half-open session behind
            model.interaction.mode = InteractionMode::None;
            Some(e.into())
        }
    }
}

// ============================================================================
// Press
// ============================================================================

fn press(
    model: &mut AppModel,
    point: Point,
    button: PointerButton,
    tile: Option<TileId>,
    handle: Option<Corner>,
) -> Result<Option<Cmd>, MosaicError> {
    if !model.interaction.mode.is_idle() {
        tracing::debug!("Press at {:?} ignored: a gesture is already active", point);
        return Ok(None);
    }
    if model.interaction.pending.is_some() {
        tracing::debug!("Press at {:?} ignored: waiting for confirmation", point);
        return Ok(None);
    }

    if button == PointerButton::Secondary {
        let Some(id) = tile else {
            return Ok(None);
        };
        model.canvas.select(Some(id))?;
        let menu = model.context_menu(id);
        return Ok(Some(Cmd::redraw_and(Cmd::ShowContextMenu { point, menu })));
    }

    if let Some(tool) = model.interaction.tool {
        return start_tool_session(model, tool, point);
    }

    let Some(id) = tile else {
        model.canvas.select(None)?;
        return Ok(Some(Cmd::Redraw));
    };
    model.canvas.select(Some(id))?;
    let bounds_at_press = model
        .canvas
        .document_bounds(id)
        .ok_or(MosaicError::UnknownTile(id))?;

    model.interaction.mode = match handle {
        Some(corner) => {
            tracing::debug!("Resize tile {} from {:?}", id.0, corner);
            InteractionMode::Resizing(ResizeSession {
                tile: id,
                corner,
                press: point,
                bounds_at_press,
            })
        }
        None => {
            let view_bounds = model
                .canvas
                .view_bounds(id)
                .ok_or(MosaicError::UnknownTile(id))?;
            tracing::debug!("Move tile {} from {:?}", id.0, bounds_at_press.origin());
            InteractionMode::Moving(MoveSession {
                tile: id,
                grab_offset: Point::new(point.x - view_bounds.x, point.y - view_bounds.y),
                view_bounds_at_press: view_bounds,
                bounds_at_press,
            })
        }
    };
    Ok(Some(Cmd::Redraw))
}

/// Half-width, in view pixels, of the band around an armed split line that grabs it
const LINE_GRAB_DISTANCE: i32 = 5;

/// A primary press while a tool is armed starts that tool's session on the armed tile.
///
/// Rectangle tools start anywhere. The split line only starts dragging when the
/// press lands on it; other presses leave the line where it is.
fn start_tool_session(
    model: &mut AppModel,
    tool: ArmedTool,
    point: Point,
) -> Result<Option<Cmd>, MosaicError> {
    let id = tool.tile();
    let Some(view_bounds) = model.canvas.view_bounds(id) else {
        model.interaction.tool = None;
        return Err(MosaicError::UnknownTile(id));
    };

    let start = RectSession {
        tile: id,
        start: point,
        rect: Rect::new(point.x, point.y, 0, 0),
    };
    model.interaction.mode = match tool {
        ArmedTool::Crop { .. } => InteractionMode::CroppingRect(start),
        ArmedTool::SplitGrid { .. } => InteractionMode::SplittingRect(start),
        ArmedTool::SplitLine { axis, offset, .. } => {
            if !line_grab_band(view_bounds, axis, offset).contains(point) {
                tracing::debug!("Press at {:?} missed the split line at {}", point, offset);
                return Ok(None);
            }
            InteractionMode::SplittingLine(LineSession {
                tile: id,
                axis,
                offset,
            })
        }
    };
    tracing::debug!("Started {:?} on tile {}", tool, id.0);
    Ok(Some(Cmd::Redraw))
}

/// View-space strip around a split line `offset` pixels into the tile
fn line_grab_band(view_bounds: Rect, axis: SplitAxis, offset: i32) -> Rect {
    let band = 2 * LINE_GRAB_DISTANCE;
    match axis {
        SplitAxis::Horizontal => Rect::new(
            view_bounds.x,
            view_bounds.y + offset - LINE_GRAB_DISTANCE,
            view_bounds.width,
            band,
        ),
        SplitAxis::Vertical => Rect::new(
            view_bounds.x + offset - LINE_GRAB_DISTANCE,
            view_bounds.y,
            band,
            view_bounds.height,
        ),
    }
}

// ============================================================================
// Drag
// ============================================================================

fn drag(model: &mut AppModel, point: Point) -> Result<Option<Cmd>, MosaicError> {
    match model.interaction.mode {
        InteractionMode::None => return Ok(None),

        InteractionMode::Moving(s) => {
            let desired = Point::new(point.x - s.grab_offset.x, point.y - s.grab_offset.y);
            model.canvas.move_tile_to(s.tile, desired)?;
        }

        InteractionMode::Resizing(s) => {
            model.canvas.resize_tile_from_corner(
                s.tile,
                s.corner,
                s.press,
                point,
                s.bounds_at_press,
            )?;
        }

        InteractionMode::CroppingRect(s) => {
            model.interaction.mode = InteractionMode::CroppingRect(grow_rect(s, point));
        }

        InteractionMode::SplittingRect(s) => {
            model.interaction.mode = InteractionMode::SplittingRect(grow_rect(s, point));
        }

        InteractionMode::SplittingLine(s) => {
            let view_bounds = model
                .canvas
                .view_bounds(s.tile)
                .ok_or(MosaicError::UnknownTile(s.tile))?;
            let offset = line_offset(model, s.axis, view_bounds, point);
            model.interaction.mode = InteractionMode::SplittingLine(LineSession { offset, ..s });
            sync_line_tool(model);
        }
    }
    Ok(Some(Cmd::Redraw))
}

fn grow_rect(session: RectSession, point: Point) -> RectSession {
    RectSession {
        rect: Rect::from_points(session.start, point),
        ..session
    }
}

/// Pointer position along the split axis, clamped away from the tile's edges
fn line_offset(model: &AppModel, axis: SplitAxis, view_bounds: Rect, point: Point) -> i32 {
    let (offset, extent) = match axis {
        SplitAxis::Horizontal => (point.y - view_bounds.y, view_bounds.height),
        SplitAxis::Vertical => (point.x - view_bounds.x, view_bounds.width),
    };
    clamp_line_offset(offset, extent, model.config.split_line_margin)
}

/// Keep the armed line tool's offset in step with the dragged line so the host draws it there
fn sync_line_tool(model: &mut AppModel) {
    if let (InteractionMode::SplittingLine(s), Some(ArmedTool::SplitLine { offset, .. })) =
        (model.interaction.mode, model.interaction.tool.as_mut())
    {
        *offset = s.offset;
    }
}

// ============================================================================
// Release
// ============================================================================

fn release(model: &mut AppModel, point: Point) -> Result<Option<Cmd>, MosaicError> {
    if model.interaction.mode.is_idle() {
        return Ok(None);
    }
    drag(model, point)?;

    let mode = std::mem::take(&mut model.interaction.mode);
    match mode {
        InteractionMode::None => Ok(None),

        InteractionMode::Moving(s) => {
            if let Some(b) = model.canvas.document_bounds(s.tile) {
                tracing::info!(
                    "Moved tile {} from {:?} to {:?}",
                    s.tile.0,
                    s.bounds_at_press.origin(),
                    b.origin()
                );
            }
            Ok(Some(Cmd::Redraw))
        }

        InteractionMode::Resizing(s) => {
            if let Some(b) = model.canvas.document_bounds(s.tile) {
                tracing::info!(
                    "Resized tile {} from {}x{} to {}x{}",
                    s.tile.0,
                    s.bounds_at_press.width,
                    s.bounds_at_press.height,
                    b.width,
                    b.height
                );
            }
            Ok(Some(Cmd::Redraw))
        }

        InteractionMode::CroppingRect(s) => {
            if s.rect.is_empty() {
                tracing::debug!("Empty crop rectangle, leaving crop mode");
                model.interaction.tool = None;
                return Ok(Some(Cmd::Redraw));
            }
            let raster_rect = model.canvas.view_rect_to_raster(s.tile, s.rect)?;
            model.interaction.pending = Some(PendingEdit::Crop {
                tile: s.tile,
                raster_rect,
            });
            Ok(Some(Cmd::redraw_and(Cmd::ConfirmCrop {
                tile: s.tile,
                raster_rect,
            })))
        }

        InteractionMode::SplittingRect(s) => {
            if s.rect.is_empty() {
                tracing::debug!("Empty split rectangle, leaving grid split mode");
                model.interaction.tool = None;
                return Ok(Some(Cmd::Redraw));
            }
            let view_bounds = model
                .canvas
                .view_bounds(s.tile)
                .ok_or(MosaicError::UnknownTile(s.tile))?;
            let suggested_rows = (view_bounds.height / s.rect.height).max(1) as u32;
            let suggested_cols = (view_bounds.width / s.rect.width).max(1) as u32;
            model.interaction.pending = Some(PendingEdit::SplitGrid { tile: s.tile });
            Ok(Some(Cmd::redraw_and(Cmd::RequestGridSize {
                tile: s.tile,
                suggested_rows,
                suggested_cols,
            })))
        }

        InteractionMode::SplittingLine(s) => {
            let position = scale_divide_round(s.offset, model.canvas.scale())?;
            model.interaction.pending = Some(PendingEdit::SplitLine {
                tile: s.tile,
                axis: s.axis,
                position,
            });
            Ok(Some(Cmd::redraw_and(Cmd::ConfirmSplitLine {
                tile: s.tile,
                axis: s.axis,
                position,
            })))
        }
    }
}

// ============================================================================
// Cancel
// ============================================================================

fn cancel(model: &mut AppModel) -> Result<Option<Cmd>, MosaicError> {
    let mode = std::mem::take(&mut model.interaction.mode);
    match mode {
        InteractionMode::None => {
            if model.interaction.tool.take().is_some() {
                tracing::debug!("Disarmed tool");
                Ok(Some(Cmd::Redraw))
            } else {
                Ok(None)
            }
        }
        InteractionMode::Moving(MoveSession {
            tile,
            bounds_at_press,
            ..
        })
        | InteractionMode::Resizing(ResizeSession {
            tile,
            bounds_at_press,
            ..
        }) => {
            model.canvas.restore_bounds(tile, bounds_at_press)?;
            tracing::debug!("Cancelled gesture on tile {}", tile.0);
            Ok(Some(Cmd::Redraw))
        }
        InteractionMode::CroppingRect(_)
        | InteractionMode::SplittingRect(_)
        | InteractionMode::SplittingLine(_) => {
            model.interaction.tool = None;
            Ok(Some(Cmd::Redraw))
        }
    }
}
