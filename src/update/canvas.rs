//! Document command handlers

use crate::commands::Cmd;
use crate::error::{EditOutcome, MosaicError};
use crate::messages::CanvasMsg;
use crate::model::{AppModel, TileId};

/// Handle document commands
///
/// Commands that change tiles are rejected while a gesture is active so the
/// gesture's press-time state stays valid.
pub fn update_canvas(model: &mut AppModel, msg: CanvasMsg) -> Option<Cmd> {
    if !model.interaction.mode.is_idle() && changes_tiles(&msg) {
        return Some(MosaicError::GestureInProgress.into());
    }
    match apply(model, msg) {
        Ok(cmd) => cmd,
        Err(e) => Some(e.into()),
    }
}

fn changes_tiles(msg: &CanvasMsg) -> bool {
    !matches!(
        msg,
        CanvasMsg::Select(_) | CanvasMsg::SetScale(_) | CanvasMsg::Zoom { .. }
    )
}

fn apply(model: &mut AppModel, msg: CanvasMsg) -> Result<Option<Cmd>, MosaicError> {
    let canvas = &mut model.canvas;
    match msg {
        CanvasMsg::AddTile { raster, origin } => {
            canvas.add_tile(raster, origin);
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::RemoveTile(id) => {
            remove(model, id)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::DeleteSelected => match canvas.selected() {
            Some(id) => {
                remove(model, id)?;
                Ok(Some(Cmd::Redraw))
            }
            None => Ok(None),
        },

        CanvasMsg::Select(id) => {
            canvas.select(id)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::SetScale(scale) => {
            canvas.set_scale(scale)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::Zoom { steps } => {
            canvas.zoom_by(steps, model.config.zoom_step)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::ZoomToFit => {
            let (w, h) = model.viewport;
            canvas.zoom_to_fit(w, h)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::MoveTileTo { tile, point } => {
            canvas.move_tile_to(tile, point)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::MoveTileBy { tile, dx, dy } => {
            canvas.move_tile_by(tile, dx, dy)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::ResizeTileTo { tile, width } => {
            canvas.resize_tile_to(tile, width)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::ScaleTile { tile, factor } => {
            canvas.scale_tile(tile, factor)?;
            Ok(Some(Cmd::Redraw))
        }

        CanvasMsg::CropTile { tile, rect } => {
            let outcome = canvas.crop_tile(tile, rect)?;
            Ok(after_edit(model, tile, outcome))
        }

        CanvasMsg::SplitTile { tile, rows, cols } => {
            let outcome = canvas.split_tile(tile, rows, cols)?;
            Ok(after_edit(model, tile, outcome))
        }

        CanvasMsg::SplitTileAtLine {
            tile,
            axis,
            position,
        } => {
            let outcome = canvas.split_tile_at_line(tile, axis, position)?;
            Ok(after_edit(model, tile, outcome))
        }

        CanvasMsg::BringToFront(id) => Ok(canvas.bring_to_front(id)?.then_some(Cmd::Redraw)),
        CanvasMsg::SendToBack(id) => Ok(canvas.send_to_back(id)?.then_some(Cmd::Redraw)),
        CanvasMsg::MoveForward(id) => Ok(canvas.move_forward(id)?.then_some(Cmd::Redraw)),
        CanvasMsg::MoveBackward(id) => Ok(canvas.move_backward(id)?.then_some(Cmd::Redraw)),
    }
}

fn remove(model: &mut AppModel, id: TileId) -> Result<(), MosaicError> {
    model.canvas.remove_tile(id)?;
    model.interaction.forget_tile(id);
    Ok(())
}

/// Redraw after an applied crop/split; a degenerate edit changes nothing.
///
/// Armed tools and pending prompts for the old tile are dropped because its
/// raster (or the tile itself) is gone.
pub(super) fn after_edit<T>(
    model: &mut AppModel,
    tile: TileId,
    outcome: EditOutcome<T>,
) -> Option<Cmd> {
    match outcome {
        EditOutcome::Applied(_) => {
            model.interaction.forget_tile(tile);
            Some(Cmd::Redraw)
        }
        EditOutcome::Unchanged(reason) => {
            tracing::debug!("Edit on tile {} left it unchanged: {}", tile.0, reason);
            None
        }
    }
}
