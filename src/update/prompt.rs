//! Confirmation prompt answers (commit or cancel a pending crop/split)

use crate::commands::Cmd;
use crate::error::MosaicError;
use crate::messages::PromptMsg;
use crate::model::{AppModel, PendingEdit};

use super::canvas::after_edit;

/// Handle the host's answer to a `ConfirmCrop`, `ConfirmSplitLine` or
/// `RequestGridSize` prompt
pub fn update_prompt(model: &mut AppModel, msg: PromptMsg) -> Option<Cmd> {
    match apply(model, msg) {
        Ok(cmd) => cmd,
        Err(e) => Some(e.into()),
    }
}

fn apply(model: &mut AppModel, msg: PromptMsg) -> Result<Option<Cmd>, MosaicError> {
    match msg {
        PromptMsg::Cancel => {
            let Some(pending) = model.interaction.pending.take() else {
                return Ok(None);
            };
            tracing::debug!("Cancelled {:?}", pending);
            model.interaction.tool = None;
            Ok(Some(Cmd::Redraw))
        }

        PromptMsg::Confirm => match model.interaction.pending {
            None => Ok(None),
            Some(PendingEdit::SplitGrid { tile }) => {
                tracing::warn!("Grid split of tile {} needs rows and columns", tile.0);
                Ok(None)
            }
            Some(PendingEdit::Crop { tile, raster_rect }) => {
                model.interaction.pending = None;
                model.interaction.tool = None;
                let outcome = model.canvas.crop_tile(tile, raster_rect)?;
                Ok(after_edit(model, tile, outcome).or(Some(Cmd::Redraw)))
            }
            Some(PendingEdit::SplitLine {
                tile,
                axis,
                position,
            }) => {
                model.interaction.pending = None;
                model.interaction.tool = None;
                let outcome = model.canvas.split_tile_at_line(tile, axis, position)?;
                Ok(after_edit(model, tile, outcome).or(Some(Cmd::Redraw)))
            }
        },

        PromptMsg::ConfirmGridSplit { rows, cols } => {
            let Some(PendingEdit::SplitGrid { tile }) = model.interaction.pending else {
                return Ok(None);
            };
            // On bad input the prompt stays pending so the host can ask again
            let (rows, cols) = parse_partition_count(&rows, &cols)?;
            model.interaction.pending = None;
            model.interaction.tool = None;
            let outcome = model.canvas.split_tile(tile, rows, cols)?;
            Ok(after_edit(model, tile, outcome).or(Some(Cmd::Redraw)))
        }
    }
}

/// Parse user-typed grid dimensions; both must be whole numbers ≥ 1
pub fn parse_partition_count(rows: &str, cols: &str) -> Result<(u32, u32), MosaicError> {
    let parse = |s: &str| s.trim().parse::<u32>().ok().filter(|&n| n > 0);
    match (parse(rows), parse(cols)) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(MosaicError::InvalidPartitionCount {
            rows: rows.to_string(),
            cols: cols.to_string(),
        }),
    }
}
