//! Crop/split tool arming (from the context menu)

use crate::commands::Cmd;
use crate::error::MosaicError;
use crate::geometry::SplitAxis;
use crate::messages::ToolMsg;
use crate::model::interaction::clamp_line_offset;
use crate::model::{AppModel, ArmedTool, InteractionMode, TileId};

/// Handle tool messages
pub fn update_tool(model: &mut AppModel, msg: ToolMsg) -> Option<Cmd> {
    match msg {
        ToolMsg::Disarm => {
            let had_tool = model.interaction.tool.take().is_some();
            if matches!(
                model.interaction.mode,
                InteractionMode::CroppingRect(_)
                    | InteractionMode::SplittingRect(_)
                    | InteractionMode::SplittingLine(_)
            ) {
                model.interaction.mode = InteractionMode::None;
            }
            had_tool.then_some(Cmd::Redraw)
        }
        ToolMsg::EnterCropMode(tile) => arm(model, tile, |_| ArmedTool::Crop { tile }),
        ToolMsg::EnterGridSplitMode(tile) => arm(model, tile, |_| ArmedTool::SplitGrid { tile }),
        ToolMsg::EnterLineSplitMode(tile, axis) => arm(model, tile, |model| {
            let offset = model
                .canvas
                .view_bounds(tile)
                .map(|vb| {
                    let extent = match axis {
                        SplitAxis::Horizontal => vb.height,
                        SplitAxis::Vertical => vb.width,
                    };
                    clamp_line_offset(extent / 2, extent, model.config.split_line_margin)
                })
                .unwrap_or(0);
            ArmedTool::SplitLine { tile, axis, offset }
        }),
    }
}

/// Arm a tool on `tile`, which also becomes the selected tile
fn arm(
    model: &mut AppModel,
    tile: TileId,
    tool: impl FnOnce(&AppModel) -> ArmedTool,
) -> Option<Cmd> {
    if model.interaction.is_busy() {
        return Some(MosaicError::GestureInProgress.into());
    }
    if let Err(e) = model.canvas.select(Some(tile)) {
        return Some(e.into());
    }
    let armed = tool(model);
    tracing::debug!("Armed {:?}", armed);
    model.interaction.tool = Some(armed);
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::raster::Raster;

    #[test]
    fn test_line_split_starts_at_midpoint() {
        let mut model = AppModel::default();
        let id = model
            .canvas
            .add_tile(Raster::filled(80, 30, [9, 9, 9, 255]), Some(Point::ORIGIN));
        model.canvas.set_scale(2.0).unwrap();

        update_tool(&mut model, ToolMsg::EnterLineSplitMode(id, SplitAxis::Horizontal));
        assert_eq!(
            model.interaction.tool,
            Some(ArmedTool::SplitLine {
                tile: id,
                axis: SplitAxis::Horizontal,
                offset: 30,
            })
        );
    }

    #[test]
    fn test_arm_unknown_tile_is_rejected() {
        let mut model = AppModel::default();
        let cmd = update_tool(&mut model, ToolMsg::EnterCropMode(TileId(42)));
        assert!(matches!(
            cmd.as_ref().and_then(Cmd::rejection),
            Some(MosaicError::UnknownTile(TileId(42)))
        ));
        assert!(model.interaction.tool.is_none());
    }

    #[test]
    fn test_disarm_without_tool_is_noop() {
        let mut model = AppModel::default();
        assert!(update_tool(&mut model, ToolMsg::Disarm).is_none());
    }
}
