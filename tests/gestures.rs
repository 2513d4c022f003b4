//! Gesture state machine tests
//!
//! Drives press/drag/release sequences through `update()` the way a host
//! would, resolving the tile and handle under the pointer first.

mod common;

use common::{
    drag, drag_gesture, leaves, model_with_tiles, press, press_with, release, test_model,
    unsnapped_model,
};
use mosaic::commands::Cmd;
use mosaic::error::MosaicError;
use mosaic::geometry::{Point, Rect, SplitAxis};
use mosaic::messages::{CanvasMsg, GestureMsg, Msg, PointerButton, PromptMsg, ToolMsg};
use mosaic::model::{ArmedTool, InteractionMode, MenuAction, PendingEdit};
use mosaic::update::update;

// ============================================================================
// Move
// ============================================================================

#[test]
fn test_drag_moves_tile() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 100)]);
    press(&mut model, Point::new(50, 50));
    assert!(matches!(model.interaction.mode, InteractionMode::Moving(_)));

    drag(&mut model, Point::new(70, 60));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(20, 10, 100, 100)));

    let cmd = release(&mut model, Point::new(80, 70));
    assert!(cmd.unwrap().needs_redraw());
    assert!(model.interaction.mode.is_idle());
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(30, 20, 100, 100)));

    // Further drags after release do nothing
    assert!(drag(&mut model, Point::new(300, 300)).is_none());
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(30, 20, 100, 100)));
}

#[test]
fn test_drag_round_trip_at_scale() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(13, 7, 40, 40)]);
    model.canvas.set_scale(2.0).unwrap();
    // View bounds are (26, 14, 80, 80)
    drag_gesture(&mut model, Point::new(40, 40), Point::new(40 + 2 * 9, 40 - 2 * 5));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(22, 2, 40, 40)));
}

#[test]
fn test_drag_snaps_to_neighbour() {
    let (mut model, ids) = model_with_tiles(
        test_model(),
        &[Rect::new(0, 0, 100, 100), Rect::new(200, 0, 100, 100)],
    );
    // Grab b 50px from its left edge and drop its left edge at x=98
    drag_gesture(&mut model, Point::new(250, 50), Point::new(148, 50));
    assert_eq!(model.canvas.document_bounds(ids[1]), Some(Rect::new(100, 0, 100, 100)));
}

#[test]
fn test_press_selects_tile() {
    let (mut model, ids) = model_with_tiles(
        unsnapped_model(),
        &[Rect::new(0, 0, 50, 50), Rect::new(100, 0, 50, 50)],
    );
    assert_eq!(model.canvas.selected(), Some(ids[1]));
    press(&mut model, Point::new(25, 25));
    release(&mut model, Point::new(25, 25));
    assert_eq!(model.canvas.selected(), Some(ids[0]));

    press(&mut model, Point::new(400, 400));
    assert_eq!(model.canvas.selected(), None);
}

#[test]
fn test_cancel_move_restores_bounds() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 100)]);
    press(&mut model, Point::new(50, 50));
    drag(&mut model, Point::new(90, 95));
    assert_ne!(model.canvas.document_bounds(ids[0]), Some(Rect::new(0, 0, 100, 100)));

    update(&mut model, Msg::Gesture(GestureMsg::Cancel));
    assert!(model.interaction.mode.is_idle());
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(0, 0, 100, 100)));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_from_bottom_right_handle() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 50)]);
    press(&mut model, Point::new(95, 45));
    assert!(matches!(model.interaction.mode, InteractionMode::Resizing(_)));

    // Widening alone can't break the aspect ratio
    drag(&mut model, Point::new(145, 45));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(0, 0, 100, 50)));

    drag(&mut model, Point::new(145, 70));
    release(&mut model, Point::new(145, 70));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(0, 0, 150, 75)));
}

#[test]
fn test_resize_from_top_left_keeps_bottom_right() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 50)]);
    drag_gesture(&mut model, Point::new(2, 2), Point::new(-48, -23));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(-50, -25, 150, 75)));
}

#[test]
fn test_cancel_resize_restores_bounds() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 50)]);
    press(&mut model, Point::new(95, 45));
    drag(&mut model, Point::new(300, 300));
    update(&mut model, Msg::Gesture(GestureMsg::Cancel));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(0, 0, 100, 50)));
}

#[test]
fn test_resize_release_keeps_last_drag() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 50)]);
    press(&mut model, Point::new(95, 45));
    drag(&mut model, Point::new(195, 95));
    let previewed = model.canvas.document_bounds(ids[0]);
    assert_eq!(previewed, Some(Rect::new(0, 0, 200, 100)));

    assert!(release(&mut model, Point::new(195, 95)).unwrap().needs_redraw());
    assert!(model.interaction.mode.is_idle());
    assert_eq!(model.canvas.document_bounds(ids[0]), previewed);

    // The released size sticks; later pointer motion is not a resize
    assert!(drag(&mut model, Point::new(20, 20)).is_none());
    update(&mut model, Msg::Gesture(GestureMsg::Cancel));
    assert_eq!(model.canvas.document_bounds(ids[0]), previewed);
}

#[test]
fn test_commands_rejected_mid_gesture() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 50)]);
    press(&mut model, Point::new(95, 45));
    let cmd = update(&mut model, Msg::Canvas(CanvasMsg::RemoveTile(ids[0])));
    assert!(matches!(
        cmd.as_ref().and_then(Cmd::rejection),
        Some(MosaicError::GestureInProgress)
    ));
    assert_eq!(model.canvas.len(), 1);
    assert!(matches!(model.interaction.mode, InteractionMode::Resizing(_)));
}

// ============================================================================
// Context menu
// ============================================================================

#[test]
fn test_secondary_press_shows_menu_for_selected_tile() {
    let (mut model, ids) = model_with_tiles(
        unsnapped_model(),
        &[Rect::new(0, 0, 50, 50), Rect::new(100, 0, 50, 50)],
    );
    let cmds = leaves(press_with(&mut model, Point::new(10, 10), PointerButton::Secondary));
    assert_eq!(model.canvas.selected(), Some(ids[0]));
    assert!(model.interaction.mode.is_idle());

    let menu = cmds
        .iter()
        .find_map(|c| match c {
            Cmd::ShowContextMenu { point, menu } => Some((*point, menu.clone())),
            _ => None,
        })
        .expect("context menu");
    assert_eq!(menu.0, Point::new(10, 10));
    assert_eq!(menu.1.tile, ids[0]);
    assert_eq!(menu.1.items.len(), 9);
    assert!(menu.1.items.iter().all(|item| item.enabled));
}

#[test]
fn test_secondary_press_on_empty_space_does_nothing() {
    let mut model = unsnapped_model();
    assert!(press_with(&mut model, Point::new(10, 10), PointerButton::Secondary).is_none());
}

#[test]
fn test_menu_hides_crop_while_cropping() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 50, 50)]);
    update(&mut model, MenuAction::Crop.message(ids[0]));
    let menu = model.context_menu(ids[0]);
    assert!(menu.items.iter().all(|item| item.action != MenuAction::Crop));
    assert!(menu.is_enabled(MenuAction::Delete));
}

#[test]
fn test_menu_disabled_for_unselected_tile() {
    let (mut model, ids) = model_with_tiles(
        unsnapped_model(),
        &[Rect::new(0, 0, 50, 50), Rect::new(100, 0, 50, 50)],
    );
    let menu = model.context_menu(ids[0]);
    assert!(menu.items.iter().all(|item| !item.enabled));
    update(&mut model, Msg::Canvas(CanvasMsg::Select(Some(ids[0]))));
    assert!(model.context_menu(ids[0]).is_enabled(MenuAction::BringToFront));
}

#[test]
fn test_menu_actions_dispatch() {
    let (mut model, ids) = model_with_tiles(
        unsnapped_model(),
        &[Rect::new(0, 0, 50, 50), Rect::new(100, 0, 50, 50)],
    );
    update(&mut model, MenuAction::BringToFront.message(ids[0]));
    assert_eq!(model.canvas.tile_ids(), vec![ids[0], ids[1]]);
    update(&mut model, MenuAction::Delete.message(ids[0]));
    assert_eq!(model.canvas.tile_ids(), vec![ids[1]]);
}

// ============================================================================
// Crop
// ============================================================================

#[test]
fn test_crop_gesture_confirmed() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 200, 200)]);
    update(&mut model, Msg::Tool(ToolMsg::EnterCropMode(ids[0])));
    assert_eq!(model.interaction.tool, Some(ArmedTool::Crop { tile: ids[0] }));

    press(&mut model, Point::new(20, 20));
    assert!(matches!(model.interaction.mode, InteractionMode::CroppingRect(_)));
    drag(&mut model, Point::new(90, 50));
    let cmds = leaves(release(&mut model, Point::new(120, 120)));

    let expected = Rect::new(20, 20, 100, 100);
    assert!(cmds.iter().any(|c| matches!(
        c,
        Cmd::ConfirmCrop { tile, raster_rect } if *tile == ids[0] && *raster_rect == expected
    )));
    assert_eq!(
        model.interaction.pending,
        Some(PendingEdit::Crop {
            tile: ids[0],
            raster_rect: expected
        })
    );
    // Nothing changes until the host confirms
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(0, 0, 200, 200)));

    update(&mut model, Msg::Prompt(PromptMsg::Confirm));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(expected));
    assert!(model.interaction.tool.is_none());
    assert!(!model.interaction.is_busy());
}

#[test]
fn test_crop_gesture_at_half_scale() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 200, 200)]);
    model.canvas.set_scale(0.5).unwrap();
    update(&mut model, Msg::Tool(ToolMsg::EnterCropMode(ids[0])));
    drag_gesture(&mut model, Point::new(60, 60), Point::new(10, 10));
    update(&mut model, Msg::Prompt(PromptMsg::Confirm));

    let tile = model.canvas.tile(ids[0]).unwrap();
    assert_eq!(tile.bounds(), Rect::new(20, 20, 100, 100));
    assert_eq!(tile.raster().width(), 100);
}

#[test]
fn test_crop_gesture_cancelled() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 200, 200)]);
    update(&mut model, Msg::Tool(ToolMsg::EnterCropMode(ids[0])));
    drag_gesture(&mut model, Point::new(20, 20), Point::new(120, 120));

    // Presses are ignored while the prompt is open
    assert!(press(&mut model, Point::new(5, 5)).is_none());

    update(&mut model, Msg::Prompt(PromptMsg::Cancel));
    assert_eq!(model.canvas.document_bounds(ids[0]), Some(Rect::new(0, 0, 200, 200)));
    assert!(!model.interaction.is_busy());
    assert!(model.interaction.tool.is_none());
}

#[test]
fn test_empty_crop_rect_leaves_crop_mode() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 200, 200)]);
    update(&mut model, Msg::Tool(ToolMsg::EnterCropMode(ids[0])));
    press(&mut model, Point::new(20, 20));
    let cmds = leaves(release(&mut model, Point::new(20, 20)));
    assert!(!cmds.iter().any(|c| matches!(c, Cmd::ConfirmCrop { .. })));
    assert!(model.interaction.tool.is_none());
    assert!(model.interaction.pending.is_none());
}

#[test]
fn test_cancel_during_crop_drag() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 200, 200)]);
    update(&mut model, Msg::Tool(ToolMsg::EnterCropMode(ids[0])));
    press(&mut model, Point::new(20, 20));
    drag(&mut model, Point::new(60, 60));
    update(&mut model, Msg::Gesture(GestureMsg::Cancel));
    assert!(model.interaction.mode.is_idle());
    assert!(model.interaction.tool.is_none());
    assert_eq!(model.canvas.tile(ids[0]).unwrap().raster().width(), 200);
}

// ============================================================================
// Line split
// ============================================================================

#[test]
fn test_line_split_gesture() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 100)]);
    update(&mut model, MenuAction::SplitHorizontal.message(ids[0]));
    assert_eq!(
        model.interaction.tool,
        Some(ArmedTool::SplitLine {
            tile: ids[0],
            axis: SplitAxis::Horizontal,
            offset: 50
        })
    );

    press(&mut model, Point::new(50, 50));
    drag(&mut model, Point::new(50, 2));
    assert!(matches!(
        model.interaction.mode,
        InteractionMode::SplittingLine(s) if s.offset == 10
    ));

    let cmds = leaves(release(&mut model, Point::new(50, 40)));
    assert!(cmds.iter().any(|c| matches!(
        c,
        Cmd::ConfirmSplitLine { position: 40, axis: SplitAxis::Horizontal, .. }
    )));

    update(&mut model, Msg::Prompt(PromptMsg::Confirm));
    let bounds: Vec<_> = model.canvas.tiles().iter().map(|t| t.bounds()).collect();
    assert_eq!(bounds, vec![Rect::new(0, 0, 100, 40), Rect::new(0, 40, 100, 60)]);
    assert!(model.interaction.tool.is_none());
}

#[test]
fn test_line_press_away_from_line_starts_nothing() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 100)]);
    update(&mut model, MenuAction::SplitHorizontal.message(ids[0]));

    assert!(press(&mut model, Point::new(50, 12)).is_none());
    assert!(model.interaction.mode.is_idle());
    assert!(drag(&mut model, Point::new(50, 30)).is_none());
    let cmds = leaves(release(&mut model, Point::new(50, 30)));
    assert!(!cmds.iter().any(|c| matches!(c, Cmd::ConfirmSplitLine { .. })));
    assert!(model.interaction.pending.is_none());
    assert_eq!(
        model.interaction.tool,
        Some(ArmedTool::SplitLine {
            tile: ids[0],
            axis: SplitAxis::Horizontal,
            offset: 50
        })
    );
    assert_eq!(model.canvas.len(), 1);

    // Grabbing within a few pixels of the line still works
    press(&mut model, Point::new(50, 47));
    assert!(matches!(
        model.interaction.mode,
        InteractionMode::SplittingLine(s) if s.offset == 50
    ));
}

#[test]
fn test_vertical_line_split_at_double_scale() {
    let (mut model, _) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 100)]);
    model.canvas.set_scale(2.0).unwrap();
    let id = model.canvas.tile_ids()[0];
    update(&mut model, Msg::Tool(ToolMsg::EnterLineSplitMode(id, SplitAxis::Vertical)));
    drag_gesture(&mut model, Point::new(100, 100), Point::new(50, 100));
    update(&mut model, Msg::Prompt(PromptMsg::Confirm));

    let bounds: Vec<_> = model.canvas.tiles().iter().map(|t| t.bounds()).collect();
    assert_eq!(bounds, vec![Rect::new(0, 0, 25, 100), Rect::new(25, 0, 75, 100)]);
}

#[test]
fn test_disarm_drops_tool() {
    let (mut model, ids) = model_with_tiles(unsnapped_model(), &[Rect::new(0, 0, 100, 100)]);
    update(&mut model, Msg::Tool(ToolMsg::EnterGridSplitMode(ids[0])));
    update(&mut model, Msg::Tool(ToolMsg::Disarm));
    assert!(model.interaction.tool.is_none());
    // Back to plain moving
    press(&mut model, Point::new(50, 50));
    assert!(matches!(model.interaction.mode, InteractionMode::Moving(_)));
}
