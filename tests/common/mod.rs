//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use mosaic::commands::Cmd;
use mosaic::config::MosaicConfig;
use mosaic::geometry::{Point, Rect};
use mosaic::messages::{GestureMsg, Msg, PointerButton};
use mosaic::model::{AppModel, CanvasSettings, TileId};
use mosaic::raster::Raster;
use mosaic::update::update;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Solid-colour raster
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Raster {
    Raster::filled(width, height, rgba)
}

/// Raster whose pixel (x, y) is `[x, y, 0, 255]`, so sub-images can be identified
pub fn gradient(width: u32, height: u32) -> Raster {
    Raster::from_rgba(image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([x as u8, y as u8, 0, 255])
    }))
}

/// Model with default config (grid and edge snapping on)
pub fn test_model() -> AppModel {
    AppModel::new(MosaicConfig::default(), 800, 600)
}

/// Model with grid and edge snapping off
pub fn unsnapped_model() -> AppModel {
    let mut model = test_model();
    model.canvas.settings = CanvasSettings::without_snapping();
    model
}

/// Add one solid tile per rectangle, sized to the rectangle.
///
/// Tiles are added in order, so the last rectangle ends up frontmost.
pub fn model_with_tiles(mut model: AppModel, rects: &[Rect]) -> (AppModel, Vec<TileId>) {
    let ids = rects
        .iter()
        .map(|r| {
            model.canvas.add_tile(
                solid(r.width as u32, r.height as u32, RED),
                Some(Point::new(r.x, r.y)),
            )
        })
        .collect();
    (model, ids)
}

// ============================================================================
// Gesture helpers - resolve hits the way a host would
// ============================================================================

pub fn press(model: &mut AppModel, point: Point) -> Option<Cmd> {
    press_with(model, point, PointerButton::Primary)
}

pub fn press_with(model: &mut AppModel, point: Point, button: PointerButton) -> Option<Cmd> {
    let tile = model.canvas.tile_at(point);
    let handle = tile.and_then(|id| model.canvas.handle_at(id, point));
    update(
        model,
        Msg::Gesture(GestureMsg::Press {
            point,
            button,
            tile,
            handle,
        }),
    )
}

pub fn drag(model: &mut AppModel, point: Point) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::Drag { point }))
}

pub fn release(model: &mut AppModel, point: Point) -> Option<Cmd> {
    update(model, Msg::Gesture(GestureMsg::Release { point }))
}

/// Press at `from`, drag through the midpoint to `to` and release there
pub fn drag_gesture(model: &mut AppModel, from: Point, to: Point) -> Option<Cmd> {
    press(model, from);
    let mid = Point::new((from.x + to.x) / 2, (from.y + to.y) / 2);
    drag(model, mid);
    drag(model, to);
    release(model, to)
}

/// The leaf commands of an update result
pub fn leaves(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::into_vec).unwrap_or_default()
}

/// Assert two rectangles are within one unit of each other on every component
pub fn assert_rect_near(actual: Rect, expected: Rect) {
    let close = (actual.x - expected.x).abs() <= 1
        && (actual.y - expected.y).abs() <= 1
        && (actual.width - expected.width).abs() <= 1
        && (actual.height - expected.height).abs() <= 1;
    assert!(close, "expected ~{:?}, got {:?}", expected, actual);
}
