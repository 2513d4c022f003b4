//! App message handlers (viewport, export)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ViewportResized { width, height } => {
            tracing::debug!("Viewport resized to {}x{}", width, height);
            model.viewport = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::Export { path } => match model.canvas.flatten() {
            Ok(raster) => Some(Cmd::SaveImage { path, raster }),
            Err(e) => Some(e.into()),
        },
    }
}
