//! Update functions for the Elm-style architecture
//!
//! All state transitions flow through `update()`, which dispatches to
//! per-area handlers.

mod app;
mod canvas;
mod gesture;
mod prompt;
mod tool;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use canvas::update_canvas;
pub use gesture::update_gesture;
pub use prompt::{parse_partition_count, update_prompt};
pub use tool::update_tool;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, wraps the update with tracing instrumentation
/// and checks the canvas invariants afterwards.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Apply a sequence of messages, collecting every non-empty command
pub fn update_all<I>(model: &mut AppModel, msgs: I) -> Vec<Cmd>
where
    I: IntoIterator<Item = Msg>,
{
    msgs.into_iter()
        .filter_map(|msg| update(model, msg))
        .collect()
}

fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Canvas(m) => canvas::update_canvas(model, m),
        Msg::Gesture(m) => gesture::update_gesture(model, m),
        Msg::Tool(m) => tool::update_tool(model, m),
        Msg::Prompt(m) => prompt::update_prompt(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Drag events are logged at trace level; they arrive at pointer rate.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::GestureMsg;

    let is_noisy = matches!(&msg, Msg::Gesture(GestureMsg::Drag { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if is_noisy {
        tracing::trace!(target: "message", msg = %msg_name, "processing");
    } else {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let mode_before = model.interaction.mode;
    let result = update_inner(model, msg);

    if !is_noisy && model.interaction.mode != mode_before {
        debug!(
            target: "interaction",
            before = ?mode_before,
            after = ?model.interaction.mode,
            "mode changed"
        );
    }

    model.canvas.assert_invariants(&msg_name);
    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Canvas::SetScale(0.5)`
/// - `Gesture::Release { point: Point { x: 3, y: 4 } }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Canvas(m) => format!("Canvas::{:?}", m),
        Msg::Gesture(m) => format!("Gesture::{:?}", m),
        Msg::Tool(m) => format!("Tool::{:?}", m),
        Msg::Prompt(m) => format!("Prompt::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
