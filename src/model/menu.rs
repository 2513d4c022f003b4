//! Context menu model
//!
//! The host renders these items and sends the message returned by
//! [`MenuAction::message`] when one is chosen. Items are enabled only for the
//! selected tile.

use crate::geometry::SplitAxis;
use crate::messages::{CanvasMsg, Msg, ToolMsg};

use super::tile::TileId;

/// An entry in a tile's context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SplitHorizontal,
    SplitVertical,
    SplitGrid,
    Crop,
    Delete,
    BringToFront,
    SendToBack,
    MoveForward,
    MoveBackward,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::SplitHorizontal => "Horizontal Split",
            MenuAction::SplitVertical => "Vertical Split",
            MenuAction::SplitGrid => "Split into Grid…",
            MenuAction::Crop => "Crop Image",
            MenuAction::Delete => "Delete Image",
            MenuAction::BringToFront => "Bring to Front",
            MenuAction::SendToBack => "Send to Back",
            MenuAction::MoveForward => "Move Forward",
            MenuAction::MoveBackward => "Move Backward",
        }
    }

    /// The message that performs this action on `tile`
    pub fn message(&self, tile: TileId) -> Msg {
        match self {
            MenuAction::SplitHorizontal => {
                Msg::Tool(ToolMsg::EnterLineSplitMode(tile, SplitAxis::Horizontal))
            }
            MenuAction::SplitVertical => {
                Msg::Tool(ToolMsg::EnterLineSplitMode(tile, SplitAxis::Vertical))
            }
            MenuAction::SplitGrid => Msg::Tool(ToolMsg::EnterGridSplitMode(tile)),
            MenuAction::Crop => Msg::Tool(ToolMsg::EnterCropMode(tile)),
            MenuAction::Delete => Msg::Canvas(CanvasMsg::RemoveTile(tile)),
            MenuAction::BringToFront => Msg::Canvas(CanvasMsg::BringToFront(tile)),
            MenuAction::SendToBack => Msg::Canvas(CanvasMsg::SendToBack(tile)),
            MenuAction::MoveForward => Msg::Canvas(CanvasMsg::MoveForward(tile)),
            MenuAction::MoveBackward => Msg::Canvas(CanvasMsg::MoveBackward(tile)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub action: MenuAction,
    pub enabled: bool,
}

/// Menu contents for one tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuState {
    pub tile: TileId,
    pub items: Vec<MenuItem>,
}

impl ContextMenuState {
    /// Build the menu for `tile`. The crop entry is omitted while crop mode
    /// is already armed on it.
    pub fn for_tile(tile: TileId, selected: bool, crop_armed: bool) -> Self {
        let actions = [
            MenuAction::SplitHorizontal,
            MenuAction::SplitVertical,
            MenuAction::SplitGrid,
            MenuAction::Crop,
            MenuAction::Delete,
            MenuAction::BringToFront,
            MenuAction::SendToBack,
            MenuAction::MoveForward,
            MenuAction::MoveBackward,
        ];
        let items = actions
            .into_iter()
            .filter(|a| !(crop_armed && *a == MenuAction::Crop))
            .map(|action| MenuItem {
                action,
                enabled: selected,
            })
            .collect();
        Self { tile, items }
    }

    pub fn is_enabled(&self, action: MenuAction) -> bool {
        self.items
            .iter()
            .any(|item| item.action == action && item.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_disabled_for_unselected_tile() {
        let menu = ContextMenuState::for_tile(TileId(1), false, false);
        assert_eq!(menu.items.len(), 9);
        assert!(!menu.is_enabled(MenuAction::Delete));
    }

    #[test]
    fn test_crop_entry_hidden_while_armed() {
        let menu = ContextMenuState::for_tile(TileId(1), true, true);
        assert!(menu.items.iter().all(|item| item.action != MenuAction::Crop));
        assert!(menu.is_enabled(MenuAction::SplitGrid));
    }

    #[test]
    fn test_actions_map_to_messages() {
        let tile = TileId(5);
        assert_eq!(MenuAction::Crop.label(), "Crop Image");
        assert!(matches!(
            MenuAction::SplitVertical.message(tile),
            Msg::Tool(ToolMsg::EnterLineSplitMode(t, SplitAxis::Vertical)) if t == tile
        ));
        assert!(matches!(
            MenuAction::Delete.message(tile),
            Msg::Canvas(CanvasMsg::RemoveTile(t)) if t == tile
        ));
    }
}
