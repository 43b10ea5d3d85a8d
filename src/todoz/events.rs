//! UI events and the input collaborator.
//!
//! A UI client translates whatever its toolkit delivers (key presses, clicks,
//! pointer drags) into one [`UiEvent`] and hands it to
//! [`ListController::dispatch`](crate::controller::ListController::dispatch).
//! Each gesture has exactly one variant, so each runs exactly one handler.

use crate::model::ItemId;
use serde::Serialize;
use std::fmt;

/// What a row-level trigger asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Toggle,
    Edit,
    Delete,
    SaveEdit,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Toggle => "toggle",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
            ActionKind::SaveEdit => "save",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The submit trigger fired for the main input field.
    Submit,
    /// A row action. `field` carries the edit field's value for `SaveEdit`.
    Action {
        id: ItemId,
        action: ActionKind,
        field: Option<String>,
    },
    DragStart(ItemId),
    DragOver(ItemId),
    DragEnter(ItemId),
    DragLeave(ItemId),
    DragEnd,
}

impl UiEvent {
    pub fn action(id: ItemId, action: ActionKind) -> Self {
        UiEvent::Action {
            id,
            action,
            field: None,
        }
    }

    pub fn save_edit(id: ItemId, text: impl Into<String>) -> Self {
        UiEvent::Action {
            id,
            action: ActionKind::SaveEdit,
            field: Some(text.into()),
        }
    }
}

/// Single-line text field feeding `Submit`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputField {
    pub value: String,
    pub focused: bool,
}

impl InputField {
    pub fn clear(&mut self) {
        self.value.clear();
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }
}
