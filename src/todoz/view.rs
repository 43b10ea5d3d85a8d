//! # Render Projection
//!
//! [`project`] turns the list (plus any drag in flight) into a [`View`]: one
//! [`Row`] per item, each carrying the actions the row offers. It holds no
//! state and never persists anything, so calling it twice on the same input
//! yields equal views.
//!
//! UI clients consume the `View` and report back [`UiEvent`](crate::events::UiEvent)s
//! naming a row id and an [`ActionKind`].

use crate::drag::DragGesture;
use crate::events::ActionKind;
use crate::model::{Item, ItemId, TodoList};
use serde::Serialize;

const DISPLAY_ACTIONS: [ActionKind; 3] = [ActionKind::Toggle, ActionKind::Edit, ActionKind::Delete];
const EDIT_ACTIONS: [ActionKind; 1] = [ActionKind::SaveEdit];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub rows: Vec<Row>,
}

impl View {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row ids top to bottom.
    pub fn order(&self) -> Vec<ItemId> {
        self.rows.iter().map(Row::id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    Display {
        id: ItemId,
        text: String,
        completed: bool,
        /// This row is the one being dragged.
        dragging: bool,
        /// This row is highlighted as the drop target.
        drag_over: bool,
        draggable: bool,
        actions: Vec<ActionKind>,
    },
    Edit {
        id: ItemId,
        /// Pre-filled value of the edit field.
        value: String,
        draggable: bool,
        actions: Vec<ActionKind>,
    },
}

impl Row {
    pub fn id(&self) -> ItemId {
        match self {
            Row::Display { id, .. } | Row::Edit { id, .. } => *id,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Row::Edit { .. })
    }
}

pub fn project(list: &TodoList, drag: &DragGesture) -> View {
    let ordered: Vec<&Item> = match drag.preview() {
        Some(preview) => preview.iter().filter_map(|id| list.get(*id)).collect(),
        None => list.items().iter().collect(),
    };

    let rows = ordered
        .into_iter()
        .map(|item| project_item(item, drag))
        .collect();
    View { rows }
}

fn project_item(item: &Item, drag: &DragGesture) -> Row {
    if item.editing {
        return Row::Edit {
            id: item.id,
            value: item.text.clone(),
            draggable: true,
            actions: EDIT_ACTIONS.to_vec(),
        };
    }
    Row::Display {
        id: item.id,
        text: item.text.clone(),
        completed: item.completed,
        dragging: drag.dragged() == Some(item.id),
        drag_over: drag.hovered() == Some(item.id),
        draggable: true,
        actions: DISPLAY_ACTIONS.to_vec(),
    }
}
