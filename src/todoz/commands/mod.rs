//! # Command Layer
//!
//! Pure list mutations. Each module takes the [`TodoList`](crate::model::TodoList)
//! by `&mut` and returns a [`CmdResult`] describing what happened. Nothing here
//! touches storage or rendering: the controller persists and projects after a
//! command reports `changed`.
//!
//! Lookups that find nothing and blank text are not errors. They leave the list
//! alone and add an `Info` message. The only domain error is a reorder whose ids
//! are not a permutation of the list.

use crate::model::{Item, ItemId};
use crate::view::View;

pub mod add;
pub mod delete;
pub mod edit;
pub mod reorder;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// True when the list was mutated and must be persisted.
    pub changed: bool,
    /// Items as they are after the command ran (removed items for deletes).
    pub affected_items: Vec<Item>,
    pub messages: Vec<CmdMessage>,
    /// The re-rendered view, filled in by the controller.
    pub view: View,
}

impl CmdResult {
    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Default::default()
        }
    }

    /// A result for a command that left the list alone.
    pub fn unchanged(reason: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::info(reason));
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_item(mut self, item: Item) -> Self {
        self.affected_items.push(item);
        self
    }

    /// Folds another result into this one, as when a command runs per row.
    pub fn merge(&mut self, other: CmdResult) {
        self.changed |= other.changed;
        self.affected_items.extend(other.affected_items);
        self.messages.extend(other.messages);
    }

    pub fn affected_ids(&self) -> Vec<ItemId> {
        self.affected_items.iter().map(|item| item.id).collect()
    }
}

pub(crate) fn not_found(id: ItemId) -> CmdResult {
    CmdResult::unchanged(format!("No item with id {}", id))
}
