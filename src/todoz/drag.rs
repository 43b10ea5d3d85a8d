//! # Drag Reorder Gesture
//!
//! A drag moves rows around in a *preview* order while the list itself stays
//! untouched. Only when the gesture ends is the preview committed, through the
//! controller's reorder.
//!
//! ```text
//!   Idle ──start(id)──▶ Dragging ──over(id)──▶ Dragging
//!    ▲                     │
//!    └──────── end() ──────┘   (returns the preview order to commit)
//! ```
//!
//! While dragging, hovering row `B` with dragged row `A` compares the positions
//! of `A` and `B` in the **list model**, not on screen: if `B` comes after `A`
//! in the list, `A` is placed right after `B` in the preview, otherwise right
//! before it. There is no cancel: ending the gesture anywhere commits whatever
//! preview resulted.

use crate::model::{ItemId, TodoList};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging(DragState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    pub dragged: ItemId,
    /// Row currently highlighted as a drop target.
    pub hovered: Option<ItemId>,
    /// Row order as currently previewed.
    pub preview: Vec<ItemId>,
}

impl DragGesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging(_))
    }

    pub fn dragged(&self) -> Option<ItemId> {
        match self {
            DragGesture::Dragging(state) => Some(state.dragged),
            DragGesture::Idle => None,
        }
    }

    pub fn hovered(&self) -> Option<ItemId> {
        match self {
            DragGesture::Dragging(state) => state.hovered,
            DragGesture::Idle => None,
        }
    }

    pub fn preview(&self) -> Option<&[ItemId]> {
        match self {
            DragGesture::Dragging(state) => Some(&state.preview),
            DragGesture::Idle => None,
        }
    }

    /// Starts dragging `id`. Returns false (and stays put) if `id` is not in
    /// the list.
    pub fn start(&mut self, list: &TodoList, id: ItemId) -> bool {
        if !list.contains(id) {
            return false;
        }
        *self = DragGesture::Dragging(DragState {
            dragged: id,
            hovered: None,
            preview: list.ids(),
        });
        true
    }

    /// Moves the dragged row next to `over` in the preview. Returns true when
    /// the preview changed.
    pub fn over(&mut self, list: &TodoList, over: ItemId) -> bool {
        let DragGesture::Dragging(state) = self else {
            return false;
        };
        if over == state.dragged {
            return false;
        }
        let (Some(dragged_idx), Some(over_idx)) = (list.position(state.dragged), list.position(over))
        else {
            return false;
        };
        let Some(from) = state.preview.iter().position(|id| *id == state.dragged) else {
            return false;
        };

        let before = state.preview.clone();
        state.preview.remove(from);
        let Some(target) = state.preview.iter().position(|id| *id == over) else {
            state.preview = before;
            return false;
        };
        let insert_at = if over_idx > dragged_idx {
            target + 1
        } else {
            target
        };
        state.preview.insert(insert_at, state.dragged);
        state.preview != before
    }

    pub fn enter(&mut self, id: ItemId) {
        if let DragGesture::Dragging(state) = self {
            if id != state.dragged {
                state.hovered = Some(id);
            }
        }
    }

    pub fn leave(&mut self, id: ItemId) {
        if let DragGesture::Dragging(state) = self {
            if state.hovered == Some(id) {
                state.hovered = None;
            }
        }
    }

    /// Ends the gesture, clearing all markers. Returns the preview order to
    /// commit, or `None` if no drag was in progress.
    pub fn end(&mut self) -> Option<Vec<ItemId>> {
        match std::mem::take(self) {
            DragGesture::Dragging(state) => Some(state.preview),
            DragGesture::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Item;

    fn list(n: i64) -> TodoList {
        TodoList::from_items(
            (1..=n)
                .map(|i| Item::new(ItemId(i), format!("item {}", i)))
                .collect(),
        )
        .unwrap()
    }

    fn ids(raw: &[i64]) -> Vec<ItemId> {
        raw.iter().map(|i| ItemId(*i)).collect()
    }

    #[test]
    fn start_requires_known_id() {
        let list = list(2);
        let mut drag = DragGesture::default();
        assert!(!drag.start(&list, ItemId(9)));
        assert!(!drag.is_dragging());
        assert!(drag.start(&list, ItemId(1)));
        assert_eq!(drag.dragged(), Some(ItemId(1)));
        assert_eq!(drag.preview().unwrap(), ids(&[1, 2]).as_slice());
    }

    #[test]
    fn dragging_down_places_after_hovered_row() {
        let list = list(4);
        let mut drag = DragGesture::default();
        drag.start(&list, ItemId(1));

        assert!(drag.over(&list, ItemId(3)));
        assert_eq!(drag.end().unwrap(), ids(&[2, 3, 1, 4]));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn dragging_up_places_before_hovered_row() {
        let list = list(4);
        let mut drag = DragGesture::default();
        drag.start(&list, ItemId(4));

        drag.over(&list, ItemId(2));
        assert_eq!(drag.end().unwrap(), ids(&[1, 4, 2, 3]));
    }

    #[test]
    fn direction_follows_model_index_not_preview() {
        // After moving 1 below 3 in the preview, hovering 2 still counts as
        // "after" because 2 follows 1 in the model.
        let list = list(4);
        let mut drag = DragGesture::default();
        drag.start(&list, ItemId(1));
        drag.over(&list, ItemId(3));
        drag.over(&list, ItemId(2));
        assert_eq!(drag.preview().unwrap(), ids(&[2, 1, 3, 4]).as_slice());
    }

    #[test]
    fn hovering_self_or_while_idle_changes_nothing() {
        let list = list(3);
        let mut drag = DragGesture::default();
        assert!(!drag.over(&list, ItemId(2)));

        drag.start(&list, ItemId(2));
        assert!(!drag.over(&list, ItemId(2)));
        assert_eq!(drag.end().unwrap(), ids(&[1, 2, 3]));
        assert_eq!(drag.end(), None);
    }

    #[test]
    fn enter_and_leave_track_hover_marker() {
        let list = list(3);
        let mut drag = DragGesture::default();
        drag.start(&list, ItemId(1));

        drag.enter(ItemId(1));
        assert_eq!(drag.hovered(), None);
        drag.enter(ItemId(3));
        assert_eq!(drag.hovered(), Some(ItemId(3)));
        drag.leave(ItemId(2));
        assert_eq!(drag.hovered(), Some(ItemId(3)));
        drag.leave(ItemId(3));
        assert_eq!(drag.hovered(), None);
    }
}
