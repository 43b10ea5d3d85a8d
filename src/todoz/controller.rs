//! # List Controller
//!
//! [`ListController`] is the single owner of the list. Every mutation goes
//! through it, and every mutation is followed by the same two steps:
//!
//! 1. the whole list is serialized and written to the store under one key,
//! 2. a fresh [`View`] is projected and returned in the [`CmdResult`].
//!
//! The controller also owns the input field and the drag gesture, so a UI
//! client keeps no state of its own: it forwards [`UiEvent`]s to
//! [`ListController::dispatch`] and draws the returned view.
//!
//! ## Failure policy
//!
//! Blank text and unknown ids leave the list alone and produce an `Info`
//! message. A persisted value that cannot be parsed loads as an empty list. A
//! reorder that is not a permutation of the current ids fails with
//! [`TodozError::InvalidReorder`](crate::error::TodozError::InvalidReorder).
//! Store I/O failures are returned as errors; the in-memory list keeps the
//! mutation.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `ListController<FileStore>`
//! - Testing: `ListController<InMemoryStore>`

use crate::commands::{self, CmdMessage, CmdResult};
use crate::drag::DragGesture;
use crate::error::Result;
use crate::events::{ActionKind, InputField, UiEvent};
use crate::model::{IdGenerator, ItemId, TodoList};
use crate::store::KeyValueStore;
use crate::view::{self, View};
use tracing::{debug, warn};

pub struct ListController<S: KeyValueStore> {
    store: S,
    key: String,
    list: TodoList,
    ids: IdGenerator,
    drag: DragGesture,
    input: InputField,
}

impl<S: KeyValueStore> ListController<S> {
    /// Loads the list stored under `key`.
    ///
    /// A missing or malformed value yields an empty list. Only a failure to
    /// read from the store is returned as an error.
    pub fn load(store: S, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let list = match store.get(&key)? {
            None => {
                debug!(key = %key, "no stored list, starting empty");
                TodoList::new()
            }
            Some(raw) => TodoList::from_json(&raw).unwrap_or_else(|reason| {
                warn!(key = %key, %reason, "stored list is invalid, starting empty");
                TodoList::new()
            }),
        };
        let ids = IdGenerator::seeded_from(&list);
        debug!(key = %key, items = list.len(), "list loaded");

        Ok(Self {
            store,
            key,
            list,
            ids,
            drag: DragGesture::default(),
            input: InputField::default(),
        })
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn drag(&self) -> &DragGesture {
        &self.drag
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Projects the current list. Pure: persists nothing.
    pub fn render(&self) -> View {
        view::project(&self.list, &self.drag)
    }

    // --- Operations ---

    pub fn add(&mut self, text: &str) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.list, &mut self.ids, text)?;
        self.finish(result)
    }

    /// Adds the input field's value. The field is cleared and refocused only
    /// when an item was added; otherwise the text stays for correction.
    pub fn submit(&mut self) -> Result<CmdResult> {
        let text = self.input.value.clone();
        let result = self.add(&text)?;
        if result.changed {
            self.input.clear();
            self.input.focus();
        }
        Ok(result)
    }

    pub fn toggle(&mut self, id: ItemId) -> Result<CmdResult> {
        let result = commands::toggle::run(&mut self.list, id)?;
        self.finish(result)
    }

    pub fn delete(&mut self, id: ItemId) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.list, id)?;
        self.finish(result)
    }

    pub fn begin_edit(&mut self, id: ItemId) -> Result<CmdResult> {
        let result = commands::edit::begin(&mut self.list, id)?;
        self.finish(result)
    }

    pub fn save_edit(&mut self, id: ItemId, new_text: &str) -> Result<CmdResult> {
        let result = commands::edit::save(&mut self.list, id, new_text)?;
        self.finish(result)
    }

    pub fn reorder(&mut self, order: &[ItemId]) -> Result<CmdResult> {
        let result = commands::reorder::run(&mut self.list, order)?;
        self.finish(result)
    }

    // --- Drag gesture ---

    pub fn drag_start(&mut self, id: ItemId) -> Result<CmdResult> {
        if !self.drag.start(&self.list, id) {
            return self.finish(commands::not_found(id));
        }
        debug!(%id, "drag started");
        self.finish(CmdResult::default())
    }

    pub fn drag_over(&mut self, id: ItemId) -> Result<CmdResult> {
        if self.drag.over(&self.list, id) {
            debug!(over = %id, preview = ?self.drag.preview(), "drag preview moved");
        }
        self.finish(CmdResult::default())
    }

    pub fn drag_enter(&mut self, id: ItemId) -> Result<CmdResult> {
        self.drag.enter(id);
        self.finish(CmdResult::default())
    }

    pub fn drag_leave(&mut self, id: ItemId) -> Result<CmdResult> {
        self.drag.leave(id);
        self.finish(CmdResult::default())
    }

    /// Commits the previewed order. Drag markers are cleared even when the
    /// commit is rejected.
    pub fn drag_end(&mut self) -> Result<CmdResult> {
        match self.drag.end() {
            Some(order) => {
                debug!(order = ?order, "drag ended");
                self.reorder(&order)
            }
            None => self.finish(CmdResult::unchanged("No drag in progress")),
        }
    }

    /// Routes one UI event to its operation.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<CmdResult> {
        match event {
            UiEvent::Submit => self.submit(),
            UiEvent::Action { id, action, field } => match action {
                ActionKind::Toggle => self.toggle(id),
                ActionKind::Edit => self.begin_edit(id),
                ActionKind::Delete => self.delete(id),
                ActionKind::SaveEdit => self.save_edit(id, field.as_deref().unwrap_or("")),
            },
            UiEvent::DragStart(id) => self.drag_start(id),
            UiEvent::DragOver(id) => self.drag_over(id),
            UiEvent::DragEnter(id) => self.drag_enter(id),
            UiEvent::DragLeave(id) => self.drag_leave(id),
            UiEvent::DragEnd => self.drag_end(),
        }
    }

    fn finish(&mut self, mut result: CmdResult) -> Result<CmdResult> {
        if result.changed {
            if self.drag.is_dragging() {
                warn!("list changed during a drag, dropping the drag preview");
                self.drag = DragGesture::Idle;
                result.add_message(CmdMessage::warning("Drag cancelled: the list changed"));
            }
            self.persist()?;
        }
        result.view = self.render();
        Ok(result)
    }

    fn persist(&mut self) -> Result<()> {
        let json = self.list.to_json()?;
        self.store.set(&self.key, &json)?;
        debug!(key = %self.key, items = self.list.len(), "list persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::TodozError;
    use crate::store::memory::fixtures::{StoreFixture, KEY};
    use crate::store::memory::InMemoryStore;
    use crate::view::Row;

    fn empty() -> ListController<InMemoryStore> {
        ListController::load(InMemoryStore::new(), KEY).unwrap()
    }

    fn with_three() -> ListController<InMemoryStore> {
        let store = StoreFixture::new()
            .with_item(1, "one")
            .with_item(2, "two")
            .with_item(3, "three")
            .build();
        ListController::load(store, KEY).unwrap()
    }

    fn stored(ctl: &ListController<InMemoryStore>) -> TodoList {
        let raw = ctl.store().get(KEY).unwrap().expect("list was never written");
        TodoList::from_json(&raw).unwrap()
    }

    #[test]
    fn load_falls_back_to_empty_on_garbage() {
        for raw in ["not json", "null", "{\"id\":1}", r#"[{"id":1,"text":"  ","completed":false}]"#] {
            let store = StoreFixture::new().with_raw(raw).build();
            let ctl = ListController::load(store, KEY).unwrap();
            assert!(ctl.list().is_empty(), "expected empty list for {raw:?}");
        }
    }

    #[test]
    fn load_keeps_stored_order() {
        let ctl = with_three();
        assert_eq!(ctl.list().ids(), vec![ItemId(1), ItemId(2), ItemId(3)]);
    }

    #[test]
    fn persist_then_load_round_trips() {
        let mut ctl = empty();
        ctl.add("a").unwrap();
        ctl.add("b").unwrap();
        let id_b = ctl.list().items()[1].id;
        ctl.toggle(id_b).unwrap();
        let before = ctl.list().clone();

        let reloaded = ListController::load(ctl.into_store(), KEY).unwrap();
        assert_eq!(reloaded.list(), &before);
    }

    #[test]
    fn every_mutation_persists_once() {
        let mut ctl = with_three();
        ctl.toggle(ItemId(1)).unwrap();
        ctl.begin_edit(ItemId(2)).unwrap();
        ctl.save_edit(ItemId(2), "deux").unwrap();
        ctl.delete(ItemId(3)).unwrap();
        assert_eq!(ctl.store().write_count(), 4);
        assert_eq!(&stored(&ctl), ctl.list());
    }

    #[test]
    fn noops_do_not_write() {
        let mut ctl = with_three();
        ctl.add("   ").unwrap();
        ctl.toggle(ItemId(99)).unwrap();
        ctl.delete(ItemId(99)).unwrap();
        ctl.begin_edit(ItemId(99)).unwrap();
        ctl.save_edit(ItemId(1), "").unwrap();
        assert_eq!(ctl.store().write_count(), 0);
        assert_eq!(ctl.list().len(), 3);
    }

    #[test]
    fn submit_clears_input_only_on_success() {
        let mut ctl = empty();
        ctl.input_mut().value = "   ".to_string();
        ctl.dispatch(UiEvent::Submit).unwrap();
        assert_eq!(ctl.input().value, "   ");
        assert!(!ctl.input().focused);

        ctl.input_mut().value = "buy milk".to_string();
        let result = ctl.dispatch(UiEvent::Submit).unwrap();
        assert!(result.changed);
        assert_eq!(ctl.input().value, "");
        assert!(ctl.input().focused);
        assert_eq!(ctl.list().items()[0].text, "buy milk");
    }

    #[test]
    fn result_carries_fresh_view() {
        let mut ctl = with_three();
        let result = ctl.begin_edit(ItemId(2)).unwrap();
        assert!(result.view.rows[1].is_editing());
        assert_eq!(result.view, ctl.render());
    }

    #[test]
    fn dispatch_routes_row_actions() {
        let mut ctl = with_three();
        ctl.dispatch(UiEvent::action(ItemId(1), ActionKind::Toggle))
            .unwrap();
        ctl.dispatch(UiEvent::action(ItemId(2), ActionKind::Edit))
            .unwrap();
        ctl.dispatch(UiEvent::save_edit(ItemId(2), "renamed"))
            .unwrap();
        ctl.dispatch(UiEvent::action(ItemId(3), ActionKind::Delete))
            .unwrap();

        let items = ctl.list().items();
        assert_eq!(items.len(), 2);
        assert!(items[0].completed);
        assert_eq!(items[1].text, "renamed");
        assert!(!items[1].editing);
    }

    #[test]
    fn save_edit_without_field_value_stays_editing() {
        let mut ctl = with_three();
        ctl.begin_edit(ItemId(1)).unwrap();
        ctl.dispatch(UiEvent::Action {
            id: ItemId(1),
            action: ActionKind::SaveEdit,
            field: None,
        })
        .unwrap();
        assert!(ctl.list().get(ItemId(1)).unwrap().editing);
    }

    #[test]
    fn reorder_rejects_missing_ids_and_writes_nothing() {
        let mut ctl = with_three();
        let err = ctl.reorder(&[ItemId(3), ItemId(1)]).unwrap_err();
        assert!(matches!(err, TodozError::InvalidReorder(_)));
        assert_eq!(ctl.list().len(), 3);
        assert_eq!(ctl.store().write_count(), 0);
    }

    #[test]
    fn reorder_applies_and_persists() {
        let mut ctl = with_three();
        ctl.reorder(&[ItemId(3), ItemId(1), ItemId(2)]).unwrap();
        assert_eq!(stored(&ctl).ids(), vec![ItemId(3), ItemId(1), ItemId(2)]);
    }

    #[test]
    fn drag_gesture_commits_preview_on_end() {
        let mut ctl = with_three();
        ctl.dispatch(UiEvent::DragStart(ItemId(1))).unwrap();
        ctl.dispatch(UiEvent::DragEnter(ItemId(3))).unwrap();
        let during = ctl.dispatch(UiEvent::DragOver(ItemId(3))).unwrap();

        // Preview moves, model and store do not.
        assert_eq!(during.view.order(), vec![ItemId(2), ItemId(3), ItemId(1)]);
        assert_eq!(ctl.list().ids(), vec![ItemId(1), ItemId(2), ItemId(3)]);
        assert_eq!(ctl.store().write_count(), 0);
        assert!(matches!(
            during.view.rows[1],
            Row::Display { drag_over: true, .. }
        ));

        let done = ctl.dispatch(UiEvent::DragEnd).unwrap();
        assert!(done.changed);
        assert!(!ctl.drag().is_dragging());
        assert_eq!(ctl.list().ids(), vec![ItemId(2), ItemId(3), ItemId(1)]);
        assert_eq!(stored(&ctl).ids(), ctl.list().ids());
        assert!(done.view.rows.iter().all(|row| !matches!(
            row,
            Row::Display { dragging: true, .. } | Row::Display { drag_over: true, .. }
        )));
    }

    #[test]
    fn drag_end_without_moves_writes_nothing() {
        let mut ctl = with_three();
        ctl.drag_start(ItemId(2)).unwrap();
        let result = ctl.drag_end().unwrap();
        assert!(!result.changed);
        assert_eq!(ctl.store().write_count(), 0);

        let idle = ctl.drag_end().unwrap();
        assert!(!idle.changed);
    }

    #[test]
    fn drag_start_on_unknown_id_stays_idle() {
        let mut ctl = with_three();
        ctl.drag_start(ItemId(42)).unwrap();
        assert!(!ctl.drag().is_dragging());
    }

    #[test]
    fn mutation_during_drag_drops_preview() {
        let mut ctl = with_three();
        ctl.drag_start(ItemId(1)).unwrap();
        ctl.drag_over(ItemId(3)).unwrap();
        let result = ctl.delete(ItemId(2)).unwrap();

        assert!(!ctl.drag().is_dragging());
        assert_eq!(ctl.render().order(), vec![ItemId(1), ItemId(3)]);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn write_failure_is_reported() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut ctl = ListController::load(store, KEY).unwrap();
        assert!(matches!(ctl.add("x"), Err(TodozError::Store(_))));
    }

    #[test]
    fn add_add_delete_end_to_end() {
        let mut ctl = empty();
        ctl.add("a").unwrap();
        ctl.add("b").unwrap();
        let id_a = ctl.list().items()[0].id;
        ctl.delete(id_a).unwrap();

        let texts: Vec<&str> = ctl.list().items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["b"]);
        let persisted = stored(&ctl);
        assert_eq!(persisted.len(), 1);
        assert_eq!(persisted.items()[0].text, "b");
    }

    #[test]
    fn new_ids_follow_loaded_ids() {
        let store = StoreFixture::new().with_item(i64::MAX - 1, "far future").build();
        let mut ctl = ListController::load(store, KEY).unwrap();
        ctl.add("next").unwrap();
        assert_eq!(ctl.list().items()[1].id, ItemId(i64::MAX));
    }

    #[test]
    fn adding_after_max_id_terminates_with_fresh_ids() {
        let store = StoreFixture::new().with_item(i64::MAX, "far future").build();
        let mut ctl = ListController::load(store, KEY).unwrap();
        ctl.add("one").unwrap();
        ctl.add("two").unwrap();

        let ids = ctl.list().ids();
        assert_eq!(ids.len(), 3);
        assert_ne!(ids[1], ids[0]);
        assert_ne!(ids[2], ids[0]);
        assert_ne!(ids[1], ids[2]);
        assert_eq!(stored(&ctl).len(), 3);
    }
}
