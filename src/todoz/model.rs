use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identity of an item within its list.
///
/// Ids are millisecond timestamps made strictly increasing by [`IdGenerator`],
/// which keeps them compatible with lists written by earlier clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
    // Only written while an item is being edited.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub editing: bool,
}

impl Item {
    pub fn new(id: ItemId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            editing: false,
        }
    }
}

/// Returns the trimmed text, or `None` when nothing but whitespace is left.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The ordered list of items. Order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from raw items, rejecting duplicate ids and blank text.
    pub fn from_items(items: Vec<Item>) -> Result<Self, String> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(format!("duplicate id {}", item.id));
            }
            if item.text.trim().is_empty() {
                return Err(format!("item {} has empty text", item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parses the persisted JSON array.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let items: Vec<Item> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        Self::from_items(items)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn max_id(&self) -> Option<ItemId> {
        self.items.iter().map(|item| item.id).max()
    }

    pub(crate) fn push(&mut self, item: Item) {
        debug_assert!(!self.contains(item.id), "id {} already in list", item.id);
        self.items.push(item);
    }

    /// Removes the item with `id`, returning it if it was present.
    pub(crate) fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.position(id)?;
        Some(self.items.remove(pos))
    }

    pub(crate) fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub(crate) fn take_items(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }
}

/// Hands out ids derived from the wall clock.
///
/// Two items created within the same millisecond still get distinct ids: the
/// next id is `max(now_ms, last + 1)`. Once `last` reaches `i64::MAX` the
/// sequence restarts at the clock and takes the first id not in the list.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts after the largest id already in `list`.
    pub fn seeded_from(list: &TodoList) -> Self {
        Self {
            last: list.max_id().map(|id| id.0),
        }
    }

    pub fn next_id(&mut self, list: &TodoList) -> ItemId {
        self.next_at(Utc::now().timestamp_millis(), list)
    }

    pub(crate) fn next_at(&mut self, now_ms: i64, list: &TodoList) -> ItemId {
        let start = match self.last {
            Some(last) => last
                .checked_add(1)
                .map_or(now_ms, |next| now_ms.max(next)),
            None => now_ms,
        };
        let id = first_free_id(list, start);
        self.last = Some(id.0);
        id
    }
}

/// First id at or after `start` that `list` does not use, wrapping to 1.
///
/// The scan stops after at most `list.len() + 1` candidates.
fn first_free_id(list: &TodoList, start: i64) -> ItemId {
    (start..=i64::MAX)
        .chain(1..start)
        .map(ItemId)
        .find(|id| !list.contains(*id))
        .unwrap_or(ItemId(start))
}
