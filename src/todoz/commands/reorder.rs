use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ReorderMismatch, Result, TodozError};
use crate::model::{ItemId, TodoList};
use std::collections::{HashMap, HashSet};

/// Rebuilds the list in the order given by `order`.
///
/// `order` must be a permutation of the current ids. Anything else is rejected
/// and the list is left untouched.
pub fn run(list: &mut TodoList, order: &[ItemId]) -> Result<CmdResult> {
    let mismatch = check_permutation(list, order);
    if !mismatch.is_empty() {
        return Err(TodozError::InvalidReorder(mismatch));
    }

    if list.ids() == order {
        return Ok(CmdResult::unchanged("Order unchanged"));
    }

    let mut by_id: HashMap<ItemId, _> = list
        .take_items()
        .into_iter()
        .map(|item| (item.id, item))
        .collect();
    let reordered = order.iter().filter_map(|id| by_id.remove(id)).collect();
    list.replace_items(reordered);

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success("Items reordered"));
    Ok(result)
}

fn check_permutation(list: &TodoList, order: &[ItemId]) -> ReorderMismatch {
    let current: HashSet<ItemId> = list.ids().into_iter().collect();
    let mut seen = HashSet::with_capacity(order.len());
    let mut mismatch = ReorderMismatch::default();

    for id in order {
        if !current.contains(id) {
            if !mismatch.unknown.contains(id) {
                mismatch.unknown.push(*id);
            }
        } else if !seen.insert(*id) && !mismatch.duplicated.contains(id) {
            mismatch.duplicated.push(*id);
        }
    }
    mismatch.missing = list
        .ids()
        .into_iter()
        .filter(|id| !seen.contains(id))
        .collect();
    mismatch
}
