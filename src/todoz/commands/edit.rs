use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{normalize_text, ItemId, TodoList};

/// Switches the item into inline edit mode.
pub fn begin(list: &mut TodoList, id: ItemId) -> Result<CmdResult> {
    let Some(item) = list.get_mut(id) else {
        return Ok(not_found(id));
    };
    if item.editing {
        return Ok(CmdResult::unchanged(format!("Already editing: {}", item.text)));
    }
    item.editing = true;

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::info(format!("Editing: {}", item.text)));
    Ok(result.with_affected_item(item.clone()))
}

/// Stores the edited text and leaves edit mode.
///
/// Blank text keeps the item exactly as it was, still in edit mode.
pub fn save(list: &mut TodoList, id: ItemId, new_text: &str) -> Result<CmdResult> {
    let Some(item) = list.get_mut(id) else {
        return Ok(not_found(id));
    };
    let Some(text) = normalize_text(new_text) else {
        return Ok(CmdResult::unchanged("Text cannot be empty; still editing"));
    };

    item.text = text;
    item.editing = false;

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!("Updated: {}", item.text)));
    Ok(result.with_affected_item(item.clone()))
}
