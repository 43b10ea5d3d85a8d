use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{normalize_text, IdGenerator, Item, TodoList};

pub fn run(list: &mut TodoList, ids: &mut IdGenerator, text: &str) -> Result<CmdResult> {
    let Some(text) = normalize_text(text) else {
        return Ok(CmdResult::unchanged("Nothing to add: text is empty"));
    };

    let id = ids.next_id(list);
    let item = Item::new(id, text);
    list.push(item.clone());

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!("Added: {}", item.text)));
    Ok(result.with_affected_item(item))
}
