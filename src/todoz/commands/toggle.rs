use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ItemId, TodoList};

pub fn run(list: &mut TodoList, id: ItemId) -> Result<CmdResult> {
    let Some(item) = list.get_mut(id) else {
        return Ok(not_found(id));
    };
    item.completed = !item.completed;

    let verb = if item.completed { "Completed" } else { "Reopened" };
    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!("{}: {}", verb, item.text)));
    Ok(result.with_affected_item(item.clone()))
}
