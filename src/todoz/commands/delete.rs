use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ItemId, TodoList};

pub fn run(list: &mut TodoList, id: ItemId) -> Result<CmdResult> {
    let Some(removed) = list.remove(id) else {
        return Ok(not_found(id));
    };

    let mut result = CmdResult::changed();
    result.add_message(CmdMessage::success(format!("Deleted: {}", removed.text)));
    Ok(result.with_affected_item(removed))
}
