use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::TaskStore;

/// Remove a task by id. Never fails: deleting an id that is not in the
/// store reports an info message and leaves the collection unchanged.
pub fn run(store: &mut TaskStore, id: &Uuid) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Snapshot before removal so the message can name the task.
    let removed = store.get(id).cloned();
    if store.delete_task(id) {
        let title = removed.map(|task| task.title).unwrap_or_default();
        result.add_message(CmdMessage::success(format!("Task deleted: {}", title)));
    } else {
        result.add_message(CmdMessage::info(format!("No task with id {}", id)));
    }

    Ok(result)
}
