use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult, TaskPatch};
use crate::error::{Result, TaskzError};
use crate::store::TaskStore;

/// Apply a [`TaskPatch`] to one task.
///
/// Each supplied field goes through the corresponding store setter, so the
/// task's watchers receive one notification per written field. An empty
/// patch does nothing. Fails with `TaskNotFound` for an unknown id.
pub fn run(store: &mut TaskStore, id: &Uuid, patch: TaskPatch) -> Result<CmdResult> {
    if patch.is_empty() {
        return Ok(CmdResult::default());
    }

    if let Some(title) = patch.title {
        store.set_title(id, title)?;
    }
    if let Some(priority) = patch.priority {
        store.set_priority(id, priority)?;
    }
    if let Some(deadline) = patch.deadline {
        store.set_deadline(id, deadline)?;
    }
    if let Some(notes) = patch.notes {
        store.set_notes(id, notes)?;
    }
    if let Some(is_finished) = patch.is_finished {
        store.set_finished(id, is_finished)?;
    }

    let task = store
        .get(id)
        .cloned()
        .ok_or(TaskzError::TaskNotFound(*id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Task updated: {}", task.title)));
    result.affected_tasks.push(task);
    Ok(result)
}
