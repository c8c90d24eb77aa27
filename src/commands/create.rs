use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::model::TaskDraft;
use crate::store::TaskStore;

pub fn run(store: &mut TaskStore, draft: TaskDraft) -> Result<CmdResult> {
    let id = store.create_task(draft);
    let task = store
        .get(&id)
        .cloned()
        .ok_or(TaskzError::TaskNotFound(id))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Task created: {}", task.title)));
    result.affected_tasks.push(task);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Priority;

    #[test]
    fn creates_task_and_reports_it() {
        let mut store = TaskStore::new();
        let result = run(
            &mut store,
            TaskDraft::new("Prepare workshop").with_priority(Priority::High),
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(result.affected_tasks.len(), 1);
        assert_eq!(result.affected_tasks[0].title, "Prepare workshop");
        assert_eq!(result.affected_tasks[0].priority, Priority::High);
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
    }

    #[test]
    fn empty_title_is_permitted() {
        let mut store = TaskStore::new();
        let result = run(&mut store, TaskDraft::new("")).unwrap();
        assert_eq!(result.affected_tasks[0].title, "");
        assert_eq!(store.len(), 1);
    }
}
