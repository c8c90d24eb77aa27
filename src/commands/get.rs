use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Priority, TaskSorting};
use crate::store::TaskStore;

/// Selection criteria for a task listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub sorting: TaskSorting,
    /// Keep only this priority bucket.
    pub priority: Option<Priority>,
    /// Keep only finished (`Some(true)`) or unfinished (`Some(false)`) tasks.
    pub finished: Option<bool>,
}

/// List tasks: pick the base sequence per `sorting`, then narrow it by the
/// optional priority and finished filters.
pub fn run(store: &TaskStore, filter: TaskFilter) -> Result<CmdResult> {
    let mut tasks = match filter.sorting {
        TaskSorting::Creation => store.tasks().to_vec(),
        TaskSorting::Title => store.tasks_sorted_by_title(),
        TaskSorting::Priority => store.tasks_sorted_by_priority(),
    };

    if let Some(priority) = filter.priority {
        tasks.retain(|task| task.priority == priority);
    }
    if let Some(finished) = filter.finished {
        tasks.retain(|task| task.is_finished == finished);
    }

    Ok(CmdResult::default().with_listed_tasks(tasks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskDraft;
    use crate::store::fixtures::StoreFixture;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_tasks
            .iter()
            .map(|task| task.title.as_str())
            .collect()
    }

    fn sample_store() -> TaskStore {
        StoreFixture::new()
            .with_task("Zebra", Priority::Default)
            .with_task("Apple", Priority::High)
            .with_task("Mango", Priority::High)
            .store
    }

    #[test]
    fn default_filter_lists_by_title() {
        let store = sample_store();
        let result = run(&store, TaskFilter::default()).unwrap();
        assert_eq!(titles(&result), ["Apple", "Mango", "Zebra"]);
    }

    #[test]
    fn creation_sorting_keeps_insertion_order() {
        let store = sample_store();
        let filter = TaskFilter {
            sorting: TaskSorting::Creation,
            ..Default::default()
        };
        let result = run(&store, filter).unwrap();
        assert_eq!(titles(&result), ["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn priority_sorting_buckets_high_first() {
        let store = sample_store();
        let filter = TaskFilter {
            sorting: TaskSorting::Priority,
            ..Default::default()
        };
        let result = run(&store, filter).unwrap();
        assert_eq!(titles(&result), ["Apple", "Mango", "Zebra"]);
    }

    #[test]
    fn priority_filter_narrows_bucket() {
        let store = sample_store();
        let filter = TaskFilter {
            priority: Some(Priority::High),
            ..Default::default()
        };
        let result = run(&store, filter).unwrap();
        assert_eq!(titles(&result), ["Apple", "Mango"]);
    }

    #[test]
    fn finished_filter() {
        let mut store = TaskStore::new();
        store.create_task(TaskDraft::new("Open"));
        store.create_task(TaskDraft::new("Closed").finished(true));

        let done = run(
            &store,
            TaskFilter {
                finished: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(titles(&done), ["Closed"]);

        let open = run(
            &store,
            TaskFilter {
                finished: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(titles(&open), ["Open"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = TaskStore::new();
        let result = run(&store, TaskFilter::default()).unwrap();
        assert!(result.listed_tasks.is_empty());
    }
}
