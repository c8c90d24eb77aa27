//! # API Facade
//!
//! The API layer is a thin facade over the command layer: the single entry
//! point for presentation layers, whatever they are. It dispatches and
//! passes subscriptions through; business logic lives in `commands/*.rs`
//! and state lives in the store.
//!
//! The facade owns the store. There is no shared singleton: construct a
//! [`TaskzApi`] (or a bare [`TaskStore`]) and hand it to whichever component
//! needs it.

use uuid::Uuid;

use crate::commands::{self, CmdResult, TaskPatch};
use crate::commands::get::TaskFilter;
use crate::error::Result;
use crate::model::TaskDraft;
use crate::observe::{StoreCallback, SubscriptionId, TaskCallback};
use crate::store::TaskStore;

/// The main API facade for taskz operations.
#[derive(Debug, Default)]
pub struct TaskzApi {
    store: TaskStore,
}

impl TaskzApi {
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
        }
    }

    /// Wrap an existing store (e.g. one pre-seeded by a fixture).
    pub fn with_store(store: TaskStore) -> Self {
        Self { store }
    }

    pub fn create_task(&mut self, draft: TaskDraft) -> Result<CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn delete_task(&mut self, id: &Uuid) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn update_task(&mut self, id: &Uuid, patch: TaskPatch) -> Result<CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn get_tasks(&self, filter: TaskFilter) -> Result<CmdResult> {
        commands::get::run(&self.store, filter)
    }

    // --- Subscriptions and direct store access ---

    pub fn subscribe(&mut self, callback: StoreCallback) -> SubscriptionId {
        self.store.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.store.unsubscribe(subscription)
    }

    pub fn watch_task(&mut self, id: &Uuid, callback: TaskCallback) -> Result<SubscriptionId> {
        self.store.watch_task(id, callback)
    }

    pub fn unwatch(&mut self, subscription: SubscriptionId) -> bool {
        self.store.unwatch(subscription)
    }

    pub fn changes(&self) -> u64 {
        self.store.changes()
    }

    /// Read access to the underlying store for derived views not exposed as
    /// commands (`has_priority`, `tasks_with_priority`, ...).
    pub fn store(&self) -> &TaskStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TaskSorting};

    #[test]
    fn test_create_and_list_dispatch() {
        let mut api = TaskzApi::new();
        api.create_task(TaskDraft::new("B")).unwrap();
        api.create_task(TaskDraft::new("A").with_priority(Priority::High))
            .unwrap();

        let listed = api
            .get_tasks(TaskFilter {
                sorting: TaskSorting::Title,
                ..Default::default()
            })
            .unwrap()
            .listed_tasks;
        assert_eq!(listed[0].title, "A");
        assert_eq!(listed[1].title, "B");
    }

    #[test]
    fn test_update_and_delete_dispatch() {
        let mut api = TaskzApi::new();
        let id = api.create_task(TaskDraft::new("Task")).unwrap().affected_tasks[0].id;

        api.update_task(&id, TaskPatch::new().with_finished(true))
            .unwrap();
        assert!(api.store().get(&id).unwrap().is_finished);

        api.delete_task(&id).unwrap();
        assert!(api.store().is_empty());
    }

    #[test]
    fn test_changes_counter_visible_through_facade() {
        let mut api = TaskzApi::new();
        assert_eq!(api.changes(), 0);
        api.create_task(TaskDraft::new("One")).unwrap();
        assert_eq!(api.changes(), 1);
    }
}
