//! # The Task Store
//!
//! [`TaskStore`] owns the authoritative, ordered collection of [`Task`]s for
//! the process lifetime. Everything else in the crate is a view over it or a
//! thin layer in front of it.
//!
//! ## Storage Model
//!
//! Tasks live in a `Vec` in insertion order (creation order). Nothing is
//! persisted and nothing is kept sorted in place: the sorted and filtered
//! listings are computed on read, every time. For a single-screen list this
//! is both correct and cheap, and it means there is exactly one ordering
//! invariant to maintain (insertion order) instead of several.
//!
//! ## The Two-Pass Priority Sort
//!
//! `tasks_sorted_by_priority` does not use a combined comparator. It takes
//! the title-sorted sequence and stably re-sorts it by priority descending.
//! The observable consequence: within each priority bucket, tasks appear in
//! title order. A combined (priority, title) comparator would produce the
//! same result today, but the two-pass form is the contract — the tie-break
//! comes from the first pass, and tests pin it down.
//!
//! ## Mutation and Notification
//!
//! Every mutation goes through a store method, and every store method
//! notifies synchronously before returning:
//!
//! - `create_task` / `delete_task` fire [`StoreChange`] to collection
//!   subscribers.
//! - Field setters (`set_title`, `set_priority`, ...) fire [`TaskField`] to
//!   that task's watchers. A write always notifies, even when the new value
//!   equals the old one.
//!
//! A monotonic change counter ([`TaskStore::changes`]) increments on every
//! successful mutation, for clients that prefer "compare version, re-render
//! on demand" over callbacks.
//!
//! ## Totality
//!
//! Store CRUD cannot fail: creation accepts any draft (empty titles
//! included) and deletion of an unknown id is an idempotent no-op. Only
//! id-addressed field setters return a `Result`, and only because the task
//! they name may have been removed.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Result, TaskzError};
use crate::model::{Priority, Task, TaskDraft};
use crate::observe::{
    Observers, StoreCallback, StoreChange, SubscriptionId, TaskCallback, TaskField,
};

pub struct TaskStore {
    tasks: Vec<Task>,
    observers: Observers,
    changes: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("changes", &self.changes)
            .finish_non_exhaustive()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            observers: Observers::new(),
            changes: 0,
        }
    }

    // --- CRUD ---

    /// Append a new task built from `draft`, assigning a fresh id.
    ///
    /// Never fails; empty titles and duplicate titles are legal. Collection
    /// subscribers are notified before this returns.
    pub fn create_task(&mut self, draft: TaskDraft) -> Uuid {
        let task = Task::from_draft(draft);
        let id = task.id;
        self.tasks.push(task);
        self.changes += 1;
        self.observers.notify_collection(&StoreChange::Created(id));
        id
    }

    /// Remove the task with `id`, if present. Returns whether a task was
    /// actually removed.
    ///
    /// Idempotent: removing an unknown id is a no-op — no error, no
    /// notification, no change-counter bump. An effective removal also drops
    /// the task's watchers.
    pub fn delete_task(&mut self, id: &Uuid) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id == *id) else {
            return false;
        };
        self.tasks.remove(position);
        self.observers.drop_task(id);
        self.changes += 1;
        self.observers.notify_collection(&StoreChange::Removed(*id));
        true
    }

    // --- Plain reads ---

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Monotonic mutation counter. Bumped by every create, effective delete,
    /// and field write; unchanged by reads and no-op deletes.
    pub fn changes(&self) -> u64 {
        self.changes
    }

    // --- Derived views ---

    /// All tasks, ascending by title.
    ///
    /// Ordering is case-sensitive byte-wise `str` ordering. The sort is
    /// stable, so equal titles keep their insertion order. Non-destructive:
    /// stored order is untouched.
    pub fn tasks_sorted_by_title(&self) -> Vec<Task> {
        let mut sorted = self.tasks.clone();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));
        sorted
    }

    /// The title-sorted sequence, stably re-sorted by priority descending
    /// (High before Default).
    ///
    /// Within each priority bucket, title order from the first pass is
    /// preserved. The two-pass form is deliberate and load-bearing.
    pub fn tasks_sorted_by_priority(&self) -> Vec<Task> {
        let mut sorted = self.tasks_sorted_by_title();
        sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
        sorted
    }

    /// Tasks in the given priority bucket, in insertion order.
    ///
    /// This is what a grouped-by-priority listing iterates per section.
    pub fn tasks_with_priority(&self, priority: Priority) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.priority == priority)
            .cloned()
            .collect()
    }

    /// Whether any stored task currently has the given priority.
    pub fn has_priority(&self, priority: Priority) -> bool {
        self.tasks.iter().any(|task| task.priority == priority)
    }

    // --- Field setters ---
    //
    // Each setter writes the field, bumps the change counter, and notifies
    // the task's watchers with a snapshot — synchronously, before returning.
    // Writing a value equal to the current one still notifies.

    pub fn set_title(&mut self, id: &Uuid, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        self.write_field(id, TaskField::Title, move |task| task.title = title)
    }

    pub fn set_priority(&mut self, id: &Uuid, priority: Priority) -> Result<()> {
        self.write_field(id, TaskField::Priority, move |task| task.priority = priority)
    }

    pub fn set_deadline(&mut self, id: &Uuid, deadline: Option<NaiveDate>) -> Result<()> {
        self.write_field(id, TaskField::Deadline, move |task| task.deadline = deadline)
    }

    pub fn set_notes(&mut self, id: &Uuid, notes: Option<String>) -> Result<()> {
        self.write_field(id, TaskField::Notes, move |task| task.notes = notes)
    }

    pub fn set_finished(&mut self, id: &Uuid, is_finished: bool) -> Result<()> {
        self.write_field(id, TaskField::Finished, move |task| {
            task.is_finished = is_finished
        })
    }

    fn write_field<F>(&mut self, id: &Uuid, field: TaskField, write: F) -> Result<()>
    where
        F: FnOnce(&mut Task),
    {
        let position = self
            .tasks
            .iter()
            .position(|task| task.id == *id)
            .ok_or(TaskzError::TaskNotFound(*id))?;
        write(&mut self.tasks[position]);
        self.changes += 1;
        self.observers.notify_task(&self.tasks[position], field);
        Ok(())
    }

    // --- Subscriptions ---

    /// Subscribe to collection membership changes (create/remove).
    pub fn subscribe(&mut self, callback: StoreCallback) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Remove a collection subscription. Returns whether it existed.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.observers.unsubscribe(subscription)
    }

    /// Watch field changes on one specific task.
    ///
    /// Fails with `TaskNotFound` for an unknown id; watchers are dropped
    /// automatically when the task is removed.
    pub fn watch_task(&mut self, id: &Uuid, callback: TaskCallback) -> Result<SubscriptionId> {
        if self.get(id).is_none() {
            return Err(TaskzError::TaskNotFound(*id));
        }
        Ok(self.observers.watch(*id, callback))
    }

    /// Remove a per-task subscription. Returns whether it existed.
    pub fn unwatch(&mut self, subscription: SubscriptionId) -> bool {
        self.observers.unwatch(subscription)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: TaskStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: TaskStore::new(),
            }
        }

        pub fn with_tasks(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.create_task(TaskDraft::new(format!("Test Task {}", i + 1)));
            }
            self
        }

        pub fn with_task(mut self, title: &str, priority: Priority) -> Self {
            self.store
                .create_task(TaskDraft::new(title).with_priority(priority));
            self
        }

        pub fn with_finished_task(mut self, title: &str) -> Self {
            self.store.create_task(TaskDraft::new(title).finished(true));
            self
        }
    }
}
