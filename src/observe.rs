//! # Observation: Explicit Callback Registration
//!
//! Keeping displayed lists in sync with edits is the one genuinely stateful
//! problem this crate solves. The design is deliberately small: no reactive
//! framework, just explicit registration with handle-based removal.
//!
//! ## Two Subscription Levels
//!
//! - **Collection subscriptions** ([`StoreChange`]): fire when the set of
//!   tasks changes — a task was created or removed. A list view subscribes
//!   here and re-reads whichever derived view it renders.
//! - **Per-task subscriptions** ([`TaskField`]): fire when a field of one
//!   specific task changes. A detail view bound to a single task subscribes
//!   here and avoids reloading the whole list.
//!
//! ## Delivery Contract
//!
//! Notification is synchronous: callbacks run inside the mutating store call,
//! before it returns, so derived views read afterwards are never stale.
//! Callbacks receive event data (and a snapshot of the changed task), not
//! store access — the store is mutably borrowed during delivery. Observers
//! that need to re-read the store should record an invalidation and read
//! after the mutating call returns.
//!
//! Everything is single-threaded: callbacks are plain boxed `FnMut` closures
//! with no `Send`/`Sync` bounds.

use std::collections::HashMap;

use uuid::Uuid;

use crate::model::Task;

/// Handle returned on registration; pass it back to stop delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A change to the task collection's membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Created(Uuid),
    Removed(Uuid),
}

/// Which field of a task was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    Title,
    Priority,
    Deadline,
    Notes,
    Finished,
}

pub type StoreCallback = Box<dyn FnMut(&StoreChange)>;
pub type TaskCallback = Box<dyn FnMut(&Task, TaskField)>;

/// Registry of live subscriptions, owned by the store.
///
/// Ids are unique across both levels, so a handle never removes the wrong
/// subscription even if passed to the wrong removal method.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    collection: Vec<(SubscriptionId, StoreCallback)>,
    per_task: HashMap<Uuid, Vec<(SubscriptionId, TaskCallback)>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn subscribe(&mut self, callback: StoreCallback) -> SubscriptionId {
        let id = self.fresh_id();
        self.collection.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.collection.len();
        self.collection.retain(|(sub_id, _)| *sub_id != id);
        self.collection.len() != before
    }

    pub(crate) fn watch(&mut self, task_id: Uuid, callback: TaskCallback) -> SubscriptionId {
        let id = self.fresh_id();
        self.per_task.entry(task_id).or_default().push((id, callback));
        id
    }

    pub(crate) fn unwatch(&mut self, id: SubscriptionId) -> bool {
        for subs in self.per_task.values_mut() {
            let before = subs.len();
            subs.retain(|(sub_id, _)| *sub_id != id);
            if subs.len() != before {
                return true;
            }
        }
        false
    }

    /// Drop every watcher bound to a task; called when the task is removed.
    pub(crate) fn drop_task(&mut self, task_id: &Uuid) {
        self.per_task.remove(task_id);
    }

    pub(crate) fn notify_collection(&mut self, change: &StoreChange) {
        for (_, callback) in self.collection.iter_mut() {
            callback(change);
        }
    }

    pub(crate) fn notify_task(&mut self, task: &Task, field: TaskField) {
        if let Some(subs) = self.per_task.get_mut(&task.id) {
            for (_, callback) in subs.iter_mut() {
                callback(task, field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskDraft;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_collection_subscription_delivers() {
        let mut observers = Observers::new();
        let seen: Rc<RefCell<Vec<StoreChange>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        observers.subscribe(Box::new(move |change| sink.borrow_mut().push(*change)));

        let id = Uuid::new_v4();
        observers.notify_collection(&StoreChange::Created(id));
        observers.notify_collection(&StoreChange::Removed(id));

        assert_eq!(
            *seen.borrow(),
            vec![StoreChange::Created(id), StoreChange::Removed(id)]
        );
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut observers = Observers::new();
        let count = Rc::new(RefCell::new(0usize));

        let sink = Rc::clone(&count);
        let sub = observers.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));

        observers.notify_collection(&StoreChange::Created(Uuid::new_v4()));
        assert!(observers.unsubscribe(sub));
        observers.notify_collection(&StoreChange::Created(Uuid::new_v4()));

        assert_eq!(*count.borrow(), 1);
        // Second removal of the same handle is a no-op.
        assert!(!observers.unsubscribe(sub));
    }

    #[test]
    fn test_task_watchers_are_scoped_to_their_task() {
        let mut observers = Observers::new();
        let watched = Task::from_draft(TaskDraft::new("Watched"));
        let other = Task::from_draft(TaskDraft::new("Other"));

        let fields: Rc<RefCell<Vec<TaskField>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&fields);
        observers.watch(
            watched.id,
            Box::new(move |_, field| sink.borrow_mut().push(field)),
        );

        observers.notify_task(&watched, TaskField::Title);
        observers.notify_task(&other, TaskField::Title);
        observers.notify_task(&watched, TaskField::Finished);

        assert_eq!(*fields.borrow(), vec![TaskField::Title, TaskField::Finished]);
    }

    #[test]
    fn test_unwatch_and_drop_task() {
        let mut observers = Observers::new();
        let task = Task::from_draft(TaskDraft::new("Watched"));
        let count = Rc::new(RefCell::new(0usize));

        let sink = Rc::clone(&count);
        let sub = observers.watch(task.id, Box::new(move |_, _| *sink.borrow_mut() += 1));
        let sink = Rc::clone(&count);
        observers.watch(task.id, Box::new(move |_, _| *sink.borrow_mut() += 1));

        observers.notify_task(&task, TaskField::Notes);
        assert_eq!(*count.borrow(), 2);

        assert!(observers.unwatch(sub));
        observers.notify_task(&task, TaskField::Notes);
        assert_eq!(*count.borrow(), 3);

        observers.drop_task(&task.id);
        observers.notify_task(&task, TaskField::Notes);
        assert_eq!(*count.borrow(), 3);
    }

    #[test]
    fn test_ids_are_unique_across_levels() {
        let mut observers = Observers::new();
        let store_sub = observers.subscribe(Box::new(|_| {}));
        let task_sub = observers.watch(Uuid::new_v4(), Box::new(|_, _| {}));

        assert_ne!(store_sub, task_sub);
        // A collection handle passed to unwatch removes nothing.
        assert!(!observers.unwatch(store_sub));
        assert!(!observers.unsubscribe(task_sub));
    }
}
