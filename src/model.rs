//! # Domain Model: Tasks and Priorities
//!
//! This module defines the core data structures for taskz: [`Task`],
//! [`Priority`], [`TaskDraft`], and [`TaskSorting`].
//!
//! ## Tasks Are Deliberately Unconstrained
//!
//! A task is a plain mutable record. There is no validation layer:
//! - Empty titles are legal.
//! - Duplicate titles are legal (tasks are addressed by id, never by title).
//! - Any field except `id` may be rewritten at any time.
//!
//! The only invariant the model enforces is structural: `id` is assigned at
//! creation and never changes, and `priority` is a closed enum, so an invalid
//! priority is unrepresentable.
//!
//! ## Priority Ordering
//!
//! [`Priority`] carries a total order with `Default < High`, taken from
//! declaration order. The priority-sorted store view relies on this order
//! (descending, so high-priority tasks surface first). It is a documented
//! part of the contract, not an incidental integer comparison — extend the
//! enum by inserting new variants in rank position.
//!
//! ## Drafts
//!
//! New tasks are staged as a [`TaskDraft`] and handed to the store, which
//! assigns the id. This keeps "a task being filled in by a form" distinct
//! from "a task that exists in the collection".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Task priority bucket.
///
/// Ordering is part of the contract: `Default < High` (declaration order),
/// so a descending sort puts high-priority tasks first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Priority {
    Default,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Default
    }
}

impl Priority {
    /// All priorities, in ascending rank order. Useful for pickers.
    pub const ALL: [Priority; 2] = [Priority::Default, Priority::High];
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Default => write!(f, "Default"),
            Priority::High => write!(f, "High"),
        }
    }
}

/// Sort mode for task listings, mirroring the sorting picker of a typical
/// task-list UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskSorting {
    /// Insertion order (creation order). This is what grouped-by-priority
    /// sections iterate over.
    Creation,
    /// Ascending by title.
    Title,
    /// High-priority bucket first, title order within each bucket.
    Priority,
}

impl Default for TaskSorting {
    fn default() -> Self {
        Self::Title
    }
}

impl fmt::Display for TaskSorting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskSorting::Creation => write!(f, "Creation"),
            TaskSorting::Title => write!(f, "Title"),
            TaskSorting::Priority => write!(f, "Priority"),
        }
    }
}

/// A single to-do item owned by the store.
///
/// `id` is immutable after creation; every other field is plain mutable
/// data. Mutation flows through [`crate::store::TaskStore`] setters so that
/// observers are always notified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub priority: Priority,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
    pub is_finished: bool,
}

impl Task {
    pub(crate) fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            priority: draft.priority,
            deadline: draft.deadline,
            notes: draft.notes,
            is_finished: draft.is_finished,
        }
    }

    /// Human-readable deadline, `"No deadline"` when absent.
    ///
    /// The date is rendered as ISO `YYYY-MM-DD`. Locale-aware formatting is
    /// a presentation concern; this is the one fixed rendering the core
    /// guarantees.
    pub fn deadline_label(&self) -> String {
        match self.deadline {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "No deadline".to_string(),
        }
    }
}

/// Creation payload for a task: everything but the id, which the store
/// assigns on insertion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub priority: Priority,
    pub deadline: Option<NaiveDate>,
    pub notes: Option<String>,
    pub is_finished: bool,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn finished(mut self, is_finished: bool) -> Self {
        self.is_finished = is_finished;
        self
    }
}
