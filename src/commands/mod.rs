//! # Command Layer
//!
//! This module contains the business logic of taskz. Each command lives in
//! its own submodule and implements pure Rust functions that operate on the
//! store and return structured results.
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any I/O**: No stdout, stderr, or terminal concerns
//! - **Presentation**: Return data structures, not formatted strings
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries:
//! - `affected_tasks`: Tasks that were created or modified
//! - `listed_tasks`: Tasks to display (for `get`)
//! - `messages`: Structured messages with levels (info, success, warning)
//!
//! The presentation layer (whatever it is) decides how to render this.
//!
//! ## Command Modules
//!
//! - [`create`]: Create a new task from a draft
//! - [`delete`]: Remove a task by id (idempotent)
//! - [`update`]: Apply a [`TaskPatch`] to an existing task
//! - [`get`]: List tasks per a [`get::TaskFilter`]

use serde::Serialize;

use crate::model::{Priority, Task};
use chrono::NaiveDate;

pub mod create;
pub mod delete;
pub mod get;
pub mod update;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tasks: Vec<Task>,
    pub listed_tasks: Vec<Task>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.listed_tasks = tasks;
        self
    }
}

/// A partial edit of one task: every field optional, applied in one call.
///
/// `deadline` and `notes` are doubly optional — the outer `Option` is
/// "should this field be written", the inner one is the value (including
/// clearing it back to absent).
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub priority: Option<Priority>,
    pub deadline: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
    pub is_finished: Option<bool>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.priority.is_none()
            && self.deadline.is_none()
            && self.notes.is_none()
            && self.is_finished.is_none()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn with_finished(mut self, is_finished: bool) -> Self {
        self.is_finished = Some(is_finished);
        self
    }
}
