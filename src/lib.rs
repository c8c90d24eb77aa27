//! # Taskz Architecture
//!
//! Taskz is a **UI-agnostic task-list core**. It implements the state a
//! single-screen task-management app needs — an in-memory store of task
//! records, derived sorted/filtered views, and synchronous change
//! notification — and nothing else. There is no persistence, no networking,
//! and no rendering: the presentation layer is whoever is calling.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (not in this crate)                           │
//! │  - Lists, detail forms, pickers; renders CmdResults         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands; owns the store                │
//! │  - Passes subscriptions through                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic, structured CmdResult returns        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs) + Observation (observe.rs)                │
//! │  - Ordered in-memory collection, derived views              │
//! │  - Synchronous callback delivery on every mutation          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Synchronous Consistency
//!
//! Every mutation notifies its observers before the mutating call returns,
//! so a derived view read after any write always reflects that write. There
//! is no eventual-consistency window and no background work: the whole crate
//! is single-threaded and event-driven.
//!
//! ## Key Principle: Total Operations
//!
//! Store CRUD cannot fail. Creation accepts any draft (empty titles are
//! legal), deletion of an unknown id is an idempotent no-op, and invalid
//! priorities are unrepresentable (closed enum). The only fallible calls are
//! the id-addressed edits, which return `TaskNotFound` when the task has
//! been removed out from under the caller.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for presentation layers
//! - [`commands`]: Business logic for each operation
//! - [`store`]: The task collection and its derived views
//! - [`observe`]: Subscription registry and event types
//! - [`model`]: Core data types (`Task`, `Priority`, `TaskDraft`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod observe;
pub mod store;
