//! # todoz Architecture
//!
//! todoz is a **UI-agnostic to-do list library**. The terminal client in this
//! repository is one UI for it; a browser or desktop front end would drive the
//! exact same controller.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders views, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  UiEvent / operations
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  List Controller (controller.rs)                            │
//! │  - Owns the list, the input field and the drag gesture      │
//! │  - Persists after every mutation, returns a fresh View      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure list mutations returning CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait: one key, one JSON document          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The view is not a layer of its own: [`view::project`] is a pure function
//! from the list (and the drag in flight) to rows.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `controller.rs` inward, code takes Rust values and returns
//! `Result<CmdResult>`. It never prints, never exits, and never assumes a
//! terminal.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests of every mutation and its no-op cases.
//! 2. **Controller**: persistence discipline, event dispatch and the drag
//!    gesture against `InMemoryStore`.
//! 3. **CLI**: argument parsing and template output, plus binary tests in
//!    `tests/`.
//!
//! ## Module Overview
//!
//! - [`controller`]: The list controller, entry point for all operations
//! - [`commands`]: Business logic for each mutation
//! - [`drag`]: Drag reorder gesture state machine
//! - [`view`]: Render projection
//! - [`events`]: UI events, action kinds, the input field
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Item`, `TodoList`, `IdGenerator`)
//! - [`index`]: 1-based row indexes for UIs that address rows by position
//! - [`config`]: Configuration management
//! - [`init`]: Resolves the data directory and loads the controller
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod controller;
pub mod drag;
pub mod error;
pub mod events;
pub mod index;
pub mod init;
pub mod model;
pub mod store;
pub mod view;
