//! # Quicknotes Architecture
//!
//! Quicknotes keeps short text notes in a single flat file. The library holds
//! all of the behaviour; the `quicknotes` binary is a thin interactive shell
//! on top of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the menu loop, prints notes       │
//! │  - Decides when to save (on request and before exit)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session's store and the notes file              │
//! │  - Tracks loaded / unsaved state                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, list, search, delete, save, load                 │
//! │  - Returns `CmdResult` with notes and messages              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: ordered in-memory collection                  │
//! │  - codec + FileStore: one `id|title|content|ts` per line    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the
//! process. Diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: In-memory store, line codec, file persistence
//! - [`model`]: The [`model::Note`] record
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
