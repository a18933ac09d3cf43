//! # Staffbook Architecture
//!
//! Staffbook is an employee address book driven by a small textual command
//! language. It is a library first; the bundled CLI is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap arguments, the interactive shell, terminal output   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses command text, dispatches, persists on change      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser/) → Command Layer (commands/*.rs)           │
//! │  - Typed commands over the Model, structured results        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (book.rs, predicate.rs) and Storage (store/)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. The only outside interaction a command needs (choosing and copying a
//! picture) is injected through the traits in [`picture`].
//!
//! ## Module Overview
//!
//! - [`api`]: The facade used by UI clients
//! - [`parser`]: Command text to [`commands::Command`]
//! - [`commands`]: Business logic for each command
//! - [`book`]: The version-stamped record store and its filtered view
//! - [`predicate`]: Display predicates (payroll, leave count, name)
//! - [`model`]: Core data types (`Employee`, `EmployeeId`)
//! - [`picture`]: Picture chooser and file transfer seams
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod picture;
pub mod predicate;
pub mod store;
