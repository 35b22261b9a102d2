//! # libtrack Architecture
//!
//! libtrack keeps the catalog of a small lending library (books, DVDs and
//! magazines) in a single JSON file. It is a **library with a CLI client**:
//! everything below the CLI takes Rust values and returns Rust values, and
//! never prints, prompts, or exits.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - clap subcommands and the interactive keystroke menu      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Library for the run                             │
//! │  - One method per command                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns repository outcomes into CmdResult + messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs) + Item model (model.rs)         │
//! │  - Insertion-ordered catalog, id uniqueness, borrow/return  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait over flat item records          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! Repository and command logic are tested against `InMemoryStore`, which can
//! also simulate corrupt data and failing writes. `FileStore` and the binary
//! are tested against temporary directories (see `tests/`).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-command logic and the `CmdResult` type
//! - [`repository`]: The in-memory catalog and its load/save policy
//! - [`model`]: `Item` and its kinds
//! - [`store`]: Storage abstraction, flat records and implementations
//! - [`demo`]: The canned first-run catalog
//! - [`validate`]: Parsing of user-entered fields
//! - [`config`]: Configuration file
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod model;
pub mod repository;
pub mod store;
pub mod validate;
