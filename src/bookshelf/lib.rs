//! # Bookshelf Architecture
//!
//! Bookshelf is a small **book catalog library** with a command-line client.
//! The library owns the catalog and its file; the `shelf` binary only parses
//! input and prints results.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands and the interactive menu shell               │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Turns catalog outcomes into records + messages           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - Ordered records, id counter, save-on-every-mutation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - JSON document codec + StorageBackend (file or memory)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments, returns `Result` values,
//! and never writes to stdout/stderr or exits the process. A missing id is an
//! [`model::Outcome::NotFound`], not an error.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`catalog`]: The catalog and search queries
//! - [`commands`]: Per-operation logic producing `CmdResult`
//! - [`model`]: `Record` and `Outcome`
//! - [`store`]: Document format and storage backends
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
