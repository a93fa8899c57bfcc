//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic personal library manager**. It keeps a small list of
//! books in one JSON file and answers questions about it: what is on the shelf, what
//! matches a search, how much of it has been read.
//!
//! The command-line client is one front end; a web form or REST handler could sit on
//! the same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards/charts, exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the LibraryStore                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, remove, list, search, stats, config, init           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library Store (library.rs) over Storage (store/)           │
//! │  - In-memory Vec<Book>, saved wholesale after each change   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Errors come back as [`error::BookshelfError`]; diagnostics go through
//! `tracing` (see [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic per operation, including search and statistics
//! - [`library`]: The in-memory library and its persistence rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `SearchField`, `Decade`
//! - [`config`]: Configuration stored next to the library
//! - [`init`]: Data directory resolution and API construction
//! - [`logging`]: Subscriber setup for front ends
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod library;
pub mod logging;
pub mod model;
pub mod store;
