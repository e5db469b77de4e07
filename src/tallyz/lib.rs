//! # Tallyz Architecture
//!
//! Tallyz is a **UI-agnostic tally-list library**: named, counted, tagged
//! entries, a search engine that selects and orders them, and whole-list
//! persistence. The interactive terminal client is a thin consumer wired up
//! by `main.rs`; nothing below the CLI layer knows about a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses interactive input, draws the screen, owns the     │
//! │    grid and the query state                                 │
//! │  - The ONLY place that knows about the terminal             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and the search engine          │
//! │  - Owns the in-memory entry list and its store              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (commands/*.rs, search.rs)                            │
//! │  - Pure business logic over plain Rust types                │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Grid rendering (column layout, pagination, styling hooks) lives in the
//! sibling `termgrid` crate; this library hands it rows and page requests
//! and nothing else.
//!
//! ## The Counter
//!
//! Each entry carries one signed counter doing double duty: the magnitude
//! is the tally, the sign is the done flag. Incrementing and decrementing
//! move the magnitude by one; "done" is a whole-value negation. Search
//! orders by the raw signed value, so done entries naturally sink below
//! active ones.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result` types, never writes to stdout, never exits the process, and
//! never assumes a terminal. The CLI client could be swapped for any other
//! front end without touching the core.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each mutation
//! - [`search`]: The select-and-order engine ([`search::select`])
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types ([`model::Entry`], [`model::DisplayEntry`])
//! - [`error`]: Error types
//! - `cli` + `args`: Interactive loop and argument parsing for the binary
//!   (not part of the lib API)

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod search;
pub mod store;
