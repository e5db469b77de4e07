//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts persistence of the entry list. The
//! core never talks to a file directly; the caller owns the authoritative
//! in-memory collection and asks a store to load or save it wholesale.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one pretty-printed JSON document on disk. A missing
//!   file loads as an empty list so first runs need no setup step.
//! - [`memory::InMemoryStore`]: no persistence, for fast isolated tests.

use crate::error::Result;
use crate::model::Entry;

pub mod fs;
pub mod memory;

/// Whole-list persistence for tally entries.
pub trait DataStore {
    /// Load every entry. A store with nothing saved yet returns an empty
    /// list, not an error.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Persist the full entry list, replacing whatever was stored.
    fn save(&self, entries: &[Entry]) -> Result<()>;
}
