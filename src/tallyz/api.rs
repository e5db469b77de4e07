//! # API Facade
//!
//! The single entry point for all tallyz operations, generic over the
//! storage backend. The facade owns the authoritative in-memory entry list
//! plus the store that persists it, and dispatches to the command layer.
//!
//! Like the rest of the core it never touches stdout, never assumes a
//! terminal, and returns structured `Result` types only; presentation is
//! the CLI layer's problem.

use crate::commands;
use crate::error::Result;
use crate::model::{index_entries, DisplayEntry, Entry};
use crate::search::{self, Query};
use crate::store::DataStore;

/// Facade over the command layer, owning the entry list and its store.
pub struct TallyzApi<S: DataStore> {
    store: S,
    entries: Vec<Entry>,
}

impl<S: DataStore> TallyzApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
        }
    }

    /// Replaces the in-memory list with the store's contents.
    pub fn load(&mut self) -> Result<()> {
        self.entries = self.store.load()?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Runs the search engine over the current list: indexes every entry,
    /// then selects and orders per `query`.
    pub fn select(&self, query: &Query) -> Result<Vec<DisplayEntry>> {
        let indexed = index_entries(&self.entries);
        search::select(&indexed, query)
    }

    pub fn add(&mut self, name: String, tags: Vec<String>) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.entries, name, tags)
    }

    pub fn edit(
        &mut self,
        index: usize,
        name: String,
        tags: Vec<String>,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.entries, index, name, tags)
    }

    pub fn increment(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::counter::increment(&mut self.entries, index)
    }

    pub fn decrement(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::counter::decrement(&mut self.entries, index)
    }

    pub fn toggle_done(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::counter::toggle_done(&mut self.entries, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api_with(entries: Vec<Entry>) -> TallyzApi<InMemoryStore> {
        let mut api = TallyzApi::new(InMemoryStore::with_entries(entries));
        api.load().unwrap();
        api
    }

    #[test]
    fn load_pulls_from_the_store() {
        let api = api_with(vec![Entry::new("A".into(), vec![])]);
        assert_eq!(api.entries().len(), 1);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut api = api_with(vec![]);
        api.add("Buy milk".into(), vec!["errand".into()]).unwrap();
        api.increment(0).unwrap();
        api.save().unwrap();

        api.add("scratch".into(), vec![]).unwrap(); // unsaved
        api.load().unwrap(); // back to the saved state

        assert_eq!(api.entries().len(), 1);
        assert_eq!(api.entries()[0].counter, 2);
    }

    #[test]
    fn select_orders_by_counter() {
        let mut api = api_with(vec![]);
        api.add("A".into(), vec![]).unwrap();
        api.add("B".into(), vec![]).unwrap();
        api.increment(1).unwrap();

        let selected = api.select(&Query::default()).unwrap();
        assert_eq!(selected[0].entry.name, "B");
        assert_eq!(selected[0].index, 1);
    }

    #[test]
    fn edit_and_toggle_dispatch() {
        let mut api = api_with(vec![Entry::new("A".into(), vec![])]);
        api.edit(0, "B".into(), vec!["t".into()]).unwrap();
        api.toggle_done(0).unwrap();

        assert_eq!(api.entries()[0].name, "B");
        assert!(api.entries()[0].is_done());
    }
}
