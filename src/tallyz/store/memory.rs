use super::DataStore;
use crate::error::Result;
use crate::model::Entry;
use std::cell::RefCell;

/// In-memory store for tests. No persistence.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<Vec<Entry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: RefCell::new(entries),
        }
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Entry>> {
        Ok(self.entries.borrow().clone())
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        *self.entries.borrow_mut() = entries.to_vec();
        Ok(())
    }
}
