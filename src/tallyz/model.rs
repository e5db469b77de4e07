use serde::{Deserialize, Serialize};

/// A single tally-list record: a name, a signed counter, and display-ordered
/// tags.
///
/// The counter packs two facts: its magnitude is the number of times the
/// entry was tallied, its sign is the done flag (negative means done). The
/// sign only ever changes as a whole-value flip, the magnitude only by one
/// per increment/decrement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub counter: i64,
    pub tags: Vec<String>,
}

impl Entry {
    /// A fresh entry starts with one tally.
    pub fn new(name: String, tags: Vec<String>) -> Self {
        Self {
            name,
            counter: 1,
            tags,
        }
    }

    pub fn is_done(&self) -> bool {
        self.counter < 0
    }

    /// Number of tallies regardless of the done flag.
    pub fn times(&self) -> u64 {
        self.counter.unsigned_abs()
    }
}

/// An entry paired with its position in the owning collection.
///
/// The index is a display identifier, stable only while the collection is
/// unmodified; it is what users type to address an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEntry {
    pub index: usize,
    pub entry: Entry,
}

/// Assigns positional display indexes to a list of entries.
pub fn index_entries(entries: &[Entry]) -> Vec<DisplayEntry> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| DisplayEntry {
            index,
            entry: entry.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_entries_start_at_one() {
        let entry = Entry::new("Buy milk".into(), vec!["errand".into()]);
        assert_eq!(entry.counter, 1);
        assert!(!entry.is_done());
        assert_eq!(entry.times(), 1);
    }

    #[test]
    fn done_is_the_sign() {
        let mut entry = Entry::new("Buy milk".into(), vec![]);
        entry.counter = -3;
        assert!(entry.is_done());
        assert_eq!(entry.times(), 3);
    }

    #[test]
    fn indexes_follow_positions() {
        let entries = vec![
            Entry::new("A".into(), vec![]),
            Entry::new("B".into(), vec![]),
        ];
        let indexed = index_entries(&entries);
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].index, 0);
        assert_eq!(indexed[1].index, 1);
        assert_eq!(indexed[1].entry.name, "B");
    }
}
