use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyzError};
use crate::model::Entry;

/// Replaces an entry's name and tags in place. The counter is untouched, so
/// tallies and the done flag survive a rename.
pub fn run(
    entries: &mut [Entry],
    index: usize,
    name: String,
    tags: Vec<String>,
) -> Result<CmdResult> {
    let entry = entries
        .get_mut(index)
        .ok_or(TallyzError::EntryNotFound(index))?;
    entry.name = name;
    entry.tags = tags;

    Ok(CmdResult::default()
        .with_affected_entries(vec![entry.clone()])
        .with_message(CmdMessage::success(format!("Updated entry {}", index))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_name_and_tags_keeping_counter() {
        let mut entries = vec![Entry {
            name: "Buy milk".into(),
            counter: 7,
            tags: vec!["errand".into()],
        }];

        run(&mut entries, 0, "Buy oat milk".into(), vec!["food".into()]).unwrap();

        assert_eq!(entries[0].name, "Buy oat milk");
        assert_eq!(entries[0].tags, vec!["food"]);
        assert_eq!(entries[0].counter, 7);
    }

    #[test]
    fn out_of_range_index_fails() {
        let mut entries = vec![Entry::new("A".into(), vec![])];
        let result = run(&mut entries, 5, "B".into(), vec![]);
        assert!(matches!(result, Err(TallyzError::EntryNotFound(5))));
    }
}
