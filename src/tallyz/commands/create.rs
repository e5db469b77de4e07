use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Entry;

pub fn run(entries: &mut Vec<Entry>, name: String, tags: Vec<String>) -> Result<CmdResult> {
    let entry = Entry::new(name, tags);
    entries.push(entry.clone());

    Ok(CmdResult::default()
        .with_affected_entries(vec![entry])
        .with_message(CmdMessage::success(format!(
            "Added entry {}",
            entries.len() - 1
        ))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_with_counter_one() {
        let mut entries = Vec::new();
        let result = run(&mut entries, "Buy milk".into(), vec!["errand".into()]).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Buy milk");
        assert_eq!(entries[0].counter, 1);
        assert_eq!(entries[0].tags, vec!["errand"]);
        assert_eq!(result.affected_entries.len(), 1);
    }

    #[test]
    fn new_entries_land_at_the_end() {
        let mut entries = vec![Entry::new("A".into(), vec![])];
        run(&mut entries, "B".into(), vec![]).unwrap();
        assert_eq!(entries[1].name, "B");
    }
}
