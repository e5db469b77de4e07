//! Turns core results into terminal text: grid rows, the status bar, and
//! leveled messages. Pure string-in string-out so everything here is
//! testable without a terminal.

use super::styles;
use tallyz::commands::{CmdMessage, MessageLevel};
use tallyz::model::DisplayEntry;
use tallyz::search::Query;

/// One grid row per entry: ID, name, tally, tags.
pub fn entry_row(de: &DisplayEntry) -> Vec<String> {
    vec![
        de.index.to_string(),
        de.entry.name.clone(),
        de.entry.counter.to_string(),
        tags_cell(&de.entry.tags),
    ]
}

/// Tags render as entered, hash-marked and space-joined.
pub fn tags_cell(tags: &[String]) -> String {
    if tags.is_empty() {
        String::new()
    } else {
        format!("#{}", tags.join(" #"))
    }
}

/// The one-line state summary above the grid: page position, active tag
/// filter, query text.
pub fn status_line(query: &Query, page: usize, pages: usize) -> String {
    let tags = tags_cell(&query.tags);
    let text = if query.text.is_empty() {
        String::new()
    } else {
        format!("\t{}", query.text)
    };
    let line = format!("Page[{:>3}/{:>3}]\t| {} | {}", page + 1, pages, tags, text);
    styles::STATUS.apply_to(line).to_string()
}

pub fn message_line(message: &CmdMessage) -> String {
    let style = match message.level {
        MessageLevel::Info => &styles::INFO,
        MessageLevel::Success => &styles::SUCCESS,
        MessageLevel::Warning => &styles::WARNING,
        MessageLevel::Error => &styles::ERROR,
    };
    style.apply_to(&message.content).to_string()
}

pub fn error_line(text: &str) -> String {
    styles::ERROR.apply_to(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallyz::model::Entry;

    #[test]
    fn entry_rows_carry_index_counter_and_tags() {
        console::set_colors_enabled(false);
        let de = DisplayEntry {
            index: 4,
            entry: Entry {
                name: "Buy milk".into(),
                counter: -3,
                tags: vec!["errand".into(), "food".into()],
            },
        };
        assert_eq!(entry_row(&de), vec!["4", "Buy milk", "-3", "#errand #food"]);
    }

    #[test]
    fn tags_cell_is_empty_without_tags() {
        assert_eq!(tags_cell(&[]), "");
        assert_eq!(tags_cell(&["a".to_string()]), "#a");
    }

    #[test]
    fn status_line_shows_page_tags_and_text() {
        console::set_colors_enabled(false);
        let query = Query {
            text: "milk".into(),
            tags: vec!["errand".into()],
            ..Query::default()
        };
        assert_eq!(
            status_line(&query, 0, 3),
            "Page[  1/  3]\t| #errand | \tmilk"
        );

        let blank = status_line(&Query::default(), 1, 2);
        assert_eq!(blank, "Page[  2/  2]\t|  | ");
    }

    #[test]
    fn messages_pass_their_content_through() {
        console::set_colors_enabled(false);
        let msg = CmdMessage::error("ID is out of range");
        assert_eq!(message_line(&msg), "ID is out of range");
    }
}
