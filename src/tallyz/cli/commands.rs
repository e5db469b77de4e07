//! Interactive input grammar.
//!
//! Three families of input: `#...` is tag-filter shorthand, `/...` is a
//! command, anything else becomes the query text. Parsing is pure and never
//! fails; unparseable forms come back as [`Input::Malformed`] with the text
//! the status line should show.

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    /// Page number as typed (1-based); the app clamps it.
    Page(usize),
    NextPage,
    PrevPage,
    SetTags(Vec<String>),
    ClearTags,
    ToggleFlags(Vec<SearchFlag>),
    ResetFlags,
    Save,
    Reload,
    Add {
        name: String,
        tags: Vec<String>,
    },
    Edit {
        index: usize,
        name: String,
        tags: Vec<String>,
    },
    ToggleDone(usize),
    Increment(usize),
    Decrement(usize),
    SetSearch(String),
    Malformed(&'static str),
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFlag {
    Explicit,
    Regex,
    Case,
}

pub fn parse(line: &str) -> Input {
    // `#a #b` is shorthand for `/tags a #b`.
    if let Some(rest) = line.strip_prefix('#') {
        return parse_command("tags", rest);
    }

    match line.strip_prefix('/') {
        Some(rest) => match rest.split_once(' ') {
            Some((cmd, args)) => parse_command(cmd, args),
            None => parse_command(rest, ""),
        },
        None => Input::SetSearch(line.to_string()),
    }
}

fn parse_command(cmd: &str, args: &str) -> Input {
    match cmd {
        "exit" | "quit" => Input::Quit,

        "page" => match args.parse::<usize>() {
            Ok(n) => Input::Page(n),
            Err(_) => Input::Malformed("Page number must be an integer"),
        },

        "" | "next" if args.is_empty() => Input::NextPage,
        "/" | "back" | "prev" | "-" if args.is_empty() => Input::PrevPage,

        "tags" | "tag" => {
            let tags: Vec<String> = args
                .split_whitespace()
                .map(|tag| tag.trim_start_matches('#').to_string())
                .collect();
            if tags.is_empty() {
                Input::ClearTags
            } else {
                Input::SetTags(tags)
            }
        }

        "search" | "?" => {
            if args.trim().is_empty() {
                return Input::ResetFlags;
            }
            let flags: Vec<SearchFlag> = args
                .split_whitespace()
                .filter_map(|arg| match arg {
                    "e" | "exp" | "explicit" => Some(SearchFlag::Explicit),
                    "r" | "re" | "regex" => Some(SearchFlag::Regex),
                    "c" | "case" => Some(SearchFlag::Case),
                    _ => None,
                })
                .collect();
            Input::ToggleFlags(flags)
        }

        "save" | "s" => Input::Save,
        "reload" | "refresh" | "re" => Input::Reload,

        "add" | "a" => {
            let (tags, name) = split_tags(args);
            Input::Add { name, tags }
        }

        "edit" | "e" => {
            let Some((index, rest)) = args.split_once(' ') else {
                return Input::Malformed("Malformed input");
            };
            let Ok(index) = index.parse::<usize>() else {
                return Input::Malformed("ID is not a number");
            };
            let (tags, name) = split_tags(rest);
            Input::Edit { index, name, tags }
        }

        "done" | "check" | "d" | "undone" | "flip" | "undo" | "uncheck" | "un" => {
            match args.parse::<usize>() {
                Ok(index) => Input::ToggleDone(index),
                Err(_) => Input::Malformed("ID is not a number"),
            }
        }

        "dec" | "-" | "minus" => match args.parse::<usize>() {
            Ok(index) => Input::Decrement(index),
            Err(_) => Input::Malformed("ID is not a number"),
        },

        "inc" | "+" => match args.parse::<usize>() {
            Ok(index) => Input::Increment(index),
            Err(_) => Input::Malformed("ID is not a number"),
        },

        // A bare `/3` tallies entry 3.
        _ if args.is_empty() && cmd.bytes().all(|b| b.is_ascii_digit()) => {
            match cmd.parse::<usize>() {
                Ok(index) => Input::Increment(index),
                Err(_) => Input::Malformed("ID is not a number"),
            }
        }

        _ => Input::Unknown(format!("{} {}", cmd, args).trim().to_string()),
    }
}

/// Peels leading `#tag` words off `args`, returning the tags (markers
/// stripped) and the remaining text.
fn split_tags(args: &str) -> (Vec<String>, String) {
    let mut tags = Vec::new();
    let mut rest = args;
    while rest.starts_with('#') {
        match rest.split_once(' ') {
            Some((tag, tail)) => {
                tags.push(tag[1..].to_string());
                rest = tail;
            }
            None => {
                tags.push(rest[1..].to_string());
                rest = "";
            }
        }
    }
    (tags, rest.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_becomes_the_query() {
        assert_eq!(parse("milk"), Input::SetSearch("milk".into()));
        assert_eq!(parse(""), Input::SetSearch("".into()));
    }

    #[test]
    fn quit_and_aliases() {
        assert_eq!(parse("/quit"), Input::Quit);
        assert_eq!(parse("/exit"), Input::Quit);
    }

    #[test]
    fn page_navigation() {
        assert_eq!(parse("/page 3"), Input::Page(3));
        assert_eq!(
            parse("/page x"),
            Input::Malformed("Page number must be an integer")
        );
        assert_eq!(parse("/"), Input::NextPage);
        assert_eq!(parse("/next"), Input::NextPage);
        assert_eq!(parse("//"), Input::PrevPage);
        assert_eq!(parse("/back"), Input::PrevPage);
        assert_eq!(parse("/prev"), Input::PrevPage);
        assert_eq!(parse("/-"), Input::PrevPage);
    }

    #[test]
    fn hash_shorthand_sets_tags() {
        assert_eq!(
            parse("#family #urgent"),
            Input::SetTags(vec!["family".into(), "urgent".into()])
        );
        assert_eq!(parse("#"), Input::ClearTags);
    }

    #[test]
    fn tags_command_strips_markers() {
        assert_eq!(
            parse("/tags #a b"),
            Input::SetTags(vec!["a".into(), "b".into()])
        );
        assert_eq!(parse("/tags"), Input::ClearTags);
        assert_eq!(parse("/tag"), Input::ClearTags);
    }

    #[test]
    fn search_flags_toggle_or_reset() {
        assert_eq!(
            parse("/search regex case"),
            Input::ToggleFlags(vec![SearchFlag::Regex, SearchFlag::Case])
        );
        assert_eq!(
            parse("/? e r c"),
            Input::ToggleFlags(vec![
                SearchFlag::Explicit,
                SearchFlag::Regex,
                SearchFlag::Case
            ])
        );
        assert_eq!(parse("/search"), Input::ResetFlags);
        // Unknown flag words are ignored, known ones still apply.
        assert_eq!(
            parse("/search bogus re"),
            Input::ToggleFlags(vec![SearchFlag::Regex])
        );
    }

    #[test]
    fn add_peels_leading_tags() {
        assert_eq!(
            parse("/add #errand #food Buy milk"),
            Input::Add {
                name: "Buy milk".into(),
                tags: vec!["errand".into(), "food".into()],
            }
        );
        assert_eq!(
            parse("/a Buy milk"),
            Input::Add {
                name: "Buy milk".into(),
                tags: vec![],
            }
        );
        // A lone tag and no name is fine.
        assert_eq!(
            parse("/add #solo"),
            Input::Add {
                name: "".into(),
                tags: vec!["solo".into()],
            }
        );
    }

    #[test]
    fn edit_wants_an_index_first() {
        assert_eq!(
            parse("/edit 2 #food Buy oat milk"),
            Input::Edit {
                index: 2,
                name: "Buy oat milk".into(),
                tags: vec!["food".into()],
            }
        );
        assert_eq!(parse("/edit 2"), Input::Malformed("Malformed input"));
        assert_eq!(parse("/e x name"), Input::Malformed("ID is not a number"));
    }

    #[test]
    fn counter_commands() {
        assert_eq!(parse("/done 1"), Input::ToggleDone(1));
        assert_eq!(parse("/un 1"), Input::ToggleDone(1));
        assert_eq!(parse("/flip 0"), Input::ToggleDone(0));
        assert_eq!(parse("/inc 2"), Input::Increment(2));
        assert_eq!(parse("/+ 2"), Input::Increment(2));
        assert_eq!(parse("/3"), Input::Increment(3));
        assert_eq!(parse("/dec 2"), Input::Decrement(2));
        assert_eq!(parse("/- 2"), Input::Decrement(2));
        assert_eq!(parse("/minus 2"), Input::Decrement(2));
        assert_eq!(parse("/done x"), Input::Malformed("ID is not a number"));
    }

    #[test]
    fn save_and_reload() {
        assert_eq!(parse("/save"), Input::Save);
        assert_eq!(parse("/s"), Input::Save);
        assert_eq!(parse("/reload"), Input::Reload);
        assert_eq!(parse("/refresh"), Input::Reload);
        assert_eq!(parse("/re"), Input::Reload);
    }

    #[test]
    fn unknown_commands_are_reported() {
        assert_eq!(parse("/frob 1"), Input::Unknown("frob 1".into()));
    }
}
