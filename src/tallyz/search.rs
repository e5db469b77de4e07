//! # Search Engine
//!
//! Selects and orders entries by free-text and tag criteria. Pure: a query
//! in, an ordered subset out, no state beyond the [`Query`] itself.
//!
//! Text matching has four non-regex shapes (substring/exact crossed with
//! case folding) and two regex shapes (search anywhere / anchored at the
//! start). `explicit` means the stricter variant of whichever mode is
//! active: whole-string equality without regex, match-at-position-0 with it.
//! Note the asymmetry: an anchored regex is *not* required to consume the
//! whole name.

use crate::error::Result;
use crate::model::DisplayEntry;
use regex::RegexBuilder;

/// The criteria of one search call. Used to select, never to sort.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub text: String,
    pub tags: Vec<String>,
    pub regex: bool,
    pub case_sensitive: bool,
    pub explicit: bool,
}

impl Query {
    /// True when neither text nor tags constrain the selection.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.tags.is_empty()
    }
}

/// Selects the entries matching `query`, ordered by descending counter.
///
/// Ties keep the relative order of the input (stable sort), so equal-counter
/// entries list in collection order. An empty query takes an explicit fast
/// path that skips predicate evaluation; the result is identical to every
/// predicate passing.
///
/// Fails with [`crate::error::TallyzError::InvalidPattern`] when `regex`
/// mode is on and the text does not compile; there is no fallback matching.
pub fn select(entries: &[DisplayEntry], query: &Query) -> Result<Vec<DisplayEntry>> {
    let mut selected: Vec<DisplayEntry> = if query.is_empty() {
        entries.to_vec()
    } else {
        let text = text_predicate(query)?;
        entries
            .iter()
            .filter(|de| text(&de.entry.name) && tags_match(&de.entry.tags, &query.tags))
            .cloned()
            .collect()
    };

    selected.sort_by_key(|de| std::cmp::Reverse(de.entry.counter));
    Ok(selected)
}

fn text_predicate(query: &Query) -> Result<Box<dyn Fn(&str) -> bool + '_>> {
    if query.text.is_empty() {
        return Ok(Box::new(|_| true));
    }

    if query.regex {
        let pattern = RegexBuilder::new(&query.text)
            .case_insensitive(!query.case_sensitive)
            .build()?;
        let anchored = query.explicit;
        return Ok(Box::new(move |name| match pattern.find(name) {
            // Leftmost match at byte 0 means "matches starting at the
            // start"; the pattern may stop short of the end.
            Some(m) if anchored => m.start() == 0,
            Some(_) => true,
            None => false,
        }));
    }

    Ok(match (query.explicit, query.case_sensitive) {
        (true, true) => Box::new(|name| name == query.text),
        (true, false) => Box::new(|name| name.to_lowercase() == query.text.to_lowercase()),
        (false, true) => Box::new(|name| name.contains(&query.text)),
        (false, false) => Box::new(|name| {
            name.to_lowercase().contains(&query.text.to_lowercase())
        }),
    })
}

/// Every query tag must case-insensitively equal some entry tag.
fn tags_match(entry_tags: &[String], query_tags: &[String]) -> bool {
    query_tags.iter().all(|wanted| {
        let wanted = wanted.to_lowercase();
        entry_tags.iter().any(|tag| tag.to_lowercase() == wanted)
    })
}
