//! Counter mutations: tally up/down and the done flip.
//!
//! The counter's magnitude moves by exactly one per call; the done flip
//! negates the whole value and touches nothing else.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TallyzError};
use crate::model::Entry;

pub fn increment(entries: &mut [Entry], index: usize) -> Result<CmdResult> {
    let entry = entries
        .get_mut(index)
        .ok_or(TallyzError::EntryNotFound(index))?;
    entry.counter += 1;

    Ok(CmdResult::default().with_affected_entries(vec![entry.clone()]))
}

pub fn decrement(entries: &mut [Entry], index: usize) -> Result<CmdResult> {
    let entry = entries
        .get_mut(index)
        .ok_or(TallyzError::EntryNotFound(index))?;
    entry.counter -= 1;

    Ok(CmdResult::default().with_affected_entries(vec![entry.clone()]))
}

/// Flips the done flag by negating the counter.
pub fn toggle_done(entries: &mut [Entry], index: usize) -> Result<CmdResult> {
    let entry = entries
        .get_mut(index)
        .ok_or(TallyzError::EntryNotFound(index))?;
    entry.counter = -entry.counter;

    let message = if entry.is_done() {
        CmdMessage::success(format!("Entry {} marked done", index))
    } else {
        CmdMessage::info(format!("Entry {} reopened", index))
    };
    Ok(CmdResult::default()
        .with_affected_entries(vec![entry.clone()])
        .with_message(message))
}
