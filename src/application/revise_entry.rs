//! Revise entry use case: new text for an existing entry

use crate::domain::{Entry, EntryCreate};
use crate::error::Result;
use chrono::{DateTime, Utc};

/// Produces a fresh entry value rather than mutating the old one
pub struct ReviseEntryService;

impl ReviseEntryService {
    pub fn execute(entry: &Entry, changes: &EntryCreate) -> Result<Entry> {
        Self::execute_at(entry, changes, Utc::now())
    }

    pub fn execute_at(
        entry: &Entry,
        changes: &EntryCreate,
        now: DateTime<Utc>,
    ) -> Result<Entry> {
        let revised = entry
            .revise_at(changes, now)
            .inspect_err(|e| log::warn!("rejected revision of {}: {}", entry.id(), e))?;
        log::info!("revised entry {}", revised.id());
        Ok(revised)
    }
}
