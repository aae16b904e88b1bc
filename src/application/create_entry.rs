//! Create entry use case: upgrade caller input into a stored entry

use crate::domain::{Entry, EntryCreate, TimestampDefaults};
use crate::error::Result;
use crate::infrastructure::Config;
use serde_json::Value;

/// Service that assigns identity and timestamps to new entries
pub struct CreateEntryService {
    timestamps: TimestampDefaults,
}

impl CreateEntryService {
    pub fn new(config: &Config) -> Self {
        CreateEntryService {
            timestamps: config.timestamps,
        }
    }

    /// Upgrade an already-validated input record
    pub fn execute(&self, input: EntryCreate) -> Result<Entry> {
        let entry = input.into_builder().timestamps(self.timestamps).build()?;
        log::info!("created entry {}", entry.id());
        Ok(entry)
    }

    /// Validate untyped input as `EntryCreate`, then upgrade it
    pub fn execute_value(&self, value: &Value) -> Result<Entry> {
        let input = EntryCreate::from_value(value).inspect_err(|e| {
            log::warn!("rejected entry input: {}", e);
        })?;
        self.execute(input)
    }
}
