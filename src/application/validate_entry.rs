//! Validate entry use case: check and normalize a stored record

use crate::domain::{Entry, EntryBuilder, TimestampDefaults};
use crate::error::Result;
use crate::infrastructure::Config;
use serde_json::Value;

pub struct ValidateEntryService {
    timestamps: TimestampDefaults,
}

impl ValidateEntryService {
    pub fn new(config: &Config) -> Self {
        ValidateEntryService {
            timestamps: config.timestamps,
        }
    }

    /// Validate untyped data as an `Entry`, filling any absent defaults
    pub fn execute(&self, value: &Value) -> Result<Entry> {
        let entry = EntryBuilder::from_value(value)
            .timestamps(self.timestamps)
            .build()
            .inspect_err(|e| log::warn!("rejected entry: {}", e))?;
        log::debug!("validated entry {}", entry.id());
        Ok(entry)
    }
}
