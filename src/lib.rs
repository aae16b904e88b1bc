//! daylog - Validated daily journal entries
//!
//! Defines the record a journal API accepts (`EntryCreate`) and the record it
//! stores and returns (`Entry`), with trimming, length limits, schema
//! versioning and timestamp ordering enforced at construction time.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use domain::{Entry, EntryCreate, ValidationError};
pub use error::DaylogError;
