//! Domain layer - Journal entry records and their validation rules

pub mod entry;
pub mod entry_create;
pub mod field;
pub mod validation;

pub use entry::{Entry, EntryBuilder, TimestampDefaults, SCHEMA_VERSION};
pub use entry_create::EntryCreate;
pub use field::EntryField;
pub use validation::{ValidationError, Violation, ViolationKind};
