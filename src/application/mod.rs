//! Application layer - Use cases and orchestration

pub mod create_entry;
pub mod manage_config;
pub mod revise_entry;
pub mod validate_entry;

pub use create_entry::CreateEntryService;
pub use manage_config::ConfigService;
pub use revise_entry::ReviseEntryService;
pub use validate_entry::ValidateEntryService;
