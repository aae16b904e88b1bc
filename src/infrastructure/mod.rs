//! Infrastructure layer - Configuration and input I/O

pub mod config;
pub mod input;

pub use config::{Config, OutputFormat};
pub use input::read_json;
