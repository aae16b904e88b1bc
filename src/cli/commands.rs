//! CLI command definitions

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daylog")]
#[command(about = "Validated daily journal entries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $DAYLOG_CONFIG, then ./daylog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build an entry from the command line
    New {
        /// What did you work on today?
        #[arg(long)]
        work: String,

        /// What's one thing you struggled with today?
        #[arg(long)]
        struggle: String,

        /// What will you study/work on tomorrow?
        #[arg(long)]
        intention: String,

        /// Use this id instead of generating one
        #[arg(long)]
        id: Option<String>,

        /// Creation time (ISO-8601, e.g. 2025-01-17T09:30:00Z)
        #[arg(long, value_name = "TIMESTAMP")]
        created_at: Option<DateTime<Utc>>,

        /// Last update time (ISO-8601)
        #[arg(long, value_name = "TIMESTAMP")]
        updated_at: Option<DateTime<Utc>>,
    },

    /// Upgrade an entry request (JSON) into a full entry
    Create {
        /// Request file (default: stdin)
        file: Option<PathBuf>,
    },

    /// Validate and normalize an entry (JSON)
    Validate {
        /// Entry file (default: stdin)
        file: Option<PathBuf>,
    },

    /// Apply new text to an existing entry
    Revise {
        /// Entry to revise
        entry: PathBuf,

        /// Request file with the new text (default: stdin)
        changes: Option<PathBuf>,
    },

    /// Describe the text fields of an entry
    Fields,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
