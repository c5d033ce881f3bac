use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lang::DEFAULT_LANGUAGES;

#[derive(Parser, Debug)]
#[command(name = "infinity-army-to-sqlite")]
#[command(version, about = "Convert Infinity army JSON dumps to a normalized SQLite database")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a local per-language JSON dump into the normalized database
    Load {
        /// Directory containing one subdirectory per language tag
        input_dir: PathBuf,

        /// Output SQLite database path
        output_db: PathBuf,

        /// Delete any existing database and re-create the schema
        #[arg(short, long)]
        init: bool,

        /// Supported language tags (comma-separated); the first is the
        /// reference language for structural fields
        #[arg(
            short,
            long,
            value_delimiter = ',',
            default_values_t = DEFAULT_LANGUAGES.iter().map(ToString::to_string)
        )]
        languages: Vec<String>,
    },

    /// List all normalized table names
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
