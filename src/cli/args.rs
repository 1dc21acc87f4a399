use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pidgen",
    about = "Assign stable, de-identified participant identifiers to survey CSV exports.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process survey files and derive the participant_id column.
    Run {
        /// Input CSV files (default: 1h.csv 1m.csv 2h.csv 2m.csv 3h.csv 3m.csv).
        files: Vec<PathBuf>,

        /// Directory to resolve the default file set in.
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the participant identifier for a single value.
    Hash {
        /// Value to hash (treated as text).
        value: String,
    },
}
