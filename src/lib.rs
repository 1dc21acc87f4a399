pub mod batch;
pub mod cli;
pub mod ident;
pub mod resolve;
pub mod table;

use clap::Parser;
use cli::{Cli, Command, ExitCode};

use crate::batch::BatchConfig;
use crate::table::Value;

/// Run the pidgen CLI and return an exit code.
pub fn run() -> u8 {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        eprintln!("pidgen: no command provided. Try --help.");
        return ExitCode::Refusal.into();
    };

    match command {
        Command::Run { files, dir, json } => {
            let config = if !files.is_empty() {
                let files = match &dir {
                    Some(dir) => files.iter().map(|f| dir.join(f)).collect(),
                    None => files,
                };
                BatchConfig::with_files(files)
            } else if let Some(dir) = dir {
                BatchConfig::with_dir(dir)
            } else {
                BatchConfig::default()
            };

            let result = batch::run_batch(&config);
            if json {
                println!("{}", result.report.to_json());
            } else {
                println!("{}", result.report.to_human());
            }

            if result.report.has_findings() {
                ExitCode::Findings.into()
            } else {
                ExitCode::Success.into()
            }
        }
        Command::Hash { value } => {
            println!("{}", ident::participant_id(&Value::Text(value)));
            ExitCode::Success.into()
        }
    }
}
