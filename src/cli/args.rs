//! CLI argument definitions using clap
//!
//! Commands:
//! - event-ingest serve [--config <path>] [--in-memory]
//! - event-ingest check [--input <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// event-ingest - validate and persist ad interaction events
#[derive(Parser, Debug)]
#[command(name = "event-ingest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP ingest server
    Serve {
        /// Path to a JSON configuration file; environment variables override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keep accepted events in process memory instead of MongoDB
        #[arg(long)]
        in_memory: bool,
    },

    /// Validate and normalize a batch offline, printing the result
    Check {
        /// File holding `{ "events": [...] }`; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["event-ingest", "serve", "--config", "ingest.json"]).unwrap();
        match cli.command {
            Command::Serve { config, in_memory } => {
                assert_eq!(config, Some(PathBuf::from("ingest.json")));
                assert!(!in_memory);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["event-ingest", "check"]).unwrap();
        assert!(matches!(cli.command, Command::Check { input: None }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["event-ingest"]).is_err());
    }
}
