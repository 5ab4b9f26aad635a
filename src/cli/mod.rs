//! CLI module
//!
//! Provides command-line interface for:
//! - serve: boot the HTTP ingest server
//! - check: validate a batch offline

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, check_batch, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_input, write_error, write_response};
