//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Load and validate configuration
//! 2. Install logging
//! 3. Connect the storage sink
//! 4. Bind and serve until shutdown

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::http_server::HttpServer;
use crate::ingest::{prepare_batch, BatchHandler, IngestError};
use crate::observability::{init_logging, LifecycleEvent};
use crate::schema::IngestRequest;
use crate::sink::{EventSink, MemorySink, MongoSink};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_input, write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, in_memory } => serve(config.as_deref(), in_memory),
        Command::Check { input } => check(input.as_deref()),
    }
}

/// Boot the service and serve until a shutdown signal arrives
pub fn serve(config_path: Option<&Path>, in_memory: bool) -> CliResult<()> {
    let config = Config::load(config_path)?;
    init_logging(&config.logging)?;

    tracing::info!(event = %LifecycleEvent::BootStart, version = env!("CARGO_PKG_VERSION"), "starting");
    tracing::info!(
        event = %LifecycleEvent::ConfigLoaded,
        addr = %config.server.socket_addr(),
        database = %config.mongodb.database,
        collection = %config.mongodb.collection,
        "configuration loaded"
    );

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("tokio runtime: {}", e)))?;

    runtime.block_on(serve_async(config, in_memory))
}

async fn serve_async(config: Config, in_memory: bool) -> CliResult<()> {
    let sink: Arc<dyn EventSink> = if in_memory {
        tracing::warn!("using in-memory sink; accepted events are not persisted");
        Arc::new(MemorySink::new())
    } else {
        Arc::new(MongoSink::connect(&config.mongodb).await?)
    };

    let backend = if in_memory { "memory" } else { "mongodb" };
    tracing::info!(event = %LifecycleEvent::SinkConnected, backend, "storage sink ready");

    let handler = BatchHandler::new(sink, config.mongodb.collection.clone());

    HttpServer::new(config.server, handler)
        .start()
        .await
        .map_err(|e| CliError::boot_failed(format!("HTTP server: {}", e)))
}

/// Validate and normalize a batch read from `input` (or stdin)
pub fn check(input: Option<&Path>) -> CliResult<()> {
    let content = read_input(input)?;
    check_batch(&content, Utc::now(), &mut io::stdout())
}

/// Run the write path up to, but not including, the sink.
///
/// Prints the normalized events on success. On failure prints the error
/// object and returns `CheckFailed`.
pub fn check_batch<W: Write>(content: &str, now: DateTime<Utc>, out: &mut W) -> CliResult<()> {
    let outcome = serde_json::from_str::<IngestRequest>(content)
        .map_err(|e| IngestError::MalformedRequest(e.to_string()))
        .and_then(|request| prepare_batch(&request, now));

    match outcome {
        Ok(events) => write_response(out, json!({ "events": events })),
        Err(e) => {
            write_error(out, e.code(), &e.to_string())?;
            Err(CliError::check_failed(e.to_string()))
        }
    }
}
