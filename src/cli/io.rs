//! JSON I/O handling for CLI
//!
//! - Input: one `{ "events": [...] }` document from a file or stdin
//! - Output: one JSON object per invocation on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the raw batch text from `path`, or stdin when `None`
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    let content = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
    };

    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(content)
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    serde_json::to_writer(&mut *out, &response)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"events": []}}"#).unwrap();

        let content = read_input(Some(file.path())).unwrap();
        assert!(content.contains("events"));
    }

    #[test]
    fn test_read_input_rejects_blank_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_input(Some(file.path())).is_err());
    }

    #[test]
    fn test_write_error_shape() {
        let mut out = Vec::new();
        write_error(&mut out, "INGEST_EMPTY_BATCH", "No events found").unwrap();

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "INGEST_EMPTY_BATCH");
    }
}
