//! CLI command implementations
//!
//! Each command resolves its configuration, builds one store and one
//! [`OperationHandler`], then either serves it over HTTP or drives it from
//! stdin.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::api::{ApiError, Operation, OperationHandler, OperationResponse, RequestContext};
use crate::graphql::build_schema;
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::{DataStore, SharedStore};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_json_line, write_stdout};

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => serve(config.as_deref(), host, port),
        Command::Exec { config } => exec(config.as_deref()),
        Command::Schema => schema(),
    }
}

/// Start the HTTP server and block until shutdown
pub fn serve(config_path: Option<&Path>, host: Option<String>, port: Option<u16>) -> CliResult<()> {
    log_event(Event::BootStart);

    let mut config = load_config(config_path)?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config_error("--port must be > 0"));
        }
        config.server.port = port;
    }

    let handler = build_handler(&config);
    let server = HttpServer::new(config.server, handler);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await }).map_err(|e| {
        let reason = e.to_string();
        log_event_with_fields(Event::ServeFailed, &[("reason", &reason)]);
        CliError::serve_failed(format!("HTTP server failed: {}", reason))
    })
}

/// Execute operations from stdin against a single store.
///
/// One response line is written per input line. A line that does not parse
/// as an operation, including one that is not UTF-8, produces an
/// `INVALID_REQUEST` response and processing continues with the next line.
/// Only a failing read or write stops the run.
pub fn exec(config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let handler = build_handler(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    exec_lines(&handler, stdin.lock(), &mut stdout.lock())
}

/// Print the GraphQL SDL
pub fn schema() -> CliResult<()> {
    let handler = OperationHandler::new(SharedStore::new(DataStore::default()));
    write_stdout(&build_schema(handler).sdl())
}

/// Drive a handler from JSON lines, writing one response per line
pub fn exec_lines<R: BufRead, W: Write>(
    handler: &OperationHandler,
    reader: R,
    writer: &mut W,
) -> CliResult<()> {
    for line in read_lines(reader) {
        let line = line?;
        let result = serde_json::from_slice::<Operation>(&line)
            .map_err(|e| ApiError::invalid_request(e.to_string()))
            .and_then(|op| handler.execute(op, &RequestContext::new()));

        write_json_line(writer, &OperationResponse::from_result(&result))?;
    }
    Ok(())
}

fn load_config(config_path: Option<&Path>) -> CliResult<Config> {
    let (config, source) = Config::resolve(config_path)?;
    let source = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let port = config.server.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("source", &source),
            ("host", &config.server.host),
            ("port", &port),
        ],
    );
    Ok(config)
}

fn build_handler(config: &Config) -> OperationHandler {
    let store = config.store.build();
    let authors = store.authors().len().to_string();
    let books = store.books().len().to_string();
    log_event_with_fields(
        Event::StoreSeeded,
        &[("authors", &authors), ("books", &books)],
    );
    OperationHandler::new(SharedStore::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn run_lines(input: &str) -> Vec<Value> {
        let handler = OperationHandler::new(SharedStore::default());
        let mut out = Vec::new();
        exec_lines(&handler, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_exec_lines_share_one_store() {
        let responses = run_lines(concat!(
            "{\"op\":\"addAuthor\",\"name\":\"Robin Hobb\"}\n",
            "{\"op\":\"author\",\"id\":4}\n",
        ));

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[1]["success"], json!(true));
        assert_eq!(responses[1]["data"], json!({"id": 4, "name": "Robin Hobb"}));
    }

    #[test]
    fn test_exec_bad_line_continues() {
        let responses = run_lines(concat!(
            "{\"op\":\"frobnicate\"}\n",
            "not json\n",
            "{\"op\":\"books\"}\n",
        ));

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0]["error"]["code"], json!("INVALID_REQUEST"));
        assert_eq!(responses[1]["error"]["code"], json!("INVALID_REQUEST"));
        assert_eq!(responses[2]["data"].as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn test_exec_non_utf8_line_continues() {
        let handler = OperationHandler::new(SharedStore::default());
        let input: &[u8] = b"{\"op\":\"books\"}\n{\"op\":\"\xff\"}\n{\"op\":\"authors\"}\n";
        let mut out = Vec::new();
        exec_lines(&handler, input, &mut out).unwrap();

        let responses: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(responses.len(), 3);
        assert_eq!(responses[1]["error"]["code"], json!("INVALID_REQUEST"));
        assert_eq!(responses[2]["data"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_exec_read_failure_is_fatal() {
        struct FailingReader;

        impl std::io::Read for FailingReader {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"))
            }
        }

        let handler = OperationHandler::new(SharedStore::default());
        let mut out = Vec::new();
        let err = exec_lines(&handler, std::io::BufReader::new(FailingReader), &mut out)
            .unwrap_err();
        assert_eq!(err.code(), &crate::cli::CliErrorCode::IoError);
        assert!(out.is_empty());
    }

    #[test]
    fn test_exec_not_found_response() {
        let responses = run_lines("{\"op\":\"updateBook\",\"id\":42,\"name\":\"x\",\"authorId\":1}\n");
        assert_eq!(responses[0]["success"], json!(false));
        assert_eq!(responses[0]["error"]["code"], json!("NOT_FOUND"));
        assert_eq!(responses[0]["error"]["status"], json!(404));
    }
}
