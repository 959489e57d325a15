//! External extractor adapter.
//!
//! Wraps the Postlight Parser command line tool
//! (<https://github.com/postlight/parser>) as a blocking subprocess call.
//! The tool takes a URL as its sole argument and prints a JSON payload on
//! stdout; failures are reported either through a non-zero exit code or an
//! `error` field inside an otherwise well-formed payload.
//!
//! This module never terminates the process. Every failure mode is returned
//! as a structured [`PerlegoError`] so the CLI boundary can print its own
//! diagnostics and choose the host exit code.

use std::path::Path;
use std::process::Command;

use serde_json::Value;

use crate::article::ExtractionResult;
use crate::{PerlegoError, Result};

/// Default location of the postlight-parser command line driver.
pub const DEFAULT_PARSER_PATH: &str = "/opt/homebrew/bin/postlight-parser";

/// Invoke the external extractor for `url` and parse its JSON payload.
///
/// Blocks until the subprocess exits. On success returns the parsed
/// [`ExtractionResult`] with its `content` field still holding raw HTML.
///
/// # Errors
///
/// - [`PerlegoError::ExtractorFailed`] on a non-zero exit code, carrying the
///   tool's own exit code and captured stderr.
/// - [`PerlegoError::ExtractorReported`] when the payload contains an
///   `error` field despite a zero exit code.
/// - [`PerlegoError::JsonDecode`] when stdout is not parseable JSON.
pub fn run(url: &str, parser_path: &Path) -> Result<ExtractionResult> {
    let output = Command::new(parser_path).arg(url).output()?;

    if !output.status.success() {
        return Err(PerlegoError::ExtractorFailed {
            url: url.to_string(),
            // A signal-terminated child has no code; treat it as a plain failure.
            code: output.status.code().unwrap_or(1),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_payload(url, &stdout)
}

/// Parse the tool's stdout into an extraction result.
///
/// The tool may emit banner or log lines before the payload, so parsing
/// starts at the first `{`.
fn parse_payload(url: &str, stdout: &str) -> Result<ExtractionResult> {
    let json_start = stdout.find('{').unwrap_or(stdout.len());
    let raw = &stdout[json_start..];

    let value: Value = serde_json::from_str(raw)
        .map_err(|source| PerlegoError::JsonDecode { name: url.to_string(), source })?;

    if value.get("error").is_some() {
        let messages = match value.get("messages") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        return Err(PerlegoError::ExtractorReported { url: url.to_string(), messages });
    }

    serde_json::from_value(value)
        .map_err(|source| PerlegoError::JsonDecode { name: url.to_string(), source })
}
