//! Error types for perlego operations.
//!
//! This module defines the main error type [`PerlegoError`] which represents
//! all possible errors that can occur while invoking the external extractor,
//! loading saved results, transforming content, and formatting output.
//!
//! # Example
//!
//! ```rust
//! use perlego_core::{PerlegoError, Result};
//!
//! fn require_title(title: Option<&str>) -> Result<&str> {
//!     title.ok_or(PerlegoError::MissingField("title"))
//! }
//! ```

use thiserror::Error;

/// Main error type for conversion and formatting operations.
///
/// Library code never terminates the process; every failure is surfaced as
/// one of these variants and the CLI boundary decides how to map it to a
/// process exit code via [`PerlegoError::exit_code`].
#[derive(Error, Debug)]
pub enum PerlegoError {
    /// The external extractor exited with a non-zero status.
    ///
    /// Carries the failed URL, the tool's exit code, and its captured
    /// standard-error text so the caller can relay the diagnostic verbatim.
    #[error("extractor failed for {url} (exit code {code})")]
    ExtractorFailed { url: String, code: i32, stderr: String },

    /// The extractor exited zero but its JSON payload reported an error.
    ///
    /// The payload's `messages` field describes the failure.
    #[error("extractor reported an error for {url}: {messages}")]
    ExtractorReported { url: String, messages: String },

    /// A JSON payload could not be decoded.
    ///
    /// `name` identifies the source of the payload: a file path, `stdin`,
    /// or the URL whose extractor output failed to parse.
    #[error("failed to load JSON from {name}")]
    JsonDecode {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// File/stdin read errors and subprocess spawn failures.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An extraction result could not be serialized back to JSON.
    #[error("failed to serialize result: {0}")]
    JsonEncode(#[from] serde_json::Error),

    /// The extraction result has no `content` field to transform.
    #[error("extraction result has no content field")]
    MissingContent,

    /// A field required by an output template is absent.
    #[error("extraction result is missing required field `{0}`")]
    MissingField(&'static str),

    /// `date_published` did not match the expected timestamp shape.
    #[error("invalid date_published {value:?}: {reason}")]
    InvalidDate { value: String, reason: String },

    /// No formatter is registered under the requested name.
    #[error("unknown format `{name}` (known formats: {known})")]
    UnknownFormat { name: String, known: String },

    /// HTML could not be converted to Markdown.
    #[error("failed to convert HTML: {0}")]
    HtmlConvertError(String),
}

impl PerlegoError {
    /// Process exit code the CLI should terminate with for this error.
    ///
    /// Subprocess failures propagate the tool's own exit code; everything
    /// else is a generic failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            PerlegoError::ExtractorFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for PerlegoError.
pub type Result<T> = std::result::Result<T, PerlegoError>;
