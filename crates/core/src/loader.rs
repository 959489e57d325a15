//! Loading saved extraction results from files and stdin.
//!
//! An alternative to invoking the external extractor: a previously saved
//! JSON result can be read back from a file path, or from standard input
//! when the source is `"-"` or absent.

use std::fs;
use std::io::{self, Read};

use crate::article::ExtractionResult;
use crate::{PerlegoError, Result};

/// Name used in diagnostics when the payload came from standard input.
const STDIN_NAME: &str = "stdin";

/// Load an extraction result from `source`.
///
/// `None` or `"-"` reads standard input to EOF; anything else is opened as a
/// file path. The payload is parsed as one JSON object.
///
/// # Errors
///
/// [`PerlegoError::JsonDecode`] naming the source on a parse failure,
/// [`PerlegoError::Io`] when the file or stdin cannot be read.
pub fn load(source: Option<&str>) -> Result<ExtractionResult> {
    match source {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            parse(STDIN_NAME, &buffer)
        }
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            parse(path, &contents)
        }
    }
}

fn parse(name: &str, contents: &str) -> Result<ExtractionResult> {
    serde_json::from_str(contents)
        .map_err(|source| PerlegoError::JsonDecode { name: name.to_string(), source })
}
