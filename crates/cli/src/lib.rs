//! Shared plumbing for the `perlego` and `perlego-read` binaries.
//!
//! Both entry points end the same way: transform the extraction result,
//! render it with the selected formatter, print to stdout. Failures are
//! reported as `[ERROR]`-prefixed lines on stderr and mapped to a process
//! exit code here, at the boundary; the core library never exits.

use owo_colors::OwoColorize;
use perlego_core::{ExtractionResult, FormatFn, PerlegoError, Result};

/// Exit code for usage errors (unknown format, invalid URL).
const USAGE_ERROR: i32 = 2;

/// Look up a formatter before doing any real work, so an unknown format
/// name fails without touching the extractor or stdin.
pub fn lookup_format(name: &str) -> Result<FormatFn> {
    perlego_core::registry().get(name)
}

/// Transform `result` and render it with `formatter`.
pub fn render(result: ExtractionResult, formatter: FormatFn, body_width: Option<usize>) -> Result<String> {
    let result = perlego_core::transform(result, body_width)?;
    formatter(&result)
}

/// Print the diagnostic lines for `err` on stderr.
///
/// Extractor failures relay the failed URL and the tool's own message on
/// separate lines; everything else is a single line.
pub fn report(err: &PerlegoError) {
    match err {
        PerlegoError::ExtractorFailed { url, stderr, .. } => {
            error_line(&format!("URL: {url}"));
            error_line(stderr);
        }
        PerlegoError::ExtractorReported { url, messages } => {
            error_line(&format!("URL: {url}"));
            error_line(messages);
        }
        other => error_line(&other.to_string()),
    }
}

/// Report `err` and terminate with the matching exit code.
pub fn fail(err: PerlegoError) -> ! {
    report(&err);
    let code = match &err {
        PerlegoError::UnknownFormat { .. } => USAGE_ERROR,
        _ => err.exit_code(),
    };
    std::process::exit(code)
}

/// Report an invalid command line argument and terminate with the usage
/// exit code.
pub fn usage_error(message: &str) -> ! {
    error_line(message);
    std::process::exit(USAGE_ERROR)
}

fn error_line(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}
