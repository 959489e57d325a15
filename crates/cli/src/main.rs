use std::path::PathBuf;

use clap::Parser;
use perlego_cli::{fail, lookup_format, render, usage_error};
use perlego_core::extractor;

/// Get a cleaner version of a web page for reading purposes.
///
/// Invokes the Postlight Parser command line driver for a URL, converts the
/// extracted HTML content to Markdown and plain text, and prints the result
/// in the selected output format.
#[derive(Parser, Debug)]
#[command(name = "perlego", version, about = "Convert Postlight Parser extraction results for a URL")]
struct Args {
    /// URL to parse
    #[arg(value_name = "URL")]
    url: String,

    /// Output format
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: String,

    /// Character offset at which to wrap lines for plain-text
    #[arg(short = 'w', long, value_name = "WIDTH")]
    body_width: Option<usize>,

    /// Path to the postlight-parser command line driver
    #[arg(short, long, default_value = extractor::DEFAULT_PARSER_PATH, value_name = "PATH")]
    parser_path: PathBuf,
}

fn main() {
    let args = Args::parse();

    let formatter = match lookup_format(&args.format) {
        Ok(formatter) => formatter,
        Err(err) => fail(err),
    };

    if url::Url::parse(&args.url).is_err() {
        usage_error(&format!("invalid URL: {}", args.url));
    }

    let result = match extractor::run(&args.url, &args.parser_path) {
        Ok(result) => result,
        Err(err) => fail(err),
    };

    match render(result, formatter, args.body_width) {
        Ok(output) => println!("{output}"),
        Err(err) => fail(err),
    }
}
