use clap::Parser;
use perlego_cli::{fail, lookup_format, render};

/// Convert a previously saved Postlight Parser JSON result.
///
/// Reads the result from a file (or stdin with `-`), converts its HTML
/// content to Markdown and plain text, and prints it in the selected output
/// format.
#[derive(Parser, Debug)]
#[command(name = "perlego-read", version, about = "Convert a saved Postlight Parser JSON result")]
struct Args {
    /// Postlight Parser JSON result file (use "-" to read from stdin)
    #[arg(value_name = "FILENAME")]
    filename: String,

    /// Output format
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: String,

    /// Character offset at which to wrap lines for plain-text
    #[arg(short = 'w', long, value_name = "WIDTH")]
    body_width: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let formatter = match lookup_format(&args.format) {
        Ok(formatter) => formatter,
        Err(err) => fail(err),
    };

    let result = match perlego_core::load(Some(&args.filename)) {
        Ok(result) => result,
        Err(err) => fail(err),
    };

    match render(result, formatter, args.body_width) {
        Ok(output) => println!("{output}"),
        Err(err) => fail(err),
    }
}
