use std::{env, fs, path::PathBuf};

use clap_complete::Shell;

fn perlego_cmd() -> clap::Command {
    clap::Command::new("perlego")
        .about("Convert Postlight Parser extraction results for a URL")
        .arg(clap::arg!(<URL> "URL to parse"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format")
                .default_value("json")
                .value_parser(["json", "markdown", "text"]),
        )
        .arg(clap::arg!(-w --body_width <WIDTH> "Character offset at which to wrap lines for plain-text"))
        .arg(clap::arg!(-p --parser_path <PATH> "Path to the postlight-parser command line driver"))
}

fn read_cmd() -> clap::Command {
    clap::Command::new("perlego-read")
        .about("Convert a saved Postlight Parser JSON result")
        .arg(clap::arg!(<FILENAME> "Postlight Parser JSON result file (use '-' to read from stdin)"))
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format")
                .default_value("json")
                .value_parser(["json", "markdown", "text"]),
        )
        .arg(clap::arg!(-w --body_width <WIDTH> "Character offset at which to wrap lines for plain-text"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    for (name, mut cmd) in [("perlego", perlego_cmd()), ("perlego-read", read_cmd())] {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            clap_complete::generate_to(shell, &mut cmd, name, &completions_dir).unwrap();
        }
    }
}
