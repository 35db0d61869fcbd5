//! Command-line interface for xmlite
//!
//! Usage:
//!   xmlite `<path>` `[format]`   - process a file and print it to stdout
//!   xmlite --formats           - list all available output formats
//!
//! The default format is ast-pretty, the canonical indented serialization.

use std::fs;
use std::process;

use clap::{Arg, ArgAction, Command};
use xmlite::processor::{available_formats, process_source, OutputFormat};

fn main() {
    let matches = Command::new("xmlite")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and pretty-printing xmlite documents")
        .arg(
            Arg::new("formats")
                .long("formats")
                .action(ArgAction::SetTrue)
                .help("List all available output formats"),
        )
        .arg(
            Arg::new("path")
                .help("Path to the document to process")
                .required_unless_present("formats")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .help("Output format (e.g. ast-pretty, token-json)")
                .default_value("ast-pretty")
                .index(2),
        )
        .get_matches();

    if matches.get_flag("formats") {
        for name in available_formats() {
            println!("{}", name);
        }
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or_default();
    let format_name = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or_default();

    if let Err(err) = run(path, format_name) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(path: &str, format_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let format = OutputFormat::from_string(format_name)?;
    let source =
        fs::read_to_string(path).map_err(|err| format!("cannot read '{}': {}", path, err))?;
    let output = process_source(&source, format)?;
    print!("{}", output);
    Ok(())
}
