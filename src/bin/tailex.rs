//! Command-line interface for tailex
//! This binary extracts categorized theme tokens from a CSS file and prints
//! them in the requested output format.
//!
//! Usage:
//!   tailex extract `<path>` [--format `<format>`]  - Extract tokens from a CSS file ('-' reads stdin)
//!   tailex list-formats                          - List all available output formats

use clap::{Arg, Command};
use std::io::Read;

use tailex::formats::FormatRegistry;
use tailex::theme::extract_theme;

fn main() {
    let matches = Command::new("tailex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting Tailwind theme design tokens from CSS")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("extract")
                .about("Extract theme tokens from a CSS file")
                .arg(
                    Arg::new("path")
                        .help("Path to the CSS file, or '-' to read from stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'json', 'yaml')")
                        .default_value("json"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("extract", extract_matches)) => {
            let path = extract_matches.get_one::<String>("path").unwrap();
            let format = extract_matches.get_one::<String>("format").unwrap();
            handle_extract_command(path, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the extract command
fn handle_extract_command(path: &str, format: &str) {
    let css = read_input(path).unwrap_or_else(|e| {
        eprintln!("Error reading input: {}", e);
        std::process::exit(1);
    });

    let theme = extract_theme(&css);

    let registry = FormatRegistry::with_defaults();
    let output = registry.serialize(&theme, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();

    println!("Available output formats:\n");
    for name in registry.list_formats() {
        // Registered names always resolve.
        let formatter = registry.get(&name).unwrap();
        println!("  {}", name);
        println!("    {}", formatter.description());
    }
}

/// Read the CSS source from a file, or from stdin when the path is '-'
fn read_input(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut css = String::new();
        std::io::stdin().read_to_string(&mut css)?;
        Ok(css)
    } else {
        std::fs::read_to_string(path)
    }
}
