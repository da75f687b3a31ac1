//! Command-line tool for parsing JSON and reporting classified syntax
//! errors.
//!
//! Usage: jsondx [OPTIONS] [FILE]
//!
//! Options:
//!   -t, --to <VIEW>    Output view on success (tree, json, pretty)
//!                      [default: tree]
//!   --check            Check if input is valid (exit 0 if valid, 1 if not)
//!   -h, --help         Print help
//!   -V, --version      Print version

use libjsondx::{encode, encode_pretty, parse};
use std::fs;
use std::io::{self, Read};
use std::process;

mod render;
mod tree;

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Tree,
    Json,
    Pretty,
}

fn parse_view(s: &str) -> View {
    match s {
        "tree" => View::Tree,
        "json" => View::Json,
        "pretty" => View::Pretty,
        _ => {
            eprintln!("Error: Unknown view: {}", s);
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut view = View::Tree;
    let mut check_only = false;
    let mut input_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-V" | "--version" => {
                println!("jsondx {}", env!("CARGO_PKG_VERSION"));
                return;
            }
            "-t" | "--to" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: -t requires a view argument");
                    process::exit(1);
                }
                view = parse_view(&args[i]);
            }
            "--check" => {
                check_only = true;
            }
            "-" => {
                // Explicit stdin; input_path stays None.
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            _ => {
                if input_path.is_some() {
                    eprintln!("Error: Multiple input paths not supported");
                    process::exit(1);
                }
                input_path = Some(&args[i]);
            }
        }
        i += 1;
    }

    let input = match input_path {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading stdin: {}", e);
                process::exit(1);
            }
            buffer
        }
    };

    let value = match parse(&input) {
        Ok(value) => value,
        Err(report) => {
            eprintln!("{}", render::render(&report));
            process::exit(1);
        }
    };

    if check_only {
        match input_path {
            Some(path) => println!("{}: ok", path),
            None => println!("ok"),
        }
        return;
    }

    match view {
        View::Tree => print!("{}", tree::render_tree(&value)),
        View::Json => println!("{}", encode(&value)),
        View::Pretty => println!("{}", encode_pretty(&value)),
    }
}

fn print_help() {
    println!(
        "jsondx - JSON parser with classified syntax diagnostics

USAGE:
    jsondx [OPTIONS] [FILE]

ARGS:
    [FILE]    Input file (reads from stdin if not provided)

OPTIONS:
    -t, --to <VIEW>    Output view on success [default: tree]
                       Supported: tree, json, pretty

                       'tree' shows the value tree with lengths and
                       numeric subtypes. 'json' re-encodes compactly,
                       'pretty' with two-space indentation.

    --check            Check if input is valid (exit 0 if valid, 1 if not)

    -h, --help         Print help

    -V, --version      Print version

EXAMPLES:
    # Show the value tree of a document
    jsondx data.json

    # Validate a document, reporting a classified syntax error on failure
    jsondx --check data.json

    # Reformat a document
    jsondx -t pretty data.json

    # Read from stdin
    echo '{{\"a\": [1, 2.5]}}' | jsondx -t json
"
    );
}
