//! `dynjson` CLI — inspect and edit JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print a nested value (stdin → stdout); numeric segments index arrays
//! echo '{"user":{"scores":[95,87]}}' | dynjson get user.scores.1
//!
//! # Write a value at a path, creating intermediate objects as needed
//! echo '{}' | dynjson set server.port 8080
//!
//! # Delete a top-level key
//! echo '{"a":1,"b":2}' | dynjson del b
//!
//! # Pretty-print a document (or minify it with --compact)
//! dynjson fmt -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dynjson_core::{Json, Kind, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "dynjson", version, about = "Dynamic JSON inspection and editing CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at a dot-separated path
    Get {
        /// Dot-separated path, e.g. "user.contact.email". A numeric segment
        /// indexes into an array; anything else is an object key. An empty
        /// path prints the whole document.
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
    /// Write a value at a dot-separated key path, printing the updated document
    Set {
        /// Dot-separated key path; missing or non-object segments are
        /// replaced with fresh objects along the way
        path: String,
        /// New value, parsed as JSON; input that is not valid JSON is taken
        /// as a plain string (so `8080`, `true`, and `hello` all work)
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Delete a top-level key, printing the updated document
    Del {
        /// Key to remove from the root object
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Re-format a document (pretty by default)
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Minify instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            path,
            input,
            output,
            pretty,
        } => {
            let doc = parse_input(input.as_deref())?;
            let node = locate(&doc, &path);
            let text = if pretty {
                node.encode_pretty()?
            } else {
                node.encode()?
            };
            write_output(output.as_deref(), &text)?;
        }
        Commands::Set {
            path,
            value,
            input,
            output,
        } => {
            let mut doc = parse_input(input.as_deref())?;
            let keys = split_path(&path);
            doc.set_path(&keys, parse_value_arg(value));
            let text = doc.encode()?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Del { key, input, output } => {
            let mut doc = parse_input(input.as_deref())?;
            doc.del(&key);
            let text = doc.encode()?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Fmt {
            input,
            output,
            compact,
        } => {
            let doc = parse_input(input.as_deref())?;
            let text = if compact {
                doc.encode()?
            } else {
                doc.encode_pretty()?
            };
            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

/// Walk a dot-separated path. Numeric segments index into arrays when the
/// current node is an array; everything else (including negative numbers,
/// which do not parse as an index) is treated as an object key. Misses
/// degrade to null, matching the library's navigation contract.
fn locate<'a>(doc: &'a Json, path: &str) -> &'a Json {
    let mut node = doc;
    for segment in split_path(path) {
        node = match segment.parse::<usize>() {
            Ok(index) if node.kind() == Kind::Array => node.get_index(index),
            _ => node.get(segment),
        };
    }
    node
}

/// Split a dot-separated path into segments; an empty path means the root.
fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('.').collect()
    }
}

/// Interpret a value argument: valid JSON is taken as-is, anything else
/// becomes a JSON string.
fn parse_value_arg(raw: String) -> Value {
    serde_json::from_str(&raw).unwrap_or(Value::String(raw))
}

fn parse_input(path: Option<&str>) -> Result<Json> {
    let text = read_input(path)?;
    text.parse::<Json>().context("Failed to parse input JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
