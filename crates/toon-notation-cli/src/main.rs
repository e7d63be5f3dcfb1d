//! `toon` CLI: decode, encode, format and inspect TOON prompt specs from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Decode TOON to pretty-printed JSON (stdin → stdout)
//! echo 'STORY { GENRE: FANTASY }' | toon decode
//!
//! # Encode JSON to canonical TOON, file to file
//! toon encode -i story.json -o story.toon
//!
//! # Rewrite a TOON file in canonical form, or only check that it already is
//! toon format -i story.toon -o story.toon
//! toon format --check -i story.toon
//!
//! # Dump the token stream
//! toon tokens -i story.toon
//!
//! # Machine-readable diagnostics for editors
//! toon --json decode -i broken.toon
//! ```
//!
//! Logging goes to stderr. `-v` enables debug output, `-vv` trace output, and
//! `RUST_LOG` overrides both.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use std::process::ExitCode;
use toon_notation::{Diagnostic, ToonError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "toon",
    version,
    about = "TOON prompt-spec notation CLI",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print failures as a JSON diagnostic ({message, line, column}) on stderr
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode TOON to JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit minified JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Encode JSON to canonical TOON
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Rewrite TOON in canonical form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Write nothing; exit with status 1 if the input is not canonical
        #[arg(long)]
        check: bool,
    },
    /// Print the token stream, one `line:column KIND value` per line
    Tokens {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            report(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Decode {
            input,
            output,
            compact,
        } => {
            let toon = read_input(input.as_deref())?;
            let value = toon_notation::decode(&toon).context("Failed to decode TOON to JSON")?;
            let json = if compact {
                serde_json::to_string(&value)?
            } else {
                serde_json::to_string_pretty(&value)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let value: serde_json::Value =
                serde_json::from_str(&json).context("Failed to parse input as JSON")?;
            write_output(output.as_deref(), &toon_notation::encode(&value))?;
        }
        Commands::Format {
            input,
            output,
            check,
        } => {
            let source = read_input(input.as_deref())?;
            let formatted = toon_notation::format(&source).context("Failed to format TOON")?;
            if check {
                if !is_canonical(&source, &formatted) {
                    eprintln!(
                        "{} is not canonically formatted",
                        input.as_deref().unwrap_or("<stdin>")
                    );
                    return Ok(ExitCode::FAILURE);
                }
                tracing::debug!("input is already canonical");
            } else {
                write_output(output.as_deref(), &formatted)?;
            }
        }
        Commands::Tokens { input, output } => {
            let source = read_input(input.as_deref())?;
            let tokens = toon_notation::tokenize(&source).context("Failed to tokenize TOON")?;
            let listing: Vec<String> = tokens
                .iter()
                .map(|t| format!("{}:{} {} {:?}", t.line, t.column, t.kind, t.value))
                .collect();
            write_output(output.as_deref(), &listing.join("\n"))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Canonical text has no trailing newline; a file ending in exactly one still counts.
fn is_canonical(source: &str, formatted: &str) -> bool {
    source.strip_suffix('\n').unwrap_or(source) == formatted
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Print a failure to stderr: as a diagnostic object under `--json`, otherwise
/// as the full context chain.
fn report(err: &anyhow::Error, json: bool) {
    if json {
        if let Some(diagnostic) = diagnostic_of(err) {
            match serde_json::to_string(&diagnostic) {
                Ok(text) => eprintln!("{text}"),
                Err(_) => eprintln!("Error: {err:#}"),
            }
            return;
        }
    }
    eprintln!("Error: {err:#}");
}

/// The pipeline or JSON-input failure behind `err`, if there is one.
fn diagnostic_of(err: &anyhow::Error) -> Option<Diagnostic> {
    err.chain().find_map(|cause| {
        if let Some(toon) = cause.downcast_ref::<ToonError>() {
            return Some(toon.diagnostic());
        }
        cause
            .downcast_ref::<serde_json::Error>()
            .map(|json| Diagnostic {
                message: json.to_string(),
                line: json.line(),
                column: json.column(),
            })
    })
}

fn read_input(path: Option<&str>) -> Result<String> {
    let text = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    tracing::debug!(source = path.unwrap_or("<stdin>"), bytes = text.len(), "read input");
    Ok(text)
}

/// Write `content` followed by a newline, unless it is empty.
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    let text = if content.is_empty() {
        String::new()
    } else {
        format!("{content}\n")
    };
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", text);
        }
    }
    Ok(())
}
