//! Main entry point for the `csvview` CLI application.
//!
//! `csvview` reads a JSON document and renders it as delimited text.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Installs a `tracing` subscriber on stderr (`-v` or `RUST_LOG`)
//! - Loads the input as explicit rows or a data bag
//! - Encodes with the effective [`FormatConfig`] and writes to stdout or `--output`
//!
//! # Input shapes
//! - `[["a","b"],["c","d"]]`: explicit rows
//! - `{"data": [...]}`: explicit rows under the data key
//! - `{"jan": [...], "feb": [...]}`: every array concatenated in document order

use anyhow::{Context, Result};
use clap::Parser;
use csvview::input::read_source;
use csvview::output::write_output;
use csvview::{Args, CsvView, FormatConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sets up logging. `RUST_LOG` wins over the `-v` count.
fn setup_logging(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Prints the effective configuration as pretty JSON.
fn print_config(config: &FormatConfig) -> Result<()> {
    let json = config
        .to_json_pretty()
        .context("Failed to serialize configuration")?;
    println!("{}", json);
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = args
        .format_config()
        .context("Failed to build format configuration")?;

    if args.print_config {
        return print_config(&config);
    }

    let source = read_source(args.input.as_deref(), &args.data_key).with_context(|| {
        match &args.input {
            Some(path) => format!("Failed to read input from {}", path.display()),
            None => "Failed to read input from stdin".to_string(),
        }
    })?;

    let view = CsvView::new(config).with_data_key(args.data_key.clone());
    let text = view.render(source).context("Failed to encode rows")?;
    info!(bytes = text.len(), "rendered delimited text");

    write_output(&text, args.output.as_deref()).context("Failed to write output")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args);

    // Parse args → setup_logging → format_config → read_source → render → write_output
    run(&args)
}
