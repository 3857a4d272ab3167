//! Lemoo CLI - headless driver for the Lemoo shell.
//!
//! Provides commands for:
//! - `pages`: List registered pages
//! - `nav show`: Print the navigation tree and where it came from
//! - `nav generate`: Derive the navigation file from registered pages
//! - `open`: Open pages into a document host and print them

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{NavCommand, OpenArgs, PagesArgs};
use output::Output;

/// Lemoo - page registry, navigation tree and page factory.
#[derive(Parser)]
#[command(name = "lemoo", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover lemoo.toml).
    #[arg(short, long, global = true, env = "LEMOO_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (navigation policy and factory logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered pages.
    Pages(PagesArgs),
    /// Navigation tree commands.
    #[command(subcommand)]
    Nav(NavCommand),
    /// Open pages in the document host.
    Open(OpenArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Pages(args) => args.execute(config),
        Commands::Nav(cmd) => cmd.execute(config),
        Commands::Open(args) => args.execute(config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
