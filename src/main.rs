//! cw-icon CLI
//!
//! Usage:
//!   cw-icon [OPTIONS]
//!
//! Options:
//!   --background           Draw an opaque white rectangle behind the icon
//!   -o, --output <FILE>    Output file [default: assets/cw_icon.svg]
//!   -c, --config <FILE>    Icon configuration (TOML format)
//!   --stdout               Print the SVG instead of writing a file
//!   -v, --verbose          Enable debug logging
//!   -h, --help             Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cw_icon::{generate_to_file, render, IconConfig, IconError, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(name = "cw-icon")]
#[command(about = "Creates the radial Morse-code SVG icon")]
struct Cli {
    /// Draw an opaque white rectangle behind the icon
    #[arg(long)]
    background: bool,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Icon configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the SVG to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "icon generation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), IconError> {
    let config = match &cli.config {
        Some(path) => IconConfig::from_file(path)?,
        None => IconConfig::default(),
    };
    tracing::debug!(codes = config.codes.len(), size = config.canvas.size, "configuration loaded");

    if cli.stdout {
        config.canvas.validate()?;
        print!("{}", render(&config, cli.background));
        return Ok(());
    }

    generate_to_file(&config, cli.background, &cli.output)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
