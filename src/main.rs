//! Kitchen Layout - headless kitchen configuration validator and layout generator
//!
//! Reads declarative kitchen configurations, validates and fixes them, and
//! produces positioned cabinet modules as JSON for a 3D renderer.

use clap::{Parser, Subcommand};
use kitchen_layout::cli::{ConfigArgs, ExitCode, GenerateArgs, LibraryArgs, ValidateArgs};
use kitchen_layout::constants::{APP_BINARY_NAME, DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use std::io::Write;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Kitchen Layout - validate kitchen configs and generate cabinet layouts
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a kitchen config
    Validate(ValidateArgs),
    /// Generate renderable modules from a kitchen config
    Generate(GenerateArgs),
    /// List the active catalogs
    Library(LibraryArgs),
    /// Manage application configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Validate(args) => args.execute(),
        Command::Generate(args) => args.execute(),
        Command::Library(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };
    // exit skips destructors; flush whatever stdout still buffers
    let _ = std::io::stdout().flush();
    std::process::exit(code.code());
}
