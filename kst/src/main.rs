//! kst - command-line front end for the Kestrel toolchain.
//!
//! This is the main entry point for the kst CLI application.
//! It uses clap for argument parsing and dispatches to the
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    calc::CalcOp,
    common::OutputFormat,
    run_calc, run_lex, CalcArgs, LexArgs,
};
use config::Config;
use error::{KstError, Result};

/// kst - tools for the Kestrel scripting language
///
/// Dumps the token stream of Kestrel sources and evaluates big-integer
/// arithmetic from the command line.
#[derive(Parser, Debug)]
#[command(name = "kst")]
#[command(author = "Kestrel Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Kestrel scripting language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "KST_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "KST_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "KST_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the kst CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of source files
    ///
    /// Every token is printed with its byte offset, type and text,
    /// up to and including the end-of-file token.
    Lex(LexCommand),

    /// Evaluate a big-integer operation
    ///
    /// Operands are hexadecimal with an optional 0x prefix. The result
    /// is printed in hexadecimal.
    Calc(CalcCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Show the whitespace and comments in front of each token
    #[arg(short, long)]
    trivia: bool,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Number of files lexed in parallel
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    jobs: Option<u16>,

    /// Exit with an error if any malformed token is produced
    #[arg(long)]
    deny_invalid: bool,
}

/// Arguments for the calc subcommand.
#[derive(Parser, Debug)]
struct CalcCommand {
    /// Operation to apply
    #[arg(value_enum)]
    op: CalcOp,

    /// Left operand (hexadecimal)
    lhs: String,

    /// Right operand (hexadecimal, or a decimal bit count for shl)
    rhs: String,

    /// Print upper-case hex digits
    #[arg(short, long)]
    uppercase: bool,
}

/// Main entry point for the kst CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Log lines go to stderr so they never mix with token dumps or results.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| KstError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Calc(args) => execute_calc(args, config),
    }
}

/// Execute the lex command.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        files: args.files,
        show_trivia: args.trivia,
        format: args.format,
        jobs: args.jobs.map(usize::from),
        deny_invalid: args.deny_invalid,
        config,
    };
    run_lex(lex_args)
}

/// Execute the calc command.
fn execute_calc(args: CalcCommand, config: Config) -> Result<()> {
    let calc_args = CalcArgs {
        op: args.op,
        lhs: args.lhs,
        rhs: args.rhs,
        uppercase: args.uppercase,
        config,
    };
    run_calc(calc_args)
}
