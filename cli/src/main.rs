//! # GospelRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the GospelRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the `chat` (default) or `calc` handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start the assistant
//! gospelrs
//!
//! # Start it with debug logging and a specific config file
//! gospelrs -vv --config ./gospelrs.toml chat
//!
//! # Use the calculator
//! gospelrs calc quadratic 1 2 1
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::{Parser, Subcommand};
use gospelrs::commands;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "gospelrs",
    about = "GospelRS: scripture encouragement assistant and scientific calculator",
    long_about = "Chat with a keyword-driven assistant that replies with encouragement and a Bible verse,\n\
                  or run one-shot calculator operations.",
    propagate_version = true,
    version
)]
struct Cli {
    /// Command to run (defaults to `chat`).
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file, replacing the user config.
    #[arg(long, global = true, env = "GOSPELRS_CONFIG")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Talk with the assistant (default).
    Chat(commands::chat::ChatArgs),
    /// Run a calculator operation.
    #[command(alias = "c")]
    Calc(commands::calc::CalcArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()));
    let command_result = match command {
        Commands::Chat(args) => commands::chat::handle_chat(args, cli.config.as_deref()),
        Commands::Calc(args) => commands::calc::handle_calc(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
