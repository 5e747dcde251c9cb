//! # GospelRS Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `gospelrs chat`, the default command: a line-oriented loop that
//! reads a message, passes it to the `TopicResponder`, and prints the reply.
//!
//! - `exit` or `quit` (any case) says goodbye and ends the session
//! - a blank line gets a short prompt-only reply
//! - end of input ends the session
//!
//! ## Examples
//!
//! ```bash
//! # Start a session with the default rich responses
//! gospelrs
//!
//! # Plain layout, reproducible verse choices
//! gospelrs chat --plain --seed 7
//!
//! # One-shot from a pipe
//! echo "I'm worried about my exams" | gospelrs chat
//! ```
//!
use crate::core::config::{self, ConfigOverrides};
use crate::core::error::{GospelError, Result};
use crate::responder::{TopicResponder, TopicTables};
use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const BANNER: &str =
    "Gospel Assistant — type your message and press Enter. Type 'exit' to quit.";
const PROMPT: &str = "You: ";
const FAREWELL: &str = "I'm praying for you. Take care — goodbye.";
const IDLE_REPLY: &str = "I'm here whenever you're ready to share.";

/// Arguments for the `chat` command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ChatArgs {
    /// Use the plain "Support Message / Bible Verse" layout.
    #[arg(long)]
    pub plain: bool,

    /// Leave out the empathetic opener at the start of each reply.
    #[arg(long)]
    pub no_openers: bool,

    /// Seed the opener and verse selection for reproducible replies.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Entry point for `gospelrs chat`. Runs against the process stdin/stdout.
pub fn handle_chat(args: ChatArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let mut cfg = config::load_config(config_path)?;
    config::apply_overrides(
        &mut cfg,
        &ConfigOverrides {
            plain: args.plain,
            no_openers: args.no_openers,
            seed: args.seed,
        },
    );

    let tables = match &cfg.responder.topics_file {
        Some(path) => TopicTables::load(&PathBuf::from(path))?,
        None => TopicTables::embedded()?,
    };
    let tables = Arc::new(tables);
    let options = cfg.responder.options();
    let mut responder = match cfg.responder.seed {
        Some(seed) => {
            debug!("Seeding responder with {}", seed);
            TopicResponder::seeded(tables, options, seed)
        }
        None => TopicResponder::from_entropy(tables, options),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut responder, stdin.lock(), stdout.lock())
}

/// Drives one conversation over any line source and sink.
pub fn run_session<R, I, W>(
    responder: &mut TopicResponder<R>,
    mut input: I,
    mut output: W,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(output, "{}", BANNER)?;
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        let read = input.read_until(b'\n', &mut buf).map_err(GospelError::from)?;
        if read == 0 {
            debug!("End of input; closing session.");
            writeln!(output)?;
            break;
        }

        // Invalid UTF-8 is replaced rather than ending the session.
        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            writeln!(output, "Assistant: {}", FAREWELL)?;
            break;
        }
        if trimmed.is_empty() {
            writeln!(output, "Assistant: {}", IDLE_REPLY)?;
            continue;
        }

        let reply = responder.respond(trimmed);
        writeln!(output, "Assistant: {}", reply)?;
        writeln!(output)?;
    }
    output.flush()?;
    Ok(())
}
