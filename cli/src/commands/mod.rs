//! # GospelRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the GospelRS CLI. Each
//! command defines its own arguments structure and handler function.
//!
//! ## Command Groups
//!
//! - `chat`: The interactive assistant loop (also the default when no command is given)
//! - `calc`: One-shot calculator operations
//!

/// The interactive assistant: reads lines from stdin and prints responses.
pub mod chat;
/// Calculator subcommands such as `add`, `factorial` and `quadratic`.
pub mod calc;
