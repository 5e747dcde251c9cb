//! # GospelRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the GospelRS application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `GospelError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - Configuration errors (bad or missing config files)
//! - Topic table errors (malformed or incomplete keyword/verse data)
//! - Invalid arguments passed to calculator functions
//! - I/O failures in the interactive chat loop
//!
//! The responder itself never fails: every input produces a response. Errors
//! only arise while loading data or configuration, and from `calculator::factorial`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error kind
//! if n < 0 {
//!     return Err(GospelError::InvalidArgument("factorial: n must be >= 0".into()));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the GospelRS application.
#[derive(Error, Debug)]
pub enum GospelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Topic data error: {0}")]
    TopicData(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
