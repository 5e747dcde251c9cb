//! # GospelRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by the responder,
//! the calculator and the command handlers.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging with CLI overrides, and validation
//! - `error`: Error types and the `Result` alias
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{GospelError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
