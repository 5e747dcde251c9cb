//! # GospelRS Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Public library interface for the GospelRS crate. The binary in `main.rs`
//! and the integration tests in `tests/` both build on these modules.
//!
//! - `responder`: keyword topic classification and response assembly
//! - `calculator`: pure arithmetic and the quadratic root classifier
//! - `commands`: argument structs and handlers for `chat` and `calc`
//! - `core`: configuration and error types
//!
pub mod calculator;
pub mod commands;
pub mod core;
pub mod responder;
