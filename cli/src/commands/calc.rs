//! # GospelRS Calculator Command Group
//!
//! File: cli/src/commands/calc.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Exposes each `calculator` function as a `gospelrs calc <op>` subcommand and
//! prints the result to stdout. Floating-point results use Rust's `Display`,
//! so division by zero prints `inf` or `NaN` and exits successfully.
//!
//! ## Examples
//!
//! ```bash
//! gospelrs calc add 2 3.5
//! gospelrs calc div 1 0          # inf
//! gospelrs calc factorial 10
//! gospelrs calc quadratic 1 0 -4 # Two real roots: 2.000000 and -2.000000
//! ```
//!
use crate::calculator;
use crate::core::error::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

/// Top-level arguments for the `calc` command group.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    #[command(subcommand)]
    command: CalcCommand,
}

/// Two operands.
#[derive(Args, Debug)]
pub struct BinaryArgs {
    #[arg(allow_negative_numbers = true)]
    a: f64,
    #[arg(allow_negative_numbers = true)]
    b: f64,
}

/// One operand.
#[derive(Args, Debug)]
pub struct UnaryArgs {
    #[arg(allow_negative_numbers = true)]
    x: f64,
}

#[derive(Args, Debug)]
pub struct FactorialArgs {
    #[arg(allow_negative_numbers = true)]
    n: i64,
}

/// Coefficients of `ax² + bx + c = 0`.
#[derive(Args, Debug)]
pub struct QuadraticArgs {
    #[arg(allow_negative_numbers = true)]
    a: f64,
    #[arg(allow_negative_numbers = true)]
    b: f64,
    #[arg(allow_negative_numbers = true)]
    c: f64,
}

#[derive(Subcommand, Debug)]
enum CalcCommand {
    /// a + b
    Add(BinaryArgs),
    /// a - b
    Sub(BinaryArgs),
    /// a * b
    Mul(BinaryArgs),
    /// a / b (IEEE-754: division by zero gives inf or NaN)
    Div(BinaryArgs),
    /// a raised to the power b
    Pow(BinaryArgs),
    /// Square root of x
    Sqrt(UnaryArgs),
    /// Sine of x radians
    Sin(UnaryArgs),
    /// Cosine of x radians
    Cos(UnaryArgs),
    /// Tangent of x radians
    Tan(UnaryArgs),
    /// Base-10 logarithm of x
    Log10(UnaryArgs),
    /// Natural logarithm of x
    Ln(UnaryArgs),
    /// n! for n >= 0
    Factorial(FactorialArgs),
    /// Roots of ax² + bx + c = 0
    Quadratic(QuadraticArgs),
}

/// Main handler for the `calc` command group.
pub fn handle_calc(args: CalcArgs) -> Result<()> {
    debug!("Handling calc command: {:?}", args.command);
    println!("{}", evaluate(args.command)?);
    Ok(())
}

fn evaluate(command: CalcCommand) -> Result<String> {
    let out = match command {
        CalcCommand::Add(BinaryArgs { a, b }) => calculator::add(a, b).to_string(),
        CalcCommand::Sub(BinaryArgs { a, b }) => calculator::subtract(a, b).to_string(),
        CalcCommand::Mul(BinaryArgs { a, b }) => calculator::multiply(a, b).to_string(),
        CalcCommand::Div(BinaryArgs { a, b }) => calculator::divide(a, b).to_string(),
        CalcCommand::Pow(BinaryArgs { a, b }) => calculator::power(a, b).to_string(),
        CalcCommand::Sqrt(UnaryArgs { x }) => calculator::sqrt(x).to_string(),
        CalcCommand::Sin(UnaryArgs { x }) => calculator::sin(x).to_string(),
        CalcCommand::Cos(UnaryArgs { x }) => calculator::cos(x).to_string(),
        CalcCommand::Tan(UnaryArgs { x }) => calculator::tan(x).to_string(),
        CalcCommand::Log10(UnaryArgs { x }) => calculator::log10(x).to_string(),
        CalcCommand::Ln(UnaryArgs { x }) => calculator::ln(x).to_string(),
        CalcCommand::Factorial(FactorialArgs { n }) => calculator::factorial(n)?.to_string(),
        CalcCommand::Quadratic(QuadraticArgs { a, b, c }) => {
            calculator::solve_quadratic(a, b, c).to_string()
        }
    };
    Ok(out)
}
