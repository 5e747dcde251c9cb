//! # GospelRS Calculator
//!
//! File: cli/src/calculator.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Stateless scientific calculator functions over `f64`. Floating-point
//! semantics are kept as-is: dividing by zero yields `inf` or `NaN`, not an error.
//! The only fallible operation is `factorial`, which rejects negative input.
//!
//! `solve_quadratic` classifies the roots of `ax² + bx + c = 0` using exact
//! comparisons against zero, with no epsilon tolerance.
//!
use crate::core::error::GospelError;
use std::fmt;

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Plain IEEE-754 division. `divide(1.0, 0.0)` is `inf`, `divide(0.0, 0.0)` is `NaN`.
pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

pub fn power(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub fn sqrt(a: f64) -> f64 {
    a.sqrt()
}

/// Sine of an angle in radians.
pub fn sin(radians: f64) -> f64 {
    radians.sin()
}

/// Cosine of an angle in radians.
pub fn cos(radians: f64) -> f64 {
    radians.cos()
}

/// Tangent of an angle in radians.
pub fn tan(radians: f64) -> f64 {
    radians.tan()
}

pub fn log10(a: f64) -> f64 {
    a.log10()
}

/// Natural logarithm.
pub fn ln(a: f64) -> f64 {
    a.ln()
}

/// `n!` for `n >= 0`. Results past `20!` wrap around rather than panic;
/// from `66!` on the wrapped value is 0.
pub fn factorial(n: i64) -> Result<i64, GospelError> {
    if n < 0 {
        return Err(GospelError::InvalidArgument(
            "factorial: n must be >= 0".to_string(),
        ));
    }
    let mut acc = 1i64;
    for i in 2..=n {
        acc = acc.wrapping_mul(i);
        // 2^64 divides 66!, so the wrapped product stays 0 from there on.
        if acc == 0 {
            break;
        }
    }
    Ok(acc)
}

/// Roots of `ax² + bx + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticRoots {
    /// `a = b = c = 0`: every x satisfies the equation.
    InfiniteSolutions,
    /// `a = b = 0`, `c != 0`.
    NoSolution,
    /// `a = 0`, `b != 0`: the single root `-c/b`.
    Linear(f64),
    TwoReal(f64, f64),
    OneReal(f64),
    /// Conjugate pair `re ± im·i`.
    Complex { re: f64, im: f64 },
}

pub fn solve_quadratic(a: f64, b: f64, c: f64) -> QuadraticRoots {
    if a == 0.0 {
        if b == 0.0 {
            return if c == 0.0 {
                QuadraticRoots::InfiniteSolutions
            } else {
                QuadraticRoots::NoSolution
            };
        }
        return QuadraticRoots::Linear(-c / b);
    }
    let disc = b * b - 4.0 * a * c;
    if disc > 0.0 {
        let r1 = (-b + disc.sqrt()) / (2.0 * a);
        let r2 = (-b - disc.sqrt()) / (2.0 * a);
        QuadraticRoots::TwoReal(r1, r2)
    } else if disc == 0.0 {
        QuadraticRoots::OneReal(-b / (2.0 * a))
    } else {
        QuadraticRoots::Complex {
            re: -b / (2.0 * a),
            im: (-disc).sqrt() / (2.0 * a),
        }
    }
}

// `-0.0` would otherwise print as "-0.000000".
fn unsigned_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

impl fmt::Display for QuadraticRoots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            QuadraticRoots::InfiniteSolutions => write!(f, "Infinite solutions"),
            QuadraticRoots::NoSolution => write!(f, "No solution"),
            QuadraticRoots::Linear(x) => write!(f, "Linear root: {:.6}", unsigned_zero(x)),
            QuadraticRoots::TwoReal(r1, r2) => write!(
                f,
                "Two real roots: {:.6} and {:.6}",
                unsigned_zero(r1),
                unsigned_zero(r2)
            ),
            QuadraticRoots::OneReal(r) => write!(f, "One real root: {:.6}", unsigned_zero(r)),
            QuadraticRoots::Complex { re, im } => {
                let (re, im) = (unsigned_zero(re), unsigned_zero(im));
                write!(
                    f,
                    "Two complex roots: {:.6} + {:.6}i and {:.6} - {:.6}i",
                    re, im, re, im
                )
            }
        }
    }
}
