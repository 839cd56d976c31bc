//! # calcbrain
//!
//! calcbrain is the engine behind a pocket calculator keypad written in
//! Rust. It keeps a running `f64` accumulator, applies constants and unary
//! operators immediately, and defers binary operators until their right
//! operand is known. Chained operators are applied strictly left to right.
//!
//! ```
//! use calcbrain::Brain;
//!
//! let mut brain = Brain::new();
//! brain.set_operand(2.0);
//! brain.perform_operation("+");
//! brain.set_operand(3.0);
//! brain.perform_operation("×");
//! brain.set_operand(4.0);
//! brain.perform_operation("=");
//! assert_eq!(brain.result(), 20.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// The calculator engine.
///
/// This module declares the [`Brain`] evaluator, the registry that maps key
/// symbols to operations, and the numeric kernels behind them.
///
/// # Responsibilities
/// - Holds the accumulator and the single pending binary operation.
/// - Dispatches constants, unary and binary operators and `=`.
/// - Never fails on the lenient path: unknown symbols, division by zero and
///   negative square roots are all absorbed into the accumulator or ignored.
pub mod brain;
/// Provides error types for strict dispatch and keystroke replay.
///
/// # Responsibilities
/// - Reports unknown operator symbols when the caller asks for it.
/// - Attaches script line numbers to replay failures.
pub mod error;
/// Drives a [`Brain`] from a whitespace separated keystroke script.
///
/// Used by the command line tool and handy for tests. This is key replay,
/// not expression parsing: each key is handed to the brain as it is read.
pub mod keypad;

pub use brain::Brain;
