use std::{
    f64::consts::{E, PI},
    fmt,
};

use crate::brain::math::{self, BinaryFn, UnaryFn};

/// A registry entry: what pressing a key does to the evaluator.
///
/// The variant decides how the accumulator and the pending binary operation
/// are touched:
/// - `Constant` replaces the accumulator and leaves the pending operation
///   alone.
/// - `Unary` maps the accumulator in place and leaves the pending operation
///   alone.
/// - `Binary` resolves whatever is pending, then defers itself with the
///   accumulator as its left operand.
/// - `Equals` resolves whatever is pending.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Replaces the accumulator with a fixed value.
    Constant(f64),
    /// Replaces the accumulator with `f(accumulator)`.
    Unary(UnaryFn),
    /// Deferred until a right operand is available.
    Binary(BinaryFn),
    /// Forces resolution of the pending binary operation.
    Equals,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "constant({value})"),
            Self::Unary(_) => write!(f, "unary"),
            Self::Binary(_) => write!(f, "binary"),
            Self::Equals => write!(f, "equals"),
        }
    }
}

/// Defines the operation registry by generating a lookup table and a symbol
/// list.
///
/// Each entry maps one key symbol to one [`Operation`]. A glyph and its
/// descriptive alias are two separate entries pointing at the same variant.
///
/// The macro produces:
/// - `OperationDef` (internal row type),
/// - `OPERATION_TABLE` (static table for lookup),
/// - `OPERATION_SYMBOLS` (public list of registered symbols).
macro_rules! operations {
    (
        $(
            $symbol:literal => $operation:expr
        ),* $(,)?
    ) => {
        struct OperationDef {
            symbol:    &'static str,
            operation: Operation,
        }
        static OPERATION_TABLE: &[OperationDef] = &[
            $(
                OperationDef { symbol: $symbol, operation: $operation },
            )*
        ];
        /// Every symbol the registry recognizes, glyphs and aliases alike.
        pub const OPERATION_SYMBOLS: &[&str] = &[
            $($symbol,)*
        ];
    };
}

operations! {
    "π"           => Operation::Constant(PI),
    "constant-pi" => Operation::Constant(PI),
    "e"           => Operation::Constant(E),
    "constant-e"  => Operation::Constant(E),
    "±"           => Operation::Unary(math::negate),
    "negate"      => Operation::Unary(math::negate),
    "√"           => Operation::Unary(math::sqrt),
    "sqrt"        => Operation::Unary(math::sqrt),
    "sin"         => Operation::Unary(math::sin),
    "cos"         => Operation::Unary(math::cos),
    "tan"         => Operation::Unary(math::tan),
    "+"           => Operation::Binary(math::add),
    "add"         => Operation::Binary(math::add),
    "-"           => Operation::Binary(math::subtract),
    "subtract"    => Operation::Binary(math::subtract),
    "×"           => Operation::Binary(math::multiply),
    "multiply"    => Operation::Binary(math::multiply),
    "÷"           => Operation::Binary(math::divide),
    "divide"      => Operation::Binary(math::divide),
    "="           => Operation::Equals,
    "equals"      => Operation::Equals,
}

/// Looks up the operation registered under `symbol`.
///
/// Matching is exact: no trimming, no case folding.
///
/// # Example
/// ```
/// use calcbrain::brain::operation::{Operation, lookup};
///
/// assert!(matches!(lookup("×"), Some(Operation::Binary(_))));
/// assert!(matches!(lookup("equals"), Some(Operation::Equals)));
/// assert!(lookup("?").is_none());
/// ```
#[must_use]
pub fn lookup(symbol: &str) -> Option<Operation> {
    lookup_entry(symbol).map(|(_, operation)| operation)
}

/// Like [`lookup`], but also hands back the registry's own copy of the
/// symbol so callers can keep it past the borrow of `symbol`.
pub(crate) fn lookup_entry(symbol: &str) -> Option<(&'static str, Operation)> {
    OPERATION_TABLE.iter()
                   .find(|def| def.symbol == symbol)
                   .map(|def| (def.symbol, def.operation))
}
