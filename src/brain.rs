/// The evaluator state and its three operations.
///
/// Owns the accumulator and the optional pending binary operation, and
/// dispatches registry entries against them.
pub mod core;
/// Numeric kernels.
///
/// Plain function pointers stored in the registry. All of them follow IEEE
/// 754 double precision semantics: nothing here checks for division by zero
/// or negative square roots, the resulting infinities and NaNs are the
/// answer.
pub mod math;
/// The operation sum type and the static symbol registry.
pub mod operation;
/// The deferred binary operation record.
pub mod pending;

pub use self::{core::Brain, operation::Operation, pending::PendingBinaryOperation};
