use thiserror::Error;

/// Represents all errors the evaluator can report through strict dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrainError {
    /// The symbol has no entry in the operation registry.
    #[error("Unknown operation '{symbol}'.")]
    UnknownOperation {
        /// The symbol that was looked up.
        symbol: String,
    },
}
