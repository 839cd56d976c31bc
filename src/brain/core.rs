use tracing::{debug, trace};

use crate::{
    brain::{
        operation::{Operation, lookup_entry},
        pending::PendingBinaryOperation,
    },
    error::BrainError,
};

/// Result type used by strict dispatch.
pub type BrainResult<T> = Result<T, BrainError>;

/// The calculator engine.
///
/// Holds the running accumulator and at most one deferred binary operation.
/// Binary operators are applied strictly left to right: pressing a second
/// binary key first resolves the one already pending.
///
/// ## States
///
/// - **Idle**: nothing pending. Constants and unary operators act directly on
///   the accumulator, a binary operator moves to *Pending*.
/// - **Pending**: a binary operator waits for its right operand. The next
///   binary operator or `=` resolves it against the current accumulator.
///
/// The accumulator and the pending record are updated as two separate
/// fields. Hosts that share a `Brain` across threads must serialize access,
/// for instance behind a `Mutex`.
///
/// ## Usage
///
/// ```
/// use calcbrain::Brain;
///
/// let mut brain = Brain::new();
/// brain.set_operand(4.0);
/// brain.perform_operation("+");
/// brain.set_operand(3.0);
/// brain.perform_operation("=");
/// assert_eq!(brain.result(), 7.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Brain {
    accumulator: f64,
    pending:     Option<PendingBinaryOperation>,
}

impl Brain {
    /// Creates an idle brain with an accumulator of `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self { accumulator: 0.0,
               pending:     None, }
    }

    /// The current accumulator value.
    #[must_use]
    pub const fn result(&self) -> f64 {
        self.accumulator
    }

    /// Returns `true` while a binary operation waits for its right operand.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The symbol of the pending binary operation, if any.
    ///
    /// # Example
    /// ```
    /// use calcbrain::Brain;
    ///
    /// let mut brain = Brain::new();
    /// brain.set_operand(5.0);
    /// brain.perform_operation("×");
    /// assert_eq!(brain.pending_symbol(), Some("×"));
    /// ```
    #[must_use]
    pub fn pending_symbol(&self) -> Option<&'static str> {
        self.pending.map(|pending| pending.symbol)
    }

    /// Replaces the accumulator with `operand`.
    ///
    /// The pending operation, if any, is left untouched: `operand` becomes
    /// its right-hand side when it resolves.
    pub fn set_operand(&mut self, operand: f64) {
        trace!(operand, "set operand");
        self.accumulator = operand;
    }

    /// Applies the operation registered under `symbol`.
    ///
    /// Unknown symbols are ignored and leave the state unchanged. Use
    /// [`Brain::try_perform_operation`] to be told about them.
    pub fn perform_operation(&mut self, symbol: &str) {
        if let Err(e) = self.try_perform_operation(symbol) {
            debug!(%e, "ignoring operation");
        }
    }

    /// Applies the operation registered under `symbol`, reporting unknown
    /// symbols.
    ///
    /// The dispatch is identical to [`Brain::perform_operation`]. On error
    /// nothing has changed.
    ///
    /// # Errors
    /// Returns [`BrainError::UnknownOperation`] if `symbol` is not in the
    /// registry.
    ///
    /// # Example
    /// ```
    /// use calcbrain::{Brain, error::BrainError};
    ///
    /// let mut brain = Brain::new();
    /// brain.set_operand(9.0);
    ///
    /// let err = brain.try_perform_operation("?").unwrap_err();
    /// assert_eq!(err, BrainError::UnknownOperation { symbol: "?".into() });
    /// assert_eq!(brain.result(), 9.0);
    ///
    /// brain.try_perform_operation("√").unwrap();
    /// assert_eq!(brain.result(), 3.0);
    /// ```
    pub fn try_perform_operation(&mut self, symbol: &str) -> BrainResult<()> {
        let (symbol, operation) =
            lookup_entry(symbol).ok_or_else(|| BrainError::UnknownOperation { symbol:
                                                                                  symbol.to_string() })?;

        trace!(symbol, %operation, accumulator = self.accumulator, "perform operation");

        match operation {
            Operation::Constant(value) => self.accumulator = value,
            Operation::Unary(function) => self.accumulator = function(self.accumulator),
            Operation::Binary(function) => {
                self.execute_pending_binary_operation();
                self.pending = Some(PendingBinaryOperation { function,
                                                             first_operand: self.accumulator,
                                                             symbol });
            },
            Operation::Equals => self.execute_pending_binary_operation(),
        }

        Ok(())
    }

    /// Returns to the initial state: accumulator `0`, nothing pending.
    pub fn reset_brain(&mut self) {
        trace!("reset");
        self.accumulator = 0.0;
        self.pending = None;
    }

    /// Resolves the pending operation against the current accumulator.
    /// No-op when nothing is pending.
    fn execute_pending_binary_operation(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.accumulator = pending.resolve(self.accumulator);
        }
    }
}
