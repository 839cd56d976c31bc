use tracing::debug;

use crate::brain::math::BinaryFn;

/// A binary operation waiting for its right operand.
///
/// Created when a binary key is pressed, holding the accumulator value at
/// that moment. It lives until the next binary key, `=`, or a reset.
#[derive(Debug, Clone, Copy)]
pub struct PendingBinaryOperation {
    /// The kernel to apply once the right operand is known.
    pub function:      BinaryFn,
    /// The accumulator captured when the binary key was pressed.
    pub first_operand: f64,
    /// The registry key that created this record.
    pub symbol:        &'static str,
}

impl PendingBinaryOperation {
    /// Applies the deferred kernel with `second_operand` on the right.
    ///
    /// # Example
    /// ```
    /// use calcbrain::brain::{PendingBinaryOperation, math};
    ///
    /// let pending = PendingBinaryOperation { function:      math::subtract,
    ///                                        first_operand: 10.0,
    ///                                        symbol:        "-", };
    /// assert_eq!(pending.resolve(4.0), 6.0);
    /// ```
    #[must_use]
    pub fn resolve(self, second_operand: f64) -> f64 {
        let value = (self.function)(self.first_operand, second_operand);
        debug!(symbol = self.symbol,
               first_operand = self.first_operand,
               second_operand,
               value,
               "resolved pending operation");
        value
    }
}
