/// Dispatch errors.
///
/// Raised only by the strict entry point of the evaluator. The lenient
/// entry point swallows these after logging them, so the three core
/// operations never fail.
pub mod brain_error;
/// Keypad replay errors.
///
/// Contains the errors that can occur while lexing a keystroke script or
/// while feeding it to the evaluator in strict mode. Every variant carries
/// the source line of the offending key.
pub mod keypad_error;

pub use brain_error::BrainError;
pub use keypad_error::KeypadError;
