use logos::Logos;
use tracing::trace;

use crate::{
    brain::Brain,
    error::KeypadError,
    keypad::lexer::{Key, LexerExtras},
};

/// How operator symbols the brain does not know are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dispatch {
    /// Unknown symbols are ignored, as on a physical keypad.
    #[default]
    Lenient,
    /// Unknown symbols abort the replay.
    Strict,
}

/// Replays a keystroke script on a fresh brain and returns its final
/// result.
///
/// # Errors
/// Returns an error if a key cannot be lexed, a number is not a finite
/// `f64`, or (under [`Dispatch::Strict`]) a symbol is not registered.
///
/// # Example
/// ```
/// use calcbrain::keypad::{Dispatch, replay};
///
/// // Left to right, no precedence: (2 + 3) × 4
/// let result = replay("2 + 3 × 4 =", Dispatch::Lenient).unwrap();
/// assert_eq!(result, 20.0);
///
/// // Unknown keys only fail in strict mode.
/// assert_eq!(replay("9 ?", Dispatch::Lenient).unwrap(), 9.0);
/// assert!(replay("9 ?", Dispatch::Strict).is_err());
/// ```
pub fn replay(source: &str, dispatch: Dispatch) -> Result<f64, KeypadError> {
    let mut brain = Brain::new();
    replay_into(&mut brain, source, dispatch)?;
    Ok(brain.result())
}

/// Replays a keystroke script on an existing brain.
///
/// Keys already applied before an error stay applied.
///
/// # Errors
/// Same as [`replay`].
pub fn replay_into(brain: &mut Brain, source: &str, dispatch: Dispatch) -> Result<(), KeypadError> {
    let mut lexer = Key::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(key) = lexer.next() {
        let line = lexer.extras.line;
        let Ok(key) = key else {
            return Err(KeypadError::UnexpectedToken { token: lexer.slice().to_string(),
                                                      line });
        };

        trace!(?key, line, "key");

        match key {
            Key::Number(literal) => brain.set_operand(parse_operand(&literal, line)?),
            Key::Clear => brain.reset_brain(),
            Key::Symbol(symbol) => match dispatch {
                Dispatch::Lenient => brain.perform_operation(&symbol),
                Dispatch::Strict => brain.try_perform_operation(&symbol)
                                         .map_err(|source| KeypadError::Brain { source, line })?,
            },
            Key::NewLine | Key::Comment | Key::Ignored => {},
        }
    }

    Ok(())
}

/// Converts a numeric key to an operand.
///
/// Literals that overflow to infinity are rejected so that every operand
/// entered from a script is finite.
fn parse_operand(literal: &str, line: usize) -> Result<f64, KeypadError> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(KeypadError::InvalidNumber { literal: literal.to_string(),
                                              line }),
    }
}
