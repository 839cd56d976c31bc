/// Tokenizes keystroke scripts.
///
/// Splits the script into numeric keys, the clear key, and operator
/// symbols, tracking line numbers for error reporting. Comments start with
/// `//`, even directly after a key, and run to the end of the line. Control
/// characters are rejected.
pub mod lexer;
/// Feeds lexed keys to a [`Brain`](crate::Brain) one at a time.
///
/// Numbers set the operand, `C` resets, everything else is dispatched as an
/// operation symbol. There is no grouping or precedence: the brain sees the
/// keys in exactly the order they were written.
pub mod replay;

pub use replay::{Dispatch, replay, replay_into};
