//! Read-eval loop and CLI for Alchemist.
//!
//! A thin wrapper around the engine: read one line, dispatch it, print
//! the reply, repeat until `Exit` or end of input. All interpretation
//! lives below this crate; the loop itself carries no game logic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::{MAX_LINE_LEN, Repl};
