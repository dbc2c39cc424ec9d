//! Line-to-reply routing.
//!
//! The read-eval loop hands every trimmed input line to [`dispatch`];
//! everything after that - recognition, parsing, mutation, reply
//! formatting - happens synchronously before the next line is read.

use alchemist_parser::{Command, phrase, recognize};
use alchemist_storage::World;

use crate::{action, query};

/// The outcome of interpreting one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// A line to print.
    Message(String),
    /// The exit command was given; the loop should stop.
    Exit,
}

impl Reply {
    /// The message text, if this reply carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message(text) => Some(text),
            Self::Exit => None,
        }
    }
}

/// Interprets one input line against the world.
///
/// Exactly one command is applied per call; a failed command leaves the
/// world untouched, except for the trade handler's documented
/// partial-validation ordering.
pub fn dispatch(line: &str, world: &mut World) -> Reply {
    let line = line.trim();
    match recognize(line) {
        Command::Query(raw) => Reply::Message(query::answer(raw, world)),
        Command::Action(kind, rest) => Reply::Message(
            action::run(kind, rest, world).unwrap_or_else(|_| phrase::INVALID.to_string()),
        ),
        Command::Exit => Reply::Exit,
        Command::Unrecognized => Reply::Message(phrase::INVALID.to_string()),
    }
}
