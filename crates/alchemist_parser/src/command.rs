//! Command recognition.
//!
//! One input line becomes an enumerated command tag plus its unparsed
//! remainder. A line ending in `?` is always a query; otherwise the
//! five imperative prefixes are tried in priority order, then the
//! whole-line `Exit` command. Anything else is unrecognized and will be
//! answered with the `INVALID` token.

use alchemist_foundation::text;

use crate::phrase;

/// The five imperative command families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// `Geralt loots <entries>`
    Loot,
    /// `Geralt trades <trophies> for <ingredients>`
    Trade,
    /// `Geralt brews <potion>`
    Brew,
    /// `Geralt learns ...`
    Learn,
    /// `Geralt encounters a <monster>`
    Encounter,
}

/// A recognized input line, borrowing from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// A question; the full line, still to be parsed by the query engine.
    Query(&'a str),
    /// An imperative; the remainder after the literal prefix.
    Action(CommandKind, &'a str),
    /// The exit command.
    Exit,
    /// Nothing matched.
    Unrecognized,
}

/// Imperative prefixes in dispatch priority order.
const PREFIXES: &[(CommandKind, &str)] = &[
    (CommandKind::Loot, phrase::LOOT),
    (CommandKind::Trade, phrase::TRADE),
    (CommandKind::Brew, phrase::BREW),
    (CommandKind::Learn, phrase::LEARN),
    (CommandKind::Encounter, phrase::ENCOUNTER),
];

/// Recognizes one trimmed input line.
#[must_use]
pub fn recognize(line: &str) -> Command<'_> {
    if text::ends_with_question_mark(line) {
        return Command::Query(line);
    }
    for &(kind, prefix) in PREFIXES {
        if let Some(rest) = line.strip_prefix(prefix) {
            return Command::Action(kind, rest);
        }
    }
    if text::eq_ignore_case(line, phrase::EXIT) {
        return Command::Exit;
    }
    Command::Unrecognized
}
