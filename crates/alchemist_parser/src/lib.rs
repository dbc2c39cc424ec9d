//! Command recognition and sentence parsing for Alchemist.
//!
//! This crate turns one raw input line into a command tag plus the
//! text the matching handler still has to parse:
//!
//! ```text
//! "Geralt trades 1 Nekker trophy for 5 Vitriol"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ RECOGNITION     │  → Command::Action(CommandKind::Trade, "1 Nekker trophy for 5 Vitriol")
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HANDLER PARSING │  → entry lists via EntryList + parse_entry*
//! └─────────────────┘
//! ```
//!
//! Recognition only classifies; it never mutates state and never
//! allocates. Handlers own the rest of parsing, so a recognized command
//! with a malformed remainder still yields the `INVALID` reply.
//!
//! # Modules
//!
//! - [`phrase`] - The literal sentence templates as named constants
//! - [`command`] - Query/imperative/exit recognition
//! - [`query`] - The five question shapes
//! - [`entry`] - Comma-separated `<qty> <name>` list tokenization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod entry;
pub mod phrase;
pub mod query;

pub use command::{Command, CommandKind, recognize};
pub use entry::{EntryList, parse_entry, parse_entry_multiword};
pub use query::{Query, parse_query};
