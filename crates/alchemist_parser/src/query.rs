//! The five question shapes.
//!
//! Query prefixes match case-insensitively and must end at a word
//! boundary, so `Total ingredients?` is not a bare ingredient listing.
//! The subject is whatever sits between the prefix and the first `?`,
//! trimmed; an absent subject turns the three `Total` queries into
//! listings.

use alchemist_foundation::text;

use crate::phrase;

/// A parsed query, borrowing its subject from the input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query<'a> {
    /// `What is effective against <monster>?`
    Effectiveness {
        /// The monster asked about; may be empty.
        monster: &'a str,
    },
    /// `Total ingredient [name]?`
    TotalIngredient {
        /// Specific item, or `None` for the full listing.
        name: Option<&'a str>,
    },
    /// `Total potion [name]?`
    TotalPotion {
        /// Specific item, or `None` for the full listing.
        name: Option<&'a str>,
    },
    /// `Total trophy [monster]?` - the subject is the monster's name,
    /// not the trophy's.
    TotalTrophy {
        /// Specific monster, or `None` for the full listing.
        monster: Option<&'a str>,
    },
    /// `What is in <potion>?`
    Contents {
        /// The potion asked about; may be empty.
        potion: &'a str,
    },
}

/// Strips a query prefix case-insensitively, requiring a word boundary
/// after it, and returns the subject before the first `?`, trimmed.
fn subject<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = text::strip_prefix_ignore_case(line, prefix)?;
    if !(rest.is_empty() || rest.starts_with('?') || rest.starts_with(char::is_whitespace)) {
        return None;
    }
    let before_mark = rest.split('?').next().unwrap_or(rest);
    Some(before_mark.trim())
}

/// Parses a query line into one of the five shapes.
///
/// Returns `None` when no shape matches; the caller answers with the
/// `INVALID` token.
#[must_use]
pub fn parse_query(line: &str) -> Option<Query<'_>> {
    let line = line.trim();
    if let Some(monster) = subject(line, phrase::QUERY_EFFECTIVE) {
        return Some(Query::Effectiveness { monster });
    }
    if let Some(name) = subject(line, phrase::QUERY_TOTAL_INGREDIENT) {
        return Some(Query::TotalIngredient {
            name: (!name.is_empty()).then_some(name),
        });
    }
    if let Some(name) = subject(line, phrase::QUERY_TOTAL_POTION) {
        return Some(Query::TotalPotion {
            name: (!name.is_empty()).then_some(name),
        });
    }
    if let Some(monster) = subject(line, phrase::QUERY_TOTAL_TROPHY) {
        return Some(Query::TotalTrophy {
            monster: (!monster.is_empty()).then_some(monster),
        });
    }
    if let Some(potion) = subject(line, phrase::QUERY_CONTENTS) {
        return Some(Query::Contents { potion });
    }
    None
}
