//! Item classification: ingredient, potion, or trophy.
//!
//! Classification is derived, never stored: it depends on the current
//! formula set, so an ingredient becomes a potion the moment a formula
//! for its name is learned. The trophy suffix check runs first and
//! wins; valid input never matches both rules.

use alchemist_foundation::text;

use crate::formula::FormulaBook;

/// The literal suffix that marks an item as a trophy.
pub const TROPHY_SUFFIX: &str = " trophy";

/// What category an inventory item falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A plain alchemy ingredient.
    Ingredient,
    /// An item whose name matches a known formula's potion name.
    Potion,
    /// An item whose name ends with " trophy".
    Trophy,
}

/// Classifies `name` against the current formula set.
#[must_use]
pub fn classify(name: &str, formulas: &FormulaBook) -> ItemKind {
    if text::strip_suffix_ignore_case(name, TROPHY_SUFFIX).is_some() {
        ItemKind::Trophy
    } else if formulas.knows(name) {
        ItemKind::Potion
    } else {
        ItemKind::Ingredient
    }
}

/// Cuts a trophy name down to its monster name.
///
/// Listings sort and print trophies by monster, so the cut happens at
/// the first case-insensitive occurrence of the suffix. Returns the
/// name unchanged when the suffix never occurs.
#[must_use]
pub fn strip_trophy_suffix(name: &str) -> &str {
    match text::find_ignore_case(name, TROPHY_SUFFIX) {
        Some(i) => &name[..i],
        None => name,
    }
}
