//! Comma-separated `<qty> <name>` list tokenization.
//!
//! Loot lists, trade lists, and formula component lists all share this
//! shape. [`EntryList`] lazily yields trimmed entries over a borrowed
//! slice; the parse functions turn one entry into an [`ItemStack`].
//! Quantities must be positive integers; a zero, negative, or
//! non-numeric quantity rejects the entry.
//!
//! Two name shapes exist: ordinary entries take exactly one name word
//! (`5 Vitriol`), while trophy entries keep the rest of the entry as
//! the name (`2 Nekker trophy`).

use alchemist_storage::ItemStack;

/// Lazy iterator of trimmed entries in a comma-separated list.
///
/// Empty segments are yielded as empty strings, so a stray comma shows
/// up as a malformed entry rather than vanishing.
#[derive(Clone, Debug)]
pub struct EntryList<'a> {
    parts: std::str::Split<'a, char>,
}

impl<'a> EntryList<'a> {
    /// Creates an entry list over `list`.
    #[must_use]
    pub fn new(list: &'a str) -> Self {
        Self {
            parts: list.split(','),
        }
    }
}

impl<'a> Iterator for EntryList<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.parts.next().map(str::trim)
    }
}

fn parse_quantity(token: &str) -> Option<u64> {
    let quantity: i64 = token.parse().ok()?;
    u64::try_from(quantity).ok().filter(|&q| q > 0)
}

/// Parses one `<qty> <name>` entry where the name is a single word.
///
/// Trailing words reject the entry; `5 black pearl` is malformed
/// rather than silently read as `5 black`.
#[must_use]
pub fn parse_entry(entry: &str) -> Option<ItemStack> {
    let mut words = entry.split_whitespace();
    let quantity = parse_quantity(words.next()?)?;
    let name = words.next()?;
    if words.next().is_some() {
        return None;
    }
    Some(ItemStack::new(name, quantity))
}

/// Parses one `<qty> <name>` entry where the name runs to the end of
/// the entry, spaces included. Used for trophy names like
/// `2 Nekker trophy`.
#[must_use]
pub fn parse_entry_multiword(entry: &str) -> Option<ItemStack> {
    let (quantity_token, rest) = entry.split_once(char::is_whitespace)?;
    let quantity = parse_quantity(quantity_token)?;
    let name = rest.trim();
    if name.is_empty() {
        return None;
    }
    Some(ItemStack::new(name, quantity))
}
