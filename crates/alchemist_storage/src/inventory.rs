//! Item storage: everything Geralt carries.
//!
//! One stack per case-insensitive name. Stacks are created on first
//! acquisition and never removed afterwards; a stack that drops to zero
//! is suppressed from listings but stays addressable, preserving the
//! spelling it was first recorded under.

use alchemist_foundation::text;

/// A named quantity of some item.
///
/// Inventory stacks, trade entries, and formula components all share
/// this shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    /// Item name, first-seen spelling preserved.
    pub name: String,
    /// Non-negative quantity.
    pub quantity: u64,
}

impl ItemStack {
    /// Creates a stack.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// The inventory: an ordered collection of item stacks.
#[derive(Clone, Debug, Default)]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.stacks
            .iter()
            .position(|stack| text::eq_ignore_case(&stack.name, name))
    }

    /// Adds `quantity` of `name`, creating the stack on first
    /// acquisition. The match is case-insensitive; the stored spelling
    /// is whichever arrived first.
    pub fn add(&mut self, name: &str, quantity: u64) {
        match self.position(name) {
            Some(i) => self.stacks[i].quantity += quantity,
            None => self.stacks.push(ItemStack::new(name, quantity)),
        }
    }

    /// Removes `quantity` of `name` if at least that much is held.
    ///
    /// Returns false (and mutates nothing) on a shortfall or an unknown
    /// name. The stack itself survives even at zero.
    pub fn try_remove(&mut self, name: &str, quantity: u64) -> bool {
        match self.position(name) {
            Some(i) if self.stacks[i].quantity >= quantity => {
                self.stacks[i].quantity -= quantity;
                true
            }
            _ => false,
        }
    }

    /// Whether at least `quantity` of `name` is held.
    #[must_use]
    pub fn has_at_least(&self, name: &str, quantity: u64) -> bool {
        self.position(name)
            .is_some_and(|i| self.stacks[i].quantity >= quantity)
    }

    /// The quantity held of `name`, zero for unknown names.
    ///
    /// No classification filter applies here: the per-name total
    /// queries report the raw stack regardless of category.
    #[must_use]
    pub fn quantity_of(&self, name: &str) -> u64 {
        self.position(name).map_or(0, |i| self.stacks[i].quantity)
    }

    /// Iterates over all stacks in acquisition order, zero-quantity
    /// stacks included.
    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    /// Number of stacks, zero-quantity stacks included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Whether no stack has ever been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }
}
