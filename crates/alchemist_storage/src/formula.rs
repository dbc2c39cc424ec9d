//! Potion formulas: named recipes mapping a potion to its components.
//!
//! Formulas are immutable once learned (no edit command exists) and
//! unique per case-insensitive potion name. A zero-component formula is
//! representable: learning `X potion consists of` with an empty list
//! creates one, and it counts as known (and brewable) thereafter.

use alchemist_foundation::{Error, Result, text};

use crate::inventory::ItemStack;

/// Maximum number of components a formula may hold.
pub const MAX_COMPONENTS: usize = 10;

/// A named recipe for one potion.
#[derive(Clone, Debug)]
pub struct Formula {
    potion_name: String,
    components: Vec<ItemStack>,
}

impl Formula {
    /// Creates a formula.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if more than [`MAX_COMPONENTS`]
    /// components are given. The original store truncated silently; the
    /// limit is surfaced here instead.
    pub fn new(potion_name: impl Into<String>, components: Vec<ItemStack>) -> Result<Self> {
        if components.len() > MAX_COMPONENTS {
            return Err(Error::capacity_exceeded(
                "formula components",
                MAX_COMPONENTS,
            ));
        }
        Ok(Self {
            potion_name: potion_name.into(),
            components,
        })
    }

    /// The potion this formula produces.
    #[must_use]
    pub fn potion_name(&self) -> &str {
        &self.potion_name
    }

    /// Required components, in the order they were learned.
    #[must_use]
    pub fn components(&self) -> &[ItemStack] {
        &self.components
    }
}

/// The collection of known formulas.
#[derive(Clone, Debug, Default)]
pub struct FormulaBook {
    formulas: Vec<Formula>,
}

impl FormulaBook {
    /// Creates an empty formula book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a formula by case-insensitive potion name.
    #[must_use]
    pub fn find(&self, potion_name: &str) -> Option<&Formula> {
        self.formulas
            .iter()
            .find(|f| text::eq_ignore_case(&f.potion_name, potion_name))
    }

    /// Whether a formula exists for this potion name.
    #[must_use]
    pub fn knows(&self, potion_name: &str) -> bool {
        self.find(potion_name).is_some()
    }

    /// Adds a formula. A duplicate potion name is refused without
    /// modification; returns whether the formula was stored.
    pub fn add(&mut self, formula: Formula) -> bool {
        if self.knows(&formula.potion_name) {
            return false;
        }
        self.formulas.push(formula);
        true
    }

    /// Iterates over all formulas in learning order.
    pub fn iter(&self) -> impl Iterator<Item = &Formula> {
        self.formulas.iter()
    }

    /// Number of known formulas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    /// Whether no formula is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }
}
