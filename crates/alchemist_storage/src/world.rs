//! The world: single owner of all interpreter state.
//!
//! Handlers borrow the world for exactly one command; there is no
//! sharing, locking, or transaction machinery beyond "validate, then
//! mutate" inside each handler.

use crate::bestiary::Bestiary;
use crate::classify::{ItemKind, classify};
use crate::formula::FormulaBook;
use crate::inventory::Inventory;

/// Aggregate state: inventory, formula book, and bestiary.
#[derive(Clone, Debug, Default)]
pub struct World {
    inventory: Inventory,
    formulas: FormulaBook,
    bestiary: Bestiary,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Mutable access to the inventory.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// The formula book.
    #[must_use]
    pub fn formulas(&self) -> &FormulaBook {
        &self.formulas
    }

    /// Mutable access to the formula book.
    pub fn formulas_mut(&mut self) -> &mut FormulaBook {
        &mut self.formulas
    }

    /// The bestiary.
    #[must_use]
    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    /// Mutable access to the bestiary.
    pub fn bestiary_mut(&mut self) -> &mut Bestiary {
        &mut self.bestiary
    }

    /// Classifies an item name against the current formula set.
    #[must_use]
    pub fn classify_item(&self, name: &str) -> ItemKind {
        classify(name, &self.formulas)
    }
}
