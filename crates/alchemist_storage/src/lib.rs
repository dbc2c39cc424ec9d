//! Inventory, formula, and bestiary storage for Alchemist.
//!
//! This crate is the state store: three ordered collections bound by
//! shared invariants (one entry per case-insensitive name, quantities
//! never negative), aggregated into a [`World`] that handlers borrow.
//!
//! # Modules
//!
//! - [`inventory`] - Item stacks, acquisition and consumption
//! - [`formula`] - Potion formulas, immutable once learned
//! - [`bestiary`] - Per-monster counter knowledge
//! - [`classify`] - Ingredient / potion / trophy classification
//! - [`world`] - Aggregate owning all three collections

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bestiary;
pub mod classify;
pub mod formula;
pub mod inventory;
pub mod world;

pub use bestiary::{Bestiary, BestiaryEntry, CounterKind, UpsertOutcome};
pub use classify::{ItemKind, TROPHY_SUFFIX, classify, strip_trophy_suffix};
pub use formula::{Formula, FormulaBook, MAX_COMPONENTS};
pub use inventory::{Inventory, ItemStack};
pub use world::World;
