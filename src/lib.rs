//! Alchemist - Witcher inventory, formula, and bestiary interpreter
//!
//! This crate re-exports all layers of the Alchemist system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: alchemist_runtime    — Read-eval loop, line editor, CLI
//! Layer 3: alchemist_engine     — Query answering, action handlers, dispatch
//! Layer 2: alchemist_parser     — Phrase tables, command recognition, entry lists
//! Layer 1: alchemist_storage    — Inventory, formulas, bestiary, classification
//! Layer 0: alchemist_foundation — Text utilities, error types
//! ```

pub use alchemist_engine as engine;
pub use alchemist_foundation as foundation;
pub use alchemist_parser as parser;
pub use alchemist_runtime as runtime;
pub use alchemist_storage as storage;
