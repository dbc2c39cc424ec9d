//! Text utilities and error types for Alchemist.
//!
//! This crate provides:
//! - [`text`] - ASCII case-insensitive comparison, search, and trimming helpers
//! - [`Error`] - The shared error type for infrastructure failures
//!
//! Every name in the system (items, potions, monsters) resolves
//! case-insensitively, so the helpers in [`text`] are used by every
//! other layer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod text;

pub use error::{Error, ErrorKind, Result};
