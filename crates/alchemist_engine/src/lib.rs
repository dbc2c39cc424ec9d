//! Query answering and action handlers for Alchemist.
//!
//! One input line in, one reply out: [`dispatch`] recognizes the line,
//! routes queries to [`query::answer`] and imperatives to
//! [`action::run`], and turns anything malformed into the `INVALID`
//! token. Every exact reply string the interpreter can produce lives in
//! this crate.
//!
//! # Modules
//!
//! - [`dispatch`] - Line-to-reply routing
//! - [`query`] - The five question shapes, answered against the world
//! - [`action`] - The five mutating commands

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod dispatch;
pub mod query;

pub use action::InvalidCommand;
pub use dispatch::{Reply, dispatch};
