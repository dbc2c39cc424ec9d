//! Integration tests for Layer 2: Parser
//!
//! Tests for command recognition, query parsing, and entry-list
//! tokenization.

mod commands;
mod entries;
