//! Configuration types for tuple parsing.
//!
//! This module provides configuration options for:
//! - [`ParserConfig`]: Token grammar and length limits for untrusted input

mod parser;

pub use parser::{DEFAULT_MAX_LENGTH, ParserConfig};
