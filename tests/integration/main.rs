//! Integration tests for the InferaDB tuple codec.
//!
//! These tests exercise the public API end to end: the canonical
//! scenarios shared with the storage and check layers, round-trip
//! properties, and subject validation against schema allow-lists.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//!
//! # With debug events for rejected input
//! cargo test --features tracing --test integration -- --nocapture
//! ```

mod common;
mod property_tests;
mod scenario_tests;
mod tracing_tests;
mod validation_tests;
