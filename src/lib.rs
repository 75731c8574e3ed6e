//! # InferaDB Tuple
//!
//! Canonical textual encoding and structural validation of relationship
//! tuples for the InferaDB authorization service.
//!
//! ## Quick Start
//!
//! ```rust
//! use inferadb_tuple::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // Parse a tuple
//!     let tuple = Tuple::parse("repository:1#parent@organization:1#...")?;
//!     assert_eq!(tuple.relation(), "parent");
//!     assert_eq!(tuple.subject().relation(), &SubjectRelation::SelfSet);
//!
//!     // Check the subject against the schema's allow-list
//!     validate_subject_type(tuple.subject(), &["organization#...", "user"])?;
//!
//!     // Decide how the check engine resolves a relation
//!     assert!(!is_relation_computed("parent.admin"));
//!     assert_eq!(split_relation("parent.admin"), vec!["parent", "admin"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Key Concepts
//!
//! - **Tuple Order**: `Tuple::new(entity, relation, subject)` - "entity has relation to subject"
//! - **Subject Relations**: none (`user:1`), named (`organization:2#admin`), or
//!   self-set (`organization:1#...`); the three never compare equal
//! - **Missing Relation ≠ Error**: `EntityAndRelation::parse("test:5")` succeeds
//!   with an empty relation, while a tuple's `entity#relation` half needs exactly one `#`
//! - **No I/O**: every operation is a pure function, safe to call from any thread
//!
//! ## Features
//!
//! - `tracing`: Emit `debug` events for rejected input

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Validation and parsing
pub mod parser;
pub mod schema;

// Batches
pub mod collection;

// Prelude for convenient imports
pub mod prelude;

// Re-export main types at crate root for convenience
pub use collection::{SubjectCollection, TupleCollection};
pub use config::ParserConfig;
pub use error::{Error, ErrorKind, Result};
pub use parser::TupleParser;
pub use schema::{AllowedSubjectTypes, SubjectSpecifier, validate_subject_type};
pub use types::{
    ELLIPSIS, Entity, EntityAndRelation, RelationPath, Subject, SubjectRelation, Tuple, USER,
    are_subjects_equal, is_entity_and_subject_equal, is_relation_computed, is_subject_valid,
    split_relation,
};
