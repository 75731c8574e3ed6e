//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types for easy importing:
//!
//! ```rust
//! use inferadb_tuple::prelude::*;
//! ```
//!
//! This provides access to:
//! - Tuple types and their codecs
//! - Relation-path analysis
//! - Subject validation
//! - Error types

pub use crate::{
    collection::{SubjectCollection, TupleCollection},
    config::ParserConfig,
    error::{Error, ErrorKind, Result},
    parser::TupleParser,
    schema::{AllowedSubjectTypes, SubjectSpecifier, validate_subject_type},
    types::{
        ELLIPSIS, Entity, EntityAndRelation, RelationPath, Subject, SubjectRelation, Tuple,
        are_subjects_equal, is_relation_computed, is_subject_valid, split_relation,
    },
};
