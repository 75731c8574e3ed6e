//! Core tuple types.
//!
//! This module provides the records shared by storage, schema and the check
//! engine, together with their canonical text encoding:
//!
//! - [`Entity`]: A resource instance (`type:id`)
//! - [`EntityAndRelation`]: An entity with an optional relation (`type:id#relation`)
//! - [`Subject`]: An actor or userset reference (`type:id[#relation]`)
//! - [`Tuple`]: A relationship tuple (`entity#relation@subject`)
//! - [`RelationPath`]: A classified relation expression (`parent.admin`)

mod entity;
mod relation;
mod subject;
mod tuple;

pub use entity::{Entity, EntityAndRelation};
pub use relation::{RelationPath, is_relation_computed, split_relation};
pub use subject::{
    ELLIPSIS, Subject, SubjectRelation, USER, are_subjects_equal, is_entity_and_subject_equal,
    is_subject_valid,
};
pub use tuple::Tuple;

pub(crate) use entity::{RELATION_SEPARATOR, parse_entity, parse_entity_and_relation};
pub(crate) use subject::parse_subject;
pub(crate) use tuple::{SUBJECT_SEPARATOR, parse_tuple};
