//! Entity and entity-and-relation references.
//!
//! An [`Entity`] names a resource instance in `"type:id"` form. An
//! [`EntityAndRelation`] pairs an entity with a relation name in
//! `"type:id#relation"` form, where the relation may be absent.
//!
//! ```rust
//! use inferadb_tuple::{Entity, EntityAndRelation};
//!
//! let entity = Entity::parse("repository:1").unwrap();
//! assert_eq!(entity.entity_type(), "repository");
//! assert_eq!(entity.id(), "1");
//!
//! let ear = EntityAndRelation::parse("repository:1#admin").unwrap();
//! assert_eq!(ear.entity(), &entity);
//! assert_eq!(ear.relation(), "admin");
//! assert_eq!(ear.to_string(), "repository:1#admin");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Separator between an entity type and its id.
pub(crate) const TYPE_SEPARATOR: char = ':';

/// Separator between an entity and a relation.
pub(crate) const RELATION_SEPARATOR: char = '#';

/// A resource instance in `"type:id"` format.
///
/// Parsed entities always have a non-empty type and id. Entities built with
/// [`Entity::new`] are taken as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    #[serde(rename = "type")]
    entity_type: String,
    id: String,
}

impl Entity {
    /// Creates an entity from type and id components.
    ///
    /// ```rust
    /// use inferadb_tuple::Entity;
    ///
    /// let entity = Entity::new("user", "alice");
    /// assert_eq!(entity.to_string(), "user:alice");
    /// ```
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self { entity_type: entity_type.into(), id: id.into() }
    }

    /// Parses an entity from `"type:id"` format.
    ///
    /// Fails with [`ErrorKind::MalformedEntity`](crate::ErrorKind::MalformedEntity)
    /// if there is no `:`, more than one `:`, or either half is empty.
    ///
    /// ```rust
    /// use inferadb_tuple::{Entity, ErrorKind};
    ///
    /// assert!(Entity::parse("test:4").is_ok());
    /// assert_eq!(Entity::parse("wrong").unwrap_err().kind(), ErrorKind::MalformedEntity);
    /// assert_eq!(
    ///     Entity::parse("wrong:wrong:wrong").unwrap_err().kind(),
    ///     ErrorKind::MalformedEntity
    /// );
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        parse_entity(s).map_err(Error::traced)
    }

    /// Returns the entity type.
    #[inline]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns the entity id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if both type and id are non-empty.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.entity_type.is_empty() && !self.id.is_empty()
    }

    /// Pairs this entity with a relation.
    pub fn with_relation(self, relation: impl Into<String>) -> EntityAndRelation {
        EntityAndRelation::new(self, relation)
    }

    /// Consumes the entity, returning `(type, id)`.
    pub fn into_parts(self) -> (String, String) {
        (self.entity_type, self.id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.entity_type, TYPE_SEPARATOR, self.id)
    }
}

impl FromStr for Entity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// An entity paired with a relation name, in `"type:id#relation"` format.
///
/// The relation is empty when the `#relation` suffix is absent. An empty
/// relation is a legal value, distinct from a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityAndRelation {
    entity: Entity,
    relation: String,
}

impl EntityAndRelation {
    /// Creates an entity-and-relation from its parts.
    pub fn new(entity: Entity, relation: impl Into<String>) -> Self {
        Self { entity, relation: relation.into() }
    }

    /// Parses an entity-and-relation from `"type:id"` or `"type:id#relation"`.
    ///
    /// At most one `#` is allowed. The entity half must be a valid
    /// [`Entity`]; its failure is propagated as
    /// [`ErrorKind::MalformedEntity`](crate::ErrorKind::MalformedEntity).
    ///
    /// ```rust
    /// use inferadb_tuple::EntityAndRelation;
    ///
    /// let ear = EntityAndRelation::parse("test:5").unwrap();
    /// assert_eq!(ear.relation(), "");
    /// assert!(!ear.has_relation());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        parse_entity_and_relation(s).map_err(Error::traced)
    }

    /// Returns the entity.
    #[inline]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the relation, or `""` when absent.
    #[inline]
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Returns `true` if the relation is non-empty.
    #[inline]
    pub fn has_relation(&self) -> bool {
        !self.relation.is_empty()
    }

    /// Consumes the value, returning `(entity, relation)`.
    pub fn into_parts(self) -> (Entity, String) {
        (self.entity, self.relation)
    }
}

impl fmt::Display for EntityAndRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relation.is_empty() {
            write!(f, "{}", self.entity)
        } else {
            write!(f, "{}{}{}", self.entity, RELATION_SEPARATOR, self.relation)
        }
    }
}

impl FromStr for EntityAndRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Entity> for EntityAndRelation {
    fn from(entity: Entity) -> Self {
        Self::new(entity, String::new())
    }
}

pub(crate) fn parse_entity(s: &str) -> Result<Entity> {
    let mut parts = s.split(TYPE_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(entity_type), Some(id), None) if !entity_type.is_empty() && !id.is_empty() => {
            Ok(Entity::new(entity_type, id))
        },
        _ => Err(Error::malformed_entity(s)),
    }
}

/// Splits `"type:id[#relation]"` into its entity and optional relation.
///
/// A second `#` makes the whole reference malformed.
pub(crate) fn split_reference(s: &str) -> Result<(Entity, Option<&str>)> {
    match s.split_once(RELATION_SEPARATOR) {
        Some((_, relation)) if relation.contains(RELATION_SEPARATOR) => {
            Err(Error::malformed_entity(s))
        },
        Some((entity, relation)) => Ok((parse_entity(entity)?, Some(relation))),
        None => Ok((parse_entity(s)?, None)),
    }
}

pub(crate) fn parse_entity_and_relation(s: &str) -> Result<EntityAndRelation> {
    let (entity, relation) = split_reference(s)?;
    Ok(EntityAndRelation::new(entity, relation.unwrap_or_default()))
}
