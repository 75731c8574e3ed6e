//! Tuple type representing an edge in the authorization graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityAndRelation, RELATION_SEPARATOR, parse_entity};
use super::subject::{Subject, is_entity_and_subject_equal, parse_subject};
use crate::error::{Error, Result};

/// Separator between the entity-relation half and the subject half.
pub(crate) const SUBJECT_SEPARATOR: char = '@';

/// A relationship tuple: "entity has relation to subject".
///
/// ## String Format
///
/// Tuples are parsed from and formatted to `entity#relation@subject`:
///
/// ```rust
/// use inferadb_tuple::{Entity, Subject, Tuple};
///
/// let tuple = Tuple::parse("repository:1#admin@user:1").unwrap();
/// assert_eq!(tuple.entity(), &Entity::new("repository", "1"));
/// assert_eq!(tuple.relation(), "admin");
/// assert_eq!(tuple.subject(), &Subject::simple("user", "1"));
/// assert_eq!(tuple.to_string(), "repository:1#admin@user:1");
/// ```
///
/// The entity-relation half must contain exactly one `#`, and the input
/// exactly one `@`. Anything else is rejected as
/// [`ErrorKind::MalformedTuple`](crate::ErrorKind::MalformedTuple):
///
/// ```rust
/// use inferadb_tuple::{ErrorKind, Tuple};
///
/// let err = Tuple::parse("repository:1#wrong:1#member").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedTuple);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tuple {
    /// The resource side of the edge.
    entity: Entity,

    /// The relation (edge label) connecting entity to subject.
    relation: String,

    /// The subject side of the edge.
    subject: Subject,
}

impl Tuple {
    /// Creates a new tuple.
    ///
    /// ```rust
    /// use inferadb_tuple::{Entity, Subject, Tuple};
    ///
    /// let tuple = Tuple::new(
    ///     Entity::new("organization", "1"),
    ///     "member",
    ///     Subject::userset("organization", "2", "admin"),
    /// );
    /// assert_eq!(tuple.to_string(), "organization:1#member@organization:2#admin");
    /// ```
    pub fn new(entity: Entity, relation: impl Into<String>, subject: Subject) -> Self {
        Self { entity, relation: relation.into(), subject }
    }

    /// Parses a tuple from `entity#relation@subject` format.
    ///
    /// Failures of the entity or subject halves are reported as
    /// [`ErrorKind::MalformedTuple`](crate::ErrorKind::MalformedTuple) with
    /// the underlying error as the source.
    pub fn parse(s: &str) -> Result<Self> {
        parse_tuple(s).map_err(Error::traced)
    }

    /// Returns the entity of the tuple.
    #[inline]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the relation of the tuple.
    #[inline]
    pub fn relation(&self) -> &str {
        &self.relation
    }

    /// Returns the subject of the tuple.
    #[inline]
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Returns the `entity#relation` half of the tuple.
    pub fn entity_and_relation(&self) -> EntityAndRelation {
        EntityAndRelation::new(self.entity.clone(), self.relation.clone())
    }

    /// Returns `true` if the subject is the tuple's own `entity#relation`.
    ///
    /// ```rust
    /// use inferadb_tuple::Tuple;
    ///
    /// let tuple = Tuple::parse("organization:1#member@organization:1#member").unwrap();
    /// assert!(tuple.is_self_referential());
    /// ```
    pub fn is_self_referential(&self) -> bool {
        is_entity_and_subject_equal(&self.entity_and_relation(), &self.subject)
    }

    /// Consumes the tuple, returning `(entity, relation, subject)`.
    pub fn into_parts(self) -> (Entity, String, Subject) {
        (self.entity, self.relation, self.subject)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.entity, RELATION_SEPARATOR, self.relation, SUBJECT_SEPARATOR, self.subject
        )
    }
}

impl FromStr for Tuple {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Creates a tuple from `(entity, relation, subject)`.
impl<R: Into<String>> From<(Entity, R, Subject)> for Tuple {
    fn from((entity, relation, subject): (Entity, R, Subject)) -> Self {
        Self::new(entity, relation, subject)
    }
}

pub(crate) fn parse_tuple(s: &str) -> Result<Tuple> {
    let malformed = || Error::malformed_tuple(s);

    let mut halves = s.split(SUBJECT_SEPARATOR);
    let (ear, subject) = match (halves.next(), halves.next(), halves.next()) {
        (Some(ear), Some(subject), None) => (ear, subject),
        _ => return Err(malformed()),
    };

    let (entity, relation) = ear
        .split_once(RELATION_SEPARATOR)
        .filter(|(_, relation)| !relation.contains(RELATION_SEPARATOR))
        .ok_or_else(malformed)?;

    let entity = parse_entity(entity).map_err(|e| malformed().with_source(e))?;
    let subject = parse_subject(subject).map_err(|e| malformed().with_source(e))?;

    Ok(Tuple::new(entity, relation, subject))
}
