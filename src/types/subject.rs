//! Subject references: direct entities, usersets, and self-sets.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::{
    Entity, EntityAndRelation, RELATION_SEPARATOR, TYPE_SEPARATOR, split_reference,
};
use crate::error::{Error, Result};

/// Reserved subject relation meaning "this entity as a singleton set".
pub const ELLIPSIS: &str = "...";

/// The entity type of end users.
pub const USER: &str = "user";

/// The relation part of a [`Subject`].
///
/// The three kinds are semantically distinct and never compare equal:
///
/// | Variant       | Text        | Meaning                                          |
/// |---------------|-------------|--------------------------------------------------|
/// | `None`        | (absent)    | The entity itself                                |
/// | `Named(rel)`  | `#rel`      | Every subject holding `rel` on the entity        |
/// | `SelfSet`     | `#...`      | The entity as a singleton set                    |
///
/// Values compare and hash by their text, so `Named("")` is `None` and
/// `Named("...")` is `SelfSet`. [`Subject`] stores the normalized variant.
///
/// ```rust
/// use inferadb_tuple::SubjectRelation;
///
/// assert_eq!(SubjectRelation::Named("...".into()), SubjectRelation::SelfSet);
/// assert!(SubjectRelation::Named(String::new()).is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubjectRelation {
    /// Direct reference to the entity.
    #[default]
    None,
    /// The userset of a named relation on the entity.
    Named(String),
    /// The entity itself as a singleton set ([`ELLIPSIS`]).
    SelfSet,
}

impl SubjectRelation {
    /// Returns the textual form: `""`, the relation name, or `"..."`.
    pub fn as_str(&self) -> &str {
        match self {
            SubjectRelation::None => "",
            SubjectRelation::Named(relation) => relation,
            SubjectRelation::SelfSet => ELLIPSIS,
        }
    }

    /// Returns `true` if there is no relation.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Returns `true` for the self-set relation ([`ELLIPSIS`]).
    #[inline]
    pub fn is_self_set(&self) -> bool {
        self.as_str() == ELLIPSIS
    }

    /// Returns the relation name of a userset.
    pub fn name(&self) -> Option<&str> {
        match self.as_str() {
            "" | ELLIPSIS => None,
            name => Some(name),
        }
    }

    /// Maps reserved text held by `Named` onto its own variant.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            SubjectRelation::Named(relation) => SubjectRelation::from(relation),
            other => other,
        }
    }
}

impl PartialEq for SubjectRelation {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for SubjectRelation {}

impl Hash for SubjectRelation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for SubjectRelation {
    fn from(relation: &str) -> Self {
        match relation {
            "" => SubjectRelation::None,
            ELLIPSIS => SubjectRelation::SelfSet,
            name => SubjectRelation::Named(name.to_owned()),
        }
    }
}

impl From<String> for SubjectRelation {
    fn from(relation: String) -> Self {
        match relation.as_str() {
            "" => SubjectRelation::None,
            ELLIPSIS => SubjectRelation::SelfSet,
            _ => SubjectRelation::Named(relation),
        }
    }
}

impl From<Option<&str>> for SubjectRelation {
    fn from(relation: Option<&str>) -> Self {
        relation.map_or(SubjectRelation::None, SubjectRelation::from)
    }
}

impl From<SubjectRelation> for String {
    fn from(relation: SubjectRelation) -> Self {
        match relation {
            SubjectRelation::Named(name) => name,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for SubjectRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An actor reference in `"type:id"` or `"type:id#relation"` format.
///
/// Supports direct subjects (`"user:alice"`), usersets
/// (`"organization:2#admin"`) and self-sets (`"organization:1#..."`).
///
/// ## Example
///
/// ```rust
/// use inferadb_tuple::{Subject, SubjectRelation};
///
/// let subject = Subject::parse("organization:1#...").unwrap();
/// assert_eq!(subject.subject_type(), "organization");
/// assert_eq!(subject.relation(), &SubjectRelation::SelfSet);
/// assert_eq!(subject.to_string(), "organization:1#...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "type")]
    subject_type: String,
    id: String,
    #[serde(default, skip_serializing_if = "SubjectRelation::is_none")]
    relation: SubjectRelation,
}

impl Subject {
    /// Creates a subject from its parts.
    ///
    /// A `Named` relation holding `""` or `"..."` is stored as `None` or
    /// `SelfSet`.
    pub fn new(
        subject_type: impl Into<String>,
        id: impl Into<String>,
        relation: impl Into<SubjectRelation>,
    ) -> Self {
        Self {
            subject_type: subject_type.into(),
            id: id.into(),
            relation: relation.into().normalized(),
        }
    }

    /// Creates a direct subject without a relation.
    pub fn simple(subject_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(subject_type, id, SubjectRelation::None)
    }

    /// Creates a userset subject.
    ///
    /// ```rust
    /// use inferadb_tuple::Subject;
    ///
    /// let subject = Subject::userset("organization", "2", "admin");
    /// assert_eq!(subject.to_string(), "organization:2#admin");
    /// ```
    pub fn userset(
        subject_type: impl Into<String>,
        id: impl Into<String>,
        relation: impl AsRef<str>,
    ) -> Self {
        Self::new(subject_type, id, SubjectRelation::from(relation.as_ref()))
    }

    /// Creates a self-set subject (`type:id#...`).
    pub fn self_set(subject_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::new(subject_type, id, SubjectRelation::SelfSet)
    }

    /// Parses a subject from `"type:id"` or `"type:id#relation"` format.
    ///
    /// The relation segment may be the literal [`ELLIPSIS`]. At most one `#`
    /// is allowed; entity failures yield
    /// [`ErrorKind::MalformedEntity`](crate::ErrorKind::MalformedEntity).
    pub fn parse(s: &str) -> Result<Self> {
        parse_subject(s).map_err(Error::traced)
    }

    /// Returns the subject type.
    #[inline]
    pub fn subject_type(&self) -> &str {
        &self.subject_type
    }

    /// Returns the subject id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the subject relation.
    #[inline]
    pub fn relation(&self) -> &SubjectRelation {
        &self.relation
    }

    /// Returns `true` if both type and id are non-empty.
    ///
    /// The relation is unconstrained.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.subject_type.is_empty() && !self.id.is_empty()
    }

    /// Returns `true` if the subject is an end user (type [`USER`]).
    #[inline]
    pub fn is_user(&self) -> bool {
        self.subject_type == USER
    }

    /// Returns `true` if the subject carries a relation (named or self-set).
    #[inline]
    pub fn is_userset(&self) -> bool {
        !self.relation.is_none()
    }

    /// Returns the allow-list specifier this subject must match.
    ///
    /// `"type"` when there is no relation, otherwise `"type#relation"`.
    ///
    /// ```rust
    /// use inferadb_tuple::Subject;
    ///
    /// assert_eq!(Subject::simple("user", "1").specifier(), "user");
    /// assert_eq!(Subject::userset("organization", "1", "member").specifier(), "organization#member");
    /// assert_eq!(Subject::self_set("organization", "1").specifier(), "organization#...");
    /// ```
    pub fn specifier(&self) -> String {
        if self.relation.is_none() {
            self.subject_type.clone()
        } else {
            format!("{}{}{}", self.subject_type, RELATION_SEPARATOR, self.relation)
        }
    }

    /// Returns the entity this subject refers to.
    pub fn entity(&self) -> Entity {
        Entity::new(self.subject_type.clone(), self.id.clone())
    }

    /// Converts the subject to an entity-and-relation.
    ///
    /// A self-set keeps its `...` relation text.
    pub fn to_entity_and_relation(&self) -> EntityAndRelation {
        EntityAndRelation::new(self.entity(), self.relation.as_str())
    }

    /// Marks a non-user subject without a relation as a self-set.
    ///
    /// Users and subjects that already carry a relation are returned as-is.
    ///
    /// ```rust
    /// use inferadb_tuple::{Subject, SubjectRelation};
    ///
    /// let org = Subject::simple("organization", "1").with_ellipsis_if_non_user();
    /// assert_eq!(org.relation(), &SubjectRelation::SelfSet);
    ///
    /// let user = Subject::simple("user", "1").with_ellipsis_if_non_user();
    /// assert_eq!(user.relation(), &SubjectRelation::None);
    /// ```
    #[must_use]
    pub fn with_ellipsis_if_non_user(mut self) -> Self {
        if !self.is_user() && self.relation.is_none() {
            self.relation = SubjectRelation::SelfSet;
        }
        self
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.subject_type, TYPE_SEPARATOR, self.id)?;
        if !self.relation.is_none() {
            write!(f, "{}{}", RELATION_SEPARATOR, self.relation)?;
        }
        Ok(())
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Entity> for Subject {
    fn from(entity: Entity) -> Self {
        let (subject_type, id) = entity.into_parts();
        Self::simple(subject_type, id)
    }
}

/// Returns `true` iff type, id and relation text are all identical.
///
/// No relation, a named relation and [`ELLIPSIS`] are pairwise distinct.
pub fn are_subjects_equal(a: &Subject, b: &Subject) -> bool {
    a == b
}

/// Returns `true` iff the subject's type and id are both non-empty.
pub fn is_subject_valid(subject: &Subject) -> bool {
    subject.is_valid()
}

/// Returns `true` if the subject names the same entity and relation text.
///
/// Used to detect tuples whose subject points back at their own
/// `entity#relation`.
pub fn is_entity_and_subject_equal(ear: &EntityAndRelation, subject: &Subject) -> bool {
    ear.entity().entity_type() == subject.subject_type()
        && ear.entity().id() == subject.id()
        && ear.relation() == subject.relation().as_str()
}

pub(crate) fn parse_subject(s: &str) -> Result<Subject> {
    let (entity, relation) = split_reference(s)?;
    let (subject_type, id) = entity.into_parts();
    Ok(Subject::new(subject_type, id, SubjectRelation::from(relation)))
}
