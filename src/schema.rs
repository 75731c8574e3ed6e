//! Subject-type validation against a schema-declared allow-list.
//!
//! A schema declares, for each relation, which subjects may appear on its
//! tuples. Each allow-list entry is either a bare type (`"user"`, meaning a
//! direct subject with no relation) or a type restricted to one relation
//! (`"organization#member"`). A subject matches only the entry whose text
//! equals its [`specifier`](crate::Subject::specifier) exactly.
//!
//! ```rust
//! use inferadb_tuple::{validate_subject_type, ErrorKind, Subject};
//!
//! let allowed = ["organization#member", "user"];
//!
//! assert!(validate_subject_type(&Subject::simple("user", "1"), &allowed).is_ok());
//! assert!(validate_subject_type(&Subject::userset("organization", "1", "member"), &allowed).is_ok());
//!
//! // No fallback to the bare type when a relation is present.
//! let err = validate_subject_type(&Subject::userset("user", "1", "member"), &allowed).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::SubjectTypeNotFound);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Subject;

/// Checks a subject against an ordered set of allowed specifiers.
///
/// The required specifier is the subject type when the subject has no
/// relation, otherwise `type#relation`. Validation succeeds iff that exact
/// string is present in `allowed`; there is no type-only fallback and no
/// prefix matching. Failure yields
/// [`ErrorKind::SubjectTypeNotFound`](crate::ErrorKind::SubjectTypeNotFound)
/// carrying the computed specifier.
pub fn validate_subject_type<I>(subject: &Subject, allowed: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let required = subject.specifier();
    if allowed.into_iter().any(|entry| entry.as_ref() == required) {
        Ok(())
    } else {
        Err(Error::subject_type_not_found(required).traced())
    }
}

/// One allow-list entry: `"type"` or `"type#relation"`.
///
/// ```rust
/// use inferadb_tuple::SubjectSpecifier;
///
/// let specifier = SubjectSpecifier::parse("organization#member");
/// assert_eq!(specifier.subject_type(), "organization");
/// assert_eq!(specifier.relation(), Some("member"));
/// assert_eq!(specifier.to_string(), "organization#member");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SubjectSpecifier {
    subject_type: String,
    relation: Option<String>,
}

impl SubjectSpecifier {
    /// Creates a bare type specifier.
    pub fn new(subject_type: impl Into<String>) -> Self {
        Self { subject_type: subject_type.into(), relation: None }
    }

    /// Creates a specifier restricted to one relation.
    pub fn with_relation(subject_type: impl Into<String>, relation: impl Into<String>) -> Self {
        Self { subject_type: subject_type.into(), relation: Some(relation.into()) }
    }

    /// Reads a specifier from its textual form, splitting on the first `#`.
    pub fn parse(s: &str) -> Self {
        match s.split_once('#') {
            Some((subject_type, relation)) => Self::with_relation(subject_type, relation),
            None => Self::new(s),
        }
    }

    /// Returns the specifier a subject must match.
    pub fn of(subject: &Subject) -> Self {
        let relation = subject.relation();
        if relation.is_none() {
            Self::new(subject.subject_type())
        } else {
            Self::with_relation(subject.subject_type(), relation.as_str())
        }
    }

    /// Returns the subject type.
    #[inline]
    pub fn subject_type(&self) -> &str {
        &self.subject_type
    }

    /// Returns the relation restriction, if any.
    #[inline]
    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    /// Returns `true` if the subject matches this entry exactly.
    pub fn matches(&self, subject: &Subject) -> bool {
        *self == Self::of(subject)
    }
}

impl fmt::Display for SubjectSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.relation {
            Some(ref relation) => write!(f, "{}#{}", self.subject_type, relation),
            None => f.write_str(&self.subject_type),
        }
    }
}

impl FromStr for SubjectSpecifier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for SubjectSpecifier {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for SubjectSpecifier {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SubjectSpecifier> for String {
    fn from(specifier: SubjectSpecifier) -> Self {
        specifier.to_string()
    }
}

/// The ordered allow-list of subject specifiers for one relation.
///
/// ```rust
/// use inferadb_tuple::{AllowedSubjectTypes, Subject};
///
/// let allowed: AllowedSubjectTypes = ["organization#member", "user"].into_iter().collect();
/// assert!(allowed.validate(&Subject::simple("user", "1")).is_ok());
/// assert!(allowed.validate(&Subject::simple("organization", "1")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedSubjectTypes {
    specifiers: Vec<SubjectSpecifier>,
}

impl AllowedSubjectTypes {
    /// Creates an empty allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a specifier, keeping declaration order.
    pub fn push(&mut self, specifier: impl Into<SubjectSpecifier>) {
        self.specifiers.push(specifier.into());
    }

    /// Returns `true` if the subject's exact specifier is allowed.
    pub fn allows(&self, subject: &Subject) -> bool {
        self.specifiers.iter().any(|specifier| specifier.matches(subject))
    }

    /// Validates a subject, failing with `SubjectTypeNotFound`.
    pub fn validate(&self, subject: &Subject) -> Result<()> {
        if self.allows(subject) {
            Ok(())
        } else {
            Err(Error::subject_type_not_found(subject.specifier()).traced())
        }
    }

    /// Returns the specifiers in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SubjectSpecifier> {
        self.specifiers.iter()
    }

    /// Returns the number of specifiers.
    pub fn len(&self) -> usize {
        self.specifiers.len()
    }

    /// Returns `true` if nothing is allowed.
    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }
}

impl<S: Into<SubjectSpecifier>> FromIterator<S> for AllowedSubjectTypes {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self { specifiers: iter.into_iter().map(Into::into).collect() }
    }
}

impl<'a> IntoIterator for &'a AllowedSubjectTypes {
    type Item = &'a SubjectSpecifier;
    type IntoIter = std::slice::Iter<'a, SubjectSpecifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.specifiers.iter()
    }
}
