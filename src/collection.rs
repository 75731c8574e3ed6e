//! Ordered batches of tuples and subjects.
//!
//! Storage readers return tuples in a stable order; the check engine walks
//! them and, for usersets, the subjects they point at. These collections
//! keep insertion order and allow duplicates, exactly like the rows they
//! wrap.

use std::slice;
use std::vec;

use serde::{Deserialize, Serialize};

use crate::types::{Subject, Tuple};

/// An ordered batch of tuples.
///
/// ```rust
/// use inferadb_tuple::{Subject, Tuple, TupleCollection};
///
/// let tuples: TupleCollection = [
///     "repository:1#admin@user:1",
///     "repository:1#admin@organization:1#member",
/// ]
/// .iter()
/// .map(|s| Tuple::parse(s))
/// .collect::<Result<_, _>>()
/// .unwrap();
///
/// let subjects = tuples.subjects();
/// assert_eq!(subjects.len(), 2);
/// assert!(subjects.contains(&Subject::userset("organization", "1", "member")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TupleCollection {
    tuples: Vec<Tuple>,
}

impl TupleCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tuple.
    pub fn add(&mut self, tuple: Tuple) {
        self.tuples.push(tuple);
    }

    /// Returns the tuples in insertion order.
    pub fn tuples(&self) -> &[Tuple] {
        &self.tuples
    }

    /// Returns the number of tuples.
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    /// Returns `true` if the collection holds no tuples.
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    /// Returns an iterator over the tuples.
    pub fn iter(&self) -> slice::Iter<'_, Tuple> {
        self.tuples.iter()
    }

    /// Collects the subject of every tuple, in tuple order.
    pub fn subjects(&self) -> SubjectCollection {
        self.tuples.iter().map(|tuple| tuple.subject().clone()).collect()
    }
}

impl From<Vec<Tuple>> for TupleCollection {
    fn from(tuples: Vec<Tuple>) -> Self {
        Self { tuples }
    }
}

impl FromIterator<Tuple> for TupleCollection {
    fn from_iter<T: IntoIterator<Item = Tuple>>(iter: T) -> Self {
        Self { tuples: iter.into_iter().collect() }
    }
}

impl Extend<Tuple> for TupleCollection {
    fn extend<T: IntoIterator<Item = Tuple>>(&mut self, iter: T) {
        self.tuples.extend(iter);
    }
}

impl IntoIterator for TupleCollection {
    type Item = Tuple;
    type IntoIter = vec::IntoIter<Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.into_iter()
    }
}

impl<'a> IntoIterator for &'a TupleCollection {
    type Item = &'a Tuple;
    type IntoIter = slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}

/// An ordered batch of subjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectCollection {
    subjects: Vec<Subject>,
}

impl SubjectCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subject.
    pub fn add(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    /// Returns the subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Returns the number of subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// Returns `true` if the collection holds no subjects.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Returns an iterator over the subjects.
    pub fn iter(&self) -> slice::Iter<'_, Subject> {
        self.subjects.iter()
    }

    /// Returns `true` if an identical subject is present.
    pub fn contains(&self, subject: &Subject) -> bool {
        self.subjects.contains(subject)
    }
}

impl From<Vec<Subject>> for SubjectCollection {
    fn from(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }
}

impl FromIterator<Subject> for SubjectCollection {
    fn from_iter<T: IntoIterator<Item = Subject>>(iter: T) -> Self {
        Self { subjects: iter.into_iter().collect() }
    }
}

impl Extend<Subject> for SubjectCollection {
    fn extend<T: IntoIterator<Item = Subject>>(&mut self, iter: T) {
        self.subjects.extend(iter);
    }
}

impl IntoIterator for SubjectCollection {
    type Item = Subject;
    type IntoIter = vec::IntoIter<Subject>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubjectCollection {
    type Item = &'a Subject;
    type IntoIter = slice::Iter<'a, Subject>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.iter()
    }
}
