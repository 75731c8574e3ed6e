//! Shared fixtures for integration tests.

use inferadb_tuple::{Entity, Subject, Tuple};

/// Canonical tuples that must survive a format/parse round trip unchanged.
pub const CANONICAL_TUPLES: &[&str] = &[
    "repository:1#admin@user:1",
    "repository:1#parent@organization:1#...",
    "repository:1#admin@organization:1#member",
    "organization:1#member@user:1",
    "organization:1#member@organization:2#admin",
    "doc:readme#viewer@team:eng_core#member",
];

/// Parses a tuple that the test knows to be well-formed.
pub fn tuple(s: &str) -> Tuple {
    Tuple::parse(s).expect("fixture tuple should parse")
}

/// Builds `repository:1#{relation}@{subject}`.
pub fn repository_tuple(relation: &str, subject: Subject) -> Tuple {
    Tuple::new(Entity::new("repository", "1"), relation, subject)
}
