//! Canonical parse and format scenarios.

use std::error::Error as _;

use inferadb_tuple::{
    Entity, EntityAndRelation, ErrorKind, RelationPath, Subject, SubjectRelation, Tuple,
    is_relation_computed, split_relation, validate_subject_type, ELLIPSIS,
};

use crate::common::{repository_tuple, tuple};

#[test]
fn test_parse_direct_subject_tuple() {
    let parsed = Tuple::parse("repository:1#admin@user:1").expect("tuple should parse");

    assert_eq!(parsed, repository_tuple("admin", Subject::simple("user", "1")));
    assert_eq!(parsed.entity(), &Entity::new("repository", "1"));
    assert_eq!(parsed.relation(), "admin");
    assert_eq!(parsed.subject().relation(), &SubjectRelation::None);
}

#[test]
fn test_parse_self_set_subject_tuple() {
    let parsed = tuple("repository:1#parent@organization:1#...");

    assert_eq!(parsed.subject().relation(), &SubjectRelation::SelfSet);
    assert_eq!(parsed.subject().relation().as_str(), ELLIPSIS);
    assert_eq!(parsed, repository_tuple("parent", Subject::self_set("organization", "1")));
}

#[test]
fn test_parse_tuple_without_at_is_malformed() {
    let err = Tuple::parse("repository:1#wrong:1#member").expect_err("tuple should be rejected");

    assert_eq!(err.kind(), ErrorKind::MalformedTuple);
    assert_eq!(err.code(), "ERROR_CODE_INVALID_TUPLE");
}

#[test]
fn test_wrong_is_malformed_entity_at_both_levels() {
    let as_entity = Entity::parse("wrong").expect_err("entity should be rejected");
    let as_ear = EntityAndRelation::parse("wrong").expect_err("ear should be rejected");

    assert_eq!(as_entity.kind(), ErrorKind::MalformedEntity);
    assert_eq!(as_ear.kind(), ErrorKind::MalformedEntity);
}

#[test]
fn test_multi_hop_relation() {
    assert_eq!(split_relation("parent.parent.admin"), vec!["parent", "parent", "admin"]);
    assert!(!is_relation_computed("parent.parent.admin"));
    assert!(!RelationPath::parse("parent.parent.admin").is_computed());
}

#[test]
fn test_subject_type_has_no_fuzzy_fallback() {
    let subject = Subject::userset("test", "u3", "mem");
    let err = validate_subject_type(&subject, &["test#member", "user"])
        .expect_err("subject type should be rejected");

    assert_eq!(err.kind(), ErrorKind::SubjectTypeNotFound);
    assert_eq!(err.specifier(), Some("test#mem"));
}

#[test]
fn test_missing_relation_is_not_a_failure_for_ear() {
    // A bare entity is a legal entity-and-relation...
    let ear = EntityAndRelation::parse("test:5").expect("ear should parse");
    assert_eq!(ear.relation(), "");

    // ...but not a legal tuple half.
    let err = Tuple::parse("test:5@user:1").expect_err("tuple should be rejected");
    assert_eq!(err.kind(), ErrorKind::MalformedTuple);
}

#[test]
fn test_subject_failure_surfaces_as_malformed_tuple() {
    let err = Tuple::parse("repository:1#admin@wrong").expect_err("tuple should be rejected");

    assert_eq!(err.kind(), ErrorKind::MalformedTuple);
    let source = err.source().expect("entity error should be kept as source");
    assert!(source.to_string().contains("'wrong'"));
}

#[test]
fn test_tuple_format() {
    let member = Tuple::new(Entity::new("organization", "1"), "member", Subject::simple("user", "1"));
    assert_eq!(member.to_string(), "organization:1#member@user:1");

    let nested = Tuple::new(
        Entity::new("organization", "1"),
        "member",
        Subject::userset("organization", "2", "admin"),
    );
    assert_eq!(nested.to_string(), "organization:1#member@organization:2#admin");
}

#[test]
fn test_ear_format() {
    let ear = EntityAndRelation::new(Entity::new("repository", "1"), "admin");
    assert_eq!(ear.to_string(), "repository:1#admin");

    let bare = EntityAndRelation::new(Entity::new("doc", "1"), "");
    assert_eq!(bare.to_string(), "doc:1");
}
