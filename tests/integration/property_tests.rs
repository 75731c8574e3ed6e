//! Property tests for the codecs and the relation-path analyzer.

use inferadb_tuple::{
    Entity, Subject, SubjectRelation, Tuple, are_subjects_equal, is_relation_computed,
    is_subject_valid, split_relation, validate_subject_type,
};
use proptest::prelude::*;

use crate::common::CANONICAL_TUPLES;

fn token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

fn id() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn subject_relation() -> impl Strategy<Value = SubjectRelation> {
    prop_oneof![
        Just(SubjectRelation::None),
        Just(SubjectRelation::SelfSet),
        token().prop_map(SubjectRelation::Named),
        prop_oneof![Just(String::new()), Just("...".to_string())].prop_map(SubjectRelation::Named),
    ]
}

/// Any relation text a caller can put in `Named`, reserved values included.
fn named_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("...".to_string()), token()]
}

fn subject() -> impl Strategy<Value = Subject> {
    (token(), id(), subject_relation()).prop_map(|(t, i, r)| Subject::new(t, i, r))
}

fn tuple() -> impl Strategy<Value = Tuple> {
    (token(), id(), token(), subject())
        .prop_map(|(t, i, relation, subject)| Tuple::new(Entity::new(t, i), relation, subject))
}

fn relation_expression() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 1..5).prop_map(|hops| hops.join("."))
}

proptest! {
    #[test]
    fn tuple_round_trips(t in tuple()) {
        let parsed = Tuple::parse(&t.to_string());
        prop_assert_eq!(parsed.ok(), Some(t));
    }

    #[test]
    fn subject_round_trips(s in subject()) {
        let parsed = Subject::parse(&s.to_string());
        prop_assert_eq!(parsed.ok(), Some(s));
    }

    #[test]
    fn split_relation_has_at_least_two_hops(r in relation_expression()) {
        let hops = split_relation(&r);
        prop_assert!(hops.len() >= 2);
        if !r.contains('.') {
            prop_assert_eq!(hops, vec![r.clone(), String::new()]);
        } else {
            prop_assert_eq!(hops.join("."), r);
        }
    }

    #[test]
    fn computed_iff_dot_free(r in "[a-z.]{0,16}") {
        prop_assert_eq!(is_relation_computed(&r), r.matches('.').count() == 0);
    }

    #[test]
    fn subject_equality_is_field_equality(a in subject(), b in subject()) {
        let fields_equal = a.subject_type() == b.subject_type()
            && a.id() == b.id()
            && a.relation().as_str() == b.relation().as_str();
        prop_assert_eq!(are_subjects_equal(&a, &b), fields_equal);
        prop_assert!(are_subjects_equal(&a, &a.clone()));
    }

    #[test]
    fn named_relation_matches_parsed_text(t in token(), i in id(), r in named_text()) {
        let built = Subject::new(t.clone(), i.clone(), SubjectRelation::Named(r.clone()));
        let from_text = Subject::new(t, i, SubjectRelation::from(r.as_str()));
        prop_assert!(are_subjects_equal(&built, &from_text));
        prop_assert_eq!(built.specifier(), from_text.specifier());
        prop_assert_eq!(built.relation().is_none(), r.is_empty());

        let tuple = Tuple::new(Entity::new("doc", "1"), "viewer", built.clone());
        prop_assert_eq!(Tuple::parse(&tuple.to_string()).ok(), Some(tuple));
        prop_assert_eq!(Subject::parse(&built.to_string()).ok(), Some(built));
    }

    #[test]
    fn validity_is_non_empty_type_and_id(t in "[a-z]{0,3}", i in "[0-9]{0,3}", r in subject_relation()) {
        let s = Subject::new(t.clone(), i.clone(), r);
        prop_assert_eq!(is_subject_valid(&s), !t.is_empty() && !i.is_empty());
    }

    #[test]
    fn validation_is_exact_membership(s in subject(), allowed in prop::collection::vec("[a-z]{1,4}(#[a-z]{1,4})?", 0..6)) {
        let required = s.specifier();
        let member = allowed.iter().any(|a| *a == required);
        prop_assert_eq!(validate_subject_type(&s, &allowed).is_ok(), member);

        let mut with_required = allowed.clone();
        with_required.push(required);
        prop_assert!(validate_subject_type(&s, &with_required).is_ok());
    }
}

#[test]
fn canonical_tuples_format_unchanged() {
    for input in CANONICAL_TUPLES {
        let parsed = Tuple::parse(input).expect("canonical tuple should parse");
        assert_eq!(&parsed.to_string(), input);
    }
}
