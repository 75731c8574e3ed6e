//! Subject validation against schema allow-lists, and tuple batches.

use inferadb_tuple::{
    AllowedSubjectTypes, ErrorKind, ParserConfig, Subject, SubjectSpecifier, TupleCollection,
    TupleParser, is_subject_valid, validate_subject_type,
};

use crate::common::{CANONICAL_TUPLES, tuple};

#[test]
fn test_validate_batch_against_schema() {
    // repository#admin allows direct users and organization members
    let allowed: AllowedSubjectTypes = ["user", "organization#member"].into_iter().collect();

    let batch: TupleCollection = [
        "repository:1#admin@user:1",
        "repository:1#admin@organization:1#member",
        "repository:1#admin@organization:1#...",
    ]
    .into_iter()
    .map(tuple)
    .collect();

    let rejected: Vec<String> = batch
        .iter()
        .filter_map(|t| allowed.validate(t.subject()).err())
        .filter_map(|err| err.specifier().map(str::to_owned))
        .collect();

    assert_eq!(rejected, vec!["organization#..."]);
}

#[test]
fn test_free_function_and_allow_list_agree() {
    let entries = ["organization#member", "user", "team#..."];
    let allowed: AllowedSubjectTypes = entries.into_iter().collect();

    for subject in [
        Subject::simple("user", "1"),
        Subject::simple("organization", "1"),
        Subject::userset("organization", "1", "member"),
        Subject::userset("organization", "1", "admin"),
        Subject::self_set("team", "1"),
        Subject::simple("team", "1"),
    ] {
        assert_eq!(
            validate_subject_type(&subject, entries).is_ok(),
            allowed.allows(&subject),
            "disagreement for {}",
            subject
        );
    }
}

#[test]
fn test_specifier_matches_subject_text() {
    for input in CANONICAL_TUPLES {
        let subject = tuple(input).subject().clone();
        let specifier = SubjectSpecifier::of(&subject);
        assert_eq!(specifier.to_string(), subject.specifier());
        assert!(specifier.matches(&subject));
    }
}

#[test]
fn test_constructed_subjects_can_be_invalid() {
    assert!(is_subject_valid(&Subject::simple("user", "1")));
    assert!(!is_subject_valid(&Subject::simple("", "1")));
    assert!(!is_subject_valid(&Subject::userset("user", "", "member")));
}

#[test]
fn test_strict_parser_on_canonical_tuples() {
    let parser = TupleParser::new(ParserConfig::strict());
    for input in CANONICAL_TUPLES {
        let parsed = parser.parse_tuple(input).expect("canonical tuple should pass strict parsing");
        assert_eq!(&parsed.to_string(), input);
    }

    let err = parser
        .parse_tuple("repository:1#admin@user:alice@example")
        .expect_err("second @ should be rejected");
    assert_eq!(err.kind(), ErrorKind::MalformedTuple);
}

#[test]
fn test_batch_subjects() {
    let batch: TupleCollection = CANONICAL_TUPLES.iter().copied().map(tuple).collect();
    let subjects = batch.subjects();

    assert_eq!(subjects.len(), CANONICAL_TUPLES.len());
    assert!(subjects.contains(&Subject::self_set("organization", "1")));
    assert!(subjects.iter().any(Subject::is_user));
}
