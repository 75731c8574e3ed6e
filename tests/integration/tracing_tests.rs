//! Debug events for rejected input.
//!
//! Only compiled with the `tracing` feature.

#![cfg(feature = "tracing")]

use inferadb_tuple::{ErrorKind, Subject, Tuple, TupleParser, validate_subject_type};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("inferadb_tuple=debug"))
        .with_test_writer()
        .try_init();
}

#[test]
fn test_rejections_are_traced() {
    init_tracing();

    let err = Tuple::parse("repository:1#wrong:1#member").expect_err("tuple should be rejected");
    assert_eq!(err.kind(), ErrorKind::MalformedTuple);

    let err = validate_subject_type(&Subject::simple("team", "1"), &["user"])
        .expect_err("subject type should be rejected");
    assert_eq!(err.kind(), ErrorKind::SubjectTypeNotFound);

    let err = TupleParser::default().parse_entity("wrong").expect_err("entity should be rejected");
    assert_eq!(err.kind(), ErrorKind::MalformedEntity);
}
