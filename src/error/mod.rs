//! Error types for tuple encoding and validation.
//!
//! Every operation returns a [`Result`] whose error is an [`Error`] carrying
//! an [`ErrorKind`]:
//! - [`ErrorKind::MalformedEntity`]: structural failure at the `type:id` level
//! - [`ErrorKind::MalformedTuple`]: structural failure at the
//!   `entity#relation@subject` level, including failures of its parts
//! - [`ErrorKind::SubjectTypeNotFound`]: the subject's type/relation
//!   combination is absent from the allow-list
//!
//! ## Key Invariant
//!
//! A parse yields either a fully populated record or an error, never a
//! partial record. Errors are returned, never raised as panics.
//!
//! ```rust
//! use inferadb_tuple::{EntityAndRelation, ErrorKind};
//!
//! // A missing relation is legal...
//! let ear = EntityAndRelation::parse("test:5").unwrap();
//! assert_eq!(ear.relation(), "");
//!
//! // ...a missing colon is not.
//! let err = EntityAndRelation::parse("wrong").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MalformedEntity);
//! ```

mod kind;
mod repr;

pub use kind::ErrorKind;
pub use repr::Error;

/// A specialized `Result` type for tuple operations.
pub type Result<T> = std::result::Result<T, Error>;
