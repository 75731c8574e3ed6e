//! Error kind enumeration for categorizing tuple errors.

/// Categorization of tuple encoding and validation errors.
///
/// This enum provides a stable interface for matching on error types. Each
/// kind maps to an external error code (see [`ErrorKind::code`]) shared with
/// the storage layer, the schema layer and the check engine.
///
/// | ErrorKind             | Level      | Code                                  |
/// |-----------------------|------------|---------------------------------------|
/// | `MalformedEntity`     | Structural | `ERROR_CODE_INVALID_ENTITY`           |
/// | `MalformedTuple`      | Structural | `ERROR_CODE_INVALID_TUPLE`            |
/// | `SubjectTypeNotFound` | Semantic   | `ERROR_CODE_SUBJECT_TYPE_NOT_FOUND`   |
/// | `InvalidToken`        | Structural | `ERROR_CODE_INVALID_TOKEN`            |
/// | `InvalidLength`       | Structural | `ERROR_CODE_INVALID_LENGTH`           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input is not a well-formed `type:id` entity reference.
    ///
    /// Raised when the `:` separator is missing or repeated, when either
    /// half is empty, or when an entity-and-relation carries more than one
    /// `#`.
    #[error("malformed entity")]
    MalformedEntity,

    /// The input is not a well-formed `entity#relation@subject` tuple.
    ///
    /// Failures of the entity or subject halves are reported with this kind;
    /// the underlying [`MalformedEntity`](ErrorKind::MalformedEntity) error
    /// is kept as the source.
    #[error("malformed tuple")]
    MalformedTuple,

    /// The subject's type/relation combination is not in the allow-list.
    #[error("subject type not found")]
    SubjectTypeNotFound,

    /// A type, id or relation contains characters outside the token grammar.
    ///
    /// Only raised by [`TupleParser`](crate::TupleParser) in strict mode.
    #[error("invalid token")]
    InvalidToken,

    /// The input exceeds the configured maximum length.
    ///
    /// Only raised by [`TupleParser`](crate::TupleParser).
    #[error("invalid length")]
    InvalidLength,
}

impl ErrorKind {
    /// Returns the stable external error code for this kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inferadb_tuple::ErrorKind;
    ///
    /// assert_eq!(
    ///     ErrorKind::SubjectTypeNotFound.code(),
    ///     "ERROR_CODE_SUBJECT_TYPE_NOT_FOUND"
    /// );
    /// ```
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::MalformedEntity => "ERROR_CODE_INVALID_ENTITY",
            ErrorKind::MalformedTuple => "ERROR_CODE_INVALID_TUPLE",
            ErrorKind::SubjectTypeNotFound => "ERROR_CODE_SUBJECT_TYPE_NOT_FOUND",
            ErrorKind::InvalidToken => "ERROR_CODE_INVALID_TOKEN",
            ErrorKind::InvalidLength => "ERROR_CODE_INVALID_LENGTH",
        }
    }

    /// Returns `true` if the input could not be read structurally.
    ///
    /// Schema failures such as `SubjectTypeNotFound` are well-formed input
    /// that the allow-list rejects.
    #[inline]
    pub fn is_structural(&self) -> bool {
        !matches!(self, ErrorKind::SubjectTypeNotFound)
    }
}
