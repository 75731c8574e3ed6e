//! Main error type for tuple encoding and validation.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use super::ErrorKind;

/// The error type returned by every parse and validation operation.
///
/// `Error` carries enough context to report a rejected input back to the
/// caller's own users:
/// - [`kind()`](Error::kind): Categorization for `match` statements
/// - [`code()`](Error::code): Stable external error code
/// - [`input()`](Error::input): The offending input, when there is one
/// - [`specifier()`](Error::specifier): The computed subject specifier for
///   [`ErrorKind::SubjectTypeNotFound`]
///
/// ## Error Hierarchy
///
/// ```text
/// Error
/// ├── kind: ErrorKind          (category for matching)
/// ├── message: String          (human-readable description)
/// ├── input: Option            (offending input)
/// ├── specifier: Option        (computed "type" or "type#relation")
/// └── source: Option           (underlying cause)
/// ```
///
/// ## Example
///
/// ```rust
/// use inferadb_tuple::{ErrorKind, Tuple};
///
/// let err = Tuple::parse("repository:1#wrong:1#member").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MalformedTuple);
/// assert_eq!(err.input(), Some("repository:1#wrong:1#member"));
/// ```
#[derive(Debug)]
pub struct Error {
    /// The error category.
    kind: ErrorKind,

    /// Human-readable error message.
    message: Cow<'static, str>,

    /// The input that was rejected.
    input: Option<String>,

    /// The subject specifier that failed allow-list validation.
    specifier: Option<String>,

    /// The underlying error, if any.
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Error {
    /// Creates a new error with the given kind and message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inferadb_tuple::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::MalformedEntity, "entity cannot be empty");
    /// assert_eq!(err.kind(), ErrorKind::MalformedEntity);
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self { kind, message: message.into(), input: None, specifier: None, source: None }
    }

    /// Creates an error from a kind with a default message.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = match kind {
            ErrorKind::MalformedEntity => "invalid entity",
            ErrorKind::MalformedTuple => "invalid tuple",
            ErrorKind::SubjectTypeNotFound => kind.code(),
            ErrorKind::InvalidToken => "invalid token",
            ErrorKind::InvalidLength => "input too long",
        };
        Self::new(kind, message)
    }

    /// Returns the error kind for categorization.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the stable external error code.
    ///
    /// Equivalent to `self.kind().code()`.
    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Returns the human-readable message without the kind prefix.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the input that was rejected, if available.
    #[inline]
    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }

    /// Returns the computed subject specifier for allow-list failures.
    ///
    /// ```rust
    /// use inferadb_tuple::{validate_subject_type, Subject};
    ///
    /// let subject = Subject::userset("test", "u3", "mem");
    /// let err = validate_subject_type(&subject, &["test#member", "user"]).unwrap_err();
    /// assert_eq!(err.specifier(), Some("test#mem"));
    /// ```
    #[inline]
    pub fn specifier(&self) -> Option<&str> {
        self.specifier.as_deref()
    }

    /// Sets the offending input for this error.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the computed subject specifier for this error.
    #[must_use]
    pub fn with_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.specifier = Some(specifier.into());
        self
    }

    /// Sets the source error for this error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors for each error kind

    /// Creates a malformed entity error for the given input.
    pub fn malformed_entity(input: impl Into<String>) -> Self {
        let input = input.into();
        Self::new(ErrorKind::MalformedEntity, format!("invalid entity '{}'", input))
            .with_input(input)
    }

    /// Creates a malformed tuple error for the given input.
    pub fn malformed_tuple(input: impl Into<String>) -> Self {
        let input = input.into();
        Self::new(ErrorKind::MalformedTuple, format!("invalid tuple '{}'", input)).with_input(input)
    }

    /// Creates a subject type error for the computed specifier.
    pub fn subject_type_not_found(specifier: impl Into<String>) -> Self {
        let specifier = specifier.into();
        let kind = ErrorKind::SubjectTypeNotFound;
        Self::new(kind, format!("{}: '{}' is not an allowed subject type", kind.code(), specifier))
            .with_specifier(specifier)
    }

    /// Creates an invalid token error for a segment of the given input.
    pub fn invalid_token(input: impl Into<String>, token: &str) -> Self {
        Self::new(ErrorKind::InvalidToken, format!("invalid token '{}'", token)).with_input(input)
    }

    /// Creates an invalid length error for input longer than `max`.
    pub fn invalid_length(input: impl Into<String>, max: usize) -> Self {
        let input = input.into();
        Self::new(
            ErrorKind::InvalidLength,
            format!("input of {} bytes exceeds the maximum of {}", input.len(), max),
        )
        .with_input(input)
    }

    /// Emits a debug event for this error when the `tracing` feature is on.
    #[inline]
    pub(crate) fn traced(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "inferadb_tuple",
            kind = %self.kind,
            code = self.kind.code(),
            input = self.input.as_deref().unwrap_or_default(),
            "rejected input: {}",
            self.message
        );
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}

/// Errors compare by kind, input and specifier; the source is ignored.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.input == other.input && self.specifier == other.specifier
    }
}

impl Eq for Error {}
