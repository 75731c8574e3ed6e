//! Parser configuration for untrusted tuple input.

/// Default maximum input length in bytes.
pub const DEFAULT_MAX_LENGTH: usize = 1024;

/// Configuration for [`TupleParser`](crate::TupleParser).
///
/// The lenient codecs (`Tuple::parse` and friends) accept any characters
/// besides the separators. Input arriving from outside the trust boundary
/// can be held to the canonical token grammar instead.
///
/// ## Example
///
/// ```rust
/// use inferadb_tuple::ParserConfig;
///
/// // Enforce the token grammar on every type, id and relation
/// let config = ParserConfig::builder()
///     .strict_tokens(true)
///     .max_length(256)
///     .build();
///
/// // Defaults: lenient, 1024 bytes
/// let config = ParserConfig::default();
/// assert!(!config.strict_tokens);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct ParserConfig {
    /// Whether types, ids and relations must follow the token grammar.
    ///
    /// Types and relations are `1*(ALPHA / DIGIT / "_")`; ids may also
    /// contain `-`. A subject relation may be `...`.
    #[builder(default = false)]
    pub strict_tokens: bool,

    /// Maximum input length in bytes.
    #[builder(default = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ParserConfig {
    /// Creates a configuration with token checking enabled.
    pub fn strict() -> Self {
        Self::builder().strict_tokens(true).build()
    }
}
