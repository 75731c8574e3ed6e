//! Configurable parser for untrusted tuple input.

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::types::{
    Entity, EntityAndRelation, RELATION_SEPARATOR, SUBJECT_SEPARATOR, Subject, Tuple,
    parse_entity, parse_entity_and_relation, parse_subject, parse_tuple,
};

/// A parser that layers length and token checks over the codecs.
///
/// Every method first rejects input longer than
/// [`max_length`](ParserConfig::max_length), then runs the same codec as
/// the matching `parse` function, then (in strict mode) checks each type,
/// id and relation against the token grammar.
///
/// ## Example
///
/// ```rust
/// use inferadb_tuple::{ErrorKind, ParserConfig, TupleParser};
///
/// let parser = TupleParser::new(ParserConfig::strict());
///
/// assert!(parser.parse_tuple("repository:1#parent@organization:1#...").is_ok());
///
/// let err = parser.parse_tuple("repo sitory:1#admin@user:1").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidToken);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TupleParser {
    config: ParserConfig,
}

impl TupleParser {
    /// Creates a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a `type:id` entity.
    pub fn parse_entity(&self, s: &str) -> Result<Entity> {
        self.run(s, parse_entity, |entity| self.check_entity(s, entity.entity_type(), entity.id()))
    }

    /// Parses a `type:id[#relation]` entity-and-relation.
    ///
    /// An absent relation is accepted in strict mode too, but a `#` must be
    /// followed by a relation token: `test:5` passes, `test:5#` does not.
    pub fn parse_entity_and_relation(&self, s: &str) -> Result<EntityAndRelation> {
        self.run(s, parse_entity_and_relation, |ear| {
            self.check_entity(s, ear.entity().entity_type(), ear.entity().id())?;
            if s.contains(RELATION_SEPARATOR) {
                self.check(s, ear.relation(), is_token)?;
            }
            Ok(())
        })
    }

    /// Parses a `type:id[#relation]` subject.
    ///
    /// In strict mode a `#` must be followed by a relation token or `...`.
    pub fn parse_subject(&self, s: &str) -> Result<Subject> {
        self.run(s, parse_subject, |subject| self.check_subject(s, s, subject))
    }

    /// Parses an `entity#relation@subject` tuple.
    pub fn parse_tuple(&self, s: &str) -> Result<Tuple> {
        self.run(s, parse_tuple, |tuple| {
            self.check_entity(s, tuple.entity().entity_type(), tuple.entity().id())?;
            self.check(s, tuple.relation(), is_token)?;
            let subject_text = s.split_once(SUBJECT_SEPARATOR).map_or("", |(_, subject)| subject);
            self.check_subject(s, subject_text, tuple.subject())
        })
    }

    fn run<T>(
        &self,
        s: &str,
        parse: impl FnOnce(&str) -> Result<T>,
        check: impl FnOnce(&T) -> Result<()>,
    ) -> Result<T> {
        self.parse_checked(s, parse, check).map_err(Error::traced)
    }

    fn parse_checked<T>(
        &self,
        s: &str,
        parse: impl FnOnce(&str) -> Result<T>,
        check: impl FnOnce(&T) -> Result<()>,
    ) -> Result<T> {
        if s.len() > self.config.max_length {
            return Err(Error::invalid_length(s, self.config.max_length));
        }
        let value = parse(s)?;
        if self.config.strict_tokens {
            check(&value)?;
        }
        Ok(value)
    }

    fn check_entity(&self, input: &str, entity_type: &str, id: &str) -> Result<()> {
        self.check(input, entity_type, is_token)?;
        self.check(input, id, is_id)
    }

    fn check_subject(&self, input: &str, text: &str, subject: &Subject) -> Result<()> {
        self.check_entity(input, subject.subject_type(), subject.id())?;
        let relation = subject.relation();
        if !text.contains(RELATION_SEPARATOR) || relation.is_self_set() {
            return Ok(());
        }
        self.check(input, relation.as_str(), is_token)
    }

    fn check(&self, input: &str, segment: &str, valid: fn(&str) -> bool) -> Result<()> {
        if valid(segment) {
            Ok(())
        } else {
            Err(Error::invalid_token(input, segment))
        }
    }
}

/// `1*(ALPHA / DIGIT / "_")`
fn is_token(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// A token that may also contain `-`.
fn is_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
