//! Relation-path analysis.
//!
//! A relation expression is either a single relation name, resolved on the
//! same entity (a *computed* relation), or a dotted path such as
//! `parent.admin`, resolved by following `parent` to a related entity and
//! evaluating `admin` there (a *tuple-to-userset* relation).
//!
//! ```rust
//! use inferadb_tuple::{is_relation_computed, split_relation};
//!
//! assert_eq!(split_relation("owner"), vec!["owner", ""]);
//! assert_eq!(split_relation("parent.parent.admin"), vec!["parent", "parent", "admin"]);
//! assert!(is_relation_computed("owner"));
//! assert!(!is_relation_computed("parent.admin"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between hops of a relation path.
const HOP_SEPARATOR: char = '.';

/// Splits a relation expression into its hops.
///
/// A dot-free relation yields `[relation, ""]`, the trailing empty element
/// marking "no further hop". Dotted expressions yield their segments
/// unchanged, so the result always has at least two elements.
pub fn split_relation(relation: &str) -> Vec<String> {
    let mut hops: Vec<String> = relation.split(HOP_SEPARATOR).map(str::to_owned).collect();
    if hops.len() == 1 {
        hops.push(String::new());
    }
    hops
}

/// Returns `true` if the relation contains no `.` and resolves on the same
/// entity.
#[inline]
pub fn is_relation_computed(relation: &str) -> bool {
    !relation.contains(HOP_SEPARATOR)
}

/// A classified relation expression.
///
/// ```rust
/// use inferadb_tuple::RelationPath;
///
/// let path = RelationPath::parse("parent.parent.admin");
/// assert_eq!(
///     path,
///     RelationPath::TupleToUserset {
///         tupleset: "parent".into(),
///         computed: "parent.admin".into(),
///     }
/// );
/// assert_eq!(path.hops(), vec!["parent", "parent", "admin"]);
/// assert_eq!(path.to_string(), "parent.parent.admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelationPath {
    /// A relation resolved directly on the same entity.
    Computed {
        /// The relation name.
        relation: String,
    },

    /// A relation resolved by hopping through a related entity.
    TupleToUserset {
        /// The relation followed to reach the related entity.
        tupleset: String,
        /// The remaining expression evaluated on the related entity.
        computed: String,
    },
}

impl RelationPath {
    /// Classifies a relation expression.
    pub fn parse(relation: &str) -> Self {
        match relation.split_once(HOP_SEPARATOR) {
            Some((tupleset, computed)) => RelationPath::TupleToUserset {
                tupleset: tupleset.to_owned(),
                computed: computed.to_owned(),
            },
            None => RelationPath::Computed { relation: relation.to_owned() },
        }
    }

    /// Returns `true` for [`RelationPath::Computed`].
    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(self, RelationPath::Computed { .. })
    }

    /// Returns the relation evaluated first, on the starting entity.
    pub fn first_hop(&self) -> &str {
        match self {
            RelationPath::Computed { relation } => relation,
            RelationPath::TupleToUserset { tupleset, .. } => tupleset,
        }
    }

    /// Returns the remaining expression after the first hop, if any.
    pub fn rest(&self) -> Option<RelationPath> {
        match self {
            RelationPath::Computed { .. } => None,
            RelationPath::TupleToUserset { computed, .. } => Some(RelationPath::parse(computed)),
        }
    }

    /// Returns every hop in order, without the trailing empty marker.
    pub fn hops(&self) -> Vec<&str> {
        match self {
            RelationPath::Computed { relation } => vec![relation.as_str()],
            RelationPath::TupleToUserset { tupleset, computed } => {
                std::iter::once(tupleset.as_str()).chain(computed.split(HOP_SEPARATOR)).collect()
            },
        }
    }
}

impl fmt::Display for RelationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationPath::Computed { relation } => f.write_str(relation),
            RelationPath::TupleToUserset { tupleset, computed } => {
                write!(f, "{}{}{}", tupleset, HOP_SEPARATOR, computed)
            },
        }
    }
}

impl From<&str> for RelationPath {
    fn from(relation: &str) -> Self {
        Self::parse(relation)
    }
}
