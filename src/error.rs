//! Error taxonomy for the object-model layer.
//!
//! Every violation is surfaced at the point it occurs; a rejected mutation
//! leaves prior state unchanged. This layer performs no I/O, so there is no
//! transient-failure class and nothing is retried.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// An object-model violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A set/add/create/remove would leave a property or container outside
    /// its `[lower, upper]` cardinality bounds.
    #[error("cardinality violation on <{predicate}>: {detail}")]
    Cardinality {
        /// Predicate IRI of the property or containment relation.
        predicate: &'static str,
        /// What the rejected operation would have violated.
        detail: String,
    },

    /// A validation rule from the external rule catalog rejected the
    /// proposed value.
    #[error("validation rule {rule} rejected value on <{predicate}>")]
    Validation {
        /// Predicate IRI of the property being mutated.
        predicate: &'static str,
        /// Identifier of the failing rule.
        rule: &'static str,
    },

    /// A literal could not be coerced to the property's declared kind, or a
    /// typed lookup found an object of a different runtime type.
    #[error("type mismatch: expected {expected}, found {found}")]
    Type {
        /// The declared or requested type.
        expected: String,
        /// The type actually present.
        found: String,
    },

    /// An insert would introduce a second child with the same URI.
    #[error("duplicate URI <{uri}>")]
    DuplicateUri {
        /// The URI already present in the container.
        uri: String,
    },

    /// A lookup found no object with the given URI.
    #[error("no object with URI <{uri}>")]
    NotFound {
        /// The URI (or index, rendered) that missed.
        uri: String,
    },
}
