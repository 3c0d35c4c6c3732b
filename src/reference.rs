//! Reference-valued properties: weak, URI-keyed relations to other objects.
//!
//! Unlike an [`OwnedObject`](crate::OwnedObject) child, a referenced
//! object is not owned by the holder. The slot stores URIs and resolves
//! them lazily against the document entity table on read; a dangling
//! reference is reported, not silently swallowed, and does not invalidate
//! the stored URI — a reference may legitimately point outside the
//! currently loaded document.

use crate::error::{Error, Result};
use crate::identified::{EntityIndex, Identified};
use crate::property::{Cardinality, UriProperty, ValidationRule};
use crate::uri::Uri;

/// A cardinality-bounded slot of URIs referencing other document objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferencedObject {
    reference_type_uri: &'static str,
    uris: UriProperty,
}

impl ReferencedObject {
    /// Creates a reference slot expecting targets of type `reference_type_uri`.
    ///
    /// # Errors
    ///
    /// [`Error::Cardinality`] when `cardinality` requires at least one
    /// reference: the slot starts empty (no URI can be seeded at
    /// construction), so a required reference slot would violate its
    /// lower bound at its first observable point.
    pub fn new(
        predicate: &'static str,
        reference_type_uri: &'static str,
        cardinality: Cardinality,
        rules: Vec<ValidationRule<Uri>>,
    ) -> Result<Self> {
        Ok(ReferencedObject {
            reference_type_uri,
            uris: UriProperty::new(predicate, cardinality, rules, None)?,
        })
    }

    /// Unruled 0..1 slot used by entity constructors; always within
    /// bounds, so construction cannot fail.
    pub(crate) fn optional(predicate: &'static str, reference_type_uri: &'static str) -> Self {
        ReferencedObject {
            reference_type_uri,
            uris: UriProperty::seeded(predicate, Cardinality::optional(), vec![], None),
        }
    }

    /// The schema identifier of this relation.
    #[must_use]
    pub fn predicate(&self) -> &'static str {
        self.uris.predicate()
    }

    /// The expected schema type of referenced objects.
    #[must_use]
    pub fn reference_type_uri(&self) -> &'static str {
        self.reference_type_uri
    }

    /// The stored URI, if any.
    #[must_use]
    pub fn get(&self) -> Option<&Uri> {
        self.uris.get()
    }

    /// All stored URIs, in insertion order.
    #[must_use]
    pub fn uris(&self) -> &[Uri] {
        self.uris.values()
    }

    /// Scalar overwrite of the stored URI.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::set`].
    pub fn set(&mut self, uri: Uri) -> Result<()> {
        self.uris.set(uri)
    }

    /// Appends a referenced URI.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::add`].
    pub fn add(&mut self, uri: Uri) -> Result<()> {
        self.uris.add(uri)
    }

    /// Detaches and returns the URI at `index`.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::remove`].
    pub fn remove(&mut self, index: usize) -> Result<Uri> {
        self.uris.remove(index)
    }

    /// Resolves the stored URI against the document entity table.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the slot is unset or the reference
    /// dangles. The stored URI is kept either way.
    pub fn resolve<'d>(&self, index: &'d dyn EntityIndex) -> Result<&'d Identified> {
        let uri = self.get().ok_or_else(|| Error::NotFound {
            uri: String::new(),
        })?;
        index.find_entity(uri.as_str()).ok_or_else(|| Error::NotFound {
            uri: uri.as_str().to_string(),
        })
    }
}
