//! Identity base record shared by every document object.

use crate::property::{Cardinality, TextProperty};
use crate::uri::Uri;
use crate::vocab;

/// The identity and annotation base of every object in the document graph.
///
/// `uri` is set exactly once, at construction; there is no setter. The
/// `type_uri` is fixed per concrete variant and identifies the object's
/// schema type for serialization and type-checked retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct Identified {
    uri: Uri,
    type_uri: &'static str,
    display_id: TextProperty,
    name: TextProperty,
    description: TextProperty,
}

impl Identified {
    /// Creates the base record for an object of schema type `type_uri`.
    #[must_use]
    pub fn new(uri: Uri, type_uri: &'static str) -> Self {
        Identified {
            uri,
            type_uri,
            display_id: TextProperty::seeded(
                vocab::DISPLAY_ID,
                Cardinality::optional(),
                vec![],
                None,
            ),
            name: TextProperty::seeded(vocab::NAME, Cardinality::optional(), vec![], None),
            description: TextProperty::seeded(
                vocab::DESCRIPTION,
                Cardinality::optional(),
                vec![],
                None,
            ),
        }
    }

    /// The object's URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// The object's schema type IRI.
    #[must_use]
    pub fn type_uri(&self) -> &'static str {
        self.type_uri
    }

    /// Optional human-readable identifier fragment.
    #[must_use]
    pub fn display_id(&self) -> Option<&str> {
        self.display_id.get().map(String::as_str)
    }

    /// Optional human-readable name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.get().map(String::as_str)
    }

    /// Optional free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.get().map(String::as_str)
    }

    /// The `sbol:displayId` slot, for mutation through the property interface.
    pub fn display_id_mut(&mut self) -> &mut TextProperty {
        &mut self.display_id
    }

    /// The `sbol:name` slot, for mutation through the property interface.
    pub fn name_mut(&mut self) -> &mut TextProperty {
        &mut self.name
    }

    /// The `sbol:description` slot, for mutation through the property interface.
    pub fn description_mut(&mut self) -> &mut TextProperty {
        &mut self.description
    }
}

/// Capability constraint satisfied by every ownable document object.
///
/// [`OwnedObject`](crate::OwnedObject) containers key and type-check their
/// children through this trait.
pub trait Entity {
    /// The identity base record.
    fn identity(&self) -> &Identified;

    /// Mutable access to the identity base record. The URI itself stays
    /// immutable; this exposes the annotation slots.
    fn identity_mut(&mut self) -> &mut Identified;

    /// The object's URI.
    fn uri(&self) -> &Uri {
        self.identity().uri()
    }

    /// The object's schema type IRI.
    fn type_uri(&self) -> &'static str {
        self.identity().type_uri()
    }
}

/// The document entity table, an external collaborator.
///
/// Reference-valued properties resolve stored URIs against it on read.
/// Read-only from this crate's perspective.
pub trait EntityIndex {
    /// Looks up the identity record of the object with the given URI, if
    /// it is present in the loaded document.
    fn find_entity(&self, uri: &str) -> Option<&Identified>;
}
