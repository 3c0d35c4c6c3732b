//! SBOL 2 object-model core.
//!
//! An in-memory object model for synthetic-biology part and sequence
//! annotations, backed by a property-mediated object graph: every
//! attribute and relationship goes through a typed, cardinality-bounded
//! descriptor rather than a plain field, so the schema invariants hold
//! after every operation.
//!
//! - [`Property`] — a typed attribute slot ([`IntProperty`],
//!   [`TextProperty`], [`UriProperty`]) with validation-rule hooks and
//!   literal coercion.
//! - [`ReferencedObject`] — a weak, URI-keyed relation resolved lazily
//!   against the document's [`EntityIndex`].
//! - [`OwnedObject`] — a parent-owns-child container with factory,
//!   URI lookup, typed lookup, and ownership-transferring removal.
//! - [`Location`] / [`OwnedLocation`] — the positional-annotation
//!   hierarchy built on the framework: [`Range`], [`Cut`], and
//!   [`GenericLocation`].
//!
//! # Entry Point
//!
//! ```
//! use sbol_model::{OwnedLocation, Cardinality, Uri};
//!
//! let mut locations = OwnedLocation::new(
//!     sbol_model::vocab::LOCATIONS_PROPERTY,
//!     Cardinality::many(0),
//! );
//! let promoter = locations
//!     .create_range(Uri::new("http://example.org/anno/r1"))
//!     .unwrap();
//! promoter.set_start(1).unwrap();
//! promoter.set_end(55).unwrap();
//!
//! let rbs = sbol_model::Range::new("http://example.org/anno/r2", 40, 70);
//! assert_eq!(locations.get_range("http://example.org/anno/r1").unwrap().overlaps(&rbs), 16);
//! ```
//!
//! # Concurrency
//!
//! The object graph is plain mutable data scoped to one loaded document:
//! single-threaded, synchronous, single-writer. Nothing here locks.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod error;
pub mod identified;
pub mod location;
pub mod owned;
pub mod property;
pub mod reference;
pub mod uri;
pub mod vocab;

pub use error::{Error, Result};
pub use identified::{Entity, EntityIndex, Identified};
pub use location::{
    Cut, GenericLocation, Location, LocationBase, Orientation, OwnedLocation, Range,
};
pub use owned::OwnedObject;
pub use property::{
    Cardinality, IntProperty, Literal, LiteralValue, Property, TextProperty, UpperBound,
    UriProperty, ValidationRule,
};
pub use reference::ReferencedObject;
pub use uri::{Uri, UNASSIGNED_URI};
