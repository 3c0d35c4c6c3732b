//! Owned child containers: parent-owns-child composition.
//!
//! An [`OwnedObject`] holds the children a parent entity exclusively
//! owns. Children are keyed by URI (unique within the container), stored
//! in insertion order, and counted against a [`Cardinality`]. A child
//! belongs to exactly one container; [`OwnedObject::remove`] transfers
//! ownership back to the caller, who must discard it or re-insert it
//! elsewhere — never hold it in two containers at once.

use crate::error::{Error, Result};
use crate::identified::Entity;
use crate::property::Cardinality;
use crate::uri::Uri;

/// A cardinality-bounded, URI-keyed collection of exclusively owned
/// child entities.
///
/// The element type `T` is the container's capability constraint: for a
/// heterogeneous containment relation, `T` is a sum type over the
/// admissible concrete kinds, so every child satisfies the constraint by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedObject<T> {
    predicate: &'static str,
    cardinality: Cardinality,
    children: Vec<T>,
}

impl<T: Entity> OwnedObject<T> {
    /// Creates an empty container for the containment relation `predicate`.
    #[must_use]
    pub fn new(predicate: &'static str, cardinality: Cardinality) -> Self {
        OwnedObject {
            predicate,
            cardinality,
            children: Vec::new(),
        }
    }

    /// The schema identifier of the containment relation.
    #[must_use]
    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// The count constraint on children.
    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// True when the container holds no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Factory: constructs a child via `build(uri)`, inserts it, and
    /// returns it. Construction, URI assignment, and insertion happen in
    /// one step.
    ///
    /// # Errors
    ///
    /// [`Error::Cardinality`] when insertion would exceed the upper
    /// bound; [`Error::DuplicateUri`] when a child with `uri` is already
    /// present. The container is unchanged on failure.
    pub fn create_with<F>(&mut self, uri: Uri, build: F) -> Result<&mut T>
    where
        F: FnOnce(Uri) -> T,
    {
        self.check_insertable(uri.as_str())?;
        self.children.push(build(uri));
        // Just pushed, so the slot exists.
        match self.children.last_mut() {
            Some(child) => Ok(child),
            None => Err(Error::NotFound {
                uri: String::new(),
            }),
        }
    }

    /// Inserts an already-constructed child directly.
    ///
    /// # Errors
    ///
    /// [`Error::Cardinality`] when insertion would exceed the upper
    /// bound; [`Error::DuplicateUri`] when a child with the same URI is
    /// already present.
    pub fn insert(&mut self, child: T) -> Result<()> {
        self.check_insertable(child.uri().as_str())?;
        self.children.push(child);
        Ok(())
    }

    /// Returns the child with the given URI. An empty `uri` returns the
    /// sole child when exactly one exists (singleton convenience).
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no child matches.
    pub fn get(&self, uri: &str) -> Result<&T> {
        self.position(uri).map(|i| &self.children[i])
    }

    /// Mutable variant of [`OwnedObject::get`].
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no child matches.
    pub fn get_mut(&mut self, uri: &str) -> Result<&mut T> {
        let i = self.position(uri)?;
        Ok(&mut self.children[i])
    }

    /// As [`OwnedObject::get`], additionally requiring the found child's
    /// schema type to match `expected_type_uri` exactly.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no child matches; [`Error::Type`] when
    /// the found child has a different schema type.
    pub fn get_typed(&self, uri: &str, expected_type_uri: &str) -> Result<&T> {
        let child = self.get(uri)?;
        if child.type_uri() == expected_type_uri {
            Ok(child)
        } else {
            Err(Error::Type {
                expected: expected_type_uri.to_string(),
                found: child.type_uri().to_string(),
            })
        }
    }

    /// Detaches the child with the given URI, transferring ownership to
    /// the caller. Insertion order of the remaining children is kept.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no child matches; [`Error::Cardinality`]
    /// when removal would drop the count below the lower bound.
    pub fn remove(&mut self, uri: &str) -> Result<T> {
        let i = self.position(uri)?;
        if self.children.len() <= self.cardinality.lower() {
            return Err(Error::Cardinality {
                predicate: self.predicate,
                detail: format!(
                    "removal would drop below lower bound {}",
                    self.cardinality.lower()
                ),
            });
        }
        Ok(self.children.remove(i))
    }

    /// Iterates the children in insertion order. The iterator is lazy,
    /// finite, and restartable: re-iterating observes current state, not
    /// a snapshot.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.children.iter()
    }

    fn position(&self, uri: &str) -> Result<usize> {
        if let Some(i) = self
            .children
            .iter()
            .position(|c| c.uri().as_str() == uri)
        {
            return Ok(i);
        }
        // Singleton convenience: an empty URI selects the sole child.
        if uri.is_empty() && self.children.len() == 1 {
            return Ok(0);
        }
        Err(Error::NotFound {
            uri: uri.to_string(),
        })
    }

    fn check_insertable(&self, uri: &str) -> Result<()> {
        if self.cardinality.at_upper(self.children.len()) {
            return Err(Error::Cardinality {
                predicate: self.predicate,
                detail: format!(
                    "already holds {} child(ren), at upper bound",
                    self.children.len()
                ),
            });
        }
        if self.children.iter().any(|c| c.uri().as_str() == uri) {
            return Err(Error::DuplicateUri {
                uri: uri.to_string(),
            });
        }
        Ok(())
    }
}

impl<'a, T: Entity> IntoIterator for &'a OwnedObject<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
