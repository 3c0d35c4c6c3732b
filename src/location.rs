//! The Location hierarchy: where a feature sits on a sequence.
//!
//! One sum type, [`Location`], spans the three concrete kinds —
//! [`Range`] (inclusive interval), [`Cut`] (point between two
//! coordinates), and [`GenericLocation`] (no coordinate system) — each
//! carrying its own property slots on top of the shared
//! [`LocationBase`] record. Typed downcasts return [`Error::Type`]
//! instead of panicking.
//!
//! [`OwnedLocation`] is the owned-container specialization a parent
//! annotation holds its locations in.

use crate::error::{Error, Result};
use crate::identified::{Entity, Identified};
use crate::owned::OwnedObject;
use crate::property::{Cardinality, IntProperty, UriProperty};
use crate::reference::ReferencedObject;
use crate::uri::Uri;
use crate::vocab;

/// Strand orientation of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Forward strand.
    Inline,
    /// Reverse-complement strand.
    ReverseComplement,
}

impl Orientation {
    /// The IRI of this orientation individual.
    #[must_use]
    pub fn as_uri(self) -> &'static str {
        match self {
            Orientation::Inline => vocab::ORIENTATION_INLINE,
            Orientation::ReverseComplement => vocab::ORIENTATION_REVERSE_COMPLEMENT,
        }
    }

    /// Parses an orientation individual IRI.
    #[must_use]
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            vocab::ORIENTATION_INLINE => Some(Orientation::Inline),
            vocab::ORIENTATION_REVERSE_COMPLEMENT => Some(Orientation::ReverseComplement),
            _ => None,
        }
    }
}

/// The record shared by every location kind: identity, strand
/// orientation, and a weak reference to the Sequence the location sits
/// on. The sequence reference may point outside the loaded document.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationBase {
    identity: Identified,
    orientation: UriProperty,
    sequence: ReferencedObject,
}

impl LocationBase {
    fn new(uri: Uri, type_uri: &'static str) -> Self {
        LocationBase {
            identity: Identified::new(uri, type_uri),
            orientation: UriProperty::seeded(
                vocab::ORIENTATION,
                Cardinality::required(),
                vec![],
                Some(Uri::new(vocab::ORIENTATION_INLINE)),
            ),
            sequence: ReferencedObject::optional(vocab::SEQUENCE_PROPERTY, vocab::SEQUENCE),
        }
    }

    /// The identity base record.
    #[must_use]
    pub fn identity(&self) -> &Identified {
        &self.identity
    }

    /// Mutable access to the identity base record.
    pub fn identity_mut(&mut self) -> &mut Identified {
        &mut self.identity
    }

    /// Current strand orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
            .get()
            .and_then(|u| Orientation::from_uri(u.as_str()))
            .unwrap_or(Orientation::Inline)
    }

    /// Sets the strand orientation through the property interface.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::set`].
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        self.orientation.set(Uri::new(orientation.as_uri()))
    }

    /// The underlying `sbol:orientation` slot.
    #[must_use]
    pub fn orientation_property(&self) -> &UriProperty {
        &self.orientation
    }

    /// The weak `sbol:sequence` reference slot.
    #[must_use]
    pub fn sequence(&self) -> &ReferencedObject {
        &self.sequence
    }

    /// Mutable access to the `sbol:sequence` reference slot.
    pub fn sequence_mut(&mut self) -> &mut ReferencedObject {
        &mut self.sequence
    }
}

/// A region specified by discrete, inclusive `start` and `end` positions
/// indexing characters of a Sequence's elements. The first position is 1,
/// as is typical practice in biology, rather than 0, as is typical
/// practice in computer science.
///
/// `start <= end` is expected of a well-formed range but not enforced;
/// the interval queries tolerate malformed ranges and yield zero or
/// negative numbers rather than errors. The queries are total over the
/// whole `i64` coordinate domain: gap and length arithmetic saturates at
/// the extremes instead of overflowing.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    base: LocationBase,
    start: IntProperty,
    end: IntProperty,
}

impl Range {
    /// Creates a range with the given coordinates.
    #[must_use]
    pub fn new(uri: impl Into<Uri>, start: i64, end: i64) -> Self {
        Range {
            base: LocationBase::new(uri.into(), vocab::RANGE),
            start: IntProperty::seeded(vocab::START, Cardinality::optional(), vec![], Some(start))
                .with_default(1),
            end: IntProperty::seeded(vocab::END, Cardinality::optional(), vec![], Some(end))
                .with_default(2),
        }
    }

    /// The shared location record.
    #[must_use]
    pub fn base(&self) -> &LocationBase {
        &self.base
    }

    /// Mutable access to the shared location record.
    pub fn base_mut(&mut self) -> &mut LocationBase {
        &mut self.base
    }

    /// First coordinate, 1-based inclusive.
    #[must_use]
    pub fn start(&self) -> i64 {
        self.start.get().copied().unwrap_or(1)
    }

    /// Last coordinate, 1-based inclusive.
    #[must_use]
    pub fn end(&self) -> i64 {
        self.end.get().copied().unwrap_or(2)
    }

    /// Sets the first coordinate.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::set`].
    pub fn set_start(&mut self, start: i64) -> Result<()> {
        self.start.set(start)
    }

    /// Sets the last coordinate.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::set`].
    pub fn set_end(&mut self, end: i64) -> Result<()> {
        self.end.set(end)
    }

    /// Number of positions covered: `end - start + 1`. May be zero or
    /// negative for a malformed range.
    #[must_use]
    pub fn length(&self) -> i64 {
        self.end().saturating_sub(self.start()).saturating_add(1)
    }

    /// Positions strictly between `self` and a later `other`; 0 when the
    /// ranges touch, overlap, or `other` does not come after. Exact
    /// adjacency (`self.end + 1 == other.start`) is not preceding.
    #[must_use]
    pub fn precedes(&self, other: &Range) -> i64 {
        if self.end() < other.start() {
            other.start().saturating_sub(self.end()).saturating_sub(1)
        } else {
            0
        }
    }

    /// Mirror of [`Range::precedes`]: positions strictly between an
    /// earlier `other` and `self`. `a.precedes(b) == b.follows(a)`.
    #[must_use]
    pub fn follows(&self, other: &Range) -> i64 {
        if self.start() > other.end() {
            self.start().saturating_sub(other.end()).saturating_sub(1)
        } else {
            0
        }
    }

    /// 1 when the ranges are exactly adjacent on either side, else 0.
    #[must_use]
    pub fn adjoins(&self, other: &Range) -> i64 {
        if other.end().checked_add(1) == Some(self.start())
            || self.end().checked_add(1) == Some(other.start())
        {
            1
        } else {
            0
        }
    }

    /// `other.length()` when `self` fully encloses `other` (inclusive
    /// bounds), else 0.
    #[must_use]
    pub fn contains(&self, other: &Range) -> i64 {
        if self.start() <= other.start() && self.end() >= other.end() {
            other.length()
        } else {
            0
        }
    }

    /// Size of the overlapping region, per the historical branch policy:
    ///
    /// 1. identical bounds are defined as non-overlap (0);
    /// 2. `self` starts and ends before `other` with intersecting spans
    ///    yields `self.end - other.start + 1`;
    /// 3. the mirrored case yields `other.end - self.start + 1`;
    /// 4. otherwise a non-zero `other.contains(self)` is returned as-is;
    /// 5. otherwise 0.
    ///
    /// Branch 4 reports containment size, not overlap arithmetic, so the
    /// result is asymmetric between a range and one it strictly encloses.
    /// Callers depend on this; see the regression tests before changing
    /// the branch order.
    #[must_use]
    pub fn overlaps(&self, other: &Range) -> i64 {
        if self.start() == other.start() && self.end() == other.end() {
            0
        } else if self.start() < other.start()
            && self.end() < other.end()
            && self.end() >= other.start()
        {
            self.end().saturating_sub(other.start()).saturating_add(1)
        } else if self.start() > other.start()
            && self.end() > other.end()
            && self.start() <= other.end()
        {
            other.end().saturating_sub(self.start()).saturating_add(1)
        } else {
            // Branches 4 and 5: containment size when `other` encloses
            // `self`, zero otherwise.
            other.contains(self)
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Range::new(Uri::unset(), 1, 2)
    }
}

impl Entity for Range {
    fn identity(&self) -> &Identified {
        self.base.identity()
    }

    fn identity_mut(&mut self) -> &mut Identified {
        self.base.identity_mut()
    }
}

/// A location between two coordinates of a Sequence's elements,
/// specified by a single required `at` position.
#[derive(Debug, Clone, PartialEq)]
pub struct Cut {
    base: LocationBase,
    at: IntProperty,
}

impl Cut {
    /// Creates a cut at the given coordinate.
    #[must_use]
    pub fn new(uri: impl Into<Uri>, at: i64) -> Self {
        Cut {
            base: LocationBase::new(uri.into(), vocab::CUT),
            at: IntProperty::seeded(vocab::AT, Cardinality::required(), vec![], Some(at)),
        }
    }

    /// The shared location record.
    #[must_use]
    pub fn base(&self) -> &LocationBase {
        &self.base
    }

    /// Mutable access to the shared location record.
    pub fn base_mut(&mut self) -> &mut LocationBase {
        &mut self.base
    }

    /// The cut coordinate, 1-based.
    #[must_use]
    pub fn at(&self) -> i64 {
        self.at.get().copied().unwrap_or(1)
    }

    /// Sets the cut coordinate.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::set`].
    pub fn set_at(&mut self, at: i64) -> Result<()> {
        self.at.set(at)
    }
}

impl Default for Cut {
    fn default() -> Self {
        Cut::new(Uri::unset(), 1)
    }
}

impl Entity for Cut {
    fn identity(&self) -> &Identified {
        self.base.identity()
    }

    fn identity_mut(&mut self) -> &mut Identified {
        self.base.identity_mut()
    }
}

/// A location on a Sequence whose encoding is not IUPAC or whose
/// structure is potentially nonlinear; carries orientation and the
/// sequence reference but no coordinates. Also usable when the parent
/// design is partial and lacks a Sequence entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericLocation {
    base: LocationBase,
}

impl GenericLocation {
    /// Creates a generic location.
    #[must_use]
    pub fn new(uri: impl Into<Uri>) -> Self {
        GenericLocation {
            base: LocationBase::new(uri.into(), vocab::GENERIC_LOCATION),
        }
    }

    /// The shared location record.
    #[must_use]
    pub fn base(&self) -> &LocationBase {
        &self.base
    }

    /// Mutable access to the shared location record.
    pub fn base_mut(&mut self) -> &mut LocationBase {
        &mut self.base
    }
}

impl Default for GenericLocation {
    fn default() -> Self {
        GenericLocation::new(Uri::unset())
    }
}

impl Entity for GenericLocation {
    fn identity(&self) -> &Identified {
        self.base.identity()
    }

    fn identity_mut(&mut self) -> &mut Identified {
        self.base.identity_mut()
    }
}

/// Any concrete location kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// An inclusive `[start, end]` interval.
    Range(Range),
    /// A point between two coordinates.
    Cut(Cut),
    /// A location with no coordinate system.
    Generic(GenericLocation),
}

impl Location {
    fn base(&self) -> &LocationBase {
        match self {
            Location::Range(r) => r.base(),
            Location::Cut(c) => c.base(),
            Location::Generic(g) => g.base(),
        }
    }

    fn base_mut(&mut self) -> &mut LocationBase {
        match self {
            Location::Range(r) => r.base_mut(),
            Location::Cut(c) => c.base_mut(),
            Location::Generic(g) => g.base_mut(),
        }
    }

    /// Current strand orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.base().orientation()
    }

    /// Sets the strand orientation.
    ///
    /// # Errors
    ///
    /// As [`crate::Property::set`].
    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<()> {
        self.base_mut().set_orientation(orientation)
    }

    /// The weak `sbol:sequence` reference slot.
    #[must_use]
    pub fn sequence(&self) -> &ReferencedObject {
        self.base().sequence()
    }

    /// Mutable access to the `sbol:sequence` reference slot.
    pub fn sequence_mut(&mut self) -> &mut ReferencedObject {
        self.base_mut().sequence_mut()
    }

    /// Typed downcast to [`Range`].
    ///
    /// # Errors
    ///
    /// [`Error::Type`] when this location is not a range.
    pub fn as_range(&self) -> Result<&Range> {
        match self {
            Location::Range(r) => Ok(r),
            other => Err(type_mismatch(vocab::RANGE, other)),
        }
    }

    /// Mutable typed downcast to [`Range`].
    ///
    /// # Errors
    ///
    /// [`Error::Type`] when this location is not a range.
    pub fn as_range_mut(&mut self) -> Result<&mut Range> {
        match self {
            Location::Range(r) => Ok(r),
            other => Err(type_mismatch(vocab::RANGE, other)),
        }
    }

    /// Typed downcast to [`Cut`].
    ///
    /// # Errors
    ///
    /// [`Error::Type`] when this location is not a cut.
    pub fn as_cut(&self) -> Result<&Cut> {
        match self {
            Location::Cut(c) => Ok(c),
            other => Err(type_mismatch(vocab::CUT, other)),
        }
    }

    /// Mutable typed downcast to [`Cut`].
    ///
    /// # Errors
    ///
    /// [`Error::Type`] when this location is not a cut.
    pub fn as_cut_mut(&mut self) -> Result<&mut Cut> {
        match self {
            Location::Cut(c) => Ok(c),
            other => Err(type_mismatch(vocab::CUT, other)),
        }
    }

    /// Typed downcast to [`GenericLocation`].
    ///
    /// # Errors
    ///
    /// [`Error::Type`] when this location is not a generic location.
    pub fn as_generic(&self) -> Result<&GenericLocation> {
        match self {
            Location::Generic(g) => Ok(g),
            other => Err(type_mismatch(vocab::GENERIC_LOCATION, other)),
        }
    }

    /// Mutable typed downcast to [`GenericLocation`].
    ///
    /// # Errors
    ///
    /// [`Error::Type`] when this location is not a generic location.
    pub fn as_generic_mut(&mut self) -> Result<&mut GenericLocation> {
        match self {
            Location::Generic(g) => Ok(g),
            other => Err(type_mismatch(vocab::GENERIC_LOCATION, other)),
        }
    }
}

fn type_mismatch(expected: &'static str, found: &Location) -> Error {
    Error::Type {
        expected: expected.to_string(),
        found: found.type_uri().to_string(),
    }
}

impl Entity for Location {
    fn identity(&self) -> &Identified {
        self.base().identity()
    }

    fn identity_mut(&mut self) -> &mut Identified {
        self.base_mut().identity_mut()
    }
}

impl From<Range> for Location {
    fn from(r: Range) -> Self {
        Location::Range(r)
    }
}

impl From<Cut> for Location {
    fn from(c: Cut) -> Self {
        Location::Cut(c)
    }
}

impl From<GenericLocation> for Location {
    fn from(g: GenericLocation) -> Self {
        Location::Generic(g)
    }
}

/// A container of locations exclusively owned by one parent annotation.
pub type OwnedLocation = OwnedObject<Location>;

impl OwnedObject<Location> {
    /// Creates a [`Range`] child with the default coordinates (1, 2) and
    /// inserts it.
    ///
    /// # Errors
    ///
    /// As [`OwnedObject::create_with`].
    pub fn create_range(&mut self, uri: impl Into<Uri>) -> Result<&mut Range> {
        self.create_with(uri.into(), |u| Location::Range(Range::new(u, 1, 2)))?
            .as_range_mut()
    }

    /// Creates a [`Cut`] child at the default coordinate 1 and inserts it.
    ///
    /// # Errors
    ///
    /// As [`OwnedObject::create_with`].
    pub fn create_cut(&mut self, uri: impl Into<Uri>) -> Result<&mut Cut> {
        self.create_with(uri.into(), |u| Location::Cut(Cut::new(u, 1)))?
            .as_cut_mut()
    }

    /// Creates a [`GenericLocation`] child and inserts it.
    ///
    /// # Errors
    ///
    /// As [`OwnedObject::create_with`].
    pub fn create_generic_location(&mut self, uri: impl Into<Uri>) -> Result<&mut GenericLocation> {
        self.create_with(uri.into(), |u| Location::Generic(GenericLocation::new(u)))?
            .as_generic_mut()
    }

    /// Looks up a child and downcasts it to [`Range`].
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no child matches; [`Error::Type`] when
    /// the child is not a range.
    pub fn get_range(&self, uri: &str) -> Result<&Range> {
        self.get(uri)?.as_range()
    }

    /// Looks up a child and downcasts it to [`Cut`].
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no child matches; [`Error::Type`] when
    /// the child is not a cut.
    pub fn get_cut(&self, uri: &str) -> Result<&Cut> {
        self.get(uri)?.as_cut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_construction_surface() {
        let r = Range::default();
        assert_eq!(r.uri().as_str(), "example");
        assert!(!r.uri().is_set());
        assert_eq!((r.start(), r.end()), (1, 2));
        assert_eq!(r.base().orientation(), Orientation::Inline);

        let c = Cut::default();
        assert_eq!(c.at(), 1);
        assert_eq!(c.type_uri(), vocab::CUT);

        let g = GenericLocation::default();
        assert_eq!(g.type_uri(), vocab::GENERIC_LOCATION);
    }

    #[test]
    fn orientation_round_trips_through_the_property() {
        let mut r = Range::new("http://example.org/r1", 3, 8);
        r.base_mut()
            .set_orientation(Orientation::ReverseComplement)
            .unwrap();
        assert_eq!(r.base().orientation(), Orientation::ReverseComplement);
        assert_eq!(
            r.base().orientation_property().get().map(Uri::as_str),
            Some(vocab::ORIENTATION_REVERSE_COMPLEMENT)
        );
    }

    #[test]
    fn downcast_reports_type_mismatch() {
        let loc = Location::Cut(Cut::new("http://example.org/c1", 4));
        let err = loc.as_range().unwrap_err();
        assert_eq!(
            err,
            Error::Type {
                expected: vocab::RANGE.to_string(),
                found: vocab::CUT.to_string(),
            }
        );
        assert!(loc.as_cut().is_ok());
    }

    #[test]
    fn location_delegates_shared_accessors() {
        let mut loc = Location::from(GenericLocation::new("http://example.org/g1"));
        assert_eq!(loc.orientation(), Orientation::Inline);
        loc.set_orientation(Orientation::ReverseComplement).unwrap();
        assert_eq!(loc.orientation(), Orientation::ReverseComplement);

        loc.sequence_mut()
            .set(Uri::new("http://example.org/seq1"))
            .unwrap();
        assert_eq!(
            loc.sequence().get().map(Uri::as_str),
            Some("http://example.org/seq1")
        );
    }

    #[test]
    fn set_at_funnels_through_the_required_slot() {
        let mut c = Cut::new("http://example.org/c1", 1);
        c.set_at(10).unwrap();
        assert_eq!(c.at(), 10);
    }
}
