//! SBOL 2 vocabulary — class and property IRIs.
//!
//! The subset of the `http://sbols.org/v2#` namespace used by the
//! identified-entity base and the Location hierarchy. Values match the
//! SBOL 2.3 data model so documents key identically across
//! implementations.

/// The SBOL 2 namespace.
pub const NS_SBOL2: &str = "http://sbols.org/v2#";

// Classes ------------------------------------------------------------------

/// `sbol:Location` — abstract positional annotation.
pub const LOCATION: &str = "http://sbols.org/v2#Location";
/// `sbol:Range` — inclusive 1-based `[start, end]` interval.
pub const RANGE: &str = "http://sbols.org/v2#Range";
/// `sbol:Cut` — a single 1-based point between two coordinates.
pub const CUT: &str = "http://sbols.org/v2#Cut";
/// `sbol:GenericLocation` — a location with no coordinate system.
pub const GENERIC_LOCATION: &str = "http://sbols.org/v2#GenericLocation";
/// `sbol:Sequence` — referenced by locations, never owned by them.
pub const SEQUENCE: &str = "http://sbols.org/v2#Sequence";

// Properties ---------------------------------------------------------------

/// `sbol:orientation` — strand orientation of a location.
pub const ORIENTATION: &str = "http://sbols.org/v2#orientation";
/// `sbol:start` — first coordinate of a Range.
pub const START: &str = "http://sbols.org/v2#start";
/// `sbol:end` — last coordinate of a Range.
pub const END: &str = "http://sbols.org/v2#end";
/// `sbol:at` — the coordinate of a Cut.
pub const AT: &str = "http://sbols.org/v2#at";
/// `sbol:sequence` — weak reference from a location to a Sequence.
pub const SEQUENCE_PROPERTY: &str = "http://sbols.org/v2#sequence";
/// `sbol:displayId` — human-readable identifier fragment.
pub const DISPLAY_ID: &str = "http://sbols.org/v2#displayId";
/// `sbol:name` — human-readable name.
pub const NAME: &str = "http://sbols.org/v2#name";
/// `sbol:description` — free-text description.
pub const DESCRIPTION: &str = "http://sbols.org/v2#description";
/// `sbol:locations` — containment relation from an annotation to its
/// owned locations.
pub const LOCATIONS_PROPERTY: &str = "http://sbols.org/v2#locations";

// Individuals --------------------------------------------------------------

/// Inline (forward-strand) orientation.
pub const ORIENTATION_INLINE: &str = "http://sbols.org/v2#inline";
/// Reverse-complement orientation.
pub const ORIENTATION_REVERSE_COMPLEMENT: &str = "http://sbols.org/v2#reverseComplement";
