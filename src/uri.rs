//! URI identity for document objects.
//!
//! Every entity in the object graph is keyed by a URI. Objects may be
//! constructed before their final URI is known; such objects carry an
//! explicit *unassigned* marker rather than a magic placeholder string.
//! For compatibility with documents produced by earlier implementations,
//! an unassigned URI still renders as `"example"` — callers should treat
//! that rendering as a signal that the URI was never set and reassign it
//! before serialization.

use core::fmt;

/// Rendering of an unassigned URI, kept for wire compatibility.
pub const UNASSIGNED_URI: &str = "example";

/// A URI reference identifying an object in the document graph.
///
/// `Uri` is either *assigned* (an arbitrary IRI string) or *unassigned*
/// (the object was constructed without an explicit identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uri(Option<String>);

impl Uri {
    /// Creates an assigned URI from any string.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Uri(Some(uri.into()))
    }

    /// Creates the unassigned marker.
    #[must_use]
    pub fn unset() -> Self {
        Uri(None)
    }

    /// Returns true if this URI was explicitly assigned.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the URI string, or [`UNASSIGNED_URI`] when unassigned.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or(UNASSIGNED_URI)
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Uri {
    fn from(s: &str) -> Self {
        Uri::new(s)
    }
}

impl From<String> for Uri {
    fn from(s: String) -> Self {
        Uri::new(s)
    }
}
