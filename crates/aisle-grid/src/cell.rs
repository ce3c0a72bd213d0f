//! Typed cells and location identifiers
//!
//! Cell roles are resolved once at parse time into closed variants, so
//! downstream code never re-derives a role from substring matches.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Anchored coordinate pattern: letter-run followed by digit-run
static COORDINATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]+\d+").expect("coordinate pattern is valid"));

/// Normalized identifier of a visitable location
///
/// Role cells carry their own variants; everything else is a named
/// shelf. The string form round-trips through [`Display`] and
/// [`LocationId::from`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum LocationId {
    /// The fixed tour start
    Entrance,
    /// The fixed tour end
    Checkout,
    /// A named shelf location, e.g. `A1` or `Deli`
    Shelf(String),
}

impl LocationId {
    /// Create a shelf id from a label
    #[inline]
    #[must_use]
    pub fn shelf(label: impl Into<String>) -> Self {
        Self::Shelf(label.into())
    }

    /// String form of the id
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Entrance => "Entrance",
            Self::Checkout => "Checkout",
            Self::Shelf(label) => label.as_str(),
        }
    }

    /// Check if this is one of the two role ids
    #[inline]
    #[must_use]
    pub fn is_role(&self) -> bool {
        matches!(self, Self::Entrance | Self::Checkout)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        match s {
            "Entrance" => Self::Entrance,
            "Checkout" => Self::Checkout,
            _ => Self::Shelf(s.to_owned()),
        }
    }
}

impl From<String> for LocationId {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Entrance" => Self::Entrance,
            "Checkout" => Self::Checkout,
            _ => Self::Shelf(s),
        }
    }
}

impl From<LocationId> for String {
    fn from(id: LocationId) -> Self {
        match id {
            LocationId::Shelf(label) => label,
            role => role.as_str().to_owned(),
        }
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved role of a single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Non-traversable hole in the layout
    Empty,
    /// Cell text yielded no usable identifier
    Unknown,
    /// A visitable location
    Location(LocationId),
}

impl CellKind {
    /// Classify raw cell text into a kind
    ///
    /// Applied to the text before the first colon (the remainder is a
    /// free-text hint): an anchored `[A-Z]+digits` match wins, then the
    /// literal role tokens, then the literal `Empty` hole marker, then
    /// the label itself; blank text is `Unknown`.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        let label = raw.split(':').next().unwrap_or(raw).trim();
        if label.is_empty() {
            return Self::Unknown;
        }
        if let Some(m) = COORDINATE.find(label) {
            return Self::Location(LocationId::shelf(m.as_str()));
        }
        match label {
            "Entrance" => Self::Location(LocationId::Entrance),
            "Checkout" => Self::Location(LocationId::Checkout),
            "Empty" => Self::Empty,
            _ => Self::Location(LocationId::shelf(label)),
        }
    }

    /// Whether a shopper can stand on this cell
    #[inline]
    #[must_use]
    pub fn is_traversable(&self) -> bool {
        matches!(self, Self::Location(_))
    }

    /// Location id, if the cell carries one
    #[inline]
    #[must_use]
    pub fn location_id(&self) -> Option<&LocationId> {
        match self {
            Self::Location(id) => Some(id),
            _ => None,
        }
    }
}

/// A single grid position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Original cell text, trimmed (keeps the free-text hint)
    pub raw: String,
    /// Resolved role
    pub kind: CellKind,
    /// 0-indexed row
    pub row: usize,
    /// 0-indexed column
    pub col: usize,
}

impl Cell {
    /// Build a cell from raw text and its grid coordinate
    #[inline]
    #[must_use]
    pub fn new(raw: impl Into<String>, row: usize, col: usize) -> Self {
        let raw = raw.into();
        let kind = CellKind::classify(&raw);
        Self {
            raw,
            kind,
            row,
            col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_coordinate_with_hint() {
        assert_eq!(
            CellKind::classify("A1: Fruits"),
            CellKind::Location(LocationId::shelf("A1"))
        );
    }

    #[test]
    fn classify_coordinate_prefix_only() {
        // The anchored match is the id, trailing text is dropped
        assert_eq!(
            CellKind::classify("B12extra"),
            CellKind::Location(LocationId::shelf("B12"))
        );
    }

    #[test]
    fn classify_roles() {
        assert_eq!(
            CellKind::classify("Entrance"),
            CellKind::Location(LocationId::Entrance)
        );
        assert_eq!(
            CellKind::classify("Checkout"),
            CellKind::Location(LocationId::Checkout)
        );
        // Role token before a hint still counts
        assert_eq!(
            CellKind::classify("Entrance: north door"),
            CellKind::Location(LocationId::Entrance)
        );
    }

    #[test]
    fn classify_empty_and_unknown() {
        assert_eq!(CellKind::classify("Empty"), CellKind::Empty);
        assert_eq!(CellKind::classify(""), CellKind::Unknown);
        assert_eq!(CellKind::classify("   "), CellKind::Unknown);
    }

    #[test]
    fn classify_free_text_label() {
        assert_eq!(
            CellKind::classify("Deli Counter: cold cuts"),
            CellKind::Location(LocationId::shelf("Deli Counter"))
        );
    }

    #[test]
    fn classify_lowercase_is_not_a_role() {
        assert_eq!(
            CellKind::classify("entrance"),
            CellKind::Location(LocationId::shelf("entrance"))
        );
    }

    #[test]
    fn location_id_string_round_trip() {
        for raw in ["Entrance", "Checkout", "A1", "Deli"] {
            let id = LocationId::from(raw);
            assert_eq!(id.to_string(), raw);
        }
    }

    #[test]
    fn location_id_ordering_is_stable() {
        let mut ids = vec![
            LocationId::shelf("B1"),
            LocationId::shelf("A1"),
            LocationId::shelf("A10"),
        ];
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(ids[0], LocationId::shelf("A1"));
        assert_eq!(ids[1], LocationId::shelf("A10"));
    }
}
