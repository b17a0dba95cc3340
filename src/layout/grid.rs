//! Grid cell primitives shared by both layout namespaces.
//!
//! A [`Placement`] is one widget's rectangle on a 12-column grid; a
//! [`LayoutSet`] is the ordered collection of placements making up one
//! screen's layout. Both are generic over the widget identifier type so that
//! a trading placement can never end up in a dashboard layout (or vice versa)
//! without a compile error.

use serde::{Deserialize, Serialize};

/// Cell width synthesized when a widget has no stored placement.
const FALLBACK_W: u32 = 4;
/// Cell height synthesized when a widget has no stored placement.
const FALLBACK_H: u32 = 6;

/// A single grid cell rectangle for one widget.
///
/// `h == 0` is a valid "collapsed" state: compact layouts use it for widgets
/// that are not meaningfully visible on a narrow viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement<W> {
    /// Widget occupying this cell.
    ///
    /// Serialized under the wire key `"i"` for compatibility with previously
    /// stored layout data.
    #[serde(rename = "i")]
    pub id: W,
    /// Column of the top-left corner.
    pub x: u32,
    /// Row of the top-left corner.
    pub y: u32,
    /// Width in columns.
    pub w: u32,
    /// Height in rows (`0` = collapsed).
    pub h: u32,
}

impl<W> Placement<W> {
    /// Creates a placement from its raw coordinates.
    pub fn new(id: W, x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { id, x, y, w, h }
    }
}

/// An ordered set of placements, one per widget in a namespace.
///
/// Order is insertion order; it does not affect rendering but is preserved so
/// that serialization is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutSet<W>(Vec<Placement<W>>);

impl<W> LayoutSet<W> {
    /// Creates a layout set from an ordered list of placements.
    pub fn new(placements: Vec<Placement<W>>) -> Self {
        Self(placements)
    }

    /// Number of placements in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no placements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the placements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement<W>> {
        self.0.iter()
    }

    /// Iterates mutably, for drag/resize updates by the rendering collaborator.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Placement<W>> {
        self.0.iter_mut()
    }
}

impl<W: Copy + PartialEq> LayoutSet<W> {
    /// Resolves the placement for `id`.
    ///
    /// Linear search, first match wins (duplicate ids are tolerated). When no
    /// entry matches, a default cell at the grid origin is synthesized and
    /// returned by value; it is never inserted back into the set. Total over
    /// any set/id pair.
    pub fn placement(&self, id: W) -> Placement<W> {
        self.0
            .iter()
            .copied()
            .find(|cell| cell.id == id)
            .unwrap_or(Placement {
                id,
                x: 0,
                y: 0,
                w: FALLBACK_W,
                h: FALLBACK_H,
            })
    }
}

impl<W> From<Vec<Placement<W>>> for LayoutSet<W> {
    fn from(placements: Vec<Placement<W>>) -> Self {
        Self(placements)
    }
}
