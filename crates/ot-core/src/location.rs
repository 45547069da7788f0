//! Location tables and the exact-match slot lookup.
//!
//! # Lookup policy
//!
//! A table maps each coordinate to the **first** slot holding it.  When a
//! table contains the same coordinate twice, the later slot is unreachable
//! through lookup; it still exists as a matrix row/column but never receives
//! flow.  Construction logs a warning for every such shadowed slot.  Use
//! [`make_unique`][crate::make_unique] beforehand if that matters.
//!
//! # Pair resolution
//!
//! Agents may visit the two ends of a trip in either order.  [`SiteTables`]
//! resolves an ordered pair `(a, b)` as source `a` → target `b` first and
//! falls back to source `b` → target `a`.

use std::collections::HashMap;

use tracing::warn;

use crate::{CoreError, CoreResult, GridPoint, SlotId};

/// Map keyed by grid coordinate.  FxHash with the `fx-hash` feature.
#[cfg(not(feature = "fx-hash"))]
type PointMap<V> = HashMap<GridPoint, V>;

#[cfg(feature = "fx-hash")]
type PointMap<V> = HashMap<GridPoint, V, rustc_hash::FxBuildHasher>;

// ── LocationTable ─────────────────────────────────────────────────────────────

/// An ordered set of grid locations.  The position of a point is its slot.
#[derive(Clone, Debug)]
pub struct LocationTable {
    points: Vec<GridPoint>,
    index:  PointMap<SlotId>,
}

impl LocationTable {
    /// Index `points` in order; the position of each point is its slot.
    ///
    /// # Errors
    /// [`CoreError::TooManySlots`] if the table has more entries than a
    /// [`SlotId`] can address.
    pub fn new(points: Vec<GridPoint>) -> CoreResult<Self> {
        let mut index = PointMap::default();
        index.reserve(points.len());

        for (i, &p) in points.iter().enumerate() {
            let slot = slot_at(i, points.len())?;
            let first = *index.entry(p).or_insert(slot);
            if first != slot {
                warn!(%p, shadowed = i, first = first.0, "duplicate location; lookups resolve to the first slot");
            }
        }

        Ok(Self { points, index })
    }

    /// First slot whose coordinate equals `p`, or `None`.
    #[inline]
    pub fn lookup(&self, p: GridPoint) -> Option<SlotId> {
        self.index.get(&p).copied()
    }

    #[inline]
    pub fn contains(&self, p: GridPoint) -> bool {
        self.index.contains_key(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    /// Number of slots shadowed by an earlier duplicate.
    pub fn shadowed(&self) -> usize {
        self.points.len() - self.index.len()
    }
}

/// Slot for position `i` of a table with `len` entries.
pub(crate) fn slot_at(i: usize, len: usize) -> CoreResult<SlotId> {
    SlotId::try_from(i).map_err(|_| CoreError::TooManySlots { len })
}

// ── Route / SiteTables ────────────────────────────────────────────────────────

/// A resolved (source slot, target slot) cell of a transport plan.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub source: SlotId,
    pub target: SlotId,
}

/// Borrowed pair of source and target tables.
#[derive(Copy, Clone, Debug)]
pub struct SiteTables<'a> {
    pub source: &'a LocationTable,
    pub target: &'a LocationTable,
}

impl<'a> SiteTables<'a> {
    pub fn new(source: &'a LocationTable, target: &'a LocationTable) -> Self {
        Self { source, target }
    }

    /// `(sources, targets)` — the shape of any plan over these tables.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.source.len(), self.target.len())
    }

    /// `true` if `p` occurs in either table.
    #[inline]
    pub fn is_locatable(&self, p: GridPoint) -> bool {
        self.source.contains(p) || self.target.contains(p)
    }

    /// Resolve an ordered pair of visits into a plan cell.
    ///
    /// Tries `a` as source and `b` as target, then the reverse.  `None`
    /// means the pair is not a source/target pairing in either orientation.
    pub fn resolve(&self, a: GridPoint, b: GridPoint) -> Option<Route> {
        self.oriented(a, b).or_else(|| self.oriented(b, a))
    }

    #[inline]
    fn oriented(&self, from: GridPoint, to: GridPoint) -> Option<Route> {
        Some(Route {
            source: self.source.lookup(from)?,
            target: self.target.lookup(to)?,
        })
    }
}
