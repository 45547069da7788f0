//! Integer grid coordinate.
//!
//! The simulation runs on a discrete grid, so locations are compared by
//! exact equality.  `Ord` is lexicographic (`x`, then `y`), which is the
//! order [`make_unique`][crate::make_unique] returns.

/// A cell on the simulation grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    /// Marker the simulation emits for "no location visited this tick".
    /// Streams must be stripped of it before segmentation.
    pub const NO_LOCATION: GridPoint = GridPoint { x: -1, y: -1 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_no_location(self) -> bool {
        self == Self::NO_LOCATION
    }

    /// Squared Euclidean distance.  Computed in `f64` so large coordinates
    /// cannot overflow.
    pub fn distance_sq(self, other: GridPoint) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for GridPoint {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
