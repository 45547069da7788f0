//! Make a location set duplicate-free.
//!
//! Slot lookup is exact-match and first-wins, so a table with repeated
//! coordinates has unreachable slots.  `make_unique` keeps every distinct
//! coordinate and moves each surplus copy to a free cell drawn uniformly
//! from the set's bounding box.  If the box is full it grows by one cell on
//! every side until a free cell exists.
//!
//! # Determinism
//!
//! Relocation uses a `SmallRng` seeded from the caller's seed: identical
//! input and seed always produce identical output.  The result is sorted
//! lexicographically (`x`, then `y`), so it does not preserve input order.

use std::collections::BTreeSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::GridPoint;

pub fn make_unique(points: &[GridPoint], seed: u64) -> Vec<GridPoint> {
    let mut taken: BTreeSet<GridPoint> = BTreeSet::new();
    let mut surplus = 0usize;
    for &p in points {
        if !taken.insert(p) {
            surplus += 1;
        }
    }

    if surplus == 0 {
        return taken.into_iter().collect();
    }
    debug!(surplus, distinct = taken.len(), "relocating duplicate locations");

    // Non-empty: surplus > 0 implies at least two points.
    let (mut lo, mut hi) = (points[0], points[0]);
    for p in points {
        lo = GridPoint::new(lo.x.min(p.x), lo.y.min(p.y));
        hi = GridPoint::new(hi.x.max(p.x), hi.y.max(p.y));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    while surplus > 0 {
        let cells = (i128::from(hi.x) - i128::from(lo.x) + 1) * (i128::from(hi.y) - i128::from(lo.y) + 1);
        if cells <= taken.len() as i128 {
            lo = GridPoint::new(lo.x.saturating_sub(1), lo.y.saturating_sub(1));
            hi = GridPoint::new(hi.x.saturating_add(1), hi.y.saturating_add(1));
            continue;
        }

        let candidate = GridPoint::new(rng.gen_range(lo.x..=hi.x), rng.gen_range(lo.y..=hi.y));
        if taken.insert(candidate) {
            surplus -= 1;
        }
    }

    taken.into_iter().collect()
}
