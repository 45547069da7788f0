//! Segment one agent's visit stream into excursions.
//!
//! # Excursion shape
//!
//! An excursion is a *source-group* followed by a *target-group*:
//!
//! ```text
//!   visits:  u  A  A  B  X  Y  Y  Z  A ...
//!               └─anchor
//!               └──source──┘└─target─┘└─ next anchor (carried forward)
//! ```
//!
//! With `A` the anchor (first locatable visit):
//!
//! 1. Leading visits that match neither table (`u`) are skipped.
//! 2. Repeats of the anchor are dwell and join the source-group.
//! 3. Every following visit that does **not** pair with the anchor joins the
//!    source-group too (`B`): an agent may touch several sources before
//!    heading for a target.
//! 4. The first visit that pairs with the anchor opens the target-group
//!    (`X`); it grows while visits keep pairing with the anchor (`Y Y Z`).
//! 5. The first visit that breaks the pairing is not consumed.  It becomes
//!    the anchor of the next excursion.
//!
//! "Pairs with the anchor" means [`SiteTables::resolve`] succeeds in either
//! orientation, so trips are recognised whether the agent walks
//! source → target or target → source.
//!
//! A stream that ends while the source-group is still growing yields no
//! excursion for that tail.

use ot_core::{GridPoint, Route, SiteTables};

/// One inferred trip before weighting.  Borrows the agent's visit slice.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Excursion<'a> {
    /// Anchor, its dwell, and every visit before the first valid pairing.
    pub sources: &'a [GridPoint],
    /// Consecutive visits that pair with the anchor.  Never empty.
    pub targets: &'a [GridPoint],
}

impl<'a> Excursion<'a> {
    /// Keep only the most recent source and the earliest target.
    pub fn last_only(self) -> Excursion<'a> {
        Excursion {
            sources: &self.sources[self.sources.len() - 1..],
            targets: &self.targets[..1],
        }
    }

    /// Weight each (source, target) combination receives: one trip spread
    /// evenly over every plausible pair of endpoints.
    #[inline]
    pub fn pair_weight(&self) -> f64 {
        1.0 / (self.sources.len() * self.targets.len()) as f64
    }

    /// Resolve every (source member, target member) pair.
    ///
    /// Pairs that do not resolve (a source-group member that is itself
    /// unlocatable, or from the wrong table) are skipped; their share of
    /// the weight is dropped rather than redistributed.
    pub fn routes<'s>(&'s self, sites: SiteTables<'s>) -> impl Iterator<Item = Route> + 's {
        self.sources.iter().flat_map(move |&s| {
            self.targets.iter().filter_map(move |&t| sites.resolve(s, t))
        })
    }
}

/// Split `visits` into excursions.  See the module docs for the rules.
pub fn segment<'a>(visits: &'a [GridPoint], sites: SiteTables<'_>) -> Vec<Excursion<'a>> {
    let n = visits.len();
    let mut excursions = Vec::new();
    let mut cursor = 0;

    loop {
        let Some(start) = (cursor..n).find(|&i| sites.is_locatable(visits[i])) else {
            break;
        };
        let anchor = visits[start];
        let mut end = start + 1;

        while end < n && visits[end] == anchor {
            end += 1;
        }
        while end < n && sites.resolve(anchor, visits[end]).is_none() {
            end += 1;
        }
        if end == n {
            break;
        }

        let split = end;
        end += 1;
        while end < n && sites.resolve(anchor, visits[end]).is_some() {
            end += 1;
        }

        excursions.push(Excursion {
            sources: &visits[start..split],
            targets: &visits[split..end],
        });
        cursor = end;
    }

    excursions
}
