//! Flow-matrix construction.
//!
//! # Two phases
//!
//! ```text
//! ① Segment  — per agent: split the track into excursions and expand each
//!              into weighted trips (parallel with the `parallel` feature).
//! ② Deposit  — sequentially, in first-appearance agent order: add each
//!              trip's weight to its cell and notify the observer.
//! ```
//!
//! Phase ① only reads the location tables, so it is side-effect free.
//! Keeping phase ② sequential makes the floating-point summation order, and
//! therefore the output, identical with and without `parallel`.

use ot_core::matrix::normalize_total;
use ot_core::{AgentId, LocationTable, Matrix, SiteTables};
use tracing::{debug, trace};

use crate::event::{AgentTrack, VisitEvent, group_by_agent};
use crate::observer::{NoopObserver, Trip, TripObserver};
use crate::segment::segment;

/// Segmentation options.  Passed by value to every build; there is no
/// process-wide state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowConfig {
    /// Collapse each excursion to its last source and first target instead
    /// of spreading weight over every dwell combination.
    pub use_last_only: bool,
}

/// Trips produced for one agent in phase ①.
struct AgentTrips {
    agent:      AgentId,
    trips:      Vec<Trip>,
    excursions: usize,
}

/// Builds flow matrices over one pair of location tables.
#[derive(Copy, Clone, Debug)]
pub struct FlowBuilder<'a> {
    sites:  SiteTables<'a>,
    config: FlowConfig,
}

impl<'a> FlowBuilder<'a> {
    pub fn new(source: &'a LocationTable, target: &'a LocationTable, config: FlowConfig) -> Self {
        Self { sites: SiteTables::new(source, target), config }
    }

    /// `|sources| x |targets|` flow matrix summing to 1, or all zero if no
    /// trip was reconstructed.
    pub fn build(&self, events: &[VisitEvent]) -> Matrix {
        self.build_observed(events, &mut NoopObserver)
    }

    /// Like [`build`][Self::build], reporting every deposit to `observer`.
    pub fn build_observed<O: TripObserver>(&self, events: &[VisitEvent], observer: &mut O) -> Matrix {
        let tracks = group_by_agent(events);
        let per_agent = self.segment_tracks(&tracks);

        let (rows, cols) = self.sites.shape();
        let mut flow = Matrix::zeros((rows, cols));
        let mut excursions = 0usize;
        let mut deposits = 0usize;

        for AgentTrips { agent, trips, excursions: n } in per_agent {
            for trip in &trips {
                flow[(trip.route.source.index(), trip.route.target.index())] += trip.weight;
                observer.on_trip(trip);
            }
            observer.on_agent_done(agent, n);
            excursions += n;
            deposits += trips.len();
        }

        let raw_total = flow.sum();
        if !normalize_total(&mut flow) {
            debug!(agents = tracks.len(), events = events.len(), "no trips reconstructed; flow is all zero");
            return flow;
        }
        debug!(agents = tracks.len(), excursions, deposits, raw_total, "flow matrix built");
        flow
    }

    #[cfg(not(feature = "parallel"))]
    fn segment_tracks(&self, tracks: &[AgentTrack]) -> Vec<AgentTrips> {
        tracks.iter().map(|t| self.agent_trips(t)).collect()
    }

    #[cfg(feature = "parallel")]
    fn segment_tracks(&self, tracks: &[AgentTrack]) -> Vec<AgentTrips> {
        use rayon::prelude::*;

        // Indexed collect keeps first-appearance order for the deposit phase.
        tracks.par_iter().map(|t| self.agent_trips(t)).collect()
    }

    fn agent_trips(&self, track: &AgentTrack) -> AgentTrips {
        let excursions = segment(&track.visits, self.sites);
        let mut trips = Vec::new();

        for ex in &excursions {
            let ex = if self.config.use_last_only { ex.last_only() } else { *ex };
            trace!(agent = track.agent.0, sources = ex.sources.len(), targets = ex.targets.len(), "excursion");
            let weight = ex.pair_weight();
            trips.extend(ex.routes(self.sites).map(|route| Trip { agent: track.agent, route, weight }));
        }

        AgentTrips { agent: track.agent, trips, excursions: excursions.len() }
    }
}

/// Build a normalized flow matrix from interleaved visit events.
///
/// `events` must already exclude [`GridPoint::NO_LOCATION`][ot_core::GridPoint::NO_LOCATION]
/// markers.  Each agent's events must be in chronological order.
pub fn build_flow_matrix(
    events: &[VisitEvent],
    source: &LocationTable,
    target: &LocationTable,
    config: FlowConfig,
) -> Matrix {
    FlowBuilder::new(source, target, config).build(events)
}
