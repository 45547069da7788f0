//! Trip observer trait for inspecting what the builder deposits.

use ot_core::{AgentId, Route};

/// One weighted deposit into the flow matrix, before normalization.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trip {
    pub agent:  AgentId,
    pub route:  Route,
    /// In `(0, 1]`.
    pub weight: f64,
}

/// Callbacks invoked by [`FlowBuilder::build_observed`][crate::FlowBuilder::build_observed].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Calls arrive in deposit order: agents
/// in order of first appearance, trips in timeline order.
pub trait TripObserver {
    /// Called for every (source slot, target slot) deposit.
    fn on_trip(&mut self, _trip: &Trip) {}

    /// Called once per agent after its trips are deposited.
    ///
    /// `excursions` counts segmented excursions, not individual deposits.
    fn on_agent_done(&mut self, _agent: AgentId, _excursions: usize) {}
}

/// A [`TripObserver`] that does nothing.
pub struct NoopObserver;

impl TripObserver for NoopObserver {}

/// Records every deposit and per-agent excursion count.
#[derive(Debug, Default)]
pub struct TripLog {
    pub trips:  Vec<Trip>,
    pub agents: Vec<(AgentId, usize)>,
}

impl TripLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of excursions across all agents.
    pub fn excursions(&self) -> usize {
        self.agents.iter().map(|&(_, n)| n).sum()
    }
}

impl TripObserver for TripLog {
    fn on_trip(&mut self, trip: &Trip) {
        self.trips.push(*trip);
    }

    fn on_agent_done(&mut self, agent: AgentId, excursions: usize) {
        self.agents.push((agent, excursions));
    }
}
