//! Visit events and per-agent grouping.
//!
//! The simulation reports visits interleaved across agents.  There is no
//! timestamp: the input order of one agent's events *is* its timeline, so
//! grouping must be stable.

use std::collections::HashMap;

use ot_core::{AgentId, GridPoint};

#[cfg(not(feature = "fx-hash"))]
type AgentMap<V> = HashMap<AgentId, V>;

#[cfg(feature = "fx-hash")]
type AgentMap<V> = HashMap<AgentId, V, rustc_hash::FxBuildHasher>;

/// "Agent `agent` was observed at `at`."
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitEvent {
    pub agent: AgentId,
    pub at:    GridPoint,
}

impl VisitEvent {
    #[inline]
    pub fn new(agent: u32, x: i32, y: i32) -> Self {
        Self { agent: AgentId(agent), at: GridPoint::new(x, y) }
    }
}

/// One agent's visits in chronological order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentTrack {
    pub agent:  AgentId,
    pub visits: Vec<GridPoint>,
}

/// Split an interleaved event stream into per-agent tracks.
///
/// Tracks are returned in order of each agent's first event; visits within
/// a track keep their input order.
pub fn group_by_agent(events: &[VisitEvent]) -> Vec<AgentTrack> {
    let mut slot_of: AgentMap<usize> = AgentMap::default();
    let mut tracks: Vec<AgentTrack> = Vec::new();

    for ev in events {
        let i = *slot_of.entry(ev.agent).or_insert_with(|| {
            tracks.push(AgentTrack { agent: ev.agent, visits: Vec::new() });
            tracks.len() - 1
        });
        tracks[i].visits.push(ev.at);
    }

    tracks
}
