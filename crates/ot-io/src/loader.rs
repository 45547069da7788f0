//! CSV loaders for visit events and location tables.
//!
//! # Events
//!
//! One row per observed visit, in simulation order:
//!
//! ```csv
//! agent_id,x,y
//! 1,0,0
//! 2,1,1
//! 1,5,5
//! ```
//!
//! Rows at `(-1, -1)` mean "no tracked location this tick".  They are
//! dropped here, so the returned stream can go straight to the segmenter.
//!
//! # Locations
//!
//! One row per slot; row order is slot order:
//!
//! ```csv
//! x,y
//! 0,0
//! 1,1
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use ot_core::{AgentId, GridPoint, LocationTable};
use ot_flow::VisitEvent;

use crate::{IoError, IoResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventRecord {
    agent_id: u32,
    x:        i32,
    y:        i32,
}

#[derive(Deserialize)]
struct LocationRecord {
    x: i32,
    y: i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a visit-event stream from a CSV file.
pub fn load_events_csv(path: &Path) -> IoResult<Vec<VisitEvent>> {
    let file = std::fs::File::open(path)?;
    load_events_reader(file)
}

/// Like [`load_events_csv`] but accepts any `Read` source.
pub fn load_events_reader<R: Read>(reader: R) -> IoResult<Vec<VisitEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();
    let mut dropped = 0usize;

    for result in csv_reader.deserialize::<EventRecord>() {
        let row = result.map_err(record_error)?;
        let at = GridPoint::new(row.x, row.y);
        if at.is_no_location() {
            dropped += 1;
            continue;
        }
        events.push(VisitEvent { agent: AgentId(row.agent_id), at });
    }

    debug!(events = events.len(), dropped, "loaded visit events");
    Ok(events)
}

/// Load a source or target location table from a CSV file.
pub fn load_locations_csv(path: &Path) -> IoResult<LocationTable> {
    let file = std::fs::File::open(path)?;
    load_locations_reader(file)
}

/// Like [`load_locations_csv`] but accepts any `Read` source.
pub fn load_locations_reader<R: Read>(reader: R) -> IoResult<LocationTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let points = csv_reader
        .deserialize::<LocationRecord>()
        .map(|r| {
            r.map(|row| GridPoint::new(row.x, row.y)).map_err(record_error)
        })
        .collect::<IoResult<Vec<_>>>()?;

    debug!(slots = points.len(), "loaded location table");
    Ok(LocationTable::new(points)?)
}

/// A row whose fields do not fit the record type is a [`IoError::Parse`];
/// read failures underneath stay [`IoError::Csv`].
fn record_error(e: csv::Error) -> IoError {
    if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) {
        IoError::Parse(e.to_string())
    } else {
        IoError::Csv(e)
    }
}
