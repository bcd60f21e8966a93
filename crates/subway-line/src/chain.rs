//! Ordered segment storage for one line.
//!
//! # States
//!
//! A chain is either empty or non-empty.  The first successful
//! [`add_segment`](SegmentChain::add_segment) makes it non-empty; removing
//! the last remaining segment makes it empty again.
//!
//! # Station order
//!
//! [`stations`](SegmentChain::stations) follows the line, not insertion
//! order: it starts at the up-terminus and walks `up → down` links.  Adding
//! `B–C` and then `A–B` still yields `[A, B, C]`.

use std::collections::HashSet;

use subway_core::StationId;
use tracing::debug;

use crate::{LineError, LineResult, Segment};

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentChain {
    segments: Vec<Segment>,
}

impl SegmentChain {
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Segments in chain order (first added to last added).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Stations covered by the chain in line order, without repeats.
    ///
    /// The main run starts at the up-terminus and follows `up → down` links.
    /// Stations off that run (branches, or segments entered against the line
    /// direction) follow in first-appearance order.
    pub fn stations(&self) -> Vec<StationId> {
        let mut stations = self.main_run();
        let mut seen: HashSet<StationId> = stations.iter().copied().collect();
        for s in self.segments.iter().flat_map(Segment::endpoints) {
            if seen.insert(s) {
                stations.push(s);
            }
        }
        stations
    }

    pub fn contains_station(&self, station: StationId) -> bool {
        self.segments.iter().any(|s| s.touches(station))
    }

    /// Sum of all segment distances.
    pub fn total_distance(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.distance)).sum()
    }

    /// Up-terminus of the line.
    pub fn first_station(&self) -> Option<StationId> {
        self.main_run().first().copied()
    }

    /// Down-terminus of the line: where the `up → down` walk from
    /// [`first_station`](Self::first_station) ends.
    pub fn last_station(&self) -> Option<StationId> {
        self.main_run().last().copied()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append `segment` if it keeps the chain connected and loop-free.
    ///
    /// # Errors
    ///
    /// - [`LineError::InvalidSegment`] if `up == down`.
    /// - [`LineError::DuplicateSegment`] if both endpoints are already on
    ///   the chain.
    /// - [`LineError::DisconnectedSegment`] if neither endpoint is.
    pub fn add_segment(&mut self, segment: Segment) -> LineResult<()> {
        if segment.is_loop() {
            return Err(LineError::InvalidSegment { station: segment.up });
        }

        if !self.is_empty() {
            let has_up   = self.contains_station(segment.up);
            let has_down = self.contains_station(segment.down);
            match (has_up, has_down) {
                (true, true) => {
                    return Err(LineError::DuplicateSegment { up: segment.up, down: segment.down });
                }
                (false, false) => {
                    return Err(LineError::DisconnectedSegment { up: segment.up, down: segment.down });
                }
                // Exactly one endpoint already on the chain.
                _ => {}
            }
        }

        debug!(up = %segment.up, down = %segment.down, distance = %segment.distance, "segment added");
        self.segments.push(segment);
        Ok(())
    }

    /// `true` if a removal naming `station` is allowed: the chain is
    /// non-empty and `station` is one of its stations.
    pub fn can_remove(&self, station: StationId) -> bool {
        self.contains_station(station)
    }

    /// Remove the most recently appended segment and return it.
    ///
    /// `station` only gates the removal through [`can_remove`](Self::can_remove);
    /// the discarded segment is always the tail, whichever station was named.
    /// Arbitrary mid-chain removal with re-linking is not supported.
    ///
    /// # Errors
    ///
    /// [`LineError::SegmentRemoval`] if `station` is not on the chain.
    pub fn remove_station(&mut self, station: StationId) -> LineResult<Segment> {
        if !self.can_remove(station) {
            return Err(LineError::SegmentRemoval { station });
        }
        let removed = self
            .segments
            .pop()
            .ok_or(LineError::SegmentRemoval { station })?;

        if !removed.touches(station) {
            debug!(
                %station,
                up = %removed.up,
                down = %removed.down,
                "named station is not on the tail segment; tail removed anyway"
            );
        } else {
            debug!(%station, up = %removed.up, down = %removed.down, "segment removed");
        }
        Ok(removed)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Stations from the up-terminus to the down-terminus along `up → down`
    /// links.  Walks back from the first segment to find the terminus, then
    /// forward from it; `visited` guards both walks.
    fn main_run(&self) -> Vec<StationId> {
        let Some(first) = self.segments.first() else {
            return Vec::new();
        };

        let mut visited = HashSet::with_capacity(self.segments.len() + 1);
        let mut head = first.up;
        visited.insert(head);
        loop {
            let prev = self
                .segments
                .iter()
                .find(|s| s.down == head && !visited.contains(&s.up))
                .map(|s| s.up);
            let Some(up) = prev else { break };
            head = up;
            visited.insert(head);
        }

        visited.clear();
        visited.insert(head);
        let mut run = vec![head];
        let mut cur = head;
        loop {
            let next = self
                .segments
                .iter()
                .find(|s| s.up == cur && !visited.contains(&s.down))
                .map(|s| s.down);
            let Some(down) = next else { break };
            cur = down;
            visited.insert(cur);
            run.push(cur);
        }
        run
    }
}
