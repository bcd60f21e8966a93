//! Station entity and segment distance.

use std::fmt;

use crate::{CoreError, CoreResult, StationId};

// ── Station ───────────────────────────────────────────────────────────────────

/// A named stop.  Immutable once created; equality is by identity, so two
/// stations with the same name but different IDs are different stations.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    id:   StationId,
    name: String,
}

impl Station {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    #[inline]
    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Station {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Station {}

impl std::hash::Hash for Station {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// Length of one segment.  Always strictly positive, which is what lets the
/// path search skip any negative-weight handling.
///
/// Totals over many segments are accumulated as `u64` so long routes cannot
/// overflow.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance(u32);

impl Distance {
    /// Wrap a raw length, rejecting zero.
    pub fn new(value: u32) -> CoreResult<Distance> {
        if value == 0 {
            return Err(CoreError::ZeroDistance);
        }
        Ok(Distance(value))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Distance {
    type Error = CoreError;
    fn try_from(value: u32) -> CoreResult<Distance> {
        Distance::new(value)
    }
}

impl From<Distance> for u64 {
    #[inline]
    fn from(d: Distance) -> u64 {
        d.0 as u64
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
