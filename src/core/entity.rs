//! Participant identification.
//!
//! Every participant gets a `ParticipantId` when the ring is built. IDs are
//! handed out in roster order starting at 0 and index straight into the
//! ring's participant arena, so they stay valid for the lifetime of the ring
//! whether the participant is still alive or already in the graveyard.
//!
//! ```
//! use assassin_ring::core::ParticipantId;
//!
//! let first = ParticipantId::new(0);
//! assert_eq!(first.index(), 0);
//! assert_eq!(format!("{}", first), "Participant(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Arena handle for a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Create a participant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Create the ID for the participant at `index` in the arena.
    ///
    /// `index` must fit in a `u32`; rosters are bounded by
    /// `try_from_index` when the ring is built.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    /// Create the ID for `index`, or `None` if it does not fit in a `u32`.
    #[must_use]
    pub fn try_from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticipantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant({})", self.0)
    }
}
