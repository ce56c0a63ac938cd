//! # assassin-ring
//!
//! Bookkeeping for the elimination game Assassin.
//!
//! Participants form a kill ring: each one stalks the next, and the last
//! stalks the first. Eliminating a participant moves them from the ring to
//! the front of the graveyard and records their stalker as the eliminator.
//! The game ends when a single participant is left.
//!
//! ## Design
//!
//! - **Arena + handles**: participants live in one arena; the ring and the
//!   graveyard hold `ParticipantId`s, so an elimination is a handle moving
//!   from one sequence to the other.
//!
//! - **Implicit wraparound**: the ring is stored as a plain sequence and the
//!   successor of its last entry is its first.
//!
//! - **Errors before effects**: every failing call leaves the ring untouched.
//!
//! Input handling, the interactive loop and persistence are left to the host.
//!
//! ## Modules
//!
//! - `core`: participant IDs and nodes, errors, configuration, RNG
//! - `ring`: the `EliminationRing` manager and its text views

pub mod core;
pub mod ring;

// Re-export commonly used types
pub use crate::core::{
    ErrorKind, Participant, ParticipantId, RingConfig, RingError, RingResult, RingRng,
};

pub use crate::ring::{EliminationRecord, EliminationRing, KillLine, RingState, StalkLine};
