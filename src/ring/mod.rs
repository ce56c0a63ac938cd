//! The kill ring.
//!
//! ## Key Types
//!
//! - `EliminationRing`: kill ring + graveyard, the only mutable state
//! - `EliminationRecord`: who was eliminated and by whom
//! - `RingState`: in progress or complete
//! - `StalkLine` / `KillLine`: display lines for the two collections

pub mod manager;
pub mod render;

pub use manager::{EliminationRecord, EliminationRing, RingState};
pub use render::{KillLine, StalkLine};
