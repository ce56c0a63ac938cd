//! Core types: participant IDs and nodes, errors, configuration, RNG.
//!
//! Everything the ring manager is built from lives here.

pub mod entity;
pub mod participant;
pub mod error;
pub mod config;
pub mod rng;

pub use entity::ParticipantId;
pub use participant::Participant;
pub use error::{ErrorKind, RingError, RingResult};
pub use config::RingConfig;
pub use rng::RingRng;
