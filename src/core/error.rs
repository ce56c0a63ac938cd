//! Errors returned by ring construction and elimination.
//!
//! Every failure is detected before the ring is touched, so a returned error
//! always leaves the ring exactly as it was.

/// Coarse error category.
///
/// Callers that only care whether they passed a bad name or acted on a
/// finished game can match on this instead of the full error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call was given an argument the ring cannot accept.
    InvalidArgument,
    /// The call is not allowed in the ring's current state.
    InvalidState,
}

/// Error type for ring operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    #[error("roster must contain at least one name")]
    EmptyRoster,

    #[error("roster of {len} names exceeds the participant ID space")]
    RosterTooLarge { len: usize },

    #[error("duplicate participant name: {name}")]
    DuplicateName { name: String },

    #[error("{name} is not in the kill ring")]
    NotInRing { name: String },

    #[error("invalid ring config: {0}")]
    InvalidConfig(String),

    #[error("game is over, {winner} has already won")]
    GameOver { winner: String },
}

impl RingError {
    /// Get the error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RingError::GameOver { .. } => ErrorKind::InvalidState,
            RingError::EmptyRoster
            | RingError::RosterTooLarge { .. }
            | RingError::DuplicateName { .. }
            | RingError::NotInRing { .. }
            | RingError::InvalidConfig(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result alias for ring operations.
pub type RingResult<T> = Result<T, RingError>;
