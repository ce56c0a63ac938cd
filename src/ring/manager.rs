//! Kill ring and graveyard management.
//!
//! The `EliminationRing` owns every participant in an arena and tracks two
//! ordered collections of arena handles:
//! - the kill ring, in stalking order (each participant stalks the next,
//!   the last stalks the first)
//! - the graveyard, most recent elimination first
//!
//! Eliminating a participant removes its handle from the kill ring and
//! pushes it onto the front of the graveyard. Nothing ever moves back.
//!
//! ## Usage
//!
//! ```
//! use assassin_ring::ring::EliminationRing;
//!
//! let mut ring = EliminationRing::new(["Ann", "Bob", "Cara"]).unwrap();
//!
//! let record = ring.eliminate("bob").unwrap();
//! assert_eq!(record.eliminator, "Ann");
//!
//! ring.eliminate("Cara").unwrap();
//! assert!(ring.is_complete());
//! assert_eq!(ring.winner(), Some("Ann"));
//! ```

use im::Vector;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::config::RingConfig;
use crate::core::entity::ParticipantId;
use crate::core::error::{RingError, RingResult};
use crate::core::participant::{fold_name, Participant};
use crate::core::rng::RingRng;

/// Macro-state of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingState {
    /// Two or more participants are still alive.
    InProgress,
    /// Exactly one participant is left. Terminal.
    Complete,
}

/// Outcome of a successful elimination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EliminationRecord {
    /// Handle of the eliminated participant.
    pub victim_id: ParticipantId,
    /// Name of the eliminated participant.
    pub victim: String,
    /// Name of the participant who was stalking the victim.
    pub eliminator: String,
}

/// Manages the kill ring and graveyard for one game.
///
/// The ring never becomes empty: construction requires at least one name and
/// elimination is refused once a single participant remains.
#[derive(Clone, Debug)]
pub struct EliminationRing {
    /// Every participant, indexed by `ParticipantId`.
    participants: Vec<Participant>,

    /// Kill ring in stalking order. `ring[0]` is the head; the successor of
    /// the last entry is the head.
    ring: Vec<ParticipantId>,

    /// Eliminated participants, most recent first.
    graveyard: Vector<ParticipantId>,

    /// Folded name -> participant, covering both collections.
    by_name: FxHashMap<String, ParticipantId>,

    /// Indent used by the `write_*` printers.
    pub(crate) indent: usize,
}

impl EliminationRing {
    /// Build a ring from a roster, in roster order.
    ///
    /// The first name becomes the head of the ring. Fails with
    /// `RingError::EmptyRoster` for an empty roster and
    /// `RingError::DuplicateName` if two names compare equal ignoring case.
    /// Rosters longer than the `u32` ID space fail with
    /// `RingError::RosterTooLarge`.
    pub fn new<I, S>(names: I) -> RingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(names, &RingConfig::default())
    }

    /// Build a ring using `config`.
    ///
    /// If the config carries a shuffle seed the roster is shuffled before
    /// the ring is linked.
    pub fn with_config<I, S>(names: I, config: &RingConfig) -> RingResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;

        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(RingError::EmptyRoster);
        }
        if ParticipantId::try_from_index(names.len() - 1).is_none() {
            return Err(RingError::RosterTooLarge { len: names.len() });
        }

        if let Some(seed) = config.shuffle_seed {
            RingRng::new(seed).shuffle(&mut names);
        }

        let mut by_name: FxHashMap<String, ParticipantId> = FxHashMap::default();
        by_name.reserve(names.len());
        for (i, name) in names.iter().enumerate() {
            if by_name.insert(fold_name(name), ParticipantId::from_index(i)).is_some() {
                return Err(RingError::DuplicateName { name: name.clone() });
            }
        }

        let participants: Vec<Participant> = names.into_iter().map(Participant::new).collect();
        let ring = (0..participants.len()).map(ParticipantId::from_index).collect();

        debug!(
            participants = participants.len(),
            head = %participants[0].name,
            "kill ring built"
        );

        Ok(Self {
            participants,
            ring,
            graveyard: Vector::new(),
            by_name,
            indent: config.indent,
        })
    }

    // === Lookup ===

    /// Get a participant by handle.
    #[must_use]
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.index())
    }

    /// Find a participant by name, ignoring case, in either collection.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ParticipantId> {
        self.by_name.get(&fold_name(name)).copied()
    }

    fn get(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.index()]
    }

    /// Find a living participant's position in the kill ring.
    fn ring_position(&self, name: &str) -> Option<usize> {
        let id = self.find(name)?;
        if !self.get(id).is_active() {
            return None;
        }
        self.ring.iter().position(|&member| member == id)
    }

    // === Queries ===

    /// Check if `name` is alive, ignoring case.
    #[must_use]
    pub fn active_contains(&self, name: &str) -> bool {
        self.find(name).is_some_and(|id| self.get(id).is_active())
    }

    /// Check if `name` is in the graveyard, ignoring case.
    #[must_use]
    pub fn history_contains(&self, name: &str) -> bool {
        self.find(name).is_some_and(|id| !self.get(id).is_active())
    }

    /// Check if only one participant is left.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ring.len() == 1
    }

    /// Get the current macro-state.
    #[must_use]
    pub fn state(&self) -> RingState {
        if self.is_complete() {
            RingState::Complete
        } else {
            RingState::InProgress
        }
    }

    /// Name of the winner, or `None` while the game is still running.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        if self.is_complete() {
            Some(self.head().name.as_str())
        } else {
            None
        }
    }

    /// The participant at the head of the kill ring.
    #[must_use]
    pub fn head(&self) -> &Participant {
        self.get(self.ring[0])
    }

    /// The most recently eliminated participant.
    #[must_use]
    pub fn last_eliminated(&self) -> Option<&Participant> {
        self.graveyard.front().map(|&id| self.get(id))
    }

    /// Number of living participants.
    #[must_use]
    pub fn active_len(&self) -> usize {
        self.ring.len()
    }

    /// Number of eliminated participants.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.graveyard.len()
    }

    /// Total participants, alive or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.participants.len()
    }

    /// Living participants in stalking order, starting at the head.
    pub fn active(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.ring.iter().map(move |&id| self.get(id))
    }

    /// Eliminated participants, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.graveyard.iter().map(move |&id| self.get(id))
    }

    /// Names of living participants in stalking order.
    #[must_use]
    pub fn active_names(&self) -> Vec<&str> {
        self.active().map(|p| p.name.as_str()).collect()
    }

    /// Names of eliminated participants, most recent first.
    #[must_use]
    pub fn history_names(&self) -> Vec<&str> {
        self.history().map(|p| p.name.as_str()).collect()
    }

    /// Who `name` is stalking. A lone survivor stalks itself.
    #[must_use]
    pub fn target_of(&self, name: &str) -> Option<&str> {
        let pos = self.ring_position(name)?;
        let next = self.ring[(pos + 1) % self.ring.len()];
        Some(self.get(next).name.as_str())
    }

    /// Who is stalking `name`. A lone survivor is its own stalker.
    #[must_use]
    pub fn stalker_of(&self, name: &str) -> Option<&str> {
        let pos = self.ring_position(name)?;
        let prev = self.ring[self.predecessor(pos)];
        Some(self.get(prev).name.as_str())
    }

    /// Who eliminated `name`, if `name` is in the graveyard.
    #[must_use]
    pub fn eliminator_of(&self, name: &str) -> Option<&str> {
        self.find(name).and_then(|id| self.get(id).eliminated_by())
    }

    /// Ring position of the participant stalking the one at `pos`.
    fn predecessor(&self, pos: usize) -> usize {
        if pos == 0 {
            self.ring.len() - 1
        } else {
            pos - 1
        }
    }

    // === Mutation ===

    /// Eliminate the living participant named `name`, ignoring case.
    ///
    /// The victim's stalker is recorded as the eliminator, the victim is
    /// bridged out of the kill ring, and it becomes the front of the
    /// graveyard. Eliminating the head makes its target the new head.
    ///
    /// ## Errors
    ///
    /// - `RingError::GameOver` if only one participant is left (checked first)
    /// - `RingError::NotInRing` if no living participant matches `name`
    ///
    /// The ring is unchanged when an error is returned.
    pub fn eliminate(&mut self, name: &str) -> RingResult<EliminationRecord> {
        if let Some(winner) = self.winner() {
            return Err(RingError::GameOver {
                winner: winner.to_string(),
            });
        }
        let pos = self.ring_position(name).ok_or_else(|| RingError::NotInRing {
            name: name.to_string(),
        })?;

        let stalker = self.ring[self.predecessor(pos)];
        let eliminator = self.get(stalker).name.clone();

        let victim_id = self.ring.remove(pos);
        self.participants[victim_id.index()].mark_eliminated(eliminator.clone());
        self.graveyard.push_front(victim_id);

        let victim = self.get(victim_id).name.clone();
        debug!(
            victim = %victim,
            eliminator = %eliminator,
            remaining = self.ring.len(),
            "participant eliminated"
        );
        if let Some(winner) = self.winner() {
            info!(winner = %winner, "game complete");
        }

        Ok(EliminationRecord {
            victim_id,
            victim,
            eliminator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn abc() -> EliminationRing {
        EliminationRing::new(["Ann", "Bob", "Cara"]).unwrap()
    }

    #[test]
    fn test_construction() {
        let ring = abc();
        assert_eq!(ring.active_names(), vec!["Ann", "Bob", "Cara"]);
        assert!(ring.history_names().is_empty());
        assert_eq!(ring.head().name, "Ann");
        assert_eq!(ring.total(), 3);
        assert_eq!(ring.state(), RingState::InProgress);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let err = EliminationRing::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, RingError::EmptyRoster);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = EliminationRing::new(["Ann", "Bob", "ANN"]).unwrap_err();
        assert_eq!(err, RingError::DuplicateName { name: "ANN".into() });
    }

    #[test]
    fn test_non_ascii_case_variants() {
        let mut ring = EliminationRing::new(["ΟΔΟΣ", "İlker", "Bob"]).unwrap();
        assert!(ring.active_contains("οδοσ"));
        assert!(ring.active_contains("ilker"));

        let record = ring.eliminate("οδος").unwrap();
        assert_eq!(record.victim, "ΟΔΟΣ");
        assert!(ring.history_contains("Οδοσ"));

        let err = EliminationRing::new(["ΟΔΟΣ", "οδοσ"]).unwrap_err();
        assert_eq!(err, RingError::DuplicateName { name: "οδοσ".into() });
    }

    #[test]
    fn test_single_participant_is_complete() {
        let ring = EliminationRing::new(["Solo"]).unwrap();
        assert!(ring.is_complete());
        assert_eq!(ring.winner(), Some("Solo"));
        assert_eq!(ring.target_of("solo"), Some("Solo"));
        assert_eq!(ring.stalker_of("solo"), Some("Solo"));
    }

    #[test]
    fn test_targets_wrap() {
        let ring = abc();
        assert_eq!(ring.target_of("Ann"), Some("Bob"));
        assert_eq!(ring.target_of("Cara"), Some("Ann"));
        assert_eq!(ring.stalker_of("Ann"), Some("Cara"));
        assert_eq!(ring.stalker_of("bob"), Some("Ann"));
        assert_eq!(ring.target_of("Zed"), None);
    }

    #[test]
    fn test_eliminate_middle() {
        let mut ring = abc();
        let record = ring.eliminate("Bob").unwrap();

        assert_eq!(record.victim, "Bob");
        assert_eq!(record.eliminator, "Ann");
        assert_eq!(ring.active_names(), vec!["Ann", "Cara"]);
        assert_eq!(ring.history_names(), vec!["Bob"]);
        assert_eq!(ring.eliminator_of("bob"), Some("Ann"));
        assert_eq!(ring.target_of("Ann"), Some("Cara"));
    }

    #[test]
    fn test_eliminate_head_advances_head() {
        let mut ring = EliminationRing::new(["Ann", "Bob", "Cara", "Dan"]).unwrap();
        let record = ring.eliminate("ann").unwrap();

        assert_eq!(record.eliminator, "Dan");
        assert_eq!(ring.head().name, "Bob");
        assert_eq!(ring.active_names(), vec!["Bob", "Cara", "Dan"]);
        assert_eq!(ring.target_of("Dan"), Some("Bob"));
        assert_eq!(ring.stalker_of("Bob"), Some("Dan"));
    }

    #[test]
    fn test_eliminate_tail() {
        let mut ring = abc();
        let record = ring.eliminate("Cara").unwrap();

        assert_eq!(record.eliminator, "Bob");
        assert_eq!(ring.target_of("Bob"), Some("Ann"));
    }

    #[test]
    fn test_history_most_recent_first() {
        let mut ring = EliminationRing::new(["Ann", "Bob", "Cara", "Dan"]).unwrap();
        ring.eliminate("Bob").unwrap();
        ring.eliminate("Dan").unwrap();

        assert_eq!(ring.history_names(), vec!["Dan", "Bob"]);
        assert_eq!(ring.last_eliminated().map(|p| p.name.as_str()), Some("Dan"));
        assert_eq!(ring.eliminator_of("Dan"), Some("Cara"));
        assert_eq!(ring.eliminator_of("Bob"), Some("Ann"));
    }

    #[test]
    fn test_eliminate_unknown_name() {
        let mut ring = abc();
        let err = ring.eliminate("Zed").unwrap_err();
        assert_eq!(err, RingError::NotInRing { name: "Zed".into() });
        assert_eq!(ring.active_len(), 3);
        assert_eq!(ring.history_len(), 0);
    }

    #[test]
    fn test_eliminate_dead_name() {
        let mut ring = abc();
        ring.eliminate("Bob").unwrap();
        let err = ring.eliminate("bob").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(ring.active_len(), 2);
        assert_eq!(ring.history_len(), 1);
    }

    #[test]
    fn test_eliminate_after_complete() {
        let mut ring = abc();
        ring.eliminate("Bob").unwrap();
        ring.eliminate("Cara").unwrap();

        assert_eq!(ring.state(), RingState::Complete);
        let err = ring.eliminate("Ann").unwrap_err();
        assert_eq!(err, RingError::GameOver { winner: "Ann".into() });
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_game_over_checked_before_name() {
        let mut ring = EliminationRing::new(["Solo"]).unwrap();
        let err = ring.eliminate("nobody").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_contains() {
        let mut ring = abc();
        assert!(ring.active_contains("ANN"));
        assert!(ring.active_contains("ann"));
        assert!(!ring.history_contains("ann"));

        ring.eliminate("Ann").unwrap();
        assert!(!ring.active_contains("Ann"));
        assert!(ring.history_contains("aNN"));
        assert!(!ring.active_contains("Zed"));
        assert!(!ring.history_contains("Zed"));
    }

    #[test]
    fn test_shuffled_roster() {
        let config = RingConfig::new().with_shuffle_seed(7);
        let names = ["Ann", "Bob", "Cara", "Dan", "Eve", "Fay", "Gus", "Hal"];
        let a = EliminationRing::with_config(names, &config).unwrap();
        let b = EliminationRing::with_config(names, &config).unwrap();

        assert_eq!(a.active_names(), b.active_names());
        let mut sorted = a.active_names();
        sorted.sort_unstable();
        assert_eq!(sorted, names.to_vec());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RingConfig::new().with_indent(1000);
        let err = EliminationRing::with_config(["Ann"], &config).unwrap_err();
        assert!(matches!(err, RingError::InvalidConfig(_)));
    }
}
