//! The participant node shared by the kill ring and the graveyard.
//!
//! A participant never leaves the arena. Which collection it belongs to is
//! decided by the ring manager; the node itself only records whether (and by
//! whom) it has been eliminated.

use serde::{Deserialize, Serialize};

/// Fold a name into its case-insensitive lookup key.
///
/// Each char is folded on its own (simple upper, then simple lower), so the
/// result never depends on neighbouring chars: a final `Σ` folds like any
/// other `Σ`.
///
/// ```
/// use assassin_ring::core::participant::fold_name;
///
/// assert_eq!(fold_name("Alice"), fold_name("ALICE"));
/// assert_eq!(fold_name("ΟΔΟΣ"), fold_name("οδος"));
/// ```
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    // Multi-char uppercase expansions (ß -> SS) have no simple mapping.
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    // The only multi-char lowercase expansion is İ -> i + U+0307; its simple
    // mapping is the leading `i`.
    upper.to_lowercase().next().unwrap_or(upper)
}

/// A single player in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, exactly as supplied in the roster.
    pub name: String,

    /// Name of the participant who eliminated this one.
    /// `None` while alive; set once on elimination and never changed.
    eliminated_by: Option<String>,
}

impl Participant {
    /// Create a living participant.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            eliminated_by: None,
        }
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        fold_name(&self.name) == fold_name(name)
    }

    /// Check if the participant is still in the kill ring.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.eliminated_by.is_none()
    }

    /// Name of the eliminator, if any.
    #[must_use]
    pub fn eliminated_by(&self) -> Option<&str> {
        self.eliminated_by.as_deref()
    }

    /// Record the eliminator.
    ///
    /// Panics if the participant was already eliminated; the ring manager
    /// only calls this for members of the kill ring.
    pub(crate) fn mark_eliminated(&mut self, eliminator: impl Into<String>) {
        assert!(
            self.eliminated_by.is_none(),
            "Participant {} eliminated twice",
            self.name
        );
        self.eliminated_by = Some(eliminator.into());
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
