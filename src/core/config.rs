//! Ring configuration.
//!
//! Hosts build a `RingConfig` once and pass it to
//! `EliminationRing::with_config`. The defaults reproduce the classic
//! console game: roster order kept as given, output indented four spaces.

use serde::{Deserialize, Serialize};

use super::error::{RingError, RingResult};

/// Widest indent accepted by `RingConfig::validate`.
pub const MAX_INDENT: usize = 64;

/// Configuration for building and printing a ring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingConfig {
    /// Leading spaces for each line written by the `write_*` printers.
    pub indent: usize,

    /// Shuffle the roster with this seed before building the ring.
    /// `None` keeps the roster order.
    pub shuffle_seed: Option<u64>,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            shuffle_seed: None,
        }
    }
}

impl RingConfig {
    /// Create the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the printer indent.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Shuffle the roster with `seed`.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Check the config for values the ring cannot use.
    pub fn validate(&self) -> RingResult<()> {
        if self.indent > MAX_INDENT {
            return Err(RingError::InvalidConfig(format!(
                "indent {} exceeds {}",
                self.indent, MAX_INDENT
            )));
        }
        Ok(())
    }
}
