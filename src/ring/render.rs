//! Text views of the kill ring and graveyard.
//!
//! The line templates are what players see, so they are fixed:
//! - `"<name> is stalking <target>"`
//! - `"<name> was killed by <eliminator>"`

use std::fmt;
use std::io::{self, Write};

use super::manager::EliminationRing;

/// One kill-ring line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StalkLine<'a> {
    pub stalker: &'a str,
    pub target: &'a str,
}

impl fmt::Display for StalkLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is stalking {}", self.stalker, self.target)
    }
}

/// One graveyard line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KillLine<'a> {
    pub victim: &'a str,
    pub eliminator: &'a str,
}

impl fmt::Display for KillLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} was killed by {}", self.victim, self.eliminator)
    }
}

impl EliminationRing {
    /// Kill-ring lines in stalking order, starting at the head.
    ///
    /// The last participant stalks the head; a lone survivor stalks itself.
    #[must_use]
    pub fn stalk_lines(&self) -> Vec<StalkLine<'_>> {
        let names = self.active_names();
        let n = names.len();
        names
            .iter()
            .enumerate()
            .map(|(i, &stalker)| StalkLine {
                stalker,
                target: names[(i + 1) % n],
            })
            .collect()
    }

    /// Graveyard lines, most recent elimination first.
    #[must_use]
    pub fn kill_lines(&self) -> Vec<KillLine<'_>> {
        self.history()
            .map(|p| {
                debug_assert!(!p.is_active(), "{} is in the graveyard but alive", p.name);
                KillLine {
                    victim: p.name.as_str(),
                    eliminator: p.eliminated_by().unwrap_or_default(),
                }
            })
            .collect()
    }

    /// Render the kill ring, one string per line.
    #[must_use]
    pub fn render_active_ring(&self) -> Vec<String> {
        self.stalk_lines().iter().map(ToString::to_string).collect()
    }

    /// Render the graveyard, one string per line. Empty before the first kill.
    #[must_use]
    pub fn render_history(&self) -> Vec<String> {
        self.kill_lines().iter().map(ToString::to_string).collect()
    }

    /// Write the kill ring to `out`, indented per the ring's config.
    pub fn write_active_ring<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_lines(out, self.indent, self.stalk_lines())
    }

    /// Write the graveyard to `out`, indented per the ring's config.
    ///
    /// Writes nothing if nobody has been eliminated.
    pub fn write_history<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_lines(out, self.indent, self.kill_lines())
    }
}

fn write_lines<W, L>(out: &mut W, indent: usize, lines: Vec<L>) -> io::Result<()>
where
    W: Write,
    L: fmt::Display,
{
    for line in lines {
        writeln!(out, "{:indent$}{}", "", line, indent = indent)?;
    }
    Ok(())
}
