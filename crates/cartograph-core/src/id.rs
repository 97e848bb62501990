//! Strongly-typed identifiers and the [`Coord`] type alias.

use std::fmt;

/// Identifies an agent (hero) on the board.
///
/// Agent-occupied tiles and owned resources carry the owning agent's ID.
/// The registry compares against its own `AgentId` to decide which
/// occupied cells are traversable. The default, `AgentId(0)`, owns nothing
/// on a board whose agents are numbered from 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing turn counter.
///
/// Incremented each time the registry ingests a new snapshot. `TurnId(0)`
/// is the state before the first update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnId(pub u64);

impl TurnId {
    /// The turn that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TurnId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A board position as `(x, y)`, column first.
///
/// Signed so that neighbour offsets can step off the board before edge
/// resolution decides what happens there.
pub type Coord = (i32, i32);
