//! Databases for the data considered during a solve, and keys to access them.

pub mod atom;
pub mod clause;
pub mod trail;
pub mod watches;

/// A decision level: the number of decisions on the trail when something happened.
pub type LevelIndex = u32;

/// A 1-based position on the implied trail, with 0 meaning "no active implication".
pub type ImplicationDepth = u32;

/// A key to a clause in the clause database.
///
/// Keys are dense indices. Clauses are only ever appended, so a key remains valid for
/// the life of the database.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ClauseKey(pub(crate) u32);

impl ClauseKey {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
