//! The trail: the ordered log of assignments since the start of a solve.

use std::collections::VecDeque;

use crate::{db::LevelIndex, structures::atom::Atom};

/// The ordered record of a solve in progress.
///
/// Two sequences, plus a queue:
/// - `implied` holds every assigned atom in assignment order, and is unwound to
///   restore state.
/// - `decisions` holds the decision atoms in decision order; its length is the current
///   decision level.
/// - `queue` holds atoms whose domains have just become singleton and whose watching
///   clauses have not yet been examined, in FIFO order.
#[derive(Default)]
pub struct Trail {
    pub(crate) implied: Vec<Atom>,
    pub(crate) decisions: Vec<Atom>,
    pub(crate) queue: VecDeque<Atom>,
}

impl Trail {
    /// The current decision level: the count of decisions on the trail.
    pub fn level(&self) -> LevelIndex {
        self.decisions.len() as LevelIndex
    }

    /// The most recent decision, if any decision is active.
    pub fn last_decision(&self) -> Option<Atom> {
        self.decisions.last().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.implied.clear();
        self.decisions.clear();
        self.queue.clear();
    }
}
