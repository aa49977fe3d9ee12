/*!
The watch database: for each atom and polarity, the clauses watching that literal.

A clause watching literal `(v, p)` is interested in the event "value `p` was removed
from the domain of `v`". Lists are appended to as watches are registered or moved, and
entries are removed lazily --- by swap-with-last during iteration in the propagator.

The lists are cleared and resized to the atom count at the start of each solve.
*/

use crate::{db::ClauseKey, structures::atom::Atom};

/// Watch lists for every atom, one per polarity.
#[derive(Default)]
pub struct WatchDB {
    lists: [Vec<Vec<ClauseKey>>; 2],
}

impl WatchDB {
    /// Clears all lists and sizes them to the given atom count.
    pub(crate) fn reset(&mut self, atom_count: usize) {
        for polarity_lists in &mut self.lists {
            polarity_lists.clear();
            polarity_lists.resize(atom_count, Vec::new());
        }
    }

    /// Notes that `clause` watches the literal `(atom, polarity)`.
    pub(crate) fn watch(&mut self, atom: Atom, polarity: bool, clause: ClauseKey) {
        self.lists[polarity as usize][atom as usize].push(clause);
    }

    pub(crate) fn list(&self, atom: Atom, polarity: bool) -> &[ClauseKey] {
        &self.lists[polarity as usize][atom as usize]
    }

    pub(crate) fn list_mut(&mut self, atom: Atom, polarity: bool) -> &mut Vec<ClauseKey> {
        &mut self.lists[polarity as usize][atom as usize]
    }
}
