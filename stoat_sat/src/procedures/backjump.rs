/*!
Recovery from a conflict.

A backjump is a jump from the current decision level to some lower level, made
because conflict analysis produced a clause which asserts a literal there. Every
assignment above the target level is undone, the decision trail is truncated, and any
queued propagation is discarded --- it concerned a valuation which no longer holds.
*/

use crate::{
    context::GenericContext, db::LevelIndex, misc::log::targets,
    procedures::decision::DecisionStrategy,
};

impl<S: DecisionStrategy> GenericContext<S> {
    /// Backjumps to the given target level.
    ///
    /// Implied atoms above the target are popped from the trail, each returned to a
    /// universal domain with a cleared assignment record.
    pub(crate) fn backjump(&mut self, target: LevelIndex) {
        debug_assert!(self.decision_level() > 0);
        log::trace!(target: targets::BACKJUMP, "Backtrack to level {target}");

        while let Some(atom) = self.trail.implied.last().copied() {
            if self.atom_db.assignment(atom).level <= target {
                break;
            }
            log::trace!(target: targets::BACKJUMP, "Resetting var{atom}");
            self.trail.implied.pop();
            self.atom_db.reset_atom(atom);
        }
        self.trail.decisions.truncate(target as usize);
        self.trail.queue.clear();
    }
}
