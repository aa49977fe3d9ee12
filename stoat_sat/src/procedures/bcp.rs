/*!
Boolean constraint propagation over the two-watched-literal index.

# Overview

Propagation has two phases:

- [Initial propagation](GenericContext::initial_propagate), once per solve: every
  clause is normalized and has its watches chosen by a left-to-right scan for
  non-falsified literals. A clause with no such literal is already falsified and the
  solve fails; a clause with exactly one is asserted at level 0.
- The [queue drain](GenericContext::propagate_queue): while some newly-assigned atom
  is queued, the clauses watching the erased polarity of that atom are examined in
  place. Each either moves its stale watch to a fresh literal, is found satisfied,
  asserts its remaining watched literal, or is falsified --- in which case the drain
  stops and hands the falsified clause to conflict analysis.

# Ordering

The queue is FIFO, watch lists are iterated in insertion order with swap-with-last
removal, and watch scans run left to right. Differential testing against the trivial
solver relies on all three being stable.

# Complications

A clause's propagation both reads the atom database and mutates the clause, the watch
lists, and (on an assertion) the trail. The borrows stay disjoint by examining the
clause through its key and only calling back into the context once the clause borrow
has been dropped --- the short-lived `(context, key)` pairing takes the place of any
back-pointer from a clause to its context.
*/

use crate::{
    context::GenericContext,
    db::{atom::AssignmentSource, ClauseKey},
    misc::log::targets,
    procedures::decision::DecisionStrategy,
    structures::{atom::Atom, domain::BinaryDomain, literal::CLiteral},
};

/// The outcome of examining a single clause during propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ClauseOutcome {
    /// The clause is watching two non-falsified literals.
    ///
    /// During a drain this means the stale watch moved, and so the clause must leave
    /// the watch list being iterated.
    Watching,

    /// The clause needs no further attention on the current valuation: it is
    /// satisfied, or it asserted its remaining open literal.
    Settled,

    /// The clause is falsified on the current valuation.
    Falsified,
}

impl<S: DecisionStrategy> GenericContext<S> {
    /// Chooses and registers the initial watches of a clause.
    ///
    /// The clause is normalized first, and a tautology is left unwatched --- trivially
    /// satisfied, it can never propagate. Called once per clause at the start of a
    /// solve, and on a learnt clause at the moment it is installed (where the
    /// left-to-right scans find the single open literal and assert it).
    pub(crate) fn initialise_clause(&mut self, key: ClauseKey) -> ClauseOutcome {
        let unit = {
            let clause = self.clause_db.get_mut(key);
            if !clause.normalize() {
                return ClauseOutcome::Settled;
            }

            let Some(first) = clause.first_open_literal(&self.atom_db, 0) else {
                return ClauseOutcome::Falsified;
            };

            match clause.first_open_literal(&self.atom_db, first + 1) {
                Some(second) => {
                    clause.set_watches([first, second]);
                    let watch_0 = clause.literal(first);
                    let watch_1 = clause.literal(second);
                    self.watch_db.watch(watch_0.atom(), watch_0.polarity(), key);
                    self.watch_db.watch(watch_1.atom(), watch_1.polarity(), key);
                    debug_assert!(first < second && second < clause.size());
                    return ClauseOutcome::Watching;
                }
                None => clause.literal(first),
            }
        };
        self.assert_literal(key, unit)
    }

    /// Propagates the assignment of `triggering` through a clause watching it.
    pub(crate) fn propagate_clause(&mut self, key: ClauseKey, triggering: Atom) -> ClauseOutcome {
        let unit = {
            let clause = self.clause_db.get_mut(key);
            let watches = clause.watches();
            debug_assert!(watches[0] < watches[1] && watches[1] < clause.size());
            if self.config.debug {
                log::info!(target: targets::PROPAGATION, "propagating {key} {clause}");
            }

            let slot = match clause.literal(watches[0]).atom() == triggering {
                true => 0,
                false => 1,
            };

            match clause.alternative_watch(&self.atom_db, slot) {
                Some(next) => {
                    if self.config.debug {
                        log::info!(target: targets::PROPAGATION,
                            "updating a watch of {key} from {} to {next}", watches[slot]);
                    }
                    let moved_to = clause.literal(next);
                    self.watch_db.watch(moved_to.atom(), moved_to.polarity(), key);
                    let mut watches = watches;
                    watches[slot] = next;
                    if watches[0] > watches[1] {
                        watches.swap(0, 1);
                    }
                    clause.set_watches(watches);
                    return ClauseOutcome::Watching;
                }
                None => clause.literal(watches[1 - slot]),
            }
        };
        self.assert_literal(key, unit)
    }

    /// A unit implication: the clause can only be satisfied by this literal.
    fn assert_literal(&mut self, key: ClauseKey, literal: CLiteral) -> ClauseOutcome {
        let domain = self.atom_db.domain(literal.atom());
        if !domain.contains(literal.polarity()) {
            log::trace!(target: targets::PROPAGATION, "conflicting literal {literal}");
            return ClauseOutcome::Falsified;
        }
        if domain.is_singleton() {
            log::trace!(target: targets::PROPAGATION, "Trivially SAT literal {literal}");
            return ClauseOutcome::Settled;
        }
        self.set_domain(
            literal.atom(),
            BinaryDomain::from(literal.polarity()),
            AssignmentSource::Clause(key),
        );
        log::trace!(target: targets::PROPAGATION, "Propagating literal {literal}");
        ClauseOutcome::Settled
    }

    /// Drains the queue of newly-assigned atoms to a fix-point.
    ///
    /// Returns the key of a falsified clause, or `None` when all is well.
    pub(crate) fn propagate_queue(&mut self) -> Option<ClauseKey> {
        while let Some(atom) = self.trail.queue.pop_front() {
            let domain = self.atom_db.domain(atom);
            debug_assert!(domain.is_singleton());
            let erased = !domain.value();

            let mut index = 0;
            while index < self.watch_db.list(atom, erased).len() {
                let key = self.watch_db.list(atom, erased)[index];
                match self.propagate_clause(key, atom) {
                    ClauseOutcome::Watching => {
                        // The watch moved to another literal.
                        self.watch_db.list_mut(atom, erased).swap_remove(index);
                    }
                    ClauseOutcome::Settled => index += 1,
                    ClauseOutcome::Falsified => return Some(key),
                }
            }
        }
        None
    }

    /// Propagates every clause to a fix-point, for the start of a solve.
    ///
    /// Returns the key of a falsified clause on failure.
    pub(crate) fn initial_propagate(&mut self) -> Result<(), ClauseKey> {
        self.trail.clear();
        self.atom_db.clear_assignments();
        self.watch_db.reset(self.atom_db.count());

        for key in self.clause_db.keys().collect::<Vec<_>>() {
            if self.initialise_clause(key) == ClauseOutcome::Falsified {
                if self.config.debug {
                    log::info!(target: targets::PROPAGATION,
                        "Trivially UNSAT clause {key} = {}", self.clause_db.get(key));
                }
                return Err(key);
            }
        }

        match self.propagate_queue() {
            Some(conflict) => Err(conflict),
            None => Ok(()),
        }
    }
}
