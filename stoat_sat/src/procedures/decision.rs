/*!
Methods for choosing the next atom to value, and the value to give it.

# Overview

The core decision procedure is straightforward: search for an atom which is not
assigned a value, and assign one. Which atom to start the search from, and which value
to choose, are delegated to a [DecisionStrategy], so tests may shape branching without
touching the search itself.

The search for an unassigned atom always scans from the strategy's starting point to
the highest handle and then wraps around to handle 1, returning the first atom whose
domain is not a singleton. With the default [LinearScan] strategy --- start at the most
recent decision, choose `false` --- both the decision sequence and the resulting model
are deterministic.
*/

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    context::GenericContext,
    db::atom::{AssignmentSource, AtomDB},
    misc::log::targets,
    structures::{atom::Atom, domain::BinaryDomain},
};

/// A hook shaping which atom is decided next, and which value it receives.
pub trait DecisionStrategy {
    /// The atom to start the free-atom scan from.
    fn first_atom(&mut self, previous_decision: Option<Atom>, atoms: &AtomDB) -> Atom;

    /// The value to assign the chosen atom.
    fn value_for(&mut self, domain: &BinaryDomain) -> bool;
}

/// The default strategy: scan onwards from the most recent decision, choose `false`.
#[derive(Default)]
pub struct LinearScan;

impl DecisionStrategy for LinearScan {
    fn first_atom(&mut self, previous_decision: Option<Atom>, _atoms: &AtomDB) -> Atom {
        previous_decision.unwrap_or(1)
    }

    fn value_for(&mut self, _domain: &BinaryDomain) -> bool {
        false
    }
}

/// A randomized strategy, favouring a designated set of important atoms.
///
/// Used by tests to shape branching, e.g. to branch on the one-hot atoms of an integer
/// encoding before any auxiliary atom.
pub struct RandomOrder {
    rng: StdRng,
    important: Vec<Atom>,
}

impl RandomOrder {
    pub fn from_seed(seed: u64) -> Self {
        RandomOrder {
            rng: StdRng::seed_from_u64(seed),
            important: Vec::new(),
        }
    }

    pub fn set_important(&mut self, atoms: Vec<Atom>) {
        self.important = atoms;
    }
}

impl DecisionStrategy for RandomOrder {
    /// A random unassigned atom from the important set, when one remains.
    fn first_atom(&mut self, _previous_decision: Option<Atom>, atoms: &AtomDB) -> Atom {
        let mut candidates = self.important.len();
        while candidates > 0 {
            let index = self.rng.random_range(0..candidates);
            let atom = self.important[index];
            if atoms.is_unassigned(atom) {
                return atom;
            }
            self.important.swap(index, candidates - 1);
            candidates -= 1;
        }
        1
    }

    fn value_for(&mut self, domain: &BinaryDomain) -> bool {
        if domain.is_singleton() {
            return domain.value();
        }
        self.rng.random_bool(0.5)
    }
}

impl<S: DecisionStrategy> GenericContext<S> {
    /// Decides a value for some unassigned atom.
    ///
    /// Returns false when every atom is assigned, and so no decision could be made.
    pub(crate) fn make_decision(&mut self) -> bool {
        let previous = self.trail.last_decision();
        let start = self.strategy.first_atom(previous, &self.atom_db);

        let Some(chosen) = self.find_unassigned_atom(start) else {
            log::trace!(target: targets::DECISION, "Nothing to choose");
            return false;
        };

        let domain = self.atom_db.domain(chosen);
        let value = self.strategy.value_for(&domain);
        self.trail.decisions.push(chosen);
        self.set_domain(chosen, BinaryDomain::from(value), AssignmentSource::Decision);
        debug_assert_eq!(self.atom_db.assignment(chosen).level, self.decision_level());
        log::trace!(target: targets::DECISION, "Chosen var{chosen} := {}", value as u8);
        true
    }

    /// The first unassigned atom at or after `start`, wrapping around to atom 1.
    pub(crate) fn find_unassigned_atom(&self, start: Atom) -> Option<Atom> {
        let count = self.atom_db.count() as Atom;
        (start..count)
            .chain(1..start.min(count))
            .find(|&atom| self.atom_db.is_unassigned(atom))
    }
}
