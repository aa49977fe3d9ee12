/*!
Analysis of a falsified clause.

# Overview

Takes the key of a clause falsified on the current valuation and derives a learnt
clause by resolution: repeatedly, the literal of the clause under construction whose
atom was assigned most recently is resolved against the antecedent of that assignment.

Literals whose atoms were assigned at level 0 are dropped throughout --- they are
permanently false and can never reappear.

Resolution stops at the first of:
- an empty clause, in which case the formula is unsatisfiable;
- a single literal, learnt as a unit clause asserting at level 0;
- a clause with exactly one literal of the current decision level --- the first unique
  implication point --- learnt with a backjump to the second-greatest decision level
  among its literals.

# State

The clause under construction is a map from atoms to polarities, paired with a map
from implication depth to atom so the most recently assigned literal is always at
hand. Implication depths are unique, so the pivot of each resolution step is
unambiguous.
*/

use std::collections::BTreeMap;

use crate::{
    context::GenericContext,
    db::{
        atom::{AssignmentSource, AtomDB},
        ClauseKey, ImplicationDepth, LevelIndex,
    },
    misc::log::targets,
    procedures::decision::DecisionStrategy,
    structures::{atom::Atom, literal::CLiteral},
};

/// The result of analysing a falsified clause.
pub(crate) enum AnalysisResult {
    /// Resolution reached the empty clause: the formula is unsatisfiable.
    FundamentalConflict,

    /// A clause asserting some literal when the solver backjumps to `level`.
    AssertingClause { level: LevelIndex, key: ClauseKey },
}

/// The clause under construction during analysis.
#[derive(Default)]
struct ResolutionState {
    literals: BTreeMap<Atom, bool>,
    depth_to_atom: BTreeMap<ImplicationDepth, Atom>,
}

impl ResolutionState {
    /// Folds the literals of a clause into the state, resolving on `pivot` if given.
    ///
    /// Atoms without an active assignment are skipped, new atoms are added, and a
    /// repeated atom must carry the polarity already present.
    fn absorb(&mut self, literals: &[CLiteral], atoms: &AtomDB, pivot: Option<Atom>) {
        for literal in literals {
            let atom = literal.atom();
            let depth = atoms.assignment(atom).depth;
            if depth == 0 {
                continue;
            }
            if pivot == Some(atom) {
                debug_assert!(self.literals.get(&atom) != Some(&literal.polarity()));
                self.literals.remove(&atom);
                self.depth_to_atom.remove(&depth);
            } else if let Some(present) = self.literals.get(&atom) {
                debug_assert_eq!(*present, literal.polarity());
            } else {
                self.literals.insert(atom, literal.polarity());
                self.depth_to_atom.insert(depth, atom);
            }
        }
    }

    /// The atom of the most recently assigned literal in the state.
    fn latest_atom(&self) -> Atom {
        match self.depth_to_atom.last_key_value() {
            Some((_, atom)) => *atom,
            None => panic!("! Resolution state empty before analysis has concluded"),
        }
    }

    /// The decision level of the `distance`-th most recently assigned literal.
    fn level_at(&self, atoms: &AtomDB, distance: usize) -> LevelIndex {
        let atom = self
            .depth_to_atom
            .values()
            .rev()
            .nth(distance)
            .expect("a literal at the requested distance");
        atoms.assignment(*atom).level
    }

    /// True when at most one literal was assigned at the greatest level present.
    fn is_unit(&self, atoms: &AtomDB) -> bool {
        if self.depth_to_atom.len() <= 1 {
            return true;
        }
        self.level_at(atoms, 0) != self.level_at(atoms, 1)
    }

    fn size(&self) -> usize {
        self.literals.len()
    }

    fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The state as a clause, literals in ascending atom order.
    fn to_clause(&self) -> Vec<CLiteral> {
        self.literals
            .iter()
            .map(|(atom, polarity)| CLiteral::new(*atom, *polarity))
            .collect()
    }

    /// The state as `{literal@level, …}`, for trace output.
    fn render(&self, atoms: &AtomDB) -> String {
        let inner = self
            .literals
            .iter()
            .map(|(atom, polarity)| {
                let level = atoms.assignment(*atom).level;
                format!("{}@{level}", CLiteral::new(*atom, *polarity))
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{{inner}}}")
    }
}

impl<S: DecisionStrategy> GenericContext<S> {
    /// Analyses the conflict noted by a falsified clause.
    ///
    /// Returns either the unsatisfiability of the formula, or a learnt clause paired
    /// with the level to backjump to. The learnt clause is installed in the clause
    /// database but not yet watched --- the caller propagates it at the backjump
    /// level, where it asserts exactly one literal.
    pub(crate) fn conflict_analysis(&mut self, conflicting: ClauseKey) -> AnalysisResult {
        let mut state = ResolutionState::default();
        state.absorb(
            self.clause_db.get(conflicting).literals(),
            &self.atom_db,
            None,
        );
        if self.config.debug {
            log::info!(target: targets::ANALYSIS,
                "initiating conflict analysis with conflicting_clause {conflicting}={}",
                self.clause_db.get(conflicting));
            log::info!(target: targets::ANALYSIS, "cl={}", state.render(&self.atom_db));
        }

        loop {
            let pivot = state.latest_atom();
            let antecedent = match self.atom_db.assignment(pivot).source {
                AssignmentSource::Clause(key) => key,
                AssignmentSource::Decision => {
                    panic!("! Resolution pivot var{pivot} is a decision")
                }
            };
            if self.config.debug {
                log::info!(target: targets::ANALYSIS,
                    "Resolving with {antecedent}={}", self.clause_db.get(antecedent));
            }
            state.absorb(
                self.clause_db.get(antecedent).literals(),
                &self.atom_db,
                Some(pivot),
            );
            if self.config.debug {
                log::info!(target: targets::ANALYSIS, "cl={}", state.render(&self.atom_db));
            }

            if state.is_empty() {
                return AnalysisResult::FundamentalConflict;
            } else if state.size() == 1 {
                let key = self.clause_db.store(state.to_clause());
                return AnalysisResult::AssertingClause { level: 0, key };
            } else if state.is_unit(&self.atom_db) {
                let level = state.level_at(&self.atom_db, 1);
                let key = self.clause_db.store(state.to_clause());
                return AnalysisResult::AssertingClause { level, key };
            }
        }
    }
}
