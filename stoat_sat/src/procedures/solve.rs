/*!
Determines the satisfiability of the formula in a context.

# Overview

Roughly, the loop is as diagrammed:

```none
          +---------------+
  +-------| make_decision |
  |       +---------------+
  |               ⌃
  |               |  no conflict, some atom unassigned
  |               |
  |               |            +-----> satisfiable, if every atom is assigned
  ⌄   +-------------------+    |
--+-->|     propagate     |----+
  ⌃   +-------------------+    |
  |               |            +-----> unsatisfiable, on a conflict at level 0
  |               |                    or when analysis reaches the empty clause
  |               |  conflict
  |               ⌄
  |   +-------------------+
  +---| analyse, backjump |----------> unknown, when the backtrack budget is spent
      +-------------------+
```

Before the loop, clauses are validated (an atom outside the table is a structural
error, noted before any propagation) and initial propagation runs every clause to a
fix-point --- failure there is unsatisfiability at the root, with no decision to undo.

After a conflict is analysed the learnt clause is installed by running its initial
propagation at the backjump level, where it asserts exactly one literal. The
assignment is queued, so the next iteration's propagation picks it up.

The `inside_solve` flag is set for the duration and restored on every exit path, so
the domain mutation entry point knows whether to record trail information.
*/

use crate::{
    context::GenericContext,
    misc::log::targets,
    procedures::{analysis::AnalysisResult, bcp::ClauseOutcome, decision::DecisionStrategy},
    reports::Report,
    structures::atom::Atom,
    types::err::ErrorKind,
};

impl<S: DecisionStrategy> GenericContext<S> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// On [Report::Satisfiable] every atom is assigned, and the valuation may be read
    /// through [value_of](GenericContext::value_of). An `Err` is only returned for
    /// structurally malformed input --- search outcomes, including spending the
    /// backtrack budget, are reported through the [Report].
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.inside_solve = true;
        let report = self.solve_inner();
        self.inside_solve = false;
        report
    }

    fn solve_inner(&mut self) -> Result<Report, ErrorKind> {
        self.validate_clauses()?;

        if self.initial_propagate().is_err() {
            return Ok(Report::Unsatisfiable);
        }

        let mut backtracks: u64 = 0;
        loop {
            let Some(conflicting) = self.propagate_queue() else {
                if self.make_decision() {
                    continue;
                }
                if self.config.debug {
                    log::info!(target: targets::VALUATION,
                        "solution: {}", self.atom_db.valuation_string());
                }
                self.validate_singletons();
                return Ok(Report::Satisfiable);
            };

            if self.decision_level() == 0 {
                log::trace!(target: targets::SOLVE, "Failed at level 0, no solution possible");
                return Ok(Report::Unsatisfiable);
            }

            match self.conflict_analysis(conflicting) {
                AnalysisResult::FundamentalConflict => {
                    log::trace!(target: targets::SOLVE,
                        "Conflict analysis detected the empty clause, no solution possible");
                    return Ok(Report::Unsatisfiable);
                }

                AnalysisResult::AssertingClause { level, key } => {
                    log::trace!(target: targets::SOLVE,
                        "Backtrack to level {level}, generated clause={key}");
                    if backtracks == self.config.max_backtracks {
                        return Ok(Report::Unknown);
                    }

                    self.backjump(level);
                    let outcome = self.initialise_clause(key);
                    debug_assert_eq!(outcome, ClauseOutcome::Settled);
                    backtracks += 1;
                }
            }
        }
    }

    /// Rejects clauses whose literals mention atoms outside the atom table.
    fn validate_clauses(&self) -> Result<(), ErrorKind> {
        for key in self.clause_db.keys() {
            for literal in self.clause_db.get(key).literals() {
                let atom = literal.atom();
                if atom == 0 || atom as usize >= self.atom_db.count() {
                    return Err(ErrorKind::OutOfRangeAtom { clause: key });
                }
            }
        }
        Ok(())
    }

    /// Every atom must be assigned when a solve concludes with satisfiability.
    fn validate_singletons(&self) {
        for atom in 1..self.atom_db.count() {
            if self.atom_db.is_unassigned(atom as Atom) {
                panic!("! var{atom} should be singleton at a SAT solution");
            }
        }
    }
}
