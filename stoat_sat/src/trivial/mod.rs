/*!
A solver with a trivial search algorithm.

The solver exhaustively tries valuations, with no propagation and no analysis of
failures. It exists only as a reference to be cross-checked against the
clause-learning solver on small instances --- every ordering choice it makes is
deterministic, so for a fixed clause database the two must agree on satisfiability.

A budget bounds the count of falsified valuations examined; once spent, the solve
reports [Unknown](Report::Unknown).
*/

use crate::{
    db::ClauseKey,
    reports::Report,
    structures::{atom::Atom, clause::CClause, domain::BinaryDomain, literal::CLiteral},
    types::err::ErrorKind,
};

const DEFAULT_MAX_ATTEMPTS: u64 = 1 << 32;

/// The trivial solver: domains, clauses, and an exhaustive search.
pub struct TrivialSolver {
    max_attempts: u64,
    domains: Vec<BinaryDomain>,
    clauses: Vec<CClause>,
}

impl Default for TrivialSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TrivialSolver {
    pub fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(max_attempts: u64) -> Self {
        TrivialSolver {
            max_attempts,
            // Index 0 is reserved, as in the clause-learning solver.
            domains: vec![BinaryDomain::default()],
            clauses: Vec::new(),
        }
    }

    /// A fresh atom with a universal domain.
    pub fn fresh_atom(&mut self) -> Atom {
        self.fresh_atom_from(BinaryDomain::default())
    }

    /// A fresh atom with the given initial domain.
    pub fn fresh_atom_from(&mut self, domain: BinaryDomain) -> Atom {
        self.domains.push(domain);
        (self.domains.len() - 1) as Atom
    }

    /// A handful of fresh atoms with universal domains.
    pub fn fresh_atoms(&mut self, count: usize) -> Vec<Atom> {
        (0..count).map(|_| self.fresh_atom()).collect()
    }

    /// Adds a clause over the given literals.
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = CLiteral>) {
        self.clauses.push(literals.into_iter().collect());
    }

    /// The value of an atom on the current valuation, if the atom is assigned.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        let domain = self.domains[atom as usize];
        match domain.is_singleton() {
            true => Some(domain.value()),
            false => None,
        }
    }

    /// Determines the satisfiability of the formula by exhaustive search.
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.validate_clauses()?;
        let (report, _attempts) = self.solve_recursive(1, 0);
        Ok(report)
    }

    fn validate_clauses(&self) -> Result<(), ErrorKind> {
        for (index, clause) in self.clauses.iter().enumerate() {
            for literal in clause {
                let atom = literal.atom();
                if atom == 0 || atom as usize >= self.domains.len() {
                    return Err(ErrorKind::OutOfRangeAtom {
                        clause: ClauseKey(index as u32),
                    });
                }
            }
        }
        Ok(())
    }

    /// Branches on the first universal domain at or after `from`.
    ///
    /// On satisfiability the branched values are kept, so the model can be read;
    /// otherwise the domains are restored on the way out.
    fn solve_recursive(&mut self, from: usize, attempts: u64) -> (Report, u64) {
        if self.has_conflict() {
            let report = match attempts >= self.max_attempts {
                true => Report::Unknown,
                false => Report::Unsatisfiable,
            };
            return (report, attempts + 1);
        }

        let mut attempts = attempts;
        for index in from..self.domains.len() {
            if !self.domains[index].is_universal() {
                continue;
            }
            let saved = self.domains[index];
            for value in saved.values() {
                self.domains[index] = BinaryDomain::from(value);
                let (report, used) = self.solve_recursive(index + 1, attempts);
                attempts = used;
                match report {
                    Report::Satisfiable => return (Report::Satisfiable, attempts),
                    Report::Unknown => {
                        self.domains[index] = saved;
                        return (Report::Unknown, attempts);
                    }
                    Report::Unsatisfiable => {}
                }
            }
            self.domains[index] = saved;
            return (Report::Unsatisfiable, attempts);
        }

        (Report::Satisfiable, attempts)
    }

    fn has_conflict(&self) -> bool {
        self.clauses.iter().any(|clause| self.clause_conflicts(clause))
    }

    /// A clause conflicts when every literal's value is excluded from its domain.
    fn clause_conflicts(&self, clause: &[CLiteral]) -> bool {
        !clause.iter().any(|literal| {
            self.domains[literal.atom() as usize].contains(literal.polarity())
        })
    }
}
