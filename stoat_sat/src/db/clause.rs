/*!
The clause database: every clause of the formula, original and learnt.

Clauses are only ever appended, and are addressed by dense [ClauseKey]s. Each stored
clause owns its literal list together with two watch positions --- indices into the
list identifying the literals whose truth status the solver tracks lazily.
*/

use std::collections::BTreeMap;

use crate::{
    db::{atom::AtomDB, ClauseKey},
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
};

/// The status of a single literal against the current valuation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiteralStatus {
    /// The atom is assigned the literal's polarity.
    Satisfied,

    /// The atom is assigned the opposite polarity.
    Falsified,

    /// The atom is unassigned.
    Open,
}

/// A stored clause: a literal list and two watch positions.
pub struct StoredClause {
    literals: Vec<CLiteral>,
    watches: [usize; 2],
}

impl StoredClause {
    fn new(literals: CClause) -> Self {
        StoredClause {
            literals,
            watches: [0, 0],
        }
    }

    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    pub fn size(&self) -> usize {
        self.literals.len()
    }

    pub fn literal(&self, index: usize) -> CLiteral {
        self.literals[index]
    }

    pub(crate) fn watches(&self) -> [usize; 2] {
        self.watches
    }

    pub(crate) fn set_watches(&mut self, watches: [usize; 2]) {
        self.watches = watches;
    }

    /// Collapses repeated atoms, left-to-right, first occurrence winning.
    ///
    /// Returns false when the clause mentions an atom with both polarities --- a
    /// tautology, which cannot be reduced without changing its meaning.
    pub(crate) fn normalize(&mut self) -> bool {
        let mut seen: BTreeMap<Atom, bool> = BTreeMap::new();
        let mut kept = Vec::with_capacity(self.literals.len());
        for literal in &self.literals {
            match seen.get(&literal.atom()) {
                Some(polarity) if *polarity != literal.polarity() => return false,
                Some(_) => {}
                None => {
                    seen.insert(literal.atom(), literal.polarity());
                    kept.push(*literal);
                }
            }
        }
        if kept.len() != self.literals.len() {
            self.literals = kept;
        }
        true
    }

    pub(crate) fn literal_status(&self, atoms: &AtomDB, index: usize) -> LiteralStatus {
        let literal = self.literals[index];
        let domain = atoms.domain(literal.atom());
        if !domain.is_singleton() {
            LiteralStatus::Open
        } else if domain.value() == literal.polarity() {
            LiteralStatus::Satisfied
        } else {
            LiteralStatus::Falsified
        }
    }

    /// The first non-falsified literal at or after `from`, scanning left to right.
    pub(crate) fn first_open_literal(&self, atoms: &AtomDB, from: usize) -> Option<usize> {
        (from..self.literals.len()).find(|&index| {
            let literal = self.literals[index];
            atoms.domain(literal.atom()).contains(literal.polarity())
        })
    }

    /// A non-falsified literal to move the watch at `slot` to, avoiding the other
    /// watch. The scan runs from just after the stale watch to the end, then wraps to
    /// the front.
    pub(crate) fn alternative_watch(&self, atoms: &AtomDB, slot: usize) -> Option<usize> {
        let watched = self.watches[slot];
        let other = self.watches[1 - slot];
        debug_assert!(matches!(
            self.literal_status(atoms, watched),
            LiteralStatus::Falsified
        ));
        let candidate = |index: usize| {
            index != other
                && !matches!(self.literal_status(atoms, index), LiteralStatus::Falsified)
        };
        for index in watched + 1..self.literals.len() {
            if candidate(index) {
                return Some(index);
            }
        }
        for index in 0..watched {
            if candidate(index) {
                return Some(index);
            }
        }
        None
    }
}

impl std::fmt::Display for StoredClause {
    /// The literal list, watched literals starred.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.literals.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{literal}")?;
            if index == self.watches[0] || index == self.watches[1] {
                write!(f, "*")?;
            }
        }
        write!(f, "}}")
    }
}

/// An append-only store of clauses.
#[derive(Default)]
pub struct ClauseDB {
    clauses: Vec<StoredClause>,
}

impl ClauseDB {
    /// Stores a clause, returning its key.
    pub fn store(&mut self, literals: CClause) -> ClauseKey {
        let key = ClauseKey(self.clauses.len() as u32);
        self.clauses.push(StoredClause::new(literals));
        key
    }

    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    pub fn get(&self, key: ClauseKey) -> &StoredClause {
        &self.clauses[key.index()]
    }

    pub(crate) fn get_mut(&mut self, key: ClauseKey) -> &mut StoredClause {
        &mut self.clauses[key.index()]
    }

    pub fn keys(&self) -> impl Iterator<Item = ClauseKey> {
        (0..self.clauses.len() as u32).map(ClauseKey)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StoredClause> {
        self.clauses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_drops_duplicates() {
        let mut clause = StoredClause::new(vec![
            CLiteral::new(1, true),
            CLiteral::new(2, false),
            CLiteral::new(1, true),
            CLiteral::new(2, false),
        ]);
        assert!(clause.normalize());
        assert_eq!(
            clause.literals(),
            &[CLiteral::new(1, true), CLiteral::new(2, false)]
        );
    }

    #[test]
    fn normalization_notes_tautologies() {
        let mut clause = StoredClause::new(vec![
            CLiteral::new(1, true),
            CLiteral::new(2, false),
            CLiteral::new(1, false),
        ]);
        assert!(!clause.normalize());
    }

    #[test]
    fn normalization_keeps_clean_clauses() {
        let literals = vec![CLiteral::new(1, true), CLiteral::new(2, false)];
        let mut clause = StoredClause::new(literals.clone());
        assert!(clause.normalize());
        assert_eq!(clause.literals(), literals.as_slice());
    }
}
