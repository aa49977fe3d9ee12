//! Methods for building a problem in a context: atoms, clauses, and DIMACS input.

pub mod dimacs;

use crate::{
    context::GenericContext,
    db::ClauseKey,
    procedures::decision::DecisionStrategy,
    structures::{atom::Atom, domain::BinaryDomain, literal::CLiteral},
};

impl<S: DecisionStrategy> GenericContext<S> {
    /// A fresh atom with a universal domain.
    pub fn fresh_atom(&mut self) -> Atom {
        self.atom_db.fresh_atom(BinaryDomain::default())
    }

    /// A fresh atom with the given initial domain.
    pub fn fresh_atom_from(&mut self, domain: BinaryDomain) -> Atom {
        self.atom_db.fresh_atom(domain)
    }

    /// A handful of fresh atoms with universal domains.
    pub fn fresh_atoms(&mut self, count: usize) -> Vec<Atom> {
        (0..count).map(|_| self.fresh_atom()).collect()
    }

    /// Adds a clause over the given literals, returning its key.
    ///
    /// Clauses are to be added before the first solve --- during a solve only the
    /// analysis procedure extends the clause database.
    pub fn add_clause(&mut self, literals: impl IntoIterator<Item = CLiteral>) -> ClauseKey {
        self.clause_db.store(literals.into_iter().collect())
    }

    /// The value of an atom on the current valuation, if the atom is assigned.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }
}
