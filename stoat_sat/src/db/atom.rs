/*!
The atom database: a domain and an assignment record for each atom.

The assignment records pair with the [trail](crate::db::trail) to give an implicit
implication graph. The graph is only ever traversed by walking backwards through the
trail, so per-atom records suffice and no edge lists are kept.
*/

use crate::{
    db::{ClauseKey, ImplicationDepth, LevelIndex},
    structures::{atom::Atom, domain::BinaryDomain},
};

/// What caused an assignment: a free decision, or propagation of some clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignmentSource {
    Decision,
    Clause(ClauseKey),
}

/// Historic information about a single assignment.
///
/// An assignment is the act of reducing an atom's domain to a singleton, either by a
/// decision or by propagating a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
    /// Who caused the assignment.
    pub source: AssignmentSource,

    /// The (1-based) index of this assignment on the implied trail, 0 when inactive.
    pub depth: ImplicationDepth,

    /// The decision level at which the assignment was made.
    pub level: LevelIndex,
}

impl Default for Assignment {
    fn default() -> Self {
        Assignment {
            source: AssignmentSource::Decision,
            depth: 0,
            level: 0,
        }
    }
}

/// The domains of all atoms, paired with their assignment records.
///
/// Index 0 is reserved, so signed renderings of literals are unambiguous.
pub struct AtomDB {
    domains: Vec<BinaryDomain>,
    assignments: Vec<Assignment>,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB {
            domains: vec![BinaryDomain::default()],
            assignments: vec![Assignment::default()],
        }
    }
}

impl AtomDB {
    /// The count of atoms in the database, including the reserved atom 0.
    pub fn count(&self) -> usize {
        self.domains.len()
    }

    /// A fresh atom with the given initial domain.
    pub fn fresh_atom(&mut self, domain: BinaryDomain) -> Atom {
        self.domains.push(domain);
        self.assignments.push(Assignment::default());
        (self.domains.len() - 1) as Atom
    }

    /// The current domain of an atom.
    pub fn domain(&self, atom: Atom) -> BinaryDomain {
        self.domains[atom as usize]
    }

    pub(crate) fn set_domain(&mut self, atom: Atom, domain: BinaryDomain) {
        self.domains[atom as usize] = domain;
    }

    /// The value of an atom on the current valuation, if the atom is assigned.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        let domain = self.domains[atom as usize];
        match domain.is_singleton() {
            true => Some(domain.value()),
            false => None,
        }
    }

    /// True if the atom may still take either value.
    pub fn is_unassigned(&self, atom: Atom) -> bool {
        !self.domains[atom as usize].is_singleton()
    }

    pub fn assignment(&self, atom: Atom) -> Assignment {
        self.assignments[atom as usize]
    }

    pub(crate) fn record_assignment(&mut self, atom: Atom, assignment: Assignment) {
        self.assignments[atom as usize] = assignment;
    }

    /// Returns the atom to a universal domain with no assignment record.
    pub(crate) fn reset_atom(&mut self, atom: Atom) {
        self.domains[atom as usize] = BinaryDomain::default();
        self.assignments[atom as usize] = Assignment::default();
    }

    /// Clears every assignment record, for the start of a solve.
    pub(crate) fn clear_assignments(&mut self) {
        self.assignments.clear();
        self.assignments
            .resize(self.domains.len(), Assignment::default());
    }

    /// The current valuation as `v1=1 v2=0 …`, unassigned atoms rendered as `?`.
    pub fn valuation_string(&self) -> String {
        (1..self.count())
            .map(|atom| match self.value_of(atom as Atom) {
                Some(value) => format!("v{atom}={}", value as u8),
                None => format!("v{atom}=?"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
