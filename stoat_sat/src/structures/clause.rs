//! Clauses, as disjunctions of literals.

use crate::structures::literal::CLiteral;

/// The canonical clause: a vector of literals.
pub type CClause = Vec<CLiteral>;

/// The literals as a line of DIMACS, terminated by `0`.
pub fn as_dimacs(literals: &[CLiteral]) -> String {
    let mut string = String::new();
    for literal in literals {
        string.push_str(&format!("{} ", literal.as_int()));
    }
    string.push('0');
    string
}
