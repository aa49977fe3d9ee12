//! The abstract elements of a solve: atoms, literals, domains, and clauses.

pub mod atom;
pub mod clause;
pub mod domain;
pub mod literal;
