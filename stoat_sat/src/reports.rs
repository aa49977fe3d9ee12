//! High-level reports on a solve.

/// What a solve found out about the formula it was given.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Report {
    /// The formula is satisfiable, and every atom is assigned a value witnessing this.
    Satisfiable,

    /// The formula is unsatisfiable.
    Unsatisfiable,

    /// The solve gave up before finding out, e.g. as the backtrack budget was spent.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SAT"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
