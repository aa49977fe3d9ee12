/*!
Log targets for the solver's trace output.

The library traces through the [log] facade and never installs an implementation of
its own --- the binary (or test) decides where, and whether, the output goes. Each
call names one of the targets below, so a filter such as `RUST_LOG=propagation` can
narrow the trace to a single part of a solve.

The heavier renderings behind some of these calls (clause text, the full valuation)
are only built when [Config::debug](crate::config::Config) is set.
*/

/// The target names, one per traced part of a solve.
pub mod targets {
    /// Conflict analysis: the evolving resolvent and its antecedents.
    pub const ANALYSIS: &str = "analysis";

    /// Unwinding the trail after a conflict.
    pub const BACKJUMP: &str = "backjump";

    /// Which atom was decided, and the value it received.
    pub const DECISION: &str = "decision";

    /// Watch movement, unit implications, and falsified clauses.
    pub const PROPAGATION: &str = "propagation";

    /// The top-level search loop's verdicts.
    pub const SOLVE: &str = "solve";

    /// Domain writes, and the solution on satisfiability.
    pub const VALUATION: &str = "valuation";
}
