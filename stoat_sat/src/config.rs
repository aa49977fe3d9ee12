//! Configuration of a context.

/// The configuration of the clause-learning solver.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// The count of backtracks after which a solve gives up and reports
    /// [Unknown](crate::reports::Report::Unknown).
    pub max_backtracks: u64,

    /// Build the expensive trace strings (clause and valuation renderings) for logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_backtracks: 1 << 32,
            debug: false,
        }
    }
}
