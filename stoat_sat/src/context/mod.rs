/*!
The context --- to which a formula is added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the decision strategy, so tests may shape
branching (e.g. randomly, over a designated set of atoms) while the default
[Context] keeps the deterministic [LinearScan] strategy.

# Example
```rust
# use stoat_sat::config::Config;
# use stoat_sat::context::Context;
# use stoat_sat::reports::Report;
# use stoat_sat::structures::literal::CLiteral;
let mut ctx = Context::from_config(Config::default());

let p = ctx.fresh_atom();
ctx.add_clause([CLiteral::new(p, false)]);

assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
assert_eq!(ctx.value_of(p), Some(false));
```
*/

use crate::{
    config::Config,
    db::{
        atom::{Assignment, AssignmentSource, AtomDB},
        clause::ClauseDB,
        trail::Trail,
        watches::WatchDB,
        ImplicationDepth, LevelIndex,
    },
    misc::log::targets,
    procedures::decision::{DecisionStrategy, LinearScan},
    structures::{atom::Atom, domain::BinaryDomain},
};

/// A context generic over the decision strategy.
pub struct GenericContext<S: DecisionStrategy> {
    /// The configuration of the context.
    pub config: Config,

    /// The domains and assignment records of every atom.
    pub atom_db: AtomDB,

    /// Every clause added to the context, original and learnt.
    pub clause_db: ClauseDB,

    /// The strategy consulted when a decision has to be made.
    pub strategy: S,

    pub(crate) watch_db: WatchDB,
    pub(crate) trail: Trail,
    pub(crate) inside_solve: bool,
}

/// A context with the default, deterministic, decision strategy.
pub type Context = GenericContext<LinearScan>;

impl Context {
    pub fn from_config(config: Config) -> Self {
        GenericContext::with_strategy(config, LinearScan::default())
    }
}

impl<S: DecisionStrategy> GenericContext<S> {
    pub fn with_strategy(config: Config, strategy: S) -> Self {
        GenericContext {
            config,
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
            strategy,
            watch_db: WatchDB::default(),
            trail: Trail::default(),
            inside_solve: false,
        }
    }

    /// The current decision level: the count of decisions on the trail.
    pub fn decision_level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// Sets the domain of an atom --- the single mutation entry point.
    ///
    /// A no-op when the domain is unchanged. Otherwise, and while inside a solve, the
    /// atom is queued for propagation, appended to the implied trail, and its
    /// assignment record is written.
    pub(crate) fn set_domain(&mut self, atom: Atom, domain: BinaryDomain, source: AssignmentSource) {
        if self.config.debug {
            match source {
                AssignmentSource::Decision => {
                    log::info!(target: targets::VALUATION,
                        "L{}: Setting var{atom} := {domain} by DECISION", self.trail.level());
                }
                AssignmentSource::Clause(key) => {
                    log::info!(target: targets::VALUATION,
                        "L{}: Setting var{atom} := {domain} by clause={key}", self.trail.level());
                }
            }
        }
        if self.atom_db.domain(atom) != domain {
            self.atom_db.set_domain(atom, domain);
            if self.inside_solve {
                self.trail.queue.push_back(atom);
                self.trail.implied.push(atom);
                self.atom_db.record_assignment(
                    atom,
                    Assignment {
                        source,
                        depth: self.trail.implied.len() as ImplicationDepth,
                        level: self.trail.level(),
                    },
                );
            }
        }
    }
}
