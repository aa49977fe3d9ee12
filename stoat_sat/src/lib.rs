//! A SAT solving library: given a propositional formula in conjunctive normal form,
//! decide whether some assignment satisfies it, and produce the assignment when one
//! exists.
//!
//! Two solvers share a common problem model:
//!
//! - A conflict-driven clause-learning solver, built around unit propagation over a
//!   two-watched-literal index, a trail of decisions and implications, and first-UIP
//!   conflict analysis with non-chronological backjumping.
//! - A [trivial solver](crate::trivial) which exhaustively checks valuations, and exists
//!   only as a reference to cross-check the clause-learning solver on small instances.
//!
//! # Orientation
//!
//! The clause-learning solver is driven through a [context](crate::context), which owns a
//! handful of databases:
//!
//! - Domains and implication records for each atom are stored in an [atom database](crate::db::atom).
//! - The formula, original and learnt, is stored in a [clause database](crate::db::clause).
//! - The order of assignments, the decisions made, and the queue of assignments whose
//!   consequences are still to be found are stored on the [trail](crate::db::trail).
//! - Which clauses are watching which atom, by polarity, is stored in a
//!   [watch database](crate::db::watches).
//!
//! The algorithm for determining satisfiability is factored into a collection of
//! [procedures].
//!
//! # Example
//!
//! ```rust
//! use stoat_sat::config::Config;
//! use stoat_sat::context::Context;
//! use stoat_sat::reports::Report;
//! use stoat_sat::structures::literal::CLiteral;
//!
//! let mut ctx = Context::from_config(Config::default());
//!
//! let p = ctx.fresh_atom();
//! let q = ctx.fresh_atom();
//!
//! // p → q, and p.
//! ctx.add_clause([CLiteral::new(p, false), CLiteral::new(q, true)]);
//! ctx.add_clause([CLiteral::new(p, true)]);
//!
//! assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
//! assert_eq!(ctx.value_of(q), Some(true));
//! ```
//!
//! # Logs
//!
//! The library traces its work through the [log] facade, under the targets listed in
//! [misc::log], leaving the choice of sink to the binary or test driving it. The more
//! expensive traces (clause and valuation renderings) are only built when
//! [Config::debug](crate::config::Config) is set.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod encoding;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod trivial;
pub mod types;
