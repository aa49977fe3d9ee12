//! Differential testing of the clause-learning solver against the trivial solver.
//!
//! For any fixed clause database both solvers are deterministic, and on instances
//! within the trivial solver's reach the two must agree on satisfiability. When both
//! find a model, each model must independently satisfy every clause --- the models
//! themselves need not be identical.

use rand::{rngs::StdRng, Rng, SeedableRng};

use stoat_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{atom::Atom, literal::CLiteral},
    trivial::TrivialSolver,
};

const ROUNDS: u64 = 50;
const MAX_ATOMS: u32 = 8;

fn random_clauses(rng: &mut StdRng) -> (u32, Vec<Vec<(u32, bool)>>) {
    let atom_count = rng.random_range(1..=MAX_ATOMS);
    let clause_count = rng.random_range(1..=24);

    let clauses = (0..clause_count)
        .map(|_| {
            let length = rng.random_range(1..=atom_count);
            (0..length)
                .map(|_| (rng.random_range(1..=atom_count), rng.random_bool(0.5)))
                .collect()
        })
        .collect();
    (atom_count, clauses)
}

fn model_satisfies(
    value_of: impl Fn(Atom) -> Option<bool>,
    clauses: &[Vec<(u32, bool)>],
) -> bool {
    clauses.iter().all(|clause| {
        clause
            .iter()
            .any(|(atom, polarity)| value_of(*atom) == Some(*polarity))
    })
}

#[test]
fn solvers_agree_on_random_formulas() {
    for seed in 0..ROUNDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (atom_count, clauses) = random_clauses(&mut rng);

        let mut trivial = TrivialSolver::new();
        let trivial_atoms = trivial.fresh_atoms(atom_count as usize);
        for clause in &clauses {
            trivial.add_clause(
                clause
                    .iter()
                    .map(|(atom, polarity)| CLiteral::new(trivial_atoms[*atom as usize - 1], *polarity)),
            );
        }

        let mut cdcl = Context::from_config(Config::default());
        let cdcl_atoms = cdcl.fresh_atoms(atom_count as usize);
        for clause in &clauses {
            cdcl.add_clause(
                clause
                    .iter()
                    .map(|(atom, polarity)| CLiteral::new(cdcl_atoms[*atom as usize - 1], *polarity)),
            );
        }

        let trivial_report = trivial.solve().unwrap();
        let cdcl_report = cdcl.solve().unwrap();
        assert_eq!(trivial_report, cdcl_report, "diverged on seed {seed}");

        if cdcl_report == Report::Satisfiable {
            assert!(
                model_satisfies(|atom| trivial.value_of(trivial_atoms[atom as usize - 1]), &clauses),
                "trivial model fails on seed {seed}"
            );
            assert!(
                model_satisfies(|atom| cdcl.value_of(cdcl_atoms[atom as usize - 1]), &clauses),
                "cdcl model fails on seed {seed}"
            );
        }
    }
}

#[test]
fn trivial_solver_small_cases() {
    let mut sat = TrivialSolver::new();
    let p = sat.fresh_atom();
    sat.add_clause([CLiteral::new(p, true)]);
    assert_eq!(sat.solve(), Ok(Report::Satisfiable));
    assert_eq!(sat.value_of(p), Some(true));

    let mut unsat = TrivialSolver::new();
    let q = unsat.fresh_atom();
    unsat.add_clause([CLiteral::new(q, true)]);
    unsat.add_clause([CLiteral::new(q, false)]);
    assert_eq!(unsat.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn trivial_solver_implication_chain() {
    let mut sat = TrivialSolver::new();
    let atoms = sat.fresh_atoms(3);
    sat.add_clause([CLiteral::new(atoms[0], false), CLiteral::new(atoms[1], true)]);
    sat.add_clause([CLiteral::new(atoms[1], false), CLiteral::new(atoms[2], true)]);
    sat.add_clause([CLiteral::new(atoms[0], true)]);

    assert_eq!(sat.solve(), Ok(Report::Satisfiable));
    for atom in atoms {
        assert_eq!(sat.value_of(atom), Some(true));
    }
}
