use stoat_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{domain::BinaryDomain, literal::CLiteral},
    types::err::ErrorKind,
};

mod basic {
    use super::*;

    #[test]
    fn initially_set_problem() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom_from(BinaryDomain::from(true));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p), Some(true));
    }

    #[test]
    fn tiny_problem_true() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom();
        ctx.add_clause([CLiteral::new(p, true)]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p), Some(true));
    }

    #[test]
    fn tiny_problem_false() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom();
        ctx.add_clause([CLiteral::new(p, false)]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p), Some(false));
    }

    #[test]
    fn tiny_problem_unsat() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom();
        ctx.add_clause([CLiteral::new(p, false)]);
        ctx.add_clause([CLiteral::new(p, true)]);

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn implication_chain() {
        let mut ctx = Context::from_config(Config::default());
        let atoms = ctx.fresh_atoms(3);

        // x₁ → x₂, x₂ → x₃, and x₁.
        ctx.add_clause([CLiteral::new(atoms[0], false), CLiteral::new(atoms[1], true)]);
        ctx.add_clause([CLiteral::new(atoms[1], false), CLiteral::new(atoms[2], true)]);
        ctx.add_clause([CLiteral::new(atoms[0], true)]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        for atom in atoms {
            assert_eq!(ctx.value_of(atom), Some(true));
        }
    }
}

mod normalization {
    use super::*;

    #[test]
    fn duplicates_collapse_at_first_propagation() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom();
        let q = ctx.fresh_atom();
        let key = ctx.add_clause([
            CLiteral::new(p, true),
            CLiteral::new(p, true),
            CLiteral::new(q, true),
            CLiteral::new(q, true),
        ]);

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(
            ctx.clause_db.get(key).literals(),
            &[CLiteral::new(p, true), CLiteral::new(q, true)]
        );
    }

    #[test]
    fn tautologies_are_skipped() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom();
        let q = ctx.fresh_atom();
        ctx.add_clause([
            CLiteral::new(p, true),
            CLiteral::new(q, false),
            CLiteral::new(p, false),
        ]);

        // Trivially satisfied, the clause constrains nothing.
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.value_of(p), Some(false));
        assert_eq!(ctx.value_of(q), Some(false));
    }
}

mod properties {
    use super::*;

    fn interesting_formula(ctx: &mut Context) -> Vec<stoat_sat::structures::atom::Atom> {
        let atoms = ctx.fresh_atoms(4);
        ctx.add_clause([CLiteral::new(atoms[0], true), CLiteral::new(atoms[1], true)]);
        ctx.add_clause([CLiteral::new(atoms[0], false), CLiteral::new(atoms[2], true)]);
        ctx.add_clause([CLiteral::new(atoms[1], false), CLiteral::new(atoms[2], false)]);
        ctx.add_clause([CLiteral::new(atoms[2], true), CLiteral::new(atoms[3], true)]);
        atoms
    }

    #[test]
    fn deterministic_model() {
        let mut first = Context::from_config(Config::default());
        let first_atoms = interesting_formula(&mut first);
        assert_eq!(first.solve(), Ok(Report::Satisfiable));
        let first_model: Vec<_> = first_atoms.iter().map(|a| first.value_of(*a)).collect();

        let mut second = Context::from_config(Config::default());
        let second_atoms = interesting_formula(&mut second);
        assert_eq!(second.solve(), Ok(Report::Satisfiable));
        let second_model: Vec<_> = second_atoms.iter().map(|a| second.value_of(*a)).collect();

        assert_eq!(first_model, second_model);
    }

    #[test]
    fn every_atom_assigned_on_satisfiability() {
        let mut ctx = Context::from_config(Config::default());
        let _constrained = interesting_formula(&mut ctx);
        // An atom no clause mentions.
        let free = ctx.fresh_atom();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.value_of(free).is_some());
    }

    #[test]
    fn out_of_range_atoms_are_rejected() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom();
        let key = ctx.add_clause([CLiteral::new(p, true), CLiteral::new(99, true)]);

        assert_eq!(ctx.solve(), Err(ErrorKind::OutOfRangeAtom { clause: key }));
    }
}
