use std::collections::BTreeSet;

use stoat_sat::{
    config::Config,
    context::{Context, GenericContext},
    encoding::{IntEncoder, MAX_VALUE},
    procedures::decision::RandomOrder,
    reports::Report,
    structures::literal::CLiteral,
    types::err::EncodingError,
};

#[test]
fn empty_domain_is_unsatisfiable() {
    let mut ctx = Context::from_config(Config::default());
    let mut encoder = IntEncoder::new();
    let _var = encoder.add_var(&mut ctx, Vec::<i32>::new()).unwrap();

    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn single_value_domains() {
    for value in [0, 1, 5, 9, MAX_VALUE] {
        let mut ctx = Context::from_config(Config::default());
        let mut encoder = IntEncoder::new();
        let var = encoder.add_var(&mut ctx, [value]).unwrap();

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(encoder.value_of(&ctx, var), Ok(value));
    }
}

#[test]
fn values_beyond_the_bound_are_rejected() {
    let mut ctx = Context::from_config(Config::default());
    let mut encoder = IntEncoder::new();
    assert_eq!(
        encoder.add_var(&mut ctx, [0, i32::MAX]),
        Err(EncodingError::ValueTooLarge(i32::MAX))
    );
}

#[test]
fn multi_value_domain_under_random_branching() {
    let domain = [0, 1, 2, 10, 11];
    let mut seen = BTreeSet::new();

    for seed in 1..=200 {
        let mut ctx =
            GenericContext::with_strategy(Config::default(), RandomOrder::from_seed(seed));
        let mut encoder = IntEncoder::new();
        let var = encoder.add_var(&mut ctx, domain).unwrap();
        ctx.strategy.set_important(encoder.one_hot_atoms());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        let value = encoder.value_of(&ctx, var).unwrap();
        assert!(domain.contains(&value));
        seen.insert(value);
    }

    // Branching is randomized over the one-hot atoms, so a spread of values appears.
    assert!(seen.len() >= 3, "expected a spread of values, saw {seen:?}");
}

/// Encodes `count` integers over `0..values` and constrains them pairwise different.
fn all_different(count: usize, values: i32) -> (Context, IntEncoder, Vec<usize>) {
    let mut ctx = Context::from_config(Config::default());
    let mut encoder = IntEncoder::new();
    let vars = (0..count)
        .map(|_| encoder.add_var(&mut ctx, 0..values).unwrap())
        .collect::<Vec<_>>();

    for value in 0..values {
        for i in 0..count {
            for j in i + 1..count {
                let left = encoder.one_hot_atom(vars[i], value).unwrap();
                let right = encoder.one_hot_atom(vars[j], value).unwrap();
                ctx.add_clause([CLiteral::new(left, false), CLiteral::new(right, false)]);
            }
        }
    }

    (ctx, encoder, vars)
}

#[test]
fn pigeonhole_is_unsatisfiable() {
    // Six integers over five values cannot be pairwise different.
    let (mut ctx, _encoder, _vars) = all_different(6, 5);
    assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
}

#[test]
fn all_different_assigns_distinct_values() {
    let (mut ctx, encoder, vars) = all_different(6, 6);
    assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

    let mut used = BTreeSet::new();
    for var in vars {
        // Each integer holds exactly one value…
        let value = encoder.value_of(&ctx, var).unwrap();
        assert_eq!(encoder.current_values(&ctx, var), vec![value]);
        // …and no two integers share one.
        assert!(used.insert(value));
    }
    assert_eq!(used.len(), 6);
}
