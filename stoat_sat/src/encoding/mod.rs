/*!
Encoding finite-domain integer variables over boolean atoms.

# Overview

An integer variable over the admissible values `v₁ < v₂ < … < vₖ` is represented by:

- One **one-hot** atom `xⱼ` per value, true exactly when the variable takes `vⱼ`.
- **Order** atoms `oⱼ`, true when the variable takes a value ≥ `vⱼ`. The indicator of
  the smallest value is trivially true and so omitted, and the indicator of the
  largest value coincides with its one-hot atom, so no fresh atom is made for either.

The emitted clauses:

- At least one `xⱼ` is true (a single clause over the one-hots).
- The order atoms decrease along j: each `oⱼ → oⱼ₋₁`.
- Each `xⱼ → oⱼ`, and each `xⱼ₋₁ → ¬oⱼ` --- together with the ordering these give at
  most one true `xⱼ`.

An empty value set emits the empty at-least-one clause, so the formula is
unsatisfiable at first propagation.

# Reading a model

[value_of](IntEncoder::value_of) returns the value of the unique true one-hot atom,
and errors when the model sets none, or more than one, of them.
*/

use std::collections::BTreeMap;

use crate::{
    context::GenericContext,
    procedures::decision::DecisionStrategy,
    structures::{atom::Atom, literal::CLiteral},
    types::err::EncodingError,
};

/// The greatest encodable value.
pub const MAX_VALUE: i32 = i32::MAX - 1;

/// A handle to an encoded integer variable.
pub type IntVar = usize;

/// The atoms representing one admissible value of a variable.
struct ValueAtoms {
    /// True iff the variable takes this value.
    one_hot: Atom,

    /// True if the variable takes a value ≥ this one.
    ///
    /// `None` for the smallest value, whose indicator is trivially true; for the
    /// largest value this is the one-hot atom itself.
    order: Option<Atom>,
}

/// An encoder mapping integer variables to one-hot boolean atoms in some context.
#[derive(Default)]
pub struct IntEncoder {
    vars: Vec<BTreeMap<i32, ValueAtoms>>,
}

impl IntEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes an integer variable over the given admissible values.
    ///
    /// Values are deduplicated and ordered; a value beyond [MAX_VALUE] is rejected at
    /// insertion.
    pub fn add_var<S: DecisionStrategy>(
        &mut self,
        ctx: &mut GenericContext<S>,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<IntVar, EncodingError> {
        let mut domain = Vec::new();
        for value in values {
            if value > MAX_VALUE {
                return Err(EncodingError::ValueTooLarge(value));
            }
            domain.push(value);
        }
        domain.sort_unstable();
        domain.dedup();

        let atoms = self.allocate_atoms(ctx, &domain);
        self.at_least_one(ctx, &atoms);
        self.values_are_ordered(ctx, &atoms);
        self.at_most_one(ctx, &atoms);

        self.vars.push(atoms);
        Ok(self.vars.len() - 1)
    }

    fn allocate_atoms<S: DecisionStrategy>(
        &mut self,
        ctx: &mut GenericContext<S>,
        domain: &[i32],
    ) -> BTreeMap<i32, ValueAtoms> {
        let mut atoms = BTreeMap::new();
        let (Some(&min), Some(&max)) = (domain.first(), domain.last()) else {
            return atoms;
        };
        for &value in domain {
            let one_hot = ctx.fresh_atom();
            let order = if value == max {
                Some(one_hot)
            } else if value != min {
                Some(ctx.fresh_atom())
            } else {
                None
            };
            atoms.insert(value, ValueAtoms { one_hot, order });
        }
        atoms
    }

    fn at_least_one<S: DecisionStrategy>(
        &self,
        ctx: &mut GenericContext<S>,
        atoms: &BTreeMap<i32, ValueAtoms>,
    ) {
        ctx.add_clause(
            atoms
                .values()
                .map(|value_atoms| CLiteral::new(value_atoms.one_hot, true))
                .collect::<Vec<_>>(),
        );
    }

    fn values_are_ordered<S: DecisionStrategy>(
        &self,
        ctx: &mut GenericContext<S>,
        atoms: &BTreeMap<i32, ValueAtoms>,
    ) {
        let mut previous_order = None;
        for value_atoms in atoms.values() {
            let Some(order) = value_atoms.order else {
                continue;
            };
            if let Some(previous) = previous_order {
                add_implies(ctx, order, previous);
            }
            previous_order = Some(order);
        }
    }

    fn at_most_one<S: DecisionStrategy>(
        &self,
        ctx: &mut GenericContext<S>,
        atoms: &BTreeMap<i32, ValueAtoms>,
    ) {
        let mut previous_one_hot: Option<Atom> = None;
        for value_atoms in atoms.values() {
            if let Some(order) = value_atoms.order {
                add_implies(ctx, value_atoms.one_hot, order);
                if let Some(previous) = previous_one_hot {
                    add_implies_not(ctx, previous, order);
                }
            }
            previous_one_hot = Some(value_atoms.one_hot);
        }
    }

    /// The one-hot atoms of every encoded variable.
    pub fn one_hot_atoms(&self) -> Vec<Atom> {
        self.vars
            .iter()
            .flat_map(|atoms| atoms.values().map(|value_atoms| value_atoms.one_hot))
            .collect()
    }

    /// The one-hot atom of a specific value of a variable, if the value is admissible.
    pub fn one_hot_atom(&self, var: IntVar, value: i32) -> Option<Atom> {
        self.vars[var]
            .get(&value)
            .map(|value_atoms| value_atoms.one_hot)
    }

    /// The values whose one-hot atoms are true on the current valuation.
    pub fn current_values<S: DecisionStrategy>(
        &self,
        ctx: &GenericContext<S>,
        var: IntVar,
    ) -> Vec<i32> {
        self.vars[var]
            .iter()
            .filter(|(_, value_atoms)| ctx.value_of(value_atoms.one_hot) == Some(true))
            .map(|(value, _)| *value)
            .collect()
    }

    /// The value of a variable in the model.
    ///
    /// Errors when the model sets none, or more than one, of the one-hot atoms.
    pub fn value_of<S: DecisionStrategy>(
        &self,
        ctx: &GenericContext<S>,
        var: IntVar,
    ) -> Result<i32, EncodingError> {
        let values = self.current_values(ctx, var);
        match values.as_slice() {
            [] => Err(EncodingError::NoValue),
            [value] => Ok(*value),
            _ => Err(EncodingError::MultipleValues),
        }
    }
}

fn add_implies<S: DecisionStrategy>(ctx: &mut GenericContext<S>, pre: Atom, post: Atom) {
    if pre == post {
        return;
    }
    ctx.add_clause([CLiteral::new(pre, false), CLiteral::new(post, true)]);
}

fn add_implies_not<S: DecisionStrategy>(ctx: &mut GenericContext<S>, pre: Atom, post: Atom) {
    ctx.add_clause([CLiteral::new(pre, false), CLiteral::new(post, false)]);
}
