/*!
Normalization of a formula to conjunctive normal form.

Normalization is made of three passes, applied in order to a copy of the formula:
1. [Elimination of implications](eliminate_implications), with each implication A > B rewritten to ~A + B.
2. [Negation normal form](negation_normal_form), with each negation pushed to the atoms by De Morgan's laws, and each double negation removed.
3. [Distribution of disjunctions](distribute_disjunctions) over conjunctions, with A + (B * C) rewritten to (A + B) * (A + C), and (A * B) + C rewritten to (A + C) * (B + C).

Each pass consumes a formula and returns a new formula, and so no node is shared between the input and output of a pass.
The formula normalized is never modified.

The result is a conjunction of clauses, where each clause is a disjunction of literals.

```rust
# use otter_cnf::structures::formula::Formula;
let formula: Formula = "(A > (B * C))".parse().unwrap();

assert_eq!(formula.to_cnf().to_string(), "((~A + B) * (~A + C))");
```

# Blow-up

Distribution duplicates a disjunct for each conjunct it is distributed over, and so the size of the result may be exponential in the depth of nested conjunctions and disjunctions.
No attempt is made to bound the result, and no simplification is made.
For example, duplicate literals are kept.
The count of nodes before and after each pass is logged (at debug level) for the [cnf target](crate::misc::log::targets::CNF).
*/

use crate::{misc::log::targets, structures::formula::Formula};

impl Formula {
    /// The formula normalized to conjunctive normal form.
    pub fn to_cnf(&self) -> Formula {
        let formula = self.clone();
        log_size("input", &formula);

        let formula = eliminate_implications(formula);
        log_size("implication free", &formula);

        let formula = negation_normal_form(formula);
        log_size("negation normal form", &formula);

        let formula = distribute_disjunctions(formula);
        log_size("conjunctive normal form", &formula);

        formula
    }

    /// Whether the formula is in conjunctive normal form.
    ///
    /// That is, no conjunction is below a disjunction or a negation, every negation is of an atom, and there are no implications.
    pub fn is_cnf(&self) -> bool {
        match self {
            Self::And(left, right) => left.is_cnf() && right.is_cnf(),
            clause => clause.is_clause(),
        }
    }

    /// Whether the formula is a disjunction of literals.
    pub fn is_clause(&self) -> bool {
        match self {
            Self::Or(left, right) => left.is_clause() && right.is_clause(),
            literal => literal.is_literal(),
        }
    }
}

fn log_size(stage: &str, formula: &Formula) {
    if log::log_enabled!(target: targets::CNF, log::Level::Debug) {
        log::debug!(target: targets::CNF, "{stage}: {} nodes", formula.node_count());
    }
}

/// Rewrites each implication A > B to ~A + B, from the leaves up.
pub fn eliminate_implications(formula: Formula) -> Formula {
    match formula {
        Formula::Atom(name) => Formula::Atom(name),

        Formula::Not(operand) => Formula::not(eliminate_implications(*operand)),

        Formula::Or(left, right) => {
            Formula::or(eliminate_implications(*left), eliminate_implications(*right))
        }

        Formula::And(left, right) => {
            Formula::and(eliminate_implications(*left), eliminate_implications(*right))
        }

        Formula::Implies(left, right) => Formula::or(
            Formula::not(eliminate_implications(*left)),
            eliminate_implications(*right),
        ),
    }
}

/// Pushes each negation to the atoms.
///
/// - ~~A is rewritten to A.
/// - ~(A * B) is rewritten to ~A + ~B.
/// - ~(A + B) is rewritten to ~A * ~B.
///
/// Each rewrite is followed by normalization of the result, so chains of negations and nested rewrites are resolved in a single pass.
///
/// Implications are expected to have been eliminated, though any which remain are kept, and ~(A > B) is rewritten to A * ~B.
pub fn negation_normal_form(formula: Formula) -> Formula {
    match formula {
        Formula::Not(operand) => match *operand {
            Formula::Not(inner) => negation_normal_form(*inner),

            Formula::And(left, right) => Formula::or(
                negation_normal_form(Formula::Not(left)),
                negation_normal_form(Formula::Not(right)),
            ),

            Formula::Or(left, right) => Formula::and(
                negation_normal_form(Formula::Not(left)),
                negation_normal_form(Formula::Not(right)),
            ),

            Formula::Implies(left, right) => Formula::and(
                negation_normal_form(*left),
                negation_normal_form(Formula::Not(right)),
            ),

            Formula::Atom(name) => Formula::not(Formula::Atom(name)),
        },

        Formula::Atom(name) => Formula::Atom(name),

        Formula::Or(left, right) => {
            Formula::or(negation_normal_form(*left), negation_normal_form(*right))
        }

        Formula::And(left, right) => {
            Formula::and(negation_normal_form(*left), negation_normal_form(*right))
        }

        Formula::Implies(left, right) => {
            Formula::implies(negation_normal_form(*left), negation_normal_form(*right))
        }
    }
}

/// Distributes each disjunction over conjunctions, from the leaves up.
///
/// The formula is expected to be in negation normal form, without implications.
pub fn distribute_disjunctions(formula: Formula) -> Formula {
    match formula {
        Formula::Or(left, right) => {
            let left = distribute_disjunctions(*left);
            let right = distribute_disjunctions(*right);
            distribute_disjunction(left, right)
        }

        Formula::And(left, right) => Formula::and(
            distribute_disjunctions(*left),
            distribute_disjunctions(*right),
        ),

        Formula::Not(operand) => Formula::not(distribute_disjunctions(*operand)),

        Formula::Implies(left, right) => Formula::implies(
            distribute_disjunctions(*left),
            distribute_disjunctions(*right),
        ),

        Formula::Atom(name) => Formula::Atom(name),
    }
}

/// The disjunction of `left` and `right`, each already distributed, distributed over any conjunction at the root of either.
///
/// A conjunction on the right is distributed over first.
/// The disjunct distributed is copied into each conjunct, and each new disjunction is itself distributed.
fn distribute_disjunction(left: Formula, right: Formula) -> Formula {
    match (left, right) {
        (left, Formula::And(p, q)) => Formula::and(
            distribute_disjunction(left.clone(), *p),
            distribute_disjunction(left, *q),
        ),

        (Formula::And(p, q), right) => Formula::and(
            distribute_disjunction(*p, right.clone()),
            distribute_disjunction(*q, right),
        ),

        (left, right) => Formula::or(left, right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Formula {
        text.parse().unwrap()
    }

    #[test]
    fn implication_elimination() {
        let formula = eliminate_implications(parse("((A > B) > C)"));
        assert_eq!(formula.to_string(), "(~(~A + B) + C)");
    }

    #[test]
    fn double_negation() {
        assert_eq!(negation_normal_form(parse("~~~~A")), parse("A"));
        assert_eq!(negation_normal_form(parse("~~~A")), parse("~A"));
    }

    #[test]
    fn de_morgan() {
        let formula = negation_normal_form(parse("~(A * ~(B + ~C))"));
        assert_eq!(formula.to_string(), "(~A + (B + ~C))");
    }

    #[test]
    fn negated_implication() {
        let formula = negation_normal_form(parse("~(A > B)"));
        assert_eq!(formula.to_string(), "(A * ~B)");
    }

    #[test]
    fn right_distribution() {
        let formula = distribute_disjunctions(parse("(A + (B * C))"));
        assert_eq!(formula.to_string(), "((A + B) * (A + C))");
    }

    #[test]
    fn left_distribution() {
        let formula = distribute_disjunctions(parse("((A * B) + C)"));
        assert_eq!(formula.to_string(), "((A + C) * (B + C))");
    }

    #[test]
    fn right_first() {
        let formula = distribute_disjunctions(parse("((A * B) + (C * D))"));
        assert_eq!(
            formula.to_string(),
            "(((A + C) * (B + C)) * ((A + D) * (B + D)))"
        );
    }

    #[test]
    fn clauses_are_kept() {
        let formula = parse("((A + B) * ~C)");
        assert_eq!(distribute_disjunctions(formula.clone()), formula);
    }
}
