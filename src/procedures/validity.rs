/*!
Validity of a formula in conjunctive normal form, clause by clause.

Each conjunct of the formula is a clause, and a clause is valid exactly when it contains some atom both as a positive literal and as a negative literal.
A formula is valid if each of its clauses is valid (and it has at least one clause), see [Verdict](crate::reports::Verdict).

The literals of a clause, and the conjuncts of a formula, are collected with an explicit stack rather than by recursion.
So, the depth of the stack does not grow with the height of the formula.

A node within a clause which is neither a disjunction nor a literal means the formula is not in conjunctive normal form.
Such a node is logged as a warning, and otherwise ignored.

```rust
# use otter_cnf::procedures::validity::check_validity;
# use otter_cnf::reports::Verdict;
# use otter_cnf::structures::formula::Formula;
let formula: Formula = "((A + ~A) * (~B + (C + B)))".parse().unwrap();
let report = check_validity(&formula, 1024).unwrap();

assert_eq!(report.valid, 2);
assert_eq!(report.invalid, 0);
assert_eq!(report.verdict(), Verdict::Valid);
```
*/

use std::collections::HashSet;

use crate::{
    config::Capacity,
    misc::log::targets,
    reports::ValidityReport,
    structures::formula::Formula,
    types::err::{self},
};

/// Counts the valid and invalid clauses of `cnf`, with at most `capacity` literals to a clause.
pub fn check_validity(cnf: &Formula, capacity: Capacity) -> Result<ValidityReport, err::ResourceError> {
    let mut report = ValidityReport::default();
    let mut conjuncts = vec![cnf];

    while let Some(conjunct) = conjuncts.pop() {
        match conjunct {
            Formula::And(left, right) => {
                conjuncts.push(right);
                conjuncts.push(left);
            }

            clause => match clause_is_valid(clause, capacity)? {
                true => report.valid += 1,
                false => report.invalid += 1,
            },
        }
    }

    log::debug!(target: targets::VALIDITY, "{} valid and {} invalid clauses", report.valid, report.invalid);

    Ok(report)
}

/// Whether `clause` contains complementary literals.
pub fn clause_is_valid(clause: &Formula, capacity: Capacity) -> Result<bool, err::ResourceError> {
    let mut positive: HashSet<&str> = HashSet::default();
    let mut negative: HashSet<&str> = HashSet::default();
    let mut literal_count = 0;

    let mut frontier = vec![clause];

    while let Some(node) = frontier.pop() {
        let (atom, polarity) = match node {
            Formula::Atom(name) => (name.as_str(), true),

            Formula::Not(operand) => match operand.as_ref() {
                Formula::Atom(name) => (name.as_str(), false),
                other => {
                    log::warn!(target: targets::VALIDITY, "Negation of a non-atom in a clause: ~{other}");
                    continue;
                }
            },

            Formula::Or(left, right) => {
                frontier.push(right);
                frontier.push(left);
                continue;
            }

            other => {
                log::warn!(target: targets::VALIDITY, "Non-clausal '{}' in a clause: {other}", other.label());
                continue;
            }
        };

        literal_count += 1;
        if literal_count > capacity {
            log::error!(target: targets::VALIDITY, "Clause literal capacity of {capacity} exceeded");
            return Err(err::ResourceError::ClauseCapacity(capacity));
        }

        match polarity {
            true => positive.insert(atom),
            false => negative.insert(atom),
        };
    }

    Ok(!positive.is_disjoint(&negative))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Formula {
        text.parse().unwrap()
    }

    #[test]
    fn complementary_literals() {
        assert_eq!(clause_is_valid(&parse("(A + ~A)"), 8), Ok(true));
        assert_eq!(clause_is_valid(&parse("((B + ~A) + (C + A))"), 8), Ok(true));
    }

    #[test]
    fn no_complementary_literals() {
        assert_eq!(clause_is_valid(&parse("(A + ~B)"), 8), Ok(false));
        assert_eq!(clause_is_valid(&parse("~A"), 8), Ok(false));
        assert_eq!(clause_is_valid(&parse("(a + ~A)"), 8), Ok(false));
    }

    #[test]
    fn capacity() {
        assert_eq!(clause_is_valid(&parse("((A + B) + C)"), 3), Ok(false));
        assert_eq!(
            clause_is_valid(&parse("((A + B) + (C + D))"), 3),
            Err(err::ResourceError::ClauseCapacity(3))
        );
    }

    #[test]
    fn non_clausal_nodes_are_skipped() {
        assert_eq!(clause_is_valid(&parse("(~(A * B) + (A + ~A))"), 8), Ok(true));
        assert_eq!(clause_is_valid(&parse("(~(A + B) + C)"), 8), Ok(false));
    }

    #[test]
    fn counts() {
        let report = check_validity(&parse("(A * ~A)"), 8).unwrap();
        assert_eq!(report, ValidityReport { valid: 0, invalid: 2 });
    }
}
