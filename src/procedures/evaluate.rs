/*!
Evaluation of a formula on a valuation.

Both operands of a binary operator are always evaluated, so an atom without a value is reported even when the value of the other operand would settle the result.

```rust
# use otter_cnf::structures::{formula::Formula, valuation::Valuation};
let formula: Formula = "(p > q)".parse().unwrap();
let valuation = Valuation::from_iter([("p", true), ("q", false)]);

assert_eq!(formula.evaluate(&valuation), Ok(false));
```
*/

use crate::{
    structures::{formula::Formula, valuation::Valuation},
    types::err::{self},
};

impl Formula {
    /// The value of the formula on `valuation`.
    pub fn evaluate(&self, valuation: &Valuation) -> Result<bool, err::EvaluationError> {
        match self {
            Self::Atom(name) => match valuation.value_of(name) {
                Some(value) => Ok(value),
                None => Err(err::EvaluationError::UndefinedVariable(name.clone())),
            },

            Self::Not(operand) => Ok(!operand.evaluate(valuation)?),

            Self::Or(left, right) => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Ok(left || right)
            }

            Self::And(left, right) => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Ok(left && right)
            }

            Self::Implies(left, right) => {
                let left = left.evaluate(valuation)?;
                let right = right.evaluate(valuation)?;
                Ok(!left || right)
            }
        }
    }
}
