/*!
A (partial) function from atoms to truth values.

A valuation is built fresh for each row of a [truth table](crate::procedures::truth_table), and may be built by hand for [evaluation](crate::procedures::evaluate).

```rust
# use otter_cnf::structures::valuation::Valuation;
let mut valuation = Valuation::default();
valuation.set("p", true);

assert_eq!(valuation.value_of("p"), Some(true));
assert_eq!(valuation.value_of("q"), None);
```
*/

use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    values: HashMap<String, bool>,
}

impl Valuation {
    pub fn with_capacity(capacity: usize) -> Self {
        Valuation {
            values: HashMap::with_capacity(capacity),
        }
    }

    /// Sets the value of an atom, replacing any previous value.
    pub fn set(&mut self, atom: impl Into<String>, value: bool) {
        self.values.insert(atom.into(), value);
    }

    /// The value of the atom, if defined.
    pub fn value_of(&self, atom: &str) -> Option<bool> {
        self.values.get(atom).copied()
    }

    /// The count of atoms with a value.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Valuation {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Valuation {
            values: iter
                .into_iter()
                .map(|(atom, value)| (atom.into(), value))
                .collect(),
        }
    }
}
