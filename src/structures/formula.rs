/*!
Formulas, as parse trees.

A formula is either an atom, or an operator applied to one (negation) or two (disjunction, conjunction, implication) owned subformulas.
The shape of each node is fixed by its operator, and as each node owns its children a formula is never cyclic.

Formulas are displayed in fully parenthesized infix form, with a space either side of each binary operator:

```rust
# use otter_cnf::structures::formula::Formula;
let formula = Formula::implies(
    Formula::not(Formula::and(Formula::atom("A"), Formula::atom("B"))),
    Formula::atom("C"),
);

assert_eq!(formula.to_string(), "(~(A * B) > C)");
assert_eq!(formula.height(), 4);
assert_eq!(formula.atoms(), vec!["A", "B", "C"]);
```
*/

use std::collections::HashSet;

use crate::structures::token::glyph;

/// A formula, represented as a tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    Atom(String),
    Not(Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    pub fn not(operand: Formula) -> Self {
        Self::Not(Box::new(operand))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Self::Implies(Box::new(left), Box::new(right))
    }

    /// The label of the root: the glyph of an operator, or the name of an atom.
    pub fn label(&self) -> String {
        match self {
            Self::Atom(name) => name.clone(),
            Self::Not(_) => glyph::NOT.to_string(),
            Self::Or(_, _) => glyph::OR.to_string(),
            Self::And(_, _) => glyph::AND.to_string(),
            Self::Implies(_, _) => glyph::IMPLIES.to_string(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Atom(_))
    }

    /// Whether the formula is an atom, or the negation of an atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Self::Atom(_) => true,
            Self::Not(operand) => operand.is_leaf(),
            _ => false,
        }
    }

    /// The left and right children of the root.
    ///
    /// The sole operand of a negation is its right child.
    pub fn children(&self) -> (Option<&Formula>, Option<&Formula>) {
        match self {
            Self::Atom(_) => (None, None),
            Self::Not(operand) => (None, Some(operand.as_ref())),
            Self::Or(left, right) | Self::And(left, right) | Self::Implies(left, right) => {
                (Some(left.as_ref()), Some(right.as_ref()))
            }
        }
    }

    /// The count of nodes on the longest path from the root to a leaf.
    ///
    /// So, an atom has height 1.
    pub fn height(&self) -> usize {
        let (left, right) = self.children();
        let left_height = left.map_or(0, |left| left.height());
        let right_height = right.map_or(0, |right| right.height());
        1 + std::cmp::max(left_height, right_height)
    }

    /// The count of nodes in the formula.
    pub fn node_count(&self) -> usize {
        let (left, right) = self.children();
        1 + left.map_or(0, |left| left.node_count()) + right.map_or(0, |right| right.node_count())
    }

    /// The distinct atoms of the formula, in order of first occurrence from left to right.
    pub fn atoms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut atoms = Vec::new();
        self.collect_atoms(&mut seen, &mut atoms);
        atoms
    }

    fn collect_atoms<'f>(&'f self, seen: &mut HashSet<&'f str>, atoms: &mut Vec<&'f str>) {
        match self {
            Self::Atom(name) => {
                if seen.insert(name.as_str()) {
                    atoms.push(name.as_str());
                }
            }
            Self::Not(operand) => operand.collect_atoms(seen, atoms),
            Self::Or(left, right) | Self::And(left, right) | Self::Implies(left, right) => {
                left.collect_atoms(seen, atoms);
                right.collect_atoms(seen, atoms);
            }
        }
    }
}

/// In-order, with each binary operation wrapped in parentheses.
impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(name) => write!(f, "{name}"),
            Self::Not(operand) => write!(f, "{}{operand}", glyph::NOT),
            Self::Or(left, right) => write!(f, "({left} {} {right})", glyph::OR),
            Self::And(left, right) => write!(f, "({left} {} {right})", glyph::AND),
            Self::Implies(left, right) => write!(f, "({left} {} {right})", glyph::IMPLIES),
        }
    }
}
