/*!
Reports on a formula.
*/

/// Whether a formula in conjunctive normal form is valid, judged clause by clause.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Verdict {
    /// Every clause, of at least one, contains complementary literals.
    Valid,

    /// Some clause has no complementary literals, or there are no clauses.
    NotValid,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "VALID (a tautology)"),
            Self::NotValid => write!(f, "NOT VALID"),
        }
    }
}

/// Counts of valid and invalid clauses of a formula in conjunctive normal form.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct ValidityReport {
    /// The count of clauses with complementary literals.
    pub valid: usize,

    /// The count of clauses without complementary literals.
    pub invalid: usize,
}

impl ValidityReport {
    pub fn verdict(&self) -> Verdict {
        match self.invalid == 0 && self.valid > 0 {
            true => Verdict::Valid,
            false => Verdict::NotValid,
        }
    }
}
