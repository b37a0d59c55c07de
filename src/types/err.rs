//! Error types used in the library.
//!
//! Each stage of the pipeline has its own error enum, and each of these is wrapped by [ErrorKind].
//! Every error is terminal for the formula being processed --- nothing is retried, and no stage substitutes a default value for a failed result.
//!
//! The errors fall into the following families:
//! - Access to some input (or output) failed: [InputError].
//! - The input is malformed: [ParseError::TokenCapacity], [ParseError::DimacsLiteral], [BuildError::TrailingTokens], and [BuildError::Parenthesis].
//! - Parentheses are unbalanced: [ParseError::UnmatchedClose] and [ParseError::UnmatchedOpen].
//! - A prefix sequence is shorter than the arity of its operators demands: [BuildError::TruncatedPrefix].
//! - An atom has no value: [EvaluationError::UndefinedVariable].
//! - Some limit on resources was reached: [ResourceError].
//
//  Throughout the crate err::{self} is often used to prefix use of the types with `err::`.

/// The general error type, wrapping an error from some stage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Build(BuildError),
    Evaluation(EvaluationError),
    Input(InputError),
    Parse(ParseError),
    Resource(ResourceError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(e) => write!(f, "{e}"),
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::Input(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Resource(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when building a parse tree from a prefix sequence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The sequence ended while an operand was still expected.
    TruncatedPrefix,

    /// Tokens remained after the root of the tree was complete.
    TrailingTokens(usize),

    /// A parenthesis was found in a prefix sequence.
    Parenthesis,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TruncatedPrefix => write!(f, "Prefix sequence ended while an operand was expected."),
            Self::TrailingTokens(count) => {
                write!(f, "Malformed input: {count} token(s) left over after the formula.")
            }
            Self::Parenthesis => write!(f, "Malformed input: parenthesis in a prefix sequence."),
        }
    }
}

/// Errors during evaluation of a formula.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvaluationError {
    /// The atom has no value in the valuation used.
    UndefinedVariable(String),
}

impl From<EvaluationError> for ErrorKind {
    fn from(e: EvaluationError) -> Self {
        ErrorKind::Evaluation(e)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable(atom) => write!(f, "No value for the atom '{atom}'."),
        }
    }
}

/// Errors reading some input, or writing some output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputError {
    /// The source could not be opened.
    FailedToOpen(std::path::PathBuf),

    /// Reading failed at the given line.
    Line(usize),

    /// Writing to a sink failed.
    Sink,
}

impl From<InputError> for ErrorKind {
    fn from(e: InputError) -> Self {
        ErrorKind::Input(e)
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailedToOpen(path) => write!(f, "Failed to open {path:?}."),
            Self::Line(line) => write!(f, "Failed to read line {line}."),
            Self::Sink => write!(f, "Failed to write to the sink."),
        }
    }
}

/// Errors when tokenizing, converting to prefix form, or reading DIMACS.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// More tokens than the configured capacity.
    TokenCapacity(usize),

    /// A closing bracket with no open bracket to match, at the given token index of the infix sequence.
    UnmatchedClose(usize),

    /// An open bracket with no closing bracket to match, at the given token index of the infix sequence.
    UnmatchedOpen(usize),

    /// Some item of a DIMACS clause line which is not an integer, with the line number.
    DimacsLiteral(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenCapacity(capacity) => {
                write!(f, "Malformed input: more than {capacity} tokens.")
            }
            Self::UnmatchedClose(index) => {
                write!(f, "Unbalanced parentheses: unmatched ')' at token {index}.")
            }
            Self::UnmatchedOpen(index) => {
                write!(f, "Unbalanced parentheses: unmatched '(' at token {index}.")
            }
            Self::DimacsLiteral(line) => {
                write!(f, "Malformed input: invalid literal on DIMACS line {line}.")
            }
        }
    }
}

/// Some limit was reached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResourceError {
    /// A clause holds more literals than the configured capacity.
    ClauseCapacity(usize),

    /// A truth table over the given number of atoms was declined.
    TruthTableDeclined(usize),

    /// A truth table over the given number of atoms has more rows than can be indexed.
    TruthTableWidth(usize),
}

impl From<ResourceError> for ErrorKind {
    fn from(e: ResourceError) -> Self {
        ErrorKind::Resource(e)
    }
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClauseCapacity(capacity) => {
                write!(f, "Resource limit: a clause has more than {capacity} literals.")
            }
            Self::TruthTableDeclined(atoms) => {
                write!(f, "Resource limit: truth table over {atoms} atoms declined.")
            }
            Self::TruthTableWidth(atoms) => {
                write!(f, "Resource limit: truth table over {atoms} atoms is too wide.")
            }
        }
    }
}
