/*!
Lexical tokens, and streams of tokens.

Formulas are written with the glyphs:

| Glyph | Token |
|-------|-------|
| `(`   | [Token::Open] |
| `)`   | [Token::Close] |
| `~`   | [Token::Not] |
| `+`   | [Token::Or] |
| `*`   | [Token::And] |
| `>`   | [Token::Implies] |

Any other token is an atom, named by a letter followed by any number of letters or digits.

Each token has a priority, used when [converting to prefix form](crate::parse::prefix):

| Token | Priority |
|-------|----------|
| atom  | 0 |
| `(`, `)` | 1 |
| `>`   | 2 |
| `+`   | 3 |
| `*`   | 4 |
| `~`   | 5 |
*/

/// The glyphs of operators and brackets.
pub mod glyph {
    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';
    pub const NOT: char = '~';
    pub const OR: char = '+';
    pub const AND: char = '*';
    pub const IMPLIES: char = '>';
}

/// The priority of a token.
pub type Priority = u8;

/// A lexical token.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Open,
    Close,
    Not,
    Or,
    And,
    Implies,
    Atom(String),
}

impl Token {
    /// The token of an operator or bracket glyph, if the character is one.
    pub fn from_glyph(character: char) -> Option<Self> {
        match character {
            glyph::OPEN => Some(Self::Open),
            glyph::CLOSE => Some(Self::Close),
            glyph::NOT => Some(Self::Not),
            glyph::OR => Some(Self::Or),
            glyph::AND => Some(Self::And),
            glyph::IMPLIES => Some(Self::Implies),
            _ => None,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Self::Atom(_) => 0,
            Self::Open | Self::Close => 1,
            Self::Implies => 2,
            Self::Or => 3,
            Self::And => 4,
            Self::Not => 5,
        }
    }

    /// The token with brackets swapped, and otherwise the token.
    pub fn mirrored(self) -> Self {
        match self {
            Self::Open => Self::Close,
            Self::Close => Self::Open,
            other => other,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "{}", glyph::OPEN),
            Self::Close => write!(f, "{}", glyph::CLOSE),
            Self::Not => write!(f, "{}", glyph::NOT),
            Self::Or => write!(f, "{}", glyph::OR),
            Self::And => write!(f, "{}", glyph::AND),
            Self::Implies => write!(f, "{}", glyph::IMPLIES),
            Self::Atom(name) => write!(f, "{name}"),
        }
    }
}

/// An ordered sequence of tokens, consumed once from left to right.
///
/// The cursor is the count of tokens consumed.
#[derive(Clone, Debug)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    cursor: usize,
}

impl TokenStream {
    /// The index of the next token to be consumed.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The count of tokens yet to be consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    /// The tokens yet to be consumed.
    pub fn as_slice(&self) -> &[Token] {
        self.tokens.as_slice()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            cursor: 0,
        }
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        self.cursor += 1;
        Some(token)
    }
}

/// The tokens yet to be consumed, separated by single spaces.
impl std::fmt::Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens = self.as_slice().iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}
