/*!
Splits formula text into [tokens](Token).

Whitespace separates tokens, but is otherwise ignored.
So are any characters which are neither the glyph of an operator or bracket, nor part of an atom.
This allows text derived from files to contain stray artifacts without failing.

An atom is a letter followed by any number of letters or digits.
A digit which does not follow some letter of an atom is skipped.

```rust
# use otter_cnf::parse::tokenize::tokenize;
# use otter_cnf::structures::token::Token;
let tokens = tokenize("(x1 > ~ y)", 16).unwrap();

assert_eq!(
    tokens,
    vec![
        Token::Open,
        Token::Atom("x1".to_string()),
        Token::Implies,
        Token::Not,
        Token::Atom("y".to_string()),
        Token::Close,
    ]
);
```
*/

use crate::{
    config::Capacity,
    misc::log::targets,
    structures::token::Token,
    types::err::{self},
};

/// Splits `text` into tokens, failing if more than `capacity` tokens are found.
pub fn tokenize(text: &str, capacity: Capacity) -> Result<Vec<Token>, err::ParseError> {
    let mut tokens = Vec::default();
    let mut skipped = 0;
    let mut characters = text.char_indices().peekable();

    while let Some((start, character)) = characters.next() {
        let token = if let Some(token) = Token::from_glyph(character) {
            token
        } else if character.is_ascii_alphabetic() {
            let mut end = start + character.len_utf8();
            while let Some((index, next)) = characters.peek() {
                if !next.is_ascii_alphanumeric() {
                    break;
                }
                end = index + next.len_utf8();
                characters.next();
            }
            Token::Atom(text[start..end].to_string())
        } else {
            if !character.is_whitespace() {
                skipped += 1;
            }
            continue;
        };

        if tokens.len() == capacity {
            log::error!(target: targets::TOKENIZE, "Token capacity of {capacity} exceeded");
            return Err(err::ParseError::TokenCapacity(capacity));
        }
        tokens.push(token);
    }

    if skipped > 0 {
        log::info!(target: targets::TOKENIZE, "Skipped {skipped} unrecognised characters");
    }
    log::trace!(target: targets::TOKENIZE, "{} tokens", tokens.len());

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Token {
        Token::Atom(name.to_string())
    }

    #[test]
    fn glyphs() {
        let tokens = tokenize("()~+*>", 16).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Open,
                Token::Close,
                Token::Not,
                Token::Or,
                Token::And,
                Token::Implies,
            ]
        );
    }

    #[test]
    fn multi_character_atoms() {
        let tokens = tokenize("(Alpha2 * x12)", 16).unwrap();
        assert_eq!(tokens[1], atom("Alpha2"));
        assert_eq!(tokens[3], atom("x12"));
    }

    #[test]
    fn whitespace_is_ignored() {
        let spaced = tokenize(" ( A\t+\n B ) ", 16).unwrap();
        let compact = tokenize("(A+B)", 16).unwrap();
        assert_eq!(spaced, compact);
    }

    #[test]
    fn unrecognised_characters_are_skipped() {
        let tokens = tokenize("(A & 12 + $B)", 16).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Open, atom("A"), Token::Or, atom("B"), Token::Close]
        );
    }

    #[test]
    fn atoms_are_case_sensitive() {
        let tokens = tokenize("a A", 16).unwrap();
        assert_eq!(tokens, vec![atom("a"), atom("A")]);
    }

    #[test]
    fn capacity() {
        assert!(tokenize("(A+B)", 5).is_ok());
        assert_eq!(tokenize("(A+B)", 4), Err(err::ParseError::TokenCapacity(4)));
    }

    #[test]
    fn empty() {
        assert_eq!(tokenize("", 1), Ok(Vec::default()));
    }
}
