/*!
Builds a [Formula] from a sequence of tokens in prefix form.

The sequence is read once, from left to right, and each recursive call returns an owned subtree:
- A negation is followed by exactly one operand.
- A binary operator is followed by its left operand, and then its right operand.
- An atom is a leaf.

The depth of recursion is the height of the tree.
The clauses of a DIMACS file are read as a right-nested chain, and so the height of such a tree follows the count of clauses, and a deep chain requires a thread with a large stack.

```rust
# use otter_cnf::parse::tree::build_tree;
# use otter_cnf::structures::{formula::Formula, token::{Token, TokenStream}};
let prefix = TokenStream::from(vec![
    Token::Implies,
    Token::Atom("A".to_string()),
    Token::Atom("B".to_string()),
]);

assert_eq!(
    build_tree(prefix),
    Ok(Formula::implies(Formula::atom("A"), Formula::atom("B")))
);
```
*/

use crate::{
    misc::log::targets,
    structures::{
        formula::Formula,
        token::{Token, TokenStream},
    },
    types::err::{self},
};

/// Builds the formula of the `prefix` sequence, requiring every token to be consumed.
pub fn build_tree(mut prefix: TokenStream) -> Result<Formula, err::BuildError> {
    let formula = build_subtree(&mut prefix)?;

    match prefix.remaining() {
        0 => Ok(formula),
        count => {
            log::error!(target: targets::TREE, "{count} tokens after token {}", prefix.cursor());
            Err(err::BuildError::TrailingTokens(count))
        }
    }
}

/// Builds the subtree rooted at the next token of the stream.
pub fn build_subtree(stream: &mut TokenStream) -> Result<Formula, err::BuildError> {
    let Some(token) = stream.next() else {
        log::error!(target: targets::TREE, "Operand expected at token {}", stream.cursor());
        return Err(err::BuildError::TruncatedPrefix);
    };

    match token {
        Token::Atom(name) => Ok(Formula::Atom(name)),

        Token::Not => Ok(Formula::not(build_subtree(stream)?)),

        Token::Or => {
            let left = build_subtree(stream)?;
            let right = build_subtree(stream)?;
            Ok(Formula::or(left, right))
        }

        Token::And => {
            let left = build_subtree(stream)?;
            let right = build_subtree(stream)?;
            Ok(Formula::and(left, right))
        }

        Token::Implies => {
            let left = build_subtree(stream)?;
            let right = build_subtree(stream)?;
            Ok(Formula::implies(left, right))
        }

        Token::Open | Token::Close => Err(err::BuildError::Parenthesis),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Token {
        Token::Atom(name.to_string())
    }

    #[test]
    fn leaf() {
        let prefix = TokenStream::from(vec![atom("A")]);
        assert_eq!(build_tree(prefix), Ok(Formula::atom("A")));
    }

    #[test]
    fn left_operand_first() {
        let prefix = TokenStream::from(vec![Token::Or, Token::Not, atom("A"), atom("B")]);
        assert_eq!(
            build_tree(prefix),
            Ok(Formula::or(Formula::not(Formula::atom("A")), Formula::atom("B")))
        );
    }

    #[test]
    fn truncated() {
        let prefix = TokenStream::from(vec![Token::And, atom("A")]);
        assert_eq!(build_tree(prefix), Err(err::BuildError::TruncatedPrefix));

        let prefix = TokenStream::from(vec![Token::Not]);
        assert_eq!(build_tree(prefix), Err(err::BuildError::TruncatedPrefix));

        assert_eq!(
            build_tree(TokenStream::from(Vec::default())),
            Err(err::BuildError::TruncatedPrefix)
        );
    }

    #[test]
    fn trailing() {
        let prefix = TokenStream::from(vec![atom("A"), atom("B"), atom("C")]);
        assert_eq!(build_tree(prefix), Err(err::BuildError::TrailingTokens(2)));
    }

    #[test]
    fn parenthesis() {
        let prefix = TokenStream::from(vec![Token::Not, Token::Open]);
        assert_eq!(build_tree(prefix), Err(err::BuildError::Parenthesis));
    }
}
