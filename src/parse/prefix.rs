/*!
Conversion of a fully parenthesized infix sequence of tokens to prefix form.

# Method

The sequence is reversed, with each open bracket swapped for a closing bracket and vice versa.
The reversed sequence is then reduced to postfix form with a stack of operators and brackets:
- Atoms are moved directly to the output.
- Open brackets are pushed to the stack.
- On a closing bracket, operators are popped to the output until an open bracket is found, and the bracket is discarded.
- On an operator, any operators on top of the stack with priority at least that of the operator are popped to the output, and the operator is pushed.
  Popping stops at an open bracket.
- At the end of input the stack is popped to the output.

The reverse of the output is the prefix form of the original sequence.

Operators are popped on *equal* priority as well as greater, as on reversal this preserves the left-to-right order of operators in the original sequence.
For the same reason, a negation (having the highest priority) is always popped ahead of a binary operator.

Priorities are given in [structures::token](crate::structures::token).
The scale places brackets, negation, and binary operators on one scale, which is sound only as input is fully parenthesized.
Though, note a run of a single binary operator without brackets, such as `A + B + C`, is converted to a right-nested chain.

# Parentheses

Unbalanced parentheses are an error, in either direction:
- A closing bracket with no open bracket to match is a [ParseError::UnmatchedClose](err::ParseError::UnmatchedClose).
- An open bracket with no closing bracket to match is a [ParseError::UnmatchedOpen](err::ParseError::UnmatchedOpen).

In each case the index is of the bracket in the original (infix) sequence.

```rust
# use otter_cnf::parse::{prefix::infix_to_prefix, tokenize::tokenize};
let infix = tokenize("(A > B)", 16).unwrap();
let prefix = infix_to_prefix(infix).unwrap();

assert_eq!(prefix.to_string(), "> A B");
```
*/

use crate::{
    misc::log::targets,
    structures::token::{Token, TokenStream},
    types::err::{self},
};

/// Converts the fully parenthesized `infix` sequence to prefix form.
pub fn infix_to_prefix(infix: Vec<Token>) -> Result<TokenStream, err::ParseError> {
    let length = infix.len();
    let mut output: Vec<Token> = Vec::with_capacity(length);

    // Each stacked token is paired with its index in the infix sequence.
    let mut stack: Vec<(Token, usize)> = Vec::default();

    for (reverse_index, token) in infix.into_iter().rev().enumerate() {
        let index = length - 1 - reverse_index;

        match token.mirrored() {
            Token::Atom(name) => output.push(Token::Atom(name)),

            Token::Open => stack.push((Token::Open, index)),

            Token::Close => 'bracket_search: loop {
                match stack.pop() {
                    Some((Token::Open, _)) => break 'bracket_search,

                    Some((operator, _)) => output.push(operator),

                    None => {
                        // Mirrored, so the bracket is an open bracket in the infix sequence.
                        log::error!(target: targets::PREFIX, "Unmatched '(' at {index}");
                        return Err(err::ParseError::UnmatchedOpen(index));
                    }
                }
            },

            operator => {
                while let Some((top, _)) = stack.last() {
                    if *top == Token::Open || top.priority() < operator.priority() {
                        break;
                    }
                    if let Some((popped, _)) = stack.pop() {
                        output.push(popped);
                    }
                }
                stack.push((operator, index));
            }
        }
    }

    while let Some((token, index)) = stack.pop() {
        match token {
            Token::Open => {
                log::error!(target: targets::PREFIX, "Unmatched ')' at {index}");
                return Err(err::ParseError::UnmatchedClose(index));
            }
            operator => output.push(operator),
        }
    }

    output.reverse();
    log::trace!(target: targets::PREFIX, "Prefix of {} tokens", output.len());

    Ok(TokenStream::from(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokenize::tokenize;

    fn prefix_of(text: &str) -> Result<String, err::ParseError> {
        let infix = tokenize(text, 1024)?;
        infix_to_prefix(infix).map(|prefix| prefix.to_string())
    }

    #[test]
    fn implication() {
        assert_eq!(prefix_of("(A>B)"), Ok("> A B".to_string()));
    }

    #[test]
    fn nested() {
        assert_eq!(prefix_of("((A+B)*C)"), Ok("* + A B C".to_string()));
        assert_eq!(prefix_of("(A*(B+C))"), Ok("* A + B C".to_string()));
        assert_eq!(prefix_of("((A>B)>(C>D))"), Ok("> > A B > C D".to_string()));
    }

    #[test]
    fn negation() {
        assert_eq!(prefix_of("~A"), Ok("~ A".to_string()));
        assert_eq!(prefix_of("(~A * B)"), Ok("* ~ A B".to_string()));
        assert_eq!(prefix_of("(A * ~B)"), Ok("* A ~ B".to_string()));
        assert_eq!(prefix_of("~(A + B)"), Ok("~ + A B".to_string()));
        assert_eq!(prefix_of("~~A"), Ok("~ ~ A".to_string()));
        assert_eq!(prefix_of("(~~A > ~B)"), Ok("> ~ ~ A ~ B".to_string()));
    }

    #[test]
    fn lone_atom() {
        assert_eq!(prefix_of("A"), Ok("A".to_string()));
        assert_eq!(prefix_of("(A)"), Ok("A".to_string()));
    }

    #[test]
    fn unbracketed_runs() {
        assert_eq!(prefix_of("A + B + C"), Ok("+ A + B C".to_string()));
        assert_eq!(
            prefix_of("(x1 + ~x2) * (x2 + x3)"),
            Ok("* + x1 ~ x2 + x2 x3".to_string())
        );
    }

    #[test]
    fn unmatched_open() {
        assert_eq!(prefix_of("((A+B)"), Err(err::ParseError::UnmatchedOpen(0)));
        assert_eq!(prefix_of("(A+(B*C)"), Err(err::ParseError::UnmatchedOpen(0)));
    }

    #[test]
    fn unmatched_close() {
        assert_eq!(prefix_of("(A+B))"), Err(err::ParseError::UnmatchedClose(5)));
        assert_eq!(prefix_of("A)"), Err(err::ParseError::UnmatchedClose(1)));
    }

    #[test]
    fn reentrant() {
        let first = tokenize("(A>B)", 16).unwrap();
        let second = tokenize("(C*D)", 16).unwrap();
        let first = infix_to_prefix(first).unwrap();
        let second = infix_to_prefix(second).unwrap();
        assert_eq!(first.to_string(), "> A B");
        assert_eq!(second.to_string(), "* C D");
    }
}
