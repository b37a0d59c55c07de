/*!
Parsing of formula text to a [Formula].

Parsing happens in three stages:
1. The text is split into [tokens](tokenize).
2. The tokens are reordered into [prefix form](prefix).
3. A parse [tree] is built from the prefix sequence.

Each stage owns its own state, and so parsing is reentrant.

Input is required to be fully parenthesized.
That is, each binary operation is wrapped in its own parentheses, though parentheses around a negation or an atom are optional.

```rust
# use otter_cnf::structures::formula::Formula;
let formula: Formula = "((A > B) * ~C)".parse().unwrap();

assert_eq!(formula.to_string(), "((A > B) * ~C)");
assert_eq!(formula.height(), 3);
```
*/

pub mod prefix;
pub mod tokenize;
pub mod tree;

use crate::{
    config::Config,
    structures::{formula::Formula, token::TokenStream},
    types::err::ErrorKind,
};

/// The prefix form of `text`.
pub fn prefix_of(text: &str, config: &Config) -> Result<TokenStream, ErrorKind> {
    let infix = tokenize::tokenize(text, config.token_capacity.value)?;
    Ok(prefix::infix_to_prefix(infix)?)
}

/// Parses `text` to a formula.
pub fn parse(text: &str, config: &Config) -> Result<Formula, ErrorKind> {
    let prefix = prefix_of(text, config)?;
    Ok(tree::build_tree(prefix)?)
}

impl std::str::FromStr for Formula {
    type Err = ErrorKind;

    /// Parses with the default configuration.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text, &Config::default())
    }
}
