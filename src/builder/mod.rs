/*!
Tools for building a formula from some source other than formula text.

For the moment this is limited to [DIMACS](dimacs), where each clause is rendered as a parenthesized disjunction, and clauses are conjoined.
The rendered text is then parsed as any other formula, see [Context::read_dimacs](crate::context::Context::read_dimacs).

Note, the rendering of a clause (and of the conjunction of clauses) is not fully parenthesized.
Still, as each clause has a single operator the rendering is parsed as a right-nested chain, and the same is true of the conjunction.
*/

pub mod dimacs;
