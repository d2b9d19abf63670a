//! Tokenizer and parser for math expressions.
//!
//! The surface language is a small arithmetic grammar: `+`, `-`, `*`, `/`, right-associative
//! `**`, parentheses, numeric literals, free variables, and a fixed set of built-in function
//! names and constants recognized at lex time. Parsing produces the [`parser::ast::Expr`] tree
//! consumed by every downstream pass.
//!
//! ```
//! use fnx_parser::parse;
//!
//! let tree = parse("7 + 8 * 9").unwrap();
//! assert_eq!(tree.to_string(), "(7+(8*9))");
//! ```

pub mod parser;
pub mod registry;
pub mod tokenizer;

use fnx_error::Error;
use parser::ast::Expr;

/// Parses the given source into an expression tree, requiring all input to be consumed.
pub fn parse(source: &str) -> Result<Expr, Error> {
    parser::Parser::new(source)?.parse_full()
}
