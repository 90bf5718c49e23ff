//! Symbolic manipulation of real-valued formulas: derivation, simplification and numeric
//! evaluation.
//!
//! Formulas are parsed by `formal-parser` and converted into the [`symbolic::Node`] tree with
//! [`parse`]. Everything else in this crate operates on that tree.
//!
//! ```
//! use formal_compute::{parse, symbolic::{derivative, simplify_to_fixpoint}};
//!
//! let node = parse("x*x").unwrap();
//! let derived = simplify_to_fixpoint(&derivative(&node, "x"));
//! assert_eq!(derived.to_string(), "2*x");
//! ```

pub mod numerical;
pub mod symbolic;

use formal_error::Error;
use formal_parser::parser::{ast::Expr, Parser};
use symbolic::Node;

/// Parses a formula into a [`Node`].
///
/// Powers are desugared during parsing (see [`Node`] for details), so the returned tree only
/// contains the operators a [`Node`] supports.
pub fn parse(input: &str) -> Result<Node, Error> {
    let expr = Parser::new(input).try_parse_full::<Expr>()?;
    Ok(Node::from(expr))
}
