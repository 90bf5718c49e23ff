//! Symbolic manipulation of formulas.
//!
//! # Representation
//!
//! Formulas are represented as a tree of [`Node`]s: constants, variables, the unary operators
//! `- exp ln cos sin tan %` and the binary operators `+ - * /`. Unlike the
//! [`formal_parser::parser::ast::Expr`] tree, a [`Node`] carries no span information, and powers
//! do not exist: `a^b` is desugared into repeated multiplication or `exp(b*ln(a))` when the
//! formula is converted.
//!
//! ```
//! use formal_compute::{parse, symbolic::Node};
//!
//! let node = parse("x^2 + 1").unwrap();
//! assert_eq!(node, Node::variable("x") * Node::variable("x") + Node::ONE);
//! ```
//!
//! # Simplification
//!
//! [`simplify_to_fixpoint`] reduces a formula to a canonical form by applying [`simplify`]
//! passes until the tree stops changing. Two formulas that simplify to the same tree are
//! [`equivalent`]:
//!
//! ```
//! use formal_compute::{parse, symbolic::equivalent};
//!
//! let lhs = parse("cos(x)*cos(y) - sin(x)*sin(y)").unwrap();
//! let rhs = parse("cos(y + x)").unwrap();
//! assert!(equivalent(&lhs, &rhs));
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod node;
pub mod simplify;
pub mod step_collector;
pub mod substitute;

pub use derivative::derivative;
pub use node::{is_equal_simple, BinaryOp, Node, UnaryOp};
pub use simplify::{
    equivalent,
    simplify,
    simplify_to_fixpoint,
    simplify_with_steps,
    simplify_within,
    step::Step,
    MAX_PASSES,
};
pub use step_collector::StepCollector;
pub use substitute::substitute;
