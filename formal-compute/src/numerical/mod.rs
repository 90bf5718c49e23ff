//! Numeric evaluation of formulas.
//!
//! Evaluation uses IEEE double arithmetic with no special handling: `1/0` evaluates to infinity,
//! `ln(-1)` and [`Node::UNDEFINED`](crate::symbolic::Node::UNDEFINED) evaluate to `NaN`. The only
//! error is a variable that has no value in the [`ctxt::Ctxt`].

pub mod ctxt;
pub mod error;
pub mod eval;
