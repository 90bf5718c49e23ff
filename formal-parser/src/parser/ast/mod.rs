//! The abstract syntax tree produced by the [`Parser`](super::Parser).
//!
//! Every node remembers the region of the source it was parsed from, so later stages can point
//! at the offending part of the formula when reporting an error.

pub mod binary;
pub mod expr;
pub mod literal;
pub mod paren;
pub mod unary;

pub use binary::Binary;
pub use expr::{Expr, Primary};
pub use literal::{Literal, LitNum, LitSym};
pub use paren::Paren;
pub use unary::Unary;
