//! Tokenizer and recursive-descent parser for infix formulas such as `cos(x)*exp(2*y)-3^x`.
//!
//! The entry point is [`parser::Parser`], which produces the span-carrying
//! [`parser::ast::Expr`] tree. Converting that tree into a symbolic expression is the job of
//! `formal-compute`.
//!
//! ```
//! use formal_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("cos(x) * cos(y) - sin(x) * sin(y)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..33);
//! ```

pub mod parser;
pub mod tokenizer;
