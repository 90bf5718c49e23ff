//! The kinds of errors that can occur while parsing a formula.

use ariadne::Fmt;
use formal_attrs::ErrorKind;
use formal_error::EXPR;
use crate::tokenizer::TokenKind;

pub use formal_error::Error;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of formula",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of formula",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that is not part of the formula language was used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator `{}`", operator),
    labels = ["this operator"],
    help = format!("the supported operators are {}", "+ - * / ^ %".fg(EXPR)),
)]
pub struct UnknownOperator {
    /// The operator that was found.
    pub operator: String,
}

/// A name that is not a function was called like a function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown function `{}`", name),
    labels = ["this function"],
    help = match suggestion {
        Some(suggestion) => format!("did you mean {}?", suggestion.fg(EXPR)),
        None => format!("the available functions are {}", "exp, ln, cos, sin, tan".fg(EXPR)),
    },
)]
pub struct UnknownFunction {
    /// The name that was called.
    pub name: String,

    /// The closest function name, if any is close enough.
    pub suggestion: Option<&'static str>,
}

/// A prefix operator was not followed by its argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument for `{}`", keyword),
    labels = [format!("add an {} after this", "argument".fg(EXPR))],
)]
pub struct MissingArgument {
    /// The operator keyword that is missing its argument.
    pub keyword: String,
}

/// A numeric literal could not be represented.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", lexeme),
    labels = ["here"],
)]
pub struct InvalidNumber {
    /// The literal as written.
    pub lexeme: String,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;
