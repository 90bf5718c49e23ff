//! Errors that can occur while evaluating a formula.

use ariadne::Fmt;
use formal_attrs::ErrorKind;
use formal_error::EXPR;

/// The variable has no value in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = if self.suggestions.is_empty() {
        format!("to define it, type: {} = {}", (&self.name).fg(EXPR), "<formula>".fg(EXPR))
    } else {
        format!("did you mean {}?", self.suggestions.join(", ").fg(EXPR))
    },
)]
pub struct UndefinedVariable {
    /// The name of the variable.
    pub name: String,

    /// The names of defined variables that are spelled similarly.
    pub suggestions: Vec<String>,
}
