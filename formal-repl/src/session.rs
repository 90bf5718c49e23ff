//! Line-by-line processing of calculator input.

use formal_compute::{
    numerical::{ctxt::Ctxt, eval::eval},
    parse,
    symbolic::{derivative, simplify_to_fixpoint, simplify_with_steps, Node},
};
use formal_error::Error;
use std::ops::Range;

/// Names that cannot be assigned to, because the parser gives them another meaning.
const RESERVED: [&str; 8] = ["PI", "E", "UNDEFINED", "exp", "ln", "cos", "sin", "tan"];

/// A single line of calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Print the simplified formula.
    Simplify(&'a str),

    /// Print the simplified derivative of the formula with respect to `x`. Written `@formula`.
    Derive(&'a str),

    /// Bind the value of the formula to a variable. Written `name = formula`.
    Assign {
        name: &'a str,
        formula: &'a str,
    },

    /// Quit the calculator.
    Exit,

    /// A blank line.
    Empty,
}

/// Returns true if the name can be assigned a value.
fn is_assignable(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !RESERVED.contains(&name)
}

impl<'a> Command<'a> {
    /// Reads the command written on the line.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if line == "exit" {
            return Self::Exit;
        }
        if let Some(formula) = line.strip_prefix('@') {
            return Self::Derive(formula.trim());
        }
        if let Some((name, formula)) = line.split_once('=') {
            let name = name.trim();
            if is_assignable(name) {
                return Self::Assign { name, formula: formula.trim() };
            }
        }
        Self::Simplify(line)
    }

    /// Returns the formula of the command, which error spans are relative to.
    pub fn formula(&self) -> &'a str {
        match self {
            Self::Simplify(formula) | Self::Derive(formula) | Self::Assign { formula, .. } => formula,
            Self::Exit | Self::Empty => "",
        }
    }
}

/// Finds the first occurrence of the variable `name` in the formula, as a whole word.
fn find_variable(formula: &str, name: &str) -> Option<Range<usize>> {
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    formula.match_indices(name)
        .map(|(start, _)| start..start + name.len())
        .find(|span| {
            !formula[..span.start].ends_with(is_word) && !formula[span.end..].starts_with(is_word)
        })
}

/// The state of the calculator between lines.
#[derive(Debug, Default)]
pub struct Session {
    /// Values assigned to variables so far.
    ctxt: Ctxt,

    /// Whether to print the simplification steps before each result.
    show_steps: bool,
}

impl Session {
    /// Creates a new session with no variables.
    pub fn new(show_steps: bool) -> Self {
        Self { ctxt: Ctxt::new(), show_steps }
    }

    /// Evaluates the node, pointing evaluation errors at the offending variable in the formula.
    fn eval(&self, node: &Node, formula: &str) -> Result<f64, Error> {
        eval(node, &self.ctxt).map_err(|mut err| {
            if err.spans.is_empty() {
                let variable = node.variables()
                    .into_iter()
                    .find(|name| self.ctxt.get_var(name).is_none());
                err.spans = variable
                    .and_then(|name| find_variable(formula, &name))
                    .into_iter()
                    .collect();
            }
            err
        })
    }

    /// Simplifies the node, adding the steps taken to `lines` if they are requested.
    fn simplify(&self, node: &Node, lines: &mut Vec<String>) -> Node {
        if self.show_steps {
            let (node, steps) = simplify_with_steps(node);
            lines.extend(steps.iter().map(|step| format!("  {:?}", step)));
            node
        } else {
            simplify_to_fixpoint(node)
        }
    }

    /// Runs the command, returning the lines to print.
    pub fn execute(&mut self, command: &Command) -> Result<Vec<String>, Error> {
        let mut lines = Vec::new();
        match *command {
            Command::Simplify(formula) | Command::Derive(formula) => {
                let mut node = parse(formula)?;
                if let Command::Derive(_) = command {
                    node = derivative(&node, "x");
                }
                let node = self.simplify(&node, &mut lines);
                lines.push(node.to_string());

                // print the value too, if it is known
                let vars = node.variables();
                if !vars.is_empty() && vars.iter().all(|name| self.ctxt.get_var(name).is_some()) {
                    let value = self.eval(&node, formula)?;
                    lines.push(format!("= {}", Node::constant(value)));
                }
            },
            Command::Assign { name, formula } => {
                let node = self.simplify(&parse(formula)?, &mut lines);
                let value = self.eval(&node, formula)?;
                self.ctxt.add_var(name, value);
                lines.push(format!("{} = {}", name, Node::constant(value)));
            },
            Command::Exit | Command::Empty => (),
        }
        Ok(lines)
    }
}
