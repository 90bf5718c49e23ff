//! Module to simplify symbolic formulas.
//!
//! This module provides the [`simplify`] function, which applies one bottom-up pass of rewriting
//! rules to a formula, and [`simplify_to_fixpoint`], which repeats passes until the formula stops
//! changing.
//!
//! Each pass first simplifies the children of a node, then normalizes the node itself:
//!
//! - `UNDEFINED` anywhere in the operands makes the node `UNDEFINED`.
//! - Chains of `+` and `-` are flattened, like terms are combined, and the terms are sorted
//!   with the constant first and the negative terms subtracted last (see [`sum`]).
//! - Chains of `*` and `/` are flattened into a coefficient, a numerator, and a denominator;
//!   common factors cancel, and the factors are sorted (see [`product`]).
//! - Unary functions fold constants, undo their inverse, and move negations out of odd
//!   functions (see [`unary`]).
//!
//! The fixpoint of two formulas that are equal under these rules is the same tree, which is what
//! [`equivalent`] checks.

mod product;
pub mod step;
mod sum;
mod trig;
mod unary;

use crate::symbolic::{
    node::{BinaryOp, Node},
    step_collector::StepCollector,
};
use step::Step;

/// The maximum number of passes [`simplify_to_fixpoint`] runs before giving up and returning the
/// result of the last pass.
pub const MAX_PASSES: usize = 256;

/// Base implementation of a single simplification pass.
fn simplify_pass(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match node {
        Node::Constant(value) => Node::constant(*value),
        Node::Variable(_) => node.clone(),
        Node::Unary(op, operand) => {
            let operand = simplify_pass(operand, step_collector);
            if operand.is_undefined() {
                step_collector.push(Step::PropagateUndefined);
                return Node::UNDEFINED;
            }
            unary::simplify_unary(*op, operand, step_collector)
        },
        Node::Binary(op, lhs, rhs) => {
            let lhs = simplify_pass(lhs, step_collector);
            let rhs = simplify_pass(rhs, step_collector);
            if lhs.is_undefined() || rhs.is_undefined() {
                step_collector.push(Step::PropagateUndefined);
                return Node::UNDEFINED;
            }

            let node = Node::binary(*op, lhs, rhs);
            match op {
                BinaryOp::Add | BinaryOp::Sub => sum::normalize(&node, step_collector),
                BinaryOp::Mul | BinaryOp::Div => product::normalize(&node, step_collector),
            }
        },
    }
}

/// Repeats simplification passes until a pass leaves the node unchanged, or until `max_passes`
/// passes have run. Returns the last result, and whether it is a fixpoint.
fn inner_simplify_to_fixpoint(
    node: &Node,
    max_passes: usize,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Node, bool) {
    let mut node = node.clone();
    for _ in 0..max_passes {
        let next = simplify_pass(&node, step_collector);
        if next == node {
            return (next, true);
        }
        node = next;
    }
    (node, false)
}

/// Applies a single simplification pass to the given node.
///
/// One pass is not always enough to reach the simplest form, since a rewrite can expose new
/// opportunities to its parent only on the next pass. Use [`simplify_to_fixpoint`] to simplify
/// completely.
pub fn simplify(node: &Node) -> Node {
    simplify_pass(node, &mut ())
}

/// Simplifies the given node until a pass leaves it unchanged, running at most [`MAX_PASSES`]
/// passes.
///
/// ```
/// use formal_compute::{parse, symbolic::simplify_to_fixpoint};
///
/// let node = parse("(5*x) - (x*2) + 1").unwrap();
/// assert_eq!(simplify_to_fixpoint(&node).to_string(), "1+(3*x)");
/// ```
pub fn simplify_to_fixpoint(node: &Node) -> Node {
    inner_simplify_to_fixpoint(node, MAX_PASSES, &mut ()).0
}

/// Simplifies the given node until a pass leaves it unchanged. Returns [`None`] if that does not
/// happen within `max_passes` passes.
pub fn simplify_within(node: &Node, max_passes: usize) -> Option<Node> {
    let (node, converged) = inner_simplify_to_fixpoint(node, max_passes, &mut ());
    converged.then_some(node)
}

/// Simplifies the given node to its fixpoint, like [`simplify_to_fixpoint`]. The steps taken by
/// the simplifier are also collected and returned, which is useful for debugging and for showing
/// the user how the result was obtained.
pub fn simplify_with_steps(node: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let node = inner_simplify_to_fixpoint(node, MAX_PASSES, &mut steps).0;
    (node, steps)
}

/// Returns true if the two nodes simplify to the same tree.
///
/// ```
/// use formal_compute::{parse, symbolic::equivalent};
///
/// let lhs = parse("ln(x) - ln(y)").unwrap();
/// let rhs = parse("ln(x/y)").unwrap();
/// assert!(equivalent(&lhs, &rhs));
/// ```
pub fn equivalent(lhs: &Node, rhs: &Node) -> bool {
    simplify_to_fixpoint(lhs) == simplify_to_fixpoint(rhs)
}
