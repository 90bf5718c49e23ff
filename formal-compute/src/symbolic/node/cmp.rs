//! Ordering and equality of [`Node`]s.
//!
//! [`Ord`] for [`Node`] is a total order used to sort the operands of commutative operators into
//! a canonical order. Nodes of different kinds are ordered `Binary < Unary < Variable <
//! Constant`; nodes of the same kind are ordered by operator, then by children from left to
//! right, then by value (with [`Node::UNDEFINED`] greater than every number), then by name.
//!
//! [`PartialEq`] and [`Eq`] are defined in terms of [`Ord`], so `UNDEFINED == UNDEFINED` and
//! `-0 == 0`.

use std::cmp::Ordering;
use super::{BinaryOp, Node};

/// Rank of each kind of node; lower ranks sort first.
fn kind_rank(node: &Node) -> u8 {
    match node {
        Node::Binary(..) => 0,
        Node::Unary(..) => 1,
        Node::Variable(_) => 2,
        Node::Constant(_) => 3,
    }
}

/// Compares two constant values. `NaN` is equal to itself and greater than every number.
fn cmp_values(lhs: f64, rhs: f64) -> Ordering {
    match (lhs.is_nan(), rhs.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Node::Binary(lhs_op, lhs_l, lhs_r), Node::Binary(rhs_op, rhs_l, rhs_r)) => lhs_op
                .cmp(rhs_op)
                .then_with(|| lhs_l.cmp(rhs_l))
                .then_with(|| lhs_r.cmp(rhs_r)),
            (Node::Unary(lhs_op, lhs), Node::Unary(rhs_op, rhs)) => lhs_op
                .cmp(rhs_op)
                .then_with(|| lhs.cmp(rhs)),
            (Node::Variable(lhs), Node::Variable(rhs)) => lhs.cmp(rhs),
            (Node::Constant(lhs), Node::Constant(rhs)) => cmp_values(*lhs, *rhs),
            _ => kind_rank(self).cmp(&kind_rank(other)),
        }
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

/// Collects the operands of a chain of `op` operations, looking through nested operations of the
/// same kind.
fn flatten<'a>(node: &'a Node, op: BinaryOp, out: &mut Vec<&'a Node>) {
    match node {
        Node::Binary(node_op, lhs, rhs) if *node_op == op => {
            flatten(lhs, op, out);
            flatten(rhs, op, out);
        },
        _ => out.push(node),
    }
}

/// Returns true if the two nodes are **certainly** equal, without simplifying either of them.
///
/// Two nodes are certainly equal if they are structurally equal, or if they are chains of
/// additions (or chains of multiplications) whose operands are certainly equal in some order. For
/// example, `x+(y+z)` and `(z+y)+x` are certainly equal.
///
/// This check is cheap and conservative: `false` means "not provably equal without
/// simplification", not "unequal". `x*2` and `2*x` are certainly equal, but `x+x` and `2*x` are
/// not.
pub fn is_equal_simple(lhs: &Node, rhs: &Node) -> bool {
    if lhs == rhs {
        return true;
    }

    match (lhs, rhs) {
        (Node::Binary(lhs_op, ..), Node::Binary(rhs_op, ..))
            if lhs_op == rhs_op && matches!(lhs_op, BinaryOp::Add | BinaryOp::Mul) =>
        {
            let mut lhs_operands = Vec::new();
            let mut rhs_operands = Vec::new();
            flatten(lhs, *lhs_op, &mut lhs_operands);
            flatten(rhs, *rhs_op, &mut rhs_operands);

            if lhs_operands.len() != rhs_operands.len() {
                return false;
            }

            // match every operand on the left with a distinct operand on the right
            let mut used = vec![false; rhs_operands.len()];
            lhs_operands.iter().all(|lhs_operand| {
                let found = rhs_operands.iter()
                    .enumerate()
                    .find(|(i, rhs_operand)| !used[*i] && is_equal_simple(lhs_operand, rhs_operand))
                    .map(|(i, _)| i);
                match found {
                    Some(i) => {
                        used[i] = true;
                        true
                    },
                    None => false,
                }
            })
        },
        (Node::Binary(lhs_op, lhs_l, lhs_r), Node::Binary(rhs_op, rhs_l, rhs_r)) => {
            lhs_op == rhs_op && is_equal_simple(lhs_l, rhs_l) && is_equal_simple(lhs_r, rhs_r)
        },
        (Node::Unary(lhs_op, lhs), Node::Unary(rhs_op, rhs)) => {
            lhs_op == rhs_op && is_equal_simple(lhs, rhs)
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Node {
        Node::variable(name)
    }

    #[test]
    fn kinds_are_ordered() {
        let binary = var("a") + var("b");
        let unary = var("a").cos();
        let variable = var("a");
        let constant = Node::ONE;

        assert!(binary < unary);
        assert!(unary < variable);
        assert!(variable < constant);
        assert!(binary < constant);
    }

    #[test]
    fn same_kind_ordering() {
        // operator first, then children
        assert!(var("z") + var("z") < var("a") - var("a"));
        assert!(var("a") * var("b") < var("a") * var("c"));
        assert!(var("a").cos() < var("a").sin());
        assert!(var("b").exp() < var("a").ln());
        assert!(var("x") < var("y"));
        assert!(var("X") < var("x"));
        assert!(Node::MINUS_ONE < Node::ZERO);
    }

    #[test]
    fn undefined_is_greatest_and_equal_to_itself() {
        assert_eq!(Node::UNDEFINED, Node::UNDEFINED);
        assert!(Node::constant(1e300) < Node::UNDEFINED);
        assert_eq!(Node::UNDEFINED.cmp(&Node::UNDEFINED), Ordering::Equal);
        assert_eq!(Node::Constant(-0.0), Node::ZERO);
    }

    #[test]
    fn sorting_is_canonical() {
        let mut nodes = vec![Node::TWO, var("y"), var("x").sin(), var("x") * var("y"), var("x")];
        nodes.sort();
        assert_eq!(nodes, vec![var("x") * var("y"), var("x").sin(), var("x"), var("y"), Node::TWO]);
    }

    #[test]
    fn commutative_chains() {
        let lhs = Node::sum([var("X"), var("Y"), var("Z")]);
        let rhs = Node::sum([var("Z"), var("Y"), var("X")]);
        assert!(is_equal_simple(&lhs, &rhs));

        let lhs = Node::sum([var("X"), var("Z"), var("Y"), var("Z")]);
        let rhs = Node::sum([var("Z"), var("X"), var("Y"), var("X")]);
        assert!(!is_equal_simple(&lhs, &rhs));

        let lhs = Node::sum([var("X"), var("Z"), var("Y"), var("Z"), var("X")]);
        let rhs = Node::sum([var("Z"), var("X"), var("Z"), var("Y"), var("X")]);
        assert!(is_equal_simple(&lhs, &rhs));

        let lhs = Node::product([var("a"), var("b").cos(), Node::TWO]);
        let rhs = Node::product([Node::TWO, var("a"), var("b").cos()]);
        assert!(is_equal_simple(&lhs, &rhs));
    }

    #[test]
    fn not_provably_equal() {
        // `x+x` is `2*x`, but proving it requires simplification
        assert!(!is_equal_simple(&(var("x") + var("x")), &(Node::TWO * var("x"))));

        // subtraction is not commutative
        assert!(!is_equal_simple(&(var("x") - var("y")), &(var("y") - var("x"))));

        // mixed chains are not flattened into each other
        assert!(!is_equal_simple(&(var("a") + var("b") * var("c")), &(var("a") * var("b") + var("c"))));
    }

    #[test]
    fn nested_commutative_operands() {
        let lhs = (var("a") + var("b")).cos() * var("c");
        let rhs = var("c") * (var("b") + var("a")).cos();
        assert!(is_equal_simple(&lhs, &rhs));
    }
}
