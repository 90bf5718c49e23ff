//! Angle sum identities, applied to pairs of terms of a sum.

use crate::symbolic::{
    node::{Node, UnaryOp},
    step_collector::StepCollector,
};
use super::{product::Monomial, step::Step};

/// If the node is `op(arg)`, returns `arg`.
fn arg_of(node: &Node, op: UnaryOp) -> Option<&Node> {
    match node {
        Node::Unary(node_op, arg) if *node_op == op => Some(arg),
        _ => None,
    }
}

/// If the term is a product of exactly two functions `f(a)*g(b)` with no denominator, returns
/// `(a, b)`.
fn pair_args(term: &Monomial, f: UnaryOp, g: UnaryOp) -> Option<(&Node, &Node)> {
    if !term.denom.is_empty() {
        return None;
    }
    match term.numer.as_slice() {
        [lhs, rhs] => Some((arg_of(lhs, f)?, arg_of(rhs, g)?)),
        _ => None,
    }
}

/// Tries to merge the two terms into a single cosine or sine.
///
/// The terms must have coefficients of equal magnitude. Their factors are sorted, so a product
/// of a cosine and a sine always has the cosine first.
///
/// `k*cos(x)*cos(y) + k*sin(x)*sin(y) = k*cos(x-y)`
/// `k*cos(x)*cos(y) - k*sin(x)*sin(y) = k*cos(x+y)`
/// `k*cos(q)*sin(p) + k*cos(p)*sin(q) = k*sin(p+q)`
/// `k*cos(q)*sin(p) - k*cos(p)*sin(q) = k*sin(p-q)`
fn angle_sum(a: &Monomial, b: &Monomial) -> Option<(Monomial, Step)> {
    if a.coeff.abs() != b.coeff.abs() {
        return None;
    }
    let same_sign = a.coeff == b.coeff;

    let single = |node: Node| Monomial { coeff: a.coeff, numer: vec![node], denom: Vec::new() };

    if let (Some((x, y)), Some((u, v))) = (
        pair_args(a, UnaryOp::Cos, UnaryOp::Cos),
        pair_args(b, UnaryOp::Sin, UnaryOp::Sin),
    ) {
        if x == u && y == v {
            let (x, y) = (x.clone(), y.clone());
            let angle = if same_sign { x - y } else { x + y };
            return Some((single(angle.cos()), Step::CosineAngleSum));
        }
    }

    if let (Some((q, p)), Some((p2, q2))) = (
        pair_args(a, UnaryOp::Cos, UnaryOp::Sin),
        pair_args(b, UnaryOp::Cos, UnaryOp::Sin),
    ) {
        if p == p2 && q == q2 && p != q {
            let (p, q) = (p.clone(), q.clone());
            let angle = if same_sign { p + q } else { p - q };
            return Some((single(angle.sin()), Step::SineAngleSum));
        }
    }

    None
}

/// Repeatedly merges pairs of terms with the angle sum identities until no pair matches.
pub(crate) fn merge_angle_sums(terms: &mut Vec<Monomial>, step_collector: &mut dyn StepCollector<Step>) {
    'search: loop {
        for i in 0..terms.len() {
            for j in 0..terms.len() {
                if i == j {
                    continue;
                }

                if let Some((merged, step)) = angle_sum(&terms[i], &terms[j]) {
                    terms.remove(i.max(j));
                    terms.remove(i.min(j));
                    terms.push(merged);
                    step_collector.push(step);
                    continue 'search;
                }
            }
        }
        break;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Node {
        Node::variable(name)
    }

    fn term(coeff: f64, numer: Vec<Node>) -> Monomial {
        Monomial { coeff, numer, denom: Vec::new() }
    }

    #[test]
    fn cosine_of_difference_and_sum() {
        let (x, y) = (var("x"), var("y"));
        let mut terms = vec![
            term(1.0, vec![x.clone().cos(), y.clone().cos()]),
            term(1.0, vec![x.clone().sin(), y.clone().sin()]),
        ];
        merge_angle_sums(&mut terms, &mut ());
        assert_eq!(terms, vec![term(1.0, vec![(x.clone() - y.clone()).cos()])]);

        let mut terms = vec![
            term(-2.0, vec![x.clone().sin(), y.clone().sin()]),
            term(2.0, vec![x.clone().cos(), y.clone().cos()]),
        ];
        merge_angle_sums(&mut terms, &mut ());
        assert_eq!(terms, vec![term(2.0, vec![(x + y).cos()])]);
    }

    #[test]
    fn sine_of_sum_and_difference() {
        let (x, y) = (var("x"), var("y"));
        let mut terms = vec![
            term(1.0, vec![x.clone().cos(), y.clone().sin()]),
            term(1.0, vec![y.clone().cos(), x.clone().sin()]),
        ];
        merge_angle_sums(&mut terms, &mut ());
        assert_eq!(terms, vec![term(1.0, vec![(y.clone() + x.clone()).sin()])]);

        let mut terms = vec![
            term(1.0, vec![x.clone().cos(), y.clone().sin()]),
            term(-1.0, vec![y.clone().cos(), x.clone().sin()]),
        ];
        merge_angle_sums(&mut terms, &mut ());
        assert_eq!(terms, vec![term(1.0, vec![(y - x).sin()])]);
    }

    #[test]
    fn unrelated_terms_are_kept() {
        let (x, y) = (var("x"), var("y"));
        let original = vec![
            term(1.0, vec![x.clone().cos(), y.clone().cos()]),
            term(2.0, vec![x.clone().sin(), y.clone().sin()]),
            term(1.0, vec![x.clone().cos(), x.clone().sin()]),
        ];
        let mut terms = original.clone();
        merge_angle_sums(&mut terms, &mut ());
        assert_eq!(terms, original);
    }
}
