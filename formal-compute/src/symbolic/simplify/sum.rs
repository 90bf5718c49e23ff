//! Normal form of sums and differences.
//!
//! A chain of `+`, `-` and unary `-` is flattened into a constant and a list of signed
//! [`Monomial`] terms. Like terms are combined, logarithms and trigonometric products are merged,
//! and the chain is rebuilt with the positive terms first and the negative terms subtracted
//! after them.

use crate::symbolic::{
    node::{BinaryOp, Node, UnaryOp},
    step_collector::StepCollector,
};
use super::{product::Monomial, step::Step, trig};

/// Collects the signed terms of `node` into `terms`.
fn collect<'a>(node: &'a Node, sign: f64, terms: &mut Vec<(f64, &'a Node)>) {
    match node {
        Node::Binary(BinaryOp::Add, lhs, rhs) => {
            collect(lhs, sign, terms);
            collect(rhs, sign, terms);
        },
        Node::Binary(BinaryOp::Sub, lhs, rhs) => {
            collect(lhs, sign, terms);
            collect(rhs, -sign, terms);
        },
        Node::Unary(UnaryOp::Negate, operand) => collect(operand, -sign, terms),
        _ => terms.push((sign, node)),
    }
}

/// Merges terms that differ only by their coefficient.
///
/// `a+a = 2*a`
/// `5*a-2*a = 3*a`
fn combine_like_terms(terms: &mut Vec<Monomial>, step_collector: &mut dyn StepCollector<Step>) {
    terms.sort_by(|a, b| a.numer.cmp(&b.numer).then_with(|| a.denom.cmp(&b.denom)));

    let mut combined: Vec<Monomial> = Vec::with_capacity(terms.len());
    for term in terms.drain(..) {
        match combined.last_mut() {
            Some(last) if last.numer == term.numer && last.denom == term.denom => {
                last.coeff += term.coeff;
                step_collector.push(Step::CombineLikeTerms);
            },
            _ => combined.push(term),
        }
    }

    combined.retain(|term| term.coeff != 0.0);
    *terms = combined;
}

/// Returns true if the term is `ln(a)` or `-ln(a)`.
fn is_single_log(term: &Monomial) -> bool {
    term.coeff.abs() == 1.0
        && term.denom.is_empty()
        && matches!(term.numer.as_slice(), [Node::Unary(UnaryOp::Ln, _)])
}

/// Merges every `ln(a)` and `-ln(a)` term into a single logarithm.
///
/// `ln(a)+ln(b) = ln(a*b)`
/// `ln(a)-ln(b) = ln(a/b)`
/// `-ln(a)-ln(b) = -ln(a*b)`
fn merge_logarithms(terms: &mut Vec<Monomial>, step_collector: &mut dyn StepCollector<Step>) {
    if terms.iter().filter(|term| is_single_log(term)).count() < 2 {
        return;
    }

    let (logs, rest): (Vec<_>, Vec<_>) = std::mem::take(terms).into_iter().partition(is_single_log);
    *terms = rest;

    let mut positive = Vec::new();
    let mut negative = Vec::new();
    for log in logs {
        let positive_sign = log.coeff > 0.0;
        if let Some(Node::Unary(_, arg)) = log.numer.into_iter().next() {
            if positive_sign {
                positive.push(*arg);
            } else {
                negative.push(*arg);
            }
        }
    }

    let merged = if positive.is_empty() {
        Monomial { coeff: -1.0, numer: vec![Node::product(negative).ln()], denom: Vec::new() }
    } else if negative.is_empty() {
        Monomial { coeff: 1.0, numer: vec![Node::product(positive).ln()], denom: Vec::new() }
    } else {
        let quotient = Node::product(positive) / Node::product(negative);
        Monomial { coeff: 1.0, numer: vec![quotient.ln()], denom: Vec::new() }
    };
    terms.push(merged);
    step_collector.push(Step::MergeLogarithms);
}

/// Rebuilds the sum from its constant and terms.
///
/// The positive terms are added together from left to right, starting with the constant if it is
/// positive, and the negative terms are subtracted from the result in sorted order. If every term
/// is negative, the result is a single negated term, or the negation of the sum of the terms.
fn rebuild(constant: f64, terms: Vec<Monomial>) -> Node {
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    for term in terms {
        if term.coeff > 0.0 {
            positive.push(term.into_node());
        } else if term.coeff < 0.0 {
            let signed = term.clone().into_node();
            negative.push((term.negated().into_node(), signed));
        }
    }

    positive.sort();
    negative.sort_by(|(a, _), (b, _)| a.cmp(b));
    if constant > 0.0 {
        positive.insert(0, Node::constant(constant));
    } else if constant < 0.0 {
        negative.insert(0, (Node::constant(-constant), Node::constant(constant)));
    }

    if !positive.is_empty() {
        return negative.into_iter()
            .fold(Node::sum(positive), |acc, (magnitude, _)| acc - magnitude);
    }

    match negative.len() {
        0 => Node::ZERO,
        1 => negative.remove(0).1,
        _ => -Node::sum(negative.into_iter().map(|(magnitude, _)| magnitude)),
    }
}

/// Normalizes a sum, difference, or negated sum whose operands are already simplified.
pub(crate) fn normalize(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let mut signed = Vec::new();
    collect(node, 1.0, &mut signed);

    let mut constant = 0.0;
    let mut constants = 0;
    let mut terms = Vec::new();
    for (sign, term) in signed {
        let Some(mut monomial) = Monomial::of(term) else {
            step_collector.push(Step::Undefined);
            return Node::UNDEFINED;
        };
        monomial.coeff *= sign;

        if monomial.is_constant() {
            constant += monomial.coeff;
            constants += 1;
        } else {
            monomial.numer.sort();
            monomial.denom.sort();
            terms.push(monomial);
        }
    }

    if constants > 1 {
        step_collector.push(Step::FoldConstants);
    }

    combine_like_terms(&mut terms, step_collector);
    merge_logarithms(&mut terms, step_collector);
    trig::merge_angle_sums(&mut terms, step_collector);

    if !constant.is_finite() || terms.iter().any(|term| !term.coeff.is_finite()) {
        step_collector.push(Step::Undefined);
        return Node::UNDEFINED;
    }

    rebuild(constant, terms)
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Node {
        Node::variable(name)
    }

    fn normalized(input: &str) -> Node {
        normalize(&parse(input).unwrap(), &mut ())
    }

    #[test]
    fn constants_fold_first() {
        assert_eq!(normalized("1+2+3"), Node::constant(6.0));
        assert_eq!(normalized("x+1"), Node::ONE + var("x"));
        assert_eq!(normalized("x-1"), var("x") - Node::ONE);
        assert_eq!(normalized("3-x-5"), -(Node::TWO + var("x")));
        assert_eq!(normalized("1-1"), Node::ZERO);
    }

    #[test]
    fn like_terms() {
        assert_eq!(normalized("x+x"), Node::TWO * var("x"));
        assert_eq!(normalized("x-x"), Node::ZERO);
        assert_eq!(normalized("5*x*y - 2*y*x"), (Node::constant(3.0) * var("x")) * var("y"));
        assert_eq!(normalized("x/y + x/y"), (Node::TWO * var("x")) / var("y"));
    }

    #[test]
    fn negative_terms() {
        assert_eq!(normalized("y-x"), var("y") - var("x"));
        assert_eq!(normalized("-x+y"), var("y") - var("x"));
        assert_eq!(normalized("-x"), -var("x"));
        assert_eq!(normalized("-y-x"), -(var("x") + var("y")));
        assert_eq!(normalized("-(2*x)"), Node::constant(-2.0) * var("x"));
        assert_eq!(normalized("z-y-x"), (var("z") - var("x")) - var("y"));
    }

    #[test]
    fn logarithms() {
        assert_eq!(normalized("ln(x)+ln(y)"), (var("x") * var("y")).ln());
        assert_eq!(normalized("ln(x)-ln(y)"), (var("x") / var("y")).ln());
        assert_eq!(normalized("-ln(x)-ln(y)"), -(var("x") * var("y")).ln());

        // scaled logarithms are left alone
        assert_eq!(normalized("2*ln(x)+ln(y)"), (Node::TWO * var("x").ln()) + var("y").ln());
    }

    #[test]
    fn undefined_coefficients() {
        assert!(normalized("x + 1/0").is_undefined());

        let huge = Node::constant(f64::MAX);
        assert!(normalize(&(huge.clone() + huge), &mut ()).is_undefined());
    }
}
