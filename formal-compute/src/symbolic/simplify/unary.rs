//! Rules for unary operators.

use crate::symbolic::{
    node::{BinaryOp, Node, UnaryOp},
    step_collector::StepCollector,
};
use super::{product::{self, Monomial}, step::Step, sum};

/// Largest repetition count `k` for which `exp(k*ln(a))` is expanded into `a*a*...*a`.
const MAX_EXPANDED_POWER: f64 = 99.0;

/// If the node is the negation of a simpler node, returns that simpler node.
///
/// A node is negative if it is:
///
/// - a negation `-a`, or a negative constant
/// - a product or quotient with a negative coefficient
/// - a sum that sorts after its own negation, so that exactly one of `a-b` and `b-a` is negative
pub(crate) fn negative_form(node: &Node) -> Option<Node> {
    match node {
        Node::Unary(UnaryOp::Negate, operand) => Some((**operand).clone()),
        Node::Constant(value) if *value < 0.0 => Some(Node::constant(-value)),
        Node::Binary(BinaryOp::Mul | BinaryOp::Div, ..) => {
            let monomial = Monomial::of(node)?;
            (monomial.coeff < 0.0).then(|| monomial.negated().into_node())
        },
        Node::Binary(BinaryOp::Add | BinaryOp::Sub, ..) => {
            let negated = sum::normalize(&-node.clone(), &mut ());
            (negated < *node).then_some(negated)
        },
        _ => None,
    }
}

/// `-a`
fn negate(operand: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match operand {
        Node::Constant(value) => {
            step_collector.push(Step::FoldConstants);
            Node::constant(-value)
        },
        Node::Unary(UnaryOp::Negate, inner) => {
            step_collector.push(Step::DoubleNegation);
            *inner
        },
        Node::Binary(BinaryOp::Add | BinaryOp::Sub, ..) => sum::normalize(&-operand, step_collector),
        _ => product::normalize(&-operand, step_collector),
    }
}

/// `exp(a)`
fn exp(operand: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match operand {
        Node::Constant(value) => {
            step_collector.push(Step::FoldConstants);
            if value == 1.0 {
                Node::E
            } else {
                Node::constant(value.exp())
            }
        },
        Node::Unary(UnaryOp::Ln, inner) => {
            step_collector.push(Step::InverseFunctions);
            *inner
        },
        operand => {
            // exp(k*ln(a)) = a*a*...*a
            if let Some(Monomial { coeff, numer, denom }) = Monomial::of(&operand) {
                let is_count = coeff.fract() == 0.0 && (2.0..=MAX_EXPANDED_POWER).contains(&coeff);
                if let ([Node::Unary(UnaryOp::Ln, base)], true, true) = (numer.as_slice(), denom.is_empty(), is_count) {
                    step_collector.push(Step::PowerToProduct);
                    return (**base).clone().repeated_product(coeff as usize);
                }
            }
            operand.exp()
        },
    }
}

/// `ln(a)`
fn ln(operand: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match operand {
        Node::Constant(value) if value > 0.0 => {
            step_collector.push(Step::FoldConstants);
            if value == std::f64::consts::E {
                Node::ONE
            } else {
                Node::constant(value.ln())
            }
        },
        Node::Constant(_) => {
            step_collector.push(Step::Undefined);
            Node::UNDEFINED
        },
        Node::Unary(UnaryOp::Exp, inner) => {
            step_collector.push(Step::InverseFunctions);
            *inner
        },
        operand => operand.ln(),
    }
}

/// `cos(a)`, `sin(a)` and `tan(a)`
fn trig(op: UnaryOp, operand: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    if let Node::Constant(value) = operand {
        step_collector.push(Step::FoldConstants);
        return match op {
            UnaryOp::Cos if value == std::f64::consts::PI => Node::MINUS_ONE,
            UnaryOp::Cos => Node::constant(value.cos()),
            UnaryOp::Sin => Node::constant(value.sin()),
            _ => Node::constant(value.tan()),
        };
    }

    match negative_form(&operand) {
        Some(positive) if op == UnaryOp::Cos => {
            step_collector.push(Step::EvenFunction);
            positive.cos()
        },
        Some(positive) => {
            step_collector.push(Step::OddFunction);
            -Node::unary(op, positive)
        },
        None => Node::unary(op, operand),
    }
}

/// `(a)%`
fn percent(operand: Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    if operand.as_constant() == Some(0.0) {
        step_collector.push(Step::PercentOfZero);
        return Node::ZERO;
    }

    match negative_form(&operand) {
        Some(positive) => {
            step_collector.push(Step::OddFunction);
            -positive.percent()
        },
        None => operand.percent(),
    }
}

/// Simplifies `op(operand)`, where the operand is already simplified and not `UNDEFINED`.
pub(crate) fn simplify_unary(
    op: UnaryOp,
    operand: Node,
    step_collector: &mut dyn StepCollector<Step>,
) -> Node {
    match op {
        UnaryOp::Negate => negate(operand, step_collector),
        UnaryOp::Exp => exp(operand, step_collector),
        UnaryOp::Ln => ln(operand, step_collector),
        UnaryOp::Cos | UnaryOp::Sin | UnaryOp::Tan => trig(op, operand, step_collector),
        UnaryOp::Percent => percent(operand, step_collector),
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn var(name: &str) -> Node {
        Node::variable(name)
    }

    fn apply(op: UnaryOp, input: &str) -> Node {
        simplify_unary(op, parse(input).unwrap(), &mut ())
    }

    #[test]
    fn negative_forms() {
        assert_eq!(negative_form(&-var("x")), Some(var("x")));
        assert_eq!(negative_form(&Node::constant(-3.0)), Some(Node::constant(3.0)));
        assert_eq!(negative_form(&(Node::constant(-2.0) * var("x"))), Some(Node::TWO * var("x")));
        assert_eq!(negative_form(&(var("x") - var("y"))), None);
        assert_eq!(negative_form(&(var("y") - var("x"))), Some(var("x") - var("y")));
        assert_eq!(negative_form(&var("x")), None);
        assert_eq!(negative_form(&Node::TWO), None);
    }

    #[test]
    fn exponential() {
        assert_eq!(apply(UnaryOp::Exp, "0"), Node::ONE);
        assert_eq!(apply(UnaryOp::Exp, "1"), Node::E);
        assert_eq!(apply(UnaryOp::Exp, "ln(x)"), var("x"));
        assert_eq!(apply(UnaryOp::Exp, "3*ln(x)"), (var("x") * var("x")) * var("x"));
        assert_eq!(apply(UnaryOp::Exp, "0.5*ln(x)"), (Node::constant(0.5) * var("x").ln()).exp());
        assert_eq!(apply(UnaryOp::Exp, "x"), var("x").exp());
    }

    #[test]
    fn logarithm() {
        assert_eq!(apply(UnaryOp::Ln, "1"), Node::ZERO);
        assert_eq!(apply(UnaryOp::Ln, "E"), Node::ONE);
        assert!(apply(UnaryOp::Ln, "0").is_undefined());
        assert_eq!(simplify_unary(UnaryOp::Ln, Node::constant(-1.0), &mut ()), Node::UNDEFINED);
        assert_eq!(apply(UnaryOp::Ln, "exp(x)"), var("x"));
    }

    #[test]
    fn trigonometric() {
        assert_eq!(apply(UnaryOp::Cos, "0"), Node::ONE);
        assert_eq!(apply(UnaryOp::Cos, "PI"), Node::MINUS_ONE);
        assert_eq!(apply(UnaryOp::Sin, "0"), Node::ZERO);
        assert_eq!(apply(UnaryOp::Tan, "0"), Node::ZERO);
        assert_eq!(simplify_unary(UnaryOp::Cos, -var("x"), &mut ()), var("x").cos());
        assert_eq!(simplify_unary(UnaryOp::Sin, -var("x"), &mut ()), -var("x").sin());
        assert_eq!(simplify_unary(UnaryOp::Tan, var("y") - var("x"), &mut ()), -(var("x") - var("y")).tan());
    }

    #[test]
    fn negation() {
        assert_eq!(simplify_unary(UnaryOp::Negate, -var("x"), &mut ()), var("x"));
        assert_eq!(simplify_unary(UnaryOp::Negate, Node::TWO, &mut ()), Node::constant(-2.0));
        assert_eq!(simplify_unary(UnaryOp::Negate, var("x") - var("y"), &mut ()), var("y") - var("x"));
        assert_eq!(simplify_unary(UnaryOp::Negate, Node::TWO / var("x"), &mut ()), Node::constant(-2.0) / var("x"));
    }

    #[test]
    fn percent() {
        assert_eq!(simplify_unary(UnaryOp::Percent, Node::ZERO, &mut ()), Node::ZERO);
        assert_eq!(simplify_unary(UnaryOp::Percent, Node::constant(-5.0), &mut ()), -Node::constant(5.0).percent());
        assert_eq!(simplify_unary(UnaryOp::Percent, Node::constant(5.0), &mut ()), Node::constant(5.0).percent());
        assert_eq!(simplify_unary(UnaryOp::Percent, -var("x"), &mut ()), -var("x").percent());
    }

    #[test]
    fn steps_are_collected() {
        let mut steps = Vec::new();
        simplify_unary(UnaryOp::Cos, -var("x"), &mut steps);
        simplify_unary(UnaryOp::Exp, var("x").ln(), &mut steps);
        assert_eq!(steps, vec![Step::EvenFunction, Step::InverseFunctions]);
    }
}
