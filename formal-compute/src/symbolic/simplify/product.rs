//! Normal form of products and quotients.
//!
//! A chain of `*`, `/` and unary `-` is flattened into a [`Monomial`]: a numeric coefficient
//! times a list of numerator factors over a list of denominator factors. Factors that cancel
//! are removed, the remaining factors are sorted, and the chain is rebuilt left-leaning.

use crate::symbolic::{
    node::{is_equal_simple, BinaryOp, Node, UnaryOp},
    step_collector::StepCollector,
};
use super::step::Step;

/// A product of the form `coeff * (numer[0] * numer[1] * ...) / (denom[0] * denom[1] * ...)`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Monomial {
    /// The numeric coefficient.
    pub coeff: f64,

    /// The factors of the numerator; never constants.
    pub numer: Vec<Node>,

    /// The factors of the denominator; never constants.
    pub denom: Vec<Node>,
}

/// The parts of a product collected by [`Monomial::of`].
#[derive(Debug, Default)]
struct Factors {
    /// Product of the constants found in the numerator, including the sign of negations.
    numer_const: f64,

    /// Product of the constants found in the denominator.
    denom_const: f64,

    /// Number of constants found.
    constants: usize,

    numer: Vec<Node>,
    denom: Vec<Node>,
}

impl Factors {
    /// Collects the factors of `node` into `self`. If `invert` is true, the node is a divisor.
    fn collect(&mut self, node: &Node, invert: bool) {
        match node {
            Node::Binary(BinaryOp::Mul, lhs, rhs) => {
                self.collect(lhs, invert);
                self.collect(rhs, invert);
            },
            Node::Binary(BinaryOp::Div, lhs, rhs) => {
                self.collect(lhs, invert);
                self.collect(rhs, !invert);
            },
            Node::Unary(UnaryOp::Negate, operand) => {
                self.numer_const = -self.numer_const;
                self.collect(operand, invert);
            },
            Node::Constant(value) => {
                self.constants += 1;
                if invert {
                    self.denom_const *= value;
                } else {
                    self.numer_const *= value;
                }
            },
            _ => {
                if invert {
                    self.denom.push(node.clone());
                } else {
                    self.numer.push(node.clone());
                }
            },
        }
    }
}

impl Monomial {
    /// Flattens the node into a monomial, without rewriting any of its factors.
    ///
    /// Returns [`None`] if the coefficient is undefined, which happens when dividing by a constant
    /// zero.
    pub fn of(node: &Node) -> Option<Self> {
        Self::of_counted(node).map(|(monomial, _)| monomial)
    }

    /// Same as [`Monomial::of`], but also returns how many constants were folded into the
    /// coefficient.
    fn of_counted(node: &Node) -> Option<(Self, usize)> {
        let mut factors = Factors {
            numer_const: 1.0,
            denom_const: 1.0,
            ..Default::default()
        };
        factors.collect(node, false);

        if factors.denom_const == 0.0 {
            return None;
        }

        let coeff = factors.numer_const / factors.denom_const;
        if !coeff.is_finite() {
            return None;
        }

        Some((Self { coeff, numer: factors.numer, denom: factors.denom }, factors.constants))
    }

    /// Returns true if the monomial is a plain number.
    pub fn is_constant(&self) -> bool {
        self.numer.is_empty() && self.denom.is_empty()
    }

    /// Returns the same monomial with the opposite sign.
    pub fn negated(self) -> Self {
        Self { coeff: -self.coeff, ..self }
    }

    /// Rebuilds the node represented by this monomial, in the order the factors are stored.
    ///
    /// - `k` if there are no factors
    /// - `k*a*b` (or `a*b`, `-(a*b)` when `k` is `1` or `-1`) if there is no denominator
    /// - `k/(c*d)` if there is no numerator
    /// - `(k*a*b)/(c*d)` otherwise
    pub fn into_node(self) -> Node {
        let Self { coeff, numer, denom } = self;
        if numer.is_empty() && denom.is_empty() {
            return Node::constant(coeff);
        }

        let numerator = if numer.is_empty() {
            Node::constant(coeff)
        } else if coeff == 1.0 {
            Node::product(numer)
        } else if coeff == -1.0 {
            -Node::product(numer)
        } else {
            Node::product(std::iter::once(Node::constant(coeff)).chain(numer))
        };

        if denom.is_empty() {
            numerator
        } else {
            numerator / Node::product(denom)
        }
    }
}

/// Removes a factor from `denom` for every equal factor in `numer`.
///
/// `(a*b)/(b*c) = a/c`
fn cancel_common_factors(monomial: &mut Monomial, step_collector: &mut dyn StepCollector<Step>) {
    let mut cancelled = false;
    let mut i = 0;
    while i < monomial.numer.len() {
        let found = monomial.denom.iter()
            .position(|factor| is_equal_simple(&monomial.numer[i], factor));
        match found {
            Some(j) => {
                monomial.numer.remove(i);
                monomial.denom.remove(j);
                cancelled = true;
            },
            None => i += 1,
        }
    }

    if cancelled {
        step_collector.push(Step::CancelFactors);
    }
}

/// If `op(arg)` is in `factors`, returns its index.
fn find_unary(factors: &[Node], op: UnaryOp, arg: &Node) -> Option<usize> {
    factors.iter().position(|factor| match factor {
        Node::Unary(factor_op, factor_arg) => *factor_op == op && is_equal_simple(factor_arg, arg),
        _ => false,
    })
}

/// Replaces quotients of sines and cosines of the same argument with tangents.
///
/// `sin(a)/cos(a) = tan(a)`
/// `cos(a)/sin(a) = 1/tan(a)`
fn tangent_quotients(monomial: &mut Monomial, step_collector: &mut dyn StepCollector<Step>) {
    let mut i = 0;
    while i < monomial.numer.len() {
        let (inverse, arg) = match &monomial.numer[i] {
            Node::Unary(UnaryOp::Sin, arg) => (UnaryOp::Cos, (**arg).clone()),
            Node::Unary(UnaryOp::Cos, arg) => (UnaryOp::Sin, (**arg).clone()),
            _ => {
                i += 1;
                continue;
            },
        };

        let Some(j) = find_unary(&monomial.denom, inverse, &arg) else {
            i += 1;
            continue;
        };

        let sine_on_top = inverse == UnaryOp::Cos;
        monomial.numer.remove(i);
        monomial.denom.remove(j);
        if sine_on_top {
            monomial.numer.push(arg.tan());
        } else {
            monomial.denom.push(arg.tan());
        }
        step_collector.push(Step::TangentQuotient);
    }
}

/// Merges every exponential factor into a single exponential.
///
/// `exp(a)*exp(b) = exp(a+b)`
/// `exp(a)/exp(b) = exp(a-b)`
fn merge_exponentials(monomial: &mut Monomial, step_collector: &mut dyn StepCollector<Step>) {
    let is_exp = |factor: &Node| matches!(factor, Node::Unary(UnaryOp::Exp, _));
    let count = monomial.numer.iter().filter(|&factor| is_exp(factor)).count()
        + monomial.denom.iter().filter(|&factor| is_exp(factor)).count();
    if count < 2 {
        return;
    }

    let take_args = |factors: &mut Vec<Node>| {
        let (exps, rest): (Vec<_>, Vec<_>) = std::mem::take(factors).into_iter().partition(is_exp);
        *factors = rest;
        exps.into_iter()
            .filter_map(|factor| match factor {
                Node::Unary(_, arg) => Some(*arg),
                _ => None,
            })
            .collect::<Vec<_>>()
    };
    let added = take_args(&mut monomial.numer);
    let subtracted = take_args(&mut monomial.denom);

    let arg = if added.is_empty() {
        -Node::sum(subtracted)
    } else {
        subtracted.into_iter().fold(Node::sum(added), |acc, arg| acc - arg)
    };
    monomial.numer.push(arg.exp());
    step_collector.push(Step::MergeExponentials);
}

/// Normalizes a product, quotient, or negation whose operands are already simplified.
pub(crate) fn normalize(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    let Some((mut monomial, constants)) = Monomial::of_counted(node) else {
        step_collector.push(Step::Undefined);
        return Node::UNDEFINED;
    };

    if constants > 1 {
        step_collector.push(Step::FoldConstants);
    }

    if monomial.coeff == 0.0 {
        step_collector.push(Step::MultiplyZero);
        return Node::ZERO;
    }

    cancel_common_factors(&mut monomial, step_collector);
    tangent_quotients(&mut monomial, step_collector);
    merge_exponentials(&mut monomial, step_collector);

    monomial.numer.sort();
    monomial.denom.sort();
    monomial.into_node()
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
    fn flatten_into_monomial() {
        let monomial = Monomial::of(&parse("-(2*x)/(y*(-4))*z").unwrap()).unwrap();
        assert_eq!(monomial, Monomial {
            coeff: 0.5,
            numer: vec![var("x"), var("z")],
            denom: vec![var("y")],
        });
    }

    #[test]
    fn division_by_constant_zero() {
        assert_eq!(Monomial::of(&parse("x/0").unwrap()), None);
        assert!(normalized("x/(2*0)").is_undefined());
    }

    #[test]
    fn rebuild_shapes() {
        assert_eq!(normalized("3*2"), Node::constant(6.0));
        assert_eq!(normalized("y*x"), var("x") * var("y"));
        assert_eq!(normalized("y*(-x)"), -(var("x") * var("y")));
        assert_eq!(normalized("y*3*x"), (Node::constant(3.0) * var("x")) * var("y"));
        assert_eq!(normalized("2/x"), Node::TWO / var("x"));
        assert_eq!(normalized("(b*a)/(d*c)*2"), ((Node::TWO * var("a")) * var("b")) / (var("c") * var("d")));
    }

    #[test]
    fn cancel_and_keep_multiplicity() {
        assert_eq!(normalized("(x*x*y)/(x*z)"), (var("x") * var("y")) / var("z"));
        assert_eq!(normalized("(a*b)/(b*a)"), Node::ONE);
    }

    #[test]
    fn tangents() {
        assert_eq!(normalized("sin(x)/cos(x)"), var("x").tan());
        assert_eq!(normalized("cos(x)/sin(x)"), Node::ONE / var("x").tan());
        assert_eq!(normalized("(2*sin(x))/(y*cos(x))"), (Node::TWO * var("x").tan()) / var("y"));

        // different arguments
        assert_eq!(normalized("sin(x)/cos(y)"), var("x").sin() / var("y").cos());
    }

    #[test]
    fn exponentials() {
        assert_eq!(normalized("exp(x)*exp(y)"), (var("x") + var("y")).exp());
        assert_eq!(normalized("exp(x)/exp(y)"), (var("x") - var("y")).exp());
        assert_eq!(normalized("1/(exp(x)*exp(y))"), (-(var("x") + var("y"))).exp());
        assert_eq!(normalized("exp(x)/exp(x)"), Node::ONE);
        assert_eq!(normalized("z*exp(x)"), var("x").exp() * var("z"));
    }
}
