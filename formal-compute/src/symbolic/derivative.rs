//! Symbolic derivation.

use super::node::{BinaryOp, Node, UnaryOp};

/// Computes the derivative of the given node with respect to the variable `var`.
///
/// The result is built directly from the rules of calculus and is **not** simplified; callers
/// will usually pass it to [`simplify_to_fixpoint`](super::simplify_to_fixpoint). Derivation is
/// total: every node has a derivative, and `UNDEFINED` derives to `0` like any other constant.
///
/// ```
/// use formal_compute::{parse, symbolic::{derivative, simplify_to_fixpoint}};
///
/// let node = parse("sin(x)").unwrap();
/// assert_eq!(simplify_to_fixpoint(&derivative(&node, "x")), parse("cos(x)").unwrap());
/// ```
pub fn derivative(node: &Node, var: &str) -> Node {
    match node {
        Node::Constant(_) => Node::ZERO,
        Node::Variable(name) => {
            if name == var {
                Node::ONE
            } else {
                Node::ZERO
            }
        },
        Node::Unary(op, a) => {
            let da = derivative(a, var);
            let a = (**a).clone();
            match op {
                // (-a)' = -a'
                UnaryOp::Negate => -da,

                // exp(a)' = a' * exp(a)
                UnaryOp::Exp => da * a.exp(),

                // ln(a)' = a' / a
                UnaryOp::Ln => da / a,

                // cos(a)' = -(a' * sin(a))
                UnaryOp::Cos => -(da * a.sin()),

                // sin(a)' = a' * cos(a)
                UnaryOp::Sin => da * a.cos(),

                // tan(a)' = a' / (cos(a) * cos(a))
                UnaryOp::Tan => da / (a.clone().cos() * a.cos()),

                // ((a)%)' = (a')%
                UnaryOp::Percent => da.percent(),
            }
        },
        Node::Binary(op, a, b) => {
            let da = derivative(a, var);
            let db = derivative(b, var);
            let a = (**a).clone();
            let b = (**b).clone();
            match op {
                BinaryOp::Add => da + db,
                BinaryOp::Sub => da - db,

                // product rule
                BinaryOp::Mul => da * b + a * db,

                // quotient rule
                BinaryOp::Div => (da * b.clone() - a * db) / (b.clone() * b),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::{
        numerical::{ctxt::Ctxt, eval::eval},
        parse,
        symbolic::simplify::simplify_to_fixpoint,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    /// Derives the formula with respect to `x`, and simplifies the result.
    fn derive(input: &str) -> Node {
        simplify_to_fixpoint(&derivative(&parse(input).unwrap(), "x"))
    }

    /// Simplifies the formula.
    fn simplified(input: &str) -> Node {
        simplify_to_fixpoint(&parse(input).unwrap())
    }

    /// Checks the derivative of the formula against a central finite difference at several points.
    fn check_numerically(input: &str) {
        let node = parse(input).unwrap();
        let derived = simplify_to_fixpoint(&derivative(&node, "x"));
        let h = 1e-6;

        for x in [0.3, 0.7, 1.1, 1.9, 2.6] {
            let at = |x: f64| {
                let mut ctxt = Ctxt::new();
                ctxt.add_var("x", x);
                ctxt.add_var("y", 0.4);
                ctxt
            };
            let slope = (eval(&node, &at(x + h)).unwrap() - eval(&node, &at(x - h)).unwrap()) / (2.0 * h);
            let exact = eval(&derived, &at(x)).unwrap();
            assert_float_absolute_eq!(exact, slope, 1e-4);
        }
    }

    #[test]
    fn constants_and_variables() {
        assert_eq!(derive("x"), Node::ONE);
        assert_eq!(derive("y"), Node::ZERO);
        assert_eq!(derive("5"), Node::ZERO);
        assert_eq!(derive("PI"), Node::ZERO);
    }

    #[test]
    fn raw_rules() {
        let x = Node::variable("x");
        assert_eq!(derivative(&x.clone().sin(), "x"), Node::ONE * x.clone().cos());
        assert_eq!(derivative(&x.clone().ln(), "x"), Node::ONE / x.clone());
        assert_eq!(derivative(&x.clone().percent(), "x"), Node::ONE.percent());
        assert_eq!(derivative(&-x.clone(), "y"), -Node::ZERO);
        assert_eq!(
            derivative(&(x.clone() * x.clone()), "x"),
            Node::ONE * x.clone() + x.clone() * Node::ONE,
        );
    }

    #[test]
    fn input_is_untouched() {
        let node = parse("x*sin(x)").unwrap();
        let copy = node.clone();
        derivative(&node, "x");
        assert_eq!(node, copy);
    }

    #[test]
    fn trigonometric() {
        assert_eq!(derive("cos(x)"), simplified("-sin(x)"));
        assert_eq!(derive("sin(x)"), parse("cos(x)").unwrap());
        assert_eq!(derive("cos(x)+sin(x)"), parse("cos(x)-sin(x)").unwrap());
        assert_eq!(derive("sin(x)-cos(x)"), parse("cos(x)+sin(x)").unwrap());
        assert_eq!(derive("cos(x)*sin(x)"), parse("cos(2*x)").unwrap());
        assert_eq!(derive("sin(1+x)"), parse("cos(1+x)").unwrap());
        assert_eq!(derive("tan(x)"), simplified("1/(cos(x)*cos(x))"));
    }

    #[test]
    fn quotient() {
        assert_eq!(
            derive("sin(x)/sin(x+1)"),
            simplified("(cos(x)*sin(x+1)-cos(x+1)*sin(x))/(sin(x+1)*sin(x+1))"),
        );
    }

    #[test]
    fn products() {
        assert_eq!(derive("x*x"), Node::TWO * Node::variable("x"));
        assert_eq!(derive("x*x"), simplified("2*x"));
        assert_eq!(derive("x*x*x*x*x"), simplified("5*x*x*x*x"));
        assert_eq!(derive("x^3"), simplified("3*x*x"));
    }

    #[test]
    fn exponential_and_logarithm() {
        assert_eq!(derive("exp(x)"), parse("exp(x)").unwrap());
        assert_eq!(derive("exp(2*x)"), simplified("2*exp(2*x)"));
        assert_eq!(derive("ln(x)"), simplified("1/x"));
        assert_eq!(derive("ln(x*y)"), simplified("y/(x*y)"));
    }

    #[test]
    fn percent() {
        assert_eq!(derive("(x*y)%"), simplified("(y)%"));
    }

    #[test]
    fn finite_differences() {
        check_numerically("x*x*x - 2*x");
        check_numerically("sin(x)*cos(x)");
        check_numerically("exp(x*y)/ln(x+2)");
        check_numerically("tan(x/3)");
        check_numerically("x^2.5");
        check_numerically("sin(x)/sin(x+1)");
        check_numerically("(x - y)%");
        check_numerically("-cos(exp(-x))");
    }
}
