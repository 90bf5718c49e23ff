use crate::symbolic::node::{BinaryOp, Node, UnaryOp};
use formal_error::Error;
use super::{ctxt::Ctxt, error::UndefinedVariable};

/// Evaluates the node to a number, using the values of the variables in the context.
///
/// Nodes do not carry spans, so a returned [`Error`] has no spans attached. The caller may attach
/// the span of the formula it evaluated.
///
/// ```
/// use formal_compute::{numerical::{ctxt::Ctxt, eval::eval}, parse};
///
/// let mut ctxt = Ctxt::new();
/// ctxt.add_var("x", 3.0);
/// assert_eq!(eval(&parse("x*x + (50)%").unwrap(), &ctxt).unwrap(), 9.5);
/// ```
pub fn eval(node: &Node, ctxt: &Ctxt) -> Result<f64, Error> {
    let value = match node {
        Node::Constant(value) => *value,
        Node::Variable(name) => match ctxt.get_var(name) {
            Some(value) => value,
            None => return Err(Error::new(Vec::new(), UndefinedVariable {
                name: name.clone(),
                suggestions: ctxt.get_similar_vars(name)
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            })),
        },
        Node::Unary(op, operand) => {
            let operand = eval(operand, ctxt)?;
            match op {
                UnaryOp::Negate => -operand,
                UnaryOp::Exp => operand.exp(),
                UnaryOp::Ln => operand.ln(),
                UnaryOp::Cos => operand.cos(),
                UnaryOp::Sin => operand.sin(),
                UnaryOp::Tan => operand.tan(),
                UnaryOp::Percent => operand / 100.0,
            }
        },
        Node::Binary(op, lhs, rhs) => {
            let lhs = eval(lhs, ctxt)?;
            let rhs = eval(rhs, ctxt)?;
            match op {
                BinaryOp::Add => lhs + rhs,
                BinaryOp::Sub => lhs - rhs,
                BinaryOp::Mul => lhs * rhs,
                BinaryOp::Div => lhs / rhs,
            }
        },
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use crate::{numerical::error::UndefinedVariable, parse};
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval_str(input: &str, ctxt: &Ctxt) -> Result<f64, Error> {
        eval(&parse(input).unwrap(), ctxt)
    }

    #[test]
    fn arithmetic() {
        let ctxt = Ctxt::new();
        assert_eq!(eval_str("1+2*3", &ctxt).unwrap(), 7.0);
        assert_eq!(eval_str("(1+2)*3", &ctxt).unwrap(), 9.0);
        assert_eq!(eval_str("8/4/2", &ctxt).unwrap(), 1.0);
        assert_eq!(eval_str("2^10", &ctxt).unwrap(), 1024.0);
        assert_eq!(eval_str("-(3)%", &ctxt).unwrap(), -0.03);
    }

    #[test]
    fn transcendental() {
        let ctxt = Ctxt::new();
        assert_float_absolute_eq!(eval_str("cos(PI)", &ctxt).unwrap(), -1.0, 1e-12);
        assert_float_absolute_eq!(eval_str("ln(E)", &ctxt).unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(eval_str("exp(0)+sin(0)+tan(0)", &ctxt).unwrap(), 1.0, 1e-12);
        assert_float_absolute_eq!(eval_str("2^0.5", &ctxt).unwrap(), std::f64::consts::SQRT_2, 1e-12);
    }

    #[test]
    fn ieee_semantics() {
        let ctxt = Ctxt::new();
        assert!(eval_str("UNDEFINED", &ctxt).unwrap().is_nan());
        assert!(eval_str("ln(-1)", &ctxt).unwrap().is_nan());
        assert_eq!(eval_str("1/0", &ctxt).unwrap(), f64::INFINITY);
    }

    #[test]
    fn variables() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 0.5);
        ctxt.add_var("y", 4.0);
        assert_eq!(eval_str("x*y - y/x", &ctxt).unwrap(), -6.0);
    }

    #[test]
    fn undefined_variable() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x1", 1.0);

        let err = eval_str("x + 1", &ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>(), Some(&UndefinedVariable {
            name: "x".to_string(),
            suggestions: vec!["x1".to_string()],
        }));
        assert_eq!(err.to_string(), "`x` is not defined");
    }
}
