use std::fmt::{self, Display, Formatter};
use super::{Node, UnaryOp};

/// Writes an operand of a binary operation, parenthesizing it if it is itself a binary operation.
fn fmt_operand(f: &mut Formatter<'_>, operand: &Node) -> fmt::Result {
    match operand {
        Node::Binary(..) => write!(f, "({})", operand),
        _ => write!(f, "{}", operand),
    }
}

/// Renders the node as a formula that parses back into an equivalent node.
///
/// Reserved constants render by name (`PI`, `E`, `UNDEFINED`); other numbers use the shortest
/// representation that round-trips. Powers are never re-created: a node built from `x^3` renders
/// as `(x*x)*x`.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) if value.is_nan() => write!(f, "UNDEFINED"),
            Self::Constant(value) if *value == std::f64::consts::PI => write!(f, "PI"),
            Self::Constant(value) if *value == std::f64::consts::E => write!(f, "E"),
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Unary(UnaryOp::Percent, operand) => write!(f, "({})%", operand),
            Self::Unary(op, operand) => write!(f, "{}({})", op.name(), operand),
            Self::Binary(op, lhs, rhs) => {
                fmt_operand(f, lhs)?;
                write!(f, "{}", op.symbol())?;
                fmt_operand(f, rhs)
            },
        }
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
    fn constants() {
        assert_eq!(Node::constant(3.0).to_string(), "3");
        assert_eq!(Node::constant(-0.25).to_string(), "-0.25");
        assert_eq!(Node::PI.to_string(), "PI");
        assert_eq!(Node::E.to_string(), "E");
        assert_eq!(Node::UNDEFINED.to_string(), "UNDEFINED");
    }

    #[test]
    fn binary_operands_are_parenthesized() {
        let node = (var("x") + var("y")) * (var("z") - Node::ONE);
        assert_eq!(node.to_string(), "(x+y)*(z-1)");

        let node = var("x") / var("y").cos();
        assert_eq!(node.to_string(), "x/cos(y)");
    }

    #[test]
    fn unary_operators() {
        assert_eq!((-var("x")).to_string(), "-(x)");
        assert_eq!((var("x") + Node::TWO).ln().to_string(), "ln(x+2)");
        assert_eq!(var("x").percent().to_string(), "(x)%");
        assert_eq!((var("a") * (-var("b")).exp()).to_string(), "a*exp(-(b))");
    }
}
