use super::node::Node;

/// Replaces every occurrence of the variable `name` in `node` with a copy of `replacement`.
///
/// The input is not modified; a new tree is returned. No simplification is done.
///
/// ```
/// use formal_compute::{parse, symbolic::substitute};
///
/// let node = parse("x*sin(x)+y").unwrap();
/// let replaced = substitute(&node, "x", &parse("a+1").unwrap());
/// assert_eq!(replaced.to_string(), "((a+1)*sin(a+1))+y");
/// ```
pub fn substitute(node: &Node, name: &str, replacement: &Node) -> Node {
    match node {
        Node::Variable(var) if var == name => replacement.clone(),
        Node::Constant(_) | Node::Variable(_) => node.clone(),
        Node::Unary(op, operand) => Node::unary(*op, substitute(operand, name, replacement)),
        Node::Binary(op, lhs, rhs) => Node::binary(
            *op,
            substitute(lhs, name, replacement),
            substitute(rhs, name, replacement),
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse, symbolic::simplify::simplify_to_fixpoint};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let node = parse("x+ln(y+E)-cos(sin(PI+z))*exp(tan(x))+x/z+exp(-y)").unwrap();
        let replaced = substitute(&node, "x", &Node::variable("a"));

        assert_eq!(
            simplify_to_fixpoint(&replaced),
            simplify_to_fixpoint(&parse("a+ln(y+E)-cos(sin(PI+z))*exp(tan(a))+a/z+exp(-y)").unwrap()),
        );

        let vars = simplify_to_fixpoint(&replaced).variables().into_iter().collect::<Vec<_>>();
        assert_eq!(vars, vec!["a", "y", "z"]);
    }

    #[test]
    fn input_is_untouched() {
        let node = parse("x*x").unwrap();
        let replaced = substitute(&node, "x", &Node::TWO);
        assert_eq!(node, parse("x*x").unwrap());
        assert_eq!(simplify_to_fixpoint(&replaced), Node::constant(4.0));
    }

    #[test]
    fn names_are_case_sensitive() {
        let node = parse("x+X").unwrap();
        let replaced = substitute(&node, "X", &Node::ONE);
        assert_eq!(replaced, Node::variable("x") + Node::ONE);
    }
}
