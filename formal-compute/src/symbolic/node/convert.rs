//! Conversion from the [`Expr`] tree produced by `formal-parser` into a [`Node`].
//!
//! Conversion is lossy: spans and parentheses are dropped, reserved names are resolved to their
//! constants, and powers are desugared into the operators a [`Node`] supports.

use formal_parser::parser::{
    ast::{Binary, Expr, Literal, Unary},
    token::op::{BinOpKind, UnaryOpKind},
};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use super::{BinaryOp, Node, UnaryOp};

/// Exponents from `0` up to this value (exclusive) are desugared into repeated multiplication.
const MAX_REPEATED_POWER: f64 = 100.0;

/// Names that denote constants instead of variables.
static RESERVED: Lazy<HashMap<&'static str, Node>> = Lazy::new(|| HashMap::from([
    ("PI", Node::PI),
    ("E", Node::E),
    ("UNDEFINED", Node::UNDEFINED),
]));

/// Desugars `base^exponent`.
///
/// - `a^UNDEFINED = UNDEFINED`
/// - `a^0 = 1`
/// - `a^1 = a`
/// - `a^k = a*a*...*a` for an integer `k` from `2` to `99`
/// - `a^b = exp(b*ln(a))` otherwise
fn desugar_power(base: Node, exponent: Node) -> Node {
    if let Node::Constant(value) = exponent {
        if value.is_nan() {
            return Node::UNDEFINED;
        } else if value == 0.0 {
            return Node::ONE;
        } else if value == 1.0 {
            return base;
        } else if value.fract() == 0.0 && value > 0.0 && value < MAX_REPEATED_POWER {
            return base.repeated_product(value as usize);
        }
    }

    (exponent * base.ln()).exp()
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(num) => Node::constant(num.value),
            Literal::Symbol(sym) => RESERVED.get(sym.name.as_str())
                .cloned()
                .unwrap_or(Node::Variable(sym.name)),
        }
    }
}

impl From<Unary> for Node {
    fn from(unary: Unary) -> Self {
        let op = match unary.op.kind {
            UnaryOpKind::Neg => UnaryOp::Negate,
            UnaryOpKind::Exp => UnaryOp::Exp,
            UnaryOpKind::Ln => UnaryOp::Ln,
            UnaryOpKind::Cos => UnaryOp::Cos,
            UnaryOpKind::Sin => UnaryOp::Sin,
            UnaryOpKind::Tan => UnaryOp::Tan,
            UnaryOpKind::Percent => UnaryOp::Percent,
        };
        Node::unary(op, Node::from(*unary.operand))
    }
}

impl From<Binary> for Node {
    fn from(binary: Binary) -> Self {
        let lhs = Node::from(*binary.lhs);
        let rhs = Node::from(*binary.rhs);
        let op = match binary.op.kind {
            BinOpKind::Exp => return desugar_power(lhs, rhs),
            BinOpKind::Mul => BinaryOp::Mul,
            BinOpKind::Div => BinaryOp::Div,
            BinOpKind::Add => BinaryOp::Add,
            BinOpKind::Sub => BinaryOp::Sub,
        };
        Node::binary(op, lhs, rhs)
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        match expr {
            Expr::Literal(literal) => Node::from(literal),
            Expr::Paren(paren) => Node::from(paren.into_innermost()),
            Expr::Unary(unary) => Node::from(unary),
            Expr::Binary(binary) => Node::from(binary),
        }
    }
}
