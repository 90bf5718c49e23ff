use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    token::op::BinOp,
    Associativity,
    Parser,
    Precedence,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand side and operator of a binary expression, parse the right-hand
    /// side of the binary expression, absorbing any following operators that bind tighter than
    /// `op`.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            let start = input.cursor;
            let next = input.try_parse::<BinOp>();
            input.cursor = start;

            let Ok(next) = next else {
                break;
            };

            let binds_tighter = next.precedence() > precedence
                || (next.precedence() == precedence && next.associativity() == Associativity::Right);
            if binds_tighter {
                rhs = Self::parse_expr(input, rhs, next.precedence())?;
            } else {
                break;
            }
        }

        let start_span = lhs.span().start;
        let end_span = rhs.span().end;
        Ok(Expr::Binary(Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span: start_span..end_span,
        }))
    }

    /// Parses a binary expression with the given left-hand side, consuming every operator whose
    /// precedence is at least `precedence`.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let start = input.cursor;
            let op = match input.try_parse::<BinOp>() {
                Ok(op) if op.precedence() >= precedence => op,
                _ => {
                    input.cursor = start;
                    break;
                },
            };

            let rhs = Unary::parse_or_lower(input)?;
            lhs = Self::complete_rhs(input, lhs, op, rhs)?;
        }

        Ok(lhs)
    }
}
