use crate::{
    parser::{
        ast::expr::{Expr, Primary},
        error::{Error, MissingArgument},
        token::op::{PostfixOp, PrefixOp, UnaryOp},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`, `ln x` or `(x + 1)%`.
///
/// Unary operators bind tighter than every binary operator, so `-x^2` is `(-x)^2` and `sin x*y` is
/// `sin(x)*y`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a primary expression followed by any number of postfix operators.
    fn parse_left_or_operand(input: &mut Parser) -> Result<Expr, Error> {
        let mut operand = Expr::from(input.try_parse::<Primary>()?);

        while let Ok(PostfixOp(op)) = input.try_parse::<PostfixOp>() {
            let start = operand.span().start;
            let end = op.span.end;
            operand = Expr::Unary(Self {
                operand: Box::new(operand),
                op,
                span: start..end,
            });
        }

        Ok(operand)
    }

    /// Parses a unary expression. If there is no prefix operator, the result is the primary
    /// expression (with its postfix operators, if any) instead.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let Ok(PrefixOp(op)) = input.try_parse::<PrefixOp>() else {
            return Self::parse_left_or_operand(input);
        };

        let missing = match input.peek_token() {
            None => true,
            Some(token) => token.kind.is_binary_only() || token.kind == TokenKind::CloseParen,
        };
        if missing {
            return Err(Error::new(vec![op.span.clone()], MissingArgument {
                keyword: op.kind.keyword().to_string(),
            }));
        }

        let operand = Self::parse_or_lower(input)?;
        let start = op.span.start;
        let end = operand.span().end;
        Ok(Expr::Unary(Self {
            operand: Box::new(operand),
            op,
            span: start..end,
        }))
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let PrefixOp(op) = input.try_parse::<PrefixOp>()?;
        let operand = Self::parse_or_lower(input)?;
        let span = op.span.start..operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span,
        })
    }
}
