use crate::{
    parser::{
        ast::expr::Expr,
        error::{EmptyParenthesis, Error, UnclosedParenthesis, UnexpectedToken, UnknownOperator},
        token::{CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression. A [`Paren`] can only contain a single expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this [`Paren`] was parsed from.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the innermost expression in the parenthesized expression, consuming the [`Paren`].
    pub fn into_innermost(self) -> Expr {
        let mut inner = self.expr;
        while let Expr::Paren(paren) = *inner {
            inner = paren.expr;
        }
        *inner
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.try_parse::<OpenParen>()?;

        if let Some(token) = input.peek_token() {
            if token.kind == TokenKind::CloseParen {
                return Err(Error::new(vec![token.span.clone()], EmptyParenthesis));
            }
        }

        let expr = input.try_parse::<Expr>()?;
        let close_paren = match input.try_parse::<CloseParen>() {
            Ok(close_paren) => close_paren,
            Err(_) => return Err(match input.peek_token() {
                None => Error::new(vec![open_paren.span], UnclosedParenthesis { opening: true }),
                Some(token) if token.kind == TokenKind::Symbol => Error::new(
                    vec![token.span.clone()],
                    UnknownOperator { operator: token.lexeme.to_owned() },
                ),
                Some(token) => Error::new(vec![token.span.clone()], UnexpectedToken {
                    expected: &[TokenKind::CloseParen],
                    found: token.kind,
                }),
            }),
        };

        Ok(Self {
            expr: Box::new(expr),
            span: open_paren.span.start..close_paren.span.end,
        })
    }
}
