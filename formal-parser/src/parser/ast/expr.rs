use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal, paren::Paren, unary::Unary},
        error::{Error, UnclosedParenthesis, UnexpectedEof, UnexpectedToken, UnknownOperator},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression in a formula.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A unary operation, such as `-x`, `cos(x)` or `(x)%`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if let Some(token) = input.peek_token() {
            if token.kind == TokenKind::CloseParen {
                return Err(Error::new(vec![token.span.clone()], UnclosedParenthesis { opening: false }));
            }
        }

        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

/// An atom of a formula: a literal, or a parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression.
    Paren(Paren),
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some(token) = input.peek_token().cloned() else {
            return Err(Error::new(vec![input.eof_span()], UnexpectedEof));
        };

        match token.kind {
            TokenKind::Num | TokenKind::Name => input.try_parse().map(Primary::Literal),
            TokenKind::OpenParen => input.try_parse().map(Primary::Paren),
            TokenKind::Symbol => Err(Error::new(vec![token.span], UnknownOperator {
                operator: token.lexeme.to_owned(),
            })),
            found => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Num, TokenKind::Name, TokenKind::OpenParen],
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Expr::Literal(literal),
            Primary::Paren(paren) => Expr::Paren(paren),
        }
    }
}
