//! Structs to help parse binary and unary operators.

use crate::{
    parser::{
        error::{Error, UnexpectedToken},
        Associativity,
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
    Exp,
    Ln,
    Cos,
    Sin,
    Tan,
    Percent,
}

impl UnaryOpKind {
    /// The names of the operators that are written as words.
    pub const KEYWORDS: [&'static str; 5] = ["exp", "ln", "cos", "sin", "tan"];

    /// Returns the operator written as the given word, if any.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "exp" => Some(Self::Exp),
            "ln" => Some(Self::Ln),
            "cos" => Some(Self::Cos),
            "sin" => Some(Self::Sin),
            "tan" => Some(Self::Tan),
            _ => None,
        }
    }

    /// Returns the symbol or keyword of the operator.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Cos => "cos",
            Self::Sin => "sin",
            Self::Tan => "tan",
            Self::Percent => "%",
        }
    }
}

/// A unary operator that takes one operand.
///
/// Every operator can be written before its operand. `%` can also be written after its operand,
/// in which case the operator is left-associative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnaryOp {
    /// The kind of unary operator.
    pub kind: UnaryOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

/// A unary operator written before its operand, such as `-` or `cos`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixOp(pub UnaryOp);

impl Parse for PrefixOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Sub => Some(UnaryOpKind::Neg),
            TokenKind::Percent => Some(UnaryOpKind::Percent),
            TokenKind::Name => UnaryOpKind::from_keyword(token.lexeme),
            _ => None,
        };

        match kind {
            Some(kind) => Ok(Self(UnaryOp { kind, span: token.span })),
            None => Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Sub, TokenKind::Percent, TokenKind::Name],
                found: token.kind,
            })),
        }
    }
}

/// A unary operator written after its operand; only `%`.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixOp(pub UnaryOp);

impl Parse for PostfixOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        if token.kind == TokenKind::Percent {
            Ok(Self(UnaryOp { kind: UnaryOpKind::Percent, span: token.span }))
        } else {
            Err(Error::new(vec![token.span], UnexpectedToken {
                expected: &[TokenKind::Percent],
                found: token.kind,
            }))
        }
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Exp => Precedence::Exp,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Mul | Self::Div | Self::Add | Self::Sub => Associativity::Left,
        }
    }

    /// Returns the symbol of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Exp => "^",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }
}

/// A binary operator that takes two operands.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinOp {
    /// The kind of binary operator.
    pub kind: BinOpKind,

    /// The region of the source code that this operator was parsed from.
    pub span: Range<usize>,
}

impl BinOp {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        self.kind.precedence()
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        self.kind.associativity()
    }
}

impl Parse for BinOp {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let kind = match token.kind {
            TokenKind::Exp => Ok(BinOpKind::Exp),
            TokenKind::Mul => Ok(BinOpKind::Mul),
            TokenKind::Div => Ok(BinOpKind::Div),
            TokenKind::Add => Ok(BinOpKind::Add),
            TokenKind::Sub => Ok(BinOpKind::Sub),
            _ => Err(Error::new(vec![token.span.clone()], UnexpectedToken {
                expected: &[
                    TokenKind::Exp,
                    TokenKind::Mul,
                    TokenKind::Div,
                    TokenKind::Add,
                    TokenKind::Sub,
                ],
                found: token.kind,
            })),
        }?;

        Ok(Self {
            kind,
            span: token.span,
        })
    }
}
