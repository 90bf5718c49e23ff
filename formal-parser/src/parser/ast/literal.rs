use crate::{
    parser::{
        error::{Error, InvalidNumber, UnknownFunction},
        token::{op::UnaryOpKind, Name, Num},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use levenshtein::levenshtein;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the operator keyword closest to the given name, if it is close enough to be a likely
/// typo.
fn similar_keyword(name: &str) -> Option<&'static str> {
    UnaryOpKind::KEYWORDS
        .iter()
        .map(|keyword| (levenshtein(name, keyword), *keyword))
        .filter(|(distance, _)| *distance < 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, keyword)| keyword)
}

/// A decimal number literal, such as `2` or `3.14`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let num = input.try_parse::<Num>()?;
        match num.lexeme.parse::<f64>() {
            Ok(value) => Ok(Self { value, span: num.span }),
            Err(_) => Err(Error::new(vec![num.span], InvalidNumber { lexeme: num.lexeme })),
        }
    }
}

/// A name, such as `x` or `PI`.
///
/// Names are not interpreted by the parser; reserved names such as `PI` and `E` are resolved
/// when the tree is converted into a symbolic expression.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<Name>()?;

        // a name directly followed by `(` is an attempt to call a function that does not exist;
        // the known functions are parsed as prefix operators before reaching this point
        if matches!(input.current_token(), Some(token) if token.kind == TokenKind::OpenParen) {
            return Err(Error::new(vec![name.span], UnknownFunction {
                suggestion: similar_keyword(&name.lexeme),
                name: name.lexeme,
            }));
        }

        Ok(Self { name: name.lexeme, span: name.span })
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A name.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(sym) => sym.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.peek_token().map(|token| token.kind) {
            Some(TokenKind::Name) => input.try_parse().map(Literal::Symbol),
            _ => input.try_parse().map(Literal::Number),
        }
    }
}
