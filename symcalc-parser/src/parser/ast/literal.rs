use std::ops::Range;
use crate::parser::{error::{Error, UnexpectedToken}, Parse, Parser};
use crate::tokenizer::TokenKind;

/// A number literal, such as `16` or `2.5`.
///
/// The digits are kept exactly as written, so that consumers can convert them to an exact
/// representation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Literal {
    /// The digits of the number, with at most one `.`.
    pub value: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Literal {
    /// Returns true if the literal was written without a decimal point.
    pub fn is_integer(&self) -> bool {
        !self.value.contains('.')
    }

    /// Splits the literal into its integer digits and its fractional digits. Either may be empty,
    /// as in `7.`.
    pub fn digits(&self) -> (&str, &str) {
        self.value.split_once('.').unwrap_or((&self.value, ""))
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Int | TokenKind::Float => Ok(Self {
                value: token.lexeme.to_string(),
                span: token.span,
            }),
            found => Err(Error::new(vec![token.span], UnexpectedToken { expected: "a number", found })),
        }
    }
}

/// An occurrence of the free variable, such as `x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Var {
    /// The single-letter name of the variable.
    pub name: String,

    /// The region of the source code that this variable was parsed from.
    pub span: Range<usize>,
}

impl Parse for Var {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        match token.kind {
            TokenKind::Name if token.lexeme.len() == 1 => Ok(Self {
                name: token.lexeme.to_string(),
                span: token.span,
            }),
            found => Err(Error::new(vec![token.span], UnexpectedToken { expected: "a variable", found })),
        }
    }
}
