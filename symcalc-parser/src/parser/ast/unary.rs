use std::ops::Range;
use crate::parser::{error::Error, Parser};
use crate::tokenizer::TokenKind;
use super::{Expr, Power};

/// A negated expression, such as `-x` or `-(x + 1)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neg {
    /// The negated operand.
    pub operand: Box<Expr>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Neg {
    /// Parses a negation, or a power expression if there is no leading `-`.
    ///
    /// Negation binds looser than exponentiation: `-x^2` is `-(x^2)`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        match input.next_if(TokenKind::Sub) {
            Some(minus) => {
                let operand = Self::parse_or_lower(input)?;
                let span = minus.span.start..operand.span().end;
                Ok(Expr::Neg(Self { operand: Box::new(operand), span }))
            },
            None => Power::parse_or_lower(input),
        }
    }
}
