use std::ops::Range;
use crate::parser::{error::Error, Parser};
use crate::tokenizer::TokenKind;
use super::{Expr, Neg};

/// Two or more factors multiplied together, such as `3x`, `2 * x` or `x sin(x)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// The factors, in source order.
    pub factors: Vec<Expr>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Product {
    /// Parses a product, or a single factor if there is no multiplication.
    ///
    /// Factors are separated by an explicit `*`, or simply written next to each other. Only an
    /// explicit `*` may be followed by a negated factor, so `x - 1` stays a subtraction.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let mut factors = vec![Neg::parse_or_lower(input)?];

        while input.next_if(TokenKind::Mul).is_some()
            || input.peek_kind().is_some_and(TokenKind::starts_factor)
        {
            factors.push(Neg::parse_or_lower(input)?);
        }

        if factors.len() == 1 {
            return Ok(factors.remove(0));
        }

        let span = factors[0].span().start..factors[factors.len() - 1].span().end;
        Ok(Expr::Product(Self { factors, span }))
    }
}
