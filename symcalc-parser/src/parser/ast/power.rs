use std::ops::Range;
use crate::parser::{
    error::{Error, ExponentTooLarge, NegativeExponent, NonConstantExponent, NonIntegerExponent},
    Parser,
};
use crate::tokenizer::TokenKind;
use super::{Expr, Neg};

/// An expression raised to a constant, non-negative integer power, such as `x^2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Power {
    /// The base of the power.
    pub base: Box<Expr>,

    /// The exponent.
    pub exp: u32,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

/// Returns true if the expression is a number, possibly parenthesized.
fn is_number(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(_) => true,
        Expr::Paren(paren) => is_number(paren.innermost()),
        _ => false,
    }
}

/// Checks that the parsed exponent is a constant, non-negative integer that fits in a `u32`, and
/// returns its value.
fn exponent_value(exponent: &Expr) -> Result<u32, Error> {
    match exponent {
        Expr::Literal(lit) if lit.is_integer() => lit.value
            .parse()
            .map_err(|_| Error::new(vec![lit.span.clone()], ExponentTooLarge)),
        Expr::Literal(lit) => Err(Error::new(vec![lit.span.clone()], NonIntegerExponent)),
        Expr::Paren(paren) => exponent_value(paren.innermost()).map_err(|mut err| {
            err.spans = vec![paren.span.clone()];
            err
        }),
        Expr::Neg(neg) if is_number(&neg.operand) => Err(Error::new(vec![neg.span.clone()], NegativeExponent)),
        other => Err(Error::new(vec![other.span()], NonConstantExponent)),
    }
}

impl Power {
    /// Parses a power expression, or a primary expression if there is no `^`.
    ///
    /// Exponentiation is right-associative, so `x^2^3` is `x^(2^3)`, which is rejected because
    /// `2^3` is not a number literal.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let base = Expr::parse_primary(input)?;
        if input.next_if(TokenKind::Exp).is_none() {
            return Ok(base);
        }

        let exponent = Neg::parse_or_lower(input)?;
        let exp = exponent_value(&exponent)?;
        let span = base.span().start..exponent.span().end;
        Ok(Expr::Power(Self { base: Box::new(base), exp, span }))
    }
}
