use std::ops::Range;
use crate::parser::{error::Error, Parser};
use crate::tokenizer::TokenKind;
use super::{Expr, Product};

/// Whether a term is added or subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Plus,
    Minus,
}

/// A term of a [`Sum`], with the sign written before it. The first term is always
/// [`Sign::Plus`]; a leading `-` is parsed as negation instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub sign: Sign,
    pub expr: Expr,
}

/// Two or more terms added or subtracted, such as `x^2 - 2x + 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum {
    /// The terms, in source order.
    pub terms: Vec<Term>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Sum {
    /// Parses a sum, or a single term if there is no addition or subtraction.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let first = Product::parse_or_lower(input)?;
        let mut terms = vec![Term { sign: Sign::Plus, expr: first }];

        loop {
            let sign = match input.peek_kind() {
                Some(TokenKind::Add) => Sign::Plus,
                Some(TokenKind::Sub) => Sign::Minus,
                _ => break,
            };
            input.next_token()?;
            terms.push(Term { sign, expr: Product::parse_or_lower(input)? });
        }

        if terms.len() == 1 {
            return Ok(terms.remove(0).expr);
        }

        let span = terms[0].expr.span().start..terms[terms.len() - 1].expr.span().end;
        Ok(Expr::Sum(Self { terms, span }))
    }
}
