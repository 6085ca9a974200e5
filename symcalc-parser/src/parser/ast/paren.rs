use std::ops::Range;
use crate::parser::{error::{Error, UnclosedParenthesis, UnexpectedToken}, Parse, Parser};
use crate::tokenizer::TokenKind;
use super::Expr;

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this expression was parsed from, parentheses
    /// included.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the innermost expression, looking through any number of nested parentheses.
    pub fn innermost(&self) -> &Expr {
        let mut expr = &*self.expr;
        while let Expr::Paren(paren) = expr {
            expr = &paren.expr;
        }
        expr
    }
}

/// Parses the closing parenthesis that matches the opening parenthesis at `open`.
pub(crate) fn close_paren(input: &mut Parser, open: Range<usize>) -> Result<Range<usize>, Error> {
    match input.next_if(TokenKind::CloseParen) {
        Some(token) => Ok(token.span),
        None => Err(Error::new(vec![open], UnclosedParenthesis { opening: true })),
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.next_token()?;
        if open.kind != TokenKind::OpenParen {
            return Err(Error::new(vec![open.span], UnexpectedToken { expected: "`(`", found: open.kind }));
        }

        let expr = input.try_parse::<Expr>()?;
        let close = close_paren(input, open.span.clone())?;
        Ok(Self {
            expr: Box::new(expr),
            span: open.span.start..close.end,
        })
    }
}
