use std::ops::Range;
use crate::parser::{
    error::{
        Error,
        ExponentTooLarge,
        MissingCallParen,
        NegativeExponent,
        NonConstantExponent,
        NonIntegerExponent,
        UnexpectedToken,
    },
    Parser,
};
use crate::tokenizer::TokenKind;
use super::{paren::close_paren, Expr, Power};

/// A function call with a single argument, such as `sin(x)`.
///
/// The name is not checked against a list of known functions here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: String,

    /// The argument of the function.
    pub arg: Box<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

/// Parses the `2` in `sin^2(x)`, which must be written as a plain integer.
fn parse_call_power(input: &mut Parser) -> Result<u32, Error> {
    let token = input.next_token()?;
    match token.kind {
        TokenKind::Int => token.lexeme
            .parse()
            .map_err(|_| Error::new(vec![token.span], ExponentTooLarge)),
        TokenKind::Float => Err(Error::new(vec![token.span], NonIntegerExponent)),
        TokenKind::Sub => Err(Error::new(vec![token.span], NegativeExponent)),
        _ => Err(Error::new(vec![token.span], NonConstantExponent)),
    }
}

impl Call {
    /// Parses a function call.
    ///
    /// A call written with a power between the name and the argument list, such as `sin^2(x)`,
    /// is desugared to the power of the call, `(sin(x))^2`, so the result is either an
    /// [`Expr::Call`] or an [`Expr::Power`] wrapping one.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let name = input.next_token()?;
        if name.kind != TokenKind::Name {
            return Err(Error::new(vec![name.span], UnexpectedToken { expected: "a function name", found: name.kind }));
        }

        let power = match input.next_if(TokenKind::Exp) {
            Some(_) => Some(parse_call_power(input)?),
            None => None,
        };

        let Some(open) = input.next_if(TokenKind::OpenParen) else {
            return Err(Error::new(vec![name.span], MissingCallParen { name: name.lexeme.to_string() }));
        };
        let arg = input.try_parse::<Expr>()?;
        let close = close_paren(input, open.span)?;

        let call = Expr::Call(Self {
            name: name.lexeme.to_string(),
            arg: Box::new(arg),
            span: name.span.start..close.end,
        });

        Ok(match power {
            Some(exp) => Expr::Power(Power {
                base: Box::new(call),
                exp,
                span: name.span.start..close.end,
            }),
            None => call,
        })
    }
}
