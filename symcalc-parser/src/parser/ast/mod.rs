//! Parse tree types.
//!
//! The parse tree mirrors the grammar:
//!
//! ```text
//! expr    := product (('+' | '-') product)*
//! product := unary (('*')? unary)*
//! unary   := '-' unary | power
//! power   := primary ('^' unary)?
//! primary := NUMBER | VAR | call | '(' expr ')'
//! call    := NAME ('^' INT)? '(' expr ')'
//! ```
//!
//! Every node records the span of source it was parsed from.

pub mod call;
pub mod literal;
pub mod paren;
pub mod power;
pub mod product;
pub mod sum;
pub mod unary;

pub use call::Call;
pub use literal::{Literal, Var};
pub use paren::Paren;
pub use power::Power;
pub use product::Product;
pub use sum::{Sign, Sum, Term};
pub use unary::Neg;

use std::ops::Range;
use super::{error::{Error, UnclosedParenthesis, UnexpectedEof, UnexpectedToken}, Parse, Parser};
use crate::tokenizer::TokenKind;

/// Represents a general expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// A number, such as `16` or `2.5`.
    Literal(Literal),

    /// The free variable, such as `x`.
    Var(Var),

    /// A function call, such as `sin(x)`.
    Call(Call),

    /// A parenthesized expression, such as `(x + 1)`.
    Paren(Paren),

    /// A negated expression, such as `-x`.
    Neg(Neg),

    /// An expression raised to a constant, non-negative integer power, such as `x^2`.
    Power(Power),

    /// Factors multiplied together, explicitly or by juxtaposition, such as `3x sin(x)`.
    Product(Product),

    /// Terms added or subtracted, such as `x^2 - 1`.
    Sum(Sum),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span.clone(),
            Expr::Var(var) => var.span.clone(),
            Expr::Call(call) => call.span.clone(),
            Expr::Paren(paren) => paren.span.clone(),
            Expr::Neg(neg) => neg.span.clone(),
            Expr::Power(power) => power.span.clone(),
            Expr::Product(product) => product.span.clone(),
            Expr::Sum(sum) => sum.span.clone(),
        }
    }

    /// Calls `f` on this expression and every expression nested in it, in pre-order.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Expr)) {
        f(self);
        match self {
            Expr::Literal(_) | Expr::Var(_) => (),
            Expr::Call(call) => call.arg.visit(f),
            Expr::Paren(paren) => paren.expr.visit(f),
            Expr::Neg(neg) => neg.operand.visit(f),
            Expr::Power(power) => power.base.visit(f),
            Expr::Product(product) => product.factors.iter().for_each(|factor| factor.visit(f)),
            Expr::Sum(sum) => sum.terms.iter().for_each(|term| term.expr.visit(f)),
        }
    }

    /// Parses a primary expression: a number, the variable, a function call, or a parenthesized
    /// expression.
    pub(crate) fn parse_primary(input: &mut Parser) -> Result<Self, Error> {
        match input.peek_kind() {
            Some(TokenKind::Int | TokenKind::Float) => input.try_parse::<Literal>().map(Self::Literal),
            Some(TokenKind::Name) if input.peek().is_some_and(|token| token.lexeme.len() == 1) => {
                input.try_parse::<Var>().map(Self::Var)
            },
            Some(TokenKind::Name) => Call::parse_or_lower(input),
            Some(TokenKind::OpenParen) => input.try_parse::<Paren>().map(Self::Paren),
            Some(TokenKind::CloseParen) => Err(input.error(UnclosedParenthesis { opening: false })),
            // produces the invalid character error
            Some(TokenKind::Symbol) => Err(input.next_token().err().unwrap_or_else(|| input.error(UnexpectedEof))),
            Some(found) => Err(input.error(UnexpectedToken { expected: "an expression", found })),
            None => Err(input.error(UnexpectedEof)),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Sum::parse_or_lower(input)
    }
}
