//! Kinds of errors that can occur while parsing an expression.

use ariadne::Fmt;
use symcalc_attrs::ErrorKind;
use symcalc_error::EXPR;
use crate::tokenizer::TokenKind;

pub use symcalc_error::Error;

/// A character that is not part of the expression language.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid character `{}`", character),
    labels = ["this character"],
    help = format!("expressions may only contain numbers, letters, {}, and parentheses", "+ - * ^".fg(EXPR)),
)]
pub struct InvalidCharacter {
    /// The offending character.
    pub character: String,
}

/// Expected to see a certain kind of expression here.
///
/// The `expected` field should also contain the word "a" or "an" at the beginning to make the
/// error grammatically correct.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected {}", expected),
    labels = [format!("I expected to see {} here, found {:?}", expected, found)],
)]
pub struct UnexpectedToken {
    /// The kind of expression that was expected.
    pub expected: &'static str,

    /// The token that was found.
    pub found: TokenKind,
}

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A function name was not followed by its parenthesized argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected `(` after function name `{}`", name),
    labels = ["this function"],
    help = format!("write the argument in parentheses, like {}", format!("{}(x)", name).fg(EXPR)),
)]
pub struct MissingCallParen {
    /// The name of the function.
    pub name: String,
}

/// More than one distinct variable appears in the expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("multiple variables are not supported: `{}`, `{}`", first, second),
    labels = [
        format!("`{}` is used here...", first),
        format!("...but `{}` is used here", second),
    ],
    help = "expressions must be written in a single variable",
)]
pub struct MultipleVariables {
    /// The variable seen first.
    pub first: String,

    /// The conflicting variable.
    pub second: String,
}

/// The exponent of a power is not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be a constant integer",
    labels = ["this exponent"],
)]
pub struct NonConstantExponent;

/// The exponent of a power is a number with a fractional part.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent must be an integer",
    labels = ["this exponent"],
)]
pub struct NonIntegerExponent;

/// The exponent of a power is negative.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "negative exponents are not supported",
    labels = ["this exponent"],
)]
pub struct NegativeExponent;

/// The exponent of a power does not fit in 32 bits.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent is too large",
    labels = ["this exponent"],
    help = format!("the largest supported exponent is {}", u32::MAX),
)]
pub struct ExponentTooLarge;
