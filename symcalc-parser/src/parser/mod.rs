pub mod ast;
pub mod error;

use ast::Expr;
use error::{
    Error,
    ExpectedEof,
    InvalidCharacter,
    MultipleVariables,
    UnclosedParenthesis,
    UnexpectedEof,
};
use symcalc_error::ErrorKind;
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// The name of the variable assumed when an expression contains no variable at all, such as `5`.
pub const DEFAULT_VARIABLE: &str = "x";

/// A high-level parser for expressions. This is the type to use to parse an arbitrary piece of
/// source into a parse tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream. Whitespace is skipped.
    pub fn span(&self) -> Range<usize> {
        self.peek().map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the previous non-whitespace token. The cursor is not moved.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens[..self.cursor]
            .iter()
            .rev()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the next non-whitespace token without advancing the cursor.
    pub fn peek(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns the kind of the next non-whitespace token without advancing the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens, and an invalid character error if the
    /// token is not part of the language.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if token.is_whitespace() {
                continue;
            }

            if token.kind == TokenKind::Symbol {
                return Err(Error::new(
                    vec![token.span.clone()],
                    InvalidCharacter { character: token.lexeme.to_string() },
                ));
            }

            // cloning is cheap: only Range<_> is cloned
            return Ok(token.clone());
        }

        Err(self.error(UnexpectedEof))
    }

    /// Advances past the next token if it is of the given kind, returning it.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.peek_kind() == Some(kind) {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Speculatively parses a value from the given stream of tokens. If parsing fails, the cursor
    /// is moved back to where it was before the attempt.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        T::parse(self).map_err(|err| {
            self.cursor = start;
            err
        })
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek_kind() {
            None => Ok(value),
            // reports the invalid character itself
            Some(TokenKind::Symbol) => match self.next_token() {
                Err(err) => Err(err),
                Ok(_) => Err(self.error(ExpectedEof)),
            },
            Some(TokenKind::CloseParen) => Err(self.error(UnclosedParenthesis { opening: false })),
            Some(_) => Err(self.error(ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The result of parsing a complete expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The parse tree.
    pub expr: Expr,

    /// The single free variable of the expression, or [`DEFAULT_VARIABLE`] if there is none.
    pub variable: String,
}

/// Finds the single variable used by the expression. Returns an error pointing at the first two
/// distinct variables if there is more than one.
fn detect_variable(expr: &Expr) -> Result<Option<String>, Error> {
    let mut first: Option<(&str, Range<usize>)> = None;
    let mut conflict = None;

    expr.visit(&mut |node| {
        if conflict.is_some() {
            return;
        }

        if let Expr::Var(var) = node {
            match &first {
                None => first = Some((&var.name, var.span.clone())),
                Some((name, span)) if *name != var.name => {
                    conflict = Some(Error::new(
                        vec![span.clone(), var.span.clone()],
                        MultipleVariables { first: name.to_string(), second: var.name.clone() },
                    ));
                },
                Some(_) => (),
            }
        }
    });

    match conflict {
        Some(err) => Err(err),
        None => Ok(first.map(|(name, _)| name.to_string())),
    }
}

/// Parses the given source into a parse tree and detects its variable.
pub fn parse(source: &str) -> Result<Parsed, Error> {
    let expr = Parser::new(source).try_parse_full::<Expr>()?;
    let variable = detect_variable(&expr)?.unwrap_or_else(|| DEFAULT_VARIABLE.to_string());
    Ok(Parsed { expr, variable })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use ast::{Call, Literal, Neg, Paren, Power, Product, Sign, Sum, Term, Var};

    fn lit(value: &str, span: Range<usize>) -> Expr {
        Expr::Literal(Literal { value: value.to_string(), span })
    }

    fn var(name: &str, span: Range<usize>) -> Expr {
        Expr::Var(Var { name: name.to_string(), span })
    }

    /// Parses the source and returns the error message, panicking if parsing succeeds.
    fn parse_err(source: &str) -> (String, Vec<Range<usize>>) {
        let err = parse(source).unwrap_err();
        (err.to_string(), err.spans)
    }

    #[test]
    fn literal_int() {
        let parsed = parse("16").unwrap();
        assert_eq!(parsed.expr, lit("16", 0..2));
        assert_eq!(parsed.variable, "x");
    }

    #[test]
    fn implicit_product() {
        let parsed = parse("7t^3").unwrap();
        assert_eq!(parsed.expr, Expr::Product(Product {
            factors: vec![
                lit("7", 0..1),
                Expr::Power(Power {
                    base: Box::new(var("t", 1..2)),
                    exp: 3,
                    span: 1..4,
                }),
            ],
            span: 0..4,
        }));
        assert_eq!(parsed.variable, "t");
    }

    #[test]
    fn sum_with_subtraction() {
        let parsed = parse("x - 2*x + 1").unwrap();
        assert_eq!(parsed.expr, Expr::Sum(Sum {
            terms: vec![
                Term { sign: Sign::Plus, expr: var("x", 0..1) },
                Term {
                    sign: Sign::Minus,
                    expr: Expr::Product(Product {
                        factors: vec![lit("2", 4..5), var("x", 6..7)],
                        span: 4..7,
                    }),
                },
                Term { sign: Sign::Plus, expr: lit("1", 10..11) },
            ],
            span: 0..11,
        }));
    }

    #[test]
    fn unary_minus_binds_looser_than_power() {
        let parsed = parse("-x^2").unwrap();
        assert_eq!(parsed.expr, Expr::Neg(Neg {
            operand: Box::new(Expr::Power(Power {
                base: Box::new(var("x", 1..2)),
                exp: 2,
                span: 1..4,
            })),
            span: 0..4,
        }));
    }

    #[test]
    fn desugar_function_power() {
        let parsed = parse("sin^2(x)").unwrap();
        assert_eq!(parsed.expr, Expr::Power(Power {
            base: Box::new(Expr::Call(Call {
                name: "sin".to_string(),
                arg: Box::new(var("x", 6..7)),
                span: 0..8,
            })),
            exp: 2,
            span: 0..8,
        }));
    }

    #[test]
    fn parenthesized_exponent() {
        let parsed = parse("(x)^(3)").unwrap();
        assert_eq!(parsed.expr, Expr::Power(Power {
            base: Box::new(Expr::Paren(Paren {
                expr: Box::new(var("x", 1..2)),
                span: 0..3,
            })),
            exp: 3,
            span: 0..7,
        }));
    }

    #[test]
    fn unknown_function_is_still_a_call() {
        let parsed = parse("tan(x)").unwrap();
        assert!(matches!(parsed.expr, Expr::Call(ref call) if call.name == "tan"));
    }

    #[test]
    fn multiple_variables() {
        let (message, spans) = parse_err("x + 2y");
        assert_eq!(message, "multiple variables are not supported: `x`, `y`");
        assert_eq!(spans, vec![0..1, 5..6]);
    }

    #[test]
    fn invalid_character() {
        let (message, spans) = parse_err("3x $ 2");
        assert_eq!(message, "invalid character `$`");
        assert_eq!(spans, vec![3..4]);
    }

    #[test]
    fn unclosed_parenthesis() {
        assert_eq!(parse_err("(x + 1").0, "unclosed parenthesis");
        assert_eq!(parse_err("x + 1)").0, "unclosed parenthesis");
    }

    #[test]
    fn bad_exponents() {
        assert_eq!(parse_err("x^x").0, "exponent must be a constant integer");
        assert_eq!(parse_err("x^2^3").0, "exponent must be a constant integer");
        assert_eq!(parse_err("x^1.5").0, "exponent must be an integer");
        assert_eq!(parse_err("x^-1").0, "negative exponents are not supported");
        assert_eq!(parse_err("x^99999999999").0, "exponent is too large");
    }

    #[test]
    fn function_without_parenthesis() {
        assert_eq!(parse_err("sin x").0, "expected `(` after function name `sin`");
    }

    #[test]
    fn dangling_operator() {
        assert_eq!(parse_err("x +").0, "unexpected end of input");
        assert_eq!(parse_err("* x").0, "expected an expression");
    }
}
