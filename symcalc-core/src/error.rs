//! Errors produced by the normalizer and the rewrite rules.

use ariadne::{Fmt, Report};
use levenshtein::levenshtein;
use std::{fmt::{self, Display, Formatter}, ops::Range};
use symcalc_attrs::ErrorKind;
use symcalc_error::{ErrorKind as _, EXPR};
use crate::node::Function;

/// Why an expression could not be normalized, differentiated, or integrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// Differentiating a product of non-constant factors requires the product rule.
    ProductRule,

    /// Integrating a product of non-constant factors.
    ProductIntegral,

    /// The base of a power is not the bare variable, which requires the chain rule.
    ChainRule,

    /// The argument of a function is not the bare variable.
    FunctionArgument {
        /// The name of the function.
        function: String,
    },

    /// The integral of `x^-1` is `ln|x|`.
    Logarithm,

    /// The function is not one of the known elementary functions.
    UnknownFunction {
        /// The name of the function.
        name: String,

        /// Known function names that are spelled similarly.
        suggestions: Vec<&'static str>,
    },

    /// A product contains a factor that cannot be combined with the others without expanding,
    /// such as a sum or a power of a function.
    NonAtomicFactor {
        /// The kind of the offending factor.
        kind: &'static str,
    },
}

impl Reason {
    /// Creates a [`Reason::UnknownFunction`], suggesting known functions with similar names.
    pub fn unknown_function(name: &str) -> Self {
        let suggestions = Function::KNOWN
            .into_iter()
            .filter(|known| levenshtein(known, name) < 2)
            .collect();
        Self::UnknownFunction { name: name.to_string(), suggestions }
    }

    /// Returns a hint for working around the failure.
    pub fn help(&self) -> String {
        match self {
            Self::ProductRule | Self::ProductIntegral => {
                "only constant multiples such as `3x^2` or `2sin(x)` are supported".to_string()
            },
            Self::ChainRule => format!(
                "powers must have the variable as their base, like {}",
                "x^3".fg(EXPR),
            ),
            Self::FunctionArgument { function } => format!(
                "functions must be applied to the variable itself, like {}",
                format!("{}(x)", function).fg(EXPR),
            ),
            Self::Logarithm => "logarithms are not supported".to_string(),
            Self::UnknownFunction { suggestions, .. } => match suggestions.as_slice() {
                [] => format!("the supported functions are: {}", Function::KNOWN.join(", ")),
                [one] => format!("did you mean the `{}` function?", one.fg(EXPR)),
                many => format!("did you mean one of these functions? {}", many.join(", ")),
            },
            Self::NonAtomicFactor { .. } => {
                "products may only contain the variable, its powers, and functions of it".to_string()
            },
        }
    }
}

impl Display for Reason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProductRule => write!(f, "product rule not implemented yet"),
            Self::ProductIntegral => write!(f, "integration of products not implemented yet"),
            Self::ChainRule => write!(f, "power rule only supports x^n (no chain rule yet)"),
            Self::FunctionArgument { function } => {
                write!(f, "unsupported argument in function `{}` (no chain rule yet)", function)
            },
            Self::Logarithm => write!(f, "integral of x^-1 needs logarithms (not implemented yet)"),
            Self::UnknownFunction { name, .. } => write!(f, "unknown function `{}`", name),
            Self::NonAtomicFactor { kind } => write!(f, "unsupported {} inside a product", kind),
        }
    }
}

/// The expression cannot be handled by the engine.
///
/// This is a plain value, so failures from nested rewrites can be passed upwards unchanged.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = reason.to_string(),
    labels = ["in this expression"],
    help = reason.help(),
)]
pub struct Unsupported {
    pub reason: Reason,
}

impl From<Reason> for Unsupported {
    fn from(reason: Reason) -> Self {
        Self { reason }
    }
}

impl Display for Unsupported {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.reason.fmt(f)
    }
}

impl std::error::Error for Unsupported {}

/// Any error that can occur when evaluating an expression given as source code.
#[derive(Debug)]
pub enum Error {
    /// The source code could not be parsed.
    Parse(symcalc_error::Error),

    /// The parsed expression is not supported by the engine.
    Unsupported(Unsupported),
}

impl Error {
    /// Builds a report for this error. Unsupported expressions are reported against the whole
    /// source.
    pub fn build_report<'a>(&self, src_id: &'a str, source: &str) -> Report<(&'a str, Range<usize>)> {
        match self {
            Self::Parse(err) => err.build_report(src_id),
            Self::Unsupported(err) => err.build_report(src_id, &[0..source.len()]),
        }
    }
}

impl From<symcalc_error::Error> for Error {
    fn from(err: symcalc_error::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<Unsupported> for Error {
    fn from(err: Unsupported) -> Self {
        Self::Unsupported(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => err.fmt(f),
            Self::Unsupported(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}
