//! The expression tree shared by the normalizer, the rewrite rules and the printer.
//!
//! A [`Node`] is a plain value: every transformation builds a new tree instead of mutating an
//! existing one, and each parent exclusively owns its children.
//!
//! Trees come from two places. Converting a parse tree (see [`crate::convert`]) produces a _raw_
//! tree, which may contain redundant structure such as `Mul(1, x)` or a nested [`Node::Sum`].
//! Normalizing a raw tree (see [`crate::normalize`]) produces a _canonical_ tree, which satisfies
//! the structural invariants checked by [`crate::invariant::check`]. The rewrite rules accept and
//! return only canonical trees.

use rug::Rational;
use std::fmt::{self, Display, Formatter};
use crate::fmt::{render, NumberMode};
use symcalc_parser::parser::DEFAULT_VARIABLE;

/// The elementary functions understood by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Function {
    Sin,
    Cos,
    Exp,

    /// Any other name. The parser accepts arbitrary function names; the normalizer rejects
    /// these, so they never appear in a canonical tree.
    Other(String),
}

impl Function {
    /// The names of the functions the engine can differentiate and integrate.
    pub const KNOWN: [&'static str; 3] = ["sin", "cos", "exp"];

    /// Returns the function with the given name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "exp" => Self::Exp,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the name of the function, as written in source code.
    pub fn name(&self) -> &str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Exp => "exp",
            Self::Other(name) => name,
        }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// An exact rational number, such as `3` or `5/2`.
    Const(Rational),

    /// The free variable. There is only ever one, so it carries no name; the name is only needed
    /// for rendering.
    Var,

    /// A base raised to an integer power.
    Power(Box<Node>, i64),

    /// A rational coefficient multiplied by an expression.
    Mul(Rational, Box<Node>),

    /// A product of factors, such as `x^2 sin(x)`.
    Prod(Vec<Node>),

    /// A sum of terms.
    Sum(Vec<Node>),

    /// An elementary function applied to an argument.
    Func(Function, Box<Node>),
}

impl Node {
    /// Creates a constant from anything convertible to a [`Rational`], such as an `i32` or a
    /// `(numerator, denominator)` pair.
    pub fn constant<T>(value: T) -> Self
    where
        Rational: From<T>,
    {
        Self::Const(Rational::from(value))
    }

    /// Creates the constant `0`.
    pub fn zero() -> Self {
        Self::constant(0)
    }

    /// Creates `base^exp`.
    pub fn power(base: Node, exp: i64) -> Self {
        Self::Power(Box::new(base), exp)
    }

    /// Creates `coeff * inner`.
    pub fn mul(coeff: Rational, inner: Node) -> Self {
        Self::Mul(coeff, Box::new(inner))
    }

    /// Creates a function application.
    pub fn func(func: Function, arg: Node) -> Self {
        Self::Func(func, Box::new(arg))
    }

    /// Returns the value of the node if it is a constant.
    pub fn as_const(&self) -> Option<&Rational> {
        match self {
            Self::Const(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the node is the constant `0`.
    pub fn is_zero(&self) -> bool {
        self.as_const().is_some_and(|value| *value == 0)
    }

    /// Returns the name of the variant, used in log output and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Const(_) => "constant",
            Self::Var => "variable",
            Self::Power(..) => "power",
            Self::Mul(..) => "scaled expression",
            Self::Prod(_) => "product",
            Self::Sum(_) => "sum",
            Self::Func(..) => "function",
        }
    }
}

/// Renders the node with exact fractions, using the default variable name.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, NumberMode::Fraction, DEFAULT_VARIABLE))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn function_names() {
        for name in Function::KNOWN {
            assert_eq!(Function::from_name(name).name(), name);
        }
        assert_eq!(Function::from_name("tan"), Function::Other("tan".to_string()));
    }

    #[test]
    fn constants() {
        assert!(Node::zero().is_zero());
        assert!(!Node::constant((1, 2)).is_zero());
        assert_eq!(Node::constant((6, 4)), Node::Const(Rational::from((3, 2))));
        assert_eq!(Node::Var.as_const(), None);
    }
}
