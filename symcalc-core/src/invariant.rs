//! Checks that a tree is in canonical form.

use std::fmt::{self, Display, Formatter};
use crate::node::{Function, Node};

/// A structural rule broken by a tree that is supposed to be canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A scaled expression wraps a constant or another scaled expression.
    NestedMul,

    /// A scaled expression has a coefficient of `0` or `1`.
    TrivialCoefficient,

    /// A power has an exponent of `0` or `1`.
    TrivialPower(i64),

    /// A sum has fewer than two terms.
    ShortSum,

    /// A sum contains another sum or the constant `0`.
    SumTerm,

    /// A product has fewer than two factors.
    ShortProd,

    /// A product contains something other than the variable, a power of the variable, or a
    /// function.
    ProdFactor(&'static str),

    /// The factors of a product are not ordered variable, then powers, then functions.
    ProdOrder,

    /// A function is applied to something other than the variable.
    FunctionArgument,

    /// A function is not one of the known functions.
    UnknownFunction(String),
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NestedMul => write!(f, "scaled expression wraps a constant or scaled expression"),
            Self::TrivialCoefficient => write!(f, "scaled expression has a coefficient of 0 or 1"),
            Self::TrivialPower(exp) => write!(f, "power has exponent {}", exp),
            Self::ShortSum => write!(f, "sum has fewer than two terms"),
            Self::SumTerm => write!(f, "sum contains a sum or zero"),
            Self::ShortProd => write!(f, "product has fewer than two factors"),
            Self::ProdFactor(kind) => write!(f, "product contains a {}", kind),
            Self::ProdOrder => write!(f, "product factors are out of order"),
            Self::FunctionArgument => write!(f, "function argument is not the variable"),
            Self::UnknownFunction(name) => write!(f, "unknown function `{}`", name),
        }
    }
}

impl std::error::Error for Violation {}

fn check_factor(factor: &Node) -> Result<u8, Violation> {
    match factor {
        Node::Var => Ok(0),
        Node::Power(base, _) if **base == Node::Var => Ok(1),
        Node::Power(..) => Err(Violation::ProdFactor("power of a non-variable")),
        Node::Func(..) => Ok(2),
        other => Err(Violation::ProdFactor(other.kind())),
    }
}

/// Returns the first violated rule found in a depth-first walk of the tree.
///
/// Negative exponents are accepted. The parser never produces them, but the rewrite rules handle
/// them when given hand-built trees.
pub fn check(node: &Node) -> Result<(), Violation> {
    match node {
        Node::Const(_) | Node::Var => Ok(()),
        Node::Power(base, exp) => {
            if matches!(*exp, 0 | 1) {
                return Err(Violation::TrivialPower(*exp));
            }
            check(base)
        },
        Node::Mul(coeff, inner) => {
            if matches!(**inner, Node::Const(_) | Node::Mul(..)) {
                return Err(Violation::NestedMul);
            }
            if *coeff == 0 || *coeff == 1 {
                return Err(Violation::TrivialCoefficient);
            }
            check(inner)
        },
        Node::Sum(terms) => {
            if terms.len() < 2 {
                return Err(Violation::ShortSum);
            }
            if terms.iter().any(|term| matches!(term, Node::Sum(_)) || term.is_zero()) {
                return Err(Violation::SumTerm);
            }
            terms.iter().try_for_each(check)
        },
        Node::Prod(factors) => {
            if factors.len() < 2 {
                return Err(Violation::ShortProd);
            }
            let ranks = factors.iter().map(check_factor).collect::<Result<Vec<_>, _>>()?;
            if ranks.windows(2).any(|pair| pair[0] > pair[1]) {
                return Err(Violation::ProdOrder);
            }
            factors.iter().try_for_each(check)
        },
        Node::Func(func, arg) => {
            if let Function::Other(name) = func {
                return Err(Violation::UnknownFunction(name.clone()));
            }
            if **arg != Node::Var {
                return Err(Violation::FunctionArgument);
            }
            Ok(())
        },
    }
}
