//! Conversion from parse trees to raw [`Node`] trees.
//!
//! The conversion is lossy: spans are dropped and parentheses disappear. It does no
//! simplification beyond folding the numeric factors of a product, so the result usually has to be
//! normalized before use.

use rug::{ops::Pow, Integer, Rational};
use symcalc_parser::parser::ast::{Expr, Literal, Product, Sign, Sum};
use crate::node::{Function, Node};

/// Returns the exact value of a literal, so `2.5` becomes `5/2`.
pub fn literal_value(literal: &Literal) -> Rational {
    let (int, frac) = literal.digits();
    let numer = int
        .bytes()
        .chain(frac.bytes())
        .fold(Integer::new(), |acc, digit| acc * 10u32 + u32::from(digit - b'0'));
    let denom = Integer::from(10).pow(frac.len() as u32);
    Rational::from((numer, denom))
}

/// Returns `-node`.
fn negate(node: Node) -> Node {
    match node {
        Node::Const(value) => Node::Const(-value),
        other => Node::mul(Rational::from(-1), other),
    }
}

fn convert_product(product: &Product) -> Node {
    let mut coeff = Rational::from(1);
    let mut factors = Vec::with_capacity(product.factors.len());
    for factor in &product.factors {
        match Node::from(factor) {
            Node::Const(value) => coeff *= value,
            other => factors.push(other),
        }
    }

    let inner = match factors.len() {
        0 => return Node::Const(coeff),
        1 => factors.remove(0),
        _ => Node::Prod(factors),
    };

    if coeff == 1 {
        inner
    } else {
        Node::mul(coeff, inner)
    }
}

fn convert_sum(sum: &Sum) -> Node {
    Node::Sum(sum.terms
        .iter()
        .map(|term| match term.sign {
            Sign::Plus => Node::from(&term.expr),
            Sign::Minus => negate(Node::from(&term.expr)),
        })
        .collect())
}

impl From<&Expr> for Node {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Literal(literal) => Node::Const(literal_value(literal)),
            Expr::Var(_) => Node::Var,
            Expr::Call(call) => Node::func(Function::from_name(&call.name), Node::from(&*call.arg)),
            Expr::Paren(paren) => Node::from(paren.innermost()),
            Expr::Neg(neg) => negate(Node::from(&*neg.operand)),
            Expr::Power(power) => Node::power(Node::from(&*power.base), i64::from(power.exp)),
            Expr::Product(product) => convert_product(product),
            Expr::Sum(sum) => convert_sum(sum),
        }
    }
}

impl From<Expr> for Node {
    fn from(expr: Expr) -> Self {
        Node::from(&expr)
    }
}
