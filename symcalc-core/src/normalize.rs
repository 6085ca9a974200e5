//! Reduction of raw trees to canonical form.
//!
//! Normalization works bottom-up: the children of a node are normalized before the node itself is
//! examined. The output satisfies every invariant checked by [`crate::invariant::check`], and
//! normalizing a canonical tree returns it unchanged.
//!
//! Normalization never distributes products over sums, and never combines like terms of a sum.
//! Expressions that have no canonical form under those restrictions, such as `x(x + 1)`, are
//! rejected with an [`Unsupported`] error.

use rug::Rational;
use tracing::trace;
use crate::{error::{Reason, Unsupported}, node::{Function, Node}};

/// Returns `coeff * inner`, where `inner` is canonical.
fn scaled(coeff: Rational, inner: Node) -> Node {
    match inner {
        _ if coeff == 0 => Node::zero(),
        Node::Const(value) => Node::Const(coeff * value),
        Node::Mul(inner_coeff, inner) => scaled(coeff * inner_coeff, *inner),
        inner if coeff == 1 => inner,
        inner => Node::mul(coeff, inner),
    }
}

fn normalize_power(base: &Node, exp: i64) -> Result<Node, Unsupported> {
    let base = normalize(base)?;
    Ok(match exp {
        0 => Node::constant(1),
        1 => base,
        _ => Node::power(base, exp),
    })
}

fn normalize_mul(coeff: &Rational, inner: &Node) -> Result<Node, Unsupported> {
    if *coeff == 0 {
        return Ok(Node::zero());
    }
    Ok(scaled(coeff.clone(), normalize(inner)?))
}

fn normalize_sum(terms: &[Node]) -> Result<Node, Unsupported> {
    let mut out = Vec::with_capacity(terms.len());
    for term in terms {
        match normalize(term)? {
            Node::Sum(inner) => out.extend(inner),
            term if term.is_zero() => (),
            term => out.push(term),
        }
    }

    Ok(match out.len() {
        0 => Node::zero(),
        1 => out.remove(0),
        _ => Node::Sum(out),
    })
}

/// Position of an atomic factor in a canonical product.
fn factor_rank(factor: &Node) -> u8 {
    match factor {
        Node::Var => 0,
        Node::Power(..) => 1,
        _ => 2,
    }
}

fn normalize_prod(factors: &[Node]) -> Result<Node, Unsupported> {
    // normalize every factor first, so that errors inside any factor are reported even if another
    // factor is zero
    let mut coeff = Rational::from(1);
    let mut flat = Vec::with_capacity(factors.len());
    for factor in factors {
        let factor = match normalize(factor)? {
            Node::Mul(factor_coeff, inner) => {
                coeff *= factor_coeff;
                *inner
            },
            factor => factor,
        };

        match factor {
            Node::Prod(inner) => flat.extend(inner),
            factor => flat.push(factor),
        }
    }

    let mut var_exp = None::<i64>;
    let mut others = Vec::new();
    for factor in flat {
        match factor {
            Node::Const(value) if value == 0 => return Ok(Node::zero()),
            Node::Const(value) => coeff *= value,
            Node::Var => *var_exp.get_or_insert(0) += 1,
            Node::Power(base, exp) if *base == Node::Var => *var_exp.get_or_insert(0) += exp,
            factor @ Node::Func(..) => others.push(factor),
            other => return Err(Reason::NonAtomicFactor { kind: other.kind() }.into()),
        }
    }

    match var_exp {
        None | Some(0) => (),
        Some(1) => others.push(Node::Var),
        Some(exp) => others.push(Node::power(Node::Var, exp)),
    }
    others.sort_by_key(factor_rank);

    let inner = match others.len() {
        0 => return Ok(Node::Const(coeff)),
        1 => others.remove(0),
        _ => Node::Prod(others),
    };
    Ok(scaled(coeff, inner))
}

fn normalize_func(func: &Function, arg: &Node) -> Result<Node, Unsupported> {
    if let Function::Other(name) = func {
        return Err(Reason::unknown_function(name).into());
    }

    match normalize(arg)? {
        Node::Var => Ok(Node::func(func.clone(), Node::Var)),
        _ => Err(Reason::FunctionArgument { function: func.name().to_string() }.into()),
    }
}

/// Normalizes the given tree.
///
/// Fails if a function is not one of the known functions, if a function is applied to anything
/// other than the bare variable, or if a product contains a factor other than the variable, its
/// powers, functions, and constants.
pub fn normalize(node: &Node) -> Result<Node, Unsupported> {
    let normalized = match node {
        Node::Const(_) | Node::Var => return Ok(node.clone()),
        Node::Power(base, exp) => normalize_power(base, *exp),
        Node::Mul(coeff, inner) => normalize_mul(coeff, inner),
        Node::Sum(terms) => normalize_sum(terms),
        Node::Prod(factors) => normalize_prod(factors),
        Node::Func(func, arg) => normalize_func(func, arg),
    }?;

    trace!(kind = node.kind(), result = %normalized, "normalized");
    Ok(normalized)
}
