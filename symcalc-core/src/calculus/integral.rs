//! Integration rules.
//!
//! | Node | Antiderivative |
//! |---|---|
//! | `c` | `c x` |
//! | `x` | `1/2 x^2` |
//! | `x^n`, `n != -1` | `1/(n+1) x^(n+1)` |
//! | `c f` | `c ∫f` |
//! | `f + g + ...` | `∫f + ∫g + ...` |
//! | `sin(x)` | `-cos(x)` |
//! | `cos(x)` | `sin(x)` |
//! | `exp(x)` | `exp(x)` |
//!
//! Every antiderivative is only determined up to a constant, which is reported with
//! [`Rewritten::indefinite`] rather than added to the tree. The one exception is `0 f`, whose
//! integral is exactly `0`.

use rug::Rational;
use crate::{
    error::{Reason, Unsupported},
    node::{Function, Node},
    step::{Step, StepCollector},
};
use super::{Dispatch, Operation, Rewritten};

fn integrate_power(
    x: &str,
    base: &Node,
    n: i64,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Node, Unsupported> {
    if *base != Node::Var {
        return Err(Reason::ChainRule.into());
    }
    if n == -1 {
        return Err(Reason::Logarithm.into());
    }

    steps.push(Step::Line(format!("∫ {0}^{1} d{0} = {0}^{2}/{2} + C", x, n, n + 1)));
    Ok(Node::mul(Rational::from((1, n + 1)), Node::power(Node::Var, n + 1)))
}

fn integrate_func(
    x: &str,
    func: &Function,
    arg: &Node,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Node, Unsupported> {
    if *arg != Node::Var {
        return Err(Reason::FunctionArgument { function: func.name().to_string() }.into());
    }

    let (result, integral) = match func {
        Function::Sin => (
            Node::mul(Rational::from(-1), Node::func(Function::Cos, arg.clone())),
            format!("-cos({})", x),
        ),
        Function::Cos => (Node::func(Function::Sin, arg.clone()), format!("sin({})", x)),
        Function::Exp => (Node::func(Function::Exp, arg.clone()), format!("exp({})", x)),
        Function::Other(name) => return Err(Reason::unknown_function(name).into()),
    };

    steps.push(Step::Line(format!("∫ {1}({0}) d{0} = {2} + C", x, func, integral)));
    Ok(result)
}

fn integrate_mul(
    ctx: &dyn Dispatch,
    coeff: &Rational,
    inner: &Node,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Rewritten, Unsupported> {
    if *coeff == 0 {
        steps.push(Step::line("Integral of 0 is 0"));
        return Ok(Rewritten { result: Node::zero(), indefinite: false });
    }

    let mut inner_steps = Vec::new();
    let inner = ctx.rewrite(Operation::Integrate, inner, &mut inner_steps)?;
    let raw = match inner.result {
        Node::Const(value) => {
            steps.push(Step::line("Combined Constant Factors"));
            Node::Const(Rational::from(coeff * &value))
        },
        result => {
            steps.push(Step::Line(format!("Extracted the constant {}:", coeff)));
            Node::mul(coeff.clone(), result)
        },
    };
    inner_steps.into_iter().for_each(|step| steps.push(step));

    Ok(Rewritten { result: ctx.normalize(&raw)?, indefinite: true })
}

/// Integrates a canonical tree with respect to the variable, returning the canonical
/// antiderivative.
pub fn integrate(
    ctx: &dyn Dispatch,
    node: &Node,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Rewritten, Unsupported> {
    let x = ctx.variable();
    let raw = match node {
        Node::Const(value) => {
            steps.push(Step::Line(format!("∫ {1} d{0} = {1}{0} + C", x, value)));
            Node::mul(value.clone(), Node::Var)
        },
        Node::Var => {
            steps.push(Step::Line(format!("∫ {0} d{0} = {0}^2/2 + C", x)));
            Node::mul(Rational::from((1, 2)), Node::power(Node::Var, 2))
        },
        Node::Power(base, n) => integrate_power(x, base, *n, steps)?,
        Node::Mul(coeff, inner) => return integrate_mul(ctx, coeff, inner, steps),
        Node::Sum(terms) => {
            steps.push(Step::line("Using Linearity of Integration:"));
            let mut integrals = Vec::with_capacity(terms.len());
            for term in terms {
                let mut term_steps = Vec::new();
                integrals.push(ctx.rewrite(Operation::Integrate, term, &mut term_steps)?.result);
                steps.push(Step::Nested(term_steps));
            }
            Node::Sum(integrals)
        },
        Node::Func(func, arg) => integrate_func(x, func, arg, steps)?,
        Node::Prod(_) => return Err(Reason::ProductIntegral.into()),
    };

    Ok(Rewritten { result: ctx.normalize(&raw)?, indefinite: true })
}
