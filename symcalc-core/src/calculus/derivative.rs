//! Differentiation rules.
//!
//! | Node | Derivative |
//! |---|---|
//! | `c` | `0` |
//! | `x` | `1` |
//! | `x^n` | `n x^(n-1)` |
//! | `c f` | `c f'` |
//! | `f + g + ...` | `f' + g' + ...` |
//! | `sin(x)` | `cos(x)` |
//! | `cos(x)` | `-sin(x)` |
//! | `exp(x)` | `exp(x)` |
//!
//! Products of non-constant factors would need the product rule, and powers of anything but the
//! variable would need the chain rule. Both are rejected.

use rug::Rational;
use crate::{
    error::{Reason, Unsupported},
    node::{Function, Node},
    step::{Step, StepCollector},
};
use super::{Dispatch, Operation};

fn differentiate_power(
    x: &str,
    base: &Node,
    n: i64,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Node, Unsupported> {
    if *base != Node::Var {
        return Err(Reason::ChainRule.into());
    }

    if n == 0 {
        steps.push(Step::Line(format!("d/d{0}({0}^0) = d/d{0}(1) = 0", x)));
        return Ok(Node::zero());
    }

    steps.push(Step::Line(format!("d/d{0}({0}^{1}) = {1}{0}^({2})", x, n, n - 1)));
    Ok(Node::mul(Rational::from(n), Node::power(Node::Var, n - 1)))
}

fn differentiate_func(
    x: &str,
    func: &Function,
    arg: &Node,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Node, Unsupported> {
    if *arg != Node::Var {
        return Err(Reason::FunctionArgument { function: func.name().to_string() }.into());
    }

    let (result, derivative) = match func {
        Function::Sin => (Node::func(Function::Cos, arg.clone()), format!("cos({})", x)),
        Function::Cos => (
            Node::mul(Rational::from(-1), Node::func(Function::Sin, arg.clone())),
            format!("-sin({})", x),
        ),
        Function::Exp => (Node::func(Function::Exp, arg.clone()), format!("exp({})", x)),
        Function::Other(name) => return Err(Reason::unknown_function(name).into()),
    };

    steps.push(Step::Line(format!("d/d{0}({1}({0})) = {2}", x, func, derivative)));
    Ok(result)
}

/// Differentiates a canonical tree with respect to the variable, returning the canonical
/// derivative.
pub fn differentiate(
    ctx: &dyn Dispatch,
    node: &Node,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Node, Unsupported> {
    let x = ctx.variable();
    let raw = match node {
        Node::Const(value) => {
            steps.push(Step::Line(format!("d/d{}({}) = 0", x, value)));
            Node::zero()
        },
        Node::Var => {
            steps.push(Step::Line(format!("d/d{0}({0}) = 1", x)));
            Node::constant(1)
        },
        Node::Power(base, n) => differentiate_power(x, base, *n, steps)?,
        Node::Mul(coeff, inner) => {
            steps.push(Step::Line(format!("Extracted the constant {}:", coeff)));
            let inner = ctx.rewrite(Operation::Differentiate, inner, steps)?;
            Node::mul(coeff.clone(), inner.result)
        },
        Node::Sum(terms) => {
            steps.push(Step::line("Using Linearity of Differentiation:"));
            let mut derivatives = Vec::with_capacity(terms.len());
            for term in terms {
                let mut term_steps = Vec::new();
                derivatives.push(ctx.rewrite(Operation::Differentiate, term, &mut term_steps)?.result);
                steps.push(Step::Nested(term_steps));
            }
            Node::Sum(derivatives)
        },
        Node::Func(func, arg) => differentiate_func(x, func, arg, steps)?,
        Node::Prod(_) => return Err(Reason::ProductRule.into()),
    };

    ctx.normalize(&raw)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use pretty_assertions::assert_eq;
    use symcalc_parser::parser::parse;
    use crate::{
        engine::Engine,
        normalize::normalize,
        testing::{central_difference, eval, Recording},
    };
    use super::*;

    fn canonical(source: &str) -> Node {
        normalize(&Node::from(parse(source).unwrap().expr)).unwrap()
    }

    fn derivative_of(source: &str) -> Result<Node, Unsupported> {
        differentiate(&Engine::default(), &canonical(source), &mut ())
    }

    /// Compares the symbolic derivative against a numerical approximation at each point.
    fn test_for_function(function: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = canonical(function);
        let symbolic = differentiate(&Engine::default(), &expr, &mut ()).unwrap();

        for point in points {
            assert_float_absolute_eq!(eval(&symbolic, point), central_difference(&expr, point), TOL);
        }
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2 + x + 1", [0., 1., 2., 5., 8.]);
        test_for_function("7x^3 - 12x + 2.5", [-3., 0., 1.5, 4.]);
    }

    #[test]
    fn elementary_functions() {
        test_for_function("3sin(x) - cos(x) + exp(x)", [-2., 0., 0.5, 3.]);
    }

    #[test]
    fn square() {
        assert_eq!(derivative_of("x^2").unwrap(), Node::mul(Rational::from(2), Node::Var));
    }

    #[test]
    fn constant_and_variable() {
        assert_eq!(derivative_of("42").unwrap(), Node::zero());
        assert_eq!(derivative_of("x").unwrap(), Node::constant(1));
        assert_eq!(derivative_of("-x").unwrap(), Node::constant(-1));
    }

    #[test]
    fn cosine_is_negated_sine() {
        assert_eq!(
            derivative_of("cos(x)").unwrap(),
            Node::mul(Rational::from(-1), Node::func(Function::Sin, Node::Var)),
        );
    }

    #[test]
    fn negative_exponent() {
        let node = Node::power(Node::Var, -1);
        assert_eq!(
            differentiate(&Engine::default(), &node, &mut ()).unwrap(),
            Node::mul(Rational::from(-1), Node::power(Node::Var, -2)),
        );
    }

    #[test]
    fn sum_drops_constant_terms() {
        assert_eq!(
            derivative_of("x^3 + 10").unwrap(),
            Node::mul(Rational::from(3), Node::power(Node::Var, 2)),
        );
    }

    #[test]
    fn unsupported() {
        assert_eq!(derivative_of("x sin(x)").unwrap_err().reason, Reason::ProductRule);
        assert_eq!(derivative_of("sin^2(x)").unwrap_err().reason, Reason::ChainRule);
        assert_eq!(derivative_of("(x + 1)^2").unwrap_err().reason, Reason::ChainRule);

        let unknown = Node::func(Function::Other("tan".to_string()), Node::Var);
        assert!(matches!(
            differentiate(&Engine::default(), &unknown, &mut ()).unwrap_err().reason,
            Reason::UnknownFunction { .. },
        ));

        let composed = Node::func(Function::Sin, Node::power(Node::Var, 2));
        assert_eq!(
            differentiate(&Engine::default(), &composed, &mut ()).unwrap_err().reason,
            Reason::FunctionArgument { function: "sin".to_string() },
        );
    }

    #[test]
    fn steps() {
        let mut steps = Vec::new();
        differentiate(&Engine::default(), &canonical("3x^2 + sin(x)"), &mut steps).unwrap();
        assert_eq!(steps, vec![
            Step::line("Using Linearity of Differentiation:"),
            Step::Nested(vec![
                Step::line("Extracted the constant 3:"),
                Step::line("d/dx(x^2) = 2x^(1)"),
            ]),
            Step::Nested(vec![Step::line("d/dx(sin(x)) = cos(x)")]),
        ]);
    }

    #[test]
    fn first_failure_stops_sum() {
        let ctx = Recording::default();
        let node = canonical("2x + x sin(x) + cos(x)");
        let err = differentiate(&ctx, &node, &mut ()).unwrap_err();

        assert_eq!(err.reason, Reason::ProductRule);
        assert_eq!(ctx.into_visited(), vec![
            Node::mul(Rational::from(2), Node::Var),
            Node::Var,
            Node::Prod(vec![Node::Var, Node::func(Function::Sin, Node::Var)]),
        ]);
    }
}
