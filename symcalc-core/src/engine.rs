//! The entry point that ties the normalizer, the rule tables and the printer together.

use tracing::debug;
use crate::{
    calculus::{derivative, integral, Dispatch, Operation, Rewritten},
    error::Unsupported,
    fmt::{render, NumberMode},
    invariant,
    node::Node,
    normalize,
    step::{Step, StepCollector},
};
use symcalc_parser::parser::DEFAULT_VARIABLE;

/// Options controlling how an expression is evaluated and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOptions {
    /// How to render non-integer numbers in the result.
    pub mode: NumberMode,

    /// The name of the variable, used when rendering the result and the steps.
    pub variable: String,

    /// Whether to record the steps of the derivation. If false, [`Evaluation::steps`] is empty.
    pub steps: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            mode: NumberMode::default(),
            variable: DEFAULT_VARIABLE.to_string(),
            steps: true,
        }
    }
}

impl EvalOptions {
    /// Wraps the given [`EvalOptions`] into a builder for further customization.
    pub fn into_builder(self) -> EvalOptionsBuilder {
        EvalOptionsBuilder(self)
    }
}

/// A builder for [`EvalOptions`].
#[derive(Debug, Default, Clone)]
pub struct EvalOptionsBuilder(EvalOptions);

impl EvalOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number mode. See [`NumberMode`] for more information.
    pub fn mode(mut self, mode: NumberMode) -> Self {
        self.0.mode = mode;
        self
    }

    /// Sets the name of the variable.
    pub fn variable(mut self, variable: impl Into<String>) -> Self {
        self.0.variable = variable.into();
        self
    }

    /// Sets whether to record the steps of the derivation.
    pub fn steps(mut self, steps: bool) -> Self {
        self.0.steps = steps;
        self
    }

    /// Builds the [`EvalOptions`].
    pub fn build(self) -> EvalOptions {
        self.0
    }
}

/// The result of differentiating or integrating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The canonical result.
    pub result: Node,

    /// The steps of the derivation.
    pub steps: Vec<Step>,

    /// The rendered result, including ` + C` if the result is indefinite.
    pub string: String,

    /// Whether the result is an antiderivative that needs a constant of integration.
    pub indefinite: bool,
}

/// Applies calculus operations to canonical trees.
#[derive(Debug, Default, Clone)]
pub struct Engine {
    options: EvalOptions,
}

impl Engine {
    /// Creates an engine with the given options.
    pub fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Returns the options of the engine.
    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Differentiates or integrates a canonical tree, then renders the result.
    pub fn evaluate(&self, op: Operation, node: &Node) -> Result<Evaluation, Unsupported> {
        let mut steps = Vec::new();
        let rewritten = if self.options.steps {
            self.rewrite(op, node, &mut steps)?
        } else {
            self.rewrite(op, node, &mut ())?
        };

        debug_assert!(
            invariant::check(&rewritten.result).is_ok(),
            "non-canonical result {:?}",
            rewritten.result,
        );

        let mut string = render(&rewritten.result, self.options.mode, &self.options.variable);
        if rewritten.indefinite {
            string.push_str(" + C");
        }

        Ok(Evaluation {
            result: rewritten.result,
            steps,
            string,
            indefinite: rewritten.indefinite,
        })
    }
}

impl Dispatch for Engine {
    fn variable(&self) -> &str {
        &self.options.variable
    }

    fn normalize(&self, node: &Node) -> Result<Node, Unsupported> {
        normalize::normalize(node)
    }

    fn rewrite(
        &self,
        op: Operation,
        node: &Node,
        steps: &mut dyn StepCollector<Step>,
    ) -> Result<Rewritten, Unsupported> {
        debug!(?op, kind = node.kind(), %node, "rewriting");
        let rewritten = match op {
            Operation::Differentiate => derivative::differentiate(self, node, steps)
                .map(|result| Rewritten { result, indefinite: false }),
            Operation::Integrate => integral::integrate(self, node, steps),
        };

        match rewritten {
            Ok(rewritten) => Ok(Rewritten {
                result: self.normalize(&rewritten.result)?,
                ..rewritten
            }),
            Err(err) => {
                debug!(?op, kind = node.kind(), %err, "rewrite failed");
                Err(err)
            },
        }
    }
}

/// Differentiates or integrates a canonical tree with the default options and the given number
/// mode.
pub fn evaluate(op: Operation, node: &Node, mode: NumberMode) -> Result<Evaluation, Unsupported> {
    Engine::new(EvalOptionsBuilder::new().mode(mode).build()).evaluate(op, node)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rug::Rational;
    use symcalc_parser::parser::parse;
    use crate::node::Function;
    use super::*;

    fn canonical(source: &str) -> Node {
        normalize::normalize(&Node::from(parse(source).unwrap().expr)).unwrap()
    }

    #[test]
    fn differentiate_square_decimal() {
        let eval = evaluate(Operation::Differentiate, &canonical("x^2"), NumberMode::Decimal).unwrap();
        assert_eq!(eval.string, "2x");
        assert!(!eval.indefinite);
    }

    #[test]
    fn integrate_cube_fraction() {
        let eval = evaluate(Operation::Integrate, &canonical("x^3"), NumberMode::Fraction).unwrap();
        assert_eq!(eval.string, "1/4x^4 + C");
        assert_eq!(eval.steps, vec![Step::line("∫ x^3 dx = x^4/4 + C")]);
        assert!(eval.indefinite);
    }

    #[test]
    fn integrate_cube_decimal() {
        let eval = evaluate(Operation::Integrate, &canonical("x^3"), NumberMode::Decimal).unwrap();
        assert_eq!(eval.string, "0.25x^4 + C");
    }

    #[test]
    fn integrate_sine() {
        let eval = evaluate(Operation::Integrate, &canonical("sin(x)"), NumberMode::Fraction).unwrap();
        assert_eq!(eval.string, "-cos(x) + C");
    }

    #[test]
    fn zero_coefficient_has_no_constant() {
        let node = Node::mul(Rational::from(0), Node::Var);
        let eval = evaluate(Operation::Integrate, &node, NumberMode::Fraction).unwrap();
        assert_eq!(eval.string, "0");
    }

    #[test]
    fn product_rule_unsupported() {
        let err = evaluate(Operation::Differentiate, &canonical("x sin(x)"), NumberMode::Fraction)
            .unwrap_err();
        assert_eq!(err.to_string(), "product rule not implemented yet");
    }

    #[test]
    fn variable_name() {
        let engine = Engine::new(EvalOptionsBuilder::new().variable("t").build());
        let eval = engine.evaluate(Operation::Differentiate, &canonical("t^3 + cos(t)")).unwrap();
        assert_eq!(eval.string, "3t^2 - sin(t)");
        assert_eq!(eval.steps[0], Step::line("Using Linearity of Differentiation:"));
        assert_eq!(eval.steps[1], Step::Nested(vec![Step::line("d/dt(t^3) = 3t^(2)")]));
    }

    #[test]
    fn steps_disabled() {
        let engine = Engine::new(EvalOptions::default().into_builder().steps(false).build());
        let eval = engine.evaluate(Operation::Integrate, &canonical("3x + 1")).unwrap();
        assert_eq!(eval.string, "3/2x^2 + x + C");
        assert!(eval.steps.is_empty());
    }

    /// Generates a random canonical-izable tree without products, which both rule tables
    /// support.
    fn random_tree(rng: &mut StdRng, depth: u32) -> Node {
        if depth == 0 || rng.gen_bool(0.3) {
            return match rng.gen_range(0..4) {
                0 => Node::constant((rng.gen_range(-9..=9i32), rng.gen_range(1..=4i32))),
                1 => Node::Var,
                2 => Node::power(Node::Var, rng.gen_range(0..6)),
                _ => {
                    let func = [Function::Sin, Function::Cos, Function::Exp][rng.gen_range(0..3)].clone();
                    Node::func(func, Node::Var)
                },
            };
        }

        if rng.gen_bool(0.5) {
            Node::mul(
                Rational::from((rng.gen_range(-6..=6i32), rng.gen_range(1..=3i32))),
                random_tree(rng, depth - 1),
            )
        } else {
            Node::Sum((0..rng.gen_range(1..4usize)).map(|_| random_tree(rng, depth - 1)).collect())
        }
    }

    #[test]
    fn results_are_canonical() {
        let mut rng = StdRng::seed_from_u64(42);
        let engine = Engine::default();
        for _ in 0..300 {
            let node = normalize::normalize(&random_tree(&mut rng, 4)).unwrap();
            for op in [Operation::Differentiate, Operation::Integrate] {
                let eval = engine.evaluate(op, &node).unwrap();
                assert_eq!(invariant::check(&eval.result), Ok(()), "{:?} of {:?}", op, node);
                assert_eq!(normalize::normalize(&eval.result).unwrap(), eval.result);
            }
        }
    }
}
