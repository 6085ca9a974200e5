//! Canonicalization and rule-based calculus for expressions in a single variable.
//!
//! An expression goes through three stages:
//!
//! 1. It is parsed by [`symcalc_parser`] and converted to a raw [`Node`] tree.
//! 2. It is reduced to canonical form by [`normalize()`].
//! 3. It is differentiated or integrated by an [`Engine`], which applies the rule tables in
//!    [`calculus`], normalizing every intermediate result, and renders the result with
//!    [`fmt::render`].
//!
//! [`differentiate_str`] and [`integrate_str`] run all three stages.
//!
//! ```
//! use symcalc_core::{differentiate_str, integrate_str, EvalOptions};
//!
//! let eval = differentiate_str("7x^3 - 2x", &EvalOptions::default()).unwrap();
//! assert_eq!(eval.string, "21x^2 - 2");
//!
//! let eval = integrate_str("sin(x)", &EvalOptions::default()).unwrap();
//! assert_eq!(eval.string, "-cos(x) + C");
//! ```
//!
//! Only a fixed set of rules is supported: constant multiples, sums, powers of the variable, and
//! the functions `sin`, `cos` and `exp` applied directly to the variable. Anything that would need
//! the product rule, the chain rule, or logarithms is reported as [`Unsupported`].

pub mod calculus;
pub mod convert;
pub mod engine;
pub mod error;
pub mod fmt;
pub mod invariant;
pub mod node;
pub mod normalize;
pub mod step;

#[cfg(test)]
mod testing;

pub use calculus::Operation;
pub use engine::{evaluate, Engine, EvalOptions, EvalOptionsBuilder, Evaluation};
pub use error::{Error, Reason, Unsupported};
pub use fmt::NumberMode;
pub use node::{Function, Node};
pub use normalize::normalize;
pub use step::{Step, StepCollector};

use symcalc_parser::parser::parse;

/// An expression parsed and normalized from source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    /// The canonical tree.
    pub node: Node,

    /// The name of the variable used in the source code.
    pub variable: String,
}

/// Parses and normalizes an expression.
pub fn canonicalize(source: &str) -> Result<Canonical, Error> {
    let parsed = parse(source)?;
    let node = normalize(&Node::from(&parsed.expr))?;
    Ok(Canonical { node, variable: parsed.variable })
}

/// Parses an expression and applies the given operation to it. The variable name in `options` is
/// replaced by the one used in the source code.
pub fn evaluate_str(op: Operation, source: &str, options: &EvalOptions) -> Result<Evaluation, Error> {
    let Canonical { node, variable } = canonicalize(source)?;
    let options = options.clone().into_builder().variable(variable).build();
    Ok(Engine::new(options).evaluate(op, &node)?)
}

/// Parses and differentiates an expression.
pub fn differentiate_str(source: &str, options: &EvalOptions) -> Result<Evaluation, Error> {
    evaluate_str(Operation::Differentiate, source, options)
}

/// Parses and integrates an expression.
pub fn integrate_str(source: &str, options: &EvalOptions) -> Result<Evaluation, Error> {
    evaluate_str(Operation::Integrate, source, options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn decimal() -> EvalOptions {
        EvalOptionsBuilder::new().mode(NumberMode::Decimal).build()
    }

    #[test]
    fn canonical_function_power() {
        let canonical = canonicalize("sin^2(t)").unwrap();
        assert_eq!(canonical.node, Node::power(Node::func(Function::Sin, Node::Var), 2));
        assert_eq!(canonical.variable, "t");
    }

    #[test]
    fn differentiate_source() {
        assert_eq!(differentiate_str("x^2", &decimal()).unwrap().string, "2x");
        assert_eq!(differentiate_str("5", &decimal()).unwrap().string, "0");
        assert_eq!(
            differentiate_str("-2.5y^2 + exp(y)", &EvalOptions::default()).unwrap().string,
            "-5y + exp(y)",
        );
    }

    #[test]
    fn integrate_source() {
        assert_eq!(integrate_str("x^3", &EvalOptions::default()).unwrap().string, "1/4x^4 + C");
        assert_eq!(integrate_str("x^3", &decimal()).unwrap().string, "0.25x^4 + C");
        assert_eq!(
            integrate_str("2 - cos(u)", &EvalOptions::default()).unwrap().string,
            "2u - sin(u) + C",
        );
    }

    #[test]
    fn errors() {
        assert!(matches!(differentiate_str("x + y", &decimal()), Err(Error::Parse(_))));
        assert!(matches!(
            differentiate_str("x sin(x)", &decimal()),
            Err(Error::Unsupported(Unsupported { reason: Reason::ProductRule })),
        ));
        assert!(matches!(
            integrate_str("sin(x^2)", &decimal()),
            Err(Error::Unsupported(Unsupported { reason: Reason::FunctionArgument { .. } })),
        ));
        assert_eq!(
            integrate_str("cis(x)", &decimal()).unwrap_err().to_string(),
            "unknown function `cis`",
        );
    }
}
