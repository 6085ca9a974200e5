//! Rule tables for differentiation and integration.
//!
//! Each rule table matches on the variant of a canonical [`Node`] and builds a raw result, which
//! it normalizes before returning. Rules for compound nodes recurse into their children through a
//! [`Dispatch`] implementation rather than calling each other directly, so that every sub-result
//! passes through the same entry point (and the same logging and normalization) as the top-level
//! call.
//!
//! The first failure found in a depth-first walk of the tree is returned unchanged; the remaining
//! siblings are not rewritten.

pub mod derivative;
pub mod integral;

use crate::{error::Unsupported, node::Node, step::{Step, StepCollector}};

/// A calculus operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Differentiate,
    Integrate,
}

/// The result of rewriting a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    /// The canonical result.
    pub result: Node,

    /// Whether the result is an antiderivative that needs a constant of integration. This is
    /// always false for derivatives.
    pub indefinite: bool,
}

/// The entry point the rule tables use to normalize and rewrite sub-expressions.
pub trait Dispatch {
    /// The name of the variable, used in derivation steps.
    fn variable(&self) -> &str;

    /// Normalizes a tree.
    fn normalize(&self, node: &Node) -> Result<Node, Unsupported>;

    /// Applies the given operation to a canonical tree.
    fn rewrite(
        &self,
        op: Operation,
        node: &Node,
        steps: &mut dyn StepCollector<Step>,
    ) -> Result<Rewritten, Unsupported>;
}
