//! Helpers for checking symbolic results in tests.

use std::cell::RefCell;
use crate::{
    calculus::{Dispatch, Operation, Rewritten},
    engine::Engine,
    error::Unsupported,
    node::{Function, Node},
    step::{Step, StepCollector},
};

/// Evaluates the tree at the given value of the variable.
pub fn eval(node: &Node, x: f64) -> f64 {
    match node {
        Node::Const(value) => value.to_f64(),
        Node::Var => x,
        Node::Power(base, exp) => eval(base, x).powi(*exp as i32),
        Node::Mul(coeff, inner) => coeff.to_f64() * eval(inner, x),
        Node::Prod(factors) => factors.iter().map(|factor| eval(factor, x)).product(),
        Node::Sum(terms) => terms.iter().map(|term| eval(term, x)).sum(),
        Node::Func(func, arg) => {
            let arg = eval(arg, x);
            match func {
                Function::Sin => arg.sin(),
                Function::Cos => arg.cos(),
                Function::Exp => arg.exp(),
                Function::Other(name) => panic!("cannot evaluate `{}`", name),
            }
        },
    }
}

/// Approximates the derivative of the tree at `x` with a central difference.
pub fn central_difference(node: &Node, x: f64) -> f64 {
    const DX: f64 = 1e-5;
    (eval(node, x + DX) - eval(node, x - DX)) / (2.0 * DX)
}

/// Records every node rewritten through it before handing it to a default [`Engine`].
#[derive(Debug, Default)]
pub struct Recording {
    engine: Engine,
    visited: RefCell<Vec<Node>>,
}

impl Recording {
    /// Returns the nodes rewritten so far, in order.
    pub fn into_visited(self) -> Vec<Node> {
        self.visited.into_inner()
    }
}

impl Dispatch for Recording {
    fn variable(&self) -> &str {
        self.engine.variable()
    }

    fn normalize(&self, node: &Node) -> Result<Node, Unsupported> {
        self.engine.normalize(node)
    }

    fn rewrite(
        &self,
        op: Operation,
        node: &Node,
        steps: &mut dyn StepCollector<Step>,
    ) -> Result<Rewritten, Unsupported> {
        self.visited.borrow_mut().push(node.clone());
        self.engine.rewrite(op, node, steps)
    }
}
