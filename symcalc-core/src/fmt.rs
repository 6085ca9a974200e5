//! Rendering of canonical trees as human-readable strings.
//!
//! The printer assumes its input is canonical; it does not insert the parentheses a raw tree
//! might need. For example, `Mul(2, Mul(3, x))` renders as `23x`.

use rug::Rational;
use crate::node::Node;

/// How to render numbers that are not integers. Integers are always rendered in full.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberMode {
    /// Renders exact fractions, such as `1/4`.
    ///
    /// This is the default option.
    #[default]
    Fraction,

    /// Renders the nearest `f64`, such as `0.25`. Values below `1e-4` or from `1e16` up in
    /// magnitude use scientific notation, such as `3e-22`.
    Decimal,
}

impl NumberMode {
    /// Returns the mode with the given name, `fraction` or `decimal`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fraction" => Some(Self::Fraction),
            "decimal" => Some(Self::Decimal),
            _ => None,
        }
    }
}

/// Renders a number.
pub fn render_number(value: &Rational, mode: NumberMode) -> String {
    if *value.denom() == 1 {
        return value.numer().to_string();
    }

    match mode {
        NumberMode::Fraction => format!("{}/{}", value.numer(), value.denom()),
        NumberMode::Decimal => render_float(value.to_f64()),
    }
}

fn render_float(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && (magnitude < 1e-4 || magnitude >= 1e16) {
        format!("{:e}", value)
    } else {
        value.to_string()
    }
}

/// Returns true if a power with this base can be rendered without parentheses around the base.
fn bare_base(base: &Node) -> bool {
    match base {
        Node::Var => true,
        Node::Const(value) => *value >= 0 && *value.denom() == 1,
        _ => false,
    }
}

/// Renders a canonical tree, using `variable` as the name of the variable.
///
/// - A power parenthesizes any base other than the variable or a non-negative integer, as in
///   `(sin(x))^2`.
/// - A scaled expression parenthesizes a sum, a product, or a power of a constant, and renders a
///   coefficient of `-1` as a leading minus.
/// - A sum separates its terms with ` + `, or ` - ` if a term renders with a leading minus.
/// - A product concatenates its factors.
pub fn render(node: &Node, mode: NumberMode, variable: &str) -> String {
    match node {
        Node::Const(value) => render_number(value, mode),
        Node::Var => variable.to_string(),
        Node::Power(base, exp) => {
            let base_str = render(base, mode, variable);
            if bare_base(base) {
                format!("{}^{}", base_str, exp)
            } else {
                format!("({})^{}", base_str, exp)
            }
        },
        Node::Mul(coeff, inner) => {
            let mut inner_str = render(inner, mode, variable);
            // `3(2^3)`, not `32^3`
            let digit_base = matches!(&**inner, Node::Power(base, _) if matches!(**base, Node::Const(_)));
            if digit_base || matches!(**inner, Node::Sum(_) | Node::Prod(_)) {
                inner_str = format!("({})", inner_str);
            }

            if *coeff == -1 {
                format!("-{}", inner_str)
            } else {
                format!("{}{}", render_number(coeff, mode), inner_str)
            }
        },
        Node::Prod(factors) => factors
            .iter()
            .map(|factor| render(factor, mode, variable))
            .collect(),
        Node::Sum(terms) => {
            let mut out = String::new();
            for (i, term) in terms.iter().enumerate() {
                let term_str = render(term, mode, variable);
                match term_str.strip_prefix('-') {
                    _ if i == 0 => out.push_str(&term_str),
                    Some(unsigned) => {
                        out.push_str(" - ");
                        out.push_str(unsigned);
                    },
                    None => {
                        out.push_str(" + ");
                        out.push_str(&term_str);
                    },
                }
            }
            out
        },
        Node::Func(func, arg) => format!("{}({})", func, render(arg, mode, variable)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rug::Integer;
    use crate::node::Function;
    use super::*;

    fn fraction(node: &Node) -> String {
        render(node, NumberMode::Fraction, "x")
    }

    #[test]
    fn numbers() {
        assert_eq!(render_number(&Rational::from(-7), NumberMode::Decimal), "-7");
        assert_eq!(render_number(&Rational::from((1, 4)), NumberMode::Fraction), "1/4");
        assert_eq!(render_number(&Rational::from((1, 4)), NumberMode::Decimal), "0.25");
        assert_eq!(render_number(&Rational::from((-5, 2)), NumberMode::Decimal), "-2.5");
    }

    #[test]
    fn extreme_decimals() {
        let tiny = Rational::from((3, Integer::from(Integer::u_pow_u(10, 22))));
        assert_eq!(render_number(&tiny, NumberMode::Decimal), "3e-22");
        assert_eq!(render_number(&Rational::from((-1, 20000)), NumberMode::Decimal), "-5e-5");
        assert_eq!(render_number(&Rational::from((1, 1000)), NumberMode::Decimal), "0.001");

        let huge = Rational::from((Integer::from(Integer::u_pow_u(10, 20)) * 3 + 1, 2));
        assert_eq!(render_number(&huge, NumberMode::Decimal), "1.5e20");
    }

    #[test]
    fn power_of_function() {
        let node = Node::power(Node::func(Function::Sin, Node::Var), 2);
        assert_eq!(fraction(&node), "(sin(x))^2");
        assert_eq!(render(&Node::power(Node::Var, 3), NumberMode::Fraction, "t"), "t^3");
    }

    #[test]
    fn scaled() {
        let quarter = Node::mul(Rational::from((1, 4)), Node::power(Node::Var, 4));
        assert_eq!(fraction(&quarter), "1/4x^4");
        assert_eq!(render(&quarter, NumberMode::Decimal, "x"), "0.25x^4");

        let negated = Node::mul(Rational::from(-1), Node::func(Function::Cos, Node::Var));
        assert_eq!(fraction(&negated), "-cos(x)");

        let product = Node::mul(
            Rational::from(3),
            Node::Prod(vec![Node::Var, Node::func(Function::Exp, Node::Var)]),
        );
        assert_eq!(fraction(&product), "3(xexp(x))");

        let cube = Node::mul(Rational::from(3), Node::power(Node::constant(2), 3));
        assert_eq!(fraction(&cube), "3(2^3)");
        assert_eq!(fraction(&Node::power(Node::constant(2), 3)), "2^3");
    }

    #[test]
    fn sum_signs() {
        let node = Node::Sum(vec![
            Node::mul(Rational::from(-1), Node::power(Node::Var, 2)),
            Node::mul(Rational::from(-3), Node::Var),
            Node::func(Function::Sin, Node::Var),
            Node::constant(-4),
        ]);
        assert_eq!(fraction(&node), "-x^2 - 3x + sin(x) - 4");
    }
}
