//! The derivation trace produced by the rewrite rules.

use std::fmt::{self, Display, Formatter};

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you don't
/// want to know the steps taken by an algorithm.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// A step of a derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// A single line of explanation, such as `d/dx(x) = 1`.
    Line(String),

    /// The steps taken for one term of a sum.
    Nested(Vec<Step>),
}

impl Step {
    /// Creates a [`Step::Line`].
    pub fn line(text: impl Into<String>) -> Self {
        Self::Line(text.into())
    }
}

/// Displays a derivation as an indented bullet list, one line per [`Step::Line`]. Each level of
/// nesting indents its lines by two more spaces.
#[derive(Debug, Clone, Copy)]
pub struct Outline<'a>(pub &'a [Step]);

impl Outline<'_> {
    fn write(steps: &[Step], depth: usize, f: &mut Formatter<'_>) -> fmt::Result {
        for step in steps {
            match step {
                Step::Line(text) => writeln!(f, "{:indent$}- {}", "", text, indent = depth * 2)?,
                Step::Nested(inner) => Self::write(inner, depth + 1, f)?,
            }
        }
        Ok(())
    }
}

impl Display for Outline<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::write(self.0, 0, f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn unit_collector_discards() {
        let collector: &mut dyn StepCollector<Step> = &mut ();
        collector.push(Step::line("ignored"));
    }

    #[test]
    fn outline() {
        let steps = vec![
            Step::line("Using Linearity of Differentiation:"),
            Step::Nested(vec![Step::line("d/dx(x) = 1")]),
            Step::Nested(vec![
                Step::line("Extracted the constant 3:"),
                Step::line("d/dx(sin(x)) = cos(x)"),
            ]),
        ];
        assert_eq!(Outline(&steps).to_string(), "\
- Using Linearity of Differentiation:
  - d/dx(x) = 1
  - Extracted the constant 3:
  - d/dx(sin(x)) = cos(x)
");
    }
}
