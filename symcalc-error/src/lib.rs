//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Both the parser and the rewrite engine describe their failures with types implementing
//! [`ErrorKind`]. Most of them derive it with `symcalc_attrs::ErrorKind`, which expands to code
//! referring to this crate by name.

// lets the derive macro's `symcalc_error::` paths resolve inside this crate's own tests
extern crate self as symcalc_error;

use ariadne::{Color, Report};
use std::{fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// A short, single-line description of the error, without any source code context.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use symcalc_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` is not allowed here", name),
        labels = ["this name"],
        help = "remove it",
    )]
    struct Forbidden {
        name: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "nothing to see", labels = [""])]
    struct Plain;

    fn render(err: &Error, src: &str) -> String {
        let mut out = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut out)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(out)).unwrap()
    }

    #[test]
    fn derived_message() {
        let err = Error::new(vec![4..7], Forbidden { name: "tan".to_string() });
        assert_eq!(err.to_string(), "`tan` is not allowed here");
    }

    #[test]
    fn report_contains_label_and_help() {
        let err = Error::new(vec![4..7], Forbidden { name: "tan".to_string() });
        let report = render(&err, "2 + tan(x)");
        assert!(report.contains("`tan` is not allowed here"));
        assert!(report.contains("this name"));
        assert!(report.contains("remove it"));
    }

    #[test]
    fn unit_struct_kind() {
        let err = Error::new(vec![0..1], Plain);
        assert_eq!(err.to_string(), "nothing to see");
        assert!(render(&err, "x").contains("nothing to see"));
    }
}
