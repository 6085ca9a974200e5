use ariadne::Source;
use std::fmt::{self, Display, Formatter};

/// Utility enum to package errors that can occur while running a command.
#[derive(Debug)]
pub enum Error {
    /// The line is not a valid command.
    Usage(String),

    /// The expression could not be parsed, or is not supported.
    Eval {
        /// The expression, which the error's spans point into.
        input: String,

        /// The error.
        err: symcalc_core::Error,
    },
}

impl Error {
    /// Report this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: ariadne::Report
    pub fn report_to_stderr(&self) {
        match self {
            Self::Usage(msg) => eprintln!("{}", msg),
            Self::Eval { input, err } => {
                let report = err.build_report("input", input);
                if let Err(io_err) = report.eprint(("input", Source::from(input))) {
                    eprintln!("{}", io_err);
                }
            },
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => f.write_str(msg),
            Self::Eval { err, .. } => err.fmt(f),
        }
    }
}
