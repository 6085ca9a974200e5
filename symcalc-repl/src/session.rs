//! Commands understood by the REPL, and the state they act on.

use symcalc_core::{
    canonicalize,
    evaluate_str,
    fmt::render,
    step::Outline,
    EvalOptions,
    Evaluation,
    NumberMode,
    Operation,
};
use tracing::debug;
use crate::error::Error;

const HELP: &str = "\
commands:
  d <expr>                  differentiate the expression
  i <expr>                  integrate the expression
  n <expr>                  show the normalized form of the expression
  :mode fraction|decimal    set how non-integer numbers are shown
  :steps on|off             show or hide the steps of each derivation
  :help                     show this message";

/// A single line of input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Eval(Operation, &'a str),
    Normalize(&'a str),
    Mode(NumberMode),
    Steps(bool),
    Help,
}

impl<'a> Command<'a> {
    /// Parses a line of input.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let line = line.trim();
        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, arg)| (name, arg.trim()));

        let expr = |arg: &'a str| {
            if arg.is_empty() {
                Err(Error::Usage(format!("`{}` needs an expression, like `{} x^2`", name, name)))
            } else {
                Ok(arg)
            }
        };

        match name {
            "d" => Ok(Self::Eval(Operation::Differentiate, expr(arg)?)),
            "i" => Ok(Self::Eval(Operation::Integrate, expr(arg)?)),
            "n" => Ok(Self::Normalize(expr(arg)?)),
            ":mode" => NumberMode::from_name(arg)
                .map(Self::Mode)
                .ok_or_else(|| Error::Usage("usage: :mode fraction|decimal".to_string())),
            ":steps" => match arg {
                "on" => Ok(Self::Steps(true)),
                "off" => Ok(Self::Steps(false)),
                _ => Err(Error::Usage("usage: :steps on|off".to_string())),
            },
            ":help" => Ok(Self::Help),
            _ => Err(Error::Usage(format!("unknown command `{}`, type :help for a list of commands", name))),
        }
    }
}

/// Formats an evaluation, with its steps first if there are any.
pub fn format_evaluation(eval: &Evaluation) -> String {
    if eval.steps.is_empty() {
        eval.string.clone()
    } else {
        format!("{}{}", Outline(&eval.steps), eval.string)
    }
}

/// The options that persist between commands.
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: EvalOptions,
}

impl Session {
    /// Creates a session with the given options.
    pub fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Runs a line of input, returning the text to print, if any.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, Error> {
        let command = Command::parse(line)?;
        debug!(?command, "executing");

        match command {
            Command::Eval(op, input) => {
                let eval = evaluate_str(op, input, &self.options)
                    .map_err(|err| Error::Eval { input: input.to_string(), err })?;
                Ok(Some(format_evaluation(&eval)))
            },
            Command::Normalize(input) => {
                let canonical = canonicalize(input)
                    .map_err(|err| Error::Eval { input: input.to_string(), err })?;
                Ok(Some(render(&canonical.node, self.options.mode, &canonical.variable)))
            },
            Command::Mode(mode) => {
                self.options.mode = mode;
                Ok(None)
            },
            Command::Steps(steps) => {
                self.options.steps = steps;
                Ok(None)
            },
            Command::Help => Ok(Some(HELP.to_string())),
        }
    }
}
