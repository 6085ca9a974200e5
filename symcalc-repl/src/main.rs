mod error;
mod session;

use clap::{Parser, Subcommand, ValueEnum};
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::{format_evaluation, Session};
use std::io::{self, BufRead, IsTerminal};
use symcalc_core::{evaluate_str, EvalOptions, EvalOptionsBuilder, NumberMode, Operation};
use tracing_subscriber::EnvFilter;

/// Differentiate and integrate expressions in a single variable.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How to show numbers that are not integers
    #[arg(long, value_enum, default_value_t = Mode::Fraction)]
    mode: Mode,

    /// Show the steps of each derivation
    #[arg(long)]
    steps: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Fraction,
    Decimal,
}

impl From<Mode> for NumberMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Fraction => NumberMode::Fraction,
            Mode::Decimal => NumberMode::Decimal,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Differentiate an expression
    Diff {
        /// The expression to differentiate
        expression: String,
    },

    /// Integrate an expression
    Int {
        /// The expression to integrate
        expression: String,
    },
}

/// Evaluates a single expression and prints the result, or reports the error.
fn run_once(op: Operation, input: String, options: &EvalOptions) -> Result<(), Error> {
    let eval = evaluate_str(op, &input, options).map_err(|err| Error::Eval { input: input.clone(), err })?;
    println!("{}", format_evaluation(&eval));
    Ok(())
}

/// Runs one line of input in the session, printing the output or the error.
fn run_line(session: &mut Session, line: &str) {
    match session.execute(line) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (),
        Err(err) => err.report_to_stderr(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = EvalOptionsBuilder::new()
        .mode(cli.mode.into())
        .steps(cli.steps)
        .build();

    match cli.command {
        Some(Commands::Diff { expression }) => {
            if let Err(err) = run_once(Operation::Differentiate, expression, &options) {
                err.report_to_stderr();
                std::process::exit(1);
            }
        },
        Some(Commands::Int { expression }) => {
            if let Err(err) = run_once(Operation::Integrate, expression, &options) {
                err.report_to_stderr();
                std::process::exit(1);
            }
        },
        None if !io::stdin().is_terminal() => {
            // read commands from stdin, one per line
            let mut session = Session::new(options);
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) if line.trim().is_empty() => (),
                    Ok(line) => run_line(&mut session, &line),
                    Err(err) => {
                        eprintln!("{}", err);
                        break;
                    },
                }
            }
        },
        None => {
            // run the repl / interactive mode
            let mut rl = DefaultEditor::new().expect("failed to initialize the terminal");
            let mut session = Session::new(options);

            fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
                let input = rl.readline("> ")?;
                if input.trim().is_empty() {
                    return Ok(());
                }

                rl.add_history_entry(&input)?;

                run_line(session, &input);
                Ok(())
            }

            loop {
                if let Err(err) = process_line(&mut rl, &mut session) {
                    match err {
                        ReadlineError::Eof | ReadlineError::Interrupted => (),
                        _ => eprintln!("{}", err),
                    }
                    break;
                }
            }
        },
    }
}
