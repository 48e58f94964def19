mod args;
mod error;
mod line;

use args::Cli;
use clap::Parser;
use env_logger::Env;
use line::Options;
use log::{error, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, BufRead, IsTerminal}, process::ExitCode};

/// Processes one line of input, printing the result to stdout or the error to stderr. Returns
/// `false` if the line produced an error.
fn read_eval(input: &str, options: &Options) -> bool {
    if input.trim().is_empty() {
        return true;
    }

    match line::process(input, options) {
        Ok(out) => {
            print!("{}", out);
            true
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr(input) {
                error!("failed to report error: {}", io_err);
            }
            false
        },
    }
}

/// Processes every line of the given input, returning the number of lines that produced an error.
fn read_eval_all<'a>(lines: impl IntoIterator<Item = &'a str>, options: &Options) -> usize {
    lines.into_iter()
        .filter(|line| !read_eval(line, options))
        .count()
}

fn process_line(rl: &mut DefaultEditor, options: &Options) -> Result<(), ReadlineError> {
    let input = rl.readline("> ")?;
    if input.trim().is_empty() {
        return Ok(());
    }

    rl.add_history_entry(&input)?;

    read_eval(&input, options);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level.into());
    }
    logger.init();

    let options = Options {
        var: cli.var,
        simplify: !cli.no_simplify,
        steps: cli.steps,
        log_domain: cli.log_domain.into(),
    };
    info!("differentiating with respect to `{}`", options.var);

    let failures = if let Some(path) = cli.file {
        // run source file
        let input = match fs::read_to_string(&path) {
            Ok(input) => input,
            Err(err) => {
                eprintln!("could not read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            },
        };
        read_eval_all(input.lines(), &options)
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut failures = 0;
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => failures += usize::from(!read_eval(&line, &options)),
                Err(err) => {
                    eprintln!("could not read stdin: {}", err);
                    return ExitCode::FAILURE;
                },
            }
        }
        failures
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("could not start the interactive shell: {}", err);
                return ExitCode::FAILURE;
            },
        };

        loop {
            if let Err(err) = process_line(&mut rl, &options) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }

        // errors in interactive mode are reported as they happen
        0
    };

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
