//! Roster name splitter CLI.

use clap::Parser;
use namesplit_cli::cli::Cli;
use namesplit_cli::commands::{SplitRun, exit_code, run_split};
use namesplit_cli::logging::init_logging;
use namesplit_cli::summary::{print_summary, print_termination};
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let code = match run_split(&cli.split_options()) {
        Ok(outcome) => {
            let mut stdout = io::stdout().lock();
            let printed = match &outcome {
                SplitRun::Completed(report) => print_summary(&mut stdout, report),
                SplitRun::Terminated(error) => print_termination(&mut stdout, error),
            };
            match printed {
                Ok(()) => exit_code(&outcome),
                Err(error) => {
                    eprintln!("error: failed to write summary: {error}");
                    1
                }
            }
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(code);
}
