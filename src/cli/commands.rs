//! Entry-point dispatch: parse arguments, attempt setup, report failure

use std::ffi::OsString;
use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;

use crate::cli::args::Cli;
use crate::cli::error::SetupError;
use crate::cli::output;
use crate::exitcode;
use crate::logging::setup_logging;
use crate::setup;

/// Run the entry point against the process's real stderr.
pub fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    run_with(argv, &mut io::stderr())
}

/// Run the entry point with injected arguments and stderr sink.
///
/// `argv` must include the program name as its first element, mirroring
/// `std::env::args_os`.
pub fn run_with<I, T, W>(argv: I, stderr: &mut W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return exitcode::OK;
        }
        // No argument set exists yet: debug defaults to off and the
        // parser's diagnostic becomes the error message.
        Err(e) => {
            output::report_failure(stderr, false, &SetupError::Usage(usage_message(&e)));
            return exitcode::FAILURE;
        }
    };

    setup_logging(cli.debug);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        debug!("generating completion file for {shell:?}");
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return exitcode::OK;
    }

    match setup::run_wizard(&cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::report_failure(stderr, cli.debug, &e);
            exitcode::FAILURE
        }
    }
}

/// First line of a clap diagnostic, without the `error: ` prefix.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or("invalid arguments");
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}
