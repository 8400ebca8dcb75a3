mod app;
mod cache;
mod cli;
mod config;
mod error;
mod github;
mod logging;
mod report;
mod validate;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{EXIT_INVALID_ARGUMENT, GistError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(usage_exit_code(&e));
        }
    };

    let config = Config::from_cli(cli);
    let verbosity = config.as_ref().map(|c| c.verbosity).unwrap_or_default();
    let _ = logging::init(verbosity);

    let result = match config {
        Ok(config) => app::run(&config, &mut io::stdout()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(report_failure(&e)),
    }
}

/// Usage errors share the bad-argument code; `--help` and `--version` succeed.
fn usage_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_INVALID_ARGUMENT
    } else {
        0
    }
}

/// Follow-up advice printed after the error itself.
fn failure_hint(err: &GistError) -> Option<&'static str> {
    match err {
        GistError::Status { .. } => Some("Please ensure that GitHub username is correct"),
        _ => None,
    }
}

/// Log a failed run and return its exit code.
fn report_failure(err: &GistError) -> u8 {
    log::error!("{}", err);
    if let Some(hint) = failure_hint(err) {
        log::info!("{}", hint);
    }
    err.exit_code()
}
