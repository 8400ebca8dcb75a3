// Terminal logging.
// Debug traces are shown only in verbose mode.

use std::io::{self, IsTerminal};

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// How much the tool reports about its own progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Errors and their follow-up hints share stdout with the gist URLs.
const TERMINAL_MODE: TerminalMode = TerminalMode::Stdout;

/// Plain output when stdout is redirected.
fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Install the global terminal logger.
pub fn init(verbosity: Verbosity) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    TermLogger::init(
        verbosity.level_filter(),
        config,
        TERMINAL_MODE,
        color_choice(io::stdout().is_terminal()),
    )
}
