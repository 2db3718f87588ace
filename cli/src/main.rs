//! Terminal host for the student management screen.
//!
//! Does the real I/O (ureq for HTTP, stdin/stdout for the user) around the
//! `student-core` controller.

mod config;
mod repl;
mod terminal;
mod transport;

use clap::Parser;
use student_core::{
    CachedList, EagerList, FixedUser, HttpStudentSource, StudentCrud, StudentList,
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{Config, Refresh};
use crate::terminal::TerminalNotifier;
use crate::transport::UreqTransport;

#[derive(Debug, Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging setup failed: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )?;
    Ok(())
}

fn run_with<L: StudentList>(config: &Config, list: L) -> Result<(), CliError> {
    let source = HttpStudentSource::new(&config.api_url, UreqTransport::new());
    let mut crud = StudentCrud::new(
        source,
        list,
        TerminalNotifier::stdio(config.yes),
        FixedUser(config.user_id),
    );
    repl::run(&mut crud)?;
    Ok(())
}

fn main() -> Result<(), CliError> {
    let config = Config::parse();
    init_logging(config.verbose)?;
    info!(api_url = %config.api_url, refresh = ?config.refresh, "starting");

    match config.refresh {
        Refresh::Eager => run_with(&config, EagerList::new()),
        Refresh::Cached => run_with(&config, CachedList::new()),
    }
}
