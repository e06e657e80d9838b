use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use expmax::ui::cli::drivers::{InquireDriver, ReaderDriver};
use expmax::ui::cli::{Cli, run};
use expmax::ui::types::RunConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = RunConfig::from(Cli::parse());

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    let mut err = io::stderr();
    let result = if stdin.is_terminal() {
        run(&config, InquireDriver::new(), &mut out, &mut err)
    } else {
        run(&config, ReaderDriver::new(stdin.lock()), &mut out, &mut err)
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
