use std::process::ExitCode;

use clap::Parser;
use propdoc::cli::{Arguments, ExitStatus};
use propdoc::tracing_config::init_tracing;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match propdoc::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
