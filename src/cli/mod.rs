//! Command-line interface layer.

use anyhow::Result;

pub mod args;
mod commands;
pub mod exit_status;
pub mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, OutputFormat};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(command)
}
