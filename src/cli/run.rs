use anyhow::Result;

use super::{
    args::Command,
    commands::{init::init, parse::parse},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of `command`.
pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Parse(cmd) => parse(cmd),
        Command::Init => init(),
    }
}
