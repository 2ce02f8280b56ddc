use std::io::{self, Write};

use anyhow::{Context, Result};

use super::super::args::{OutputFormat, ParseCommand};
use super::super::exit_status::ExitStatus;
use super::super::report::{print_parse_errors, write_json, write_text};
use crate::core::DocgenContext;

pub fn parse(cmd: ParseCommand) -> Result<ExitStatus> {
    let ctx = DocgenContext::new(&cmd.common)?;
    let results = ctx.document();

    let mut stdout = io::stdout().lock();
    match cmd.format {
        OutputFormat::Text => write_text(&results, ctx.files.len(), &mut stdout),
        OutputFormat::Json => write_json(&results, &mut stdout),
    }
    .and_then(|()| stdout.flush())
    .context("Failed to write report")?;

    print_parse_errors(&results.parse_errors, ctx.verbose);

    if results.parse_errors.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
